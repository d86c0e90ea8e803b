use std::collections::BTreeMap;

use super::super::domain::{
    CredentialDefinition, CredentialRecord, CredentialStatus, DefinitionId, GroupId, WorkerRole,
};
use chrono::NaiveDate;

use super::status::resolve_status;

/// One logical requirement from the applicable required set: either a single
/// mandatory definition or a mutual-exclusion group collapsed into one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    Single(CredentialDefinition),
    Alternatives {
        group: GroupId,
        members: Vec<CredentialDefinition>,
    },
}

impl Requirement {
    pub fn label(&self) -> String {
        match self {
            Requirement::Single(definition) => definition.display_name.clone(),
            Requirement::Alternatives { members, .. } => members
                .iter()
                .map(|member| member.display_name.as_str())
                .collect::<Vec<_>>()
                .join(" OR "),
        }
    }

    /// Resolve the requirement's status from the per-definition record map.
    ///
    /// For a group the most favorable member status wins
    /// (`Valid > ExpiringSoon > Expired`); `Missing` only applies when no
    /// member has any record at all.
    pub(crate) fn status(
        &self,
        latest: &BTreeMap<DefinitionId, &CredentialRecord>,
        today: NaiveDate,
    ) -> CredentialStatus {
        match self {
            Requirement::Single(definition) => {
                resolve_status(latest.get(&definition.id).copied(), today)
            }
            Requirement::Alternatives { members, .. } => members
                .iter()
                .filter_map(|member| latest.get(&member.id).copied())
                .map(|record| resolve_status(Some(record), today))
                .min_by_key(|status| status.favorability())
                .unwrap_or(CredentialStatus::Missing),
        }
    }
}

/// Build the applicable required set for a role: every mandatory definition
/// whose role scope is empty or names the role, with each alternatives group
/// collapsed into a single requirement at the position of its first member.
pub fn applicable_requirements(
    definitions: &[CredentialDefinition],
    role: WorkerRole,
) -> Vec<Requirement> {
    let mut requirements = Vec::new();
    let mut seen_groups: Vec<GroupId> = Vec::new();

    for definition in definitions {
        if !definition.mandatory || !definition.applies_to(role) {
            continue;
        }

        match &definition.alternatives_group {
            None => requirements.push(Requirement::Single(definition.clone())),
            Some(group) => {
                if seen_groups.contains(group) {
                    continue;
                }
                seen_groups.push(group.clone());

                let members = definitions
                    .iter()
                    .filter(|candidate| {
                        candidate.mandatory
                            && candidate.applies_to(role)
                            && candidate.alternatives_group.as_ref() == Some(group)
                    })
                    .cloned()
                    .collect();

                requirements.push(Requirement::Alternatives {
                    group: group.clone(),
                    members,
                });
            }
        }
    }

    requirements
}
