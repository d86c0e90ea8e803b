mod requirements;
mod status;

pub use requirements::{applicable_requirements, Requirement};
pub use status::{resolve_status, validate_record, InvalidRecord, EXPIRY_WARNING_DAYS};

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::catalog::CredentialCatalog;
use super::domain::{
    ComplianceStatus, CredentialRecord, CredentialStatus, DefinitionId, GroupId, WorkerRole,
};

/// Stateless evaluator resolving a worker's credential records against the
/// catalog. Holds no mutable state, performs no I/O, and takes the evaluation
/// date explicitly, so identical inputs always produce identical reports and
/// concurrent invocations need no coordination.
#[derive(Debug, Clone)]
pub struct ComplianceEvaluator {
    catalog: CredentialCatalog,
}

impl ComplianceEvaluator {
    pub fn new(catalog: CredentialCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &CredentialCatalog {
        &self.catalog
    }

    /// Evaluate a worker's records as of `today`.
    ///
    /// Records referencing definitions outside the catalog are ignored as
    /// orphaned; records with an expiry before their issue date are excluded
    /// and reported in `warnings`. Both per-definition and collapsed per-group
    /// statuses are returned alongside the overall rollup.
    pub fn evaluate(
        &self,
        role: WorkerRole,
        records: &[CredentialRecord],
        today: NaiveDate,
    ) -> ComplianceReport {
        let (latest, warnings) = status::latest_records(records);

        let mut per_definition = BTreeMap::new();
        for definition in self.catalog.definitions_for_role(role) {
            let resolved = resolve_status(latest.get(&definition.id).copied(), today);
            per_definition.insert(definition.id.clone(), resolved);
        }

        let requirements = applicable_requirements(self.catalog.definitions(), role);

        let mut per_group = BTreeMap::new();
        let mut overall = ComplianceStatus::Compliant;
        for requirement in &requirements {
            let resolved = requirement.status(&latest, today);
            if let Requirement::Alternatives { group, .. } = requirement {
                per_group.insert(group.clone(), resolved);
            }
            overall = escalate(overall, resolved);
        }

        ComplianceReport {
            per_definition,
            per_group,
            overall,
            warnings,
        }
    }
}

/// Fold one required item's status into the aggregate. Strict three-tier
/// precedence: `NonCompliant` dominates `AtRisk` dominates `Compliant`.
fn escalate(current: ComplianceStatus, resolved: CredentialStatus) -> ComplianceStatus {
    match resolved {
        CredentialStatus::Expired | CredentialStatus::Missing => ComplianceStatus::NonCompliant,
        CredentialStatus::ExpiringSoon if current == ComplianceStatus::Compliant => {
            ComplianceStatus::AtRisk
        }
        _ => current,
    }
}

/// Evaluation output: per-definition and per-group statuses plus the overall
/// rollup, with any data-entry warnings from excluded records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub per_definition: BTreeMap<DefinitionId, CredentialStatus>,
    pub per_group: BTreeMap<GroupId, CredentialStatus>,
    pub overall: ComplianceStatus,
    pub warnings: Vec<InvalidRecord>,
}
