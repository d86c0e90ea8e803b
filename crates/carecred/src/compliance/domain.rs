use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for workers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorkerId(pub String);

/// Identifier wrapper for organisations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrganisationId(pub String);

/// Identifier wrapper for credential definitions (catalog reference data).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DefinitionId(pub String);

/// Identifier wrapper for mutual-exclusion groups of definitions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupId(pub String);

/// Identifier wrapper for submitted credential records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub String);

/// Roles recognised across the credential catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerRole {
    CareWorker,
    RegisteredNurse,
    AlliedHealthProfessional,
}

impl WorkerRole {
    pub const fn label(self) -> &'static str {
        match self {
            WorkerRole::CareWorker => "Care Worker",
            WorkerRole::RegisteredNurse => "Registered Nurse",
            WorkerRole::AlliedHealthProfessional => "Allied Health Professional",
        }
    }
}

/// Catalog categories mirroring the compliance checklist sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialCategory {
    Screening,
    Qualification,
    Training,
    CoreCompetency,
}

impl CredentialCategory {
    pub const fn label(self) -> &'static str {
        match self {
            CredentialCategory::Screening => "Screening",
            CredentialCategory::Qualification => "Qualifications",
            CredentialCategory::Training => "Mandatory Training",
            CredentialCategory::CoreCompetency => "Core Competencies",
        }
    }

    pub const fn ordered() -> [CredentialCategory; 4] {
        [
            CredentialCategory::Screening,
            CredentialCategory::Qualification,
            CredentialCategory::Training,
            CredentialCategory::CoreCompetency,
        ]
    }
}

/// How long a credential of a given definition remains current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidityPeriod {
    /// Never expires once granted (e.g. a qualification certificate).
    Permanent,
    /// Expires a fixed number of days after issue.
    FixedDuration { days: u32 },
    /// Renewal cadence is dictated by the registering body for the role.
    RoleDependent,
}

impl ValidityPeriod {
    /// Human-readable validity for checklist rows, e.g. "12 months".
    pub fn describe(self) -> String {
        match self {
            ValidityPeriod::Permanent => "Does not expire".to_string(),
            ValidityPeriod::FixedDuration { days } if days % 365 == 0 => {
                match days / 365 {
                    1 => "12 months".to_string(),
                    years => format!("{years} years"),
                }
            }
            ValidityPeriod::FixedDuration { days } => format!("{days} days"),
            ValidityPeriod::RoleDependent => "Set by the registering body".to_string(),
        }
    }
}

/// A catalog entry describing one type of certification or check an
/// organisation recognises. Reference data, created by configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialDefinition {
    pub id: DefinitionId,
    pub display_name: String,
    pub category: CredentialCategory,
    pub validity: ValidityPeriod,
    pub mandatory: bool,
    /// Roles this definition applies to; `None` means every role.
    pub role_scope: Option<Vec<WorkerRole>>,
    /// Definitions sharing a group id are mutually satisfying: a worker needs
    /// one valid credential from the group, not all of them.
    pub alternatives_group: Option<GroupId>,
}

impl CredentialDefinition {
    pub fn applies_to(&self, role: WorkerRole) -> bool {
        match &self.role_scope {
            Some(roles) => roles.contains(&role),
            None => true,
        }
    }
}

/// A concrete credential a worker has submitted. Records are never mutated in
/// place; a renewal is a new record superseding the older one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub id: RecordId,
    pub worker_id: WorkerId,
    pub definition_id: DefinitionId,
    pub issue_date: NaiveDate,
    /// Absent means the credential does not expire.
    pub expiry_date: Option<NaiveDate>,
    /// Opaque pointer into external document storage.
    pub evidence_reference: Option<String>,
}

/// Whether a worker row is live. Workers are never deleted so their credential
/// trail stays auditable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerStatus {
    Active,
    Deactivated,
}

/// A worker employed by an organisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub id: WorkerId,
    pub name: String,
    pub role: WorkerRole,
    pub organisation_id: OrganisationId,
    pub status: WorkerStatus,
}

/// Derived state of one credential requirement. Never persisted; always
/// recomputed from the underlying dates so it cannot drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialStatus {
    Valid,
    ExpiringSoon,
    Expired,
    Missing,
}

impl CredentialStatus {
    pub const fn label(self) -> &'static str {
        match self {
            CredentialStatus::Valid => "Valid",
            CredentialStatus::ExpiringSoon => "Expiring Soon",
            CredentialStatus::Expired => "Expired",
            CredentialStatus::Missing => "Not Uploaded",
        }
    }

    /// Precedence used when collapsing a mutual-exclusion group: the most
    /// favorable member status wins (`Valid > ExpiringSoon > Expired`).
    pub(crate) const fn favorability(self) -> u8 {
        match self {
            CredentialStatus::Valid => 0,
            CredentialStatus::ExpiringSoon => 1,
            CredentialStatus::Expired => 2,
            CredentialStatus::Missing => 3,
        }
    }

    /// A requirement is satisfied when its credential is present and not past
    /// expiry.
    pub const fn satisfies_requirement(self) -> bool {
        matches!(
            self,
            CredentialStatus::Valid | CredentialStatus::ExpiringSoon
        )
    }
}

/// Aggregate pass/warn/fail classification for a worker against their
/// applicable requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    AtRisk,
    NonCompliant,
}

impl ComplianceStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "Fully Compliant",
            ComplianceStatus::AtRisk => "Action Needed",
            ComplianceStatus::NonCompliant => "Non-Compliant",
        }
    }
}
