//! Worker credential compliance: catalog, evaluator, service facade, and
//! HTTP surface.
//!
//! The evaluator is the deterministic core: a pure function family over a
//! worker's role, the credential definition catalog, and the worker's
//! recorded credentials, producing per-credential and aggregate compliance
//! states. Persistence and document storage stay behind the repository
//! traits; the evaluation clock is an explicit parameter.

pub mod catalog;
pub mod domain;
pub mod evaluation;
pub mod report;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::CredentialCatalog;
pub use domain::{
    ComplianceStatus, CredentialCategory, CredentialDefinition, CredentialRecord,
    CredentialStatus, DefinitionId, GroupId, OrganisationId, RecordId, ValidityPeriod, Worker,
    WorkerId, WorkerRole, WorkerStatus,
};
pub use evaluation::{
    applicable_requirements, resolve_status, validate_record, ComplianceEvaluator,
    ComplianceReport, InvalidRecord, Requirement, EXPIRY_WARNING_DAYS,
};
pub use report::{ChecklistRow, GroupRow, OrganisationSummaryView, WorkerComplianceView};
pub use repository::{CredentialRecordRepository, RepositoryError, WorkerRepository};
pub use router::compliance_router;
pub use service::{
    ComplianceService, ComplianceServiceError, CredentialSubmission, WorkerSubmission,
};
