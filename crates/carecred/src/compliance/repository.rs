use super::domain::{CredentialRecord, OrganisationId, Worker, WorkerId};

/// Storage abstraction for worker rows so the service module can be exercised
/// in isolation. Workers are only ever inserted or updated (deactivation is a
/// status change), never deleted.
pub trait WorkerRepository: Send + Sync {
    fn insert(&self, worker: Worker) -> Result<Worker, RepositoryError>;
    fn update(&self, worker: Worker) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &WorkerId) -> Result<Option<Worker>, RepositoryError>;
    fn for_organisation(
        &self,
        organisation_id: &OrganisationId,
    ) -> Result<Vec<Worker>, RepositoryError>;
}

/// Read/append storage abstraction for credential records. Records are never
/// mutated in place; renewals are appended and the evaluator picks the most
/// recent record per definition.
pub trait CredentialRecordRepository: Send + Sync {
    fn insert(&self, record: CredentialRecord) -> Result<CredentialRecord, RepositoryError>;
    fn for_worker(&self, worker_id: &WorkerId) -> Result<Vec<CredentialRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
