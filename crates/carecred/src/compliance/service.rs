use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{info, warn};

use super::domain::{
    CredentialRecord, OrganisationId, RecordId, Worker, WorkerId, WorkerRole, WorkerStatus,
};
use super::evaluation::{validate_record, ComplianceEvaluator, InvalidRecord};
use super::report::{OrganisationSummaryView, WorkerComplianceView};
use super::repository::{CredentialRecordRepository, RepositoryError, WorkerRepository};

/// Intake payload for registering a worker.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkerSubmission {
    pub name: String,
    pub role: WorkerRole,
    pub organisation_id: OrganisationId,
}

/// Intake payload for uploading a credential record.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialSubmission {
    pub definition_id: super::domain::DefinitionId,
    pub issue_date: NaiveDate,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub evidence_reference: Option<String>,
}

static WORKER_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static RECORD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_worker_id() -> WorkerId {
    let id = WORKER_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    WorkerId(format!("wrk-{id:06}"))
}

fn next_record_id() -> RecordId {
    let id = RECORD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    RecordId(format!("cred-{id:06}"))
}

/// Service composing the repositories and the stateless evaluator.
pub struct ComplianceService<W, C> {
    workers: Arc<W>,
    records: Arc<C>,
    evaluator: Arc<ComplianceEvaluator>,
}

impl<W, C> ComplianceService<W, C>
where
    W: WorkerRepository + 'static,
    C: CredentialRecordRepository + 'static,
{
    pub fn new(workers: Arc<W>, records: Arc<C>, evaluator: ComplianceEvaluator) -> Self {
        Self {
            workers,
            records,
            evaluator: Arc::new(evaluator),
        }
    }

    pub fn evaluator(&self) -> &ComplianceEvaluator {
        &self.evaluator
    }

    /// Register a new worker as active.
    pub fn register_worker(
        &self,
        submission: WorkerSubmission,
    ) -> Result<Worker, ComplianceServiceError> {
        let worker = Worker {
            id: next_worker_id(),
            name: submission.name,
            role: submission.role,
            organisation_id: submission.organisation_id,
            status: WorkerStatus::Active,
        };

        let stored = self.workers.insert(worker)?;
        info!(worker_id = %stored.id.0, role = stored.role.label(), "worker registered");
        Ok(stored)
    }

    /// Deactivate a worker, preserving the row and its credential trail.
    pub fn deactivate_worker(&self, worker_id: &WorkerId) -> Result<(), ComplianceServiceError> {
        let mut worker = self
            .workers
            .fetch(worker_id)?
            .ok_or(RepositoryError::NotFound)?;
        worker.status = WorkerStatus::Deactivated;
        self.workers.update(worker)?;
        info!(worker_id = %worker_id.0, "worker deactivated");
        Ok(())
    }

    pub fn get_worker(&self, worker_id: &WorkerId) -> Result<Worker, ComplianceServiceError> {
        Ok(self
            .workers
            .fetch(worker_id)?
            .ok_or(RepositoryError::NotFound)?)
    }

    pub fn list_workers(
        &self,
        organisation_id: &OrganisationId,
    ) -> Result<Vec<Worker>, ComplianceServiceError> {
        Ok(self.workers.for_organisation(organisation_id)?)
    }

    /// Append a credential record for a worker. The issue/expiry invariant is
    /// enforced at intake so the stored trail stays evaluable.
    pub fn add_credential(
        &self,
        worker_id: &WorkerId,
        submission: CredentialSubmission,
    ) -> Result<CredentialRecord, ComplianceServiceError> {
        let worker = self
            .workers
            .fetch(worker_id)?
            .ok_or(RepositoryError::NotFound)?;

        let record = CredentialRecord {
            id: next_record_id(),
            worker_id: worker.id,
            definition_id: submission.definition_id,
            issue_date: submission.issue_date,
            expiry_date: submission.expiry_date,
            evidence_reference: submission.evidence_reference,
        };
        validate_record(&record)?;

        if self.evaluator.catalog().find(&record.definition_id).is_none() {
            warn!(
                definition_id = %record.definition_id.0,
                "credential references a definition outside the catalog; it will not count towards compliance"
            );
        }

        let stored = self.records.insert(record)?;
        info!(
            worker_id = %worker_id.0,
            definition_id = %stored.definition_id.0,
            "credential recorded"
        );
        Ok(stored)
    }

    /// Evaluate one worker's compliance as of `today`.
    pub fn worker_report(
        &self,
        worker_id: &WorkerId,
        today: NaiveDate,
    ) -> Result<WorkerComplianceView, ComplianceServiceError> {
        let worker = self
            .workers
            .fetch(worker_id)?
            .ok_or(RepositoryError::NotFound)?;
        let records = self.records.for_worker(worker_id)?;

        let report = self.evaluator.evaluate(worker.role, &records, today);
        Ok(WorkerComplianceView::build(
            &worker,
            self.evaluator.catalog(),
            &records,
            &report,
            today,
        ))
    }

    /// Dashboard rollup across an organisation's active workers.
    pub fn organisation_summary(
        &self,
        organisation_id: &OrganisationId,
        today: NaiveDate,
    ) -> Result<OrganisationSummaryView, ComplianceServiceError> {
        let workers = self.workers.for_organisation(organisation_id)?;

        let mut summary = OrganisationSummaryView {
            organisation_id: organisation_id.clone(),
            evaluated_on: today,
            total_workers: 0,
            compliant: 0,
            at_risk: 0,
            non_compliant: 0,
        };

        for worker in workers {
            if worker.status != WorkerStatus::Active {
                continue;
            }
            summary.total_workers += 1;

            let records = self.records.for_worker(&worker.id)?;
            let report = self.evaluator.evaluate(worker.role, &records, today);
            match report.overall {
                super::domain::ComplianceStatus::Compliant => summary.compliant += 1,
                super::domain::ComplianceStatus::AtRisk => summary.at_risk += 1,
                super::domain::ComplianceStatus::NonCompliant => summary.non_compliant += 1,
            }
        }

        Ok(summary)
    }
}

/// Error raised by the compliance service.
#[derive(Debug, thiserror::Error)]
pub enum ComplianceServiceError {
    #[error(transparent)]
    InvalidRecord(#[from] InvalidRecord),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
