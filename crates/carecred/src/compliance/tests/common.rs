use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use chrono::{Duration, NaiveDate};
use serde_json::Value;

use crate::compliance::catalog::CredentialCatalog;
use crate::compliance::domain::{
    CredentialRecord, DefinitionId, OrganisationId, RecordId, Worker, WorkerId, WorkerRole,
};
use crate::compliance::evaluation::ComplianceEvaluator;
use crate::compliance::repository::{
    CredentialRecordRepository, RepositoryError, WorkerRepository,
};
use crate::compliance::router::compliance_router;
use crate::compliance::service::{ComplianceService, WorkerSubmission};

pub(super) const ORG: &str = "org-sunrise";

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date")
}

pub(super) fn days_from_today(days: i64) -> NaiveDate {
    today() + Duration::days(days)
}

pub(super) fn evaluator() -> ComplianceEvaluator {
    ComplianceEvaluator::new(CredentialCatalog::standard())
}

pub(super) fn record(
    suffix: &str,
    definition_id: &str,
    issue_date: NaiveDate,
    expiry_date: Option<NaiveDate>,
) -> CredentialRecord {
    CredentialRecord {
        id: RecordId(format!("cred-{suffix}")),
        worker_id: WorkerId("wrk-000001".to_string()),
        definition_id: DefinitionId(definition_id.to_string()),
        issue_date,
        expiry_date,
        evidence_reference: Some(format!("worker-credentials/{suffix}.pdf")),
    }
}

/// Registered Nurse with gaps: NDIS valid, AHPRA expiring in 30 days, CPR
/// expired, Code of Conduct missing, everything else current.
pub(super) fn nurse_records_with_gaps() -> Vec<CredentialRecord> {
    let mut records = nurse_records_fully_current();
    records.retain(|record| {
        record.definition_id.0 != "ahpra"
            && record.definition_id.0 != "cpr"
            && record.definition_id.0 != "code-of-conduct"
    });
    records.push(record(
        "ahpra",
        "ahpra",
        days_from_today(-335),
        Some(days_from_today(30)),
    ));
    records.push(record("cpr", "cpr", days_from_today(-400), Some(days_from_today(-35))));
    records
}

/// Same worker with every mandatory requirement current except AHPRA, which
/// is inside the expiry warning window.
pub(super) fn nurse_records_at_risk() -> Vec<CredentialRecord> {
    let mut records = nurse_records_fully_current();
    records.retain(|record| record.definition_id.0 != "ahpra");
    records.push(record(
        "ahpra",
        "ahpra",
        days_from_today(-335),
        Some(days_from_today(30)),
    ));
    records
}

pub(super) fn nurse_records_fully_current() -> Vec<CredentialRecord> {
    let annual = [
        "cpr",
        "code-of-conduct",
        "sirs",
        "infection-control",
        "manual-handling",
        "person-centred",
        "culturally-safe",
        "dementia",
        "medical-emergency",
    ];

    let mut records = vec![
        record(
            "ndis",
            "ndis-screening",
            days_from_today(-200),
            Some(days_from_today(1625)),
        ),
        record(
            "ahpra",
            "ahpra",
            days_from_today(-60),
            Some(days_from_today(305)),
        ),
    ];
    for definition_id in annual {
        records.push(record(
            definition_id,
            definition_id,
            days_from_today(-60),
            Some(days_from_today(305)),
        ));
    }
    records
}

pub(super) fn worker_submission(name: &str, role: WorkerRole) -> WorkerSubmission {
    WorkerSubmission {
        name: name.to_string(),
        role,
        organisation_id: OrganisationId(ORG.to_string()),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryWorkers {
    rows: Arc<Mutex<HashMap<WorkerId, Worker>>>,
}

impl WorkerRepository for MemoryWorkers {
    fn insert(&self, worker: Worker) -> Result<Worker, RepositoryError> {
        let mut guard = self.rows.lock().expect("worker mutex poisoned");
        if guard.contains_key(&worker.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(worker.id.clone(), worker.clone());
        Ok(worker)
    }

    fn update(&self, worker: Worker) -> Result<(), RepositoryError> {
        let mut guard = self.rows.lock().expect("worker mutex poisoned");
        if !guard.contains_key(&worker.id) {
            return Err(RepositoryError::NotFound);
        }
        guard.insert(worker.id.clone(), worker);
        Ok(())
    }

    fn fetch(&self, id: &WorkerId) -> Result<Option<Worker>, RepositoryError> {
        let guard = self.rows.lock().expect("worker mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn for_organisation(
        &self,
        organisation_id: &OrganisationId,
    ) -> Result<Vec<Worker>, RepositoryError> {
        let guard = self.rows.lock().expect("worker mutex poisoned");
        let mut workers: Vec<Worker> = guard
            .values()
            .filter(|worker| &worker.organisation_id == organisation_id)
            .cloned()
            .collect();
        workers.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(workers)
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRecords {
    rows: Arc<Mutex<Vec<CredentialRecord>>>,
}

impl CredentialRecordRepository for MemoryRecords {
    fn insert(&self, record: CredentialRecord) -> Result<CredentialRecord, RepositoryError> {
        let mut guard = self.rows.lock().expect("record mutex poisoned");
        guard.push(record.clone());
        Ok(record)
    }

    fn for_worker(&self, worker_id: &WorkerId) -> Result<Vec<CredentialRecord>, RepositoryError> {
        let guard = self.rows.lock().expect("record mutex poisoned");
        Ok(guard
            .iter()
            .filter(|record| &record.worker_id == worker_id)
            .cloned()
            .collect())
    }
}

pub(super) struct UnavailableWorkers;

impl WorkerRepository for UnavailableWorkers {
    fn insert(&self, _worker: Worker) -> Result<Worker, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _worker: Worker) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &WorkerId) -> Result<Option<Worker>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn for_organisation(
        &self,
        _organisation_id: &OrganisationId,
    ) -> Result<Vec<Worker>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    ComplianceService<MemoryWorkers, MemoryRecords>,
    Arc<MemoryWorkers>,
    Arc<MemoryRecords>,
) {
    let workers = Arc::new(MemoryWorkers::default());
    let records = Arc::new(MemoryRecords::default());
    let service = ComplianceService::new(workers.clone(), records.clone(), evaluator());
    (service, workers, records)
}

pub(super) fn seeded_nurse(
    service: &ComplianceService<MemoryWorkers, MemoryRecords>,
    records: &MemoryRecords,
    credential_records: Vec<CredentialRecord>,
) -> Worker {
    let worker = service
        .register_worker(worker_submission("Asha Patel", WorkerRole::RegisteredNurse))
        .expect("worker registers");
    for mut credential in credential_records {
        credential.worker_id = worker.id.clone();
        records.insert(credential).expect("record inserts");
    }
    worker
}

pub(super) fn router_with_service(
    service: ComplianceService<MemoryWorkers, MemoryRecords>,
) -> axum::Router {
    compliance_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assert_status(response: &Response, expected: StatusCode) {
    assert_eq!(response.status(), expected);
}
