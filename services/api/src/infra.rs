use carecred::compliance::{
    CredentialRecord, CredentialRecordRepository, OrganisationId, RepositoryError, Worker,
    WorkerId, WorkerRepository,
};
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryWorkerRepository {
    rows: Arc<Mutex<HashMap<WorkerId, Worker>>>,
}

impl WorkerRepository for InMemoryWorkerRepository {
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
        if guard.contains_key(&worker.id) {
            guard.insert(worker.id.clone(), worker);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
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
pub(crate) struct InMemoryCredentialRepository {
    rows: Arc<Mutex<Vec<CredentialRecord>>>,
}

impl CredentialRecordRepository for InMemoryCredentialRepository {
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

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
