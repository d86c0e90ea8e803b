use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{OrganisationId, WorkerId};
use super::report::WorkerComplianceView;
use super::repository::{CredentialRecordRepository, RepositoryError, WorkerRepository};
use super::service::{
    ComplianceService, ComplianceServiceError, CredentialSubmission, WorkerSubmission,
};

/// Router builder exposing HTTP endpoints for worker registration, credential
/// intake, and compliance reporting.
pub fn compliance_router<W, C>(service: Arc<ComplianceService<W, C>>) -> Router
where
    W: WorkerRepository + 'static,
    C: CredentialRecordRepository + 'static,
{
    Router::new()
        .route("/api/v1/workers", post(register_worker_handler::<W, C>))
        .route("/api/v1/workers/:worker_id", get(get_worker_handler::<W, C>))
        .route(
            "/api/v1/workers/:worker_id/deactivate",
            post(deactivate_worker_handler::<W, C>),
        )
        .route(
            "/api/v1/workers/:worker_id/credentials",
            post(add_credential_handler::<W, C>),
        )
        .route(
            "/api/v1/workers/:worker_id/compliance-report",
            post(worker_report_handler::<W, C>),
        )
        .route(
            "/api/v1/organisations/:organisation_id/workers",
            get(list_workers_handler::<W, C>),
        )
        .route(
            "/api/v1/organisations/:organisation_id/summary",
            post(organisation_summary_handler::<W, C>),
        )
        .with_state(service)
}

/// Optional evaluation-date override so callers and tests can pin the clock.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct EvaluationRequest {
    #[serde(default)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub(crate) struct WorkerReportResponse {
    #[serde(flatten)]
    pub(crate) view: WorkerComplianceView,
    pub(crate) narrative: String,
}

fn error_response(error: ComplianceServiceError) -> Response {
    let status = match &error {
        ComplianceServiceError::InvalidRecord(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ComplianceServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ComplianceServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        ComplianceServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn register_worker_handler<W, C>(
    State(service): State<Arc<ComplianceService<W, C>>>,
    axum::Json(submission): axum::Json<WorkerSubmission>,
) -> Response
where
    W: WorkerRepository + 'static,
    C: CredentialRecordRepository + 'static,
{
    match service.register_worker(submission) {
        Ok(worker) => (StatusCode::CREATED, axum::Json(worker)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn get_worker_handler<W, C>(
    State(service): State<Arc<ComplianceService<W, C>>>,
    Path(worker_id): Path<String>,
) -> Response
where
    W: WorkerRepository + 'static,
    C: CredentialRecordRepository + 'static,
{
    match service.get_worker(&WorkerId(worker_id)) {
        Ok(worker) => (StatusCode::OK, axum::Json(worker)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn deactivate_worker_handler<W, C>(
    State(service): State<Arc<ComplianceService<W, C>>>,
    Path(worker_id): Path<String>,
) -> Response
where
    W: WorkerRepository + 'static,
    C: CredentialRecordRepository + 'static,
{
    match service.deactivate_worker(&WorkerId(worker_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn add_credential_handler<W, C>(
    State(service): State<Arc<ComplianceService<W, C>>>,
    Path(worker_id): Path<String>,
    axum::Json(submission): axum::Json<CredentialSubmission>,
) -> Response
where
    W: WorkerRepository + 'static,
    C: CredentialRecordRepository + 'static,
{
    match service.add_credential(&WorkerId(worker_id), submission) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn worker_report_handler<W, C>(
    State(service): State<Arc<ComplianceService<W, C>>>,
    Path(worker_id): Path<String>,
    axum::Json(request): axum::Json<EvaluationRequest>,
) -> Response
where
    W: WorkerRepository + 'static,
    C: CredentialRecordRepository + 'static,
{
    let today = request.today.unwrap_or_else(|| Local::now().date_naive());
    match service.worker_report(&WorkerId(worker_id), today) {
        Ok(view) => {
            let narrative = view.narrative();
            (
                StatusCode::OK,
                axum::Json(WorkerReportResponse { view, narrative }),
            )
                .into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_workers_handler<W, C>(
    State(service): State<Arc<ComplianceService<W, C>>>,
    Path(organisation_id): Path<String>,
) -> Response
where
    W: WorkerRepository + 'static,
    C: CredentialRecordRepository + 'static,
{
    match service.list_workers(&OrganisationId(organisation_id)) {
        Ok(workers) => (StatusCode::OK, axum::Json(workers)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn organisation_summary_handler<W, C>(
    State(service): State<Arc<ComplianceService<W, C>>>,
    Path(organisation_id): Path<String>,
    axum::Json(request): axum::Json<EvaluationRequest>,
) -> Response
where
    W: WorkerRepository + 'static,
    C: CredentialRecordRepository + 'static,
{
    let today = request.today.unwrap_or_else(|| Local::now().date_naive());
    match service.organisation_summary(&OrganisationId(organisation_id), today) {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(error) => error_response(error),
    }
}
