use crate::infra::{InMemoryCredentialRepository, InMemoryWorkerRepository};
use carecred::compliance::{
    ComplianceEvaluator, ComplianceService, CredentialCatalog, CredentialCategory,
    CredentialSubmission, DefinitionId, OrganisationId, Worker, WorkerComplianceView, WorkerRole,
    WorkerSubmission,
};
use carecred::error::AppError;
use chrono::{Duration, Local, NaiveDate};
use clap::{Args, ValueEnum};
use std::sync::Arc;

type DemoService = ComplianceService<InMemoryWorkerRepository, InMemoryCredentialRepository>;

/// Which seeded worker the `report` subcommand evaluates.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub(crate) enum DemoScenario {
    /// Every required credential current
    Compliant,
    /// AHPRA registration inside the 90-day expiry window
    #[default]
    AtRisk,
    /// Expired CPR plus a never-uploaded Code of Conduct certificate
    NonCompliant,
}

#[derive(Args, Debug)]
pub(crate) struct WorkerReportArgs {
    /// Evaluation date for the report (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Seeded scenario to evaluate (defaults to at-risk)
    #[arg(long, value_enum)]
    pub(crate) scenario: Option<DemoScenario>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation date for the demo reports (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

fn demo_service() -> DemoService {
    ComplianceService::new(
        Arc::new(InMemoryWorkerRepository::default()),
        Arc::new(InMemoryCredentialRepository::default()),
        ComplianceEvaluator::new(CredentialCatalog::standard()),
    )
}

fn demo_org() -> OrganisationId {
    OrganisationId("org-sunrise-demo".to_string())
}

fn upload(
    service: &DemoService,
    worker: &Worker,
    definition_id: &str,
    issue_date: NaiveDate,
    expiry_date: Option<NaiveDate>,
) -> Result<(), AppError> {
    service.add_credential(
        &worker.id,
        CredentialSubmission {
            definition_id: DefinitionId(definition_id.to_string()),
            issue_date,
            expiry_date,
            evidence_reference: Some(format!(
                "worker-credentials/{}/{definition_id}.pdf",
                worker.id.0
            )),
        },
    )?;
    Ok(())
}

const NURSE_ANNUALS: [&str; 10] = [
    "ahpra",
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

fn seed_nurse(
    service: &DemoService,
    name: &str,
    scenario: DemoScenario,
    today: NaiveDate,
) -> Result<Worker, AppError> {
    let worker = service.register_worker(WorkerSubmission {
        name: name.to_string(),
        role: WorkerRole::RegisteredNurse,
        organisation_id: demo_org(),
    })?;

    upload(
        service,
        &worker,
        "ndis-screening",
        today - Duration::days(200),
        Some(today + Duration::days(1625)),
    )?;

    for definition_id in NURSE_ANNUALS {
        match (scenario, definition_id) {
            (DemoScenario::AtRisk, "ahpra") => upload(
                service,
                &worker,
                definition_id,
                today - Duration::days(335),
                Some(today + Duration::days(30)),
            )?,
            (DemoScenario::NonCompliant, "ahpra") => upload(
                service,
                &worker,
                definition_id,
                today - Duration::days(335),
                Some(today + Duration::days(30)),
            )?,
            (DemoScenario::NonCompliant, "cpr") => upload(
                service,
                &worker,
                definition_id,
                today - Duration::days(400),
                Some(today - Duration::days(35)),
            )?,
            (DemoScenario::NonCompliant, "code-of-conduct") => {}
            _ => upload(
                service,
                &worker,
                definition_id,
                today - Duration::days(60),
                Some(today + Duration::days(305)),
            )?,
        }
    }

    Ok(worker)
}

fn render_worker_report(view: &WorkerComplianceView) {
    println!(
        "\n{} ({}) - {} as of {}",
        view.name, view.role_label, view.overall_label, view.evaluated_on
    );
    println!(
        "  {} of {} applicable credentials uploaded, {} required missing",
        view.uploaded,
        view.rows.len(),
        view.missing_required
    );

    for category in CredentialCategory::ordered() {
        let rows: Vec<_> = view
            .rows
            .iter()
            .filter(|row| row.category == category)
            .collect();
        if rows.is_empty() {
            continue;
        }
        println!("  {}:", category.label());
        for row in rows {
            let expiry = match row.expiry_date {
                Some(date) => format!("expires {date}"),
                None if row.issue_date.is_some() => "no expiry".to_string(),
                None => format!("validity: {}", row.validity_label),
            };
            let mandatory = if row.mandatory { "" } else { " (optional)" };
            println!(
                "    [{}] {}{} ({expiry})",
                row.status_label, row.name, mandatory
            );
        }
    }

    for group in &view.groups {
        println!(
            "  Requirement group {}: [{}] {}",
            group.group.0, group.status_label, group.requirement
        );
    }

    for warning in &view.warnings {
        println!("  Data-entry warning: {warning}");
    }

    println!("  Summary: {}", view.narrative());
}

pub(crate) fn run_worker_report(args: WorkerReportArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let service = demo_service();

    let worker = seed_nurse(&service, "Asha Patel", args.scenario.unwrap_or_default(), today)?;
    let view = service.worker_report(&worker.id, today)?;
    render_worker_report(&view);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let service = demo_service();

    println!("Seeding demo organisation {}", demo_org().0);
    let workers = [
        seed_nurse(&service, "Asha Patel", DemoScenario::Compliant, today)?,
        seed_nurse(&service, "Marco Ruiz", DemoScenario::AtRisk, today)?,
        seed_nurse(&service, "Li Wen", DemoScenario::NonCompliant, today)?,
    ];

    let summary = service.organisation_summary(&demo_org(), today)?;
    println!(
        "Dashboard: {} workers -> {} compliant / {} at risk / {} non-compliant",
        summary.total_workers, summary.compliant, summary.at_risk, summary.non_compliant
    );

    for worker in &workers {
        let view = service.worker_report(&worker.id, today)?;
        render_worker_report(&view);
    }

    Ok(())
}
