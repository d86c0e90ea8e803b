use super::common::*;
use crate::compliance::domain::{ComplianceStatus, WorkerRole};

#[test]
fn fully_current_nurse_is_compliant() {
    let report = evaluator().evaluate(
        WorkerRole::RegisteredNurse,
        &nurse_records_fully_current(),
        today(),
    );
    assert_eq!(report.overall, ComplianceStatus::Compliant);
}

#[test]
fn expiring_requirement_alone_reads_at_risk() {
    // NDIS valid, AHPRA expiring in 30 days, everything else current.
    let report = evaluator().evaluate(
        WorkerRole::RegisteredNurse,
        &nurse_records_at_risk(),
        today(),
    );
    assert_eq!(report.overall, ComplianceStatus::AtRisk);
}

#[test]
fn expired_and_missing_requirements_dominate_expiring() {
    // Expired CPR and missing Code of Conduct outrank AHPRA's warning.
    let report = evaluator().evaluate(
        WorkerRole::RegisteredNurse,
        &nurse_records_with_gaps(),
        today(),
    );
    assert_eq!(report.overall, ComplianceStatus::NonCompliant);
}

#[test]
fn single_missing_requirement_forces_non_compliant() {
    let mut records = nurse_records_fully_current();
    records.retain(|record| record.definition_id.0 != "sirs");

    let report = evaluator().evaluate(WorkerRole::RegisteredNurse, &records, today());
    assert_eq!(report.overall, ComplianceStatus::NonCompliant);
}

#[test]
fn optional_definitions_do_not_affect_the_aggregate() {
    let mut records = nurse_records_fully_current();
    // Expired Working with Children Check: informational only.
    records.push(record(
        "wwc",
        "working-with-children",
        days_from_today(-2000),
        Some(days_from_today(-5)),
    ));

    let report = evaluator().evaluate(WorkerRole::RegisteredNurse, &records, today());
    assert_eq!(report.overall, ComplianceStatus::Compliant);
}

#[test]
fn no_records_at_all_is_non_compliant() {
    let report = evaluator().evaluate(WorkerRole::CareWorker, &[], today());
    assert_eq!(report.overall, ComplianceStatus::NonCompliant);
}

#[test]
fn evaluation_is_idempotent() {
    let records = nurse_records_with_gaps();
    let evaluator = evaluator();

    let first = evaluator.evaluate(WorkerRole::RegisteredNurse, &records, today());
    let second = evaluator.evaluate(WorkerRole::RegisteredNurse, &records, today());
    assert_eq!(first, second);
}
