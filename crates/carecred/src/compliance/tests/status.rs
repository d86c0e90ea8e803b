use super::common::*;
use crate::compliance::domain::CredentialStatus;
use crate::compliance::evaluation::{resolve_status, validate_record};

#[test]
fn missing_record_resolves_missing() {
    assert_eq!(resolve_status(None, today()), CredentialStatus::Missing);
}

#[test]
fn record_without_expiry_is_always_valid() {
    let permanent = record("cert", "cert-iii", days_from_today(-2000), None);
    assert_eq!(
        resolve_status(Some(&permanent), today()),
        CredentialStatus::Valid
    );
}

#[test]
fn expiry_ninety_days_out_is_expiring_soon() {
    let boundary = record("cpr", "cpr", days_from_today(-275), Some(days_from_today(90)));
    assert_eq!(
        resolve_status(Some(&boundary), today()),
        CredentialStatus::ExpiringSoon
    );
}

#[test]
fn expiry_ninety_one_days_out_is_valid() {
    let outside = record("cpr", "cpr", days_from_today(-274), Some(days_from_today(91)));
    assert_eq!(
        resolve_status(Some(&outside), today()),
        CredentialStatus::Valid
    );
}

#[test]
fn expiry_yesterday_is_expired() {
    let lapsed = record("cpr", "cpr", days_from_today(-366), Some(days_from_today(-1)));
    assert_eq!(
        resolve_status(Some(&lapsed), today()),
        CredentialStatus::Expired
    );
}

#[test]
fn expiring_today_classifies_as_expiring_soon_not_expired() {
    let boundary = record("cpr", "cpr", days_from_today(-365), Some(today()));
    assert_eq!(
        resolve_status(Some(&boundary), today()),
        CredentialStatus::ExpiringSoon
    );
}

#[test]
fn only_present_unexpired_statuses_satisfy_a_requirement() {
    assert!(CredentialStatus::Valid.satisfies_requirement());
    assert!(CredentialStatus::ExpiringSoon.satisfies_requirement());
    assert!(!CredentialStatus::Expired.satisfies_requirement());
    assert!(!CredentialStatus::Missing.satisfies_requirement());
}

#[test]
fn validate_rejects_expiry_before_issue() {
    let inverted = record("bad", "cpr", today(), Some(days_from_today(-10)));
    let error = validate_record(&inverted).expect_err("inverted dates rejected");
    assert_eq!(error.record_id, inverted.id);
}

#[test]
fn invalid_record_is_excluded_and_surfaced_as_warning() {
    let mut records = nurse_records_fully_current();
    records.push(record("bad", "sirs", today(), Some(days_from_today(-10))));

    let report = evaluator().evaluate(
        crate::compliance::domain::WorkerRole::RegisteredNurse,
        &records,
        today(),
    );

    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].record_id.0, "cred-bad");
    // The valid SIRS record still drives the status.
    assert_eq!(
        report.per_definition
            [&crate::compliance::domain::DefinitionId("sirs".to_string())],
        CredentialStatus::Valid
    );
}

#[test]
fn most_recent_record_per_definition_wins() {
    let stale = record("cpr-old", "cpr", days_from_today(-500), Some(days_from_today(-135)));
    let renewal = record("cpr-new", "cpr", days_from_today(-10), Some(days_from_today(355)));

    let mut records = nurse_records_fully_current();
    records.retain(|r| r.definition_id.0 != "cpr");
    // Renewal deliberately inserted before the superseded record.
    records.push(renewal);
    records.push(stale);

    let report = evaluator().evaluate(
        crate::compliance::domain::WorkerRole::RegisteredNurse,
        &records,
        today(),
    );
    assert_eq!(
        report.per_definition[&crate::compliance::domain::DefinitionId("cpr".to_string())],
        CredentialStatus::Valid
    );
}

#[test]
fn issue_date_tie_keeps_later_insertion() {
    let first = record("cpr-a", "cpr", days_from_today(-10), Some(days_from_today(-5)));
    let second = record("cpr-b", "cpr", days_from_today(-10), Some(days_from_today(355)));

    let mut records = nurse_records_fully_current();
    records.retain(|r| r.definition_id.0 != "cpr");
    records.push(first);
    records.push(second);

    let report = evaluator().evaluate(
        crate::compliance::domain::WorkerRole::RegisteredNurse,
        &records,
        today(),
    );
    assert_eq!(
        report.per_definition[&crate::compliance::domain::DefinitionId("cpr".to_string())],
        CredentialStatus::Valid
    );
}

#[test]
fn orphaned_records_are_ignored() {
    let mut records = nurse_records_fully_current();
    records.push(record(
        "orphan",
        "forklift-licence",
        days_from_today(-10),
        None,
    ));

    let report = evaluator().evaluate(
        crate::compliance::domain::WorkerRole::RegisteredNurse,
        &records,
        today(),
    );

    assert!(report.warnings.is_empty());
    assert!(!report
        .per_definition
        .contains_key(&crate::compliance::domain::DefinitionId(
            "forklift-licence".to_string()
        )));
}
