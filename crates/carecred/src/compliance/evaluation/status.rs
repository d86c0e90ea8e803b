use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::super::domain::{CredentialRecord, CredentialStatus, DefinitionId, RecordId};

/// Records expiring within this many days are flagged as expiring soon.
pub const EXPIRY_WARNING_DAYS: i64 = 90;

/// Raised when a record's dates are inconsistent. The record is excluded from
/// evaluation and surfaced as a data-entry warning; it never aborts the
/// evaluation of the remaining records.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, thiserror::Error)]
#[error("credential record {record_id:?} expires {expiry_date} before it was issued {issue_date}")]
pub struct InvalidRecord {
    pub record_id: RecordId,
    pub issue_date: NaiveDate,
    pub expiry_date: NaiveDate,
}

pub fn validate_record(record: &CredentialRecord) -> Result<(), InvalidRecord> {
    match record.expiry_date {
        Some(expiry_date) if expiry_date < record.issue_date => Err(InvalidRecord {
            record_id: record.id.clone(),
            issue_date: record.issue_date,
            expiry_date,
        }),
        _ => Ok(()),
    }
}

/// Resolve the status of one requirement from its most recent record.
///
/// Expiry is exclusive of the boundary day: a credential expiring today still
/// counts as `ExpiringSoon`, not `Expired`. `NaiveDate` arithmetic keeps the
/// comparison at calendar-day granularity so no time-of-day drift can
/// reclassify a record.
pub fn resolve_status(record: Option<&CredentialRecord>, today: NaiveDate) -> CredentialStatus {
    let Some(record) = record else {
        return CredentialStatus::Missing;
    };

    let Some(expiry_date) = record.expiry_date else {
        return CredentialStatus::Valid;
    };

    let days_until_expiry = expiry_date.signed_duration_since(today).num_days();
    if days_until_expiry < 0 {
        CredentialStatus::Expired
    } else if days_until_expiry <= EXPIRY_WARNING_DAYS {
        CredentialStatus::ExpiringSoon
    } else {
        CredentialStatus::Valid
    }
}

/// Reduce a worker's records to the most recent one per definition.
///
/// Selection is an explicit reduction (max `issue_date`, later insertion wins
/// ties) rather than a reliance on input ordering. Records failing the
/// issue/expiry invariant are dropped and returned separately so callers can
/// surface them as data-entry warnings.
pub(crate) fn latest_records(
    records: &[CredentialRecord],
) -> (BTreeMap<DefinitionId, &CredentialRecord>, Vec<InvalidRecord>) {
    let mut latest: BTreeMap<DefinitionId, &CredentialRecord> = BTreeMap::new();
    let mut warnings = Vec::new();

    for record in records {
        if let Err(warning) = validate_record(record) {
            warnings.push(warning);
            continue;
        }

        match latest.get(&record.definition_id) {
            Some(current) if current.issue_date > record.issue_date => {}
            _ => {
                latest.insert(record.definition_id.clone(), record);
            }
        }
    }

    (latest, warnings)
}
