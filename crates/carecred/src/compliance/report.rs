use chrono::NaiveDate;
use serde::Serialize;

use super::catalog::CredentialCatalog;
use super::domain::{
    ComplianceStatus, CredentialCategory, CredentialRecord, CredentialStatus, DefinitionId,
    GroupId, ValidityPeriod, Worker, WorkerId, WorkerRole, WorkerStatus,
};
use super::evaluation::{ComplianceReport, InvalidRecord};

/// One checklist row for a definition applicable to the worker's role.
#[derive(Debug, Clone, Serialize)]
pub struct ChecklistRow {
    pub definition_id: DefinitionId,
    pub name: String,
    pub category: CredentialCategory,
    pub category_label: &'static str,
    pub mandatory: bool,
    pub validity: ValidityPeriod,
    pub validity_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupId>,
    pub status: CredentialStatus,
    pub status_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence_reference: Option<String>,
}

/// Collapsed view of one mutual-exclusion group.
#[derive(Debug, Clone, Serialize)]
pub struct GroupRow {
    pub group: GroupId,
    pub requirement: String,
    pub status: CredentialStatus,
    pub status_label: &'static str,
}

/// Everything the worker-detail presentation needs, derived fresh at query
/// time from the records and the evaluation date.
#[derive(Debug, Clone, Serialize)]
pub struct WorkerComplianceView {
    pub worker_id: WorkerId,
    pub name: String,
    pub role: WorkerRole,
    pub role_label: &'static str,
    pub status: WorkerStatus,
    pub evaluated_on: NaiveDate,
    pub overall: ComplianceStatus,
    pub overall_label: &'static str,
    pub rows: Vec<ChecklistRow>,
    pub groups: Vec<GroupRow>,
    pub uploaded: usize,
    pub missing_required: usize,
    pub warnings: Vec<InvalidRecord>,
}

impl WorkerComplianceView {
    pub(crate) fn build(
        worker: &Worker,
        catalog: &CredentialCatalog,
        records: &[CredentialRecord],
        report: &ComplianceReport,
        evaluated_on: NaiveDate,
    ) -> Self {
        let mut rows = Vec::new();
        let mut uploaded = 0usize;

        for definition in catalog.definitions_for_role(worker.role) {
            let status = report
                .per_definition
                .get(&definition.id)
                .copied()
                .unwrap_or(CredentialStatus::Missing);

            // The evaluator already reduced to the latest record per
            // definition; recover it here for the issue/expiry columns.
            let record = records
                .iter()
                .filter(|record| {
                    record.definition_id == definition.id
                        && super::evaluation::validate_record(record).is_ok()
                })
                .max_by_key(|record| record.issue_date);

            if record.is_some() {
                uploaded += 1;
            }

            rows.push(ChecklistRow {
                definition_id: definition.id.clone(),
                name: definition.display_name.clone(),
                category: definition.category,
                category_label: definition.category.label(),
                mandatory: definition.mandatory,
                validity: definition.validity,
                validity_label: definition.validity.describe(),
                group: definition.alternatives_group.clone(),
                status,
                status_label: status.label(),
                issue_date: record.map(|record| record.issue_date),
                expiry_date: record.and_then(|record| record.expiry_date),
                evidence_reference: record.and_then(|record| record.evidence_reference.clone()),
            });
        }

        let groups: Vec<GroupRow> = report
            .per_group
            .iter()
            .map(|(group, status)| GroupRow {
                group: group.clone(),
                requirement: group_requirement_label(catalog, group),
                status: *status,
                status_label: status.label(),
            })
            .collect();

        // Counted over the collapsed requirement set: a satisfied
        // mutual-exclusion group is one requirement, so its absent alternate
        // is not missing.
        let missing_required = rows
            .iter()
            .filter(|row| {
                row.mandatory && row.group.is_none() && row.status == CredentialStatus::Missing
            })
            .count()
            + groups
                .iter()
                .filter(|group| group.status == CredentialStatus::Missing)
                .count();

        Self {
            worker_id: worker.id.clone(),
            name: worker.name.clone(),
            role: worker.role,
            role_label: worker.role.label(),
            status: worker.status,
            evaluated_on,
            overall: report.overall,
            overall_label: report.overall.label(),
            rows,
            groups,
            uploaded,
            missing_required,
            warnings: report.warnings.clone(),
        }
    }

    /// Requirement names carrying the given status: ungrouped mandatory rows
    /// by credential name, mutual-exclusion groups by their collapsed label.
    /// A satisfied group's lapsed alternate never shows up as a problem.
    fn requirements_with_status(&self, status: CredentialStatus) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .rows
            .iter()
            .filter(|row| row.mandatory && row.group.is_none() && row.status == status)
            .map(|row| row.name.as_str())
            .collect();
        names.extend(
            self.groups
                .iter()
                .filter(|group| group.status == status)
                .map(|group| group.requirement.as_str()),
        );
        names
    }

    /// Plain-English summary in the dashboard's traffic-light register.
    pub fn narrative(&self) -> String {
        let (light, headline) = match self.overall {
            ComplianceStatus::Compliant => (
                "GREEN",
                "every required credential is current".to_string(),
            ),
            ComplianceStatus::AtRisk => {
                let expiring = self.requirements_with_status(CredentialStatus::ExpiringSoon);
                (
                    "YELLOW",
                    format!("renewals approaching for {}", expiring.join(", ")),
                )
            }
            ComplianceStatus::NonCompliant => {
                let expired = self.requirements_with_status(CredentialStatus::Expired);
                let mut problems = Vec::new();
                if !expired.is_empty() {
                    problems.push(format!("expired: {}", expired.join(", ")));
                }
                if self.missing_required > 0 {
                    problems.push(format!(
                        "{} required credential(s) not uploaded",
                        self.missing_required
                    ));
                }
                ("RED", problems.join("; "))
            }
        };

        format!(
            "{light}: {name} ({role}) is {overall} as of {date} - {headline}.",
            name = self.name,
            role = self.role_label,
            overall = self.overall_label.to_lowercase(),
            date = self.evaluated_on,
        )
    }
}

fn group_requirement_label(catalog: &CredentialCatalog, group: &GroupId) -> String {
    catalog
        .definitions()
        .iter()
        .filter(|definition| definition.alternatives_group.as_ref() == Some(group))
        .map(|definition| definition.display_name.as_str())
        .collect::<Vec<_>>()
        .join(" OR ")
}

/// Organisation-wide dashboard tiles: worker counts by aggregate status.
#[derive(Debug, Clone, Serialize)]
pub struct OrganisationSummaryView {
    pub organisation_id: super::domain::OrganisationId,
    pub evaluated_on: NaiveDate,
    pub total_workers: usize,
    pub compliant: usize,
    pub at_risk: usize,
    pub non_compliant: usize,
}
