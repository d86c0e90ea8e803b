use super::domain::{
    CredentialCategory, CredentialDefinition, DefinitionId, GroupId, ValidityPeriod, WorkerRole,
};

/// Declarative catalog of the credential definitions an organisation tracks.
///
/// Definitions are reference data, created by configuration and rarely
/// mutated. Keeping the requirement list as tagged data (role scopes and
/// alternatives groups on each entry) rather than name matching against a
/// hard-coded checklist is what lets the evaluator stay a single source of
/// truth for the required set.
#[derive(Debug, Clone)]
pub struct CredentialCatalog {
    definitions: Vec<CredentialDefinition>,
}

impl CredentialCatalog {
    pub fn new(definitions: Vec<CredentialDefinition>) -> Self {
        Self { definitions }
    }

    /// The standard Aged Care Quality Standards checklist.
    pub fn standard() -> Self {
        Self::new(standard_definitions())
    }

    pub fn definitions(&self) -> &[CredentialDefinition] {
        &self.definitions
    }

    pub fn find(&self, id: &DefinitionId) -> Option<&CredentialDefinition> {
        self.definitions.iter().find(|definition| &definition.id == id)
    }

    /// Every definition applicable to the given role, in catalog order.
    pub fn definitions_for_role(&self, role: WorkerRole) -> Vec<&CredentialDefinition> {
        self.definitions
            .iter()
            .filter(|definition| definition.applies_to(role))
            .collect()
    }
}

fn definition(
    id: &str,
    display_name: &str,
    category: CredentialCategory,
    validity: ValidityPeriod,
) -> CredentialDefinition {
    CredentialDefinition {
        id: DefinitionId(id.to_string()),
        display_name: display_name.to_string(),
        category,
        validity,
        mandatory: true,
        role_scope: None,
        alternatives_group: None,
    }
}

const ANNUAL: ValidityPeriod = ValidityPeriod::FixedDuration { days: 365 };

fn standard_definitions() -> Vec<CredentialDefinition> {
    let screening_group = GroupId("police-or-ndis".to_string());

    vec![
        CredentialDefinition {
            alternatives_group: Some(screening_group.clone()),
            ..definition(
                "police-check",
                "National Police Check",
                CredentialCategory::Screening,
                ValidityPeriod::FixedDuration { days: 1095 },
            )
        },
        CredentialDefinition {
            alternatives_group: Some(screening_group),
            ..definition(
                "ndis-screening",
                "NDIS Worker Screening Check",
                CredentialCategory::Screening,
                ValidityPeriod::FixedDuration { days: 1825 },
            )
        },
        CredentialDefinition {
            mandatory: false,
            ..definition(
                "international-criminal-history",
                "International Criminal History Declaration",
                CredentialCategory::Screening,
                ValidityPeriod::Permanent,
            )
        },
        CredentialDefinition {
            mandatory: false,
            ..definition(
                "working-with-children",
                "Working with Children Check",
                CredentialCategory::Screening,
                ValidityPeriod::RoleDependent,
            )
        },
        CredentialDefinition {
            mandatory: false,
            ..definition(
                "vulnerable-people",
                "Working with Vulnerable People Card",
                CredentialCategory::Screening,
                ValidityPeriod::FixedDuration { days: 1825 },
            )
        },
        CredentialDefinition {
            role_scope: Some(vec![WorkerRole::CareWorker]),
            ..definition(
                "cert-iii",
                "Certificate III in Individual Support",
                CredentialCategory::Qualification,
                ValidityPeriod::Permanent,
            )
        },
        CredentialDefinition {
            role_scope: Some(vec![WorkerRole::RegisteredNurse]),
            ..definition(
                "ahpra",
                "AHPRA Registration",
                CredentialCategory::Qualification,
                ANNUAL,
            )
        },
        CredentialDefinition {
            role_scope: Some(vec![WorkerRole::AlliedHealthProfessional]),
            ..definition(
                "allied-health",
                "Professional Registration",
                CredentialCategory::Qualification,
                ValidityPeriod::RoleDependent,
            )
        },
        definition(
            "cpr",
            "Current CPR Certification",
            CredentialCategory::Training,
            ANNUAL,
        ),
        definition(
            "code-of-conduct",
            "Code of Conduct Training",
            CredentialCategory::Training,
            ANNUAL,
        ),
        definition("sirs", "SIRS Training", CredentialCategory::Training, ANNUAL),
        definition(
            "infection-control",
            "Infection Control Training",
            CredentialCategory::Training,
            ANNUAL,
        ),
        definition(
            "manual-handling",
            "Manual Handling Training",
            CredentialCategory::Training,
            ANNUAL,
        ),
        definition(
            "person-centred",
            "Person-centred Care Training",
            CredentialCategory::CoreCompetency,
            ANNUAL,
        ),
        definition(
            "culturally-safe",
            "Culturally Safe Care Training",
            CredentialCategory::CoreCompetency,
            ANNUAL,
        ),
        definition(
            "dementia",
            "Dementia Care Training",
            CredentialCategory::CoreCompetency,
            ANNUAL,
        ),
        definition(
            "medical-emergency",
            "Medical Emergency Response Training",
            CredentialCategory::CoreCompetency,
            ANNUAL,
        ),
    ]
}
