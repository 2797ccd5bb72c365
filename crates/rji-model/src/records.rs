//! Typed views over participant, companion and reconciliation rows.

use serde::{Deserialize, Serialize};

use crate::columns::{companion, participant, reconciliation};
use crate::enums::{AgeGroup, ConsentFileStatus, ListMembershipStatus, MatchStatus};
use crate::table::RecordRef;
use crate::{ModelError, RECONCILIATION_COLUMNS};

/// The fields of a participant registration used by reconciliation.
///
/// Values are kept as entered; identifiers are normalized by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    pub document: String,
    pub full_name: String,
    pub age_group: AgeGroup,
    pub contact_document: String,
}

impl ParticipantRecord {
    pub fn from_record(record: RecordRef<'_>) -> Self {
        Self {
            document: record.get(participant::DOCUMENT).to_string(),
            full_name: record.get(participant::FULL_NAME).to_string(),
            age_group: AgeGroup::decode(record.get(participant::IS_ADULT)),
            contact_document: record.get(participant::CONTACT_DOCUMENT).to_string(),
        }
    }
}

/// The fields of a companion registration used by reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanionRecord {
    pub document: String,
    pub name: String,
    pub consent_file_url: String,
    pub minor_documents_text: String,
}

impl CompanionRecord {
    pub fn from_record(record: RecordRef<'_>) -> Self {
        Self {
            document: record.get(companion::DOCUMENT).to_string(),
            name: record.get(companion::NAME).to_string(),
            consent_file_url: record.get(companion::CONSENT_FILE_URL).to_string(),
            minor_documents_text: record.get(companion::MINOR_DOCUMENTS_TEXT).to_string(),
        }
    }
}

/// One audit row of the reconciliation output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationRow {
    pub participant_document: String,
    pub full_name: String,
    pub age_group: AgeGroup,
    pub declared_guardian: String,
    pub guardian_match: MatchStatus,
    pub companion_document: String,
    pub companion_name: String,
    pub consent_file: ConsentFileStatus,
    pub list_membership: ListMembershipStatus,
    pub observations: Vec<String>,
}

impl ReconciliationRow {
    /// Separator used when observations are flattened into one cell.
    pub const OBSERVATION_SEPARATOR: &'static str = " | ";

    pub fn observation_text(&self) -> String {
        self.observations.join(Self::OBSERVATION_SEPARATOR)
    }

    /// Cells in [`RECONCILIATION_COLUMNS`] order.
    pub fn to_cells(&self) -> Vec<String> {
        let cells = vec![
            self.participant_document.clone(),
            self.full_name.clone(),
            self.age_group.as_str().to_string(),
            self.declared_guardian.clone(),
            self.guardian_match.as_str().to_string(),
            self.companion_document.clone(),
            self.companion_name.clone(),
            self.consent_file.as_str().to_string(),
            self.list_membership.as_str().to_string(),
            self.observation_text(),
        ];
        debug_assert_eq!(cells.len(), RECONCILIATION_COLUMNS.len());
        cells
    }

    /// Decodes a row previously written to the reconciliation dataset.
    pub fn from_record(record: RecordRef<'_>) -> Result<Self, ModelError> {
        let observations = record.get(reconciliation::OBSERVATIONS);
        Ok(Self {
            participant_document: record.get(reconciliation::PARTICIPANT_DOCUMENT).to_string(),
            full_name: record.get(reconciliation::FULL_NAME).to_string(),
            age_group: AgeGroup::decode(record.get(reconciliation::IS_ADULT)),
            declared_guardian: record.get(reconciliation::DECLARED_GUARDIAN).to_string(),
            guardian_match: record.get(reconciliation::GUARDIAN_MATCH).parse()?,
            companion_document: record.get(reconciliation::COMPANION_DOCUMENT).to_string(),
            companion_name: record.get(reconciliation::COMPANION_NAME).to_string(),
            consent_file: record.get(reconciliation::HAS_CONSENT_FILE).parse()?,
            list_membership: record
                .get(reconciliation::LIST_CONTAINS_PARTICIPANT)
                .parse()?,
            observations: if observations.is_empty() {
                Vec::new()
            } else {
                observations
                    .split(Self::OBSERVATION_SEPARATOR)
                    .map(str::to_string)
                    .collect()
            },
        })
    }

    pub fn has_observations(&self) -> bool {
        !self.observations.is_empty()
    }
}
