//! Per-participant guardian and consent classification.

use tracing::trace;

use rji_model::{
    AgeGroup, CompanionRecord, ConsentFileStatus, ListMembershipStatus, MatchStatus,
    ParticipantRecord, ReconciliationRow, normalize_identifier,
};

use crate::index::{CompanionIndex, build_companion_index};
use crate::observation::Observation;

/// Classifies one participant against the companion index.
///
/// Adults get `NO_APLICA` everywhere. Minors are checked for a declared
/// guardian, the guardian's registration, their consent file, and whether
/// the guardian listed this participant.
pub fn reconcile_participant(
    participant: &ParticipantRecord,
    index: &CompanionIndex,
) -> ReconciliationRow {
    let document = normalize_identifier(&participant.document);
    let declared_guardian = normalize_identifier(&participant.contact_document);
    let mut row = ReconciliationRow {
        participant_document: document,
        full_name: participant.full_name.clone(),
        age_group: participant.age_group,
        declared_guardian,
        guardian_match: MatchStatus::NotApplicable,
        companion_document: String::new(),
        companion_name: String::new(),
        consent_file: ConsentFileStatus::NotApplicable,
        list_membership: ListMembershipStatus::NotApplicable,
        observations: Vec::new(),
    };
    if participant.age_group == AgeGroup::Adult {
        return row;
    }

    let mut observations = Vec::new();
    if row.declared_guardian.is_empty() {
        row.guardian_match = MatchStatus::Missing;
        observations.push(Observation::MissingGuardianDocument);
    } else if let Some(guardian) = index.get(&row.declared_guardian) {
        row.guardian_match = MatchStatus::Matched;
        row.companion_document = row.declared_guardian.clone();
        row.companion_name = guardian.name.clone();

        if guardian.has_consent_file() {
            row.consent_file = ConsentFileStatus::Present;
        } else {
            row.consent_file = ConsentFileStatus::Absent;
            observations.push(Observation::MissingConsentFile);
        }

        if !guardian.has_minor_list() {
            row.list_membership = ListMembershipStatus::NoList;
            observations.push(Observation::GuardianListNotProvided);
        } else if guardian.minor_documents.contains(&row.participant_document) {
            row.list_membership = ListMembershipStatus::Listed;
        } else {
            row.list_membership = ListMembershipStatus::NotListed;
            observations.push(Observation::NotInGuardianList);
        }
    } else {
        row.guardian_match = MatchStatus::Missing;
        observations.push(Observation::GuardianNotRegistered);
    }

    row.observations = observations
        .into_iter()
        .map(|observation| observation.message().to_string())
        .collect();
    trace!(
        guardian_match = %row.guardian_match,
        consent_file = %row.consent_file,
        list_membership = %row.list_membership,
        "classified minor"
    );
    row
}

/// Reconciles every participant, in input order.
pub fn reconcile(
    participants: &[ParticipantRecord],
    companions: &[CompanionRecord],
) -> Vec<ReconciliationRow> {
    let index = build_companion_index(companions);
    participants
        .iter()
        .map(|participant| reconcile_participant(participant, &index))
        .collect()
}
