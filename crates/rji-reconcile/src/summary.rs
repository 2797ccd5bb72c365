use serde::Serialize;

use rji_model::{
    AgeGroup, ConsentFileStatus, ListMembershipStatus, MatchStatus, ReconciliationRow,
};

/// Status counts over one set of reconciliation rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReconciliationSummary {
    pub total: usize,
    pub adults: usize,
    pub minors: usize,
    pub guardian_matched: usize,
    pub guardian_missing: usize,
    pub consent_present: usize,
    pub consent_absent: usize,
    pub listed: usize,
    pub not_listed: usize,
    pub no_list: usize,
    pub with_observations: usize,
    /// Minors with a matched guardian, a consent file and a list entry.
    pub fully_verified: usize,
}

impl ReconciliationSummary {
    pub fn from_rows(rows: &[ReconciliationRow]) -> Self {
        let mut summary = Self {
            total: rows.len(),
            ..Self::default()
        };
        for row in rows {
            match row.age_group {
                AgeGroup::Adult => summary.adults += 1,
                AgeGroup::Minor => summary.minors += 1,
            }
            match row.guardian_match {
                MatchStatus::Matched => summary.guardian_matched += 1,
                MatchStatus::Missing => summary.guardian_missing += 1,
                MatchStatus::NotApplicable => {}
            }
            match row.consent_file {
                ConsentFileStatus::Present => summary.consent_present += 1,
                ConsentFileStatus::Absent => summary.consent_absent += 1,
                ConsentFileStatus::NotApplicable => {}
            }
            match row.list_membership {
                ListMembershipStatus::Listed => summary.listed += 1,
                ListMembershipStatus::NotListed => summary.not_listed += 1,
                ListMembershipStatus::NoList => summary.no_list += 1,
                ListMembershipStatus::NotApplicable => {}
            }
            if row.guardian_match == MatchStatus::Matched
                && row.consent_file == ConsentFileStatus::Present
                && row.list_membership == ListMembershipStatus::Listed
            {
                summary.fully_verified += 1;
            }
            if row.has_observations() {
                summary.with_observations += 1;
            }
        }
        summary
    }
}
