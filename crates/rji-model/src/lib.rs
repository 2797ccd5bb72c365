//! Data model for the RJI registration intake.
//!
//! Covers the three datasets kept in the row store (participants, companions
//! and the reconciliation output), the identifier helpers used to join them,
//! and the typed statuses produced by the reconciliation engine.

pub mod columns;
pub mod enums;
pub mod error;
pub mod ids;
pub mod records;
pub mod submission;
pub mod table;

pub use columns::{
    COMPANION_COLUMNS, DatasetKind, DatasetNames, PARTICIPANT_COLUMNS, RECONCILIATION_COLUMNS,
};
pub use enums::{AgeGroup, ConsentFileStatus, ListMembershipStatus, MatchStatus};
pub use error::{ModelError, Result};
pub use ids::{normalize_identifier, parse_identifier_list};
pub use records::{CompanionRecord, ParticipantRecord, ReconciliationRow};
pub use submission::{check_companion_submission, check_participant_submission};
pub use table::{DatasetTable, RecordRef};
