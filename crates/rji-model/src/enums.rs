//! Typed statuses for the reconciliation output.
//!
//! The row store holds these as plain strings (`"NO_APLICA"`, `"TRUE"`,
//! `"Si"` ...). They are decoded into enums at the boundary and encoded back
//! only when a row is written.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Whether a participant registered as an adult.
///
/// Anything that is not an explicit yes decodes to [`AgeGroup::Minor`], so an
/// unreadable flag always goes through guardian validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    Adult,
    Minor,
}

impl AgeGroup {
    const ADULT_VALUES: [&'static str; 3] = ["true", "si", "sí"];

    /// Decodes the stored `es_mayor_edad` value (case-insensitive).
    pub fn decode(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        if Self::ADULT_VALUES.contains(&lowered.as_str()) {
            AgeGroup::Adult
        } else {
            AgeGroup::Minor
        }
    }

    pub fn from_is_adult(is_adult: bool) -> Self {
        if is_adult {
            AgeGroup::Adult
        } else {
            AgeGroup::Minor
        }
    }

    pub fn is_adult(self) -> bool {
        matches!(self, AgeGroup::Adult)
    }

    /// Stored representation (`TRUE` for adults, `FALSE` otherwise).
    pub fn as_str(self) -> &'static str {
        match self {
            AgeGroup::Adult => "TRUE",
            AgeGroup::Minor => "FALSE",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the guardian a minor declared was found among companions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    #[serde(rename = "NO_APLICA")]
    NotApplicable,
    #[serde(rename = "FALTA")]
    Missing,
    #[serde(rename = "OK")]
    Matched,
}

impl MatchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStatus::NotApplicable => "NO_APLICA",
            MatchStatus::Missing => "FALTA",
            MatchStatus::Matched => "OK",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "NO_APLICA" => Ok(MatchStatus::NotApplicable),
            "FALTA" => Ok(MatchStatus::Missing),
            "OK" => Ok(MatchStatus::Matched),
            other => Err(ModelError::UnknownStatus {
                field: "match",
                value: other.to_string(),
            }),
        }
    }
}

/// Whether the matched guardian uploaded a consent document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsentFileStatus {
    #[serde(rename = "NO_APLICA")]
    NotApplicable,
    #[serde(rename = "TRUE")]
    Present,
    #[serde(rename = "FALSE")]
    Absent,
}

impl ConsentFileStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ConsentFileStatus::NotApplicable => "NO_APLICA",
            ConsentFileStatus::Present => "TRUE",
            ConsentFileStatus::Absent => "FALSE",
        }
    }
}

impl fmt::Display for ConsentFileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsentFileStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "NO_APLICA" => Ok(ConsentFileStatus::NotApplicable),
            "TRUE" => Ok(ConsentFileStatus::Present),
            "FALSE" => Ok(ConsentFileStatus::Absent),
            other => Err(ModelError::UnknownStatus {
                field: "consent file",
                value: other.to_string(),
            }),
        }
    }
}

/// Whether the participant appears in the guardian's declared minor list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListMembershipStatus {
    #[serde(rename = "NO_APLICA")]
    NotApplicable,
    /// The guardian never filled in the list.
    #[serde(rename = "NO_LISTA")]
    NoList,
    #[serde(rename = "TRUE")]
    Listed,
    #[serde(rename = "FALSE")]
    NotListed,
}

impl ListMembershipStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ListMembershipStatus::NotApplicable => "NO_APLICA",
            ListMembershipStatus::NoList => "NO_LISTA",
            ListMembershipStatus::Listed => "TRUE",
            ListMembershipStatus::NotListed => "FALSE",
        }
    }
}

impl fmt::Display for ListMembershipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListMembershipStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "NO_APLICA" => Ok(ListMembershipStatus::NotApplicable),
            "NO_LISTA" => Ok(ListMembershipStatus::NoList),
            "TRUE" => Ok(ListMembershipStatus::Listed),
            "FALSE" => Ok(ListMembershipStatus::NotListed),
            other => Err(ModelError::UnknownStatus {
                field: "list membership",
                value: other.to_string(),
            }),
        }
    }
}
