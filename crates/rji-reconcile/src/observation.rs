use std::fmt;

/// A data-quality finding recorded on a reconciliation row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Observation {
    MissingGuardianDocument,
    GuardianNotRegistered,
    MissingConsentFile,
    NotInGuardianList,
    GuardianListNotProvided,
}

impl Observation {
    pub fn message(self) -> &'static str {
        match self {
            Observation::MissingGuardianDocument => "minor lacks a declared guardian identifier.",
            Observation::GuardianNotRegistered => {
                "guardian not found among submitted companion registrations."
            }
            Observation::MissingConsentFile => "guardian has no consent file on record.",
            Observation::NotInGuardianList => {
                "participant's identifier does not appear in the guardian's declared list."
            }
            Observation::GuardianListNotProvided => {
                "guardian did not provide the supporting text list."
            }
        }
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
