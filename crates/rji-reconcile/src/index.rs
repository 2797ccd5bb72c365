//! Lookup table of companions keyed by normalized document.

use std::collections::{BTreeSet, HashMap};

use tracing::warn;

use rji_model::{CompanionRecord, normalize_identifier, parse_identifier_list};

/// What the engine needs to know about one companion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanionEntry {
    pub name: String,
    /// Consent document reference exactly as stored.
    pub consent_file_url: String,
    /// Minor documents transcribed by the companion, already parsed.
    pub minor_documents: BTreeSet<String>,
}

impl CompanionEntry {
    pub fn has_consent_file(&self) -> bool {
        !self.consent_file_url.trim().is_empty()
    }

    pub fn has_minor_list(&self) -> bool {
        !self.minor_documents.is_empty()
    }
}

/// Companion index rebuilt on every run and never persisted.
#[derive(Debug, Clone, Default)]
pub struct CompanionIndex {
    entries: HashMap<String, CompanionEntry>,
    overwritten: BTreeSet<String>,
}

impl CompanionIndex {
    pub fn get(&self, document: &str) -> Option<&CompanionEntry> {
        self.entries.get(document)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Documents registered more than once; the later row won.
    pub fn overwritten_documents(&self) -> &BTreeSet<String> {
        &self.overwritten
    }
}

/// Builds the companion index in iteration order.
///
/// Rows whose document normalizes to empty are skipped. When two rows share
/// a document the later one replaces the earlier.
pub fn build_companion_index(companions: &[CompanionRecord]) -> CompanionIndex {
    let mut index = CompanionIndex::default();
    let mut skipped = 0usize;
    for companion in companions {
        let document = normalize_identifier(&companion.document);
        if document.is_empty() {
            skipped += 1;
            continue;
        }
        let entry = CompanionEntry {
            name: companion.name.clone(),
            consent_file_url: companion.consent_file_url.clone(),
            minor_documents: parse_identifier_list(&companion.minor_documents_text),
        };
        if index.entries.insert(document.clone(), entry).is_some() {
            index.overwritten.insert(document);
        }
    }
    if skipped > 0 {
        warn!(skipped, "companion rows without a document were not indexed");
    }
    if !index.overwritten.is_empty() {
        warn!(
            duplicates = index.overwritten.len(),
            "duplicate companion documents, later registrations replaced earlier ones"
        );
    }
    index
}
