use serde::{Deserialize, Serialize};

use super::entry::LedgerEntry;

/// The ordered collection of financial entries for one session.
///
/// Append-only: entries are kept in insertion order and never removed.
/// Mutate through `LedgerService` so amounts are validated first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    pub(crate) entries: Vec<LedgerEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries, oldest insertion first.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
