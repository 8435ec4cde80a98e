use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl EntryKind {
    /// Sign applied to the entry amount in the all-time running total.
    pub fn signed(&self, amount: Decimal) -> Decimal {
        match self {
            EntryKind::Income => amount,
            EntryKind::Expense => -amount,
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Income => write!(f, "Income"),
            EntryKind::Expense => write!(f, "Expense"),
        }
    }
}

/// A single income or expense record.
///
/// Entries are immutable once created. The ledger never deletes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Unique identifier
    pub id: Uuid,

    /// Income or Expense
    pub kind: EntryKind,

    /// Amount in currency units (always positive)
    pub amount: Decimal,

    /// Date of the entry (daily granularity, no time component)
    pub date: NaiveDate,
}

impl LedgerEntry {
    pub fn new(kind: EntryKind, amount: Decimal, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            date,
        }
    }
}
