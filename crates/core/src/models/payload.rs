use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

use super::entry::{EntryKind, LedgerEntry};
use super::goal::Goal;

/// One ledger entry as handed to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationRecord {
    pub kind: EntryKind,
    pub amount: Decimal,
    pub date: NaiveDate,
}

impl From<&LedgerEntry> for OperationRecord {
    fn from(entry: &LedgerEntry) -> Self {
        Self {
            kind: entry.kind,
            amount: entry.amount,
            date: entry.date,
        }
    }
}

/// The state reported to the host on submit:
/// `{ operations: [...], goals: [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub operations: Vec<OperationRecord>,
    pub goals: Vec<Goal>,
}

impl SessionSnapshot {
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize snapshot: {e}")))
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}
