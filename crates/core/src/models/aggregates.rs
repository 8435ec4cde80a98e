use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals derived from the ledger for one period selection.
///
/// Never stored: recomputed from the full entry sequence every time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregates {
    /// Sum of income entries inside the period
    pub income_total: Decimal,

    /// Sum of expense entries inside the period
    pub expense_total: Decimal,

    /// income_total - expense_total
    pub balance: Decimal,

    /// Signed sum over the whole ledger (ignores the period)
    pub all_time_total: Decimal,
}
