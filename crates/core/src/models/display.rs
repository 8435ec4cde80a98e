use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identity of an animated on-screen figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    Income,
    Expense,
    Balance,
    /// All-time signed total
    Total,
}

impl Quantity {
    pub const ALL: [Quantity; 4] = [
        Quantity::Income,
        Quantity::Expense,
        Quantity::Balance,
        Quantity::Total,
    ];
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quantity::Income => write!(f, "income"),
            Quantity::Expense => write!(f, "expense"),
            Quantity::Balance => write!(f, "balance"),
            Quantity::Total => write!(f, "total"),
        }
    }
}

/// Last-shown and newly-computed value of one figure.
///
/// `previous` follows every emitted frame, so a transition started
/// mid-animation begins where the screen currently is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayedValue {
    pub previous: Decimal,
    pub target: Decimal,
}

impl DisplayedValue {
    /// True once the screen shows the target.
    pub fn is_settled(&self) -> bool {
        self.previous == self.target
    }
}
