use serde::{Deserialize, Serialize};

/// Time window applied to the period-scoped aggregates.
///
/// `Days(n)` keeps entries dated within the last `n × 24h` of the
/// evaluation instant. It is a duration cutoff, not a calendar one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodSelector {
    /// Every entry, regardless of date
    #[default]
    All,
    /// Entries within the last N days, inclusive
    Days(u32),
}

impl std::fmt::Display for PeriodSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PeriodSelector::All => write!(f, "All"),
            PeriodSelector::Days(n) => write!(f, "{n}d"),
        }
    }
}
