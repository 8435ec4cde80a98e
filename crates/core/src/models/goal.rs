use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Upper bound of the progress bar.
const FULL_PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// A named savings target with accumulated progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier (random, never reused)
    pub id: Uuid,

    /// Display label (trimmed, non-empty)
    pub name: String,

    /// Amount saved so far. May exceed `target`.
    pub current: Decimal,

    /// Amount to reach (always positive)
    pub target: Decimal,
}

impl Goal {
    pub fn new(name: impl Into<String>, target: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            current: Decimal::ZERO,
            target,
        }
    }

    /// `min(100, 100 × current / target)`, for progress-bar rendering.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.target <= Decimal::ZERO {
            return 0.0;
        }
        let pct = self
            .current
            .checked_mul(FULL_PERCENT)
            .and_then(|scaled| scaled.checked_div(self.target))
            .unwrap_or(FULL_PERCENT)
            .clamp(Decimal::ZERO, FULL_PERCENT);
        pct.to_f64().unwrap_or(0.0)
    }

    /// Whether the saved amount has reached the target.
    #[must_use]
    pub fn is_reached(&self) -> bool {
        self.current >= self.target
    }
}

/// The ordered set of goals owned by a session. Iteration order is
/// insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalSet {
    pub(crate) goals: Vec<Goal>,
}

impl GoalSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }
}
