use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::display::Quantity;
use super::period::PeriodSelector;

/// Everything a renderer needs to paint one frame of the widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    /// Animated figures in `Quantity::ALL` order
    pub figures: Vec<FigureView>,

    /// Goal progress records, insertion order
    pub goals: Vec<GoalView>,

    /// Period buttons; exactly one is active
    pub periods: Vec<PeriodOption>,

    /// Whether the host confirm action is currently surfaced
    pub action_visible: bool,
}

impl ViewModel {
    /// The figure for one quantity.
    pub fn figure(&self, quantity: Quantity) -> Option<&FigureView> {
        self.figures.iter().find(|f| f.quantity == quantity)
    }

    /// The currently active period button.
    pub fn active_period(&self) -> Option<PeriodSelector> {
        self.periods.iter().find(|p| p.active).map(|p| p.selector)
    }
}

/// One numeric display record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigureView {
    pub quantity: Quantity,
    /// Value currently shown (mid-animation values included)
    pub value: Decimal,
    /// Value the figure is animating towards
    pub target: Decimal,
    /// `value` formatted with grouping and currency symbol
    pub text: String,
}

/// Progress record of one goal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalView {
    pub id: Uuid,
    pub name: String,
    pub current: Decimal,
    pub target: Decimal,
    /// Clamped to [0, 100]
    pub progress_percent: f64,
    /// "current / target" formatted for display
    pub caption: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodOption {
    pub selector: PeriodSelector,
    pub active: bool,
}
