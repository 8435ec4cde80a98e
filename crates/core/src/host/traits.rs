use rust_decimal::Decimal;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::view::ViewModel;

/// Haptic pulse kinds the host can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Light,
    Medium,
    Warning,
    Success,
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Feedback::Light => write!(f, "light"),
            Feedback::Medium => write!(f, "medium"),
            Feedback::Warning => write!(f, "warning"),
            Feedback::Success => write!(f, "success"),
        }
    }
}

/// Capabilities of the messaging-app shell hosting the widget.
///
/// Every call is fire-and-forget. An absent host is modelled by
/// [`NoopHost`](super::noop::NoopHost). When the user invokes the surfaced
/// action, the host calls `Session::action_invoked`.
pub trait Host {
    /// Play a feedback pulse.
    fn notify(&mut self, kind: Feedback);

    /// Show the confirm action with `label`.
    fn present_action(&mut self, label: &str);

    /// Hide the confirm action.
    fn hide_action(&mut self);

    /// One-shot hand-off of the serialized session state.
    fn submit(&mut self, payload: &str);
}

/// Paints view-models. Pixel mechanics live entirely behind this trait.
pub trait Renderer {
    fn render(&mut self, view: &ViewModel);

    /// Brief emphasis of the goals panel after a contribution.
    fn pulse_goals(&mut self, _duration: Duration) {}
}

/// What the user was asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    IncomeAmount,
    ExpenseAmount,
    GoalName,
    GoalTarget,
    Contribution,
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Prompt::IncomeAmount => write!(f, "Enter income"),
            Prompt::ExpenseAmount => write!(f, "Enter expense"),
            Prompt::GoalName => write!(f, "Goal name"),
            Prompt::GoalTarget => write!(f, "Goal amount"),
            Prompt::Contribution => write!(f, "How much to add?"),
        }
    }
}

/// Answer to a request: a value, or an explicit cancellation.
///
/// `Cancelled` is never the same as zero or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response<T> {
    Value(T),
    Cancelled,
}

impl<T> Response<T> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Response::Cancelled)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Response<U> {
        match self {
            Response::Value(v) => Response::Value(f(v)),
            Response::Cancelled => Response::Cancelled,
        }
    }

    pub fn value(self) -> Option<T> {
        match self {
            Response::Value(v) => Some(v),
            Response::Cancelled => None,
        }
    }
}

impl Response<Decimal> {
    /// Interpret free-text amount input. `None` or blank means the user
    /// dismissed the prompt; anything that is not a number is an error.
    /// Sign is not checked here.
    pub fn parse_amount(raw: Option<&str>) -> Result<Self, CoreError> {
        let Some(text) = raw.map(str::trim).filter(|t| !t.is_empty()) else {
            return Ok(Response::Cancelled);
        };
        Decimal::from_str(text)
            .map(Response::Value)
            .map_err(|_| CoreError::InvalidAmount(format!("'{text}' is not a number")))
    }
}

/// Collects user input: amounts, names, confirmations.
pub trait InputSource {
    fn request_amount(&mut self, prompt: Prompt) -> Response<Decimal>;

    fn request_text(&mut self, prompt: Prompt) -> Response<String>;

    /// Yes/no question. Dismissal counts as "no".
    fn confirm(&mut self, message: &str) -> bool;
}
