pub mod errors;
pub mod host;
pub mod logging;
pub mod models;
pub mod services;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

use errors::CoreError;
use host::clock::{Clock, SystemClock};
use host::noop::{NoInput, NoopHost, NoopRenderer};
use host::traits::{Feedback, Host, InputSource, Prompt, Renderer, Response};
use models::{
    aggregates::Aggregates,
    display::Quantity,
    entry::{EntryKind, LedgerEntry},
    goal::{Goal, GoalSet},
    ledger::Ledger,
    payload::{OperationRecord, SessionSnapshot},
    period::PeriodSelector,
    settings::Settings,
    view::ViewModel,
};
use services::{
    animation_service::ValueAnimator, goal_service::GoalService,
    ledger_service::LedgerService, view_service::ViewService,
};

/// External collaborators a session talks to.
///
/// `Default` gives a detached session: no host, no input, no renderer,
/// wall-clock time.
pub struct Capabilities {
    pub host: Box<dyn Host>,
    pub input: Box<dyn InputSource>,
    pub renderer: Box<dyn Renderer>,
    pub clock: Box<dyn Clock>,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            host: Box::new(NoopHost),
            input: Box::new(NoInput),
            renderer: Box::new(NoopRenderer),
            clock: Box::new(SystemClock),
        }
    }
}

/// Main entry point of the finance widget engine.
/// Owns the ledger, the goals, the displayed figures and the capabilities,
/// and recomputes everything after each mutation.
#[must_use]
pub struct Session {
    ledger: Ledger,
    goals: GoalSet,
    period: PeriodSelector,
    settings: Settings,
    animator: ValueAnimator,
    ledger_service: LedgerService,
    goal_service: GoalService,
    view_service: ViewService,
    host: Box<dyn Host>,
    input: Box<dyn InputSource>,
    renderer: Box<dyn Renderer>,
    clock: Box<dyn Clock>,
    /// Tracks whether any mutation has occurred since the last submit.
    dirty: bool,
    action_visible: bool,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("entries", &self.ledger.len())
            .field("goals", &self.goals.len())
            .field("period", &self.period)
            .field("animating", &self.animator.is_animating())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl Session {
    /// Create a detached session with default settings.
    pub fn create_new() -> Self {
        Self::build(Settings::default(), Capabilities::default())
    }

    /// Create a session with validated settings and the given capabilities.
    pub fn new(settings: Settings, capabilities: Capabilities) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self::build(settings, capabilities))
    }

    // ── Ledger ──────────────────────────────────────────────────────

    /// Record an income or expense entry.
    pub fn add_entry(
        &mut self,
        kind: EntryKind,
        amount: Decimal,
        date: NaiveDate,
    ) -> Result<Uuid, CoreError> {
        let id = self
            .ledger_service
            .add_entry(&mut self.ledger, kind, amount, date)?;
        self.on_mutation(Feedback::Medium);
        Ok(id)
    }

    /// Ask the input capability for an amount and record it dated today.
    pub fn add_operation(&mut self, kind: EntryKind) -> Result<Response<Uuid>, CoreError> {
        let prompt = match kind {
            EntryKind::Income => Prompt::IncomeAmount,
            EntryKind::Expense => Prompt::ExpenseAmount,
        };
        let Response::Value(amount) = self.input.request_amount(prompt) else {
            return Ok(Response::Cancelled);
        };
        let today = self.clock.today();
        self.add_entry(kind, amount, today).map(Response::Value)
    }

    /// All entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[LedgerEntry] {
        self.ledger.entries()
    }

    /// Totals for the active period, evaluated now.
    #[must_use]
    pub fn aggregates(&self) -> Aggregates {
        self.aggregates_at(self.clock.now())
    }

    #[must_use]
    pub fn aggregates_at(&self, now: DateTime<Utc>) -> Aggregates {
        self.ledger_service
            .aggregates(&self.ledger, self.period, now)
    }

    // ── Goals ───────────────────────────────────────────────────────

    pub fn create_goal(&mut self, name: &str, target: Decimal) -> Result<Uuid, CoreError> {
        let id = self
            .goal_service
            .create_goal(&mut self.goals, name, target)?;
        self.on_mutation(Feedback::Light);
        Ok(id)
    }

    /// Add to a goal's saved amount. Returns the updated goal.
    pub fn contribute(&mut self, id: Uuid, amount: Decimal) -> Result<Goal, CoreError> {
        let goal = self
            .goal_service
            .contribute(&mut self.goals, id, amount)?;
        self.on_mutation(Feedback::Light);
        self.renderer.pulse_goals(self.settings.pulse_duration());
        Ok(goal)
    }

    /// Prompt for a name and a target, then create the goal.
    pub fn add_goal(&mut self) -> Result<Response<Uuid>, CoreError> {
        let Response::Value(name) = self.input.request_text(Prompt::GoalName) else {
            return Ok(Response::Cancelled);
        };
        let Response::Value(target) = self.input.request_amount(Prompt::GoalTarget) else {
            return Ok(Response::Cancelled);
        };
        self.create_goal(&name, target).map(Response::Value)
    }

    /// Prompt for an amount and add it to the goal.
    pub fn add_to_goal(&mut self, id: Uuid) -> Result<Response<Goal>, CoreError> {
        if self.goal_service.get(&self.goals, id).is_none() {
            return Err(CoreError::GoalNotFound(id.to_string()));
        }
        let Response::Value(amount) = self.input.request_amount(Prompt::Contribution) else {
            return Ok(Response::Cancelled);
        };
        self.contribute(id, amount).map(Response::Value)
    }

    /// Delete a goal after the user confirms. Returns the removed goal,
    /// or `Cancelled` when the user declines.
    pub fn remove_goal(&mut self, id: Uuid) -> Result<Response<Goal>, CoreError> {
        let name = self
            .goal_service
            .get(&self.goals, id)
            .map(|g| g.name.clone())
            .ok_or_else(|| CoreError::GoalNotFound(id.to_string()))?;

        if !self.input.confirm(&format!("Delete goal \"{name}\"?")) {
            return Ok(Response::Cancelled);
        }

        let removed = self.goal_service.delete(&mut self.goals, id)?;
        self.on_mutation(Feedback::Warning);
        Ok(Response::Value(removed))
    }

    /// All goals in insertion order.
    #[must_use]
    pub fn goals(&self) -> &[Goal] {
        self.goal_service.list(&self.goals)
    }

    #[must_use]
    pub fn goal(&self, id: Uuid) -> Option<&Goal> {
        self.goal_service.get(&self.goals, id)
    }

    // ── Period ──────────────────────────────────────────────────────

    /// Switch the active period and recompute.
    pub fn set_period(&mut self, period: PeriodSelector) {
        debug!(%period, "period selected");
        self.period = period;
        self.recompute();
    }

    #[must_use]
    pub fn period(&self) -> PeriodSelector {
        self.period
    }

    // ── Recompute & Animation ───────────────────────────────────────

    /// Recompute all figures at the clock's current instant.
    pub fn recompute(&mut self) {
        let now = self.clock.now();
        self.recompute_at(now);
    }

    /// Recompute aggregates at `now`, retarget the displayed figures and
    /// render. Running transitions continue from their on-screen value.
    pub fn recompute_at(&mut self, now: DateTime<Utc>) {
        let totals = self.aggregates_at(now);
        for (quantity, value) in [
            (Quantity::Income, totals.income_total),
            (Quantity::Expense, totals.expense_total),
            (Quantity::Balance, totals.balance),
            (Quantity::Total, totals.all_time_total),
        ] {
            self.animator.retarget(quantity, value);
        }
        self.render();
    }

    /// Host frame callback. `now` is the host's monotonic frame timestamp.
    /// Returns `true` while more frames are needed.
    pub fn tick(&mut self, now: Duration) -> bool {
        if !self.animator.tick(now).is_empty() {
            self.render();
        }
        self.animator.is_animating()
    }

    /// Value currently on screen for `quantity`.
    #[must_use]
    pub fn displayed(&self, quantity: Quantity) -> Decimal {
        self.animator.displayed(quantity)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Current view-model, as last handed to the renderer.
    #[must_use]
    pub fn view(&self) -> ViewModel {
        self.view_service.build(
            &self.settings,
            &self.animator,
            self.goal_service.list(&self.goals),
            self.period,
            self.action_visible,
        )
    }

    // ── Host Hand-off ───────────────────────────────────────────────

    /// The state that `submit` hands to the host.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            operations: self.ledger.entries().iter().map(OperationRecord::from).collect(),
            goals: self.goal_service.list(&self.goals).to_vec(),
        }
    }

    /// Send the snapshot to the host and hide the confirm action.
    /// Later mutations start a fresh dirty session.
    pub fn submit(&mut self) -> Result<(), CoreError> {
        let payload = self.snapshot().to_json()?;
        info!(
            operations = self.ledger.len(),
            goals = self.goals.len(),
            "submitting session to host"
        );
        self.host.submit(&payload);
        self.host.hide_action();
        self.action_visible = false;
        self.dirty = false;
        self.host.notify(Feedback::Success);
        self.render();
        Ok(())
    }

    /// Handler for the host's confirm action.
    pub fn action_invoked(&mut self) -> Result<(), CoreError> {
        self.submit()
    }

    /// Returns `true` if anything changed since creation or the last submit.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    #[must_use]
    pub fn is_action_visible(&self) -> bool {
        self.action_visible
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ── Internal ────────────────────────────────────────────────────

    fn on_mutation(&mut self, feedback: Feedback) {
        self.dirty = true;
        if !self.action_visible {
            self.host.present_action(&self.settings.action_label);
            self.action_visible = true;
        }
        self.recompute();
        self.host.notify(feedback);
    }

    fn render(&mut self) {
        let view = self.view();
        self.renderer.render(&view);
    }

    fn build(settings: Settings, capabilities: Capabilities) -> Self {
        let Capabilities {
            host,
            input,
            renderer,
            clock,
        } = capabilities;

        let mut session = Self {
            ledger: Ledger::new(),
            goals: GoalSet::new(),
            period: settings.default_period,
            animator: ValueAnimator::new(settings.animation_duration()),
            settings,
            ledger_service: LedgerService::new(),
            goal_service: GoalService::new(),
            view_service: ViewService::new(),
            host,
            input,
            renderer,
            clock,
            dirty: false,
            action_visible: false,
        };
        session.recompute();
        session
    }
}
