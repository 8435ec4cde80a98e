use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::goal::{Goal, GoalSet};

/// Manages savings goals: creation, contributions, deletion.
///
/// Pure business logic without I/O or prompting. Confirmation before
/// deletion is the caller's job.
pub struct GoalService;

impl GoalService {
    pub fn new() -> Self {
        Self
    }

    /// Create a goal with `current = 0`. The name is stored trimmed.
    pub fn create_goal(
        &self,
        goals: &mut GoalSet,
        name: &str,
        target: Decimal,
    ) -> Result<Uuid, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::InvalidName);
        }
        if target <= Decimal::ZERO {
            return Err(CoreError::InvalidTarget(format!(
                "target must be positive, got {target}"
            )));
        }

        let goal = Goal::new(name, target);
        let id = goal.id;
        debug!(%id, name, %target, "goal created");
        goals.goals.push(goal);
        Ok(id)
    }

    /// Add `amount` to a goal. Overshooting the target is allowed.
    /// Returns the updated goal.
    pub fn contribute(
        &self,
        goals: &mut GoalSet,
        id: Uuid,
        amount: Decimal,
    ) -> Result<Goal, CoreError> {
        if amount <= Decimal::ZERO {
            return Err(CoreError::InvalidAmount(format!(
                "contribution must be positive, got {amount}"
            )));
        }
        let goal = goals
            .goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| CoreError::GoalNotFound(id.to_string()))?;

        goal.current = goal.current.checked_add(amount).ok_or_else(|| {
            CoreError::InvalidAmount(format!("contribution {amount} overflows the saved amount"))
        })?;
        debug!(%id, %amount, current = %goal.current, "goal contribution");
        Ok(goal.clone())
    }

    /// Remove a goal. Returns the removed goal.
    pub fn delete(&self, goals: &mut GoalSet, id: Uuid) -> Result<Goal, CoreError> {
        let idx = goals
            .goals
            .iter()
            .position(|g| g.id == id)
            .ok_or_else(|| CoreError::GoalNotFound(id.to_string()))?;

        let removed = goals.goals.remove(idx);
        debug!(%id, name = %removed.name, "goal deleted");
        Ok(removed)
    }

    /// All goals in insertion order.
    pub fn list<'a>(&self, goals: &'a GoalSet) -> &'a [Goal] {
        &goals.goals
    }

    pub fn get<'a>(&self, goals: &'a GoalSet, id: Uuid) -> Option<&'a Goal> {
        goals.goals.iter().find(|g| g.id == id)
    }
}

impl Default for GoalService {
    fn default() -> Self {
        Self::new()
    }
}
