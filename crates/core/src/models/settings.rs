use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

use super::period::PeriodSelector;

/// Widget configuration, supplied by the host at start-up.
///
/// Every field has a default, so a partial JSON object is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Symbol appended to formatted amounts (e.g., "₽", "$").
    pub currency_symbol: String,

    /// Separator inserted between digit groups of formatted amounts.
    pub group_separator: char,

    /// Length of a figure transition in milliseconds.
    pub animation_duration_ms: u64,

    /// Length of the goals-panel pulse after a contribution, in milliseconds.
    pub pulse_duration_ms: u64,

    /// Label of the host confirm action.
    pub action_label: String,

    /// Period buttons offered to the user, in display order.
    pub period_presets: Vec<PeriodSelector>,

    /// Period active when the session starts.
    pub default_period: PeriodSelector,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: "₽".to_string(),
            group_separator: '\u{a0}',
            animation_duration_ms: 500,
            pulse_duration_ms: 300,
            action_label: "Save".to_string(),
            period_presets: vec![
                PeriodSelector::All,
                PeriodSelector::Days(7),
                PeriodSelector::Days(30),
                PeriodSelector::Days(365),
            ],
            default_period: PeriodSelector::All,
        }
    }
}

impl Settings {
    /// Parse settings from host-supplied JSON and validate them.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.action_label.trim().is_empty() {
            return Err(CoreError::InvalidSettings(
                "action label must not be empty".into(),
            ));
        }
        if self.period_presets.is_empty() {
            return Err(CoreError::InvalidSettings(
                "at least one period preset is required".into(),
            ));
        }
        Ok(())
    }

    pub fn animation_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.animation_duration_ms)
    }

    pub fn pulse_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.pulse_duration_ms)
    }
}
