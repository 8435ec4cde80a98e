use rust_decimal::Decimal;

use crate::models::display::Quantity;
use crate::models::goal::Goal;
use crate::models::period::PeriodSelector;
use crate::models::settings::Settings;
use crate::models::view::{FigureView, GoalView, PeriodOption, ViewModel};
use crate::services::animation_service::ValueAnimator;

/// Builds immutable view-models from engine state. No rendering happens
/// here; a renderer consumes the result.
pub struct ViewService;

impl ViewService {
    pub fn new() -> Self {
        Self
    }

    pub fn build(
        &self,
        settings: &Settings,
        animator: &ValueAnimator,
        goals: &[Goal],
        period: PeriodSelector,
        action_visible: bool,
    ) -> ViewModel {
        let figures = Quantity::ALL
            .iter()
            .map(|&quantity| {
                let shown = animator.value(quantity);
                FigureView {
                    quantity,
                    value: shown.previous,
                    target: shown.target,
                    text: format_money(shown.previous, settings),
                }
            })
            .collect();

        let goals = goals
            .iter()
            .map(|goal| GoalView {
                id: goal.id,
                name: goal.name.clone(),
                current: goal.current,
                target: goal.target,
                progress_percent: goal.progress_percent(),
                caption: format!(
                    "{} / {}",
                    format_money(goal.current, settings),
                    format_money(goal.target, settings)
                ),
            })
            .collect();

        ViewModel {
            figures,
            goals,
            periods: period_options(&settings.period_presets, period),
            action_visible,
        }
    }
}

impl Default for ViewService {
    fn default() -> Self {
        Self::new()
    }
}

/// Preset buttons with the active one flagged. A selector that is not a
/// preset is appended so one button is always active.
pub fn period_options(presets: &[PeriodSelector], active: PeriodSelector) -> Vec<PeriodOption> {
    let mut options: Vec<PeriodOption> = presets
        .iter()
        .map(|&selector| PeriodOption {
            selector,
            active: selector == active,
        })
        .collect();

    if !options.iter().any(|o| o.active) {
        options.push(PeriodOption {
            selector: active,
            active: true,
        });
    }
    options
}

/// Format an amount with digit grouping and the currency symbol,
/// e.g. `35 000 ₽`. Fractional digits are kept only when present.
pub fn format_money(value: Decimal, settings: &Settings) -> String {
    let grouped = group_digits(value, settings.group_separator);
    if settings.currency_symbol.is_empty() {
        grouped
    } else {
        format!("{grouped} {}", settings.currency_symbol)
    }
}

fn group_digits(value: Decimal, separator: char) -> String {
    let text = value.normalize().to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

