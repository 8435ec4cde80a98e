use chrono::NaiveDate;
use finance_widget_core::errors::CoreError;
use finance_widget_core::host::traits::Response;
use finance_widget_core::models::display::{DisplayedValue, Quantity};
use finance_widget_core::models::entry::{EntryKind, LedgerEntry};
use finance_widget_core::models::goal::Goal;
use finance_widget_core::models::payload::{OperationRecord, SessionSnapshot};
use finance_widget_core::models::period::PeriodSelector;
use finance_widget_core::models::settings::Settings;
use rust_decimal::Decimal;
use serde_json::Value;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn dec(v: i64) -> Decimal {
    Decimal::from(v)
}

fn goal(current: i64, target: i64) -> Goal {
    Goal {
        current: dec(current),
        ..Goal::new("Goal", dec(target))
    }
}

// ═══════════════════════════════════════════════════════════════════
//  EntryKind / LedgerEntry
// ═══════════════════════════════════════════════════════════════════

mod entry {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(EntryKind::Income.to_string(), "Income");
        assert_eq!(EntryKind::Expense.to_string(), "Expense");
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&EntryKind::Income).unwrap(), "\"income\"");
        assert_eq!(serde_json::to_string(&EntryKind::Expense).unwrap(), "\"expense\"");
        let back: EntryKind = serde_json::from_str("\"expense\"").unwrap();
        assert_eq!(back, EntryKind::Expense);
    }

    #[test]
    fn signed_amounts() {
        assert_eq!(EntryKind::Income.signed(dec(40)), dec(40));
        assert_eq!(EntryKind::Expense.signed(dec(40)), dec(-40));
    }

    #[test]
    fn new_entries_get_distinct_ids() {
        let a = LedgerEntry::new(EntryKind::Income, dec(1), d(2026, 1, 1));
        let b = LedgerEntry::new(EntryKind::Income, dec(1), d(2026, 1, 1));
        assert_ne!(a.id, b.id);
        assert_eq!(a.amount, b.amount);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  PeriodSelector
// ═══════════════════════════════════════════════════════════════════

mod period {
    use super::*;

    #[test]
    fn default_is_all() {
        assert_eq!(PeriodSelector::default(), PeriodSelector::All);
    }

    #[test]
    fn display() {
        assert_eq!(PeriodSelector::All.to_string(), "All");
        assert_eq!(PeriodSelector::Days(30).to_string(), "30d");
    }

    #[test]
    fn serde_shape() {
        assert_eq!(serde_json::to_string(&PeriodSelector::All).unwrap(), "\"all\"");
        assert_eq!(
            serde_json::to_string(&PeriodSelector::Days(7)).unwrap(),
            "{\"days\":7}"
        );
        let back: PeriodSelector = serde_json::from_str("{\"days\":365}").unwrap();
        assert_eq!(back, PeriodSelector::Days(365));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Goal
// ═══════════════════════════════════════════════════════════════════

mod goal_model {
    use super::*;

    #[test]
    fn new_goal_has_zero_progress() {
        let g = Goal::new("Travel", dec(620_000));
        assert_eq!(g.current, Decimal::ZERO);
        assert_eq!(g.progress_percent(), 0.0);
        assert!(!g.is_reached());
    }

    #[test]
    fn progress_scenario() {
        let pct = goal(417_507, 1_500_000).progress_percent();
        assert!((pct - 27.83).abs() < 0.01, "got {pct}");
    }

    #[test]
    fn progress_is_clamped_when_overshooting() {
        let g = goal(2_000, 1_000);
        assert_eq!(g.progress_percent(), 100.0);
        assert!(g.is_reached());
        assert_eq!(g.current, dec(2_000));
    }

    #[test]
    fn progress_stays_in_range() {
        for (current, target) in [(0, 1), (1, 3), (999, 1000), (1000, 1000), (5, 1), (123_456, 7)] {
            let pct = goal(current, target).progress_percent();
            assert!((0.0..=100.0).contains(&pct), "{current}/{target} -> {pct}");
        }
    }

    #[test]
    fn ids_are_unique() {
        let a = Goal::new("A", dec(1));
        let b = Goal::new("A", dec(1));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn serializes_payload_fields() {
        let g = goal(417_507, 1_500_000);
        let json: Value = serde_json::to_value(&g).unwrap();
        assert_eq!(json["id"], Value::String(g.id.to_string()));
        assert_eq!(json["name"], "Goal");
        assert_eq!(json["current"].as_f64(), Some(417_507.0));
        assert_eq!(json["target"].as_f64(), Some(1_500_000.0));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Display values
// ═══════════════════════════════════════════════════════════════════

mod display_value {
    use super::*;

    #[test]
    fn settled_when_previous_matches_target() {
        let settled = DisplayedValue { previous: dec(5), target: dec(5) };
        let moving = DisplayedValue { previous: dec(1), target: dec(5) };
        assert!(settled.is_settled());
        assert!(!moving.is_settled());
        assert!(DisplayedValue::default().is_settled());
    }

    #[test]
    fn quantity_names() {
        let names: Vec<String> = Quantity::ALL.iter().map(|q| q.to_string()).collect();
        assert_eq!(names, ["income", "expense", "balance", "total"]);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.currency_symbol, "₽");
        assert_eq!(s.animation_duration_ms, 500);
        assert_eq!(s.pulse_duration_ms, 300);
        assert_eq!(s.default_period, PeriodSelector::All);
        assert_eq!(s.period_presets.len(), 4);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let s = Settings::from_json(r#"{"currency_symbol":"$","animation_duration_ms":250}"#)
            .unwrap();
        assert_eq!(s.currency_symbol, "$");
        assert_eq!(s.animation_duration_ms, 250);
        assert_eq!(s.action_label, "Save");
        assert_eq!(s.animation_duration(), std::time::Duration::from_millis(250));
    }

    #[test]
    fn empty_action_label_is_invalid() {
        let err = Settings::from_json(r#"{"action_label":"  "}"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSettings(_)));
    }

    #[test]
    fn empty_presets_are_invalid() {
        let s = Settings {
            period_presets: vec![],
            ..Settings::default()
        };
        assert!(matches!(s.validate(), Err(CoreError::InvalidSettings(_))));
    }

    #[test]
    fn malformed_json_is_a_deserialization_error() {
        let err = Settings::from_json("{not json").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  SessionSnapshot (host payload)
// ═══════════════════════════════════════════════════════════════════

mod payload {
    use super::*;

    fn snapshot() -> SessionSnapshot {
        let entries = [
            LedgerEntry::new(EntryKind::Income, dec(50000), d(2026, 1, 20)),
            LedgerEntry::new(EntryKind::Expense, dec(15000), d(2026, 1, 22)),
        ];
        SessionSnapshot {
            operations: entries.iter().map(OperationRecord::from).collect(),
            goals: vec![goal(417_507, 1_500_000)],
        }
    }

    #[test]
    fn json_shape() {
        let json: Value = serde_json::from_str(&snapshot().to_json().unwrap()).unwrap();
        let ops = json["operations"].as_array().unwrap();
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0]["kind"], "income");
        assert_eq!(ops[0]["amount"].as_f64(), Some(50000.0));
        assert_eq!(ops[0]["date"], "2026-01-20");
        assert_eq!(ops[1]["kind"], "expense");
        assert!(ops[0].get("id").is_none());

        let goals = json["goals"].as_array().unwrap();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0]["name"], "Goal");
    }

    #[test]
    fn amounts_keep_every_digit() {
        let amount = Decimal::from_i128_with_scale(1_234_567_890_123_456_789, 2);
        let snapshot = SessionSnapshot {
            operations: vec![OperationRecord {
                kind: EntryKind::Income,
                amount,
                date: d(2026, 1, 20),
            }],
            goals: vec![],
        };

        let json = snapshot.to_json().unwrap();
        assert!(json.contains(r#""amount":12345678901234567.89"#));
        let back = SessionSnapshot::from_json(&json).unwrap();
        assert_eq!(back.operations[0].amount, amount);
    }

    #[test]
    fn parses_back() {
        let original = snapshot();
        let back = SessionSnapshot::from_json(&original.to_json().unwrap()).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            SessionSnapshot::from_json("[]"),
            Err(CoreError::Deserialization(_))
        ));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Response (input capability answers)
// ═══════════════════════════════════════════════════════════════════

mod response {
    use super::*;

    #[test]
    fn missing_or_blank_input_is_cancelled() {
        assert_eq!(Response::<Decimal>::parse_amount(None), Ok(Response::Cancelled));
        assert_eq!(Response::<Decimal>::parse_amount(Some("")), Ok(Response::Cancelled));
        assert_eq!(Response::<Decimal>::parse_amount(Some("   ")), Ok(Response::Cancelled));
    }

    #[test]
    fn numbers_parse() {
        assert_eq!(Response::<Decimal>::parse_amount(Some("500")), Ok(Response::Value(dec(500))));
        assert_eq!(
            Response::<Decimal>::parse_amount(Some(" 12.50 ")),
            Ok(Response::Value(Decimal::new(1250, 2)))
        );
    }

    #[test]
    fn non_numeric_is_invalid_amount() {
        let err = Response::<Decimal>::parse_amount(Some("lots")).unwrap_err();
        assert!(matches!(err, CoreError::InvalidAmount(_)));
    }

    #[test]
    fn map_and_value() {
        assert_eq!(Response::Value(2).map(|v| v * 3), Response::Value(6));
        assert!(Response::<i32>::Cancelled.map(|v| v * 3).is_cancelled());
        assert_eq!(Response::Value("x").value(), Some("x"));
        assert_eq!(Response::<&str>::Cancelled.value(), None);
    }
}
