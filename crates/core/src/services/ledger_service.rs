use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::aggregates::Aggregates;
use crate::models::entry::{EntryKind, LedgerEntry};
use crate::models::ledger::Ledger;
use crate::models::period::PeriodSelector;

const MS_PER_DAY: i64 = 86_400_000;

/// Appends ledger entries and computes period-scoped totals.
///
/// Pure business logic, no I/O. The ledger is passed in by its owner.
pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Append a new entry. Rejects zero or negative amounts, and amounts
    /// that would push the ledger's running totals past `Decimal::MAX`.
    pub fn add_entry(
        &self,
        ledger: &mut Ledger,
        kind: EntryKind,
        amount: Decimal,
        date: NaiveDate,
    ) -> Result<Uuid, CoreError> {
        if amount <= Decimal::ZERO {
            return Err(CoreError::InvalidAmount(format!(
                "{kind} amount must be positive, got {amount}"
            )));
        }
        Self::running_total(ledger, kind)
            .checked_add(amount)
            .ok_or_else(|| {
                CoreError::InvalidAmount(format!(
                    "{kind} amount {amount} overflows the ledger total"
                ))
            })?;

        let entry = LedgerEntry::new(kind, amount, date);
        let id = entry.id;
        debug!(%id, %kind, %amount, %date, "ledger entry added");
        ledger.entries.push(entry);
        Ok(id)
    }

    /// Compute all totals for `period`, evaluated at `now`.
    ///
    /// Walks the whole ledger every call; nothing is cached.
    pub fn aggregates(
        &self,
        ledger: &Ledger,
        period: PeriodSelector,
        now: DateTime<Utc>,
    ) -> Aggregates {
        let mut totals = Aggregates::default();

        for entry in &ledger.entries {
            totals.all_time_total = totals
                .all_time_total
                .saturating_add(entry.kind.signed(entry.amount));

            if !Self::in_period(entry.date, period, now) {
                continue;
            }
            match entry.kind {
                EntryKind::Income => {
                    totals.income_total = totals.income_total.saturating_add(entry.amount)
                }
                EntryKind::Expense => {
                    totals.expense_total = totals.expense_total.saturating_add(entry.amount)
                }
            }
        }

        totals.balance = totals.income_total.saturating_sub(totals.expense_total);
        totals
    }

    /// Entries passing the period filter, insertion order.
    pub fn filtered_entries<'a>(
        &self,
        ledger: &'a Ledger,
        period: PeriodSelector,
        now: DateTime<Utc>,
    ) -> Vec<&'a LedgerEntry> {
        ledger
            .entries
            .iter()
            .filter(|e| Self::in_period(e.date, period, now))
            .collect()
    }

    /// All-time sum of one kind. `add_entry` keeps this within range, so
    /// every period-scoped sum is too.
    fn running_total(ledger: &Ledger, kind: EntryKind) -> Decimal {
        ledger
            .entries
            .iter()
            .filter(|e| e.kind == kind)
            .fold(Decimal::ZERO, |acc, e| acc.saturating_add(e.amount))
    }

    /// Period filter: `(now - date@00:00 UTC) <= N days`, measured in
    /// milliseconds. Future dates give a negative delta and always pass.
    pub fn in_period(date: NaiveDate, period: PeriodSelector, now: DateTime<Utc>) -> bool {
        match period {
            PeriodSelector::All => true,
            PeriodSelector::Days(n) => {
                let start = date.and_time(NaiveTime::MIN).and_utc();
                let elapsed_ms = (now - start).num_milliseconds();
                elapsed_ms <= i64::from(n) * MS_PER_DAY
            }
        }
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}
