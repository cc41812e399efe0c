//! Interest accrual engine
//!
//! Reconstructs the balance-over-time history inside a statement's calendar
//! month and integrates a fixed daily rate over every balance-holding
//! interval, including the tail interval through month-end.
//!
//! # Model
//!
//! The walk operates on UTC day-of-month integers only: the statement is
//! assumed to belong to the accrual month, and the year/month fields of
//! entry timestamps are ignored. Interest is simple daily interest on the
//! principal balance — no compounding — recomputed fresh on every call.

use crate::types::{LedgerEntry, Statement};
use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Days per year used to derive the daily rate; not leap-adjusted
const DAYS_PER_YEAR: i64 = 365;

/// Annual interest rate applied to principal balances
fn annual_rate() -> Decimal {
    dec!(0.02)
}

/// Daily interest rate: [`annual_rate`] over [`DAYS_PER_YEAR`]
fn daily_rate() -> Decimal {
    annual_rate() / Decimal::from(DAYS_PER_YEAR)
}

/// Interest earned by `balance` held constant for `days` days
fn interest_for(balance: Decimal, days: i64) -> Decimal {
    balance * Decimal::from(days) * daily_rate()
}

/// Number of days in the month containing `at` (UTC)
fn days_in_month(at: DateTime<Utc>) -> i64 {
    // The day before the first of the next month is the last day of this one.
    NaiveDate::from_ymd_opt(at.year(), at.month(), 1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next_first| next_first.pred_opt())
        .map_or(31, |last| i64::from(last.day()))
}

/// Accrue daily interest from a statement snapshot through month-end
///
/// Walks the entries in chronological order. Whenever the day-of-month
/// advances, the balance held since the previous event earns
/// `balance × elapsed days × daily rate`; the entry amount then takes
/// effect from its own day onward. After the last entry, the closing
/// balance earns interest through the final day of the statement's month,
/// with both the transition day and the month's last day counted.
///
/// Entries are sorted by timestamp before the walk, so insertion order does
/// not matter. Entries sharing a day stack their balance effect with no
/// intermediate interest charge. Day deltas are signed: a statement from an
/// earlier month yields the same wrong figure the day-of-month model always
/// produced, never a panic.
pub fn accrue(statement: &Statement, entries: &[LedgerEntry]) -> Decimal {
    let mut ordered: Vec<&LedgerEntry> = entries.iter().collect();
    ordered.sort_by_key(|entry| entry.effective_at);

    let mut accrued = Decimal::ZERO;
    let mut balance = statement.balance;
    let mut day = i64::from(statement.recorded_at.day());

    for entry in ordered {
        let entry_day = i64::from(entry.effective_at.day());
        if entry_day > day {
            accrued += interest_for(balance, entry_day - day);
        }
        day = entry_day;
        balance += entry.amount;
    }

    accrued + interest_for(balance, days_in_month(statement.recorded_at) - day + 1)
}
