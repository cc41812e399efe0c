//! Benchmark suite for the interest accrual walk
//!
//! Measures the pure accrual walk over prebuilt ledgers and the full engine
//! call (consistent snapshot read plus walk) at increasing ledger sizes,
//! using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use chrono::{DateTime, TimeZone, Utc};
use investment_engine::core::accrual;
use investment_engine::{EntryKind, InvestmentEngine, LedgerEntry, MemoryStore, Statement};
use rust_decimal::Decimal;

fn main() {
    divan::main();
}

fn january(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, day, 0, 0, 0).unwrap()
}

/// Build a statement and a ledger of alternating deposits and withdrawals
/// spread over the month
fn fixture(entry_count: u64) -> (Statement, Vec<LedgerEntry>) {
    let statement = Statement {
        id: 1,
        account_id: 1,
        balance: Decimal::new(0, 4),
        recorded_at: january(1),
    };

    let entries = (0..entry_count)
        .map(|i| {
            let withdrawing = i % 3 == 0;
            LedgerEntry {
                id: i,
                account_id: 1,
                kind: if withdrawing {
                    EntryKind::Withdrawal
                } else {
                    EntryKind::Deposit
                },
                amount: if withdrawing {
                    Decimal::new(-250_000, 4)
                } else {
                    Decimal::new(1_000_000, 4)
                },
                effective_at: january((i % 28 + 1) as u32),
            }
        })
        .collect();

    (statement, entries)
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn accrual_walk(bencher: divan::Bencher, entry_count: u64) {
    let (statement, entries) = fixture(entry_count);

    bencher.bench_local(|| {
        accrual::accrue(divan::black_box(&statement), divan::black_box(&entries))
    });
}

#[divan::bench(args = [100, 1_000])]
fn engine_interest_accrued(bencher: divan::Bencher, entry_count: u64) {
    let engine = InvestmentEngine::new(MemoryStore::new());
    engine.create_account("bench", january(1)).unwrap();
    for i in 0..entry_count {
        engine
            .deposit("bench", "100", january((i % 28 + 1) as u32))
            .unwrap();
    }

    bencher.bench_local(|| engine.interest_accrued(divan::black_box("bench")).unwrap());
}
