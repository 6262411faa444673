//! Performance benchmarks for the shift ledger.
//!
//! Measures the pay calculator on its own, rendering ledgers of growing
//! size, and the add path including the full snapshot write.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use shift_ledger::calculation::compute;
use shift_ledger::config::LedgerConfig;
use shift_ledger::ledger::{CollectingNotifier, MemoryStore, RecordingSink, ShiftLedger};
use shift_ledger::models::ShiftForm;

/// Creates a form for an ordinary 8-hour day.
fn day_form() -> ShiftForm {
    ShiftForm::from_defaults(&LedgerConfig::default().form_defaults)
}

/// Creates a ledger holding `count` shifts spread over the first 28 days of a month.
fn ledger_with_shifts(count: usize) -> ShiftLedger<MemoryStore, RecordingSink> {
    let mut ledger = ShiftLedger::load(
        MemoryStore::new(),
        RecordingSink::default(),
        LedgerConfig::default(),
    );
    let mut notifier = CollectingNotifier::default();
    let form = day_form();

    for i in 0..count {
        let date = format!("2026-01-{:02}", i % 28 + 1);
        ledger
            .add_shift(&form, &format!("Shift {}", i), &date, "$", &mut notifier)
            .expect("benchmark shift should be computable");
    }
    ledger
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");

    group.bench_function("day_shift", |b| {
        b.iter(|| {
            compute(
                black_box("09:00"),
                black_box("17:30"),
                black_box("22.50"),
                black_box("30"),
                black_box(false),
            )
        })
    });

    group.bench_function("overnight_shift", |b| {
        b.iter(|| {
            compute(
                black_box("22:00"),
                black_box("06:00"),
                black_box("31.75"),
                black_box("45"),
                black_box(true),
            )
        })
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for count in [10usize, 100, 1000] {
        let ledger = ledger_with_shifts(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &ledger, |b, ledger| {
            b.iter(|| black_box(ledger.list_view()))
        });
    }

    group.finish();
}

fn bench_add_shift(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_shift");
    let form = day_form();

    for existing in [0usize, 100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("with_existing", existing),
            &existing,
            |b, &existing| {
                b.iter_batched(
                    || ledger_with_shifts(existing),
                    |mut ledger| {
                        let mut notifier = CollectingNotifier::default();
                        ledger
                            .add_shift(&form, "Bench", "2026-02-01", "$", &mut notifier)
                            .expect("benchmark shift should be computable");
                        ledger
                    },
                    criterion::BatchSize::LargeInput,
                )
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_compute, bench_render, bench_add_shift);
criterion_main!(benches);
