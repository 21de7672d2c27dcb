//! Performance benchmarks for the Payroll Audit Engine.
//!
//! This benchmark suite tracks the cost of reconciliation and report
//! assembly over growing batch sizes.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use payroll_audit::config::AuditConfig;
use payroll_audit::models::TimesheetRecord;
use payroll_audit::reconcile::{DEFAULT_TOLERANCE, discrepancies, reconcile};
use payroll_audit::report::build_report;

/// Generates a batch of records spanning `size` (date, employee) keys.
///
/// With `skew_every = Some(n)`, every n-th record reports an extra half
/// hour, so reconciling against an unskewed batch yields a realistic share
/// of mismatches.
fn generate_batch(size: usize, skew_every: Option<usize>) -> Vec<TimesheetRecord> {
    (0..size)
        .map(|i| {
            let skew = match skew_every {
                Some(n) if i % n == 0 => 50,
                _ => 0,
            };
            TimesheetRecord {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                    + chrono::Days::new((i % 28) as u64),
                employee_id: format!("E{:04}", i / 28),
                total_hours: Decimal::new(800 + (i as i64 % 7) * 25 + skew, 2),
                job_code: Some(format!("JOB{}", i % 5)),
                project_id: Some(format!("P{}", i % 11)),
            }
        })
        .collect()
}

fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile");

    for size in [100, 1_000, 10_000] {
        let tabs = generate_batch(size, None);
        let sap = generate_batch(size, Some(7));

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| reconcile(black_box(&tabs), black_box(&sap), DEFAULT_TOLERANCE).unwrap());
        });
    }

    group.finish();
}

fn bench_report_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("report_assembly");

    for size in [100, 1_000] {
        let tabs = generate_batch(size, None);
        let sap = generate_batch(size, Some(7));
        let pairs = reconcile(&tabs, &sap, DEFAULT_TOLERANCE).unwrap();
        let mismatches = discrepancies(&pairs);
        let config = AuditConfig::default();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                build_report(
                    black_box(&tabs),
                    black_box(&sap),
                    black_box(&mismatches),
                    None,
                    &config,
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reconcile, bench_report_assembly);
criterion_main!(benches);
