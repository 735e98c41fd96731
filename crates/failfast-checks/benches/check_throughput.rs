use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use failfast_checks::{OrderChecks, StandardChecker, ValueChecks};
use failfast_contract::ThreadContractor;

fn bench_checks(c: &mut Criterion) {
    let checker = StandardChecker::new(Arc::new(ThreadContractor::new()));
    let value = Some(42_u64);

    c.bench_function("is_none_passing", |b| {
        b.iter(|| checker.is_none("bench", black_box(&value)))
    });
    c.bench_function("is_outside_passing", |b| {
        b.iter(|| checker.is_outside("bench", black_box(&5_i64), &0, &10))
    });
}

criterion_group!(benches, bench_checks);
criterion_main!(benches);
