// Benchmark for calendar boundary computation
// Measures month/week boundary derivation and component extraction

use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use datekit::Calendar;

fn sample_instants(count: usize) -> Vec<DateTime<Utc>> {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    (0..count)
        .map(|i| base + Duration::hours(i as i64 * 37))
        .collect()
}

fn bench_month_boundaries(c: &mut Criterion) {
    let mut group = c.benchmark_group("month_boundaries");
    let calendar = Calendar::new(chrono_tz::Europe::Madrid);

    for count in [10, 100, 1000].iter() {
        let instants = sample_instants(*count);
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &instants,
            |b, instants| {
                b.iter(|| {
                    for &instant in instants {
                        black_box(calendar.start_of_month(instant));
                        black_box(calendar.end_of_month(instant));
                    }
                })
            },
        );
    }

    group.finish();
}

fn bench_week_boundaries(c: &mut Criterion) {
    let mut group = c.benchmark_group("week_boundaries");
    let calendar = Calendar::utc();

    for count in [10, 100, 1000].iter() {
        let instants = sample_instants(*count);
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &instants,
            |b, instants| {
                b.iter(|| {
                    for &instant in instants {
                        black_box(calendar.start_of_week(instant));
                        black_box(calendar.end_of_week(instant));
                    }
                })
            },
        );
    }

    group.finish();
}

fn bench_components(c: &mut Criterion) {
    let calendar = Calendar::new(chrono_tz::Europe::Madrid);
    let instants = sample_instants(1000);

    c.bench_function("components_1000", |b| {
        b.iter(|| {
            for &instant in &instants {
                black_box(calendar.components(instant));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_month_boundaries,
    bench_week_boundaries,
    bench_components
);
criterion_main!(benches);
