use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use metaleaf::classify::classify;
use metaleaf::coerce::coerce;
use metaleaf::datatype::{DataKind, RawContent};

pub fn criterion_benchmark(c: &mut Criterion) {
    let samples = [
        "1;2",
        "2021-05-01",
        "2021-13-40",
        "12:30:00",
        "2021-05-01 12:30:00",
        "42",
        "3.14",
        "true",
        "a single word",
        "word",
    ];
    c.bench_function("classify mixed", |b| {
        b.iter(|| {
            for s in &samples {
                black_box(classify(black_box(s)));
            }
        })
    });

    let int_raw = RawContent::from("12.7");
    c.bench_function("coerce int", |b| {
        b.iter(|| black_box(coerce(black_box(&int_raw), DataKind::Int)))
    });

    let datetime_raw = RawContent::from("2021-05-01 12:30:00");
    c.bench_function("coerce datetime", |b| {
        b.iter(|| black_box(coerce(black_box(&datetime_raw), DataKind::Datetime)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
