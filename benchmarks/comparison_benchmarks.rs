#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Comparison benchmarks: qparams vs `url::form_urlencoded`
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use qparams::{Options, QueryParameterSet};
use url::form_urlencoded;

/// Build a query string with `count` distinct keys
fn sample_query(count: usize) -> String {
    (0..count)
        .map(|i| format!("key{i}=value{i}"))
        .collect::<Vec<_>>()
        .join("&")
}

fn bench_parse_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let input = sample_query(16);

    group.bench_function("qparams", |b| {
        b.iter(|| QueryParameterSet::parse(black_box(&input)));
    });

    group.bench_function("qparams_encoded", |b| {
        let options = Options::new().encode(true);
        b.iter(|| QueryParameterSet::parse_with(black_box(&input), options).unwrap());
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| {
            form_urlencoded::parse(black_box(input.as_bytes()))
                .into_owned()
                .collect::<Vec<(String, String)>>()
        });
    });

    group.finish();
}

fn bench_render_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let pairs: Vec<(String, String)> = (0..16)
        .map(|i| (format!("key{i}"), format!("value {i}&more")))
        .collect();

    let plain: QueryParameterSet = pairs.iter().cloned().collect();
    group.bench_function("qparams", |b| {
        b.iter(|| black_box(&plain).to_string());
    });

    let mut encoded = QueryParameterSet::with_options(Options::new().encode(true));
    encoded.update(pairs.iter().cloned());
    group.bench_function("qparams_encoded", |b| {
        b.iter(|| black_box(&encoded).to_string());
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| {
            form_urlencoded::Serializer::new(String::new())
                .extend_pairs(black_box(&pairs))
                .finish()
        });
    });

    group.finish();
}

fn bench_update_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("update");
    let input = sample_query(16);

    group.bench_function("overwrite_and_remove", |b| {
        let base = QueryParameterSet::parse(&input);
        b.iter(|| {
            let mut params = base.clone();
            params
                .update([("key3", "changed"), ("key7", ""), ("extra", "1")])
                .update([("key3", "")]);
            params
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse_all, bench_render_all, bench_update_all);
criterion_main!(benches);
