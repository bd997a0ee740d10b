//! Benchmarks for attribute deserialization and settings merging

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use horizontally_core::settings::{AttrValue, Settings};
use horizontally_core::vendor::{VendorPrefix, camel_case};

fn bench_deserialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("deserialize");

    for raw in ["true", "null", "3.14", "-12e4", "rotate-left"] {
        group.bench_function(raw, |b| {
            b.iter(|| AttrValue::deserialize(black_box(raw)));
        });
    }

    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let overrides = Settings::new().with("test", true).with("speed", 2.0);
    let attributes = Settings::new().with("test", false).with("label", "tilt");

    c.bench_function("settings_merge", |b| {
        b.iter(|| {
            let mut settings = Settings::defaults();
            settings.merge(black_box(&overrides));
            settings.merge(black_box(&attributes));
            settings
        });
    });
}

fn bench_dom_names(c: &mut Criterion) {
    c.bench_function("dom_names", |b| {
        b.iter(|| {
            VendorPrefix::ALL
                .iter()
                .map(|prefix| prefix.dom_name(black_box("transform-origin")))
                .collect::<Vec<_>>()
        });
    });

    c.bench_function("camel_case", |b| {
        b.iter(|| camel_case(black_box("-webkit-transform-origin")));
    });
}

criterion_group!(benches, bench_deserialize, bench_merge, bench_dom_names);
criterion_main!(benches);
