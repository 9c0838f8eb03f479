// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the locale resolution hot path.
//!
//! Measures the performance of:
//! - Raw tag normalization
//! - The localized field cascade
//! - Dictionary lookup including the fallback hop

use criterion::{criterion_group, criterion_main, Criterion};
use std::collections::HashMap;
use std::hint::black_box;

use astra_center::diagnostics::Diagnostics;
use astra_center::i18n::{resolve_text, Dictionaries, Locale, LocaleTag};
use serde_json::json;

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("locale_resolution");

    group.bench_function("normalize_regional_tag", |b| {
        b.iter(|| black_box(Locale::normalize(black_box(Some("en_US.UTF-8")))));
    });

    group.finish();
}

fn bench_field_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("locale_resolution");

    let record = match json!({
        "summary": "Base",
        "summary_en": "English",
        "summary_pt_BR": "BR"
    }) {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    };
    let tag = LocaleTag::new("pt-BR");

    group.bench_function("field_cascade_full_hit", |b| {
        b.iter(|| black_box(resolve_text(&record, black_box("summary"), &tag, None)));
    });

    group.finish();
}

fn bench_dictionary_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("locale_resolution");

    let mut maps = HashMap::new();
    maps.insert(
        Locale::Pt,
        HashMap::from([("install-button".to_string(), "Instalar".to_string())]),
    );
    maps.insert(
        Locale::En,
        HashMap::from([
            ("install-button".to_string(), "Install".to_string()),
            ("open-button".to_string(), "Open".to_string()),
        ]),
    );
    let dictionaries = Dictionaries::from_parts(maps, Diagnostics::default());

    group.bench_function("lookup_active_hit", |b| {
        b.iter(|| black_box(dictionaries.get_text(Locale::Pt, black_box("install-button"))));
    });

    group.bench_function("lookup_fallback_hop", |b| {
        b.iter(|| black_box(dictionaries.get_text(Locale::Pt, black_box("open-button"))));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_normalize,
    bench_field_cascade,
    bench_dictionary_lookup
);
criterion_main!(benches);
