//! Construction cost vs per-query cost of the language catalog
//!
//! Run with: cargo bench -p langcat-core
//!
//! The tables are synthetic but sized like a real deployment: a few hundred
//! written languages and a few dozen audio languages.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use langcat_core::catalog::LanguageCatalog;
use langcat_core::probe::StaticProbe;
use langcat_core::tables::{
    AudioLanguageRecord, AutogeneratedAudioLanguageRecord, LanguageRecord, SourceTables,
};

fn synthetic_tables() -> SourceTables {
    let languages = (0..400)
        .map(|i| LanguageRecord::new(format!("l{i}"), format!("Language {i} (L{i})")))
        .collect();
    let audio = (0..60)
        .map(|i| {
            AudioLanguageRecord::new(
                format!("l{i}"),
                format!("Audio {i}"),
                [format!("l{i}"), format!("l{}", i + 1)],
            )
        })
        .collect();
    let autogenerated = (0..20)
        .map(|i| AutogeneratedAudioLanguageRecord::new(format!("l{i}-auto"), format!("l{i}")))
        .collect();
    SourceTables::new(languages, audio, autogenerated)
}

fn bench_construction(c: &mut Criterion) {
    let tables = synthetic_tables();

    c.bench_function("build catalog", |b| {
        b.iter(|| LanguageCatalog::new(black_box(&tables), StaticProbe(true)).unwrap())
    });
}

fn bench_queries(c: &mut Criterion) {
    let catalog = LanguageCatalog::new(&synthetic_tables(), StaticProbe(true)).unwrap();
    let chosen: Vec<String> = (0..30).map(|i| format!("l{}", i * 2)).collect();

    c.bench_function("complement of 30 codes", |b| {
        b.iter(|| catalog.complement_audio_language_codes(black_box(&chosen)).len())
    });

    c.bench_function("supports autogenerated audio", |b| {
        b.iter(|| catalog.supports_autogenerated_audio(black_box("l19")))
    });

    c.bench_function("audio language description", |b| {
        b.iter(|| catalog.audio_language_description(black_box("l42")).unwrap().len())
    });
}

criterion_group!(benches, bench_construction, bench_queries);
criterion_main!(benches);
