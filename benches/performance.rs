//! Performance benchmarks for the latency tester
//!
//! These benchmarks measure the record store operations behind each menu
//! action, plus the configuration and rendering work done per session.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use latency_tester::{
    cli::Cli,
    config::{ConfigParser, validate_config},
    models::{Config, LatencyRecord},
    output::OutputFormatterFactory,
    probe::{LatencyProbe, SimulatedProbe},
    store::RecordStore,
};
use chrono::{TimeZone, Utc};
use clap::Parser;
use std::hint::black_box;
use std::time::Duration;

/// Create sample records for benchmarking
fn create_sample_records(count: usize) -> Vec<LatencyRecord> {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| LatencyRecord::with_timestamp(
            format!("source-{}", i % 17),
            (i as i64 * 7) % 100 + 1,
            base + chrono::Duration::milliseconds(i as i64),
        ))
        .collect()
}

fn create_store(count: usize) -> RecordStore {
    let mut store = RecordStore::new();
    for record in create_sample_records(count) {
        store.add(record);
    }
    store
}

/// Benchmark the individual store operations at several sizes
fn benchmark_store_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_operations");

    for size in [10usize, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("add", size), size, |b, &size| {
            let records = create_sample_records(size);
            b.iter(|| {
                let mut store = RecordStore::new();
                for record in records.iter().cloned() {
                    store.add(record);
                }
                black_box(store);
            });
        });

        group.bench_with_input(BenchmarkId::new("get", size), size, |b, &size| {
            let store = create_store(size);
            b.iter(|| {
                for index in 0..size {
                    black_box(store.get(black_box(index)).ok());
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("replace", size), size, |b, &size| {
            let mut store = create_store(size);
            let replacement = LatencyRecord::new("LA", 10);
            b.iter(|| {
                for index in 0..size {
                    black_box(store.replace(index, replacement.clone()));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("remove_front", size), size, |b, &size| {
            b.iter_with_setup(
                || create_store(size),
                |mut store| {
                    while store.remove(0) {}
                    black_box(store);
                },
            );
        });

        group.bench_with_input(BenchmarkId::new("list_all", size), size, |b, &size| {
            let store = create_store(size);
            b.iter(|| {
                let total: i64 = store.list_all().map(|(_, record)| record.latency_ms()).sum();
                black_box(total);
            });
        });
    }

    group.finish();
}

/// Benchmark rendering of listings and records
fn benchmark_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    let store = create_store(100);

    for (name, enable_color) in [("plain", false), ("colored", true)] {
        let formatter = OutputFormatterFactory::create_formatter(enable_color);
        group.bench_function(BenchmarkId::new("listing", name), |b| {
            b.iter(|| black_box(formatter.format_listing(&store)));
        });
    }

    group.finish();
}

/// Benchmark configuration parsing and validation
fn benchmark_config_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("config_parsing");

    group.bench_function("parse_cli_args", |b| {
        let args = vec![
            "latency-tester",
            "--delay-ms", "0",
            "--min-latency", "5",
            "--max-latency", "250",
            "--seed", "42",
        ];
        b.iter(|| {
            let cli = Cli::try_parse_from(black_box(&args)).unwrap();
            black_box(cli);
        });
    });

    group.bench_function("validate_config", |b| {
        let config = Config::default();
        b.iter(|| black_box(validate_config(&config)));
    });

    group.bench_function("parse_from_cli", |b| {
        let cli = Cli::try_parse_from(["latency-tester", "--delay-ms", "0", "--no-color"]).unwrap();
        b.iter(|| {
            let parser = ConfigParser::new(black_box(cli.clone()));
            black_box(parser.parse_without_env_file())
        });
    });

    group.finish();
}

/// Benchmark the simulated probe without its artificial delay
fn benchmark_probe(c: &mut Criterion) {
    let mut group = c.benchmark_group("probe");

    group.bench_function("seeded_measure", |b| {
        let mut probe = SimulatedProbe::seeded(7, 1..=100, Duration::ZERO).unwrap();
        b.iter(|| black_box(probe.measure(black_box("bench"))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_store_operations,
    benchmark_rendering,
    benchmark_config_parsing,
    benchmark_probe
);

criterion_main!(benches);
