//! Complaint Detector Benchmarks
//!
//! Benchmarks for normalization, the pattern matchers and catalog analysis,
//! implemented with the Criterion framework.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkId, Criterion,
    SamplingMode, Throughput,
};
use std::time::Duration;

use complaint_detector_lib::catalog::{AlertLevel, PatternCatalog, PatternRecord};
use complaint_detector_lib::config::engine::EngineConfig;
use complaint_detector_lib::detection::ComplaintDetector;
use complaint_detector_lib::matching::{
    normalize, search_bad_char, search_good_suffix, search_linear, Algorithm,
};

const FILLER: &str = "el pedido llego a tiempo y la atencion fue correcta ";
const COMPLAINT: &str = "el producto no funciona y exijo un reembolso ";

/// Builds a normalized text of roughly `size` characters with a complaint
/// phrase every tenth sentence.
fn corpus(size: usize) -> String {
    let mut text = String::with_capacity(size + COMPLAINT.len());
    let mut sentence = 0;
    while text.len() < size {
        text.push_str(if sentence % 10 == 9 { COMPLAINT } else { FILLER });
        sentence += 1;
    }
    text.trim_end().to_string()
}

/// Benchmark text normalization
fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [1_000, 10_000, 100_000].iter() {
        let raw = corpus(*size).to_uppercase().replace(' ', ",  ");
        group.throughput(Throughput::Bytes(raw.len() as u64));
        group.bench_with_input(BenchmarkId::new("mixed_case_punctuated", size), &raw, |b, raw| {
            b.iter(|| normalize(black_box(raw)));
        });
    }

    group.finish();
}

/// Benchmark the three search strategies on the same inputs
fn bench_matchers(c: &mut Criterion) {
    let mut group = c.benchmark_group("matchers");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));
    group.sample_size(100);

    let matchers: [(&str, fn(&str, &str) -> Vec<usize>); 3] = [
        ("linear", search_linear),
        ("bad_character", search_bad_char),
        ("good_suffix", search_good_suffix),
    ];

    for size in [1_000, 10_000, 100_000].iter() {
        let text = corpus(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));

        for (name, search) in matchers {
            group.bench_with_input(BenchmarkId::new(name, size), &text, |b, text| {
                b.iter(|| search(black_box(text), black_box("no funciona")));
            });
        }
    }

    // Highly repetitive input is the worst case for the bad character rule
    let periodic = "a".repeat(10_000);
    group.throughput(Throughput::Bytes(periodic.len() as u64));
    for (name, search) in matchers {
        group.bench_with_input(BenchmarkId::new(name, "periodic"), &periodic, |b, text| {
            b.iter(|| search(black_box(text), black_box("aaaaaaab")));
        });
    }

    group.finish();
}

/// Benchmark full catalog analysis, sequential and parallel
fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    group.measurement_time(Duration::from_secs(3));

    let records: Vec<PatternRecord> = (0..256)
        .map(|i| {
            let pattern = if i % 16 == 0 {
                "no funciona".to_string()
            } else {
                format!("patron inexistente {i}")
            };
            PatternRecord::new(pattern, "bench", AlertLevel::Medium, "")
        })
        .collect();
    let catalog = match PatternCatalog::from_records(records) {
        Ok(catalog) => catalog,
        Err(e) => panic!("invalid benchmark catalog: {e}"),
    };
    let text = corpus(4_000);

    for workers in [1, 4].iter() {
        let detector = ComplaintDetector::new(EngineConfig {
            workers: *workers,
            parallel_threshold: 64,
            ..EngineConfig::default()
        });

        for algorithm in Algorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(format!("{algorithm}_workers"), workers),
                &text,
                |b, text| {
                    b.iter(|| detector.analyze(&catalog, black_box(text), algorithm));
                },
            );
        }
    }

    group.finish();
}

// Group all benchmarks together
criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02)
        .confidence_level(0.99);
    targets = bench_normalize, bench_matchers, bench_analyze
}

criterion_main!(benches);
