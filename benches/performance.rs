//! Performance benchmarks for Precheck
//!
//! These benchmarks measure the performance of key operations:
//! - Single rule matching on different content sizes
//! - Full inspection per language
//! - Catalog construction
//! - Parallel scanning of many files
//!
//! ## Running Benchmarks
//!
//! To run all benchmarks:
//! ```bash
//! cargo bench
//! ```
//!
//! To run specific benchmarks:
//! ```bash
//! cargo bench rule_matching
//! cargo bench inspection
//! ```
//!
//! ## Expected Performance Characteristics
//!
//! - Patterns are compiled once, when the catalog is built
//! - Matching scales linearly with line count times rule count
//! - Rules with a trailing-context exclusion cost more on lines they reject
//! - Scanning uses rayon and should scale up to the number of CPU cores

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use precheck::cli::scan::scan_files;
use precheck::engine::match_rules;
use precheck::rules::RegexRule;
use precheck::{Inspector, RuleCatalog};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const TYPESCRIPT_SAMPLE: &str = r#"import { fetchUser } from "./api";

export async function loadProfile(id: string): Promise<Profile> {
    const user = await fetchUser(id);
    if (user.roles.length > 0) {
        return { name: user.name, roles: user.roles };
    }
    // TODO: handle users without roles
    return { name: user.name, roles: [] };
}
"#;

const GO_SAMPLE: &str = r#"package main

import "fmt"

func handle(p *Payload) error {
    if p.x == nil {
        return fmt.Errorf("missing payload")
    }
    ch := make(chan int, 16)
    go worker(ch)
    return nil
}
"#;

const PYTHON_SAMPLE: &str = r#"import json

def load(path, defaults=None):
    with open(path) as handle:
        data = json.load(handle)
    for key in range(10):
        print(key)
    return data
"#;

fn create_test_files(count: usize) -> (TempDir, Vec<PathBuf>) {
    let temp_dir = TempDir::new().unwrap();
    let samples = [("ts", TYPESCRIPT_SAMPLE), ("go", GO_SAMPLE), ("py", PYTHON_SAMPLE)];

    let paths = (0..count)
        .map(|i| {
            let (ext, sample) = samples[i % samples.len()];
            let path = temp_dir.path().join(format!("file_{}.{}", i, ext));
            fs::write(&path, sample.repeat(20)).unwrap();
            path
        })
        .collect();

    (temp_dir, paths)
}

// ============================================================================
// Rule Matching Benchmarks
// ============================================================================

/// Benchmark a single rule over growing content
fn bench_rule_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_matching");

    let plain = RegexRule::new("todo-slash-comment", r"//\s*TODO:", "TODO", None).unwrap();
    let guarded = RegexRule::new("magic-number", r"\d{3}", "Magic number", Some(r"^\s*//")).unwrap();

    for size in [500, 5_000, 50_000].iter() {
        let content = "let timeout = 5000 // ms\n// TODO: implement\n".repeat(size / 40);

        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::new("plain", size), &content, |b, content| {
            b.iter(|| black_box(match_rules(content, [&plain])));
        });

        group.bench_with_input(BenchmarkId::new("guarded", size), &content, |b, content| {
            b.iter(|| black_box(match_rules(content, [&guarded])));
        });
    }

    group.finish();
}

// ============================================================================
// Inspection Benchmarks
// ============================================================================

/// Benchmark a full inspection against the built-in catalog per language
fn bench_inspection(c: &mut Criterion) {
    let mut group = c.benchmark_group("inspection");
    let inspector = Inspector::new(RuleCatalog::builtin().unwrap());

    for (path, sample) in [
        ("src/profile.ts", TYPESCRIPT_SAMPLE),
        ("cmd/main.go", GO_SAMPLE),
        ("app/loader.py", PYTHON_SAMPLE),
    ] {
        let content = sample.repeat(50);
        group.throughput(Throughput::Bytes(content.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(path), &content, |b, content| {
            b.iter(|| black_box(inspector.inspect(path, content)));
        });
    }

    group.finish();
}

/// Benchmark building the catalog, paid once per hook invocation
fn bench_catalog_build(c: &mut Criterion) {
    c.bench_function("catalog_build", |b| {
        b.iter(|| black_box(RuleCatalog::builtin().unwrap()));
    });
}

// ============================================================================
// Parallel Scan Benchmarks
// ============================================================================

/// Benchmark scanning many files in parallel
fn bench_parallel_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_scan");
    group.sample_size(10);

    let inspector = Inspector::new(RuleCatalog::builtin().unwrap());

    for file_count in [10, 100].iter() {
        let (_temp_dir, paths) = create_test_files(*file_count);
        group.throughput(Throughput::Elements(*file_count as u64));

        group.bench_with_input(BenchmarkId::from_parameter(file_count), &paths, |b, paths| {
            b.iter(|| black_box(scan_files(&inspector, paths)));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark Registration
// ============================================================================

criterion_group!(matching_benches, bench_rule_matching, bench_inspection);
criterion_group!(setup_benches, bench_catalog_build);
criterion_group!(scan_benches, bench_parallel_scan);

criterion_main!(matching_benches, setup_benches, scan_benches);
