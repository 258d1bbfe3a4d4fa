//! Benchmarks for the collection and generation pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use imageset_gen::{collect_image_assets, generate_code, to_type_identifier, to_value_identifier};

/// Build a catalog with `groups` groups, each nesting one subgroup, and
/// `per_group` image sets at every level.
fn build_catalog(root: &Path, groups: usize, per_group: usize) -> PathBuf {
    let catalog = root.join("Bench.xcassets");

    for g in 0..groups {
        let group = catalog.join(format!("group-{}", g));
        let nested = group.join(format!("nested_{}", g));
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            group.join("Contents.json"),
            r#"{ "properties" : { "provides-namespace" : true } }"#,
        )
        .unwrap();

        for i in 0..per_group {
            fs::create_dir_all(group.join(format!("icon_{}.imageset", i))).unwrap();
            fs::create_dir_all(nested.join(format!("arrow-{}.imageset", i))).unwrap();
        }
    }

    catalog
}

fn bench_collection(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection");
    let dir = tempfile::tempdir().unwrap();

    let small = build_catalog(&dir.path().join("small"), 4, 8);
    let large = build_catalog(&dir.path().join("large"), 40, 25);

    group.bench_function("collect_small", |b| {
        b.iter(|| collect_image_assets(black_box(&small)))
    });

    group.bench_function("collect_large", |b| {
        b.iter(|| collect_image_assets(black_box(&large)))
    });

    group.finish();
}

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");
    let dir = tempfile::tempdir().unwrap();

    let tree = collect_image_assets(build_catalog(dir.path(), 40, 25));

    group.bench_function("generate_large", |b| {
        b.iter(|| generate_code(black_box(&tree)))
    });

    group.finish();
}

fn bench_naming(c: &mut Criterion) {
    let mut group = c.benchmark_group("naming");

    group.bench_function("value_identifier", |b| {
        b.iter(|| to_value_identifier(black_box("123_background-image large")))
    });

    group.bench_function("type_identifier", |b| {
        b.iter(|| to_type_identifier(black_box("2024 tab-bar icons")))
    });

    group.finish();
}

criterion_group!(benches, bench_collection, bench_generation, bench_naming);
criterion_main!(benches);
