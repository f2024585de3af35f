use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use jobscout::{apply_schema, normalize_markup, JobExtractor, SchemaCache, ScraperOptions};
use std::fs;
use std::path::Path;
use std::sync::Arc;

const TEST_CASES: [&str; 3] = ["list-with-ids", "table-rows", "tailwind-grid"];

fn load_file(name: &str, file: &str) -> Option<String> {
    let path = Path::new("tests/test-pages").join(name).join(file);
    fs::read_to_string(&path).ok()
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for name in TEST_CASES {
        let html = match load_file(name, "source.html") {
            Some(h) => h,
            None => continue,
        };

        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("page", name), &html, |b, html| {
            b.iter(|| std::hint::black_box(normalize_markup(std::hint::black_box(html))));
        });
    }

    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");

    for name in TEST_CASES {
        let (html, reply) = match (load_file(name, "source.html"), load_file(name, "reply.txt")) {
            (Some(h), Some(r)) => (h, r),
            _ => continue,
        };

        let extractor = JobExtractor::new(
            ScraperOptions::default(),
            Arc::new(SchemaCache::in_memory()),
            move |_: &str, _: &str| -> jobscout::Result<String> { Ok(reply.clone()) },
        );
        let schema = match extractor.infer_or_lookup_schema(name, &html) {
            Ok(schema) => schema,
            Err(_) => continue,
        };

        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("page", name), &html, |b, html| {
            b.iter(|| std::hint::black_box(apply_schema(std::hint::black_box(html), &schema)));
        });
    }

    group.finish();
}

fn bench_infer(c: &mut Criterion) {
    let mut group = c.benchmark_group("infer");

    for name in TEST_CASES {
        let (html, reply) = match (load_file(name, "source.html"), load_file(name, "reply.txt")) {
            (Some(h), Some(r)) => (h, r),
            _ => continue,
        };

        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("page", name), &html, |b, html| {
            let extractor = JobExtractor::new(
                ScraperOptions::default(),
                Arc::new(SchemaCache::in_memory()),
                |_: &str, _: &str| -> jobscout::Result<String> { Ok(reply.clone()) },
            );
            b.iter(|| std::hint::black_box(extractor.refresh_schema(name, html)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_apply, bench_infer);
criterion_main!(benches);
