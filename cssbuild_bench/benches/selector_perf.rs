use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cssbuild::SelectorBuilder;
use cssbuild_bench::{deep_sample, description_sample, nested_sample};

pub fn bench_build(c: &mut Criterion) {
    let b = SelectorBuilder::new();
    c.bench_function("build nested", |bench| bench.iter(|| nested_sample(black_box(&b))));
    c.bench_function("build deep 32", |bench| bench.iter(|| deep_sample(black_box(&b), 32)));

    let description = description_sample();
    c.bench_function("build description", |bench| bench.iter(|| black_box(&description).build(&b)));
}

pub fn bench_stringify(c: &mut Criterion) {
    let b = SelectorBuilder::new();
    let nested = nested_sample(&b).expect("nested sample should build");
    let deep = deep_sample(&b, 32).expect("deep sample should build");
    c.bench_function("stringify nested", |bench| bench.iter(|| black_box(&nested).stringify()));
    c.bench_function("stringify deep 32", |bench| bench.iter(|| black_box(&deep).stringify()));
}

criterion_group!(benches, bench_build, bench_stringify);
criterion_main!(benches);
