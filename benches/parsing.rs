//! Criterion benchmarks for parsing, building and number normalization.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use ethereum_uri::{
    BuildOptions, Decimal, EthereumUri, EthereumUriBuilder, Target, build_with, normalize_number,
};

const ADDRESS: &str = "0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359";

/// Benchmark: EthereumUri::parse with varying URI shapes
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    let test_cases = [
        (
            "minimal",
            "ethereum:0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359",
        ),
        ("name", "ethereum:alice.eth?value=1e18"),
        (
            "prefixed",
            "ethereum:pay-0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359@137?value=1e18&gas=21000",
        ),
        (
            "transfer",
            "ethereum:0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359@1/transfer?address=0x8e23ee67d1332ad560396262c48ffbb01f93d052&uint256=2.014e18",
        ),
        (
            "full_query",
            "ethereum:pay-0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359@1/deposit?value=2.5e18&gas=90000&gasLimit=90000&gasPrice=2e10&uint8=3&bytes32=0x00",
        ),
    ];

    for (name, uri) in test_cases {
        group.throughput(Throughput::Bytes(uri.len() as u64));
        group.bench_with_input(BenchmarkId::new("uri", name), &uri, |b, uri| {
            b.iter(|| EthereumUri::parse(black_box(uri)));
        });
    }

    group.finish();
}

/// Benchmark: writing records back out, with and without arguments
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    let test_cases = [
        (
            "payment",
            "ethereum:pay-0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359@137?value=1e18&gas=21000",
        ),
        (
            "transfer",
            "ethereum:0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359@1/transfer?address=0x8e23ee67d1332ad560396262c48ffbb01f93d052&uint256=2.014e18",
        ),
    ];

    let with_arguments = BuildOptions::new().with_include_arguments(true);

    for (name, uri_str) in test_cases {
        let uri = EthereumUri::parse(uri_str).expect("valid test URI");
        group.bench_with_input(BenchmarkId::new("default", name), &uri, |b, uri| {
            b.iter(|| black_box(uri).to_uri_string());
        });
        group.bench_with_input(BenchmarkId::new("with_arguments", name), &uri, |b, uri| {
            b.iter(|| build_with(black_box(uri), &with_arguments));
        });
    }

    group.finish();
}

/// Benchmark: normalization at varying magnitudes
fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_number");

    let test_cases = [
        ("integer", "21000"),
        ("wei", "2.014e18"),
        ("fraction", "0.000000000000000001"),
        (
            "uint256_max",
            "1.15792089237316195423570985008687907853269984665640564039457584007913129639935e77",
        ),
        ("large_exponent", "1e1000"),
    ];

    for (name, number) in test_cases {
        group.bench_with_input(BenchmarkId::new("plain", name), &number, |b, number| {
            b.iter(|| normalize_number(black_box(number)));
        });
        group.bench_with_input(BenchmarkId::new("exponential", name), &number, |b, number| {
            b.iter(|| Decimal::parse(black_box(number)).map(|d| format!("{d:e}")));
        });
    }

    group.finish();
}

/// Benchmark: Builder pattern construction
fn bench_builder(c: &mut Criterion) {
    let mut group = c.benchmark_group("builder");

    let target = Target::parse(ADDRESS).expect("valid target");

    group.bench_function("with_components", |b| {
        b.iter(|| {
            EthereumUriBuilder::new()
                .prefix("pay")
                .target(black_box(target.clone()))
                .chain_id(1)
                .parameter("value", "1000000000000000000")
                .build()
        });
    });

    group.bench_function("with_try_methods", |b| {
        b.iter(|| {
            EthereumUriBuilder::new()
                .try_prefix(black_box("pay"))
                .expect("valid prefix")
                .try_target(black_box(ADDRESS))
                .expect("valid target")
                .try_chain_id(black_box("1"))
                .expect("valid chain id")
                .try_function_name(black_box("transfer"))
                .expect("valid function name")
                .build()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_build,
    bench_normalize,
    bench_builder,
);
criterion_main!(benches);
