use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use futures::StreamExt;
use openfigi::{
    FigiService, SeededRandom, ServiceConfig, SymbolGenerator, ThreadRandom, digit_sum, validate,
};
use std::{sync::Arc, thread::scope, time::Instant};
use tokio::runtime::Builder;
use tokio_util::sync::CancellationToken;

// Number of symbols generated or validated per benchmark iteration.
const TOTAL_SYMBOLS: usize = 4096;

const INPUTS: &[&str] = &[
    "BBG00HLH6Y37",
    "BBG0088JSC34",
    "BKG00HLH6Y37",
    "KKG012C5GMZ5",
    "BBG00HLH6E37",
];

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    group.throughput(Throughput::Elements(INPUTS.len() as u64));

    group.bench_function("validate", |b| {
        b.iter(|| {
            for input in INPUTS {
                let _ = black_box(validate(black_box(input)));
            }
        });
    });

    group.bench_function("digit_sum", |b| {
        b.iter(|| {
            for input in INPUTS {
                black_box(digit_sum(black_box(input.as_bytes())));
            }
        });
    });

    group.finish();
}

fn bench_generator(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator");
    group.throughput(Throughput::Elements(TOTAL_SYMBOLS as u64));

    group.bench_function(format!("thread_random/elems/{TOTAL_SYMBOLS}"), |b| {
        let generator = SymbolGenerator::new(ThreadRandom);
        b.iter(|| black_box(generator.generate(TOTAL_SYMBOLS)));
    });

    group.bench_function(format!("seeded/elems/{TOTAL_SYMBOLS}"), |b| {
        let generator = SymbolGenerator::new(SeededRandom::with_seed(0));
        b.iter(|| black_box(generator.generate(TOTAL_SYMBOLS)));
    });

    group.finish();
}

/// Measures lock contention when several threads share one generator.
fn bench_generator_threaded(c: &mut Criterion) {
    const THREADS: usize = 4;

    let mut group = c.benchmark_group("generator_threaded");
    group.throughput(Throughput::Elements((TOTAL_SYMBOLS * THREADS) as u64));

    group.bench_function(format!("threads/{THREADS}"), |b| {
        b.iter_custom(|iters| {
            let generator = Arc::new(SymbolGenerator::new(SeededRandom::default()));
            let start = Instant::now();
            for _ in 0..iters {
                scope(|s| {
                    for _ in 0..THREADS {
                        let generator = Arc::clone(&generator);
                        s.spawn(move || black_box(generator.generate(TOTAL_SYMBOLS)));
                    }
                });
            }
            start.elapsed()
        });
    });

    group.finish();
}

fn bench_streams(c: &mut Criterion) {
    let rt = Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to build tokio runtime");

    let mut group = c.benchmark_group("streams");
    group.throughput(Throughput::Elements(TOTAL_SYMBOLS as u64));

    group.bench_function(format!("generate_stream/elems/{TOTAL_SYMBOLS}"), |b| {
        let service = FigiService::new();
        b.to_async(&rt).iter(|| {
            let service = service.clone();
            async move {
                let mut stream = service.generate_stream(TOTAL_SYMBOLS, CancellationToken::new());
                while let Some(symbol) = stream.next().await {
                    black_box(symbol);
                }
            }
        });
    });

    group.bench_function(format!("validate_stream/elems/{TOTAL_SYMBOLS}"), |b| {
        let service = FigiService::with_rng(ServiceConfig::default(), ThreadRandom);
        let lines: Vec<String> = INPUTS
            .iter()
            .cycle()
            .take(TOTAL_SYMBOLS)
            .map(|s| (*s).to_owned())
            .collect();
        b.to_async(&rt).iter(|| {
            let service = service.clone();
            let lines = futures::stream::iter(lines.clone());
            async move {
                let mut stream = service.validate_stream(lines, CancellationToken::new());
                while let Some(result) = stream.next().await {
                    black_box(result);
                }
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_engine,
    bench_generator,
    bench_generator_threaded,
    bench_streams
);
criterion_main!(benches);
