use criterion::{black_box, criterion_group, criterion_main, Criterion};
use codebreaker::core::{analyze, Code, EngineConfig, GameEngine, ManualScheduler, SimpleRng};

fn bench_analyze(c: &mut Criterion) {
    let secret = Code::parse("1123").unwrap();
    let guess = Code::parse("3211").unwrap();

    c.bench_function("analyze_one_guess", |b| {
        b.iter(|| analyze(black_box(&secret), black_box(&guess)))
    });
}

fn bench_analyze_code_space(c: &mut Criterion) {
    let guess = Code::parse("0123").unwrap();

    c.bench_function("analyze_all_secrets", |b| {
        b.iter(|| {
            (0..10_000u32)
                .map(|i| analyze(&Code::from_index(i), black_box(&guess)).exact as u32)
                .sum::<u32>()
        })
    });
}

fn bench_secret_generation(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("next_code", |b| b.iter(|| rng.next_code()));
}

fn bench_guess_round(c: &mut Criterion) {
    let mut engine = GameEngine::new(
        EngineConfig {
            seed: Some(12345),
            ..EngineConfig::default()
        },
        Box::new(ManualScheduler::new()),
    );

    c.bench_function("reset_and_guess", |b| {
        b.iter(|| {
            engine.reset();
            engine.make_guess(black_box("1234")).is_ok()
        })
    });
}

criterion_group!(
    benches,
    bench_analyze,
    bench_analyze_code_space,
    bench_secret_generation,
    bench_guess_round
);
criterion_main!(benches);
