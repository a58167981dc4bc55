use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use gamutcast::Converter;

const INPUTS: [&str; 6] = [
    "oklch(74.32% 0.2194 51.36)",
    "Figma P3 #FF8000FF",
    "#0080807F",
    "hsl(210deg 40% 60%)",
    "color(display-p3 0 1 0)",
    "oklch(70% 0.8 150)",
];

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert-all");

    group.bench_function("cold-cache", |b| {
        b.iter_batched(
            Converter::new,
            |converter| {
                for input in INPUTS {
                    converter.convert_all(input);
                }
            },
            BatchSize::SmallInput,
        )
    });

    let converter = Converter::new();
    for input in INPUTS {
        converter.convert_all(input);
    }

    group.bench_function("warm-cache", |b| {
        b.iter(|| {
            for input in INPUTS {
                converter.convert_all(input);
            }
        })
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
