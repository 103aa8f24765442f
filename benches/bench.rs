use criterion::{criterion_group, criterion_main};

fn sample_serials(count: u64) -> Vec<String> {
    (0..count)
        .map(|i| format!("{:011}", i.wrapping_mul(2_654_435_761) % 100_000_000_000))
        .collect()
}

mod check_digit_benchmark {
    use criterion::{black_box, Criterion};
    use locomotive_check_digit::compute_check_digit;

    pub fn criterion_benchmark(c: &mut Criterion) {
        let serials = super::sample_serials(100);

        c.bench_function("compute-check-digit", |b| {
            b.iter(|| {
                for serial in &serials {
                    let _ = black_box(compute_check_digit(black_box(serial)));
                }
            })
        });

        c.bench_function("compute-check-digit-rejected", |b| {
            b.iter(|| {
                let _ = black_box(compute_check_digit(black_box("1234567A901")));
            })
        });
    }
}

mod verification_benchmark {
    use criterion::{black_box, Criterion};
    use locomotive_check_digit::{LocomotiveNumberChecksum, SerialNumber, Validator};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let numbers: Vec<String> = super::sample_serials(100)
            .iter()
            .filter_map(|serial| SerialNumber::new(serial).ok())
            .map(|serial| serial.locomotive_number())
            .collect();

        c.bench_function("locomotive-number-checksum", |b| {
            b.iter(|| {
                for number in &numbers {
                    black_box(LocomotiveNumberChecksum.is_valid_match(black_box(number)));
                }
            })
        });
    }
}

mod batch_benchmark {
    use criterion::{BenchmarkId, Criterion};
    use locomotive_check_digit::{CheckDigitGenerator, GeneratorConfig};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let serials = super::sample_serials(100_000);
        let mut group = c.benchmark_group("generate-all");

        for parallel in [false, true] {
            let generator = CheckDigitGenerator::new(GeneratorConfig::new().parallel(parallel));
            group.bench_with_input(
                BenchmarkId::from_parameter(if parallel { "parallel" } else { "sequential" }),
                &serials,
                |b, serials| b.iter(|| generator.generate_all(serials)),
            );
        }
        group.finish();
    }
}

criterion_group!(
    benches,
    check_digit_benchmark::criterion_benchmark,
    verification_benchmark::criterion_benchmark,
    batch_benchmark::criterion_benchmark
);
criterion_main!(benches);
