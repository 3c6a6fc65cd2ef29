//! Benchmarks for Reed-Muller encoding and decoding.
//!
//! Decoding (interpolation) is expected to cost noticeably more than
//! encoding; the groups below make that ratio visible.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use muller::{
    BinaryReedMullerCode, Encoder, F2m, Field, FiniteField, Fp, LagrangeBasis, MPoly,
    ReedMullerCode, Ring,
};

type F = Fp<998244353>;

fn message<K: FiniteField>(code: &ReedMullerCode<K>) -> MPoly<K> {
    MPoly::from_terms(
        code.number_of_variables(),
        code.monomials()
            .enumerate()
            .map(|(i, e)| (e, K::from_index(i as u64 + 1))),
    )
}

fn bench_field_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("Field Operations");

    let a = F::new(123456789);
    let b = F::new(987654321);
    group.bench_function("fp_mul", |bencher| {
        bencher.iter(|| black_box(a) * black_box(b))
    });
    group.bench_function("fp_inverse", |bencher| {
        bencher.iter(|| black_box(a).inverse())
    });

    let x = F2m::<8>::new(0x57);
    let y = F2m::<8>::new(0x83);
    group.bench_function("gf256_mul", |bencher| {
        bencher.iter(|| black_box(x) * black_box(y))
    });
    group.bench_function("gf256_inverse", |bencher| {
        bencher.iter(|| black_box(x).inverse())
    });

    group.finish();
}

fn bench_lagrange(c: &mut Criterion) {
    let mut group = c.benchmark_group("Lagrange");

    for n in [4usize, 16, 64] {
        let nodes: Vec<F> = F::elements().take(n).collect();
        let values: Vec<F> = (0..n as u64).map(|i| F::new(i * i + 7)).collect();

        group.bench_with_input(BenchmarkId::new("basis", n), &nodes, |bencher, nodes| {
            bencher.iter(|| LagrangeBasis::new(black_box(nodes)))
        });

        let basis = LagrangeBasis::new(&nodes).unwrap();
        group.bench_with_input(BenchmarkId::new("interpolate", n), &values, |bencher, v| {
            bencher.iter(|| basis.interpolate(black_box(v)))
        });
    }

    group.finish();
}

fn bench_qary(c: &mut Criterion) {
    let mut group = c.benchmark_group("RM over GF(7)");
    group.sample_size(20);

    for (r, m) in [(2usize, 2usize), (3, 3), (4, 3)] {
        let code = ReedMullerCode::<Fp<7>>::new(r, m).unwrap();
        let label = format!("r{}_m{}", r, m);
        let encoder = code.polynomial_encoder();
        let p = message(&code);
        let word = encoder.encode(&p).unwrap();

        group.bench_with_input(BenchmarkId::new("encode", &label), &p, |bencher, p| {
            bencher.iter(|| encoder.encode(black_box(p)))
        });
        group.bench_with_input(BenchmarkId::new("decode", &label), &word, |bencher, w| {
            bencher.iter(|| encoder.unencode_nocheck(black_box(w)))
        });
        group.bench_function(BenchmarkId::new("generator_matrix", &label), |bencher| {
            bencher.iter(|| code.vector_encoder().generator_matrix().nrows())
        });
    }

    group.finish();
}

fn bench_binary(c: &mut Criterion) {
    let mut group = c.benchmark_group("Binary RM");
    group.sample_size(20);

    for (r, m) in [(1usize, 5usize), (2, 8), (3, 10)] {
        let code = BinaryReedMullerCode::new(r, m).unwrap();
        let label = format!("r{}_m{}", r, m);
        let encoder = code.vector_encoder();
        let v: Vec<_> = (0..code.dimension())
            .map(|i| if i % 3 == 0 { F2m::<1>::ONE } else { F2m::<1>::ZERO })
            .collect();
        // build the cached matrix outside the timed loop
        let word = encoder.encode(&v).unwrap();

        group.bench_with_input(BenchmarkId::new("encode", &label), &v, |bencher, v| {
            bencher.iter(|| encoder.encode(black_box(v)))
        });
        group.bench_with_input(BenchmarkId::new("decode", &label), &word, |bencher, w| {
            bencher.iter(|| encoder.unencode_nocheck(black_box(w)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_field_operations,
    bench_lagrange,
    bench_qary,
    bench_binary
);
criterion_main!(benches);
