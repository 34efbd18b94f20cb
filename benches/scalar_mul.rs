// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.
//! Benchmarks of the four scalar-multiplication operations.

use criterion::{criterion_group, criterion_main, Criterion};

use ted127_gls::{EdwardsPoint, Scalar};

fn scalar_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar multiplication");

    let a = Scalar::clamp([0x5a; 32]);
    let b = Scalar::clamp([0xa5; 32]);
    let p = EdwardsPoint::scalar_mul_gen(&a, true);
    let q = EdwardsPoint::scalar_mul_gen(&b, true);

    group.bench_function("variable base", |bench| {
        bench.iter(|| EdwardsPoint::scalar_mul(&p, &a))
    });

    group.bench_function("fixed base (generator)", |bench| {
        bench.iter(|| EdwardsPoint::scalar_mul_gen(&a, true))
    });

    group.bench_function("double base", |bench| {
        bench.iter(|| EdwardsPoint::double_scalar_mul(&a, &p, &b, &q))
    });

    group.bench_function("mixed base (verification shape)", |bench| {
        bench.iter(|| EdwardsPoint::double_scalar_mul_gen(&a, &b, &q))
    });

    group.finish();
}

criterion_group!(benches, scalar_mul);
criterion_main!(benches);
