use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use numana::integrate::{rk4_adaptive, rk4_fixed, simpson, trapezoid, AdaptiveSettings};
use numana::interp::{HermiteInterp, HermitePoint, LagrangeInterp, NewtonInterp, Point};
use numana::linalg::{gauss_jordan_solve, gauss_solve, lu_decompose, lu_solve};

// ---------------------------------------------------------------------------
// Helpers: diagonally dominant systems
// ---------------------------------------------------------------------------

fn coeff(i: usize, j: usize, n: usize) -> f64 {
    ((i + 1) * 10 + j + 1) as f64 + if i == j { 10.0 * n as f64 } else { 0.0 }
}

/// Row-major `n x (n+1)` augmented matrix `[A | b]`.
fn augmented(n: usize) -> Vec<f64> {
    let mut a = Vec::with_capacity(n * (n + 1));
    for i in 0..n {
        for j in 0..n {
            a.push(coeff(i, j, n));
        }
        a.push((i + 1) as f64);
    }
    a
}

fn square(n: usize) -> Vec<f64> {
    (0..n * n).map(|k| coeff(k / n, k % n, n)).collect()
}

fn rhs(n: usize) -> Vec<f64> {
    (0..n).map(|i| (i + 1) as f64).collect()
}

// ---------------------------------------------------------------------------
// Linear solve
// ---------------------------------------------------------------------------

fn solve_n(c: &mut Criterion, n: usize) {
    let mut g = c.benchmark_group(format!("solve_{n}x{n}"));

    g.bench_function("gauss", |b| {
        let a = augmented(n);
        let mut x = vec![0.0; n];
        b.iter_batched_ref(
            || a.clone(),
            |a| gauss_solve(n, a, n + 1, &mut x).unwrap(),
            BatchSize::SmallInput,
        )
    });

    g.bench_function("gauss_jordan", |b| {
        let a = augmented(n);
        let mut x = vec![0.0; n];
        b.iter_batched_ref(
            || a.clone(),
            |a| gauss_jordan_solve(n, a, n + 1, &mut x).unwrap(),
            BatchSize::SmallInput,
        )
    });

    g.bench_function("lu", |b| {
        let a = square(n);
        let rhs = rhs(n);
        let mut piv = vec![0usize; n];
        let mut x = vec![0.0; n];
        b.iter_batched_ref(
            || a.clone(),
            |a| {
                lu_decompose(n, a, n, &mut piv).unwrap();
                lu_solve(n, a, n, &piv, &rhs, &mut x).unwrap();
            },
            BatchSize::SmallInput,
        )
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra::DMatrix::from_fn(n, n, |i, j| coeff(i, j, n));
        let rhs = nalgebra::DVector::from_fn(n, |i, _| (i + 1) as f64);
        b.iter(|| std::hint::black_box(&a).clone().lu().solve(&rhs))
    });

    g.finish();
}

fn solve_6(c: &mut Criterion) {
    solve_n(c, 6);
}

fn solve_50(c: &mut Criterion) {
    solve_n(c, 50);
}

// ---------------------------------------------------------------------------
// Interpolation
// ---------------------------------------------------------------------------

fn interp_eval_20(c: &mut Criterion) {
    let mut g = c.benchmark_group("interp_eval_20");
    let xs: Vec<f64> = (0..20).map(|i| i as f64 * 0.1).collect();
    let pts: Vec<Point<f64>> = xs.iter().map(|&x| Point::new(x, x.sin())).collect();
    let hpts: Vec<HermitePoint<f64>> = xs
        .iter()
        .map(|&x| HermitePoint::new(x, x.sin(), x.cos()))
        .collect();

    g.bench_function("lagrange", |b| {
        let p = LagrangeInterp::new(&pts).unwrap();
        b.iter(|| p.eval(std::hint::black_box(0.95)))
    });

    g.bench_function("newton", |b| {
        let p = NewtonInterp::from_points(&pts).unwrap();
        b.iter(|| p.eval(std::hint::black_box(0.95)))
    });

    g.bench_function("newton_build", |b| {
        b.iter(|| NewtonInterp::from_points(std::hint::black_box(&pts)))
    });

    g.bench_function("hermite", |b| {
        let p = HermiteInterp::new(&hpts).unwrap();
        b.iter(|| p.eval(std::hint::black_box(0.95)))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Quadrature
// ---------------------------------------------------------------------------

fn quadrature_exp(c: &mut Criterion) {
    let mut g = c.benchmark_group("quadrature_exp");
    let f = |x: f64| x.exp();

    g.bench_function("trapezoid_1000", |b| {
        b.iter(|| trapezoid(f, 0.0, std::hint::black_box(1.0), 1000))
    });

    g.bench_function("simpson_1000", |b| {
        b.iter(|| simpson(f, 0.0, std::hint::black_box(1.0), 1000))
    });

    g.bench_function("rk4_fixed_1000", |b| {
        b.iter(|| rk4_fixed(f, 0.0, std::hint::black_box(1.0), 1000))
    });

    g.bench_function("rk4_adaptive", |b| {
        let settings = AdaptiveSettings::default();
        b.iter(|| rk4_adaptive(f, 0.0, std::hint::black_box(1.0), &settings))
    });

    g.finish();
}

// ---------------------------------------------------------------------------

criterion_group!(benches, solve_6, solve_50, interp_eval_20, quadrature_exp);
criterion_main!(benches);
