use numana::integrate::{rk4_adaptive, simpson, AdaptiveSettings, QuadStatus};
use numana::interp::{Dataset, HermiteInterp, HermitePoint, LagrangeInterp, NewtonInterp, Point};
use numana::linalg::{gauss_jordan_solve, gauss_solve, LuDecomposition};
use numana::roots::{Bisection, NewtonRaphson, Secant};

const PI: f64 = std::f64::consts::PI;

fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff {})",
        msg,
        a,
        b,
        (a - b).abs()
    );
}

// ── Linear solvers against nalgebra ──────────────────────────────────

#[test]
fn solvers_match_nalgebra() {
    let n = 5;
    let coeff = |i: usize, j: usize| ((i * 7 + j * 3) % 11) as f64 - 5.0 + if i == j { 12.0 } else { 0.0 };
    let rhs: Vec<f64> = (0..n).map(|i| (i as f64) * 1.5 - 2.0).collect();

    let na = nalgebra::DMatrix::from_fn(n, n, coeff);
    let nb = nalgebra::DVector::from_column_slice(&rhs);
    let expected = na.clone().lu().solve(&nb).expect("nalgebra: singular");

    let mut aug = Vec::with_capacity(n * (n + 1));
    let mut sq = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            aug.push(coeff(i, j));
            sq.push(coeff(i, j));
        }
        aug.push(rhs[i]);
    }

    let mut x_gauss = vec![0.0; n];
    gauss_solve(n, &mut aug.clone(), n + 1, &mut x_gauss).unwrap();
    let mut x_gj = vec![0.0; n];
    gauss_jordan_solve(n, &mut aug, n + 1, &mut x_gj).unwrap();
    let lu = LuDecomposition::new(n, &sq, n).unwrap();
    let x_lu = lu.solve(&rhs).unwrap();

    for i in 0..n {
        assert_near(x_gauss[i], expected[i], 1e-10, "gauss vs nalgebra");
        assert_near(x_gj[i], expected[i], 1e-10, "gauss-jordan vs nalgebra");
        assert_near(x_lu[i], expected[i], 1e-10, "lu vs nalgebra");
    }
    assert_near(lu.det(), na.determinant(), 1e-8 * na.determinant().abs(), "determinant");
}

// ── Interpolation feeding quadrature and root finding ────────────────

#[test]
fn integrate_an_interpolant() {
    let pts: Vec<Point<f64>> = (0..9)
        .map(|i| {
            let x = PI * i as f64 / 8.0;
            Point::new(x, x.sin())
        })
        .collect();
    let newton = NewtonInterp::from_points(&pts).unwrap();

    let s = simpson(|x| newton.eval(x), 0.0, PI, 100).unwrap();
    assert_near(s, 2.0, 1e-5, "simpson of interpolated sin");

    let q = rk4_adaptive(|x| newton.eval(x), 0.0, PI, &AdaptiveSettings::default()).unwrap();
    assert_eq!(q.status, QuadStatus::Converged);
    assert_near(q.value, s, 1e-6, "adaptive vs simpson");
}

#[test]
fn root_of_an_interpolant() {
    // Samples of x^2 - 2
    let data = Dataset::new(&[
        Point::new(0.0_f64, -2.0),
        Point::new(1.0, -1.0),
        Point::new(2.0, 2.0),
    ])
    .unwrap();
    let newton = NewtonInterp::new(&data).unwrap();
    let lagrange = LagrangeInterp::from_dataset(data);

    let mut bis = Bisection::new(|x| newton.eval(x), 1.0, 2.0, 1e-10).unwrap();
    let r1 = bis.solve().unwrap();
    let mut sec = Secant::new(|x| lagrange.eval(x).unwrap_or(f64::NAN), 1.0, 2.0, 1e-12, 50).unwrap();
    let r2 = sec.solve().unwrap();

    let sqrt2 = 2.0_f64.sqrt();
    assert_near(r1.x, sqrt2, 1e-9, "bisection");
    assert_near(r2.x, sqrt2, 1e-9, "secant");
}

#[test]
fn extremum_of_hermite_interpolant() {
    // Hermite data for cos on [2, 4]; the minimum is at pi, where the slope vanishes.
    let pts: Vec<HermitePoint<f64>> = [2.0, 2.5, 3.0, 3.5, 4.0]
        .iter()
        .map(|&x: &f64| HermitePoint::new(x, x.cos(), -x.sin()))
        .collect();
    let h = HermiteInterp::new(&pts).unwrap();

    let mut nr = NewtonRaphson::new(|x| h.eval_derivative(x).1, 3.0, 1e-10, 50).unwrap();
    let r = nr.solve().unwrap();
    assert_near(r.x, PI, 1e-6, "slope root");
    assert_near(h.eval(r.x), -1.0, 1e-8, "minimum value");
}
