use super::*;

const PI: f64 = core::f64::consts::PI;
const E: f64 = core::f64::consts::E;

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

// ── Newton–Cotes ────────────────────────────────────────────────────

#[test]
fn trapezoid_and_simpson_converge_to_one_third() {
    let f = |x: f64| x * x;
    let mut prev_t = f64::INFINITY;
    for n in [2, 4, 8, 16, 32] {
        let t = trapezoid(f, 0.0, 1.0, n).unwrap();
        let s = simpson(f, 0.0, 1.0, n).unwrap();
        let err_t = (t - 1.0 / 3.0).abs();
        assert!(err_t < prev_t, "trapezoid error must shrink with n");
        prev_t = err_t;
        assert_near(s, 1.0 / 3.0, 1e-15, "simpson is exact for x^2");
    }
}

#[test]
fn trapezoid_second_order_simpson_fourth_order() {
    let f = |x: f64| x * x * x * x;
    let exact = 0.2;
    let t10 = trapezoid(f, 0.0, 1.0, 10).unwrap() - exact;
    let t20 = trapezoid(f, 0.0, 1.0, 20).unwrap() - exact;
    let s10 = simpson(f, 0.0, 1.0, 10).unwrap() - exact;
    let s20 = simpson(f, 0.0, 1.0, 20).unwrap() - exact;
    // Halving h divides the error by 2^p.
    assert_near(t10 / t20, 4.0, 0.01, "trapezoid ratio");
    assert_near(s10 / s20, 16.0, 0.01, "simpson ratio");
    assert!(s10.abs() < t10.abs());
}

#[test]
fn simpson_exact_for_cubics() {
    let v = simpson(|x: f64| x * x * x - 2.0 * x + 1.0, -1.0, 2.0, 2).unwrap();
    // [x^4/4 - x^2 + x] from -1 to 2
    assert_near(v, 2.0 - (0.25 - 2.0), 1e-13, "cubic");
}

#[test]
fn simpson_sin() {
    let v = simpson(|x: f64| x.sin(), 0.0, PI, 100).unwrap();
    assert_near(v, 2.0, 1e-7, "sin over [0, pi]");
}

#[test]
fn quadrature_rejects_bad_input() {
    let f = |x: f64| x;
    assert_eq!(trapezoid(f, 1.0, 0.0, 4), Err(IntegrateError::InvalidInterval));
    assert_eq!(trapezoid(f, 1.0, 1.0, 4), Err(IntegrateError::InvalidInterval));
    assert_eq!(trapezoid(f, 0.0, f64::INFINITY, 4), Err(IntegrateError::InvalidInterval));
    assert_eq!(trapezoid(f, 0.0, 1.0, 0), Err(IntegrateError::InvalidSubdivisions));
    assert_eq!(simpson(f, 0.0, 1.0, 3), Err(IntegrateError::InvalidSubdivisions));
    assert_eq!(simpson(f, 0.0, 1.0, 0), Err(IntegrateError::InvalidSubdivisions));
    assert_eq!(simpson(f, f64::NAN, 1.0, 2), Err(IntegrateError::InvalidInterval));
}

#[test]
fn rejected_input_never_calls_f() {
    let mut calls = 0;
    let r = simpson(
        |x: f64| {
            calls += 1;
            x
        },
        0.0,
        1.0,
        5,
    );
    assert!(r.is_err());
    assert_eq!(calls, 0);
}

#[test]
fn trapezoid_eval_count() {
    let mut calls = 0;
    trapezoid(
        |x: f64| {
            calls += 1;
            x
        },
        0.0,
        1.0,
        7,
    )
    .unwrap();
    assert_eq!(calls, 8);
}

// ── Double Simpson ──────────────────────────────────────────────────

#[test]
fn double_simpson_product() {
    let v = double_simpson(|x: f64, y: f64| x * y, (0.0, 1.0), (0.0, 2.0), 4, 6).unwrap();
    assert_near(v, 1.0, 1e-14, "xy over [0,1]x[0,2]");
}

#[test]
fn double_simpson_separable() {
    // ∫∫ e^x sin y over [0,1]x[0,pi] = (e - 1) * 2
    let v = double_simpson(|x: f64, y: f64| x.exp() * y.sin(), (0.0, 1.0), (0.0, PI), 20, 20)
        .unwrap();
    assert_near(v, (E - 1.0) * 2.0, 5e-5, "separable");
}

#[test]
fn double_simpson_grid_size() {
    let mut calls = 0;
    double_simpson(
        |_x: f64, _y: f64| {
            calls += 1;
            1.0
        },
        (0.0, 1.0),
        (0.0, 1.0),
        4,
        2,
    )
    .unwrap();
    assert_eq!(calls, 15);
}

#[test]
fn double_simpson_rejects_bad_input() {
    let f = |x: f64, y: f64| x + y;
    assert_eq!(
        double_simpson(f, (1.0, 0.0), (0.0, 1.0), 2, 2),
        Err(IntegrateError::InvalidInterval)
    );
    assert_eq!(
        double_simpson(f, (0.0, 1.0), (1.0, 1.0), 2, 2),
        Err(IntegrateError::InvalidInterval)
    );
    assert_eq!(
        double_simpson(f, (0.0, 1.0), (0.0, 1.0), 3, 2),
        Err(IntegrateError::InvalidSubdivisions)
    );
    assert_eq!(
        double_simpson(f, (0.0, 1.0), (0.0, 1.0), 2, 0),
        Err(IntegrateError::InvalidSubdivisions)
    );
}

// ── Euler / RK4 ─────────────────────────────────────────────────────

#[test]
fn euler_growth() {
    // y' = y: each step multiplies by (1 + h)
    let y = euler(|_t, y: f64| y, 0.0, 2.0, 0.001, 1000).unwrap();
    assert_near(y, 2.0 * 1.001_f64.powi(1000), 1e-9, "euler");
    assert!((y - 2.0 * E).abs() > 1e-3, "first order, visibly off");
}

#[test]
fn euler_uses_time() {
    // y' = t from y(1) = 0, h = 1: y = 1 + 2 + 3
    let y = euler(|t, _y: f64| t, 1.0, 0.0, 1.0, 3).unwrap();
    assert_eq!(y, 6.0);
}

#[test]
fn rk4_step_exact_for_polynomial_rhs() {
    // y' = t, one step from 0 to 2
    assert_eq!(rk4_step(|t, _y: f64| t, 0.0, 0.0, 2.0), 2.0);
}

#[test]
fn rk4_exponential() {
    let y = rk4(|_t, y: f64| y, 0.0, 1.0, 0.01, 100).unwrap();
    assert_near(y, E, 1e-9, "rk4 e");
}

#[test]
fn rk4_time_dependent() {
    // y' = -2ty, y(0) = 1  ->  y(1) = e^-1
    let y = rk4(|t, y: f64| -2.0 * t * y, 0.0, 1.0, 0.01, 100).unwrap();
    assert_near(y, (-1.0_f64).exp(), 1e-9, "gaussian decay");
}

#[test]
fn rk4_time_comes_first() {
    // y' = t from y(0) = 5: y(2) = 5 + 2. A state-first callback would grow exponentially.
    let y = rk4(|t, _y: f64| t, 0.0, 5.0, 0.5, 4).unwrap();
    assert_near(y, 7.0, 1e-12, "time argument");
}

#[test]
fn rk4_beats_euler() {
    let exact = E;
    let e = euler(|_t, y: f64| y, 0.0, 1.0, 0.1, 10).unwrap();
    let r = rk4(|_t, y: f64| y, 0.0, 1.0, 0.1, 10).unwrap();
    assert!((r - exact).abs() < (e - exact).abs() / 1000.0);
}

#[test]
fn steppers_reject_bad_input() {
    let f = |_t: f64, y: f64| y;
    assert_eq!(euler(f, 0.0, 1.0, 0.0, 10), Err(IntegrateError::InvalidStep));
    assert_eq!(euler(f, 0.0, 1.0, -0.1, 10), Err(IntegrateError::InvalidStep));
    assert_eq!(euler(f, 0.0, 1.0, f64::NAN, 10), Err(IntegrateError::InvalidStep));
    assert_eq!(euler(f, 0.0, 1.0, 0.1, 0), Err(IntegrateError::InvalidSubdivisions));
    assert_eq!(rk4(f, 0.0, 1.0, 0.0, 10), Err(IntegrateError::InvalidStep));
    assert_eq!(rk4(f, 0.0, 1.0, 0.1, 0), Err(IntegrateError::InvalidSubdivisions));
}

#[test]
fn rk4_f32() {
    let y = rk4(|_t, y: f32| -y, 0.0, 1.0, 0.01, 100).unwrap();
    assert!((y - (-1.0_f32).exp()).abs() < 1e-5);
}

// ── Fixed / adaptive RK4 quadrature ─────────────────────────────────

#[test]
fn rk4_fixed_reference_integrals() {
    assert_near(rk4_fixed(|x: f64| x * x, 0.0, 2.0, 2000).unwrap(), 8.0 / 3.0, 1e-9, "x^2");
    assert_near(rk4_fixed(|x: f64| x.sin(), 0.0, PI, 2000).unwrap(), 2.0, 1e-9, "sin");
    assert_near(rk4_fixed(|x: f64| x.exp(), 0.0, 1.0, 2000).unwrap(), E - 1.0, 1e-9, "exp");
}

#[test]
fn rk4_fixed_backwards() {
    let v = rk4_fixed(|x: f64| x * x, 2.0, 0.0, 10).unwrap();
    assert_near(v, -8.0 / 3.0, 1e-12, "reversed bounds");
}

#[test]
fn rk4_fixed_rejects_bad_input() {
    let f = |x: f64| x;
    assert_eq!(rk4_fixed(f, 0.0, 1.0, 0), Err(IntegrateError::InvalidSubdivisions));
    assert_eq!(rk4_fixed(f, f64::NEG_INFINITY, 1.0, 4), Err(IntegrateError::InvalidInterval));
}

#[test]
fn adaptive_polynomial_converges_first_round() {
    let q = rk4_adaptive(|x: f64| x * x, 0.0, 2.0, &AdaptiveSettings::default()).unwrap();
    assert_eq!(q.status, QuadStatus::Converged);
    assert_near(q.value, 8.0 / 3.0, 1e-12, "x^2 over [0,2]");
    assert_eq!(q.steps, 16);
    assert_eq!(q.evals, 3 * (8 + 16));
    assert!(q.error <= 1e-9);
}

#[test]
fn adaptive_reference_integrals() {
    let settings = AdaptiveSettings {
        abs_tol: 1e-10,
        rel_tol: 1e-10,
        max_iterations: 24,
    };
    let cases: [(fn(f64) -> f64, f64, f64, f64); 3] = [
        (|x| x * x, 0.0, 2.0, 8.0 / 3.0),
        (|x| x.sin(), 0.0, PI, 2.0),
        (|x| x.exp(), 0.0, 1.0, E - 1.0),
    ];
    for (f, a, b, expected) in cases {
        let q = rk4_adaptive(f, a, b, &settings).unwrap();
        assert_eq!(q.status, QuadStatus::Converged);
        assert_near(q.value, expected, 1e-9, "adaptive reference");
    }
}

#[test]
fn adaptive_max_steps_is_not_an_error() {
    let settings = AdaptiveSettings {
        abs_tol: 1e-15,
        rel_tol: 1e-15,
        max_iterations: 2,
    };
    let q = rk4_adaptive(|x: f64| x.sqrt(), 0.0, 1.0, &settings).unwrap();
    assert_eq!(q.status, QuadStatus::MaxStepsReached);
    assert_eq!(q.steps, 32);
    assert_eq!(q.evals, 3 * (8 + 16 + 32));
    assert_near(q.value, 2.0 / 3.0, 1e-3, "last estimate still usable");
    assert!(q.error > 1e-15);
}

#[test]
fn adaptive_defaults_replace_non_positive_settings() {
    let bad = AdaptiveSettings {
        abs_tol: 0.0,
        rel_tol: -1.0,
        max_iterations: 0,
    };
    let q1 = rk4_adaptive(|x: f64| x.exp(), 0.0, 1.0, &bad).unwrap();
    let q2 = rk4_adaptive(|x: f64| x.exp(), 0.0, 1.0, &AdaptiveSettings::default()).unwrap();
    assert_eq!(q1, q2);
}

#[test]
fn adaptive_empty_interval() {
    let mut calls = 0;
    let q = rk4_adaptive(
        |x: f64| {
            calls += 1;
            x
        },
        3.0,
        3.0,
        &AdaptiveSettings::default(),
    )
    .unwrap();
    assert_eq!(q.value, 0.0);
    assert_eq!(q.status, QuadStatus::Converged);
    assert_eq!(calls, 0);
}

#[test]
fn adaptive_captured_parameter() {
    // Parameterised integrand: ∫_0^1 k x dx = k / 2
    let k = 3.5;
    let q = rk4_adaptive(|x: f64| k * x, 0.0, 1.0, &AdaptiveSettings::default()).unwrap();
    assert_near(q.value, k / 2.0, 1e-12, "captured k");
}

#[test]
fn adaptive_is_repeatable() {
    let s = AdaptiveSettings::default();
    let a = rk4_adaptive(|x: f64| x.cos(), 0.0, 1.0, &s).unwrap();
    let b = rk4_adaptive(|x: f64| x.cos(), 0.0, 1.0, &s).unwrap();
    assert_eq!(a.value.to_bits(), b.value.to_bits());
}

#[test]
fn adaptive_f32() {
    let settings = AdaptiveSettings {
        abs_tol: 1e-4_f32,
        rel_tol: 1e-5,
        max_iterations: 10,
    };
    let q = rk4_adaptive(|x: f32| x * x, 0.0, 3.0, &settings).unwrap();
    assert_eq!(q.status, QuadStatus::Converged);
    assert!((q.value - 9.0).abs() < 1e-4);
}

#[test]
fn error_display() {
    assert_eq!(
        IntegrateError::InvalidSubdivisions.to_string(),
        "invalid number of subdivisions"
    );
}
