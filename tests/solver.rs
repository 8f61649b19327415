//! Scenarios that cross module boundaries: dense systems solved against
//! packed factorizations, polynomial roots checked through evaluation.

use lamina::linalg::{solve, solve_upper_triangular, solve_with_pivoting, LinalgError};
use lamina::poly::{PolyError, RootResult};
use lamina::{
    Convergence, LowerTriangularMatrix, Matrix, MatrixMut, MatrixRef, PackedMatrix, Polynomial,
    SymmetricMatrix, TaylorSeries, Vector,
};
use rand::SeedableRng;

fn assert_close(a: &Vector<f64>, b: &Vector<f64>, tol: f64) {
    assert_eq!(a.len(), b.len());
    for i in 0..a.len() {
        assert!(
            (a[i] - b[i]).abs() < tol,
            "entry {}: {} vs {}",
            i,
            a[i],
            b[i]
        );
    }
}

#[test]
fn back_substitution_reference_case() {
    let u = Matrix::from_rows(2, &[2.0, 1.0, 0.0, 3.0]);
    let b = Vector::from_slice(&[5.0, 6.0]);
    let x = solve_upper_triangular(&u, &b).unwrap();
    assert_eq!(x.as_slice(), &[1.5, 2.0]);
}

#[test]
fn pivoting_reference_case() {
    let a = Matrix::from_rows(2, &[0.0, 1.0, 1.0, 1.0]);
    let b = Vector::from_slice(&[1.0, 3.0]);
    assert_eq!(solve(&a, &b), Err(LinalgError::ZeroPivot { col: 0 }));
    let x = solve_with_pivoting(&a, &b).unwrap();
    assert_eq!(x.as_slice(), &[2.0, 1.0]);
}

#[test]
fn cholesky_factor_solves_the_system() {
    // A = L Lᵗ, solve A x = b as Lᵗ x = L⁻¹ b using the dense solvers
    let a = Matrix::from_rows(3, &[4.0, 2.0, 2.0, 2.0, 5.0, 3.0, 2.0, 3.0, 6.0]);
    let x_true = Vector::from_slice(&[1.0, -2.0, 0.5]);
    let b = &a * &x_true;

    let l = SymmetricMatrix::from_dense(&a)
        .unwrap()
        .compute_cholesky()
        .unwrap();
    // forward substitution via the upper solver on the flipped system
    let n = l.size();
    let flipped = Matrix::from_fn(n, |i, j| l.entry(n - 1 - i, n - 1 - j));
    let b_rev = Vector::from_vec((0..n).map(|i| b[n - 1 - i]).collect());
    let y_rev = solve_upper_triangular(&flipped, &b_rev).unwrap();
    let y = Vector::from_vec((0..n).map(|i| y_rev[n - 1 - i]).collect());

    let lt = l.to_dense().transpose();
    let x = solve_upper_triangular(&lt, &y).unwrap();
    assert_close(&x, &x_true, 1e-12);
    assert_close(&solve(&a, &b).unwrap(), &x_true, 1e-12);
}

#[test]
fn cholesky_of_identity_is_identity() {
    let l = SymmetricMatrix::<f64>::identity(5).compute_cholesky().unwrap();
    assert_eq!(l.to_dense(), Matrix::eye(5));
    assert_eq!(l.packed_len(), 15);
}

#[test]
fn power_iteration_agrees_with_rayleigh_quotient() {
    let a = Matrix::from_rows(3, &[2.0, -1.0, 0.0, -1.0, 2.0, -1.0, 0.0, -1.0, 2.0]);
    let s = SymmetricMatrix::from_dense(&a).unwrap();
    let pair = s
        .power_iteration_with(&Convergence::new(1e-12))
        .unwrap();
    // eigenvalues of this matrix are 2 - sqrt(2), 2, 2 + sqrt(2)
    assert!((pair.value - (2.0 + 2.0_f64.sqrt())).abs() < 1e-9);
    let av = &a * &pair.vector;
    assert!((pair.vector.dot(&av) - pair.value).abs() < 1e-9);
}

#[test]
fn power_iteration_on_identity() {
    let lambda = SymmetricMatrix::<f64>::identity(4)
        .power_iteration(1e-8)
        .unwrap();
    assert!((lambda - 1.0).abs() < 1e-12);
}

#[test]
fn packed_views_round_trip_through_dense() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(99);
    let r = Matrix::random(4, -2.0, 2.0, &mut rng).unwrap();
    let sym = Matrix::from_fn(4, |i, j| r[(i, j)] + r[(j, i)]);
    let s = SymmetricMatrix::from_dense(&sym).unwrap();
    assert_eq!(s.to_dense(), sym);

    let low = Matrix::from_fn(4, |i, j| if j <= i { r[(i, j)] } else { 0.0 });
    let l = LowerTriangularMatrix::from_dense(&low).unwrap();
    assert_eq!(l.to_dense(), low);
    assert_eq!(
        LowerTriangularMatrix::from_dense(&sym),
        Err(LinalgError::NotLowerTriangular)
    );
}

#[test]
fn random_systems_solve_with_small_residual() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(5);
    for n in [1, 2, 5, 10, 20] {
        let mut a = Matrix::random(n, -1.0, 1.0, &mut rng).unwrap();
        for i in 0..n {
            a[(i, i)] += 2.0 * n as f64;
        }
        let b = Vector::from_vec((0..n).map(|i| (i as f64).sin()).collect());
        let x = solve_with_pivoting(&a, &b).unwrap();
        let r = &(&a * &x) - &b;
        assert!(r.norm() < 1e-10, "n = {}: residual {}", n, r.norm());
    }
}

#[test]
fn singular_system_reports_column() {
    let a = Matrix::from_rows(3, &[1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 1.0, 0.0, 1.0]);
    let b = Vector::from_slice(&[1.0, 2.0, 3.0]);
    assert_eq!(
        solve_with_pivoting(&a, &b),
        Err(LinalgError::Singular { col: 2 })
    );
}

#[test]
fn newton_on_taylor_sine_finds_pi() {
    let s = Polynomial::<f64>::taylor(21, TaylorSeries::Sin);
    let RootResult { x, fx, iterations } = s
        .compute_zero_with(3.0, &Convergence::new(1e-12))
        .unwrap();
    assert!((x - core::f64::consts::PI).abs() < 1e-8);
    assert!(fx.abs() < 1e-8);
    assert!(iterations < 20);
}

#[test]
fn polynomial_reference_values() {
    let e = Polynomial::<f64>::from_function(3, "exp").unwrap();
    assert_eq!(e.eval(0.0), 1.0);
    let s = Polynomial::<f64>::from_function(4, "sin").unwrap();
    assert_eq!(s.eval(0.0), 0.0);
    assert_eq!(
        Polynomial::<f64>::from_function(4, "log").unwrap_err(),
        PolyError::UnknownFunction
    );
}

#[test]
fn polynomial_algebra_matches_evaluation() {
    let p = Polynomial::<f64>::from_coefficients(&[1.0, 0.0, 1.0]);
    let q = Polynomial::from_coefficients(&[-1.0, 2.0]);
    let r: Polynomial<f64> = 2.0 * (&p * &q) + 1.0;
    for &x in &[-1.0, 0.0, 0.5, 3.0] {
        let expected = 2.0 * p.eval(x) * q.eval(x) + 1.0;
        assert!((r.eval(x) - expected).abs() < 1e-12);
    }
    assert_eq!(r.degree(), 3);
}

#[test]
fn lower_triangular_rejects_upper_writes() {
    let mut l = LowerTriangularMatrix::new(3, 1.0_f64);
    assert_eq!(
        l.set(0, 1, 2.0),
        Err(LinalgError::OutsideTriangle { row: 0, col: 1 })
    );
    assert_eq!(l.get(0, 1), Ok(0.0));
    assert_eq!(l.get(1, 0), Ok(1.0));
}
