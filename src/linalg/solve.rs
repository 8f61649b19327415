use crate::dense::{Matrix, Vector};
use crate::linalg::LinalgError;
use crate::traits::FloatScalar;

/// Solve `U x = b` by back-substitution.
///
/// Preconditions are checked in order: `U` must be upper triangular
/// (exact zeros below the diagonal), `U.dimension() == b.len()`, and no
/// diagonal entry may be zero.
///
/// ```
/// use lamina::{Matrix, Vector};
/// use lamina::linalg::solve_upper_triangular;
///
/// let u = Matrix::from_rows(2, &[2.0_f64, 1.0, 0.0, 3.0]);
/// let b = Vector::from_slice(&[5.0, 6.0]);
/// let x = solve_upper_triangular(&u, &b).unwrap();
/// assert_eq!(x.as_slice(), &[1.5, 2.0]);
/// ```
pub fn solve_upper_triangular<T: FloatScalar>(
    u: &Matrix<T>,
    b: &Vector<T>,
) -> Result<Vector<T>, LinalgError> {
    if !u.is_upper_triangular() {
        return Err(LinalgError::NotUpperTriangular);
    }
    let n = u.dimension();
    check_dims(n, b)?;
    if let Some(index) = (0..n).find(|&i| u[(i, i)] == T::zero()) {
        return Err(LinalgError::ZeroDiagonal { index });
    }

    let mut x = Vector::zeros(n);
    for i in (0..n).rev() {
        let mut sum = b[i];
        for j in (i + 1)..n {
            sum = sum - u[(i, j)] * x[j];
        }
        x[i] = sum / u[(i, i)];
    }
    Ok(x)
}

/// Solve `A x = b` by Gaussian elimination without pivoting.
///
/// `A` and `b` are copied, reduced to an upper-triangular system and handed
/// to [`solve_upper_triangular`]. Fails with [`LinalgError::ZeroPivot`] as
/// soon as a pivot is exactly zero, even if the system is solvable; use
/// [`solve_with_pivoting`] for those.
///
/// ```
/// use lamina::{Matrix, Vector};
/// use lamina::linalg::solve;
///
/// let a = Matrix::from_rows(2, &[3.0_f64, 2.0, 1.0, 4.0]);
/// let b = Vector::from_slice(&[7.0, 9.0]);
/// let x = solve(&a, &b).unwrap();
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 2.0).abs() < 1e-12);
/// ```
pub fn solve<T: FloatScalar>(a: &Matrix<T>, b: &Vector<T>) -> Result<Vector<T>, LinalgError> {
    check_dims(a.dimension(), b)?;
    let mut u = a.clone();
    let mut y = b.clone();
    eliminate(&mut u, &mut y).map_err(|col| LinalgError::ZeroPivot { col })?;
    solve_upper_triangular(&u, &y)
}

/// Solve `A x = b`, swapping rows whenever elimination stops at a zero pivot.
///
/// Each time elimination hits a zero pivot in column `c`, the candidate rows
/// `c..n` of the partially reduced column are searched for the entry of
/// largest absolute value (ties keep the lowest row index). That row is
/// swapped into position `c` of the working system and elimination starts
/// over. The failing column moves strictly to the right on every retry, so
/// the loop runs at most `n` times. Fails with [`LinalgError::Singular`] if
/// the best candidate is itself zero.
///
/// ```
/// use lamina::{Matrix, Vector};
/// use lamina::linalg::solve_with_pivoting;
///
/// let a = Matrix::from_rows(2, &[0.0_f64, 1.0, 1.0, 1.0]);
/// let b = Vector::from_slice(&[1.0, 3.0]);
/// let x = solve_with_pivoting(&a, &b).unwrap();
/// assert_eq!(x.as_slice(), &[2.0, 1.0]);
/// ```
pub fn solve_with_pivoting<T: FloatScalar>(
    a: &Matrix<T>,
    b: &Vector<T>,
) -> Result<Vector<T>, LinalgError> {
    check_dims(a.dimension(), b)?;

    let mut work_a = a.clone();
    let mut work_b = b.clone();
    let mut u = a.clone();
    let mut y = b.clone();

    loop {
        u.clone_from(&work_a);
        y.clone_from(&work_b);

        let col = match eliminate(&mut u, &mut y) {
            Ok(()) => return solve_upper_triangular(&u, &y),
            Err(col) => col,
        };

        let pivot_row = select_pivot(&u, col);
        if u[(pivot_row, col)] == T::zero() {
            return Err(LinalgError::Singular { col });
        }

        log::debug!(
            "zero pivot in column {}, swapping rows {} and {}",
            col,
            col,
            pivot_row
        );
        work_a.swap_rows(col, pivot_row);
        work_b.as_mut_slice().swap(col, pivot_row);
    }
}

fn check_dims<T>(n: usize, b: &Vector<T>) -> Result<(), LinalgError> {
    if n != b.len() {
        return Err(LinalgError::DimensionMismatch {
            matrix: n,
            vector: b.len(),
        });
    }
    Ok(())
}

/// Forward elimination in place, column by column.
///
/// On success `a` is upper triangular with exact zeros below the diagonal.
/// On a zero pivot returns its column, leaving `a` and `b` reduced up to
/// that column.
fn eliminate<T: FloatScalar>(a: &mut Matrix<T>, b: &mut Vector<T>) -> Result<(), usize> {
    let n = a.dimension();
    for col in 0..n {
        let pivot = a[(col, col)];
        if pivot == T::zero() {
            return Err(col);
        }
        for row in (col + 1)..n {
            let factor = a[(row, col)] / pivot;
            if factor == T::zero() {
                continue;
            }
            for j in (col + 1)..n {
                let v = a[(col, j)];
                a[(row, j)] = a[(row, j)] - factor * v;
            }
            a[(row, col)] = T::zero();
            let bc = b[col];
            b[row] = b[row] - factor * bc;
        }
    }
    Ok(())
}

/// Row in `col..n` with the largest `|a[(row, col)]|`; the first one wins
/// ties.
fn select_pivot<T: FloatScalar>(a: &Matrix<T>, col: usize) -> usize {
    let mut best = col;
    for row in (col + 1)..a.dimension() {
        if a[(row, col)].abs() > a[(best, col)].abs() {
            best = row;
        }
    }
    best
}
