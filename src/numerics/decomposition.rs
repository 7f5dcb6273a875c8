// src/numerics/decomposition.rs
// Closed-form singular value and eigen decompositions of a 2x2 matrix.

use crate::numerics::types::matrix::Matrix2x2;
use crate::numerics::types::traits::FloatingPoint;
use crate::numerics::types::vector::Vector2;

/// `M = U * Sigma * V^T` with `U`, `V` proper rotations (determinant +1).
///
/// `sigma` is diagonal with `|sigma[0][0]| >= |sigma[1][1]|`. Because both
/// factors are rotations, a matrix with negative determinant cannot have a
/// non-negative `sigma`: its second diagonal entry then carries the sign of
/// `det(M)`. [`SingularValueDecomposition::singular_values`] always returns
/// the magnitudes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SingularValueDecomposition<T: FloatingPoint = f64> {
    pub u: Matrix2x2<T>,
    pub sigma: Matrix2x2<T>,
    pub v: Matrix2x2<T>,
}

impl<T: FloatingPoint> SingularValueDecomposition<T> {
    /// `(sigma1, sigma2)`, largest first, both non-negative.
    pub fn singular_values(&self) -> (T, T) {
        (self.sigma.values[0][0].abs(), self.sigma.values[1][1].abs())
    }

    pub fn reconstruct(&self) -> Matrix2x2<T> {
        self.u.dot(&self.sigma).dot(&self.v.transpose())
    }

    /// `(U, Sigma, V)`
    pub fn into_parts(self) -> (Matrix2x2<T>, Matrix2x2<T>, Matrix2x2<T>) {
        (self.u, self.sigma, self.v)
    }
}

/// `M = P * Lambda * P^-1` with unit eigenvectors as the columns of `P`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EigenDecomposition<T: FloatingPoint = f64> {
    pub eigenvectors: Matrix2x2<T>,
    pub eigenvalues: Matrix2x2<T>,
}

impl<T: FloatingPoint> EigenDecomposition<T> {
    /// Eigenvalues in the order of the eigenvector columns.
    pub fn eigenvalues(&self) -> (T, T) {
        (self.eigenvalues.values[0][0], self.eigenvalues.values[1][1])
    }

    pub fn eigenvector(&self, idx: usize) -> Vector2<T> {
        self.eigenvectors.column(idx)
    }

    /// Only meaningful for diagonalizable input; a defective matrix has
    /// parallel eigenvector columns and reconstructs to non-finite values.
    pub fn reconstruct(&self) -> Matrix2x2<T> {
        self.eigenvectors
            .dot(&self.eigenvalues)
            .dot(&self.eigenvectors.inverse())
    }

    /// `(eigenvectors, eigenvalues)`
    pub fn into_parts(self) -> (Matrix2x2<T>, Matrix2x2<T>) {
        (self.eigenvectors, self.eigenvalues)
    }
}

impl<T: FloatingPoint> Matrix2x2<T> {
    /// Closed-form singular value decomposition.
    ///
    /// `U` is the rotation by `theta = atan2(2ac + 2bd, a^2 + b^2 - c^2 - d^2) / 2`
    /// and `sigma1 = sqrt((S1 + S2) / 2)`. `V` is read off the rows
    /// `w1`, `w2` of `U^T M`: `v1 = w1 / |w1|`, `v2 = perp(v1)` and the
    /// signed `sigma2 = w2 . v2`. This keeps `V` consistent with `U` even when
    /// `theta` is poorly determined, which happens as the two singular values
    /// approach each other. `theta` is exactly 0 only when both atan2
    /// arguments are exactly 0 (identity, uniform scale, the swap matrix);
    /// otherwise it follows whatever rounding they carry.
    ///
    /// `phi = atan2(2ab + 2cd, a^2 - b^2 + c^2 - d^2) / 2` only picks `V` when
    /// `w1` vanishes, i.e. for the zero matrix, where `atan2(0, 0) == 0` gives
    /// `V = I`.
    pub fn svd(&self) -> SingularValueDecomposition<T> {
        let [[a, b], [c, d]] = self.values;
        let two = T::two();

        let f = a * a + b * b - c * c - d * d;
        let g = a * c + b * d;
        let theta = (two * g).atan2(f) / two;
        let u = Matrix2x2::from_angle(theta);

        let s1 = a * a + b * b + c * c + d * d;
        let s2 = (f * f + two * two * g * g).sqrt();
        let sigma1 = ((s1 + s2) / two).sqrt();

        // Rows of U^T M are sigma_i * v_i^T.
        let projected = u.transpose().dot(self);
        let w1 = Vector2::from(projected.row(0));
        let w2 = Vector2::from(projected.row(1));

        let w1_length = w1.length();
        let v1 = if w1_length == T::zero() {
            let phi = (two * (a * b + c * d)).atan2(a * a - b * b + c * c - d * d) / two;
            Vector2::new(phi.cos(), phi.sin())
        } else {
            w1 * (T::one() / w1_length)
        };
        // perp keeps det(V) == +1, so a reflection shows up as sigma2 < 0.
        let v2 = v1.perpendicular();

        SingularValueDecomposition {
            u,
            sigma: Matrix2x2::diagonal(sigma1, w2.dot(&v2)),
            v: Matrix2x2::from_columns(v1, v2),
        }
    }

    /// Closed-form eigendecomposition for real eigenvalues.
    ///
    /// Eigenvalues are `trace/2 +- sqrt(discriminant)`, larger first. Each
    /// eigenvector is taken from whichever off-diagonal entry has the larger
    /// magnitude: `(b, lambda - a)` when `|b| > |c|`, otherwise
    /// `(lambda - d, c)`, then normalized. An already diagonal matrix keeps
    /// the identity basis with eigenvalues `diag(a, d)`.
    ///
    /// A negative discriminant (complex pair) yields NaN throughout.
    pub fn ed(&self) -> EigenDecomposition<T> {
        let [[a, b], [c, d]] = self.values;
        let zero = T::zero();

        if b == zero && c == zero {
            return EigenDecomposition {
                eigenvectors: Matrix2x2::identity(),
                eigenvalues: Matrix2x2::diagonal(a, d),
            };
        }

        let half_trace = self.trace() / T::two();
        let root = self.discriminant().sqrt();
        let lambda1 = half_trace + root;
        let lambda2 = half_trace - root;

        let direction = |lambda: T| {
            if b.abs() > c.abs() {
                Vector2::new(b, lambda - a)
            } else {
                Vector2::new(lambda - d, c)
            }
        };

        EigenDecomposition {
            eigenvectors: Matrix2x2::from_columns(
                direction(lambda1).normalized(),
                direction(lambda2).normalized(),
            ),
            eigenvalues: Matrix2x2::diagonal(lambda1, lambda2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::types::matrix::IDENTITY;
    use approx::assert_abs_diff_eq;

    const EPSILON: f64 = 1e-10;

    fn assert_matrix_close(actual: &Matrix2x2, expected: &Matrix2x2) {
        for i in 0..2 {
            for j in 0..2 {
                assert_abs_diff_eq!(actual.values[i][j], expected.values[i][j], epsilon = EPSILON);
            }
        }
    }

    fn assert_proper_rotation(m: &Matrix2x2) {
        assert_abs_diff_eq!(m.det(), 1.0, epsilon = EPSILON);
        assert_matrix_close(&m.transpose().dot(m), &IDENTITY);
    }

    fn sample_matrices() -> Vec<Matrix2x2> {
        vec![
            Matrix2x2::new([[1.0, 2.0], [3.0, 4.0]]),
            Matrix2x2::new([[2.0, -1.0], [0.5, 3.0]]),
            Matrix2x2::new([[-4.0, 0.1], [2.0, -0.5]]),
            Matrix2x2::new([[1.0, 1.0], [0.0, 1.0]]),
            Matrix2x2::new([[0.0, 1.0], [1.0, 0.0]]),
            Matrix2x2::new([[2.0, 0.0], [0.0, 3.0]]),
            Matrix2x2::new([[1.0, 2.0], [2.0, 4.0]]),
            Matrix2x2::new([[0.0, 0.0], [0.0, 0.0]]),
            Matrix2x2::new([[0.0, -3.0], [0.0, 0.0]]),
            Matrix2x2::new([[-2.0, 0.0], [0.0, -2.0]]),
            Matrix2x2::from_angle(0.7),
            Matrix2x2::from_angle(2.0) * 1.5,
            IDENTITY,
        ]
    }

    #[test]
    fn test_svd_reconstructs_with_proper_rotations() {
        for m in sample_matrices() {
            let svd = m.svd();
            assert_matrix_close(&svd.reconstruct(), &m);
            assert_proper_rotation(&svd.u);
            assert_proper_rotation(&svd.v);

            let (sigma1, sigma2) = svd.singular_values();
            assert!(sigma1 >= sigma2 - EPSILON, "{:?}", m);
            assert!(sigma2 >= 0.0);
            assert_eq!(svd.sigma.values[0][1], 0.0);
            assert_eq!(svd.sigma.values[1][0], 0.0);

            if m.det() >= 0.0 {
                assert!(svd.sigma.values[0][0] >= 0.0, "{:?}", m);
                assert!(svd.sigma.values[1][1] >= -EPSILON, "{:?}", m);
            }
        }
    }

    #[test]
    fn test_svd_with_nearly_equal_singular_values() {
        let angle_pairs = [(0.3, 1.1), (0.0, 0.5), (2.0, -0.7), (-1.3, 2.9)];
        for exponent in 4..=14 {
            let gap = 10f64.powi(-exponent);
            for (t, p) in angle_pairs {
                for second in [1.0, -1.0] {
                    let m = Matrix2x2::from_angle(t)
                        .dot(&Matrix2x2::diagonal(1.0 + gap, second))
                        .dot(&Matrix2x2::from_angle(p).transpose());
                    let svd = m.svd();

                    let error = (svd.reconstruct() - m)
                        .values
                        .iter()
                        .flatten()
                        .fold(0.0f64, |worst, v| worst.max(v.abs()));
                    assert!(error < 1e-12, "gap={:e} t={} p={} error={:e}", gap, t, p, error);

                    assert_proper_rotation(&svd.u);
                    assert_proper_rotation(&svd.v);
                    assert_abs_diff_eq!(svd.sigma.det(), m.det(), epsilon = 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_svd_of_identity_is_identity() {
        let (u, sigma, v) = IDENTITY.svd().into_parts();
        assert_eq!(u, IDENTITY);
        assert_eq!(sigma, IDENTITY);
        assert_eq!(v, IDENTITY);
    }

    #[test]
    fn test_svd_of_diagonal_orders_largest_first() {
        let svd = Matrix2x2::new([[2.0, 0.0], [0.0, 3.0]]).svd();
        let (sigma1, sigma2) = svd.singular_values();
        assert_abs_diff_eq!(sigma1, 3.0, epsilon = EPSILON);
        assert_abs_diff_eq!(sigma2, 2.0, epsilon = EPSILON);
    }

    #[test]
    fn test_svd_of_reflection_keeps_rotations() {
        let m = Matrix2x2::new([[0.0, 1.0], [1.0, 0.0]]);
        let svd = m.svd();
        let (sigma1, sigma2) = svd.singular_values();
        assert_abs_diff_eq!(sigma1, 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(sigma2, 1.0, epsilon = EPSILON);
        assert_proper_rotation(&svd.u);
        assert_proper_rotation(&svd.v);
        // The negative determinant lives in sigma.
        assert_abs_diff_eq!(svd.sigma.det(), -1.0, epsilon = EPSILON);
        assert_matrix_close(&svd.reconstruct(), &m);
    }

    #[test]
    fn test_svd_of_zero_matrix() {
        let svd = Matrix2x2::<f64>::zero().svd();
        assert_eq!(svd.singular_values(), (0.0, 0.0));
        assert_eq!(svd.v, IDENTITY);
        assert!(svd.reconstruct().values.iter().flatten().all(|v| *v == 0.0));
    }

    #[test]
    fn test_svd_of_singular_matrix() {
        let m = Matrix2x2::new([[1.0, 2.0], [2.0, 4.0]]);
        let (sigma1, sigma2) = m.svd().singular_values();
        assert_abs_diff_eq!(sigma1, 5.0, epsilon = EPSILON);
        assert_abs_diff_eq!(sigma2, 0.0, epsilon = 1e-7);
    }

    #[test]
    fn test_svd_propagates_nan() {
        let m = Matrix2x2::new([[f64::NAN, 1.0], [0.0, 1.0]]);
        let svd = m.svd();
        assert!(!svd.sigma.is_finite());
    }

    #[test]
    fn test_ed_reconstructs_diagonalizable_matrices() {
        let cases = [
            Matrix2x2::new([[1.0, 2.0], [3.0, 4.0]]),
            Matrix2x2::new([[2.0, 1.0], [1.0, 2.0]]),
            Matrix2x2::new([[0.0, 1.0], [1.0, 0.0]]),
            Matrix2x2::new([[1.0, 1.0], [0.0, 2.0]]),
            Matrix2x2::new([[1.0, 0.0], [1.0, 2.0]]),
            Matrix2x2::new([[5.0, -0.001], [4.0, -1.0]]),
            Matrix2x2::new([[2.0, 0.0], [0.0, 3.0]]),
        ];
        for m in cases {
            assert!(m.discriminant() >= 0.0);
            let ed = m.ed();
            assert_matrix_close(&ed.reconstruct(), &m);
            for idx in 0..2 {
                assert_abs_diff_eq!(ed.eigenvector(idx).length(), 1.0, epsilon = EPSILON);
            }
        }
    }

    #[test]
    fn test_ed_eigenpairs_satisfy_definition() {
        let m = Matrix2x2::new([[4.0, -2.0], [1.0, 1.0]]);
        let ed = m.ed();
        let (lambda1, lambda2) = ed.eigenvalues();
        assert_abs_diff_eq!(lambda1, 3.0, epsilon = EPSILON);
        assert_abs_diff_eq!(lambda2, 2.0, epsilon = EPSILON);
        for (idx, lambda) in [(0, lambda1), (1, lambda2)] {
            let v = ed.eigenvector(idx);
            let image = m.translate(v);
            assert_abs_diff_eq!(image.x, lambda * v.x, epsilon = EPSILON);
            assert_abs_diff_eq!(image.y, lambda * v.y, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_ed_of_identity() {
        let (vectors, values) = IDENTITY.ed().into_parts();
        assert_eq!(vectors, IDENTITY);
        assert_eq!(values, IDENTITY);
    }

    #[test]
    fn test_ed_of_diagonal_pairs_values_with_basis() {
        let ed = Matrix2x2::new([[2.0, 0.0], [0.0, 3.0]]).ed();
        assert_eq!(ed.eigenvectors, IDENTITY);
        assert_eq!(ed.eigenvalues(), (2.0, 3.0));
    }

    #[test]
    fn test_ed_of_swap() {
        let ed = Matrix2x2::new([[0.0, 1.0], [1.0, 0.0]]).ed();
        assert_eq!(ed.eigenvalues(), (1.0, -1.0));
        let half = core::f64::consts::FRAC_1_SQRT_2;
        assert_abs_diff_eq!(ed.eigenvector(0).x, half, epsilon = EPSILON);
        assert_abs_diff_eq!(ed.eigenvector(0).y, half, epsilon = EPSILON);
        assert_abs_diff_eq!(ed.eigenvector(1).x, -half, epsilon = EPSILON);
        assert_abs_diff_eq!(ed.eigenvector(1).y, half, epsilon = EPSILON);
    }

    #[test]
    fn test_ed_of_shear_has_repeated_eigenvalue_without_division_by_zero() {
        let m = Matrix2x2::new([[1.0, 1.0], [0.0, 1.0]]);
        assert_eq!(m.det(), 1.0);
        assert_eq!(m.discriminant(), 0.0);

        let ed = m.ed();
        assert_eq!(ed.eigenvalues(), (1.0, 1.0));
        assert!(ed.eigenvectors.is_finite());
        assert_eq!(ed.eigenvector(0), Vector2::new(1.0, 0.0));
        assert_eq!(ed.eigenvector(1), Vector2::new(1.0, 0.0));
    }

    #[test]
    fn test_ed_pivot_uses_larger_off_diagonal() {
        // c dominates; the eigenvector for lambda == d must not collapse.
        let m = Matrix2x2::new([[1.0, 0.0], [1.0, 2.0]]);
        let ed = m.ed();
        assert_eq!(ed.eigenvalues(), (2.0, 1.0));
        assert_eq!(ed.eigenvector(0), Vector2::new(0.0, 1.0));
        assert!(ed.eigenvectors.is_finite());

        // b dominates.
        let m = Matrix2x2::new([[1.0, 10.0], [0.1, 1.0]]);
        let ed = m.ed();
        assert_eq!(ed.eigenvalues(), (2.0, 0.0));
        assert_matrix_close(&ed.reconstruct(), &m);
    }

    #[test]
    fn test_ed_of_rotation_is_nan() {
        let ed = Matrix2x2::new([[0.0, -1.0], [1.0, 0.0]]).ed();
        let (lambda1, lambda2) = ed.eigenvalues();
        assert!(lambda1.is_nan() && lambda2.is_nan());
        assert!(!ed.eigenvectors.is_finite());
    }

    #[test]
    fn test_decompositions_in_f32() {
        let m: Matrix2x2<f32> = Matrix2x2::new([[3.0, 1.0], [1.0, 3.0]]);
        let svd = m.svd();
        let r = svd.reconstruct();
        for i in 0..2 {
            for j in 0..2 {
                assert!((r.values[i][j] - m.values[i][j]).abs() < 1e-5);
            }
        }
        assert_eq!(m.ed().eigenvalues(), (4.0, 2.0));
    }
}
