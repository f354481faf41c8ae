//! Dense vector primitives
//!
//! All functions operate on equal-length slices and sum strictly left to
//! right, so repeated calls on identical inputs give identical bits.

/// Dot product of two equal-length vectors
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// L1 norm (sum of absolute values)
pub fn l1_norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x.abs()).sum()
}

/// L1 distance between two equal-length vectors
pub fn l1_distance(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(old, new)| (old - new).abs())
        .sum()
}

/// `y += alpha * x`
pub fn axpy(alpha: f64, x: &[f64], y: &mut [f64]) {
    debug_assert_eq!(x.len(), y.len());
    for (yi, xi) in y.iter_mut().zip(x.iter()) {
        *yi += alpha * xi;
    }
}

/// `v := scale * v + shift`, element-wise
pub fn scale_and_shift(v: &mut [f64], scale: f64, shift: f64) {
    for x in v.iter_mut() {
        *x = scale * *x + shift;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot() {
        assert!((dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]) - 32.0).abs() < 1e-12);
        assert_eq!(dot(&[], &[]), 0.0);
    }

    #[test]
    fn test_l1_norm_ignores_sign() {
        assert!((l1_norm(&[-1.0, 2.0, -3.5]) - 6.5).abs() < 1e-12);
    }

    #[test]
    fn test_l1_distance() {
        let a = [0.25, 0.25, 0.25, 0.25];
        let b = [1.0, 1.0, 1.0, 1.0];
        assert!((l1_distance(&a, &b) - 3.0).abs() < 1e-12);
        assert_eq!(l1_distance(&a, &a), 0.0);
    }

    #[test]
    fn test_axpy() {
        let mut y = vec![1.0, 1.0];
        axpy(0.5, &[2.0, 4.0], &mut y);
        assert_eq!(y, vec![2.0, 3.0]);
    }

    #[test]
    fn test_scale_and_shift() {
        let mut v = vec![1.0, 0.0, 2.0];
        scale_and_shift(&mut v, 0.85, 0.05);
        assert!((v[0] - 0.9).abs() < 1e-12);
        assert!((v[1] - 0.05).abs() < 1e-12);
        assert!((v[2] - 1.75).abs() < 1e-12);
    }
}
