/// Elementwise sum over equal-length slices: `dst[i] = a[i] + b[i]`.
///
/// Plain IEEE-754 double addition, no fused multiply/add. Running it any
/// number of times over the same inputs yields the same `dst`.
///
/// # Panics
/// If the three slices do not share the same length.
pub fn add_into(dst: &mut [f64], a: &[f64], b: &[f64]) {
    assert_eq!(dst.len(), a.len(), "destination/source1 length mismatch");
    assert_eq!(a.len(), b.len(), "source1/source2 length mismatch");

    for ((d, &x), &y) in dst.iter_mut().zip(a).zip(b) {
        *d = x + y;
    }
}

/// First pass of [`add_into`] into storage that has been reserved but never written.
///
/// Each sum is stored exactly once, so the memory traffic matches a regular
/// pass without a separate clearing step beforehand. `dst` must be empty.
///
/// # Panics
/// If `dst` is non-empty or the sources differ in length.
pub fn add_extend(dst: &mut Vec<f64>, a: &[f64], b: &[f64]) {
    assert!(dst.is_empty(), "destination already populated");
    assert_eq!(a.len(), b.len(), "source1/source2 length mismatch");

    dst.extend(a.iter().zip(b).map(|(&x, &y)| x + y));
}

#[cfg(test)]
mod numerical_kernel_tests {
    use super::*;

    #[test]
    fn test_add_into_basic() {
        let a = [1.0, 1.0, 1.0, 1.0];
        let b = [2.0, 2.0, 2.0, 2.0];
        let mut dst = [0.0; 4];

        add_into(&mut dst, &a, &b);
        assert_eq!(dst, [3.0, 3.0, 3.0, 3.0]);
    }

    /// Stale destination contents must be fully overwritten.
    #[test]
    fn test_add_into_overwrites() {
        let a = [0.5, -1.0, f64::MAX];
        let b = [0.25, 1.0, f64::MAX];
        let mut dst = [f64::NAN, 7.0, 0.0];

        add_into(&mut dst, &a, &b);
        assert_eq!(dst[0], 0.75);
        assert_eq!(dst[1], 0.0);
        // Overflow rounds to infinity, it does not saturate.
        assert_eq!(dst[2], f64::INFINITY);
    }

    #[test]
    fn test_add_into_large_finite() {
        let mut dst = [0.0];
        add_into(&mut dst, &[1e300], &[1e300]);
        assert_eq!(dst[0], 2e300);
        assert!(dst[0].is_finite());
    }

    #[test]
    fn test_add_into_repeat_is_stable() {
        let a = vec![0.1; 16];
        let b = vec![0.2; 16];
        let mut once = vec![0.0; 16];
        let mut many = vec![0.0; 16];

        add_into(&mut once, &a, &b);
        for _ in 0..10 {
            add_into(&mut many, &a, &b);
        }
        assert_eq!(once, many);
    }

    #[test]
    fn test_add_into_empty() {
        let mut dst: [f64; 0] = [];
        add_into(&mut dst, &[], &[]);
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn test_add_into_length_mismatch() {
        let mut dst = [0.0; 3];
        add_into(&mut dst, &[1.0; 3], &[2.0; 2]);
    }

    #[test]
    fn test_add_extend_does_not_reallocate() {
        let a = vec![1.0; 32];
        let b = vec![2.0; 32];
        let mut dst = Vec::with_capacity(32);
        let before = dst.as_ptr();

        add_extend(&mut dst, &a, &b);
        assert_eq!(dst, vec![3.0; 32]);
        assert_eq!(dst.as_ptr(), before, "reserved storage must be reused");
    }

    #[test]
    #[should_panic(expected = "already populated")]
    fn test_add_extend_rejects_populated() {
        let mut dst = vec![0.0];
        add_extend(&mut dst, &[1.0], &[2.0]);
    }
}
