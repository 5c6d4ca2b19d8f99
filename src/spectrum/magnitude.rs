//! Magnitude extraction from a packed spectrum
//!
//! Pure post-processing over the interleaved `{re, im, re, im, ...}` layout
//! produced by the FFT engine; no state, no failure modes.

/// Per-bin magnitude: `out[k] = sqrt(re[k]² + im[k]²)`
///
/// `packed` holds `out.len()` interleaved complex bins.
pub fn magnitude(packed: &[f32], out: &mut [f32]) {
    debug_assert_eq!(packed.len(), out.len() * 2);

    for (bin, m) in packed.chunks_exact(2).zip(out.iter_mut()) {
        *m = (bin[0] * bin[0] + bin[1] * bin[1]).sqrt();
    }
}

/// Per-bin squared magnitude: `out[k] = re[k]² + im[k]²`
///
/// Skips the square root; monotonic with [`magnitude`], so ordering and
/// thresholding carry over to the squared domain.
pub fn magnitude_squared(packed: &[f32], out: &mut [f32]) {
    debug_assert_eq!(packed.len(), out.len() * 2);

    for (bin, m) in packed.chunks_exact(2).zip(out.iter_mut()) {
        *m = bin[0] * bin[0] + bin[1] * bin[1];
    }
}

/// Per-bin magnitude in dB: `20·log10(|X[k]| / reference)`
pub fn magnitude_db(packed: &[f32], out: &mut [f32], reference: f32) {
    magnitude(packed, out);
    for m in out.iter_mut() {
        let clamped = m.max(1e-10); // Avoid log(0)
        *m = 20.0 * (clamped / reference).log10();
    }
}

/// Per-bin power in dB: `10·log10(|X[k]|² / reference²)`
pub fn power_db(packed: &[f32], out: &mut [f32], reference: f32) {
    magnitude_squared(packed, out);
    for p in out.iter_mut() {
        let clamped = p.max(1e-20);
        *p = 10.0 * (clamped / (reference * reference)).log10();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_magnitude_of_known_bins() {
        // Bins (3, 4) and (0, -1)
        let packed = [3.0, 4.0, 0.0, -1.0];
        let mut out = [0.0f32; 2];
        magnitude(&packed, &mut out);
        assert_abs_diff_eq!(out[0], 5.0, epsilon = 1e-6);
        assert_abs_diff_eq!(out[1], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_magnitude_squared_consistency() {
        let packed = [1.5, -2.5, 0.25, 0.75, -3.0, 4.0];
        let mut mags = [0.0f32; 3];
        let mut powers = [0.0f32; 3];
        magnitude(&packed, &mut mags);
        magnitude_squared(&packed, &mut powers);

        for (m, p) in mags.iter().zip(powers.iter()) {
            assert_abs_diff_eq!(m * m, *p, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_magnitude_db_reference_levels() {
        // |X| = 10 against reference 1 is exactly 20 dB
        let packed = [10.0, 0.0, 1.0, 0.0];
        let mut out = [0.0f32; 2];
        magnitude_db(&packed, &mut out, 1.0);
        assert_abs_diff_eq!(out[0], 20.0, epsilon = 1e-4);
        assert_abs_diff_eq!(out[1], 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_db_of_silent_bin_is_finite() {
        let packed = [0.0f32; 4];
        let mut out = [0.0f32; 2];
        magnitude_db(&packed, &mut out, 1.0);
        assert!(out.iter().all(|v| v.is_finite()));

        power_db(&packed, &mut out, 1.0);
        assert!(out.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_power_db_matches_magnitude_db() {
        let packed = [3.0, 4.0, 0.5, 0.5];
        let mut mag_db = [0.0f32; 2];
        let mut pow_db = [0.0f32; 2];
        magnitude_db(&packed, &mut mag_db, 1.0);
        power_db(&packed, &mut pow_db, 1.0);

        for (a, b) in mag_db.iter().zip(pow_db.iter()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-4);
        }
    }
}
