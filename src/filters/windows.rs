//! Window functions for spectral analysis and FIR design
//!
//! Coefficients are generated once into a caller-owned buffer; applying a
//! window afterwards is a plain elementwise multiply, so the trigonometric
//! cost is paid at initialization regardless of how many blocks are windowed.

use std::f32::consts::PI;

use crate::error::DspError;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    /// w[n] = 1 (no tapering; the leakage-maximizing baseline)
    Rectangular,

    /// w[n] = 0.5·(1 − cos(2πn/L))
    /// Mainlobe width: 8π/L, sidelobe attenuation: ~44 dB
    Hanning,

    /// w[n] = 0.54 − 0.46·cos(2πn/L)
    /// Mainlobe width: 8π/L, sidelobe attenuation: ~53 dB
    Hamming,
}

impl WindowKind {
    /// Approximate stopband attenuation in dB when used for FIR design
    pub fn stopband_attenuation_db(&self) -> f32 {
        match self {
            WindowKind::Rectangular => -21.0,
            WindowKind::Hanning => -44.0,
            WindowKind::Hamming => -53.0,
        }
    }
}

/// Window block over a caller-owned coefficient buffer
///
/// The buffer is fully populated at construction and immutable afterwards;
/// its length must match every sample buffer passed to the apply calls.
pub struct Window<'a> {
    coefficients: &'a [f32],
    kind: WindowKind,
}

impl<'a> Window<'a> {
    /// Populate `buf` with coefficients for `kind` and bind it
    pub fn new(buf: &'a mut [f32], kind: WindowKind) -> Result<Self, DspError> {
        if buf.is_empty() {
            return Err(DspError::InvalidLength(0));
        }

        let length = buf.len() as f32;
        match kind {
            WindowKind::Rectangular => buf.fill(1.0),
            WindowKind::Hanning => {
                for (n, w) in buf.iter_mut().enumerate() {
                    *w = 0.5 * (1.0 - (2.0 * PI * n as f32 / length).cos());
                }
            }
            WindowKind::Hamming => {
                for (n, w) in buf.iter_mut().enumerate() {
                    *w = 0.54 - 0.46 * (2.0 * PI * n as f32 / length).cos();
                }
            }
        }

        Ok(Self {
            coefficients: buf,
            kind,
        })
    }

    /// Elementwise multiply: `output[n] = input[n] · w[n]`
    pub fn apply(&self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(input.len(), self.coefficients.len());
        debug_assert_eq!(output.len(), self.coefficients.len());

        for ((x, w), y) in input
            .iter()
            .zip(self.coefficients.iter())
            .zip(output.iter_mut())
        {
            *y = x * w;
        }
    }

    /// Apply the window in place
    pub fn apply_inplace(&self, buf: &mut [f32]) {
        debug_assert_eq!(buf.len(), self.coefficients.len());

        for (x, w) in buf.iter_mut().zip(self.coefficients.iter()) {
            *x *= w;
        }
    }

    /// Amplitude correction factor L/Σw
    ///
    /// Windowing attenuates the signal; multiplying spectral magnitudes by
    /// this factor restores on-bin peak amplitudes.
    pub fn amplitude_correction(&self) -> f32 {
        let sum: f32 = self.coefficients.iter().sum();
        self.coefficients.len() as f32 / sum
    }

    /// Power correction factor L/Σw² for power-spectral-density estimates
    pub fn power_correction(&self) -> f32 {
        let sum_sq: f32 = self.coefficients.iter().map(|w| w * w).sum();
        self.coefficients.len() as f32 / sum_sq
    }

    /// Window length L
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Whether the window is empty (never, for a constructed window)
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Configured window kind
    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    /// The generated coefficient sequence
    pub fn coefficients(&self) -> &[f32] {
        self.coefficients
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rectangular_window_is_identity() {
        let mut buf = vec![0.0f32; 128];
        let window = Window::new(&mut buf, WindowKind::Rectangular).unwrap();

        let input: Vec<f32> = (0..128).map(|i| (i as f32 * 0.1).sin()).collect();
        let mut output = vec![0.0f32; 128];
        window.apply(&input, &mut output);

        assert_eq!(input, output);
    }

    #[test]
    fn test_hanning_boundaries_and_center() {
        let len = 256;
        let mut buf = vec![0.0f32; len];
        let window = Window::new(&mut buf, WindowKind::Hanning).unwrap();
        let w = window.coefficients();

        // Periodic form (denominator L): w[0] = 0 exactly, center = 1
        assert_abs_diff_eq!(w[0], 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(w[len / 2], 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(w[len - 1], 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_hamming_boundaries_and_center() {
        let len = 256;
        let mut buf = vec![0.0f32; len];
        let window = Window::new(&mut buf, WindowKind::Hamming).unwrap();
        let w = window.coefficients();

        assert_abs_diff_eq!(w[0], 0.08, epsilon = 1e-6);
        assert_abs_diff_eq!(w[len / 2], 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(w[len - 1], 0.08, epsilon = 1e-3);
    }

    #[test]
    fn test_apply_inplace_matches_apply() {
        let mut buf = vec![0.0f32; 64];
        let window = Window::new(&mut buf, WindowKind::Hamming).unwrap();

        let input: Vec<f32> = (0..64).map(|i| (i as f32 * 0.3).cos()).collect();
        let mut expected = vec![0.0f32; 64];
        window.apply(&input, &mut expected);

        let mut inplace = input.clone();
        window.apply_inplace(&mut inplace);

        assert_eq!(expected, inplace);
    }

    #[test]
    fn test_correction_factors() {
        let mut rect_buf = vec![0.0f32; 100];
        let rect = Window::new(&mut rect_buf, WindowKind::Rectangular).unwrap();
        assert_abs_diff_eq!(rect.amplitude_correction(), 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(rect.power_correction(), 1.0, epsilon = 1e-5);

        let mut hamming_buf = vec![0.0f32; 100];
        let hamming = Window::new(&mut hamming_buf, WindowKind::Hamming).unwrap();
        // Mean of the periodic Hamming window is 0.54
        assert_abs_diff_eq!(hamming.amplitude_correction(), 1.0 / 0.54, epsilon = 1e-2);
        assert!(hamming.power_correction() > 1.0);
    }

    #[test]
    fn test_zero_length_is_rejected() {
        let mut buf: Vec<f32> = vec![];
        assert_eq!(
            Window::new(&mut buf, WindowKind::Hanning).err(),
            Some(DspError::InvalidLength(0))
        );
    }
}
