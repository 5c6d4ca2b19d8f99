//! Real-FFT engine block
//!
//! Owns forward/inverse transforms over a fixed length, staging caller data
//! through borrowed scratch so transforms never destroy caller buffers.

use crate::error::DspError;
use crate::spectrum::kernel::RealFftKernel;
use crate::spectrum::magnitude;

/// FFT engine over caller-owned scratch buffers
///
/// Configured once per transform length and reused across apply calls. The
/// two scratch buffers are each the transform length N: one stages working
/// samples, one holds the intermediate packed spectrum for magnitude
/// derivation. A single engine must be driven from one thread at a time;
/// distinct engines are fully independent.
pub struct RealFftEngine<'a, K: RealFftKernel> {
    kernel: K,

    /// Staging for pre-transform samples or the packed spectrum under
    /// inversion, so the kernel may work destructively
    scratch_time: &'a mut [f32],

    /// Intermediate packed spectrum for the magnitude paths
    scratch_spectrum: &'a mut [f32],
}

impl<'a, K: RealFftKernel> RealFftEngine<'a, K> {
    /// Bind scratch buffers to a configured kernel
    ///
    /// Both scratch buffers must match the kernel's transform length.
    pub fn new(
        kernel: K,
        scratch_time: &'a mut [f32],
        scratch_spectrum: &'a mut [f32],
    ) -> Result<Self, DspError> {
        let len = kernel.len();
        if scratch_time.len() != len {
            return Err(DspError::SizeMismatch {
                expected: len,
                actual: scratch_time.len(),
            });
        }
        if scratch_spectrum.len() != len {
            return Err(DspError::SizeMismatch {
                expected: len,
                actual: scratch_spectrum.len(),
            });
        }

        Ok(Self {
            kernel,
            scratch_time,
            scratch_spectrum,
        })
    }

    /// Transform N real samples into a packed spectrum of length N
    ///
    /// Output arrives in normal bin order; bit reversal is resolved
    /// internally. Pure function of the input for a fixed configuration.
    pub fn forward(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(input.len(), self.len());
        debug_assert_eq!(output.len(), self.len());

        self.scratch_time.copy_from_slice(input);
        self.kernel.forward(self.scratch_time, output);
    }

    /// Reconstruct N real samples from a packed spectrum of length N
    ///
    /// `inverse(forward(x))` recovers `x` up to floating-point rounding for
    /// any signal without Nyquist-rate content (the packing drops bin N/2).
    pub fn inverse(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(input.len(), self.len());
        debug_assert_eq!(output.len(), self.len());

        self.scratch_time.copy_from_slice(input);
        self.kernel.inverse(self.scratch_time, output);
    }

    /// Transform and reduce to per-bin magnitudes (output length N/2)
    pub fn magnitude(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(input.len(), self.len());
        debug_assert_eq!(output.len(), self.num_bins());

        self.scratch_time.copy_from_slice(input);
        self.kernel.forward(self.scratch_time, self.scratch_spectrum);
        magnitude::magnitude(self.scratch_spectrum, output);
    }

    /// Transform and reduce to per-bin squared magnitudes (output length N/2)
    ///
    /// Cheaper than [`Self::magnitude`] and monotonic with it; preferred when
    /// only ordering or thresholding of bins matters.
    pub fn magnitude_squared(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(input.len(), self.len());
        debug_assert_eq!(output.len(), self.num_bins());

        self.scratch_time.copy_from_slice(input);
        self.kernel.forward(self.scratch_time, self.scratch_spectrum);
        magnitude::magnitude_squared(self.scratch_spectrum, output);
    }

    /// Configured transform length N
    pub fn len(&self) -> usize {
        self.kernel.len()
    }

    /// Whether the configured length is zero (never, for a valid kernel)
    pub fn is_empty(&self) -> bool {
        self.kernel.len() == 0
    }

    /// Number of spectral bins in the packed layout (N/2)
    pub fn num_bins(&self) -> usize {
        self.len() / 2
    }

    /// Center frequency of a bin in Hz for the given sample rate
    pub fn bin_frequency(&self, bin: usize, sample_rate: f32) -> f32 {
        bin as f32 * sample_rate / self.len() as f32
    }
}
