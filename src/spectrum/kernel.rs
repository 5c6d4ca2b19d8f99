//! FFT kernel seam
//!
//! The engine only needs a correct real-FFT kernel behind a narrow interface;
//! the production implementation wraps `realfft`, and tests substitute a
//! naive O(N²) DFT through the same trait.

use num_complex::Complex;
use realfft::{ComplexToReal, RealFftPlanner, RealToComplex};
use std::sync::Arc;

use crate::error::DspError;

/// Smallest supported transform length
pub const MIN_FFT_LEN: usize = 32;

/// Largest supported transform length
pub const MAX_FFT_LEN: usize = 4096;

/// Whether `len` is a member of the supported transform set {32, 64, ..., 4096}
pub fn is_supported_length(len: usize) -> bool {
    len.is_power_of_two() && (MIN_FFT_LEN..=MAX_FFT_LEN).contains(&len)
}

/// Real-input FFT kernel over the packed half-spectrum layout
///
/// The packed layout interleaves N/2 complex bins as
/// `{re[0], im[0], re[1], im[1], ...}` with `im[0]` written as zero (bin 0 is
/// the purely real DC offset). The Nyquist bin is not representable in this
/// packing: `forward` discards it and `inverse` treats it as zero.
///
/// Implementations may destroy the contents of their input slice; callers
/// stage data through scratch memory.
pub trait RealFftKernel {
    /// Configured transform length N
    fn len(&self) -> usize;

    /// Transform N real samples into the packed spectrum (length N)
    fn forward(&mut self, time: &mut [f32], packed: &mut [f32]);

    /// Transform a packed spectrum (length N) back into N real samples,
    /// scaled so that `inverse(forward(x)) == x` up to rounding
    fn inverse(&mut self, packed: &mut [f32], time: &mut [f32]);
}

/// Production kernel backed by `realfft`
///
/// Plans the forward and inverse transforms once at initialization (twiddle
/// tables included) and keeps a single half-spectrum staging buffer, so apply
/// calls perform no allocation.
pub struct RealFftPlannerKernel {
    len: usize,
    r2c: Arc<dyn RealToComplex<f32>>,
    c2r: Arc<dyn ComplexToReal<f32>>,

    /// Unpacked half spectrum, N/2 + 1 bins including Nyquist
    half_spectrum: Vec<Complex<f32>>,
}

impl RealFftPlannerKernel {
    /// Plan a kernel for the given transform length
    pub fn new(len: usize) -> Result<Self, DspError> {
        if !is_supported_length(len) {
            return Err(DspError::InvalidLength(len));
        }

        let mut planner = RealFftPlanner::<f32>::new();
        let r2c = planner.plan_fft_forward(len);
        let c2r = planner.plan_fft_inverse(len);
        let half_spectrum = vec![Complex::new(0.0, 0.0); len / 2 + 1];

        Ok(Self {
            len,
            r2c,
            c2r,
            half_spectrum,
        })
    }
}

impl RealFftKernel for RealFftPlannerKernel {
    fn len(&self) -> usize {
        self.len
    }

    fn forward(&mut self, time: &mut [f32], packed: &mut [f32]) {
        self.r2c
            .process(time, &mut self.half_spectrum)
            .expect("forward FFT failed");

        let half = self.len / 2;
        for (k, bin) in self.half_spectrum[..half].iter().enumerate() {
            packed[2 * k] = bin.re;
            packed[2 * k + 1] = bin.im;
        }
        // DC is purely real
        packed[1] = 0.0;
    }

    fn inverse(&mut self, packed: &mut [f32], time: &mut [f32]) {
        let half = self.len / 2;
        for (k, bin) in self.half_spectrum[..half].iter_mut().enumerate() {
            *bin = Complex::new(packed[2 * k], packed[2 * k + 1]);
        }
        // realfft rejects non-zero imaginary parts at DC and Nyquist
        self.half_spectrum[0].im = 0.0;
        self.half_spectrum[half] = Complex::new(0.0, 0.0);

        self.c2r
            .process(&mut self.half_spectrum, time)
            .expect("inverse FFT failed");

        let scale = 1.0 / self.len as f32;
        for sample in time.iter_mut() {
            *sample *= scale;
        }
    }
}

/// Reference O(N²) DFT kernel for cross-checking the production kernel
#[cfg(test)]
pub(crate) struct NaiveDftKernel {
    len: usize,
}

#[cfg(test)]
impl NaiveDftKernel {
    pub(crate) fn new(len: usize) -> Result<Self, DspError> {
        if !is_supported_length(len) {
            return Err(DspError::InvalidLength(len));
        }
        Ok(Self { len })
    }
}

#[cfg(test)]
impl RealFftKernel for NaiveDftKernel {
    fn len(&self) -> usize {
        self.len
    }

    fn forward(&mut self, time: &mut [f32], packed: &mut [f32]) {
        let n = self.len;
        for k in 0..n / 2 {
            let mut re = 0.0f64;
            let mut im = 0.0f64;
            for (i, &x) in time.iter().enumerate() {
                let angle = -2.0 * std::f64::consts::PI * (k * i) as f64 / n as f64;
                re += x as f64 * angle.cos();
                im += x as f64 * angle.sin();
            }
            packed[2 * k] = re as f32;
            packed[2 * k + 1] = im as f32;
        }
        packed[1] = 0.0;
    }

    fn inverse(&mut self, packed: &mut [f32], time: &mut [f32]) {
        let n = self.len;
        for (i, sample) in time.iter_mut().enumerate() {
            // Hermitian expansion of the half spectrum, Nyquist taken as zero
            let mut acc = packed[0] as f64;
            for k in 1..n / 2 {
                let angle = 2.0 * std::f64::consts::PI * (k * i) as f64 / n as f64;
                acc += 2.0
                    * (packed[2 * k] as f64 * angle.cos()
                        - packed[2 * k + 1] as f64 * angle.sin());
            }
            *sample = (acc / n as f64) as f32;
        }
    }
}
