//! FIR coefficient design using the windowing method
//!
//! Ideal-sinc impulse response multiplied by a window function, written into
//! a caller-owned coefficient buffer. The result is symmetric (linear
//! phase), so the same array serves directly as a time-reversed tap set for
//! [`crate::FirFilter`].

use std::f32::consts::PI;

use crate::error::DspError;
use crate::filters::windows::Window;

/// Design a lowpass filter with the windowing method
///
/// `cutoff` is the -6 dB edge in normalized frequency (units of π
/// rad/sample, exclusive range (0, 1)). The coefficient buffer must match
/// the window length; an odd length gives a Type I linear-phase filter.
/// Coefficients are normalized to unity gain at DC.
pub fn windowed_sinc_lowpass(
    cutoff: f32,
    window: &Window,
    coefficients: &mut [f32],
) -> Result<(), DspError> {
    if !(cutoff > 0.0 && cutoff < 1.0) {
        return Err(DspError::InvalidArgument("cutoff must lie in (0, 1)"));
    }
    if coefficients.len() != window.len() {
        return Err(DspError::SizeMismatch {
            expected: window.len(),
            actual: coefficients.len(),
        });
    }

    let center = (coefficients.len() - 1) as f32 / 2.0;
    let wc = cutoff * PI;

    for ((n, h), &w) in coefficients
        .iter_mut()
        .enumerate()
        .zip(window.coefficients().iter())
    {
        let x = n as f32 - center;
        // h_ideal[n] = sin(wc·x)/(π·x), limit wc/π at the center tap
        let ideal = if x.abs() < 1e-6 {
            wc / PI
        } else {
            (wc * x).sin() / (PI * x)
        };
        *h = ideal * w;
    }

    // Normalize to unity DC gain
    let sum: f32 = coefficients.iter().sum();
    for h in coefficients.iter_mut() {
        *h /= sum;
    }

    Ok(())
}
