//! Spectral analysis blocks
//!
//! Real-valued FFT/IFFT over a packed half-spectrum, plus magnitude
//! extraction from that packed layout.

pub mod fft;
pub mod kernel;
pub mod magnitude;

pub use fft::RealFftEngine;
pub use kernel::{is_supported_length, RealFftKernel, RealFftPlannerKernel};
