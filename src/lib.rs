//! Spectral Blocks - Fixed-Buffer DSP Core
//!
//! Real-time spectral analysis and FIR filtering primitives operating on
//! caller-owned, fixed-size sample buffers. Every block borrows its working
//! memory at construction time and never allocates afterwards, so the apply
//! paths run with predictable latency on a processing thread.
//!
//! Typical pipeline: [`Window`] → [`RealFftEngine`] → [`spectrum::magnitude`],
//! or [`FirFilter`] feeding a downstream consumer.

pub mod error;
pub mod filters;
pub mod spectrum;

pub use error::DspError;
pub use filters::{FirFilter, Window, WindowKind};
pub use spectrum::{RealFftEngine, RealFftKernel, RealFftPlannerKernel};
