//! Time-domain filtering blocks
//!
//! Window generation/application, block-based FIR filtering with streaming
//! state, and windowed-sinc coefficient design.

pub mod design;
pub mod fir;
pub mod windows;

pub use fir::FirFilter;
pub use windows::{Window, WindowKind};
