//! Block-based FIR filter with streaming state
//!
//! Direct-form convolution over caller-owned coefficient, state, and scratch
//! buffers. The state buffer carries the last `num_taps - 1` input samples
//! across apply calls, so a long stream filtered block by block produces the
//! same output as a single pass over the whole stream.

use crate::error::DspError;

/// FIR filter block
///
/// Coefficients are stored in time-reversed order: index 0 is the most
/// delayed tap, index `num_taps - 1` multiplies the newest sample. Each
/// output then reduces to a forward dot-product scan over contiguous state,
/// which keeps the multiply-accumulate loop on sequential memory.
///
/// The state buffer is exclusively owned by the block between apply calls;
/// it is laid out as `num_taps - 1` history samples followed by the current
/// block of input.
pub struct FirFilter<'a> {
    /// Taps in time-reversed order: {b[T-1], ..., b[1], b[0]}
    coefficients: &'a [f32],

    /// History plus current block, length num_taps + block_size - 1
    state: &'a mut [f32],

    /// Staging for the incoming block, length block_size
    scratch: &'a mut [f32],

    num_taps: usize,
    block_size: usize,
}

impl<'a> FirFilter<'a> {
    /// Bind buffers and zero the filter memory
    ///
    /// `state` must be `num_taps + block_size - 1` samples, `scratch` must be
    /// `block_size` samples.
    pub fn new(
        coefficients: &'a [f32],
        state: &'a mut [f32],
        scratch: &'a mut [f32],
        num_taps: usize,
        block_size: usize,
    ) -> Result<Self, DspError> {
        if num_taps == 0 {
            return Err(DspError::InvalidArgument("num_taps must be non-zero"));
        }
        if block_size == 0 {
            return Err(DspError::InvalidArgument("block_size must be non-zero"));
        }
        if coefficients.len() != num_taps {
            return Err(DspError::SizeMismatch {
                expected: num_taps,
                actual: coefficients.len(),
            });
        }
        let state_len = num_taps + block_size - 1;
        if state.len() != state_len {
            return Err(DspError::SizeMismatch {
                expected: state_len,
                actual: state.len(),
            });
        }
        if scratch.len() != block_size {
            return Err(DspError::SizeMismatch {
                expected: block_size,
                actual: scratch.len(),
            });
        }

        state.fill(0.0);

        Ok(Self {
            coefficients,
            state,
            scratch,
            num_taps,
            block_size,
        })
    }

    /// Filter exactly one block: `block_size` samples in, `block_size` out
    ///
    /// `y[n] = Σ b[k]·x[n−k]`, where x reaches back into the previous
    /// block's tail retained in the state buffer. Input is staged through
    /// scratch, so a caller may alternate one pair of buffers freely.
    pub fn apply(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(input.len(), self.block_size);
        debug_assert_eq!(output.len(), self.block_size);

        self.scratch.copy_from_slice(input);
        self.convolve_scratch(output);
    }

    /// Filter one block in place
    pub fn apply_inplace(&mut self, buf: &mut [f32]) {
        debug_assert_eq!(buf.len(), self.block_size);

        self.scratch.copy_from_slice(buf);
        self.convolve_scratch(buf);
    }

    /// Clear the filter memory, as after a signal discontinuity
    pub fn reset(&mut self) {
        self.state.fill(0.0);
    }

    fn convolve_scratch(&mut self, output: &mut [f32]) {
        let taps = self.num_taps;

        // Append the new block after the retained history
        self.state[taps - 1..].copy_from_slice(self.scratch);

        for (n, y) in output.iter_mut().enumerate() {
            let history = &self.state[n..n + taps];
            *y = self
                .coefficients
                .iter()
                .zip(history.iter())
                .map(|(&c, &x)| c * x)
                .sum();
        }

        // Retain the newest num_taps - 1 samples for the next block
        self.state.copy_within(self.block_size.., 0);
    }

    /// Number of filter taps T
    pub fn num_taps(&self) -> usize {
        self.num_taps
    }

    /// Samples consumed and produced per apply call
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// The time-reversed coefficient sequence
    pub fn coefficients(&self) -> &[f32] {
        self.coefficients
    }

    /// Group delay in samples for a linear-phase (symmetric) tap set
    pub fn group_delay_samples(&self) -> f32 {
        (self.num_taps - 1) as f32 / 2.0
    }
}
