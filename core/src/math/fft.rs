use num_complex::Complex64;
use rustfft::{num_traits::Zero, Fft, FftPlanner};
use std::sync::Arc;

/// Helper that wraps the `rustfft` planner for a fixed transform length.
pub struct FftHelper {
    size: usize,
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
    scratch: Vec<Complex64>,
}

impl FftHelper {
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let forward = planner.plan_fft_forward(size);
        let inverse = planner.plan_fft_inverse(size);
        let scratch_len = forward
            .get_inplace_scratch_len()
            .max(inverse.get_inplace_scratch_len());
        let scratch = vec![Complex64::zero(); scratch_len];
        Self {
            size,
            forward,
            inverse,
            scratch,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Unnormalized forward DFT. Input is zero-padded or truncated to the plan length.
    pub fn forward(&mut self, input: &[Complex64]) -> Vec<Complex64> {
        let mut buffer = self.prepare(input);
        if self.size > 0 {
            self.forward
                .process_with_scratch(&mut buffer, &mut self.scratch);
        }
        buffer
    }

    /// Inverse DFT scaled by `1/n`, so `inverse(forward(x))` reproduces `x`.
    pub fn inverse(&mut self, input: &[Complex64]) -> Vec<Complex64> {
        let mut buffer = self.prepare(input);
        if self.size > 0 {
            self.inverse
                .process_with_scratch(&mut buffer, &mut self.scratch);
            let scale = 1.0 / self.size as f64;
            buffer.iter_mut().for_each(|value| *value *= scale);
        }
        buffer
    }

    fn prepare(&self, input: &[Complex64]) -> Vec<Complex64> {
        let mut buffer: Vec<Complex64> = input.iter().take(self.size).copied().collect();
        buffer.resize(self.size, Complex64::zero());
        buffer
    }
}
