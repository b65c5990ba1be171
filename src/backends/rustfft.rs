//! Adapter for the `rustfft` crate.
//!
//! rustfft only offers complex transforms, so the signal is zero-extended
//! into the imaginary parts and the full spectrum is truncated to its
//! non-redundant half afterwards. Arbitrary lengths.

use std::sync::Arc;

use num_complex::Complex32;
use rustfft::{Fft, FftPlanner};

use crate::backend::{FftBackend, FftPlan, Strategy};
use crate::error::BackendError;
use crate::signal::Signal;
use crate::spectrum::Spectrum;

#[derive(Debug)]
pub struct RustFftBackend;

struct PlannedRustFft {
    fft: Arc<dyn Fft<f32>>,
    buffer: Vec<Complex32>,
}

impl FftBackend for RustFftBackend {
    fn name(&self) -> &'static str {
        "rustfft"
    }

    fn validate_size(&self, n: usize) -> Result<(), BackendError> {
        if n < 2 {
            return Err(BackendError::InvalidSize {
                size: n,
                next_valid: 2,
                next_pow2: 2,
            });
        }
        Ok(())
    }

    fn plan(&self, n: usize, _strategy: Strategy) -> Result<Box<dyn FftPlan>, BackendError> {
        self.validate_size(n)?;
        let mut planner = FftPlanner::<f32>::new();
        let fft = planner.plan_fft_forward(n);
        Ok(Box::new(PlannedRustFft {
            fft,
            buffer: vec![Complex32::new(0.0, 0.0); n],
        }))
    }
}

impl FftPlan for PlannedRustFft {
    fn execute(&mut self, signal: &Signal) -> Result<Spectrum, BackendError> {
        if signal.len() != self.buffer.len() {
            return Err(BackendError::Backend(format!(
                "planned for {} samples, got {}",
                self.buffer.len(),
                signal.len()
            )));
        }
        for (slot, &sample) in self.buffer.iter_mut().zip(signal.samples()) {
            *slot = Complex32::new(sample, 0.0);
        }
        self.fft.process(&mut self.buffer);
        Ok(Spectrum::from_full(&self.buffer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_to_the_half_spectrum() {
        let signal = Signal::random(64, 1);
        let spectrum = RustFftBackend
            .transform(&signal, Strategy::Heuristic)
            .unwrap();
        assert_eq!(spectrum.len(), 33);
    }

    #[test]
    fn dc_bin_is_the_sample_sum() {
        let signal = Signal::from_samples(vec![1.0; 16]);
        let spectrum = RustFftBackend
            .transform(&signal, Strategy::Heuristic)
            .unwrap();
        assert!((spectrum.bins()[0].re - 16.0).abs() < 1e-4);
        assert!(spectrum.bins()[0].im.abs() < 1e-4);
    }
}
