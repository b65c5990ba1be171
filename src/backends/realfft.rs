//! Adapter for the `realfft` crate.
//!
//! realfft computes the real-to-complex transform natively and returns
//! exactly the non-redundant half spectrum, so this adapter needs no layout
//! conversion. It supports arbitrary lengths and serves as the default
//! reference backend.

use std::sync::Arc;

use num_complex::Complex32;
use realfft::{RealFftPlanner, RealToComplex};

use crate::backend::{FftBackend, FftPlan, Strategy};
use crate::error::BackendError;
use crate::signal::Signal;
use crate::spectrum::Spectrum;

#[derive(Debug)]
pub struct RealFftBackend;

struct PlannedRealFft {
    fft: Arc<dyn RealToComplex<f32>>,
    input: Vec<f32>,
    output: Vec<Complex32>,
}

impl FftBackend for RealFftBackend {
    fn name(&self) -> &'static str {
        "realfft"
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
        let mut planner = RealFftPlanner::<f32>::new();
        let fft = planner.plan_fft_forward(n);
        let input = fft.make_input_vec();
        let output = fft.make_output_vec();
        Ok(Box::new(PlannedRealFft { fft, input, output }))
    }
}

impl FftPlan for PlannedRealFft {
    fn execute(&mut self, signal: &Signal) -> Result<Spectrum, BackendError> {
        if signal.len() != self.input.len() {
            return Err(BackendError::Backend(format!(
                "planned for {} samples, got {}",
                self.input.len(),
                signal.len()
            )));
        }
        self.input.copy_from_slice(signal.samples());
        self.fft
            .process(&mut self.input, &mut self.output)
            .map_err(|e| BackendError::Backend(e.to_string()))?;
        Ok(Spectrum::from_bins(self.output.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_the_half_spectrum() {
        let signal = Signal::random(100, 1);
        let spectrum = RealFftBackend
            .transform(&signal, Strategy::Heuristic)
            .unwrap();
        assert_eq!(spectrum.len(), 51);
    }

    #[test]
    fn odd_lengths_are_supported() {
        let signal = Signal::random(33, 1);
        let spectrum = RealFftBackend
            .transform(&signal, Strategy::Heuristic)
            .unwrap();
        assert_eq!(spectrum.len(), 17);
    }

    #[test]
    fn rejects_degenerate_lengths() {
        assert!(matches!(
            RealFftBackend.validate_size(1),
            Err(BackendError::InvalidSize { .. })
        ));
    }
}
