//! Adapter for the `kofft` DSP library.
//!
//! kofft's real-input kernel packs sample pairs into a half-length complex
//! transform, so it requires an even length (arbitrary otherwise). The plan
//! holds the rfft planner with its twiddle tables plus caller-owned scratch,
//! mirroring how the library expects to be driven.

use kofft::fft::{Complex32 as KofftComplex, FftPlanner, ScalarFftImpl};
use kofft::rfft::RealFftImpl;
use num_complex::Complex32;

use crate::backend::{FftBackend, FftPlan, Strategy};
use crate::error::BackendError;
use crate::signal::Signal;
use crate::spectrum::Spectrum;

#[derive(Debug)]
pub struct KofftBackend;

struct PlannedKofft {
    fft: ScalarFftImpl<f32>,
    input: Vec<f32>,
    output: Vec<KofftComplex>,
    scratch: Vec<KofftComplex>,
}

impl FftBackend for KofftBackend {
    fn name(&self) -> &'static str {
        "kofft"
    }

    fn validate_size(&self, n: usize) -> Result<(), BackendError> {
        if n < 2 || n % 2 != 0 {
            return Err(BackendError::InvalidSize {
                size: n,
                next_valid: (n + 1).max(2) & !1,
                next_pow2: n.next_power_of_two().max(2),
            });
        }
        Ok(())
    }

    fn plan(&self, n: usize, _strategy: Strategy) -> Result<Box<dyn FftPlan>, BackendError> {
        self.validate_size(n)?;
        let fft = ScalarFftImpl::with_planner(FftPlanner::<f32>::new());
        Ok(Box::new(PlannedKofft {
            fft,
            input: vec![0.0; n],
            output: vec![KofftComplex::new(0.0, 0.0); n / 2 + 1],
            scratch: vec![KofftComplex::new(0.0, 0.0); n / 2],
        }))
    }
}

impl FftPlan for PlannedKofft {
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
            .rfft_with_scratch(&mut self.input, &mut self.output, &mut self.scratch)
            .map_err(|e| BackendError::Backend(format!("{e:?}")))?;
        Ok(Spectrum::from_bins(
            self.output
                .iter()
                .map(|bin| Complex32::new(bin.re, bin.im))
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_lengths_produce_the_half_spectrum() {
        let signal = Signal::random(128, 1);
        let spectrum = KofftBackend.transform(&signal, Strategy::Heuristic).unwrap();
        assert_eq!(spectrum.len(), 65);
    }

    #[test]
    fn odd_lengths_are_rejected_with_the_next_even_size() {
        match KofftBackend.validate_size(1001) {
            Err(BackendError::InvalidSize {
                next_valid,
                next_pow2,
                ..
            }) => {
                assert_eq!(next_valid, 1002);
                assert_eq!(next_pow2, 1024);
            }
            other => panic!("expected InvalidSize, got {other:?}"),
        }
    }

    #[test]
    fn non_power_of_two_even_lengths_work() {
        let signal = Signal::random(1000, 1);
        let spectrum = KofftBackend.transform(&signal, Strategy::Heuristic).unwrap();
        assert_eq!(spectrum.len(), 501);
    }
}
