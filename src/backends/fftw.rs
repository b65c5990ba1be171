//! Adapter for FFTW via the `fftw` bindings.
//!
//! The only backend with real planner rigors: the planning strategy maps
//! onto FFTW's estimate/measure/patient flags. Buffers come from the
//! library's aligned allocator and the native plan is destroyed when the
//! [`FftPlan`] drops, so no native resources outlive a call.

use fftw::array::AlignedVec;
use fftw::plan::{R2CPlan, R2CPlan32};
use fftw::types::{c32, Flag};
use num_complex::Complex32;

use crate::backend::{FftBackend, FftPlan, Strategy};
use crate::error::BackendError;
use crate::signal::Signal;
use crate::spectrum::Spectrum;

#[derive(Debug)]
pub struct FftwBackend;

impl FftwBackend {
    /// One-time availability probe run at registry detection. A failure
    /// here marks the backend unusable for the whole run.
    pub fn probe() -> Result<Self, BackendError> {
        let _: R2CPlan32 = R2CPlan::aligned(&[16], Flag::ESTIMATE)
            .map_err(|e| BackendError::Init(e.to_string()))?;
        Ok(FftwBackend)
    }

    fn flag(strategy: Strategy) -> Flag {
        let rigor = match strategy {
            Strategy::Heuristic => Flag::ESTIMATE,
            Strategy::Measured => Flag::MEASURE,
            Strategy::Exhaustive => Flag::PATIENT,
        };
        rigor | Flag::DESTROYINPUT
    }
}

struct PlannedFftw {
    plan: R2CPlan32,
    input: AlignedVec<f32>,
    output: AlignedVec<c32>,
}

impl FftBackend for FftwBackend {
    fn name(&self) -> &'static str {
        "fftw"
    }

    fn strategies(&self) -> &'static [Strategy] {
        &[Strategy::Heuristic, Strategy::Measured, Strategy::Exhaustive]
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

    fn plan(&self, n: usize, strategy: Strategy) -> Result<Box<dyn FftPlan>, BackendError> {
        self.validate_size(n)?;
        let plan: R2CPlan32 = R2CPlan::aligned(&[n], Self::flag(strategy))
            .map_err(|e| BackendError::Backend(e.to_string()))?;
        Ok(Box::new(PlannedFftw {
            plan,
            input: AlignedVec::new(n),
            output: AlignedVec::new(n / 2 + 1),
        }))
    }
}

impl FftPlan for PlannedFftw {
    fn execute(&mut self, signal: &Signal) -> Result<Spectrum, BackendError> {
        if signal.len() != self.input.len() {
            return Err(BackendError::Backend(format!(
                "planned for {} samples, got {}",
                self.input.len(),
                signal.len()
            )));
        }
        self.input.copy_from_slice(signal.samples());
        self.plan
            .r2c(&mut self.input, &mut self.output)
            .map_err(|e| BackendError::Backend(e.to_string()))?;
        Ok(Spectrum::from_bins(
            self.output
                .iter()
                .map(|bin| Complex32::new(bin.re, bin.im))
                .collect(),
        ))
    }
}
