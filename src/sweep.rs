//! The benchmark matrix.
//!
//! Sizes form a geometric progression (evenly spaced power-of-two
//! exponents) because FFT cost and cache behaviour change by orders of
//! magnitude across the range. Each size gets exactly one seeded input
//! signal, shared read-only by every trial at that size, and trials are
//! registered backend-major within each size so an interrupted sweep still
//! yields complete comparisons for every size it reached.

use crate::backend::{Registry, Trial};
use crate::signal::Signal;

/// Default sweep bounds: 2^8 = 256 through 2^24 = 16.7M samples.
pub const DEFAULT_MIN_EXP: u32 = 8;
pub const DEFAULT_MAX_EXP: u32 = 24;

/// Sizes above this exponent are labeled for millisecond-scale reporting.
pub const MILLIS_EXP_THRESHOLD: u32 = 16;

/// Base seed mixed into every per-size signal seed.
pub const BASE_SEED: u64 = 42;

/// Advisory display unit for the external trial runner; not a behavioural
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Micros,
    Millis,
}

/// One size of the sweep, with its reporting hint and signal seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepPoint {
    pub size: usize,
    pub unit: TimeUnit,
}

impl SweepPoint {
    pub fn new(exponent: u32) -> Self {
        SweepPoint {
            size: 1usize << exponent,
            unit: if exponent > MILLIS_EXP_THRESHOLD {
                TimeUnit::Millis
            } else {
                TimeUnit::Micros
            },
        }
    }

    /// Deterministic per-size seed, so re-runs see identical inputs.
    pub fn seed(&self) -> u64 {
        BASE_SEED ^ self.size as u64
    }

    /// The one input signal shared by every trial at this size.
    pub fn signal(&self) -> Signal {
        Signal::random(self.size, self.seed())
    }
}

/// Inclusive exponent range of sweep sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sweep {
    pub min_exp: u32,
    pub max_exp: u32,
}

impl Default for Sweep {
    fn default() -> Self {
        Sweep {
            min_exp: DEFAULT_MIN_EXP,
            max_exp: DEFAULT_MAX_EXP,
        }
    }
}

impl Sweep {
    pub fn new(min_exp: u32, max_exp: u32) -> Self {
        Sweep { min_exp, max_exp }
    }

    /// Default bounds, overridable through `FFTBENCH_MIN_EXP` and
    /// `FFTBENCH_MAX_EXP` for shortened local runs.
    pub fn from_env() -> Self {
        let mut sweep = Sweep::default();
        if let Some(exp) = exp_from_env("FFTBENCH_MIN_EXP") {
            sweep.min_exp = exp;
        }
        if let Some(exp) = exp_from_env("FFTBENCH_MAX_EXP") {
            sweep.max_exp = exp;
        }
        sweep
    }

    pub fn points(&self) -> impl Iterator<Item = SweepPoint> {
        (self.min_exp..=self.max_exp).map(SweepPoint::new)
    }

    /// The full benchmark matrix: for every size, the backend-major trial
    /// cross product, with trials the backend cannot run at that size
    /// filtered out (and logged).
    pub fn matrix<'a>(&self, registry: &'a Registry) -> Vec<(SweepPoint, Vec<Trial<'a>>)> {
        self.points()
            .map(|point| {
                let trials = registry
                    .trials()
                    .filter(|trial| match trial.backend.validate_size(point.size) {
                        Ok(()) => true,
                        Err(err) => {
                            log::debug!(
                                "{}: skipped at n = {}: {err}",
                                trial.label(),
                                point.size
                            );
                            false
                        }
                    })
                    .collect();
                (point, trials)
            })
            .collect()
    }
}

fn exp_from_env(key: &str) -> Option<u32> {
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(exp) => Some(exp),
        Err(_) => {
            log::warn!("ignoring {key}={raw}: not an integer exponent");
            None
        }
    }
}
