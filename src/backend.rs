//! The adapter seam between the harness and the backend libraries.
//!
//! Core logic (validation, sweep) is written against [`FftBackend`] only;
//! the concrete adapter set is assembled once at startup by
//! [`Registry::detect`] from whatever backends were compiled in.

use core::fmt;

use crate::backends;
use crate::error::BackendError;
use crate::signal::Signal;
use crate::spectrum::Spectrum;

/// How much work a backend's planner may invest before the transform runs.
/// The choice affects preparation cost only: for a given backend and input,
/// every strategy must converge to the same canonical spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Fast heuristic plan selection.
    #[default]
    Heuristic,
    /// Time-budgeted measurement of candidate plans.
    Measured,
    /// Exhaustive plan search.
    Exhaustive,
}

impl Strategy {
    pub fn tag(self) -> &'static str {
        match self {
            Strategy::Heuristic => "heuristic",
            Strategy::Measured => "measured",
            Strategy::Exhaustive => "exhaustive",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tag().fmt(f)
    }
}

/// One backend library, adapted to the harness contract: given a real
/// signal of length `n`, produce a canonical spectrum of `n/2 + 1` bins,
/// or fail with a [`BackendError`].
pub trait FftBackend {
    /// Stable backend name used in trial labels and reports.
    fn name(&self) -> &'static str;

    /// Supported planning strategies, ordered cheapest first. Adapters
    /// without planner rigors expose the heuristic strategy only and
    /// ignore the hint in [`FftBackend::plan`].
    fn strategies(&self) -> &'static [Strategy] {
        &[Strategy::Heuristic]
    }

    /// Check `n` against the backend's factorization constraints without
    /// doing any work. Errors carry the nearest supported length.
    fn validate_size(&self, n: usize) -> Result<(), BackendError>;

    /// Build a prepared transform for length `n`. The plan owns every
    /// backend buffer and plan object it needs; all of it is released when
    /// the plan is dropped. Nothing is cached across plans.
    fn plan(&self, n: usize, strategy: Strategy) -> Result<Box<dyn FftPlan>, BackendError>;

    /// Plan and execute in one step. Used by the validator, where
    /// preparation cost is irrelevant.
    fn transform(&self, signal: &Signal, strategy: Strategy) -> Result<Spectrum, BackendError> {
        let mut plan = self.plan(signal.len(), strategy)?;
        plan.execute(signal)
    }
}

/// A prepared transform, ready to run repeatedly against signals of the
/// planned length. Execution copies the signal into plan-owned buffers;
/// the signal itself is never mutated.
pub trait FftPlan {
    fn execute(&mut self, signal: &Signal) -> Result<Spectrum, BackendError>;
}

/// One (backend, strategy) combination of the benchmark matrix.
#[derive(Clone, Copy)]
pub struct Trial<'a> {
    pub backend: &'a dyn FftBackend,
    pub strategy: Strategy,
}

impl Trial<'_> {
    /// `name` for single-strategy backends, `name/strategy` otherwise.
    pub fn label(&self) -> String {
        if self.backend.strategies().len() > 1 {
            format!("{}/{}", self.backend.name(), self.strategy)
        } else {
            self.backend.name().to_string()
        }
    }
}

/// The set of backend adapters available in this build, assembled once at
/// startup. Backends whose one-time setup fails are excluded here and
/// reported, rather than failing trial by trial later.
pub struct Registry {
    backends: Vec<Box<dyn FftBackend>>,
}

impl Registry {
    /// Probe and collect every compiled-in backend. The first entry doubles
    /// as the default reference backend, so the arbitrary-length adapters
    /// come first.
    pub fn detect() -> Self {
        let mut backends: Vec<Box<dyn FftBackend>> = Vec::new();

        #[cfg(feature = "fftw")]
        match backends::fftw::FftwBackend::probe() {
            Ok(backend) => backends.push(Box::new(backend)),
            Err(err) => log::error!("fftw backend unavailable: {err}"),
        }

        backends.push(Box::new(backends::realfft::RealFftBackend));
        backends.push(Box::new(backends::rustfft::RustFftBackend));
        backends.push(Box::new(backends::kofft::KofftBackend));
        backends.push(Box::new(backends::microfft::MicroFftBackend));

        log::debug!(
            "detected backends: {}",
            backends
                .iter()
                .map(|b| b.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Registry { backends }
    }

    pub fn backends(&self) -> impl Iterator<Item = &dyn FftBackend> {
        self.backends.iter().map(|b| b.as_ref())
    }

    pub fn len(&self) -> usize {
        self.backends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    /// Look a backend up by its stable name.
    pub fn get(&self, name: &str) -> Option<&dyn FftBackend> {
        self.backends().find(|b| b.name() == name)
    }

    /// The default reference backend: the first detected one, which the
    /// validator runs with its most exhaustive strategy.
    pub fn reference(&self) -> Option<&dyn FftBackend> {
        self.backends().next()
    }

    /// The (backend x strategy) cross product in backend-major order: all
    /// strategies of one backend before the next backend.
    pub fn trials(&self) -> impl Iterator<Item = Trial<'_>> {
        self.backends.iter().flat_map(|b| {
            let backend = b.as_ref();
            backend
                .strategies()
                .iter()
                .map(move |&strategy| Trial { backend, strategy })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_contains_the_pure_rust_backends() {
        let registry = Registry::detect();
        for name in ["realfft", "rustfft", "kofft", "microfft"] {
            assert!(registry.get(name).is_some(), "missing backend {name}");
        }
    }

    #[test]
    fn trials_are_backend_major() {
        let registry = Registry::detect();
        let labels: Vec<String> = registry.trials().map(|t| t.label()).collect();
        assert_eq!(labels.len(), registry.trials().count());
        // Each backend's trials form one contiguous run.
        let mut seen: Vec<&str> = Vec::new();
        for trial in registry.trials() {
            let name = trial.backend.name();
            match seen.last() {
                Some(&last) if last == name => {}
                _ => {
                    assert!(!seen.contains(&name), "{name} trials are not contiguous");
                    seen.push(name);
                }
            }
        }
    }

    #[test]
    fn single_strategy_labels_omit_the_tag() {
        let registry = Registry::detect();
        let trial = registry
            .trials()
            .find(|t| t.backend.name() == "realfft")
            .unwrap();
        assert_eq!(trial.label(), "realfft");
    }
}
