//! Comparison of canonical spectra against a designated reference.
//!
//! Floating-point FFT implementations legitimately disagree near the
//! spectrum edges and can order boundary bins one position apart. The
//! comparison here is therefore guard-banded and shift-tolerant: boundary
//! bins are excluded, and each interior candidate bin is matched against
//! the reference bin and both of its neighbours, keeping the smallest of
//! the three deviations. An index-exact check would flag correct
//! implementations that differ only in edge ordering as divergent.

use core::fmt;

use num_complex::Complex32;

use crate::backend::{FftBackend, Registry};
use crate::error::{BackendError, ValidateError};
use crate::signal::Signal;
use crate::spectrum::Spectrum;

/// Spectra may differ in length by this many bins before the comparison is
/// abandoned as a packing error.
const SIZE_SLACK: usize = 2;

/// Comparison parameters. The tolerance is an absolute bound on the
/// per-bin deviation, tuned empirically for single-precision transforms;
/// tighten it when every backend in the run is double-precision.
#[derive(Debug, Clone)]
pub struct Checker {
    /// Maximum accepted interior-bin deviation.
    pub tolerance: f64,
    /// Bins excluded from comparison at each end of the spectrum.
    pub guard: usize,
    /// Spectra no longer than this are attached to failure reports.
    pub print_limit: usize,
}

impl Default for Checker {
    fn default() -> Self {
        Checker {
            tolerance: 1e-3,
            guard: 2,
            print_limit: 128,
        }
    }
}

/// How one candidate spectrum fared against the reference.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Pass {
        max_deviation: f64,
    },
    /// Deviation beyond tolerance; both spectra are attached when they are
    /// small enough to print.
    ToleranceExceeded {
        max_deviation: f64,
        spectra: Option<Box<(Spectrum, Spectrum)>>,
    },
    /// Lengths differ by more than the allowed slack: the backend returned
    /// a grossly wrong packing.
    SizeMismatch {
        expected: usize,
        actual: usize,
    },
    /// The backend could not run this trial at all.
    Skipped(BackendError),
}

/// Result of validating one trial, ready for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub label: String,
    pub outcome: Outcome,
}

impl Comparison {
    pub fn skipped(label: String, err: BackendError) -> Self {
        Comparison {
            label,
            outcome: Outcome::Skipped(err),
        }
    }

    pub fn passed(&self) -> bool {
        matches!(self.outcome, Outcome::Pass { .. })
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Pass { max_deviation } => {
                write!(f, "Checking {} ... OK, maxdiff: {max_deviation:.2e}", self.label)
            }
            Outcome::ToleranceExceeded {
                max_deviation,
                spectra,
            } => {
                write!(
                    f,
                    "Checking {} ... NOK, maxdiff: {max_deviation:.2e}",
                    self.label
                )?;
                if let Some(pair) = spectra {
                    write!(f, "\nReference: {}\n{}: {}", pair.0, self.label, pair.1)?;
                }
                Ok(())
            }
            Outcome::SizeMismatch { expected, actual } => write!(
                f,
                "Checking {} ... NOK, size differs: {actual} != {expected}",
                self.label
            ),
            Outcome::Skipped(err) => {
                write!(f, "Checking {} ... skipped: {err}", self.label)
            }
        }
    }
}

fn bin_distance(a: Complex32, b: Complex32) -> f64 {
    let re = f64::from(a.re) - f64::from(b.re);
    let im = f64::from(a.im) - f64::from(b.im);
    (re * re + im * im).sqrt()
}

impl Checker {
    /// Largest shift-tolerant deviation over the interior bins.
    pub fn max_deviation(&self, reference: &Spectrum, candidate: &Spectrum) -> f64 {
        let rbins = reference.bins();
        let cbins = candidate.bins();
        let shared = rbins.len().min(cbins.len());
        let mut maxdiff = 0.0f64;
        for i in self.guard..shared.saturating_sub(self.guard) {
            let bin = cbins[i];
            let mut diff = bin_distance(bin, rbins[i]);
            if i > 0 {
                diff = diff.min(bin_distance(bin, rbins[i - 1]));
            }
            if i + 1 < rbins.len() {
                diff = diff.min(bin_distance(bin, rbins[i + 1]));
            }
            maxdiff = maxdiff.max(diff);
        }
        maxdiff
    }

    /// Compare one candidate against the reference.
    pub fn compare(&self, label: &str, reference: &Spectrum, candidate: &Spectrum) -> Comparison {
        if reference.len().abs_diff(candidate.len()) > SIZE_SLACK {
            return Comparison {
                label: label.to_string(),
                outcome: Outcome::SizeMismatch {
                    expected: reference.len(),
                    actual: candidate.len(),
                },
            };
        }
        let max_deviation = self.max_deviation(reference, candidate);
        let outcome = if max_deviation <= self.tolerance {
            Outcome::Pass { max_deviation }
        } else {
            let printable = reference.len().max(candidate.len()) <= self.print_limit;
            Outcome::ToleranceExceeded {
                max_deviation,
                spectra: printable.then(|| Box::new((reference.clone(), candidate.clone()))),
            }
        };
        Comparison {
            label: label.to_string(),
            outcome,
        }
    }
}

/// Run every trial of the registry against `reference_backend`'s output
/// and report each one. The reference is produced with the backend's most
/// exhaustive strategy; a degenerate (all-zero) reference aborts the pass,
/// while per-trial failures are reported and skipped.
pub fn validate_all(
    registry: &Registry,
    reference_backend: &dyn FftBackend,
    signal: &Signal,
    checker: &Checker,
) -> Result<Vec<Comparison>, ValidateError> {
    let strategy = reference_backend
        .strategies()
        .last()
        .copied()
        .unwrap_or_default();
    log::debug!(
        "reference: {} ({strategy}) at n = {}",
        reference_backend.name(),
        signal.len()
    );
    let reference = reference_backend
        .transform(signal, strategy)
        .map_err(ValidateError::ReferenceFailed)?;
    if reference.is_zero() {
        return Err(ValidateError::DegenerateReference);
    }

    let mut reports = Vec::new();
    for trial in registry.trials() {
        let label = trial.label();
        let report = match trial.backend.transform(signal, trial.strategy) {
            Ok(candidate) => checker.compare(&label, &reference, &candidate),
            Err(err) => {
                log::warn!("{label}: skipped at n = {}: {err}", signal.len());
                Comparison::skipped(label, err)
            }
        };
        reports.push(report);
    }
    Ok(reports)
}

/// [`validate_all`] with the registry's default reference backend.
pub fn validate(
    registry: &Registry,
    signal: &Signal,
    checker: &Checker,
) -> Result<Vec<Comparison>, ValidateError> {
    let reference = registry
        .reference()
        .ok_or(ValidateError::NoReferenceBackend)?;
    validate_all(registry, reference, signal, checker)
}
