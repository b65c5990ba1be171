//! Error taxonomy, split into two channels: recoverable backend/size errors
//! that skip a single trial, and fatal validation-setup errors that abort
//! the run.

use core::fmt;

/// Errors scoped to one backend at one size. These never abort a sweep; the
/// affected trial is reported and skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The requested transform length is outside the backend's supported
    /// factorization set. Carries the nearest length the backend does
    /// support and the next power of two.
    InvalidSize {
        size: usize,
        next_valid: usize,
        next_pow2: usize,
    },
    /// One-time backend setup failed; the backend is unusable for the
    /// remainder of the run.
    Init(String),
    /// The backend library reported a failure while executing a transform.
    Backend(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize {
                size,
                next_valid,
                next_pow2,
            } => write!(
                f,
                "transform length {size} is not decomposable into supported factors; \
                 next valid transform size is: {next_valid}; next power of 2 is: {next_pow2}"
            ),
            Self::Init(msg) => write!(f, "backend initialization failed: {msg}"),
            Self::Backend(msg) => write!(f, "backend execution failed: {msg}"),
        }
    }
}

impl std::error::Error for BackendError {}

/// Fatal conditions while establishing the validation baseline. Unlike
/// [`BackendError`], these abort the whole validation pass: without a
/// trustworthy reference no comparison is meaningful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidateError {
    /// The registry holds no backend that could serve as the reference.
    NoReferenceBackend,
    /// The designated reference backend failed to produce a spectrum.
    ReferenceFailed(BackendError),
    /// The reference spectrum is entirely zero, so it cannot anchor any
    /// comparison.
    DegenerateReference,
}

impl fmt::Display for ValidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoReferenceBackend => "no backend available to serve as reference".fmt(f),
            Self::ReferenceFailed(err) => write!(f, "reference backend failed: {err}"),
            Self::DegenerateReference => "invalid reference FFT: spectrum is entirely zero".fmt(f),
        }
    }
}

impl std::error::Error for ValidateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReferenceFailed(err) => Some(err),
            _ => None,
        }
    }
}
