//! # fftbench - cross-validation and benchmarking of real-input FFT backends
//!
//! Several independent libraries compute the same real-to-complex transform,
//! each returning its result in a different physical layout (half spectra,
//! full complex spectra, Nyquist-packed bins, aligned native buffers) and
//! with different planner designs. This crate maps every backend's output
//! into one canonical half-spectrum representation, checks all backends
//! against a designated reference with a shift-tolerant comparison, and
//! registers a reproducible geometric size sweep with criterion for timing.
//!
//! ## Backends
//!
//! | Adapter    | Crate      | Native layout                     | Sizes            |
//! |------------|------------|-----------------------------------|------------------|
//! | `realfft`  | realfft    | half spectrum, n/2+1 bins         | any n >= 2       |
//! | `rustfft`  | rustfft    | full n-bin complex spectrum       | any n >= 2       |
//! | `kofft`    | kofft      | half spectrum of kofft complexes  | even n           |
//! | `microfft` | microfft   | Nyquist packed into the DC bin    | 2^k, up to 32768 |
//! | `fftw`     | fftw (opt) | aligned half spectrum             | any n >= 2       |
//!
//! The `fftw` adapter links the native FFTW library and is gated behind the
//! `fftw` cargo feature; it is the only backend with real planner rigors
//! (estimate/measure/patient).
//!
//! ## Quick start
//!
//! ```no_run
//! use fftbench::{validate, Checker, Registry, Signal};
//!
//! let registry = Registry::detect();
//! let signal = Signal::random(1024, 42);
//! for report in validate(&registry, &signal, &Checker::default()).unwrap() {
//!     println!("{report}");
//! }
//! ```
//!
//! The harness is single-threaded and sequential: backends are invoked one
//! at a time with no internal worker pools enabled, so timing comparisons
//! stay uncontended and validation stays deterministic.
//!
//! ## License
//!
//! Licensed under either of Apache License, Version 2.0 or MIT license, at
//! your option.

/// Backend adapter seam: planning strategies, the adapter trait and the
/// capability registry assembled at startup.
pub mod backend;
/// One adapter per backend library.
pub mod backends;
pub mod error;
/// Immutable real input signals with seeded generation.
pub mod signal;
/// Canonical half-spectrum representation and backend layout conversions.
pub mod spectrum;
/// Deterministic benchmark matrix: size sweep and trial cross product.
pub mod sweep;
/// Shift-tolerant comparison of canonical spectra against a reference.
pub mod validate;

pub use backend::{FftBackend, FftPlan, Registry, Strategy, Trial};
pub use error::{BackendError, ValidateError};
pub use signal::Signal;
pub use spectrum::Spectrum;
pub use sweep::{Sweep, SweepPoint, TimeUnit};
pub use validate::{validate, validate_all, Checker, Comparison, Outcome};
