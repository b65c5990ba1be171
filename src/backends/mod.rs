//! Backend adapters. Each module owns the full lifecycle of one library's
//! buffers and plan objects; all backend-specific layout knowledge stays
//! inside the adapter that produced it.

pub mod kofft;
pub mod microfft;
pub mod realfft;
pub mod rustfft;

#[cfg(feature = "fftw")]
pub mod fftw;
