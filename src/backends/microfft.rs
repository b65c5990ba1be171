//! Adapter for the `microfft` crate.
//!
//! microfft compiles a fixed transform per power-of-two length, up to
//! [`MAX_LEN`], and returns only `n/2` bins: the purely real Nyquist
//! coefficient is packed into the imaginary slot of the DC bin. The adapter
//! flattens that into the packed scalar layout and lets
//! [`Spectrum::from_packed`] restore the canonical `n/2 + 1` bins.

use crate::backend::{FftBackend, FftPlan, Strategy};
use crate::error::BackendError;
use crate::signal::Signal;
use crate::spectrum::Spectrum;

/// Largest transform length compiled into microfft.
pub const MAX_LEN: usize = 32768;
/// Smallest supported transform length.
pub const MIN_LEN: usize = 2;

#[derive(Debug)]
pub struct MicroFftBackend;

struct PlannedMicroFft {
    buffer: Vec<f32>,
    packed: Vec<f32>,
}

impl MicroFftBackend {
    fn invalid_size(n: usize) -> BackendError {
        BackendError::InvalidSize {
            size: n,
            next_valid: n.next_power_of_two().clamp(MIN_LEN, MAX_LEN),
            next_pow2: n.next_power_of_two().max(MIN_LEN),
        }
    }
}

impl FftBackend for MicroFftBackend {
    fn name(&self) -> &'static str {
        "microfft"
    }

    fn validate_size(&self, n: usize) -> Result<(), BackendError> {
        if !n.is_power_of_two() || !(MIN_LEN..=MAX_LEN).contains(&n) {
            return Err(Self::invalid_size(n));
        }
        Ok(())
    }

    fn plan(&self, n: usize, _strategy: Strategy) -> Result<Box<dyn FftPlan>, BackendError> {
        self.validate_size(n)?;
        Ok(Box::new(PlannedMicroFft {
            buffer: vec![0.0; n],
            packed: Vec::with_capacity(n),
        }))
    }
}

impl FftPlan for PlannedMicroFft {
    fn execute(&mut self, signal: &Signal) -> Result<Spectrum, BackendError> {
        if signal.len() != self.buffer.len() {
            return Err(BackendError::Backend(format!(
                "planned for {} samples, got {}",
                self.buffer.len(),
                signal.len()
            )));
        }
        self.buffer.copy_from_slice(signal.samples());
        self.packed.clear();
        dispatch(&mut self.buffer, &mut self.packed)?;
        Ok(Spectrum::from_packed(&self.packed))
    }
}

/// Run the fixed-size transform matching `buffer.len()` and flatten the
/// result into `packed` as `[re0, nyq, re1, im1, ..]`.
fn dispatch(buffer: &mut [f32], packed: &mut Vec<f32>) -> Result<(), BackendError> {
    macro_rules! run {
        ($len:literal, $func:ident) => {{
            let samples: &mut [f32; $len] = buffer
                .try_into()
                .map_err(|_| BackendError::Backend("buffer length mismatch".into()))?;
            for bin in microfft::real::$func(samples).iter() {
                packed.push(bin.re);
                packed.push(bin.im);
            }
            Ok(())
        }};
    }
    match buffer.len() {
        2 => run!(2, rfft_2),
        4 => run!(4, rfft_4),
        8 => run!(8, rfft_8),
        16 => run!(16, rfft_16),
        32 => run!(32, rfft_32),
        64 => run!(64, rfft_64),
        128 => run!(128, rfft_128),
        256 => run!(256, rfft_256),
        512 => run!(512, rfft_512),
        1024 => run!(1024, rfft_1024),
        2048 => run!(2048, rfft_2048),
        4096 => run!(4096, rfft_4096),
        8192 => run!(8192, rfft_8192),
        16384 => run!(16384, rfft_16384),
        32768 => run!(32768, rfft_32768),
        n => Err(MicroFftBackend::invalid_size(n)),
    }
}
