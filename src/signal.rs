//! Real-valued input signals.
//!
//! A [`Signal`] is generated once per sweep size and shared read-only across
//! every backend evaluated at that size, so all trials see bit-identical
//! input. Backends that mutate their input (most do) must copy it into their
//! own buffers first.

use rand::prelude::*;

/// An immutable sequence of real samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    samples: Vec<f32>,
}

impl Signal {
    /// Generate `len` uniform samples in `[0, 1)` from a seeded generator.
    /// The same `(len, seed)` pair always produces the same signal.
    pub fn random(len: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Signal {
            samples: (0..len).map(|_| rng.gen::<f32>()).collect(),
        }
    }

    /// Wrap caller-provided samples.
    pub fn from_samples(samples: Vec<f32>) -> Self {
        Signal { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }
}
