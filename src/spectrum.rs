//! The canonical spectral representation.
//!
//! Every backend returns its real-to-complex result in a different physical
//! layout: an already-halved complex vector, a full-length complex spectrum,
//! a flat buffer of interleaved scalars, or a half spectrum with the Nyquist
//! coefficient packed into the DC bin's imaginary slot. The constructors
//! here absorb all of that into one shape - exactly `n/2 + 1` interleaved
//! complex bins for an `n`-sample real input - so the validator and the
//! reports never see a backend-specific packing.

use core::fmt;

use num_complex::Complex32;

/// The non-redundant half of the DFT of a real signal: bins `0..=n/2`,
/// where bin 0 is the DC term and bin `n/2` the Nyquist term for even `n`.
/// Not mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    bins: Vec<Complex32>,
}

impl Spectrum {
    /// Adopt bins that are already in canonical order.
    pub fn from_bins(bins: Vec<Complex32>) -> Self {
        Spectrum { bins }
    }

    /// Truncate a full `n`-bin complex spectrum to its non-redundant half.
    /// The discarded upper bins are the Hermitian mirror of the kept ones.
    pub fn from_full(full: &[Complex32]) -> Self {
        let keep = full.len() / 2 + 1;
        Spectrum {
            bins: full[..keep.min(full.len())].to_vec(),
        }
    }

    /// Reinterpret a flat `[re0, im0, re1, im1, ..]` scalar buffer as
    /// complex bins. A trailing unpaired scalar is ignored.
    pub fn from_interleaved(buf: &[f32]) -> Self {
        Spectrum {
            bins: buf
                .chunks_exact(2)
                .map(|pair| Complex32::new(pair[0], pair[1]))
                .collect(),
        }
    }

    /// Unpack the `[re0, nyq, re1, im1, ..]` half-spectrum layout used by
    /// packed real FFTs, where the purely real DC and Nyquist coefficients
    /// share the first complex slot. `buf.len()` is the transform length
    /// `n` (even); the result has `n/2 + 1` bins.
    pub fn from_packed(buf: &[f32]) -> Self {
        if buf.len() < 2 {
            return Spectrum { bins: Vec::new() };
        }
        let mut bins = Vec::with_capacity(buf.len() / 2 + 1);
        bins.push(Complex32::new(buf[0], 0.0));
        bins.extend(
            buf[2..]
                .chunks_exact(2)
                .map(|pair| Complex32::new(pair[0], pair[1])),
        );
        bins.push(Complex32::new(buf[1], 0.0));
        Spectrum { bins }
    }

    /// Combine full-length split re/im arrays into the non-redundant half.
    /// Both slices carry the complete `n`-bin spectrum; only bins
    /// `0..=n/2` are kept.
    pub fn from_split(re: &[f32], im: &[f32]) -> Self {
        let keep = re.len() / 2 + 1;
        Spectrum {
            bins: re
                .iter()
                .zip(im)
                .take(keep)
                .map(|(&re, &im)| Complex32::new(re, im))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn bins(&self) -> &[Complex32] {
        &self.bins
    }

    /// True when every bin is exactly the zero complex value. A reference
    /// spectrum for which this holds is degenerate and must be rejected.
    pub fn is_zero(&self) -> bool {
        self.bins.iter().all(|bin| bin.re == 0.0 && bin.im == 0.0)
    }
}

impl fmt::Display for Spectrum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, bin) in self.bins.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.2}{:+.2}i", bin.re, bin.im)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleaved_pairs_become_bins() {
        let spectrum = Spectrum::from_interleaved(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(
            spectrum.bins(),
            &[Complex32::new(1.0, 2.0), Complex32::new(3.0, 4.0)]
        );
    }

    #[test]
    fn packed_layout_unpacks_dc_and_nyquist() {
        // n = 4: DC = 10, Nyquist = -2, bin 1 = 3 + 4i.
        let spectrum = Spectrum::from_packed(&[10.0, -2.0, 3.0, 4.0]);
        assert_eq!(
            spectrum.bins(),
            &[
                Complex32::new(10.0, 0.0),
                Complex32::new(3.0, 4.0),
                Complex32::new(-2.0, 0.0),
            ]
        );
    }

    #[test]
    fn full_spectrum_keeps_the_nonredundant_half() {
        let full: Vec<Complex32> = (0..8).map(|i| Complex32::new(i as f32, 0.0)).collect();
        let spectrum = Spectrum::from_full(&full);
        assert_eq!(spectrum.len(), 5);
        assert_eq!(spectrum.bins()[4], Complex32::new(4.0, 0.0));
    }

    #[test]
    fn split_arrays_are_truncated() {
        let re = [0.0, 1.0, 2.0, 3.0];
        let im = [4.0, 5.0, 6.0, 7.0];
        let spectrum = Spectrum::from_split(&re, &im);
        assert_eq!(spectrum.len(), 3);
        assert_eq!(spectrum.bins()[2], Complex32::new(2.0, 6.0));
    }

    #[test]
    fn zero_detection() {
        assert!(Spectrum::from_bins(vec![Complex32::new(0.0, 0.0); 4]).is_zero());
        assert!(!Spectrum::from_bins(vec![Complex32::new(0.0, 1e-9)]).is_zero());
    }

    #[test]
    fn display_is_bracketed_pairs() {
        let spectrum = Spectrum::from_bins(vec![Complex32::new(1.0, -0.5)]);
        assert_eq!(spectrum.to_string(), "[1.00-0.50i]");
    }
}
