//! Deduplication and minimizer parameters, validated at construction so no
//! partially-configured engine can exist.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

type Result<T> = std::result::Result<T, Error>;

/// Whether mate-swapped read pairs are considered potential duplicates.
///
/// Some library preparations can capture the two mates of a fragment in
/// either order; `Tolerant` additionally tests fwd-against-rev when deciding
/// equivalence, `Strict` never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Only fwd1/fwd2 and rev1/rev2 are compared
    Strict,
    /// Mate-swapped comparisons (fwd1/rev2, rev1/fwd2) are also allowed
    Tolerant,
}

impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "strict" => Ok(Orientation::Strict),
            "tolerant" => Ok(Orientation::Tolerant),
            other => Err(Error::UnknownOrientation(other.to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Strict => write!(f, "strict"),
            Orientation::Tolerant => write!(f, "tolerant"),
        }
    }
}

/// User-configurable deduplication tolerances.
#[derive(Debug, Clone)]
pub struct DedupParams {
    max_offset: usize,
    max_error_frac: f64,
    orientation: Orientation,
}

impl DedupParams {
    /// Creates validated deduplication parameters. `max_error_frac` must lie
    /// within `[0, 1]`; `max_offset` is the largest alignment shift, in
    /// bases, still considered when testing equivalence.
    pub fn new(max_offset: usize, max_error_frac: f64, orientation: Orientation) -> Result<Self> {
        // RangeInclusive::contains is false for NaN, which is also rejected
        if !(0.0..=1.0).contains(&max_error_frac) {
            return Err(Error::ErrorFracOutOfRange(max_error_frac));
        }
        Ok(Self {
            max_offset,
            max_error_frac,
            orientation,
        })
    }

    /// Maximum alignment shift in bases
    pub fn max_offset(&self) -> usize {
        self.max_offset
    }

    /// Maximum mismatch fraction (errors over overlap length)
    pub fn max_error_frac(&self) -> f64 {
        self.max_error_frac
    }

    /// Whether swapped mates are checked
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl Default for DedupParams {
    fn default() -> Self {
        Self {
            max_offset: 1,
            max_error_frac: 0.01,
            orientation: Orientation::Tolerant,
        }
    }
}

/// Minimizer window geometry (rarely needs changing).
///
/// Note that the default k-mer length of 7 only admits 4^7 (~16k) distinct
/// sequences; libraries with many more reads than that should use a longer
/// k-mer, e.g. `MinimizerParams::new(4, 25, 15)`.
#[derive(Debug, Clone)]
pub struct MinimizerParams {
    num_windows: usize,
    window_len: usize,
    kmer_len: usize,
}

impl MinimizerParams {
    /// Creates validated minimizer parameters. Fails if any value is zero or
    /// if `kmer_len` exceeds `window_len`; no partial value is ever returned.
    pub fn new(num_windows: usize, window_len: usize, kmer_len: usize) -> Result<Self> {
        if num_windows == 0 {
            return Err(Error::ZeroParam("num_windows"));
        }
        if window_len == 0 {
            return Err(Error::ZeroParam("window_len"));
        }
        if kmer_len == 0 {
            return Err(Error::ZeroParam("kmer_len"));
        }
        if kmer_len > window_len {
            return Err(Error::KmerLongerThanWindow(kmer_len, window_len));
        }
        Ok(Self {
            num_windows,
            window_len,
            kmer_len,
        })
    }

    /// Number of windows fingerprinted per read
    pub fn num_windows(&self) -> usize {
        self.num_windows
    }

    /// Base pairs per window
    pub fn window_len(&self) -> usize {
        self.window_len
    }

    /// K-mer size for minimizers
    pub fn kmer_len(&self) -> usize {
        self.kmer_len
    }
}

impl Default for MinimizerParams {
    fn default() -> Self {
        Self {
            num_windows: 3,
            window_len: 25,
            kmer_len: 7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_round_trips_through_strings() {
        assert_eq!("strict".parse::<Orientation>(), Ok(Orientation::Strict));
        assert_eq!("tolerant".parse::<Orientation>(), Ok(Orientation::Tolerant));
        assert_eq!(Orientation::Strict.to_string(), "strict");
        assert_eq!(Orientation::Tolerant.to_string(), "tolerant");
    }

    #[test]
    fn orientation_rejects_unknown_strings() {
        assert_eq!(
            "Strict".parse::<Orientation>(),
            Err(Error::UnknownOrientation("Strict".to_string()))
        );
    }

    #[test]
    fn kmer_longer_than_window_is_rejected() {
        assert_eq!(
            MinimizerParams::new(2, 5, 7).unwrap_err(),
            Error::KmerLongerThanWindow(7, 5)
        );
    }

    #[test]
    fn zero_geometry_is_rejected() {
        assert!(MinimizerParams::new(0, 25, 7).is_err());
        assert!(MinimizerParams::new(3, 0, 7).is_err());
        assert!(MinimizerParams::new(3, 25, 0).is_err());
    }

    #[test]
    fn error_frac_must_be_a_fraction() {
        assert!(DedupParams::new(1, -0.1, Orientation::Tolerant).is_err());
        assert!(DedupParams::new(1, 1.5, Orientation::Tolerant).is_err());
        assert!(DedupParams::new(1, std::f64::NAN, Orientation::Tolerant).is_err());
        assert!(DedupParams::new(1, 0.0, Orientation::Tolerant).is_ok());
        assert!(DedupParams::new(1, 1.0, Orientation::Tolerant).is_ok());
    }

    #[test]
    fn defaults_match_documented_values() {
        let dedup = DedupParams::default();
        assert_eq!(dedup.max_offset(), 1);
        assert!((dedup.max_error_frac() - 0.01).abs() < 1e-12);
        assert_eq!(dedup.orientation(), Orientation::Tolerant);

        let min = MinimizerParams::default();
        assert_eq!(
            (min.num_windows(), min.window_len(), min.kmer_len()),
            (3, 25, 7)
        );
    }
}
