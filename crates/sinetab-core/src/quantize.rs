// crates/sinetab-core/src/quantize.rs

use std::f64::consts::TAU;

use crate::amplitude::Amplitude;

/// Number of phase steps in one period.
pub const PERIOD: usize = 256;

/// Half the 8-bit swing. `sin * HALF_SWING` spans [-127.5, 127.5].
pub const HALF_SWING: f64 = 127.5;

/// DC offset applied before rounding. Shifts [-127.5, 127.5] to
/// [-128, 127] so the rounded value fits a signed byte exactly.
pub const DC_OFFSET: f64 = -0.5;

/// Phase in radians for a table index: `index / 256 * 2π`.
#[inline]
pub fn phase(index: u8) -> f64 {
    (index as f64 / PERIOD as f64) * TAU
}

/// Scaled sine before offset and rounding.
#[inline]
pub fn raw_amplitude(index: u8, amplitude: Amplitude) -> f64 {
    phase(index).sin() * HALF_SWING * amplitude.get()
}

/// Round to nearest, ties to even (banker's rounding).
///
/// This is the table's rounding contract. Ties only occur at exact
/// half-integers; index 0 is one (`-0.5 -> 0`).
#[inline]
pub fn round_half_even(x: f64) -> f64 {
    x.round_ties_even()
}

/// Quantize one phase index into an unsigned 8-bit sample.
///
/// The rounded level lives in [-128, 127]; negatives wrap by +256, which is
/// the same bit pattern as the two's-complement `i8`.
pub fn quantize_sample(index: u8, amplitude: Amplitude) -> u8 {
    let raw = round_half_even(raw_amplitude(index, amplitude) + DC_OFFSET) as i32;
    debug_assert!((-128..=127).contains(&raw), "raw level out of range: {raw}");

    let wrapped = if raw < 0 { raw + 256 } else { raw };
    wrapped as u8
}

/// Signed view of a sample (inverse of the +256 wrap).
#[inline]
pub fn to_signed(sample: u8) -> i8 {
    sample as i8
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn ties_round_to_even() {
        assert_eq!(round_half_even(-0.5), 0.0);
        assert_eq!(round_half_even(0.5), 0.0);
        assert_eq!(round_half_even(1.5), 2.0);
        assert_eq!(round_half_even(2.5), 2.0);
        assert_eq!(round_half_even(-1.5), -2.0);
        assert_eq!(round_half_even(-2.5), -2.0);
    }

    #[test]
    fn non_ties_round_to_nearest() {
        assert_eq!(round_half_even(107.875), 108.0);
        assert_eq!(round_half_even(-3.63), -4.0);
        assert_eq!(round_half_even(39.494), 39.0);
    }

    #[test]
    fn phase_quarters() {
        assert_eq!(phase(0), 0.0);
        assert_eq!(phase(64), FRAC_PI_2);
        assert_eq!(phase(128), PI);
    }

    #[test]
    fn index_zero_is_zero() {
        assert_eq!(quantize_sample(0, Amplitude::FULL), 0);
    }

    #[test]
    fn extremes_fill_signed_byte() {
        assert_eq!(quantize_sample(64, Amplitude::FULL), 127);
        assert_eq!(quantize_sample(192, Amplitude::FULL), 128);
        assert_eq!(to_signed(quantize_sample(192, Amplitude::FULL)), -128);
    }

    #[test]
    fn negative_levels_wrap() {
        // sin just past π is slightly negative: -3.13 - 0.5 rounds to -4.
        assert_eq!(quantize_sample(129, Amplitude::FULL), 252);
        assert_eq!(to_signed(252), -4);
    }
}
