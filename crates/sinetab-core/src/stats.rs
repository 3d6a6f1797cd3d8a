// crates/sinetab-core/src/stats.rs

use crate::table::{Wavetable, TABLE_LEN};

const HALF: usize = TABLE_LEN / 2;

/// Summary of a generated table, in both unsigned and signed (`i8`) views.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TableStats {
    pub min: u8,
    pub max: u8,
    pub signed_peak: i8,
    pub signed_trough: i8,
    pub signed_sum: i32,
    /// Mean signed level; the -0.5 offset makes this slightly negative for a
    /// symmetric wave.
    pub dc_bias: f64,
    /// Indices `i < 128` where `s[i] + s[i+128]` (mod 256) is not 255.
    pub antisymmetry_deviations: usize,
}

impl Wavetable {
    pub fn stats(&self) -> TableStats {
        let s = self.samples();
        let signed = self.signed();

        let min = s.iter().copied().min().unwrap_or(0);
        let max = s.iter().copied().max().unwrap_or(0);
        let signed_peak = signed.iter().copied().max().unwrap_or(0);
        let signed_trough = signed.iter().copied().min().unwrap_or(0);
        let signed_sum: i32 = signed.iter().map(|&v| v as i32).sum();

        TableStats {
            min,
            max,
            signed_peak,
            signed_trough,
            signed_sum,
            dc_bias: signed_sum as f64 / TABLE_LEN as f64,
            antisymmetry_deviations: antisymmetry_deviations(s),
        }
    }
}

/// Count of half-period pairs that do not sum to 255 (mod 256).
pub fn antisymmetry_deviations(s: &[u8; TABLE_LEN]) -> usize {
    (0..HALF)
        .filter(|&i| s[i].wrapping_add(s[i + HALF]) != 255)
        .count()
}

/// Largest distance (mod 256, either direction) of a pair sum from 255.
pub fn antisymmetry_max_error(s: &[u8; TABLE_LEN]) -> u8 {
    (0..HALF)
        .map(|i| {
            let d = s[i].wrapping_add(s[i + HALF]).wrapping_sub(255);
            d.min(d.wrapping_neg())
        })
        .max()
        .unwrap_or(0)
}
