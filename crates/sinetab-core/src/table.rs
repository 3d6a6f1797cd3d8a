// crates/sinetab-core/src/table.rs

use crate::amplitude::Amplitude;
use crate::checksum::Digest;
use crate::error::Result;
use crate::quantize::{quantize_sample, to_signed, PERIOD};

pub const TABLE_LEN: usize = PERIOD;

/// One full period of quantized sine, indexed by phase step.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Wavetable([u8; TABLE_LEN]);

impl Wavetable {
    /// Quantize every index 0..=255 in order.
    pub fn generate(amplitude: Amplitude) -> Wavetable {
        let mut samples = [0u8; TABLE_LEN];
        for (i, s) in samples.iter_mut().enumerate() {
            *s = quantize_sample(i as u8, amplitude);
        }
        Wavetable(samples)
    }

    #[inline]
    pub fn samples(&self) -> &[u8; TABLE_LEN] {
        &self.0
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn get(&self, index: u8) -> u8 {
        self.0[index as usize]
    }

    #[inline]
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, u8>> {
        self.0.iter().copied()
    }

    /// Always `TABLE_LEN`.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn signed(&self) -> [i8; TABLE_LEN] {
        self.0.map(to_signed)
    }

    pub fn into_inner(self) -> [u8; TABLE_LEN] {
        self.0
    }

    pub fn digest(&self) -> Digest {
        Digest::of(&self.0)
    }

    #[inline]
    pub fn crc32(&self) -> u32 {
        self.digest().crc32
    }

    /// Provenance id: hex of the first 16 bytes of blake3 over the samples.
    pub fn id_hex(&self) -> String {
        self.digest().id_hex()
    }
}

impl std::ops::Index<usize> for Wavetable {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Wavetable {
    type Item = u8;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Validate `k` and build the 256-sample table.
///
/// Fails with `InvalidAmplitude` unless `0 < k <= 1`.
pub fn generate_table(k: f64) -> Result<Wavetable> {
    let amplitude = Amplitude::new(k)?;
    Ok(Wavetable::generate(amplitude))
}
