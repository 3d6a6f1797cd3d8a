// crates/sinetab-core/src/amplitude.rs

use crate::error::Result;
use crate::validate::validate_prefactor;

/// Amplitude prefactor `k`, guaranteed to lie in `(0, 1]`.
///
/// Scales the sine before quantization; 1.0 uses the full 8-bit swing,
/// smaller values leave headroom for mixing.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Amplitude(f64);

impl Amplitude {
    pub const FULL: Amplitude = Amplitude(1.0);

    #[inline]
    pub fn new(k: f64) -> Result<Amplitude> {
        validate_prefactor(k)?;
        Ok(Amplitude(k))
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Amplitude {
    fn default() -> Self {
        Amplitude::FULL
    }
}

impl TryFrom<f64> for Amplitude {
    type Error = crate::error::SineTabError;

    fn try_from(k: f64) -> Result<Amplitude> {
        Amplitude::new(k)
    }
}
