use crate::error::{Result, SineTabError};

/// Accepts prefactors in `(0, 1]`.
///
/// Anything above 1 would push the peak past the 8-bit range and wrap;
/// zero or below collapses or inverts the wave. NaN fails both comparisons
/// and is rejected along with the infinities.
pub fn validate_prefactor(k: f64) -> Result<()> {
    if !k.is_finite() {
        return Err(SineTabError::InvalidAmplitude(k));
    }
    if k <= 0.0 || k > 1.0 {
        return Err(SineTabError::InvalidAmplitude(k));
    }
    Ok(())
}
