use thiserror::Error;

pub type Result<T> = std::result::Result<T, SineTabError>;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SineTabError {
    #[error("invalid amplitude prefactor: {0} (must be in (0, 1])")]
    InvalidAmplitude(f64),
}
