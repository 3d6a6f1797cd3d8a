pub mod error;
pub mod validate;

pub mod amplitude;
pub mod checksum;
pub mod quantize;
pub mod stats;
pub mod table;

pub use crate::amplitude::Amplitude;
pub use crate::checksum::Digest;
pub use crate::error::{Result, SineTabError};
pub use crate::stats::TableStats;
pub use crate::table::{generate_table, Wavetable, TABLE_LEN};
