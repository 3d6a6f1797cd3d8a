// crates/sinetab-cli/src/io/mod.rs

pub mod asm;
pub mod bin;
