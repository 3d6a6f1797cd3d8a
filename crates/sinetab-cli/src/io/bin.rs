// crates/sinetab-cli/src/io/bin.rs

use anyhow::Context;
use sinetab_core::Wavetable;

/// Raw 256-byte image, one byte per sample in index order.
pub fn write_bytes_file(path: &str, table: &Wavetable) -> anyhow::Result<()> {
    std::fs::write(path, table.as_bytes()).with_context(|| format!("write table bin: {path}"))?;
    Ok(())
}
