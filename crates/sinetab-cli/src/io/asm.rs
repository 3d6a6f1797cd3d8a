// crates/sinetab-cli/src/io/asm.rs

use std::io::{BufWriter, Write};

use anyhow::{bail, Context};
use sinetab_core::{Wavetable, TABLE_LEN};

const DIRECTIVE: &str = ".byte";

/// Write one `    .byte N` line per sample, in order.
pub fn write_byte_lines<W: Write>(mut w: W, samples: impl IntoIterator<Item = u8>) -> std::io::Result<()> {
    for s in samples {
        writeln!(w, "    {DIRECTIVE} {s}")?;
    }
    w.flush()
}

pub fn write_asm_file(path: &str, table: &Wavetable) -> anyhow::Result<()> {
    let f = std::fs::File::create(path).with_context(|| format!("create asm table: {path}"))?;
    write_byte_lines(BufWriter::new(f), table).with_context(|| format!("write asm table: {path}"))?;
    Ok(())
}

pub fn write_asm_stdout(table: &Wavetable) -> anyhow::Result<()> {
    let out = std::io::stdout();
    write_byte_lines(out.lock(), table).context("write asm table: <stdout>")?;
    Ok(())
}

/// Read back `.byte` directives.
///
/// Accepts the generator's own output plus what hand-edited tables tend to
/// contain: blank lines, `;` comments, and comma-separated values on one line.
pub fn parse_byte_lines(text: &str) -> anyhow::Result<Vec<u8>> {
    let mut out = Vec::with_capacity(TABLE_LEN);

    for (n, line) in text.lines().enumerate() {
        let lineno = n + 1;
        let code = line.split(';').next().unwrap_or("").trim();
        if code.is_empty() {
            continue;
        }

        let Some(rest) = code.strip_prefix(DIRECTIVE) else {
            bail!("line {lineno}: expected `{DIRECTIVE}`, got {code:?}");
        };
        if !rest.starts_with(char::is_whitespace) {
            bail!("line {lineno}: expected whitespace after `{DIRECTIVE}`");
        }

        for field in rest.split(',') {
            let field = field.trim();
            let v: u32 = field
                .parse()
                .with_context(|| format!("line {lineno}: bad byte value {field:?}"))?;
            if v > u8::MAX as u32 {
                bail!("line {lineno}: value {v} out of byte range");
            }
            out.push(v as u8);
        }
    }

    Ok(out)
}

/// Parse a `.byte` file from disk.
pub fn read_asm_file(path: &str) -> anyhow::Result<Vec<u8>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read asm table: {path}"))?;
    parse_byte_lines(&text).with_context(|| format!("parse asm table: {path}"))
}
