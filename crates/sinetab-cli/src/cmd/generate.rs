// crates/sinetab-cli/src/cmd/generate.rs

use clap::Args;
use sinetab_core::generate_table;
use tracing::{debug, info};

use crate::io::{asm, bin};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Amplitude prefactor in (0, 1]; 1.0 uses the full 8-bit swing
    #[arg(long, default_value_t = 1.0)]
    pub prefactor: f64,

    /// Output file path; "-" prints to stdout (asm only)
    #[arg(long, default_value = "sinedata.txt")]
    pub output: String,

    /// Output format: "asm" (`.byte` lines) or "bin" (raw 256 bytes)
    #[arg(long, default_value = "asm")]
    pub format: String,
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let table = generate_table(args.prefactor)?;
    debug!(prefactor = args.prefactor, digest = %table.digest(), "table generated");

    let to_stdout = args.output == "-";

    match args.format.as_str() {
        "asm" => {
            if to_stdout {
                asm::write_asm_stdout(&table)?;
            } else {
                asm::write_asm_file(&args.output, &table)?;
            }
        }
        "bin" => {
            if to_stdout {
                anyhow::bail!("--format bin requires --output <file>");
            }
            bin::write_bytes_file(&args.output, &table)?;
        }
        other => anyhow::bail!("unknown --format: {other}"),
    }

    if !to_stdout {
        info!(
            output = %args.output,
            format = %args.format,
            prefactor = args.prefactor,
            table_id = %table.id_hex(),
            "wrote {} samples",
            table.len()
        );
    }

    Ok(())
}
