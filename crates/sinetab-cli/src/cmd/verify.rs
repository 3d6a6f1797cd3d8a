// crates/sinetab-cli/src/cmd/verify.rs

use clap::Args;
use sinetab_core::{generate_table, Digest, TABLE_LEN};
use tracing::info;

use crate::io::asm;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Existing `.byte` table to check
    #[arg(long)]
    pub input: String,

    /// Amplitude prefactor the table is expected to have been built with
    #[arg(long, default_value_t = 1.0)]
    pub prefactor: f64,

    /// Show at most this many mismatching indices
    #[arg(long, default_value_t = 8)]
    pub show: usize,
}

pub fn run(args: VerifyArgs) -> anyhow::Result<()> {
    let expected = generate_table(args.prefactor)?;
    let got = asm::read_asm_file(&args.input)?;

    if got.len() != TABLE_LEN {
        anyhow::bail!(
            "{}: expected {} samples, found {}",
            args.input,
            TABLE_LEN,
            got.len()
        );
    }

    let mismatches: Vec<(usize, u8, u8)> = expected
        .iter()
        .zip(got.iter().copied())
        .enumerate()
        .filter(|(_, (e, g))| e != g)
        .map(|(i, (e, g))| (i, e, g))
        .collect();

    eprintln!("--- verify ---");
    eprintln!("file             = {}", args.input);
    eprintln!("prefactor        = {}", args.prefactor);
    eprintln!("expected         = {}", expected.digest());
    eprintln!("found            = {}", Digest::of(&got));
    eprintln!("mismatches       = {}", mismatches.len());

    for (i, e, g) in mismatches.iter().take(args.show) {
        eprintln!("  index {i:>3}: expected {e:>3}, found {g:>3}");
    }

    if !mismatches.is_empty() {
        anyhow::bail!(
            "{}: {} of {} samples differ from prefactor {}",
            args.input,
            mismatches.len(),
            TABLE_LEN,
            args.prefactor
        );
    }

    info!(input = %args.input, "table matches");
    Ok(())
}
