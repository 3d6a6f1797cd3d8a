// crates/sinetab-cli/src/cmd/inspect.rs

use clap::Args;
use sinetab_core::generate_table;
use sinetab_core::stats::antisymmetry_max_error;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Amplitude prefactor in (0, 1]
    #[arg(long, default_value_t = 1.0)]
    pub prefactor: f64,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let table = generate_table(args.prefactor)?;
    let st = table.stats();
    let digest = table.digest();

    eprintln!("--- inspect ---");
    eprintln!("prefactor        = {}", args.prefactor);
    eprintln!("samples          = {}", table.len());
    eprintln!("min / max        = {} / {}", st.min, st.max);
    eprintln!("signed peak      = {}", st.signed_peak);
    eprintln!("signed trough    = {}", st.signed_trough);
    eprintln!("signed sum       = {}", st.signed_sum);
    eprintln!("dc_bias          = {:.6}", st.dc_bias);
    eprintln!(
        "antisymmetry     = {} deviating pairs (max error {})",
        st.antisymmetry_deviations,
        antisymmetry_max_error(table.samples())
    );
    eprintln!("crc32            = {:08x}", digest.crc32);
    eprintln!("table_id         = {}", digest.id_hex());

    Ok(())
}
