// crates/sinetab-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "sinetab-cli")]
#[command(about = "8-bit sine wavetable generator (.byte assembly tables)", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the 256-entry table and write it as `.byte` lines (or raw bytes)
    Generate(cmd::generate::GenerateArgs),

    /// Print table statistics (range, DC bias, symmetry, crc32/id)
    Inspect(cmd::inspect::InspectArgs),

    /// Compare an existing `.byte` file against a freshly generated table
    Verify(cmd::verify::VerifyArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Generate(args) => cmd::generate::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
        Commands::Verify(args) => cmd::verify::run(args),
    }
}
