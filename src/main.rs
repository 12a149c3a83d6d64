use clap::Parser;
use tracing_subscriber::EnvFilter;

use fbtools::cli::{self, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flag; RUST_LOG wins when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("fbtools=debug,info")
        } else {
            EnvFilter::new("fbtools=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::ExtractFasta(args) => {
            cli::extract_fasta::run(args, cli.verbose)?;
        }
        Commands::UpdateIds(args) => {
            cli::update_ids::run(args, cli.verbose)?;
        }
        Commands::LookupSymbols(args) => {
            cli::lookup_symbols::run(args, cli.verbose)?;
        }
        Commands::Constructs(args) => {
            cli::constructs::run(args, cli.verbose)?;
        }
    }

    Ok(())
}
