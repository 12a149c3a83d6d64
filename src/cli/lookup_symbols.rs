use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::index::symbols::SymbolCatalog;
use crate::parsing::idlist::read_query_list;
use crate::parsing::synonyms::DEFAULT_SPECIES;
use crate::resolve::lookup::{OutputStyle, Resolver};

#[derive(Args)]
pub struct LookupSymbolsArgs {
    /// File of symbols to look up, one per line
    pub query_file: PathBuf,

    /// FlyBase synonym table (fb_synonym TSV)
    pub synonym_file: PathBuf,

    /// Species abbreviation to restrict the synonym table to
    #[arg(short, long, default_value = DEFAULT_SPECIES)]
    pub species: String,
}

pub fn run(args: LookupSymbolsArgs, verbose: bool) -> anyhow::Result<()> {
    let catalog = SymbolCatalog::from_path(&args.synonym_file, &args.species)
        .with_context(|| format!("failed to read synonym file {}", args.synonym_file.display()))?;

    if verbose {
        eprintln!(
            "Indexed {} aliases for {} from {}",
            catalog.index().len(),
            catalog.species(),
            args.synonym_file.display()
        );
    }

    let queries = read_query_list(&args.query_file)
        .with_context(|| format!("failed to read query file {}", args.query_file.display()))?;

    let resolver = Resolver::new(catalog.index(), OutputStyle::comma_joined());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stats = resolver.resolve_all(queries, &mut out)?;
    out.flush()?;

    if verbose {
        eprintln!(
            "Resolved {} symbols: {} matched, {} unknown",
            stats.total, stats.matched, stats.missed
        );
    }
    Ok(())
}
