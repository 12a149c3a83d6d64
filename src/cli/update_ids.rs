use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use crate::index::ids::IdCatalog;
use crate::parsing::idlist::read_query_list;
use crate::resolve::lookup::{OutputStyle, Resolver};

#[derive(Args)]
pub struct UpdateIdsArgs {
    /// File of FBgn IDs to update, one per line
    pub ids_file: PathBuf,

    /// FlyBase annotation ID mapping file (fbgn_annotation_ID TSV)
    pub mapping_file: PathBuf,
}

pub fn run(args: UpdateIdsArgs, verbose: bool) -> anyhow::Result<()> {
    let catalog = IdCatalog::from_path(&args.mapping_file)
        .with_context(|| format!("failed to read mapping file {}", args.mapping_file.display()))?;

    if verbose {
        eprintln!(
            "Loaded {} current IDs and {} secondary aliases from {}",
            catalog.current_ids().len(),
            catalog.secondary_index().len(),
            args.mapping_file.display()
        );
    }

    let queries = read_query_list(&args.ids_file)
        .with_context(|| format!("failed to read ID file {}", args.ids_file.display()))?;

    let resolver = Resolver::new(catalog.secondary_index(), OutputStyle::tab_separated())
        .with_current(catalog.current_ids());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_preamble(&mut out, &args.ids_file, &args.mapping_file)?;
    let stats = resolver.resolve_all(queries, &mut out)?;
    out.flush()?;

    if verbose {
        eprintln!(
            "Resolved {} IDs: {} current, {} updated, {} unknown",
            stats.total, stats.current, stats.matched, stats.missed
        );
    }
    Ok(())
}

fn write_preamble<W: Write>(out: &mut W, ids_file: &Path, mapping_file: &Path) -> io::Result<()> {
    writeln!(out, "# FlyBase ID Updater")?;
    writeln!(out, "# Input = {}", absolute_display(ids_file))?;
    writeln!(out, "# ID Reference = {}", absolute_display(mapping_file))?;
    writeln!(out, "# Submitted_ID\tUpdated_ID(s)")?;
    Ok(())
}

fn absolute_display(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}
