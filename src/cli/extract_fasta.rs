use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use crate::index::fasta_store::FastaStore;
use crate::parsing::idlist::read_id_list;
use crate::resolve::extract::{extract_records, SequenceLayout, DEFAULT_LINE_WIDTH};

#[derive(Args)]
pub struct ExtractFastaArgs {
    /// Files of FlyBase IDs to extract, one ID per line
    #[arg(required = true)]
    pub id_lists: Vec<PathBuf>,

    /// Reference FASTA file (plain or gzipped)
    #[arg(short, long)]
    pub fasta: PathBuf,

    /// Directory for the output FASTA files
    #[arg(short, long, default_value = ".")]
    pub outdir: PathBuf,

    /// Wrap sequence lines at this width
    #[arg(long, default_value_t = DEFAULT_LINE_WIDTH, conflicts_with = "no_wrap")]
    pub line_width: usize,

    /// Write each sequence on a single line
    #[arg(long)]
    pub no_wrap: bool,
}

pub fn run(args: ExtractFastaArgs, verbose: bool) -> anyhow::Result<()> {
    let store = FastaStore::from_path(&args.fasta)
        .with_context(|| format!("failed to read FASTA file {}", args.fasta.display()))?;

    if verbose {
        eprintln!(
            "Indexed {} records under {} keys from {}",
            store.len(),
            store.key_count(),
            args.fasta.display()
        );
    }

    let layout = if args.no_wrap {
        SequenceLayout::SingleLine
    } else {
        SequenceLayout::Wrapped(args.line_width)
    };

    // One bad list must not stop the others.
    let mut failures = 0;
    for id_list in &args.id_lists {
        if let Err(error) = extract_one_list(&store, id_list, &args.outdir, layout, verbose) {
            eprintln!("Error processing {}: {error:#}", id_list.display());
            failures += 1;
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} ID list(s) failed", args.id_lists.len());
    }
    Ok(())
}

fn extract_one_list(
    store: &FastaStore,
    id_list: &Path,
    outdir: &Path,
    layout: SequenceLayout,
    verbose: bool,
) -> anyhow::Result<()> {
    let ids = read_id_list(id_list)
        .with_context(|| format!("failed to read ID list {}", id_list.display()))?;
    if ids.is_empty() {
        tracing::warn!(file = %id_list.display(), "no FlyBase IDs found, skipping");
        return Ok(());
    }

    let output_path = outdir.join(output_name(id_list));
    let file = File::create(&output_path)
        .with_context(|| format!("failed to create {}", output_path.display()))?;
    let mut out = BufWriter::new(file);

    let written = extract_records(store, &ids, layout, &mut out)
        .with_context(|| format!("extraction into {} failed", output_path.display()))?;
    out.flush()?;

    if verbose {
        eprintln!(
            "Wrote {written} records for {} IDs to {}",
            ids.len(),
            output_path.display()
        );
    }
    Ok(())
}

fn output_name(id_list: &Path) -> PathBuf {
    let stem = id_list.file_stem().unwrap_or_else(|| OsStr::new("output"));
    let mut name = stem.to_os_string();
    name.push(".fasta");
    PathBuf::from(name)
}
