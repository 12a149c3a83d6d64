//! Command-line interface for fbtools.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **extract-fasta**: Extract FASTA records for listed FlyBase IDs
//! - **update-ids**: Update stale FBgn IDs against an annotation mapping file
//! - **lookup-symbols**: Resolve symbols and synonyms to FlyBase IDs
//! - **constructs**: Report construct alleles for genes via the FlyBase API
//!
//! ## Usage
//!
//! ```text
//! # Pull gene and transcript sequences out of a release FASTA
//! fbtools extract-fasta --fasta dmel-all-transcript-r6.55.fasta.gz my_genes.txt
//!
//! # Refresh an old list of FBgn IDs
//! fbtools update-ids old_ids.txt fbgn_annotation_ID_fb_2024_01.tsv > updated.tsv
//!
//! # Map symbols to current IDs
//! fbtools lookup-symbols queries.txt fb_synonym_fb_2024_01.tsv
//!
//! # Transgenic construct report straight from the API
//! fbtools constructs FBgn0000490 FBgn0003996
//! ```

use clap::{Parser, Subcommand};

pub mod constructs;
pub mod extract_fasta;
pub mod lookup_symbols;
pub mod update_ids;

#[derive(Parser)]
#[command(name = "fbtools")]
#[command(version)]
#[command(about = "Command-line utilities for wrangling FlyBase genomics datasets")]
#[command(
    long_about = "fbtools bundles the small data-wrangling jobs that come up when working with FlyBase releases:\n- extracting FASTA records for a list of gene or transcript IDs\n- updating stale FBgn IDs against an annotation mapping file\n- resolving symbols and synonyms to current IDs\n- querying the FlyBase GraphQL API for transgenic construct alleles"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract FASTA records for the FlyBase IDs listed in one or more files
    ExtractFasta(extract_fasta::ExtractFastaArgs),

    /// Update stale FBgn IDs using a FlyBase annotation ID mapping file
    UpdateIds(update_ids::UpdateIdsArgs),

    /// Resolve gene and transcript symbols to FlyBase IDs via a synonym table
    LookupSymbols(lookup_symbols::LookupSymbolsArgs),

    /// Report transgenic construct alleles for genes via the FlyBase GraphQL API
    Constructs(constructs::ConstructsArgs),
}
