//! # fbtools
//!
//! Utilities for wrangling FlyBase genomics datasets.
//!
//! FlyBase publishes its releases as flat files: gzipped FASTA dumps,
//! annotation ID mapping tables, and synonym tables. The recurring chore is
//! the same every time: index one of those files by some identifier, then
//! answer lookups from a list you were handed. `fbtools` packages those
//! jobs, plus a small client for the FlyBase GraphQL API.
//!
//! Everything follows the same pipeline: a [`parsing`] reader walks the
//! release file row by row, an [`index`] builder folds the rows into an
//! inverted index from alias to primary IDs, and a [`resolve`] pass answers
//! submitted keys against it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fbtools::{OutputStyle, Resolver, SymbolCatalog};
//!
//! // Index the Dmel rows of a synonym table
//! let catalog = SymbolCatalog::from_path("fb_synonym_fb_2024_01.tsv", "Dmel").unwrap();
//!
//! // Resolve symbols against it
//! let resolver = Resolver::new(catalog.index(), OutputStyle::comma_joined());
//! let mut out = std::io::stdout();
//! resolver
//!     .resolve_all(vec!["white".to_string(), "dpp".to_string()], &mut out)
//!     .unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`core`]: FlyBase accession handling and the FASTA record type
//! - [`parsing`]: Readers for FASTA, annotation, synonym, and ID list files
//! - [`index`]: Inverted indexes built from parsed rows
//! - [`resolve`]: Key resolution and FASTA extraction against the indexes
//! - [`api`]: FlyBase GraphQL client and the construct-allele report
//! - [`cli`]: Command-line interface implementation

pub mod api;
pub mod cli;
pub mod core;
pub mod index;
pub mod parsing;
pub mod resolve;

// Re-export commonly used types for convenience
pub use core::record::FastaRecord;
pub use index::{AliasIndex, FastaStore, IdCatalog, SymbolCatalog};
pub use resolve::extract::SequenceLayout;
pub use resolve::lookup::{OutputStyle, Resolution, Resolver};
