//! Parsers for the FlyBase source files and user-supplied key lists.
//!
//! This module provides readers for:
//!
//! - **FASTA files**: Read records (plain or gzip-compressed) and extract
//!   the FlyBase IDs referenced by each header
//! - **`fbgn_annotation_ID` files**: Row reader for the FBgn <=> annotation
//!   ID mapping table
//! - **`fb_synonym` files**: Row reader for the symbol/synonym table,
//!   restricted to one species
//! - **Key lists**: Plain-text files with one query key per line
//!
//! The row readers skip malformed rows with a warning instead of failing the
//! whole file; only I/O problems abort a read.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use fbtools::parsing::{fasta, idlist};
//!
//! let records = fasta::read_fasta_file(Path::new("dmel-all-CDS.fasta.gz")).unwrap();
//! let ids = idlist::read_id_list(Path::new("my_ids.txt")).unwrap();
//! println!("{} records, {} query IDs", records.len(), ids.len());
//! ```

use thiserror::Error;

pub mod annotation;
pub mod fasta;
pub mod idlist;
pub mod synonyms;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),
}
