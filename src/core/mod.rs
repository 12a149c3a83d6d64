//! Core data types shared across the crate.
//!
//! This module provides the fundamental domain types:
//!
//! - [`accession`]: FlyBase accession constants and the strict ID pattern
//! - [`record::FastaRecord`]: A FASTA record held in memory
//!
//! ## FlyBase accessions
//!
//! FlyBase identifiers are `FB` followed by a two-letter entity code and a
//! run of digits:
//!
//! | Prefix | Entity |
//! |--------|--------------------|
//! | FBgn   | Gene |
//! | FBtr   | Transcript |
//! | FBal   | Allele |
//! | FBtp   | Transgenic construct |
//!
//! Keys are matched **exactly** - no case folding or other normalization is
//! applied beyond trimming surrounding whitespace.

pub mod accession;
pub mod record;
