//! Reader for FlyBase FASTA files using noodles.
//!
//! Loads whole records into memory and extracts the FlyBase IDs referenced
//! by each record's header attributes. FlyBase bulk FASTA headers carry
//! semicolon-terminated `key=value` attributes, e.g.:
//!
//! ```text
//! >FBtr0070000 type=mRNA; loc=X:...; ID=FBtr0070000; parent=FBgn0025837; release=r6.54;
//! ```
//!
//! The IDs of interest are the comma-separated values of `parent=` plus the
//! record's own `ID=` value.
//!
//! Supports both uncompressed and gzip/bgzip compressed files, detected by
//! extension (`.gz`, `.bgz`).

use std::collections::BTreeSet;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use flate2::read::GzDecoder;
use noodles::fasta;
use regex::Regex;

use crate::core::record::FastaRecord;
use crate::parsing::ParseError;

/// Comma-separated parent IDs in a header attribute list
static PARENT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"parent=([\w,]+);").expect("valid pattern"));

/// A record's own ID in a header attribute list
static ID_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"ID=(\w+);").expect("valid pattern"));

/// Check if the path is a gzipped file
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Extract the FlyBase IDs a header refers to: every value of the
/// comma-separated `parent=` attribute plus the `ID=` value.
///
/// Returns an empty set when the header carries neither attribute.
#[must_use]
pub fn header_keys(header: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();

    for captures in PARENT_TAG.captures_iter(header) {
        for id in captures[1].split(',') {
            if !id.is_empty() {
                keys.insert(id.to_string());
            }
        }
    }

    for captures in ID_TAG.captures_iter(header) {
        keys.insert(captures[1].to_string());
    }

    keys
}

/// Read all records from a FASTA file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles`
/// if parsing fails, or `ParseError::InvalidFormat` if the file contains no
/// records.
pub fn read_fasta_file(path: &Path) -> Result<Vec<FastaRecord>, ParseError> {
    if is_gzipped(path) {
        read_fasta_gzipped(path)
    } else {
        read_fasta_uncompressed(path)
    }
}

/// Read an uncompressed FASTA file
fn read_fasta_uncompressed(path: &Path) -> Result<Vec<FastaRecord>, ParseError> {
    let file = std::fs::File::open(path)?;
    let reader = BufReader::new(file);
    let mut fasta_reader = fasta::io::Reader::new(reader);

    read_fasta_reader(&mut fasta_reader)
}

/// Read a gzip-compressed FASTA file
fn read_fasta_gzipped(path: &Path) -> Result<Vec<FastaRecord>, ParseError> {
    let file = std::fs::File::open(path)?;
    let decoder = GzDecoder::new(file);
    let reader = BufReader::new(decoder);
    let mut fasta_reader = fasta::io::Reader::new(reader);

    read_fasta_reader(&mut fasta_reader)
}

/// Read records from a noodles FASTA reader
fn read_fasta_reader<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<Vec<FastaRecord>, ParseError> {
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        let name = String::from_utf8_lossy(record.name()).to_string();
        let description = record
            .description()
            .map(|d| String::from_utf8_lossy(d).to_string());
        let sequence = String::from_utf8_lossy(record.sequence().as_ref()).to_string();

        records.push(FastaRecord {
            name,
            description,
            sequence,
        });
    }

    if records.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA file".to_string(),
        ));
    }

    Ok(records)
}
