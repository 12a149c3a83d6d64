//! Row reader for the FlyBase FBgn <=> annotation ID mapping file
//! (`fbgn_annotation_ID_*.tsv`).
//!
//! Candidate rows are non-comment lines containing an `FBgn` accession.
//! Columns are tab-separated: symbol, organism abbreviation, primary FBgn ID,
//! comma-separated secondary FBgn IDs; trailing annotation-ID columns are
//! ignored. Rows with fewer than four columns are skipped with a warning.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::warn;

use crate::core::accession;
use crate::parsing::ParseError;

/// One parsed row of the mapping file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationRow {
    /// Gene symbol
    pub symbol: String,

    /// Organism abbreviation (e.g. `Dmel`)
    pub species: String,

    /// Current FBgn ID
    pub primary_id: String,

    /// Retired FBgn IDs that now resolve to `primary_id`
    pub secondary_ids: Vec<String>,
}

/// Streaming reader over the mapping file's candidate rows
pub struct AnnotationReader<R> {
    reader: R,
    line: String,
    line_number: usize,
}

impl AnnotationReader<BufReader<File>> {
    /// Open a mapping file for reading.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` if the file cannot be opened.
    pub fn from_path(path: &Path) -> Result<Self, ParseError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> AnnotationReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            line_number: 0,
        }
    }

    /// Read the next mapping row, or `None` at end of input.
    ///
    /// Comment lines and lines without an FBgn accession are skipped
    /// silently; rows with too few columns are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` on read failure.
    pub fn read_row(&mut self) -> Result<Option<AnnotationRow>, ParseError> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let line = self.line.trim();
            if line.starts_with('#') || !line.contains(accession::GENE_PREFIX) {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 4 {
                warn!(
                    line = self.line_number,
                    "skipping mapping row with fewer than 4 columns"
                );
                continue;
            }

            let secondary_ids = fields[3]
                .split(',')
                .filter(|id| !id.is_empty())
                .map(String::from)
                .collect();

            return Ok(Some(AnnotationRow {
                symbol: fields[0].to_string(),
                species: fields[1].to_string(),
                primary_id: fields[2].to_string(),
                secondary_ids,
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_all(text: &str) -> Vec<AnnotationRow> {
        let mut reader = AnnotationReader::new(text.as_bytes());
        let mut rows = Vec::new();
        while let Some(row) = reader.read_row().unwrap() {
            rows.push(row);
        }
        rows
    }

    #[test]
    fn test_parses_mapping_rows() {
        let text = "## gene_symbol\torganism\tprimary_FBgn#\tsecondary_FBgn#(s)\tannotation_ID\n\
                    wg\tDmel\tFBgn0284084\tFBgn0000001,FBgn0010314\tCG4889\t\n\
                    AGBE\tDmel\tFBgn0053138\t\tCG33138\t\n";

        let rows = read_all(text);
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].symbol, "wg");
        assert_eq!(rows[0].species, "Dmel");
        assert_eq!(rows[0].primary_id, "FBgn0284084");
        assert_eq!(rows[0].secondary_ids, vec!["FBgn0000001", "FBgn0010314"]);

        assert_eq!(rows[1].primary_id, "FBgn0053138");
        assert!(rows[1].secondary_ids.is_empty());
    }

    #[test]
    fn test_skips_comments_and_non_candidate_lines() {
        let text = "# FBgn mentioned in a comment\n\
                    some free text line\n\
                    wg\tDmel\tFBgn0284084\tFBgn0000001\tCG4889\t\n";

        let rows = read_all(text);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].primary_id, "FBgn0284084");
    }

    #[test]
    fn test_skips_short_rows_and_continues() {
        let text = "FBgn0000001\tDmel\n\
                    wg\tDmel\tFBgn0284084\tFBgn0000001\tCG4889\t\n";

        let rows = read_all(text);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].primary_id, "FBgn0284084");
    }

    #[test]
    fn test_empty_secondary_entries_dropped() {
        let text = "wg\tDmel\tFBgn0284084\tFBgn0000001,,FBgn0010314,\tCG4889\t\n";

        let rows = read_all(text);
        assert_eq!(rows[0].secondary_ids, vec!["FBgn0000001", "FBgn0010314"]);
    }
}
