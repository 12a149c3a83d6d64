//! Row reader for the FlyBase synonym file (`fb_synonym_*.tsv`).
//!
//! Only gene (`FBgn`) and transcript (`FBtr`) rows are read, restricted to
//! one organism. Columns are tab-separated: primary FBid, organism
//! abbreviation, current symbol, current full name, full-name synonyms,
//! symbol synonyms. The later columns are optional from the right.
//!
//! The two synonym columns pack multiple values into one field, separated by
//! commas *without* a following space; a comma followed by a space is part of
//! the synonym itself:
//!
//! ```text
//! my gene1,my gene2  ->  ["my gene1", "my gene2"]
//! my gene1, my gene2 ->  ["my gene1, my gene2"]
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::warn;

use crate::core::accession;
use crate::parsing::ParseError;

/// Default organism abbreviation for synonym lookups
pub const DEFAULT_SPECIES: &str = "Dmel";

/// One parsed row of the synonym file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymRow {
    /// Primary FBgn/FBtr ID
    pub primary_id: String,

    /// Current symbol
    pub symbol: String,

    /// Current full name, when present and non-empty
    pub fullname: Option<String>,

    /// Synonyms of the full name
    pub fullname_synonyms: Vec<String>,

    /// Synonyms of the symbol
    pub symbol_synonyms: Vec<String>,
}

impl SynonymRow {
    /// Every alias key this row contributes, in column order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.symbol.as_str())
            .chain(self.fullname.as_deref())
            .chain(self.fullname_synonyms.iter().map(String::as_str))
            .chain(self.symbol_synonyms.iter().map(String::as_str))
    }
}

/// Split a synonym column on commas not followed by whitespace.
///
/// Empty pieces are preserved; callers filter them as needed.
#[must_use]
pub fn split_synonyms(column: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut chars = column.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c != ',' {
            continue;
        }
        let splits_here = match chars.peek() {
            Some((_, next)) => !next.is_whitespace(),
            None => true,
        };
        if splits_here {
            parts.push(&column[start..i]);
            start = i + 1;
        }
    }

    parts.push(&column[start..]);
    parts
}

/// Streaming reader over the synonym file's gene/transcript rows
pub struct SynonymReader<R> {
    reader: R,
    species: String,
    line: String,
    line_number: usize,
}

impl SynonymReader<BufReader<File>> {
    /// Open a synonym file for reading, keeping only rows for `species`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` if the file cannot be opened.
    pub fn from_path(path: &Path, species: &str) -> Result<Self, ParseError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file), species))
    }
}

impl<R: BufRead> SynonymReader<R> {
    pub fn new(reader: R, species: &str) -> Self {
        Self {
            reader,
            species: species.to_string(),
            line: String::new(),
            line_number: 0,
        }
    }

    /// Organism abbreviation this reader is restricted to
    #[must_use]
    pub fn species(&self) -> &str {
        &self.species
    }

    /// Read the next gene/transcript row for the configured species, or
    /// `None` at end of input.
    ///
    /// Rows for other organisms are skipped silently; rows missing the
    /// species or symbol column are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` on read failure.
    pub fn read_row(&mut self) -> Result<Option<SynonymRow>, ParseError> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let line = self.line.trim();
            if !line.starts_with(accession::GENE_PREFIX)
                && !line.starts_with(accession::TRANSCRIPT_PREFIX)
            {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 2 {
                warn!(
                    line = self.line_number,
                    "skipping synonym row with no species column"
                );
                continue;
            }
            if fields[1] != self.species {
                continue;
            }
            if fields.len() < 3 {
                warn!(
                    line = self.line_number,
                    "skipping synonym row with no symbol column"
                );
                continue;
            }

            let fullname = fields
                .get(3)
                .filter(|name| !name.is_empty())
                .map(|name| (*name).to_string());
            let fullname_synonyms = fields.get(4).map_or_else(Vec::new, |col| split_clean(col));
            let symbol_synonyms = fields.get(5).map_or_else(Vec::new, |col| split_clean(col));

            return Ok(Some(SynonymRow {
                primary_id: fields[0].to_string(),
                symbol: fields[2].to_string(),
                fullname,
                fullname_synonyms,
                symbol_synonyms,
            }));
        }
    }
}

/// Split a synonym column and drop empty pieces
fn split_clean(column: &str) -> Vec<String> {
    split_synonyms(column)
        .into_iter()
        .filter(|syn| !syn.is_empty())
        .map(String::from)
        .collect()
}
