use std::io::BufRead;
use std::path::Path;

use tracing::debug;

use crate::index::alias::AliasIndex;
use crate::parsing::synonyms::{SynonymReader, SynonymRow};
use crate::parsing::ParseError;

/// Alias index over a FlyBase synonym table, restricted to one species.
///
/// Every alias a row carries (symbol, full name, and both synonym lists)
/// points back at the row's primary ID. Since different genes reuse symbols
/// and synonyms, lookups can return several primaries.
#[derive(Debug, Clone)]
pub struct SymbolCatalog {
    species: String,
    index: AliasIndex,
}

impl SymbolCatalog {
    /// Build a catalog from a synonym TSV file, keeping only rows for
    /// `species`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    pub fn from_path<P: AsRef<Path>>(path: P, species: &str) -> Result<Self, ParseError> {
        let reader = SynonymReader::from_path(path.as_ref(), species)?;
        Self::from_reader(reader)
    }

    /// Build a catalog from an already-open synonym reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails partway through.
    pub fn from_reader<R: BufRead>(mut reader: SynonymReader<R>) -> Result<Self, ParseError> {
        let mut catalog = Self {
            species: reader.species().to_string(),
            index: AliasIndex::new(),
        };
        while let Some(row) = reader.read_row()? {
            catalog.add_row(&row);
        }
        debug!(
            species = %catalog.species,
            aliases = catalog.index.len(),
            "built symbol catalog"
        );
        Ok(catalog)
    }

    fn add_row(&mut self, row: &SynonymRow) {
        for alias in row.aliases() {
            self.index.insert(alias, &row.primary_id);
        }
    }

    #[must_use]
    pub fn species(&self) -> &str {
        &self.species
    }

    #[must_use]
    pub fn index(&self) -> &AliasIndex {
        &self.index
    }
}
