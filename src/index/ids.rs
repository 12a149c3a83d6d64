use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;

use tracing::debug;

use crate::index::alias::AliasIndex;
use crate::parsing::annotation::{AnnotationReader, AnnotationRow};
use crate::parsing::ParseError;

/// Catalog of current FlyBase gene IDs and the secondary IDs that point at
/// them, built from an annotation ID mapping file.
///
/// A submitted ID is either current (its own primary), mapped through the
/// secondary index to one or more primaries, or unknown. The current set is
/// consulted before the secondary index so a primary ID that also appears as
/// someone's secondary still resolves to itself.
#[derive(Debug, Clone, Default)]
pub struct IdCatalog {
    current: HashSet<String>,
    secondary: AliasIndex,
}

impl IdCatalog {
    /// Build a catalog from an annotation ID mapping file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let reader = AnnotationReader::from_path(path.as_ref())?;
        Self::from_reader(reader)
    }

    /// Build a catalog from an already-open annotation reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails partway through.
    pub fn from_reader<R: BufRead>(mut reader: AnnotationReader<R>) -> Result<Self, ParseError> {
        let mut catalog = Self::default();
        while let Some(row) = reader.read_row()? {
            catalog.add_row(&row);
        }
        debug!(
            current = catalog.current.len(),
            aliases = catalog.secondary.len(),
            "built ID catalog"
        );
        Ok(catalog)
    }

    fn add_row(&mut self, row: &AnnotationRow) {
        self.current.insert(row.primary_id.clone());
        for secondary in &row.secondary_ids {
            self.secondary.insert(secondary, &row.primary_id);
        }
    }

    /// Is `id` a current primary ID?
    #[must_use]
    pub fn is_current(&self, id: &str) -> bool {
        self.current.contains(id)
    }

    #[must_use]
    pub fn current_ids(&self) -> &HashSet<String> {
        &self.current
    }

    #[must_use]
    pub fn secondary_index(&self) -> &AliasIndex {
        &self.secondary
    }
}
