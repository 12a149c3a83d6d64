use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::record::FastaRecord;
use crate::parsing::fasta::{header_keys, read_fasta_file};
use crate::parsing::ParseError;

/// In-memory FASTA collection indexed by the FlyBase IDs found in each
/// record's header.
///
/// A record is keyed under every `parent=` ID and its `ID=` tag, so one
/// gene ID typically maps to several transcript records. Records keep their
/// file order; the index stores positions into that order, letting one
/// record answer for many keys without cloning sequences.
#[derive(Debug, Clone, Default)]
pub struct FastaStore {
    records: Vec<FastaRecord>,
    key_to_positions: HashMap<String, Vec<usize>>,
}

impl FastaStore {
    /// Load and index a FASTA file (plain or gzipped).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains no sequences.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let records = read_fasta_file(path)?;
        let store = Self::from_records(records);
        debug!(
            records = store.len(),
            keys = store.key_count(),
            file = %path.display(),
            "indexed FASTA file"
        );
        Ok(store)
    }

    #[must_use]
    pub fn from_records(records: Vec<FastaRecord>) -> Self {
        let mut store = Self::default();
        for record in records {
            store.add_record(record);
        }
        store
    }

    fn add_record(&mut self, record: FastaRecord) {
        let keys = header_keys(&record.header());
        if keys.is_empty() {
            warn!(record = %record.name, "no FlyBase IDs in FASTA header, record not indexed");
        }
        let position = self.records.len();
        for key in keys {
            self.key_to_positions.entry(key).or_default().push(position);
        }
        self.records.push(record);
    }

    /// Positions of the records keyed under `id`, in file order
    #[must_use]
    pub fn positions(&self, id: &str) -> Option<&[usize]> {
        self.key_to_positions.get(id).map(Vec::as_slice)
    }

    #[must_use]
    pub fn record(&self, position: usize) -> &FastaRecord {
        &self.records[position]
    }

    /// Number of records held
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct index keys
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.key_to_positions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, description: &str, sequence: &str) -> FastaRecord {
        let mut record = FastaRecord::new(name, sequence);
        record.description = Some(description.to_string());
        record
    }

    #[test]
    fn test_record_keyed_by_parents_and_id() {
        let store = FastaStore::from_records(vec![record(
            "FBtr0070000",
            "type=mRNA; parent=FBgn0000001,FBgn0000002; ID=FBtr0070000;",
            "ACGT",
        )]);

        assert_eq!(store.positions("FBgn0000001"), Some(&[0][..]));
        assert_eq!(store.positions("FBgn0000002"), Some(&[0][..]));
        assert_eq!(store.positions("FBtr0070000"), Some(&[0][..]));
        assert_eq!(store.key_count(), 3);
    }

    #[test]
    fn test_gene_maps_to_all_transcripts() {
        let store = FastaStore::from_records(vec![
            record("FBtr0000001", "parent=FBgn0000010; ID=FBtr0000001;", "AAAA"),
            record("FBtr0000002", "parent=FBgn0000010; ID=FBtr0000002;", "CCCC"),
        ]);

        assert_eq!(store.positions("FBgn0000010"), Some(&[0, 1][..]));
        assert_eq!(store.record(0).sequence, "AAAA");
        assert_eq!(store.record(1).sequence, "CCCC");
    }

    #[test]
    fn test_unknown_id_is_none() {
        let store = FastaStore::from_records(vec![record(
            "FBtr0000001",
            "parent=FBgn0000010; ID=FBtr0000001;",
            "AAAA",
        )]);

        assert!(store.positions("FBgn9999999").is_none());
    }

    #[test]
    fn test_record_without_ids_kept_but_unindexed() {
        let store = FastaStore::from_records(vec![FastaRecord::new("chr2L", "ACGT")]);

        assert_eq!(store.len(), 1);
        assert_eq!(store.key_count(), 0);
    }
}
