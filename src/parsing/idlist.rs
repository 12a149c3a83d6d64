//! Readers for user-supplied key lists, one key per line.
//!
//! Two variants with different filtering policies: [`read_id_list`] keeps
//! only strict FlyBase accessions (for FASTA extraction, where every key is
//! expected to hit the index), while [`read_query_list`] keeps every
//! non-empty line verbatim (for the ID and symbol resolvers, where misses
//! are ordinary output).

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::core::accession;
use crate::parsing::ParseError;

/// Read a FlyBase ID list, silently dropping lines that do not match the
/// accession pattern. IDs are trimmed and deduplicated.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read.
pub fn read_id_list(path: &Path) -> Result<BTreeSet<String>, ParseError> {
    let file = File::open(path)?;
    let mut ids = BTreeSet::new();

    for line in BufReader::new(file).lines() {
        let line = line?;
        if accession::is_flybase_id(&line) {
            ids.insert(line.trim().to_string());
        }
    }

    Ok(ids)
}

/// Read a query key list verbatim: every trimmed non-empty line, in input
/// order, duplicates preserved.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read.
pub fn read_query_list(path: &Path) -> Result<Vec<String>, ParseError> {
    let file = File::open(path)?;
    let mut keys = Vec::new();

    for line in BufReader::new(file).lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            keys.push(trimmed.to_string());
        }
    }

    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(content.as_bytes()).unwrap();
        temp.flush().unwrap();
        temp
    }

    #[test]
    fn test_id_list_keeps_only_accessions() {
        let temp = write_temp("FBgn0000001\nwg\n  FBtr0070000  \n# note\n\nFBgn0000001\n");

        let ids = read_id_list(temp.path()).unwrap();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains("FBgn0000001"));
        assert!(ids.contains("FBtr0070000"));
    }

    #[test]
    fn test_id_list_empty_when_nothing_matches() {
        let temp = write_temp("wg\nnotch\n");
        assert!(read_id_list(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_query_list_keeps_order_and_duplicates() {
        let temp = write_temp("wg\n  E(spl)m8-HLH  \n\nwg\nssyn1, has comma\n");

        let keys = read_query_list(temp.path()).unwrap();
        assert_eq!(keys, vec!["wg", "E(spl)m8-HLH", "wg", "ssyn1, has comma"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = read_query_list(Path::new("/no/such/file.txt"));
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}
