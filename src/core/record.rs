/// A single FASTA record held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    /// Record name (first word of the header line)
    pub name: String,

    /// Remainder of the header line after the name, if any
    pub description: Option<String>,

    /// Sequence with line breaks removed
    pub sequence: String,
}

impl FastaRecord {
    pub fn new(name: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            sequence: sequence.into(),
        }
    }

    /// The full header line as it appears after `>` in the source file
    #[must_use]
    pub fn header(&self) -> String {
        match &self.description {
            Some(description) => format!("{} {description}", self.name),
            None => self.name.clone(),
        }
    }

    /// Sequence length in bases
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_with_description() {
        let mut record = FastaRecord::new("FBtr0070000", "ACGT");
        record.description = Some("type=mRNA; parent=FBgn0025837;".to_string());
        assert_eq!(record.header(), "FBtr0070000 type=mRNA; parent=FBgn0025837;");
    }

    #[test]
    fn test_header_without_description() {
        let record = FastaRecord::new("FBtr0070000", "ACGT");
        assert_eq!(record.header(), "FBtr0070000");
    }

    #[test]
    fn test_len() {
        let record = FastaRecord::new("FBtr0070000", "ACGTAC");
        assert_eq!(record.len(), 6);
        assert!(!record.is_empty());
        assert!(FastaRecord::new("x", "").is_empty());
    }
}
