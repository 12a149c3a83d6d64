use std::sync::LazyLock;

use regex::Regex;

/// Accession prefix for genes
pub const GENE_PREFIX: &str = "FBgn";

/// Accession prefix for transcripts
pub const TRANSCRIPT_PREFIX: &str = "FBtr";

/// Accession prefix for alleles
pub const ALLELE_PREFIX: &str = "FBal";

/// Accession prefix for transgenic constructs
pub const CONSTRUCT_PREFIX: &str = "FBtp";

/// Strict FlyBase accession pattern: `FB`, two letters, digits.
/// Surrounding whitespace is tolerated so raw input lines can be tested
/// before trimming.
static ACCESSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*FB[A-Za-z]{2}\d+\s*$").expect("valid pattern"));

/// Check whether a string is a FlyBase accession.
///
/// ```
/// use fbtools::core::accession::is_flybase_id;
///
/// assert!(is_flybase_id("FBgn0000490"));
/// assert!(is_flybase_id("  FBtr0070000  "));
/// assert!(!is_flybase_id("wg"));
/// ```
#[must_use]
pub fn is_flybase_id(s: &str) -> bool {
    ACCESSION.is_match(s)
}
