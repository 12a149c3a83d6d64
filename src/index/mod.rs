//! In-memory catalogs built from the FlyBase source files.
//!
//! Every catalog is built by one forward scan of its source file and is
//! immutable afterwards:
//!
//! - [`AliasIndex`]: the shared inverted index from alias keys to sets of
//!   primary keys
//! - [`IdCatalog`]: current FBgn IDs plus the secondary-ID index, from an
//!   `fbgn_annotation_ID` file
//! - [`SymbolCatalog`]: symbol/name/synonym index for one species, from an
//!   `fb_synonym` file
//! - [`FastaStore`]: ordered FASTA records plus a header-key index
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use fbtools::index::IdCatalog;
//!
//! let catalog = IdCatalog::from_path(Path::new("fbgn_annotation_ID.tsv")).unwrap();
//! assert!(catalog.is_current("FBgn0284084") || catalog.secondary_index().contains("FBgn0284084"));
//! ```

pub mod alias;
pub mod fasta_store;
pub mod ids;
pub mod symbols;

pub use alias::AliasIndex;
pub use fasta_store::FastaStore;
pub use ids::IdCatalog;
pub use symbols::SymbolCatalog;
