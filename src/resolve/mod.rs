//! Resolution of submitted keys against built indexes.
//!
//! [`lookup`] answers "what does this key map to now" for ID updating and
//! symbol lookup, writing one output line per submitted key. [`extract`]
//! pulls FASTA records out of a [`FastaStore`](crate::index::FastaStore)
//! for a set of IDs.

pub mod extract;
pub mod lookup;

pub use extract::{extract_records, ExtractError, SequenceLayout};
pub use lookup::{OutputStyle, Resolution, ResolveStats, Resolver};
