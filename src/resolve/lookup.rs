use std::collections::HashSet;
use std::io::{self, Write};

use crate::index::alias::AliasIndex;

/// Outcome of resolving one submitted key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The key is already a current primary ID
    Current,
    /// The key resolved through the alias index to these primaries (sorted)
    Matched(Vec<String>),
    /// The key is unknown
    Miss,
}

/// How resolved lines are rendered.
///
/// The ID updater joins multiple primaries with tabs and marks misses with a
/// `None` column; symbol lookup joins with commas and echoes misses bare.
#[derive(Debug, Clone, Copy)]
pub struct OutputStyle {
    join: &'static str,
    miss_marker: Option<&'static str>,
}

impl OutputStyle {
    /// Tab-joined matches, misses reported as `KEY\tNone`
    #[must_use]
    pub fn tab_separated() -> Self {
        Self {
            join: "\t",
            miss_marker: Some("None"),
        }
    }

    /// Comma-joined matches, misses echoed as the bare key
    #[must_use]
    pub fn comma_joined() -> Self {
        Self {
            join: ",",
            miss_marker: None,
        }
    }
}

/// Counts accumulated over one resolution run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveStats {
    pub total: usize,
    pub current: usize,
    pub matched: usize,
    pub missed: usize,
}

/// Resolves submitted keys against an alias index, optionally consulting a
/// current-ID set first.
///
/// With a current set attached (ID updating), a key found there is answered
/// immediately and the alias index is never consulted for it. Without one
/// (symbol lookup), every key goes straight to the index.
pub struct Resolver<'a> {
    index: &'a AliasIndex,
    current: Option<&'a HashSet<String>>,
    style: OutputStyle,
}

impl<'a> Resolver<'a> {
    #[must_use]
    pub fn new(index: &'a AliasIndex, style: OutputStyle) -> Self {
        Self {
            index,
            current: None,
            style,
        }
    }

    /// Consult `current` before the alias index
    #[must_use]
    pub fn with_current(mut self, current: &'a HashSet<String>) -> Self {
        self.current = Some(current);
        self
    }

    /// Resolve a single key
    #[must_use]
    pub fn resolve(&self, key: &str) -> Resolution {
        if let Some(current) = self.current {
            if current.contains(key) {
                return Resolution::Current;
            }
        }
        match self.index.get(key) {
            Some(primaries) => Resolution::Matched(primaries.iter().cloned().collect()),
            None => Resolution::Miss,
        }
    }

    /// Render a resolved key as one output line (without trailing newline).
    ///
    /// A current key is echoed bare: it needs no update.
    #[must_use]
    pub fn format_line(&self, key: &str, resolution: &Resolution) -> String {
        match resolution {
            Resolution::Current => key.to_string(),
            Resolution::Matched(primaries) => {
                format!("{key}\t{}", primaries.join(self.style.join))
            }
            Resolution::Miss => match self.style.miss_marker {
                Some(marker) => format!("{key}\t{marker}"),
                None => key.to_string(),
            },
        }
    }

    /// Resolve every key in `keys`, writing one line per key to `out`.
    ///
    /// Keys are processed in the order given; duplicates produce duplicate
    /// lines.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn resolve_all<I, W>(&self, keys: I, out: &mut W) -> io::Result<ResolveStats>
    where
        I: IntoIterator<Item = String>,
        W: Write,
    {
        let mut stats = ResolveStats::default();
        for key in keys {
            let resolution = self.resolve(&key);
            stats.total += 1;
            match resolution {
                Resolution::Current => stats.current += 1,
                Resolution::Matched(_) => stats.matched += 1,
                Resolution::Miss => stats.missed += 1,
            }
            writeln!(out, "{}", self.format_line(&key, &resolution))?;
        }
        Ok(stats)
    }
}
