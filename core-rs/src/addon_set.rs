//! Immutable set of addon names loaded from one data file

use std::collections::HashSet;

/// Comment marker; only checked against the first character of a raw line
pub const COMMENT_MARKER: char = '#';

/// Set of addon names for one series/edition (or their union).
///
/// Registries hand these out behind an `Arc`; there is no way to mutate a
/// set once it is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddonSet {
    names: HashSet<String>,
}

impl AddonSet {
    /// Parse a data file body: one name per line, `#` comment lines, padding
    /// trimmed, blank lines dropped.
    pub fn parse(text: &str) -> Self {
        let names = text
            .lines()
            .filter(|line| !line.starts_with(COMMENT_MARKER))
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        AddonSet { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Names in lexical order, for stable output
    pub fn sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.iter().collect();
        names.sort_unstable();
        names
    }

    pub fn union(&self, other: &AddonSet) -> AddonSet {
        AddonSet {
            names: self.names.union(&other.names).cloned().collect(),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for AddonSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        AddonSet {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
