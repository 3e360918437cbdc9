//! Ordered compiler flag collection
//!
//! A toolchain hands over its base flags as a single nested group, so the
//! set holds either loose tokens or groups of entries. Removal only looks at
//! loose tokens; call [`FlagSet::flatten`] first to make grouped tokens
//! eligible.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry in a [`FlagSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagEntry {
    Token(String),
    Group(Vec<FlagEntry>),
}

impl FlagEntry {
    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            FlagEntry::Token(token) => out.push(token),
            FlagEntry::Group(entries) => {
                for entry in entries {
                    entry.collect_tokens(out);
                }
            }
        }
    }

    fn flatten_into(self, out: &mut Vec<FlagEntry>) {
        match self {
            FlagEntry::Token(_) => out.push(self),
            FlagEntry::Group(entries) => {
                for entry in entries {
                    entry.flatten_into(out);
                }
            }
        }
    }
}

/// Ordered flag sequence with append and predicate removal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagSet {
    entries: Vec<FlagEntry>,
}

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set whose only entry is one nested group of `tokens`.
    pub fn with_group<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        set.push_group(tokens);
        set
    }

    /// Append a loose token.
    pub fn push(&mut self, token: impl Into<String>) {
        self.entries.push(FlagEntry::Token(token.into()));
    }

    /// Append a nested group of tokens.
    pub fn push_group<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let group = tokens
            .into_iter()
            .map(|t| FlagEntry::Token(t.into()))
            .collect();
        self.entries.push(FlagEntry::Group(group));
    }

    /// Splice every nested group in place, recursively, preserving order.
    pub fn flatten(&mut self) {
        let mut flat = Vec::with_capacity(self.entries.len());
        for entry in std::mem::take(&mut self.entries) {
            entry.flatten_into(&mut flat);
        }
        self.entries = flat;
    }

    /// Drop every loose token matching `predicate`. Returns how many went.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&str) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(|entry| match entry {
            FlagEntry::Token(token) => !predicate(token),
            FlagEntry::Group(_) => true,
        });
        before - self.entries.len()
    }

    /// True if `token` appears anywhere, including inside groups.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens().iter().any(|t| *t == token)
    }

    /// True when no nested groups remain.
    pub fn is_flat(&self) -> bool {
        self.entries
            .iter()
            .all(|entry| matches!(entry, FlagEntry::Token(_)))
    }

    /// All tokens in order, groups expanded.
    pub fn tokens(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for entry in &self.entries {
            entry.collect_tokens(&mut out);
        }
        out
    }

    /// Top-level entries as stored.
    pub fn entries(&self) -> &[FlagEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> FlagSet {
        FlagSet::with_group(["-g", "-std=gnu99", "-O3", "-Wall"])
    }

    #[test]
    fn test_group_is_one_entry() {
        let set = base();
        assert_eq!(set.entries().len(), 1);
        assert!(!set.is_flat());
        assert_eq!(set.tokens(), vec!["-g", "-std=gnu99", "-O3", "-Wall"]);
    }

    #[test]
    fn test_remove_skips_groups_until_flattened() {
        let mut set = base();
        let removed = set.remove_where(|f| f == "-O3");
        assert_eq!(removed, 0);
        assert!(set.contains("-O3"));

        set.flatten();
        let removed = set.remove_where(|f| f == "-O3");
        assert_eq!(removed, 1);
        assert!(!set.contains("-O3"));
    }

    #[test]
    fn test_flatten_preserves_order() {
        let mut set = FlagSet::new();
        set.push("-first");
        set.push_group(["-a", "-b"]);
        set.push("-last");
        set.flatten();

        assert!(set.is_flat());
        assert_eq!(set.tokens(), vec!["-first", "-a", "-b", "-last"]);
    }

    #[test]
    fn test_flatten_nested_groups() {
        let mut set = FlagSet {
            entries: vec![FlagEntry::Group(vec![
                FlagEntry::Token("-x".into()),
                FlagEntry::Group(vec![FlagEntry::Token("-y".into())]),
            ])],
        };
        set.flatten();
        assert_eq!(set.entries().len(), 2);
        assert_eq!(set.to_string(), "-x -y");
    }

    #[test]
    fn test_removed_token_can_be_readded() {
        let mut set = base();
        set.flatten();
        set.remove_where(|f| f == "-g");
        assert!(!set.contains("-g"));

        set.push("-g");
        assert!(set.contains("-g"));
    }

    #[test]
    fn test_serializes_nested_arrays() {
        let mut set = FlagSet::with_group(["-g", "-O3"]);
        set.push("-O0");
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"[["-g","-O3"],"-O0"]"#);

        let parsed: FlagSet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, set);
    }
}
