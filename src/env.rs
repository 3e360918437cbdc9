//! Environment input snapshot
//!
//! The resolver never reads process state itself; callers hand it an
//! [`Environment`]. Keys are case-sensitive and iterate in lexicographic
//! order, which makes every scan over them deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Bound;

/// Enables the debug branch when present, whatever its value.
pub const DEBUG_TOGGLE_KEY: &str = "PICORUBY_DEBUG_BUILD";

/// Overrides the `MAX_SYMBOLS_COUNT` definition.
pub const MAX_SYMBOLS_KEY: &str = "MAX_SYMBOLS_COUNT";

/// Case-sensitive string mapping, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment.
    ///
    /// Entries that are not valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// The value as given, or `None` if absent or whitespace only.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.trim().is_empty())
    }

    /// Whether `key` is present at all; an empty value still counts.
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Keys starting with `prefix`, smallest first.
    pub fn keys_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.vars
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .map(|(k, _)| k.as_str())
            .take_while(move |k| k.starts_with(prefix))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Environment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_presence() {
        let env = Environment::new()
            .with("A", "")
            .with("B", "0")
            .with("C", "false");
        for key in ["A", "B", "C"] {
            assert!(env.contains(key), "{} should be present", key);
        }
        assert!(!env.contains("MISSING"));
        assert!(!env.contains("a"));
    }

    #[test]
    fn test_get_non_empty() {
        let env = Environment::new()
            .with("EMPTY", "")
            .with("BLANK", "   ")
            .with("SET", " 512 ");
        assert_eq!(env.get_non_empty("EMPTY"), None);
        assert_eq!(env.get_non_empty("BLANK"), None);
        assert_eq!(env.get_non_empty("SET"), Some(" 512 "));
        assert_eq!(env.get_non_empty("MISSING"), None);
    }

    #[test]
    fn test_keys_with_prefix_sorted() {
        let env: Environment = [
            ("MRBC_USE_HAL_RP2040", "1"),
            ("PATH", "/usr/bin"),
            ("MRBC_USE_HAL", "x"),
            ("MRBC_USE_HAL_ESP32", "1"),
            ("MRBC_USE", "nope"),
        ]
        .into_iter()
        .collect();

        let keys: Vec<&str> = env.keys_with_prefix("MRBC_USE_HAL").collect();
        assert_eq!(
            keys,
            vec!["MRBC_USE_HAL", "MRBC_USE_HAL_ESP32", "MRBC_USE_HAL_RP2040"]
        );
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let env = Environment::new().with("mrbc_use_hal_posix", "1");
        assert_eq!(env.keys_with_prefix("MRBC_USE_HAL").count(), 0);
    }
}
