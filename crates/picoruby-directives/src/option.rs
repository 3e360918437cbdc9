//! Compiler macro definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which resolution step produced a build option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptionOrigin {
    /// Emitted unconditionally.
    Fixed,
    /// Emitted only when the debug toggle is set.
    DebugBranch,
    /// Emitted only when the debug toggle is unset.
    ReleaseBranch,
    /// The hardware-abstraction-layer selection.
    ResolvedHal,
}

/// One compiler macro definition, bare (`NAME`) or valued (`NAME=VALUE`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOption {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    pub origin: OptionOrigin,
}

impl BuildOption {
    /// Create a bare definition.
    pub fn bare(name: impl Into<String>, origin: OptionOrigin) -> Self {
        Self {
            name: name.into(),
            value: None,
            origin,
        }
    }

    /// Create a `NAME=VALUE` definition.
    pub fn valued(name: impl Into<String>, value: impl Into<String>, origin: OptionOrigin) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            origin,
        }
    }

    /// Render as the string a compiler `-D` would receive.
    pub fn render(&self) -> String {
        match &self.value {
            Some(value) => format!("{}={}", self.name, value),
            None => self.name.clone(),
        }
    }
}

impl fmt::Display for BuildOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
