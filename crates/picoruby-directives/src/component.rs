//! Pinned external components (mrbgems).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a component's source lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentSource {
    /// `owner/repo` on GitHub.
    Github(String),
}

impl ComponentSource {
    /// Short component name: the repository part of `owner/repo`.
    pub fn name(&self) -> &str {
        match self {
            ComponentSource::Github(repo) => repo.rsplit('/').next().unwrap_or(repo),
        }
    }
}

impl fmt::Display for ComponentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentSource::Github(repo) => write!(f, "github:{}", repo),
        }
    }
}

/// What a component contributes to the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentRole {
    /// The mruby/c virtual machine.
    Vm,
    /// The bytecode compiler library.
    Compiler,
    /// Standalone compiler executable.
    CompilerBin,
    /// Script runner executable.
    InterpreterBin,
    /// Interactive shell executable.
    ReplBin,
}

impl fmt::Display for ComponentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ComponentRole::Vm => "vm",
            ComponentRole::Compiler => "compiler",
            ComponentRole::CompilerBin => "compiler-bin",
            ComponentRole::InterpreterBin => "interpreter-bin",
            ComponentRole::ReplBin => "repl-bin",
        };
        f.write_str(s)
    }
}

/// A component pinned to a revision. Never mutated after resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentReference {
    pub source: ComponentSource,
    pub revision: String,
    pub role: ComponentRole,
}

impl ComponentReference {
    pub fn new(source: ComponentSource, revision: impl Into<String>, role: ComponentRole) -> Self {
        Self {
            source,
            revision: revision.into(),
            role,
        }
    }

    pub fn name(&self) -> &str {
        self.source.name()
    }
}

impl fmt::Display for ComponentReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {} ({})", self.source, self.revision, self.role)
    }
}
