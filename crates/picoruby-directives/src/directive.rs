//! Individual build directives.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::component::ComponentReference;
use crate::option::BuildOption;

/// One atomic unit of resolver output, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Directive {
    /// Select the toolchain (e.g. `gcc`).
    Toolchain { name: String },

    /// Build without mruby's pre-computed symbol table.
    DisablePresym,

    /// Where a produced artifact lands.
    OutputPath { artifact: String, path: String },

    /// Pull in an external component.
    Component(ComponentReference),

    /// Add a compiler macro definition.
    Define(BuildOption),

    /// Splice nested flag groups into the top-level flag list.
    FlattenFlags,

    /// Drop every accumulated flag equal to one of `flags`.
    RemoveFlags { flags: Vec<String> },

    /// Append one flag.
    AddFlag { flag: String },
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::Toolchain { name } => write!(f, "toolchain {}", name),
            Directive::DisablePresym => write!(f, "disable-presym"),
            Directive::OutputPath { artifact, path } => write!(f, "output {} {}", artifact, path),
            Directive::Component(component) => write!(f, "gem {}", component),
            Directive::Define(option) => write!(f, "define {}", option),
            Directive::FlattenFlags => write!(f, "flags flatten"),
            Directive::RemoveFlags { flags } => write!(f, "flags remove {}", flags.join(" ")),
            Directive::AddFlag { flag } => write!(f, "flags add {}", flag),
        }
    }
}
