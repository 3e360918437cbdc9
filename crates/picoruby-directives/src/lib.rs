//! PicoRuby build directive model
//!
//! Defines the ordered directive set handed from the build-configuration
//! resolver to the downstream toolchain invoker.

pub mod component;
pub mod directive;
pub mod error;
pub mod flags;
pub mod hal;
pub mod option;
pub mod set;

pub use component::{ComponentReference, ComponentRole, ComponentSource};
pub use directive::Directive;
pub use error::DirectiveError;
pub use flags::{FlagEntry, FlagSet};
pub use hal::HalSelection;
pub use option::{BuildOption, OptionOrigin};
pub use set::BuildDirectiveSet;

/// Schema identifier embedded in serialized directive sets.
pub const SCHEMA_ID: &str = "picoruby-build/directives@1";

/// Schema version for serialized directive sets.
pub const SCHEMA_VERSION: u32 = 1;
