//! PicoRuby build-configuration resolver
//!
//! Turns environment toggles (debug build, symbol-table size, HAL
//! selection) into a validated, ordered set of build directives
//! for the PicoRuby/mruby-c host build. Nothing is compiled here; the
//! directive set is handed to an external toolchain invoker.

pub mod config;
pub mod env;
pub mod error;
pub mod hal;
pub mod resolver;

pub use config::{ComponentSpec, ResolverSettings};
pub use env::Environment;
pub use error::ConfigError;
pub use hal::resolve_hal;
pub use resolver::{resolve, ConfigResolver};

pub use picoruby_directives::{
    BuildDirectiveSet, BuildOption, ComponentReference, ComponentRole, ComponentSource, Directive,
    FlagSet, HalSelection, OptionOrigin,
};
