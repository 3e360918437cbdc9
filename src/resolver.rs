//! Build-configuration resolution
//!
//! Turns an [`Environment`] into an ordered [`BuildDirectiveSet`] in one
//! pass:
//! 1. toolchain, presym, compiler output path
//! 2. component references, all on one shared revision
//! 3. `DISABLE_MRUBY`
//! 4. debug or release branch (debug rewrites the flag set)
//! 5. allocator and feature macros, including `MAX_SYMBOLS_COUNT`
//! 6. HAL selection
//!
//! Resolution is pure: it reads only the given environment and settings.

use picoruby_directives::{
    BuildDirectiveSet, BuildOption, ComponentReference, Directive, FlagSet, OptionOrigin,
};
use tracing::{debug, warn};

use crate::config::ResolverSettings;
use crate::env::{Environment, DEBUG_TOGGLE_KEY, MAX_SYMBOLS_KEY};
use crate::error::ConfigError;
use crate::hal::resolve_hal;

/// Always defined: this build uses mruby/c, not mruby.
pub const DISABLE_MRUBY: &str = "DISABLE_MRUBY";

/// Defined in debug builds.
pub const DEBUG_DEFINE: &str = "PICORUBY_DEBUG";

/// Defined in release builds.
pub const RELEASE_DEFINE: &str = "NDEBUG";

/// Flags removed from the set in debug builds.
pub const OPTIMIZATION_EXCLUSIONS: &[&str] = &["-g", "-O3"];

/// Flags appended in debug builds, in order.
pub const DEBUG_FLAGS: &[&str] = &["-g3", "-O0"];

/// Allocator and feature macros emitted before `MAX_SYMBOLS_COUNT`.
pub const FEATURE_DEFINES: &[&str] = &[
    "MRBC_ALLOC_LIBC",
    "REGEX_USE_ALLOC_LIBC",
    "MRBC_USE_MATH",
    "MRBC_INT64",
];

/// Name of the numeric symbol-table macro.
pub const MAX_SYMBOLS_DEFINE: &str = "MAX_SYMBOLS_COUNT";

/// Artifact name used for the compiler output-path directive.
pub const COMPILER_ARTIFACT: &str = "mrbc";

/// Resolves environments against a fixed set of settings.
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    settings: ResolverSettings,
}

impl ConfigResolver {
    pub fn new(settings: ResolverSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// Resolve `env` into directives.
    ///
    /// Fails only with [`ConfigError::InvalidHalSelection`]; no partial
    /// directive set is returned in that case.
    pub fn resolve(&self, env: &Environment) -> Result<BuildDirectiveSet, ConfigError> {
        let settings = &self.settings;
        let mut directives = Vec::new();

        directives.push(Directive::Toolchain {
            name: settings.toolchain.clone(),
        });
        directives.push(Directive::DisablePresym);
        directives.push(Directive::OutputPath {
            artifact: COMPILER_ARTIFACT.to_string(),
            path: settings.compiler_path(),
        });

        for component in &settings.components {
            directives.push(Directive::Component(ComponentReference::new(
                component.source.clone(),
                &settings.revision,
                component.role,
            )));
        }

        directives.push(define(DISABLE_MRUBY, OptionOrigin::Fixed));

        let mut flags = FlagSet::with_group(settings.base_flags.iter().cloned());
        if env.contains(DEBUG_TOGGLE_KEY) {
            debug!("debug build");
            directives.push(define(DEBUG_DEFINE, OptionOrigin::DebugBranch));

            flags.flatten();
            directives.push(Directive::FlattenFlags);

            flags.remove_where(|f| OPTIMIZATION_EXCLUSIONS.contains(&f));
            directives.push(Directive::RemoveFlags {
                flags: OPTIMIZATION_EXCLUSIONS.iter().map(|f| f.to_string()).collect(),
            });

            for flag in DEBUG_FLAGS {
                flags.push(*flag);
                directives.push(Directive::AddFlag {
                    flag: flag.to_string(),
                });
            }
        } else {
            directives.push(define(RELEASE_DEFINE, OptionOrigin::ReleaseBranch));
        }

        for name in FEATURE_DEFINES {
            directives.push(define(name, OptionOrigin::Fixed));
        }
        directives.push(Directive::Define(BuildOption::valued(
            MAX_SYMBOLS_DEFINE,
            self.max_symbols(env),
            OptionOrigin::Fixed,
        )));

        let hal = resolve_hal(env)?;
        debug!(hal = %hal, "resolved HAL");
        directives.push(Directive::Define(hal.to_build_option()));

        Ok(BuildDirectiveSet::new(directives, flags, hal))
    }

    /// The override exactly as given, else the settings default.
    fn max_symbols(&self, env: &Environment) -> String {
        match env.get_non_empty(MAX_SYMBOLS_KEY) {
            Some(value) => {
                if value.trim().parse::<u32>().is_err() {
                    warn!(value, "{} is not a non-negative integer", MAX_SYMBOLS_KEY);
                }
                value.to_string()
            }
            None => self.settings.max_symbols_default.to_string(),
        }
    }
}

/// Resolve `env` with built-in settings.
pub fn resolve(env: &Environment) -> Result<BuildDirectiveSet, ConfigError> {
    ConfigResolver::default().resolve(env)
}

fn define(name: &str, origin: OptionOrigin) -> Directive {
    Directive::Define(BuildOption::bare(name, origin))
}
