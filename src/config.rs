//! Resolver settings
//!
//! Hardcoded constants for the PicoRuby host build. None of them come from
//! the environment; embedders that need other values build a
//! [`ResolverSettings`] themselves.

use picoruby_directives::{ComponentRole, ComponentSource};

/// Revision every component is pinned to.
pub const DEFAULT_REVISION: &str = "for_prk_firmware_0.9.18";

/// Fallback for the `MAX_SYMBOLS_COUNT` definition.
pub const DEFAULT_MAX_SYMBOLS: u32 = 700;

/// A component declaration; the revision is filled in at resolution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSpec {
    pub role: ComponentRole,
    pub source: ComponentSource,
}

impl ComponentSpec {
    fn github(repo: &str, role: ComponentRole) -> Self {
        Self {
            role,
            source: ComponentSource::Github(repo.to_string()),
        }
    }
}

/// Configuration constants consumed by the resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSettings {
    /// Toolchain name (default: "gcc")
    pub toolchain: String,

    /// Build output directory (default: "build/host")
    pub build_dir: String,

    /// Bytecode compiler executable name (default: "picorbc")
    pub compiler_binary: String,

    /// Revision shared by all components
    pub revision: String,

    /// Fallback for MAX_SYMBOLS_COUNT (default: 700)
    pub max_symbols_default: u32,

    /// Base compiler flags, handed over as one nested group
    pub base_flags: Vec<String>,

    /// Components in declaration order
    pub components: Vec<ComponentSpec>,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            toolchain: "gcc".to_string(),
            build_dir: "build/host".to_string(),
            compiler_binary: "picorbc".to_string(),
            revision: DEFAULT_REVISION.to_string(),
            max_symbols_default: DEFAULT_MAX_SYMBOLS,
            base_flags: [
                "-g",
                "-std=gnu99",
                "-O3",
                "-Wall",
                "-Werror-implicit-function-declaration",
                "-Wdeclaration-after-statement",
                "-Wwrite-strings",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            components: vec![
                ComponentSpec::github("shugo/mruby-mrubyc", ComponentRole::Vm),
                ComponentSpec::github("shugo/mruby-pico-compiler", ComponentRole::Compiler),
                ComponentSpec::github("shugo/mruby-bin-picorbc", ComponentRole::CompilerBin),
                ComponentSpec::github("shugo/mruby-bin-picoruby", ComponentRole::InterpreterBin),
                ComponentSpec::github("shugo/mruby-bin-picoirb", ComponentRole::ReplBin),
            ],
        }
    }
}

impl ResolverSettings {
    /// `<build_dir>/bin/<compiler_binary>`
    pub fn compiler_path(&self) -> String {
        format!(
            "{}/bin/{}",
            self.build_dir.trim_end_matches('/'),
            self.compiler_binary
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let defaults = ResolverSettings::default();
        assert_eq!(defaults.toolchain, "gcc");
        assert_eq!(defaults.revision, "for_prk_firmware_0.9.18");
        assert_eq!(defaults.max_symbols_default, 700);
        assert_eq!(defaults.components.len(), 5);
        assert!(defaults.base_flags.contains(&"-O3".to_string()));
    }

    #[test]
    fn test_compiler_path() {
        let mut settings = ResolverSettings::default();
        assert_eq!(settings.compiler_path(), "build/host/bin/picorbc");

        settings.build_dir = "/tmp/out/".to_string();
        assert_eq!(settings.compiler_path(), "/tmp/out/bin/picorbc");
    }

    #[test]
    fn test_component_roles_in_order() {
        let roles: Vec<ComponentRole> = ResolverSettings::default()
            .components
            .iter()
            .map(|c| c.role)
            .collect();
        assert_eq!(
            roles,
            vec![
                ComponentRole::Vm,
                ComponentRole::Compiler,
                ComponentRole::CompilerBin,
                ComponentRole::InterpreterBin,
                ComponentRole::ReplBin,
            ]
        );
    }
}
