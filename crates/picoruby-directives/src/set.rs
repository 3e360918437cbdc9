//! The resolver's complete output.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::component::ComponentReference;
use crate::directive::Directive;
use crate::error::DirectiveError;
use crate::flags::FlagSet;
use crate::hal::HalSelection;
use crate::option::BuildOption;
use crate::{SCHEMA_ID, SCHEMA_VERSION};

/// Ordered directives plus the final flag set and HAL choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildDirectiveSet {
    /// Schema version
    pub schema_version: u32,

    /// Schema identifier
    pub schema_id: String,

    /// Directives in emission order
    pub directives: Vec<Directive>,

    /// Compiler flags after any debug-branch surgery
    pub flags: FlagSet,

    /// The HAL selection (also present as the last `Define`)
    pub hal: HalSelection,
}

impl BuildDirectiveSet {
    pub fn new(directives: Vec<Directive>, flags: FlagSet, hal: HalSelection) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            schema_id: SCHEMA_ID.to_string(),
            directives,
            flags,
            hal,
        }
    }

    /// Macro definitions in emission order.
    pub fn defines(&self) -> impl Iterator<Item = &BuildOption> {
        self.directives.iter().filter_map(|d| match d {
            Directive::Define(option) => Some(option),
            _ => None,
        })
    }

    /// Look up a definition by macro name.
    pub fn define(&self, name: &str) -> Option<&BuildOption> {
        self.defines().find(|option| option.name == name)
    }

    /// Component references in emission order.
    pub fn components(&self) -> impl Iterator<Item = &ComponentReference> {
        self.directives.iter().filter_map(|d| match d {
            Directive::Component(component) => Some(component),
            _ => None,
        })
    }

    /// The selected toolchain, if any was emitted.
    pub fn toolchain(&self) -> Option<&str> {
        self.directives.iter().find_map(|d| match d {
            Directive::Toolchain { name } => Some(name.as_str()),
            _ => None,
        })
    }

    /// Serialize to JSON (pretty printed)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// SHA-256 hex digest of the RFC 8785 (JCS) form.
    ///
    /// Equal inputs always resolve to equal sets, so this is usable as a
    /// build cache key.
    pub fn fingerprint(&self) -> Result<String, DirectiveError> {
        let jcs_bytes = serde_json_canonicalizer::to_vec(self)
            .map_err(|e| DirectiveError::Canonical(e.to_string()))?;

        let mut hasher = Sha256::new();
        hasher.update(&jcs_bytes);
        Ok(hex::encode(hasher.finalize()))
    }

    /// Human-readable listing, one directive per line.
    pub fn to_human(&self) -> String {
        let mut lines: Vec<String> = self.directives.iter().map(|d| d.to_string()).collect();
        lines.push(String::new());
        lines.push(format!("cflags: {}", self.flags));
        lines.push(format!("hal:    {}", self.hal));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{ComponentRole, ComponentSource};
    use crate::option::OptionOrigin;

    fn sample() -> BuildDirectiveSet {
        let directives = vec![
            Directive::Toolchain {
                name: "gcc".to_string(),
            },
            Directive::Component(ComponentReference::new(
                ComponentSource::Github("shugo/mruby-mrubyc".to_string()),
                "main",
                ComponentRole::Vm,
            )),
            Directive::Define(BuildOption::bare("NDEBUG", OptionOrigin::ReleaseBranch)),
            Directive::Define(HalSelection::Posix.to_build_option()),
        ];
        BuildDirectiveSet::new(directives, FlagSet::with_group(["-O3"]), HalSelection::Posix)
    }

    #[test]
    fn test_accessors() {
        let set = sample();
        assert_eq!(set.toolchain(), Some("gcc"));
        assert_eq!(set.components().count(), 1);
        assert_eq!(set.defines().count(), 2);
        assert!(set.define("NDEBUG").is_some());
        assert!(set.define("PICORUBY_DEBUG").is_none());
    }

    #[test]
    fn test_fingerprint_stable() {
        let a = sample().fingerprint().unwrap();
        let b = sample().fingerprint().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_fingerprint_changes_with_content() {
        let mut other = sample();
        other.flags.push("-O0");
        assert_ne!(
            sample().fingerprint().unwrap(),
            other.fingerprint().unwrap()
        );
    }

    #[test]
    fn test_json_round_trip() {
        let set = sample();
        let json = set.to_json().unwrap();
        assert!(json.contains(r#""schema_id": "picoruby-build/directives@1""#));
        let parsed = BuildDirectiveSet::from_json(&json).unwrap();
        assert_eq!(parsed, set);
    }

    #[test]
    fn test_human_listing() {
        let human = sample().to_human();
        assert!(human.starts_with("toolchain gcc\n"));
        assert!(human.contains("gem github:shugo/mruby-mrubyc @ main (vm)"));
        assert!(human.contains("cflags: -O3"));
        assert!(human.ends_with("hal:    MRBC_USE_HAL_POSIX"));
    }
}
