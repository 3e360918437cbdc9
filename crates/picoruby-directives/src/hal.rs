//! Hardware-abstraction-layer selection.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::option::{BuildOption, OptionOrigin};

/// Prefix shared by every HAL selection key.
pub const HAL_PREFIX: &str = "MRBC_USE_HAL";

/// Prefix of named HAL keys (`MRBC_USE_HAL_<NAME>`).
pub const HAL_NAMED_PREFIX: &str = "MRBC_USE_HAL_";

/// Definition used when no HAL key is given.
pub const HAL_POSIX: &str = "MRBC_USE_HAL_POSIX";

/// The single HAL the build targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HalSelection {
    /// No HAL key present.
    Posix,
    /// `MRBC_USE_HAL_<NAME>`; the key's value is ignored.
    Named { name: String },
    /// The bare `MRBC_USE_HAL` key together with its value.
    Explicit { name: String, value: String },
}

impl HalSelection {
    /// The macro definition carrying this selection.
    pub fn to_build_option(&self) -> BuildOption {
        match self {
            HalSelection::Posix => BuildOption::bare(HAL_POSIX, OptionOrigin::ResolvedHal),
            HalSelection::Named { name } => BuildOption::bare(name, OptionOrigin::ResolvedHal),
            HalSelection::Explicit { name, value } => {
                BuildOption::valued(name, value, OptionOrigin::ResolvedHal)
            }
        }
    }
}

impl fmt::Display for HalSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_build_option().render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posix_define() {
        assert_eq!(HalSelection::Posix.to_string(), "MRBC_USE_HAL_POSIX");
    }

    #[test]
    fn test_named_define() {
        let hal = HalSelection::Named {
            name: "MRBC_USE_HAL_RP2040".to_string(),
        };
        assert_eq!(hal.to_string(), "MRBC_USE_HAL_RP2040");
        assert_eq!(hal.to_build_option().value, None);
    }

    #[test]
    fn test_explicit_define() {
        let hal = HalSelection::Explicit {
            name: HAL_PREFIX.to_string(),
            value: "../../hal/custom".to_string(),
        };
        assert_eq!(hal.to_string(), "MRBC_USE_HAL=../../hal/custom");
        assert_eq!(hal.to_build_option().origin, OptionOrigin::ResolvedHal);
    }
}
