//! HAL selection from environment keys
//!
//! Exactly one HAL is selected per build:
//! - no `MRBC_USE_HAL*` key: POSIX
//! - `MRBC_USE_HAL=<value>`: explicit, the value is carried through
//! - `MRBC_USE_HAL_<NAME>`: named, the value is ignored
//! - anything else with the prefix: rejected
//!
//! With several matching keys only the lexicographically smallest is
//! considered and the rest are ignored. Failing outright on multiple HAL
//! keys would be stricter; callers currently get a debug event only.

use picoruby_directives::hal::{HAL_NAMED_PREFIX, HAL_PREFIX};
use picoruby_directives::HalSelection;
use tracing::debug;

use crate::env::Environment;
use crate::error::ConfigError;

/// Pick the HAL for `env`.
pub fn resolve_hal(env: &Environment) -> Result<HalSelection, ConfigError> {
    let mut keys = env.keys_with_prefix(HAL_PREFIX);
    let Some(key) = keys.next() else {
        return Ok(HalSelection::Posix);
    };

    let ignored: Vec<&str> = keys.collect();
    if !ignored.is_empty() {
        debug!(selected = key, ?ignored, "multiple HAL keys present");
    }

    classify_hal_key(key, env.get(key).unwrap_or_default())
}

/// Classify a single key known to start with the HAL prefix.
pub fn classify_hal_key(key: &str, value: &str) -> Result<HalSelection, ConfigError> {
    if key == HAL_PREFIX {
        Ok(HalSelection::Explicit {
            name: key.to_string(),
            value: value.to_string(),
        })
    } else if key.starts_with(HAL_NAMED_PREFIX) {
        Ok(HalSelection::Named {
            name: key.to_string(),
        })
    } else {
        Err(ConfigError::InvalidHalSelection {
            key: key.to_string(),
        })
    }
}
