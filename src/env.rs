//! Environment definition files
//!
//! Parses `KEY=VALUE` definition files and turns them into the define map
//! handed to the bundler. Only keys carrying the `SW_APP_` prefix are
//! exposed to the bundled script; values are JSON-encoded so they land as
//! string literals after substitution.

use std::collections::BTreeMap;
use std::path::Path;

use crate::config::Mode;
use crate::error::{SwError, SwResult};

/// Only variables with this prefix are injected into the bundle
pub const ENV_PREFIX: &str = "SW_APP_";

/// Parse a `KEY=VALUE` environment definition file
///
/// Blank lines and `#` comments are skipped; matching surrounding quotes
/// around a value are stripped.
pub fn load_env_file(path: &Path) -> SwResult<BTreeMap<String, String>> {
    let content = std::fs::read_to_string(path).map_err(|e| SwError::io(path, e))?;
    let mut vars = BTreeMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            vars.insert(key.trim().to_string(), unquote(value.trim()).to_string());
        }
    }
    Ok(vars)
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Build the bundler define map from parsed variables and the build mode
///
/// Keys are namespaced as `process.env.<KEY>` and filtered to the
/// [`ENV_PREFIX`] convention; `process.env.NODE_ENV` is always injected from
/// the mode, replacing any ambient-environment reliance.
pub fn define_map(vars: &BTreeMap<String, String>, mode: Mode) -> BTreeMap<String, String> {
    let mut defines = BTreeMap::new();
    for (key, value) in vars {
        if key.starts_with(ENV_PREFIX) {
            defines.insert(
                format!("process.env.{key}"),
                serde_json::Value::String(value.clone()).to_string(),
            );
        }
    }
    defines.insert(
        "process.env.NODE_ENV".to_string(),
        serde_json::Value::String(mode.node_env().to_string()).to_string(),
    );
    defines
}
