//! Artifact producers
//!
//! The placement engine consumes a single text artifact; these strategies
//! produce it. [`VerbatimProducer`] reads the entry file as-is (the
//! `--skip-compile` path), while [`EsbuildProducer`] bundles it through the
//! external `esbuild` binary with define-based environment injection.

use std::collections::BTreeMap;
use std::path::Path;
use std::process::Command;

use crate::error::{SwError, SwResult};

/// Produces the text artifact for a given entry file
pub trait Producer {
    /// Produce the artifact, or fail with config-independent diagnostics
    fn produce(&self, entry: &Path, defines: &BTreeMap<String, String>) -> SwResult<String>;
}

/// Reads the entry file verbatim, skipping compilation entirely
#[derive(Debug, Clone, Copy, Default)]
pub struct VerbatimProducer;

impl Producer for VerbatimProducer {
    fn produce(&self, entry: &Path, _defines: &BTreeMap<String, String>) -> SwResult<String> {
        std::fs::read_to_string(entry).map_err(|e| SwError::io(entry, e))
    }
}

/// Bundles the entry file through the external `esbuild` binary
///
/// Warnings are escalated to errors: any stderr output fails the build even
/// when esbuild exits zero, so diagnostics never pass silently.
#[derive(Debug, Clone, Copy, Default)]
pub struct EsbuildProducer;

impl Producer for EsbuildProducer {
    fn produce(&self, entry: &Path, defines: &BTreeMap<String, String>) -> SwResult<String> {
        let mut cmd = Command::new("esbuild");
        cmd.arg(entry).arg("--bundle").arg("--log-level=warning");
        for (key, value) in defines {
            cmd.arg(format!("--define:{key}={value}"));
        }

        let output = cmd.output().map_err(|e| SwError::io(entry, e))?;
        let diagnostics = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() || !diagnostics.trim().is_empty() {
            return Err(SwError::Compile {
                entry: entry.to_path_buf(),
                diagnostics: diagnostics.into_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
