//! Single-shot build pipeline
//!
//! Resolves configuration, produces the artifact, and places it. Each step
//! must complete before the next begins; every failure is terminal for the
//! invocation. Flag validation runs first, so a bad `--mode`/`--type` never
//! triggers a partial compile.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::BuildConfig;
use crate::env::{define_map, load_env_file};
use crate::error::SwResult;
use crate::fs::FileSystem;
use crate::placement::{place, PlacementTarget};
use crate::producer::Producer;

/// Unvalidated CLI input, normalized into a [`BuildConfig`] by the run
#[derive(Debug, Clone, Default)]
pub struct RawFlags {
    pub entry: PathBuf,
    pub skip_compile: bool,
    pub env_file: Option<PathBuf>,
    pub mode: Option<String>,
    pub kind: Option<String>,
}

/// Run one compile-and-place invocation, returning the written target
pub fn run<F, P>(flags: &RawFlags, fs: &F, producer: &P) -> SwResult<PlacementTarget>
where
    F: FileSystem,
    P: Producer,
{
    let config = BuildConfig::resolve(flags)?;

    let vars = match &config.env_path {
        Some(path) => load_env_file(path)?,
        None => BTreeMap::new(),
    };
    let defines = define_map(&vars, config.mode);

    let artifact = producer.produce(&flags.entry, &defines)?;

    let entry_name = flags.entry.to_string_lossy();
    place(fs, &artifact, &entry_name, &config)
}
