//! Placement engine
//!
//! Maps a (config, artifact, entry file name) triple to a completed
//! filesystem write, choosing among four mutually exclusive strategies:
//!
//! | mode    | destination                    | strategy  |
//! |---------|--------------------------------|-----------|
//! | dev     | `public/<basename>`            | overwrite |
//! | build   | `build/<basename>`             | overwrite |
//! | replace | canonical path per `--type`    | overwrite |
//! | append  | canonical path per `--type`    | append    |
//!
//! Path resolution is pure ([`resolve_target`]); only [`place`] touches the
//! file system, and it writes exactly one destination per invocation.

use std::path::{Path, PathBuf};

use crate::config::{BuildConfig, Mode, WorkerKind};
use crate::error::SwResult;
use crate::fs::FileSystem;

/// Default canonical service-worker path (`--type sw`, or unset)
pub const SERVICE_WORKER_PATH: &str = "build/service-worker.js";

/// Canonical push-messaging worker path (`--type fcm`)
pub const MESSAGING_PATH: &str = "build/firebase-messaging-sw.js";

/// How prior content at the destination is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Replace the destination file wholesale
    Overwrite,
    /// Read the existing file and write back `existing + artifact`
    Append,
}

/// A resolved destination path plus write strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementTarget {
    pub path: PathBuf,
    pub strategy: Strategy,
}

/// Strip directory components from the entry file name, keeping the extension
pub fn base_name(entry_name: &str) -> String {
    Path::new(entry_name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| entry_name.to_string())
}

fn canonical_path(kind: WorkerKind) -> PathBuf {
    match kind {
        WorkerKind::ServiceWorker => PathBuf::from(SERVICE_WORKER_PATH),
        WorkerKind::Messaging => PathBuf::from(MESSAGING_PATH),
    }
}

/// Resolve the destination and write strategy for an invocation
///
/// Pure and deterministic: same config and entry name always yield the same
/// target, and no I/O happens here.
pub fn resolve_target(config: &BuildConfig, entry_name: &str) -> PlacementTarget {
    match config.mode {
        Mode::Dev => PlacementTarget {
            path: Path::new("public").join(base_name(entry_name)),
            strategy: Strategy::Overwrite,
        },
        Mode::Build => PlacementTarget {
            path: Path::new("build").join(base_name(entry_name)),
            strategy: Strategy::Overwrite,
        },
        Mode::Replace => PlacementTarget {
            path: canonical_path(config.kind),
            strategy: Strategy::Overwrite,
        },
        Mode::Append => PlacementTarget {
            path: canonical_path(config.kind),
            strategy: Strategy::Append,
        },
    }
}

/// Persist the artifact at its resolved destination
///
/// Append mode requires the canonical file to already exist: the read error
/// propagates and nothing is created. Concatenation is plain text with no
/// separator and no awareness of script syntax, so appending twice grows the
/// file twice. A failed write leaves prior file state untouched since every
/// write is a single whole-file write.
pub fn place<F: FileSystem>(
    fs: &F,
    artifact: &str,
    entry_name: &str,
    config: &BuildConfig,
) -> SwResult<PlacementTarget> {
    let target = resolve_target(config, entry_name);
    match target.strategy {
        Strategy::Overwrite => fs.write(&target.path, artifact)?,
        Strategy::Append => {
            let existing = fs.read_to_string(&target.path)?;
            fs.write(&target.path, &format!("{existing}{artifact}"))?;
        }
    }
    Ok(target)
}
