//! Build configuration
//!
//! Validates and normalizes the raw CLI flags into an immutable
//! [`BuildConfig`] before any compilation or file I/O happens. Unrecognized
//! `--mode`/`--type` values are rejected here so an invalid flag combination
//! never triggers a partial compile.

use std::path::PathBuf;

use crate::error::{SwError, SwResult};
use crate::pipeline::RawFlags;

/// Operating mode, the primary discriminant for output placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Overwrite a development copy under `public/`
    Dev,
    /// Overwrite a build copy under `build/`
    Build,
    /// Overwrite the canonical worker file selected by [`WorkerKind`]
    Replace,
    /// Append to the canonical worker file (the default when `--mode` is unset)
    #[default]
    Append,
}

impl Mode {
    const EXPECTED: &'static str = "dev, build, replace, append";

    /// Parse an optional CLI value; `None` resolves to the default
    pub fn resolve(value: Option<&str>) -> SwResult<Self> {
        match value {
            None => Ok(Mode::default()),
            Some("dev") => Ok(Mode::Dev),
            Some("build") => Ok(Mode::Build),
            Some("replace") => Ok(Mode::Replace),
            Some("append") => Ok(Mode::Append),
            Some(other) => Err(SwError::Config {
                flag: "mode",
                value: other.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }

    /// Build-mode flag handed to the bundler as `process.env.NODE_ENV`
    pub fn node_env(&self) -> &'static str {
        match self {
            Mode::Dev => "development",
            _ => "production",
        }
    }
}

/// Which canonical worker file the `replace`/`append` modes target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkerKind {
    /// `build/service-worker.js` (the default when `--type` is unset)
    #[default]
    ServiceWorker,
    /// `build/firebase-messaging-sw.js`
    Messaging,
}

impl WorkerKind {
    const EXPECTED: &'static str = "sw, fcm";

    /// Parse an optional CLI value; `None` resolves to the default
    pub fn resolve(value: Option<&str>) -> SwResult<Self> {
        match value {
            None => Ok(WorkerKind::default()),
            Some("sw") => Ok(WorkerKind::ServiceWorker),
            Some("fcm") => Ok(WorkerKind::Messaging),
            Some(other) => Err(SwError::Config {
                flag: "type",
                value: other.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

/// Immutable per-invocation configuration, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub mode: Mode,
    pub kind: WorkerKind,
    pub env_path: Option<PathBuf>,
    pub skip_compile: bool,
}

impl BuildConfig {
    /// Validate raw CLI flags into a config, failing fast on bad values
    pub fn resolve(flags: &RawFlags) -> SwResult<Self> {
        Ok(BuildConfig {
            mode: Mode::resolve(flags.mode.as_deref())?,
            kind: WorkerKind::resolve(flags.kind.as_deref())?,
            env_path: flags.env_file.clone(),
            skip_compile: flags.skip_compile,
        })
    }
}
