//! swbuild - service-worker build and placement tool
//!
//! swbuild compiles (or reads verbatim) a service-worker entry script into a
//! single text artifact, then places that artifact at the output location
//! selected by the operating mode: a development copy under `public/`, a
//! build copy under `build/`, or one of the two canonical worker files that
//! `replace` overwrites and the default `append` mode extends.

pub mod config;
pub mod env;
pub mod error;
pub mod fs;
pub mod pipeline;
pub mod placement;
pub mod producer;

// Re-exports for convenience
pub use config::{BuildConfig, Mode, WorkerKind};
pub use env::{define_map, load_env_file, ENV_PREFIX};
pub use error::{SwError, SwResult};
pub use fs::{FileSystem, LocalFs};
pub use pipeline::{run, RawFlags};
pub use placement::{
    base_name, place, resolve_target, PlacementTarget, Strategy, MESSAGING_PATH,
    SERVICE_WORKER_PATH,
};
pub use producer::{EsbuildProducer, Producer, VerbatimProducer};
