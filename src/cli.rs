use std::path::PathBuf;

use clap::Parser;

/// swbuild - service-worker build and placement tool
#[derive(Parser, Debug)]
#[command(name = "swbuild")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the service-worker entry script
    pub file: PathBuf,

    /// Use the entry file verbatim instead of bundling it
    #[arg(short = 's', long)]
    pub skip_compile: bool,

    /// Path to an environment definition file (KEY=VALUE lines)
    #[arg(short = 'e', long)]
    pub env: Option<PathBuf>,

    /// Canonical worker file targeted by replace/append (sw or fcm)
    #[arg(short = 't', long = "type")]
    pub kind: Option<String>,

    /// Output mode (dev, build or replace; append when omitted)
    #[arg(short = 'm', long)]
    pub mode: Option<String>,
}
