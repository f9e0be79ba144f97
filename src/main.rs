//! swbuild CLI - service-worker build and placement tool
//!
//! Usage: swbuild <FILE> [-s] [-e <path>] [-t sw|fcm] [-m dev|build|replace]
//!
//! Bundles (or reads verbatim with -s) the entry script, then places the
//! result according to the mode: public/ copy, build/ copy, or one of the
//! canonical worker files, which the default mode appends to.

mod cli;

use anyhow::Result;
use clap::Parser;

use swbuild::{run, EsbuildProducer, LocalFs, RawFlags, Strategy, VerbatimProducer};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let flags = RawFlags {
        entry: cli.file,
        skip_compile: cli.skip_compile,
        env_file: cli.env,
        mode: cli.mode,
        kind: cli.kind,
    };

    let fs = LocalFs::new();
    let target = if flags.skip_compile {
        run(&flags, &fs, &VerbatimProducer)?
    } else {
        run(&flags, &fs, &EsbuildProducer)?
    };

    let action = match target.strategy {
        Strategy::Overwrite => "wrote",
        Strategy::Append => "appended to",
    };
    println!("✨ {} {}", action, target.path.display());

    Ok(())
}
