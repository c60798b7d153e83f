use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// distmodel - flattens distribution overlay models into IDE artifact descriptors
#[derive(Parser, Debug)]
#[command(name = "distmodel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// NDJSON output for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Flatten, prune, and write reports and artifact descriptors
    Run {
        /// Config file (defaults to ./distmodel.toml, then the user config)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// VFS document, overriding the config
        #[arg(long)]
        document: Option<PathBuf>,

        /// Output directory, overriding the config
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Flatten one subtree and print its tree report
    Flatten {
        /// VFS document
        #[arg(short, long)]
        input: PathBuf,

        /// Path of the subtree inside the document
        #[arg(short, long)]
        path: String,

        /// Write the flattened subtree as a VFS document instead
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decode and link a VFS document without flattening it
    Check {
        /// VFS document
        #[arg(short, long)]
        input: PathBuf,
    },
}
