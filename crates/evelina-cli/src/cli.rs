use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "evelina", about = "Evelina embed script toolkit")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/evelina.toml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a JSON embed into an embed script
    Encode {
        /// Input file, stdin when omitted or `-`
        input: Option<PathBuf>,
    },
    /// Decode an embed script into JSON
    Decode { input: Option<PathBuf> },
    /// Render a script as preview HTML with sample placeholder data
    Preview { input: Option<PathBuf> },
    /// Build the Discord message payload for a script
    Payload {
        input: Option<PathBuf>,
        /// Keep placeholders instead of filling them from preview data
        #[arg(long)]
        raw: bool,
    },
}
