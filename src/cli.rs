use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the token stream of a source file, includes resolved
    Tokens {
        /// Path to the root source file
        file: PathBuf,
    },

    /// Scan a source file and report lexical errors
    Check {
        /// Path to the root source file
        file: PathBuf,
    },
}
