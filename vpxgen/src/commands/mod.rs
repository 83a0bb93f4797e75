mod check;
mod completions;
mod rtcd;
mod sources;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use rtcd::RtcdCommand;
use sources::SourcesCommand;

/// Extension trait for exiting on props errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for vpxgen_props::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "vpxgen")]
#[command(version)]
#[command(about = "Generate build files for the vendored libvpx library")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Sources(cmd) => cmd.run(),
            Commands::Rtcd(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Extract CMake source listings from the SMP props file
    Sources(SourcesCommand),

    /// Flatten the x86_64 RTCD headers for a generic-C ARM build
    Rtcd(RtcdCommand),

    /// Validate the props file without generating anything
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
