use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use vpxgen_props::PropsFile;

use super::UnwrapOrExit;
use crate::config::load_config;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to vpxgen.toml (defaults to ./vpxgen.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the SMP props file (overrides the config)
    #[arg(long)]
    pub props: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = load_config(&self.config)?;
        let props_path = self.props.clone().unwrap_or(config.sources.props);

        let props = PropsFile::open(&props_path).unwrap_or_exit();
        let manifest = props.manifest();

        println!("✓ {} is valid\n", props_path.display());
        println!("  C sources:         {}", manifest.c_sources.len());
        println!("  ASM sources:       {}", manifest.asm_sources.len());
        println!("  Headers:           {}", manifest.headers.len());
        println!("  Generic C sources: {}", manifest.generic_c_sources().len());

        Ok(())
    }
}
