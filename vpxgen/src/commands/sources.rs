use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use vpxgen_cmake::{ARM_SOURCES_FILE, Generator, SOURCES_FILE};
use vpxgen_core::Codegen;
use vpxgen_props::PropsFile;

use super::UnwrapOrExit;
use crate::config::load_config;

#[derive(Args)]
pub struct SourcesCommand {
    /// Path to vpxgen.toml (defaults to ./vpxgen.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the SMP props file (overrides the config)
    #[arg(long)]
    pub props: Option<PathBuf>,

    /// Output directory for the CMake listings (overrides the config)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Preview the generated listings without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl SourcesCommand {
    /// Run the sources command
    pub fn run(&self) -> Result<()> {
        let config = load_config(&self.config)?;
        let props_path = self.props.clone().unwrap_or(config.sources.props);
        let out_dir = self.out_dir.clone().unwrap_or(config.sources.out_dir);

        let props = PropsFile::open(&props_path).unwrap_or_exit();
        let manifest = props.manifest();
        let generator = Generator::new(manifest, props_path.display().to_string());

        if self.dry_run {
            for file in generator.preview() {
                println!("── {} ──", file.path);
                println!("{}", file.content);
            }
            return Ok(());
        }

        generator
            .generate(&out_dir)
            .wrap_err("Failed to generate CMake listings")?;

        println!("Generated {}", out_dir.join(SOURCES_FILE).display());
        println!("  C sources:   {}", manifest.c_sources.len());
        println!("  ASM sources: {}", manifest.asm_sources.len());
        println!("  Headers:     {}", manifest.headers.len());
        println!();
        println!("Generated {}", out_dir.join(ARM_SOURCES_FILE).display());
        println!("  ARM C sources: {}", manifest.generic_c_sources().len());

        Ok(())
    }
}
