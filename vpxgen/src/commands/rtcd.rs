use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use vpxgen_core::Codegen;
use vpxgen_rtcd::Generator;

use crate::config::load_config;

#[derive(Args)]
pub struct RtcdCommand {
    /// Path to vpxgen.toml (defaults to ./vpxgen.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory holding the x86_64 RTCD headers (overrides the config)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output directory for the flattened headers (overrides the config)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Preview the flattened headers without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl RtcdCommand {
    /// Run the rtcd command
    pub fn run(&self) -> Result<()> {
        let config = load_config(&self.config)?;
        let input_dir = self.input_dir.clone().unwrap_or(config.rtcd.input_dir);
        let out_dir = self.out_dir.clone().unwrap_or(config.rtcd.out_dir);

        let generator = Generator::from_dir(&input_dir)?;
        for name in generator.missing() {
            eprintln!("warning: {} not found in {}", name, input_dir.display());
        }

        if self.dry_run {
            for file in generator.preview() {
                println!("── {} ──", file.path);
                println!("{}", file.content);
            }
            return Ok(());
        }

        let result = generator
            .generate(&out_dir)
            .wrap_err("Failed to generate RTCD headers")?;

        for file in &result.written {
            println!("Generated {}", out_dir.join(file).display());
        }

        Ok(())
    }
}
