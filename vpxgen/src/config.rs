//! Optional `vpxgen.toml` configuration.
//!
//! Every path the original one-shot scripts hard-coded is a default here;
//! the config file overrides the defaults and explicit CLI flags override
//! both.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use serde::Deserialize;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG: &str = "vpxgen.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub sources: SourcesConfig,

    #[serde(default)]
    pub rtcd: RtcdConfig,
}

/// Paths for the `sources` subcommand.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourcesConfig {
    /// The SMP props file inside the vendored checkout
    #[serde(default = "default_props")]
    pub props: PathBuf,

    /// Where the CMake listings are written
    #[serde(default = "default_cmake_out")]
    pub out_dir: PathBuf,
}

/// Paths for the `rtcd` subcommand.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RtcdConfig {
    /// Directory holding the pre-generated x86_64 RTCD headers
    #[serde(default = "default_rtcd_input")]
    pub input_dir: PathBuf,

    /// Where the flattened generic-C headers are written
    #[serde(default = "default_rtcd_out")]
    pub out_dir: PathBuf,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            props: default_props(),
            out_dir: default_cmake_out(),
        }
    }
}

impl Default for RtcdConfig {
    fn default() -> Self {
        Self {
            input_dir: default_rtcd_input(),
            out_dir: default_rtcd_out(),
        }
    }
}

fn default_props() -> PathBuf {
    PathBuf::from("libvpx/SMP/libvpx_files.props")
}

fn default_cmake_out() -> PathBuf {
    PathBuf::from("cmake")
}

fn default_rtcd_input() -> PathBuf {
    PathBuf::from("libvpx/SMP/x86_64")
}

fn default_rtcd_out() -> PathBuf {
    PathBuf::from("config/macos_arm64")
}

impl Config {
    /// Load configuration from `path`.
    ///
    /// A missing file yields the defaults unless the path was explicitly
    /// requested on the command line.
    pub fn load(path: &Path, explicit: bool) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content)
                .wrap_err_with(|| format!("failed to parse {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !explicit => {
                Ok(Self::default())
            }
            Err(e) => {
                Err(e).wrap_err_with(|| format!("failed to read {}", path.display()))
            }
        }
    }
}

/// Resolve the `--config` argument into a loaded configuration.
pub fn load_config(arg: &Option<PathBuf>) -> Result<Config> {
    match arg {
        Some(path) => Config::load(path, true),
        None => Config::load(Path::new(DEFAULT_CONFIG), false),
    }
}
