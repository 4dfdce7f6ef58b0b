//! Configuration management for the command definition validator.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML configuration files (explicit, project, user)

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::ReportFormat;
use crate::validation::Mode;

/// File name looked up in the current directory
pub const PROJECT_CONFIG_FILE: &str = ".cmdcheck.toml";

/// Command-line arguments for the validator
#[derive(Debug, Parser)]
#[command(name = "cmdcheck")]
#[command(about = "Validate the structure of a markdown command definition")]
#[command(version)]
pub struct Args {
    /// Command definition file to validate
    pub path: PathBuf,

    /// Treat advisory findings as failures and enable style checks
    #[arg(long)]
    pub strict: bool,

    /// Report format
    #[arg(long, value_enum, help = "Report format (text, json)")]
    pub format: Option<ReportFormat>,

    /// Explicit configuration file
    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Log level for diagnostics on stderr
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Settings read from a configuration file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub strict: bool,
    pub format: Option<ReportFormat>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Document to validate
    pub path: PathBuf,
    pub mode: Mode,
    pub format: ReportFormat,
    /// Configuration file that was applied, if any
    pub config_file: Option<PathBuf>,
}

impl Config {
    /// Create configuration from explicit arguments, searching the current
    /// directory and the user config directory for a config file
    pub fn from_args(args: Args) -> Result<Self> {
        let mut candidates = Vec::new();
        if let Ok(cwd) = std::env::current_dir() {
            candidates.push(cwd.join(PROJECT_CONFIG_FILE));
        }
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("cmdcheck").join("config.toml"));
        }
        Self::from_args_with_candidates(args, &candidates)
    }

    /// Create configuration with an explicit list of config file candidates
    /// (useful for testing). An explicit `--config` must exist; otherwise
    /// the first existing candidate wins.
    pub fn from_args_with_candidates(args: Args, candidates: &[PathBuf]) -> Result<Self> {
        let config_file = match &args.config {
            Some(explicit) => {
                if !explicit.is_file() {
                    bail!("Config file not found: {}", explicit.display());
                }
                Some(explicit.clone())
            }
            None => candidates.iter().find(|p| p.is_file()).cloned(),
        };

        let file = match &config_file {
            Some(path) => {
                log::debug!("Using config file {}", path.display());
                FileConfig::load(path)?
            }
            None => FileConfig::default(),
        };

        Ok(Config {
            path: args.path,
            mode: Mode {
                strict: args.strict || file.strict,
            },
            format: args.format.or(file.format).unwrap_or_default(),
            config_file,
        })
    }
}
