use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::config::{ConfigFile, ScanConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "deep-tests")]
#[command(
    about = "Count tests per source file, including tests inherited from base classes",
    long_about = None
)]
pub struct Args {
    /// Root directory to scan (defaults to the current directory)
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Source file extension to scan. Can be specified multiple times.
    #[arg(short, long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Substring counted once per line as a test
    #[arg(short = 'm', long, value_name = "MARKER")]
    pub test_marker: Option<String>,

    /// Regex with two capture groups: declared class, extended class
    #[arg(long, value_name = "REGEX")]
    pub extends_pattern: Option<String>,

    /// Fail on inheritance cycles instead of undercounting them
    #[arg(long)]
    pub strict_cycles: bool,

    /// Config file (JSON, or YAML for .yaml/.yml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        validate_root(&self.path)?;
        if let Some(ref config_path) = self.config {
            if !config_path.is_file() {
                anyhow::bail!("Config file does not exist: {}", config_path.display());
            }
        }
        Ok(())
    }

    /// Defaults, then the config file, then flags given on the command line.
    pub fn scan_config(&self) -> Result<ScanConfig> {
        let mut config = ScanConfig::default();

        if let Some(ref path) = self.config {
            let file = ConfigFile::load(path)
                .with_context(|| format!("Cannot load config: {}", path.display()))?;
            config = config.merge_file(file);
        }

        if !self.extensions.is_empty() {
            config.extensions = self.extensions.clone();
        }
        if let Some(ref marker) = self.test_marker {
            config.test_marker = marker.clone();
        }
        if let Some(ref pattern) = self.extends_pattern {
            config.extends_pattern = pattern.clone();
        }
        if self.strict_cycles {
            config.strict_cycles = true;
        }

        config.validate()?;
        Ok(config)
    }
}

pub fn validate_root(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    if !path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", path.display());
    }

    std::fs::read_dir(path).with_context(|| format!("Cannot read directory: {}", path.display()))?;

    Ok(())
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}
