//! Configuration management for the G-code translator.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config file (explicit, project-local or per-user)
//! - Resolution of input and output paths

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::dialect::{Dialect, StageSettings};
use crate::translate::TranslateOptions;

/// Project-local config file name
pub const PROJECT_CONFIG_FILE: &str = ".gcode-translate.toml";

/// Command-line arguments for the translator
#[derive(Debug, Parser)]
#[command(name = "gcode-translate")]
#[command(about = "Translate slicer G-code into micro-fab printer or motion-stage programs")]
#[command(version)]
pub struct Args {
    /// Source file name, looked up in the input directory
    #[arg(
        short,
        long,
        default_value = "structure",
        help = "G-code file to read (the .gcode extension is optional)"
    )]
    pub filename: String,

    /// Output dialect selector
    #[arg(
        short = 't',
        long = "type",
        help = "Output type: 0) micro-fab printer, 1) motion stage"
    )]
    pub output_type: Option<u8>,

    /// Reverse the generated program
    #[arg(short, long, help = "Invert the model (reverse output line order)")]
    pub invert_model: bool,

    #[arg(long, help = "Directory containing source G-code files")]
    pub input_dir: Option<PathBuf>,

    #[arg(long, help = "Directory for generated files")]
    pub output_dir: Option<PathBuf>,

    #[arg(short, long, help = "Explicit output file, bypassing the naming convention")]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Config file (defaults to ./.gcode-translate.toml)")]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Contents of a TOML config file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub translate: TranslateSection,
    pub paths: PathsSection,
    pub stage: StageSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TranslateSection {
    pub dialect: Option<u8>,
    pub invert: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsSection {
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

impl FileConfig {
    /// Load a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Find the config file to use
    ///
    /// An explicit path must exist. Otherwise the project-local file and
    /// then the per-user file are tried; if neither exists the defaults apply.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let mut candidates = vec![PathBuf::from(PROJECT_CONFIG_FILE)];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("gcode-translate").join("config.toml"));
        }

        for candidate in candidates {
            if candidate.is_file() {
                log::debug!("Using config file {}", candidate.display());
                return Self::load(&candidate);
            }
        }

        Ok(Self::default())
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Source name without the .gcode extension
    pub source_name: String,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Explicit output file
    pub output: Option<PathBuf>,
    pub options: TranslateOptions,
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments and config files
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments, discovering the config file
    pub fn from_args(args: Args) -> Result<Self> {
        let file = FileConfig::discover(args.config.as_deref())?;
        Self::from_parts(args, file)
    }

    /// Merge arguments over a loaded config file (useful for testing)
    ///
    /// Fails before anything is read if the dialect selector is invalid.
    pub fn from_parts(args: Args, file: FileConfig) -> Result<Self> {
        let selector = args
            .output_type
            .or(file.translate.dialect)
            .unwrap_or(Dialect::default().selector());
        let dialect = Dialect::try_from(selector)?;

        let invert = args.invert_model || file.translate.invert.unwrap_or(false);

        let source_name = args
            .filename
            .strip_suffix(".gcode")
            .unwrap_or(args.filename.as_str())
            .to_string();

        Ok(Config {
            source_name,
            input_dir: args
                .input_dir
                .or(file.paths.input_dir)
                .unwrap_or_else(|| PathBuf::from("gcode")),
            output_dir: args
                .output_dir
                .or(file.paths.output_dir)
                .unwrap_or_else(|| PathBuf::from("generated")),
            output: args.output,
            options: TranslateOptions {
                dialect,
                invert,
                stage: file.stage,
            },
            log_level: args.log_level,
        })
    }

    /// File the source G-code is read from
    pub fn input_path(&self) -> PathBuf {
        self.input_dir.join(format!("{}.gcode", self.source_name))
    }

    /// File the translation is written to
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => self.output_dir.join(format!(
                "{}{}",
                self.source_name,
                self.options.dialect.output_suffix()
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        let mut full = vec!["gcode-translate"];
        full.extend_from_slice(argv);
        Args::parse_from(full)
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_parts(args(&[]), FileConfig::default()).unwrap();

        assert_eq!(config.source_name, "structure");
        assert_eq!(config.options.dialect, Dialect::MicroFab);
        assert!(!config.options.invert);
        assert_eq!(config.input_path(), PathBuf::from("gcode/structure.gcode"));
        assert_eq!(
            config.output_path(),
            PathBuf::from("generated/structure_2PP.gcode")
        );
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_stage_naming_and_extension_strip() {
        let config =
            Config::from_parts(args(&["-f", "cube.gcode", "-t", "1"]), FileConfig::default())
                .unwrap();

        assert_eq!(config.source_name, "cube");
        assert_eq!(config.options.dialect, Dialect::MotionStage);
        assert_eq!(config.output_path(), PathBuf::from("generated/cube_AE.txt"));
    }

    #[test]
    fn test_invalid_type_rejected() {
        let err = Config::from_parts(args(&["-t", "2"]), FileConfig::default()).unwrap_err();
        assert!(err.to_string().contains("output type 2 not defined"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = FileConfig::parse(
            r#"
            [translate]
            dialect = 1
            invert = true

            [paths]
            output_dir = "out"
            "#,
        )
        .unwrap();

        let config = Config::from_parts(args(&["-t", "0"]), file).unwrap();

        assert_eq!(config.options.dialect, Dialect::MicroFab);
        assert!(config.options.invert);
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_stage_section() {
        let file = FileConfig::parse(
            r#"
            [stage]
            velocity = 3.0
            feed = "0.5"
            "#,
        )
        .unwrap();

        assert_eq!(file.stage.velocity, 3.0);
        assert_eq!(file.stage.feed, "0.5");
        assert_eq!(file.stage.scale, 0.01);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(FileConfig::parse("[translate]\nspeed = 4\n").is_err());
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let result = FileConfig::discover(Some(Path::new("does/not/exist.toml")));
        assert!(result.is_err());
    }
}
