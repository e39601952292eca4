//! Command-line interface for the gspn-tikz utility
//!
//! Converts GreatSPN PNPRO nets into TikZ pictures.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

use gspn_tikz::core::logging::init_logging;
use gspn_tikz::plugins::Orchestrator;
use gspn_tikz::{check_arc_references, Gspn, RenderConfig};

/// gspn-tikz - Draw GreatSPN Petri nets with TikZ
#[derive(Parser)]
#[command(name = "gspn-tikz")]
#[command(about = "Generate a TikZ picture visualizing a GSPN given in PNPRO format")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,

    /// TOML file with render settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a PNPRO net to a TikZ picture
    Convert {
        /// The path for the GSPN file in PNPRO format
        #[arg(short, long, visible_alias = "gspn")]
        input: PathBuf,

        /// The path for the generated TikZ file (use - for stdout)
        #[arg(short, long, visible_alias = "out")]
        output: PathBuf,

        /// Coordinate scale factor (overrides the config file)
        #[arg(long)]
        scale: Option<f64>,

        /// Skip checking that every arc endpoint names a place or transition
        #[arg(long)]
        no_check_references: bool,
    },

    /// Parse a net and check its arcs without writing output
    Validate {
        /// The path for the GSPN file in PNPRO format
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Show supported input and output formats
    Formats {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Entry in the `formats` listing
#[derive(Debug, Serialize)]
struct FormatInfo {
    name: &'static str,
    direction: &'static str,
    extensions: Vec<&'static str>,
}

/// Main CLI application
pub struct GspnTikzApp {
    config: RenderConfig,
}

impl GspnTikzApp {
    /// Create a new application instance with default settings
    pub fn new() -> Self {
        Self::with_config(RenderConfig::default())
    }

    /// Create a new application instance with a render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    fn orchestrator(&self) -> Orchestrator {
        Orchestrator::with_default_plugins(self.config)
    }

    /// Run the application with the given CLI arguments
    ///
    /// Errors are left for the caller to report. A net rejected by
    /// `validate` has already been reported and yields a failure code.
    pub fn run(&mut self, cli: Cli) -> Result<ExitCode> {
        // Environment variables take precedence over flags
        let log_level_str = std::env::var("GSPN_TIKZ_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| cli.log_level.as_str().to_string());
        let log_format_str = std::env::var("GSPN_TIKZ_LOG_FORMAT")
            .ok()
            .unwrap_or_else(|| cli.log_format.as_str().to_string());

        if let Err(e) = init_logging(Some(&log_level_str), Some(&log_format_str)) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("gspn-tikz v{}", env!("CARGO_PKG_VERSION"));
        }

        if let Some(path) = &cli.config {
            self.config = RenderConfig::load(path)?;
            debug!(config = ?self.config, "Loaded configuration");
        }

        match cli.command {
            Commands::Convert {
                input,
                output,
                scale,
                no_check_references,
            } => {
                if let Some(scale) = scale {
                    if !scale.is_finite() || scale <= 0.0 {
                        return Err(anyhow!("--scale must be a positive number, got {}", scale));
                    }
                    self.config = self.config.with_scale(scale);
                }
                if no_check_references {
                    self.config = self.config.with_check_references(false);
                }
                self.convert_command(&input, &output, cli.verbose)?;
            }
            Commands::Validate { input } => {
                if !self.validate_command(&input, cli.verbose) {
                    return Ok(ExitCode::FAILURE);
                }
            }
            Commands::Formats { json } => self.formats_command(json, cli.verbose)?,
        }
        Ok(ExitCode::SUCCESS)
    }

    /// Handle the convert command
    pub fn convert_command(&self, input: &Path, output: &Path, verbose: bool) -> Result<()> {
        let to_stdout = is_stdout(output);
        let orchestrator = self.orchestrator();

        // Status lines move to stderr when stdout carries the picture
        let status = |line: String| {
            if to_stdout {
                eprintln!("{}", line);
            } else {
                println!("{}", line);
            }
        };

        status(format!("Reading {}", input.display()));
        let net = orchestrator.parse_file(input)?;
        status(net.to_string());

        if to_stdout {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            orchestrator.render_to_writer(&net, &mut handle)?;
        } else {
            orchestrator.render_to_path(&net, output)?;
        }

        if verbose {
            eprintln!("Wrote TikZ picture to {}", output.display());
        }
        Ok(())
    }

    /// Handle the validate command, printing the verdict once
    pub fn validate_command(&self, input: &Path, verbose: bool) -> bool {
        if verbose {
            eprintln!("Validating {}", input.display());
        }

        match self.check(input) {
            Ok(net) => {
                println!("✓ {}", net);
                true
            }
            Err(e) => {
                println!("✗ {:#}", e);
                false
            }
        }
    }

    fn check(&self, input: &Path) -> Result<Gspn> {
        let net = self.orchestrator().parse_file(input)?;
        check_arc_references(&net)?;
        Ok(net)
    }

    /// Handle the formats command
    pub fn formats_command(&self, json: bool, verbose: bool) -> Result<()> {
        if verbose {
            eprintln!("Listing supported formats");
        }

        let formats = self.formats();
        if json {
            let listing = serde_json::json!({
                "formats": formats,
                "total": formats.len(),
            });
            println!("{}", serde_json::to_string_pretty(&listing)?);
        } else {
            println!("Supported formats:");
            for format in &formats {
                println!(
                    "  {:<6} {:<7} .{}",
                    format.name,
                    format.direction,
                    format.extensions.join(", .")
                );
            }
        }
        Ok(())
    }

    fn formats(&self) -> Vec<FormatInfo> {
        let orchestrator = self.orchestrator();
        let mut formats: Vec<FormatInfo> = orchestrator
            .parsers()
            .iter()
            .map(|parser| FormatInfo {
                name: parser.name(),
                direction: "input",
                extensions: parser.extensions().to_vec(),
            })
            .collect();
        let renderer = orchestrator.renderer();
        formats.push(FormatInfo {
            name: renderer.name(),
            direction: "output",
            extensions: vec![renderer.format()],
        });
        formats
    }

    /// Current render configuration
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
}

impl Default for GspnTikzApp {
    fn default() -> Self {
        Self::new()
    }
}

fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == "-"
}
