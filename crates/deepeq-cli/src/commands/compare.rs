//! Compare command
//!
//! Usage: deepeq compare <LEFT> <RIGHT> [--ignore <NAME>]... [--config <FILE>]
//!        [--max-depth <N>] [--reject-cycles] [--log-format pretty|json]
//!
//! Prints `equal` or `not equal` on stdout. The mismatch trace goes to
//! stderr through the logging facility. Exit code 0 means equal, 1 means
//! not equal and 2 means the comparison could not be carried out.

use crate::document::{load_document, read_file};
use anyhow::Context;
use clap::{Args, ValueEnum};
use deepeq_core::errors::{DeepEqError, ExError};
use deepeq_core::logging_facility::{init, Profile};
use deepeq_core::{Comparer, CompareOptions, CyclePolicy};
use std::path::{Path, PathBuf};

pub const EXIT_EQUAL: i32 = 0;
pub const EXIT_DIFFERENT: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Left-hand document; its fields drive the comparison
    pub left: PathBuf,

    /// Right-hand document
    pub right: PathBuf,

    /// Field name to ignore at every depth (repeatable)
    #[arg(short, long = "ignore", value_name = "NAME")]
    pub ignore: Vec<String>,

    /// Options file (TOML or YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum nesting depth
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Treat a reference cycle as an error instead of assuming equality
    #[arg(long)]
    pub reject_cycles: bool,

    /// Log output format for the mismatch trace
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// Logging profile that renders this format
    pub fn profile(self) -> Profile {
        match self {
            LogFormat::Pretty => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

/// Result of a successful comparison run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Equal,
    Different,
}

impl Verdict {
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Equal => EXIT_EQUAL,
            Verdict::Different => EXIT_DIFFERENT,
        }
    }
}

/// Execute compare command
pub fn execute(args: CompareArgs) -> anyhow::Result<Verdict> {
    init(args.log_format.profile());

    let options = build_options(&args)?;

    let left = load_document(&args.left)
        .map_err(ExError::from)
        .with_context(|| format!("loading {}", args.left.display()))?;
    let right = load_document(&args.right)
        .map_err(ExError::from)
        .with_context(|| format!("loading {}", args.right.display()))?;

    let equal = Comparer::new(options).try_compare(&left, &right)?;

    if equal {
        println!("equal");
        Ok(Verdict::Equal)
    } else {
        println!("not equal");
        Ok(Verdict::Different)
    }
}

/// Merge the options file with command-line overrides
fn build_options(args: &CompareArgs) -> anyhow::Result<CompareOptions> {
    let mut options = match &args.config {
        Some(path) => load_options(path)
            .map_err(ExError::from)
            .with_context(|| format!("loading options from {}", path.display()))?,
        None => CompareOptions::default(),
    };

    options.ignore_fields.extend(args.ignore.iter().cloned());
    if args.max_depth.is_some() {
        options.max_depth = args.max_depth;
    }
    if args.reject_cycles {
        options.cycle_policy = CyclePolicy::Reject;
    }

    options.validate().map_err(ExError::from)?;
    Ok(options)
}

/// Load options from a TOML or YAML file
fn load_options(path: &Path) -> Result<CompareOptions, DeepEqError> {
    let content = read_file(path)?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => CompareOptions::from_toml_str(&content),
        Some("yaml") | Some("yml") => CompareOptions::from_yaml_str(&content),
        other => Err(DeepEqError::InvalidOptions {
            reason: format!(
                "options file must be .toml, .yaml or .yml, got {}",
                other.unwrap_or("no extension")
            ),
        }),
    }
}
