//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. Linting is the default
//! action, so its arguments sit at the top level.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::ConfigOverrides;

/// ignition-lint - Naming style checks for Ignition Perspective views.
#[derive(Debug, Parser)]
#[command(name = "ignition-lint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true, args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only show the report
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(flatten)]
    pub lint: LintArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for linting (the default action).
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LintArgs {
    /// Comma-separated view files or glob patterns [default: **/view.json]
    #[arg(long, value_name = "PATTERNS")]
    pub files: Option<String>,

    /// Path to config file (overrides discovered .ignition-lint.yml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Naming style for component names (snake_case, camelCase, PascalCase, UPPER_CASE, Title Case, any)
    #[arg(long, value_name = "STYLE")]
    pub component_style: Option<String>,

    /// Naming style for parameter keys
    #[arg(long, value_name = "STYLE")]
    pub parameter_style: Option<String>,

    /// Regular expression component names must match
    #[arg(long, value_name = "REGEX")]
    pub component_style_rgx: Option<String>,

    /// Regular expression parameter keys must match
    #[arg(long, value_name = "REGEX")]
    pub parameter_style_rgx: Option<String>,

    /// Accept runs of capitals such as XMLParser or myHTTPClient
    #[arg(long)]
    pub allow_acronyms: bool,

    /// Skip linting of embedded scripts
    #[arg(long)]
    pub no_scripts: bool,

    /// Program used to lint embedded scripts [default: pylint]
    #[arg(long, value_name = "PROGRAM")]
    pub script_linter: Option<String>,

    /// Extra arguments for the script linter (whitespace-separated)
    #[arg(long, value_name = "ARGS", allow_hyphen_values = true)]
    pub script_linter_args: Option<String>,

    /// Output format: human, json
    #[arg(long, default_value = "human")]
    pub format: String,
}

impl LintArgs {
    /// The configuration values given on the command line.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            files: self.files.as_deref().map(ConfigOverrides::split_files),
            component_style: self.component_style.clone(),
            component_style_rgx: self.component_style_rgx.clone(),
            parameter_style: self.parameter_style.clone(),
            parameter_style_rgx: self.parameter_style_rgx.clone(),
            allow_acronyms: self.allow_acronyms,
            disable_scripts: self.no_scripts,
            script_linter: self.script_linter.clone(),
            script_linter_args: self
                .script_linter_args
                .as_deref()
                .map(ConfigOverrides::split_args),
        }
    }
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
