//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Specsmith - Spec-driven development toolkit.
#[derive(Debug, Parser)]
#[command(name = "specsmith")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize a new spec-driven project
    Init(InitArgs),

    /// Check that required developer tools are installed
    Check,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Name of the project directory to create
    pub project_name: Option<String>,

    /// Initialize in the current directory instead of creating a new one
    #[arg(long)]
    pub here: bool,

    /// AI assistant to configure the project for
    #[arg(long, default_value = "claude")]
    pub ai: String,

    /// Skip git repository initialization
    #[arg(long)]
    pub no_git: bool,

    /// Skip TLS verification for template downloads
    #[arg(long)]
    pub skip_tls: bool,

    /// GitHub token for template downloads (falls back to GITHUB_TOKEN)
    #[arg(long, env = "GH_TOKEN")]
    pub github_token: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
