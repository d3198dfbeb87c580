//! CLI for inspecting a feature's about information.

mod commands;

use aboutinfo_core::config;
use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use commands::{run_checksum, run_completions, run_man, run_show};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "aboutinfo")]
#[command(about = "Resolve a feature's localized about information", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show the about information of an installed feature.
    Show {
        /// Feature install directory.
        dir: PathBuf,
        /// Locale to resolve `$nl$` resources for (e.g. fr_CA). Defaults to config, then environment.
        #[arg(long)]
        locale: Option<String>,
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the CRC-32 of the feature image.
    Checksum {
        /// Feature install directory.
        dir: PathBuf,
        #[arg(long)]
        locale: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        shell: Shell,
    },

    /// Print the man page (roff) to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Show { dir, locale, json } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_show(&cfg, &dir, locale.as_deref(), json)?;
            }
            CliCommand::Checksum { dir, locale } => {
                let cfg = config::load_or_init()?;
                run_checksum(&cfg, &dir, locale.as_deref())?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}
