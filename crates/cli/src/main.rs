// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # bracketcraft
//!
//! Runs tournament scripts against an in-memory tournament service and prints
//! the resulting bracket, or previews a roster CSV without registering it.
//!
//! ```text
//! bracketcraft run demos/four_team_double.json
//! bracketcraft run demos/eight_team_single.json --format json
//! bracketcraft preview-roster demos/roster.csv
//! ```
//!
//! Logging goes to stderr. `-v`/`-q` adjust the level unless `RUST_LOG` is set.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod render;
mod script;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use bracketcraft_api::{
    AuthenticatedActor, RosterPreview, Role, TournamentService, authenticate_stub,
    preview_roster_csv,
};
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

use crate::script::{Script, ScriptOutcome, read_file, run_script};

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(args.log_level().into()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    args.run()
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum OutputFormat {
    /// Indented, human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run a tournament script and print the final bracket
    #[command(visible_alias = "r")]
    Run {
        /// Path to the JSON script
        script: PathBuf,

        /// Actor id recorded on every operation
        #[arg(long, default_value = "bracketcraft-cli")]
        actor: String,

        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Validate a roster CSV without registering anyone
    #[command(visible_alias = "p")]
    PreviewRoster {
        /// Path to a CSV with `id,display_name` headers
        csv: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::Run {
                script,
                actor,
                format,
            } => run(&script, &actor, format),
            Self::PreviewRoster { csv, format } => preview_roster(&csv, format),
        }
    }
}

fn run(path: &Path, actor_id: &str, format: OutputFormat) -> Result<()> {
    let script: Script = Script::from_path(path)?;
    let actor: AuthenticatedActor = authenticate_stub(actor_id, Role::Organizer)?;
    let service = TournamentService::new();

    let outcome: ScriptOutcome = run_script(&script, &service, &actor)
        .wrap_err_with(|| format!("Script {} stopped", path.display()))?;
    info!(
        tournament_id = %outcome.tournament_id,
        results = outcome.results_recorded,
        lifecycle = %outcome.bracket.tournament.lifecycle,
        "Script finished"
    );

    match format {
        OutputFormat::Text => println!("{}", render::bracket_text(&outcome.bracket)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome.bracket)?),
    }
    Ok(())
}

fn preview_roster(path: &Path, format: OutputFormat) -> Result<()> {
    let content: String = read_file(path)?;
    let preview: RosterPreview = preview_roster_csv(&content, &[])?;

    match format {
        OutputFormat::Text => println!("{}", render::roster_preview_text(&preview)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&preview)?),
    }
    Ok(())
}
