// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::LocalBoxFuture};
use teamup_core::{APP_NAME, EventsClient};
use tracing_subscriber::EnvFilter;

use crate::cmd_event::{CmdEventDelete, CmdEventEdit, CmdEventNew, CmdEventShow};
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_tui::{CmdEdit, CmdNew};
use crate::config::parse_config;

/// Run the teamup command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Logs go to stderr, filtered by `RUST_LOG`, warnings only by default.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Schedule, edit and delete your teamup events.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Falls back to $TEAMUP_CONFIG, then to \
$XDG_CONFIG_HOME/teamup/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/teamup/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdNew::command())
            .subcommand(CmdEdit::command())
            .subcommand(
                Command::new("event")
                    .alias("e")
                    .about("Manage your events without the TUI")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdEventNew::command())
                    .subcommand(CmdEventEdit::command())
                    .subcommand(CmdEventDelete::command())
                    .subcommand(CmdEventShow::command()),
            )
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdNew::NAME, matches)) => New(CmdNew::from(matches)),
            Some((CmdEdit::NAME, matches)) => Edit(CmdEdit::from(matches)?),
            Some(("event", matches)) => match matches.subcommand() {
                Some((CmdEventNew::NAME, matches)) => EventNew(CmdEventNew::from(matches)),
                Some((CmdEventEdit::NAME, matches)) => EventEdit(CmdEventEdit::from(matches)?),
                Some((CmdEventDelete::NAME, matches)) => {
                    EventDelete(CmdEventDelete::from(matches)?)
                }
                Some((CmdEventShow::NAME, matches)) => EventShow(CmdEventShow::from(matches)?),
                _ => return Err("Unknown event command".into()),
            },
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches)?)
            }
            _ => return Err("No command given".into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Create an event in the TUI
    New(CmdNew),

    /// Edit or delete an event in the TUI
    Edit(CmdEdit),

    /// Create an event from flags
    EventNew(CmdEventNew),

    /// Update an event from flags
    EventEdit(CmdEventEdit),

    /// Delete an event
    EventDelete(CmdEventDelete),

    /// Show an event
    EventShow(CmdEventShow),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            New(a)         => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            Edit(a)        => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            EventNew(a)    => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            EventEdit(a)   => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            EventDelete(a) => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            EventShow(a)   => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a EventsClient) -> LocalBoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let config = parse_config(config).await?;
        let client = config.client()?;

        f(&client).await
    }
}
