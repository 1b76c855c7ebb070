// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use jiff::civil::DateTime;
use shiftboard_core::APP_NAME;
use tracing_subscriber::EnvFilter;

use crate::cmd_board::CmdBoard;
use crate::cmd_calendar::CmdCalendar;
use crate::cmd_parse::CmdParse;
use crate::cmd_worker::CmdWorker;
use crate::session::{Session, reference_now};
use crate::util::parse_now;

/// Run the shiftboard command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

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

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Reference time overriding the wall clock
    pub now: Option<DateTime>,

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
            .about("Classify and group gig schedules for calendar and list views.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to board
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/shiftboard/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/shiftboard/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .global(true),
            )
            .arg(
                arg!(--now <NOW> "Classify at this time instead of now, YYYY-MM-DD [HH:MM]")
                    .value_parser(parse_now)
                    .global(true),
            )
            .subcommand(CmdBoard::command())
            .subcommand(CmdCalendar::command())
            .subcommand(CmdWorker::command())
            .subcommand(CmdParse::command())
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
            Some((CmdBoard::NAME, matches)) => Board(CmdBoard::from(matches)),
            Some((CmdCalendar::NAME, matches)) => Calendar(CmdCalendar::from(matches)),
            Some((CmdWorker::NAME, matches)) => Worker(CmdWorker::from(matches)),
            Some((CmdParse::NAME, matches)) => Parse(CmdParse::from(matches)),
            None => Board(CmdBoard::default()),
            _ => unreachable!(),
        };

        // Global arguments are propagated to the subcommand matches
        let global = matches
            .subcommand()
            .map_or(&matches, |(_, sub_matches)| sub_matches);
        let config = global.get_one("config").cloned();
        let now = global.get_one("now").copied();
        Ok(Cli {
            config,
            now,
            command,
        })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config, self.now).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show the postings of a manager
    Board(CmdBoard),

    /// Show a month calendar
    Calendar(CmdCalendar),

    /// Show the schedule and earnings of a worker
    Worker(CmdWorker),

    /// Parse a date expression
    Parse(CmdParse),
}

impl Commands {
    /// Run the command with the given configuration
    pub async fn run(
        self,
        config: Option<PathBuf>,
        now: Option<DateTime>,
    ) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Board(a) => a.run(&Session::load(config, now).await?),
            Calendar(a) => a.run(&Session::load(config, now).await?),
            Worker(a) => a.run(&Session::load(config, now).await?),
            Parse(a) => a.run(reference_now(config, now).await),
        }
    }
}
