use std::path::{Path, PathBuf};

mod ask;
mod init;
mod r#match;
mod sections;
mod show;
mod terminal;

use anyhow::Context;
use ask::Ask;
use clap::ArgAction;
use init::Init;
use minutes::{Config, HttpFetcher, Minutes, MinutesDate, Profile};
use r#match::Match;
use sections::Sections;
use show::Show;
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Path to the user's YAML profile
    #[arg(short, long, value_name = "PATH", global = true)]
    profile: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let settings = Settings::load(self.config.as_deref(), self.profile.as_deref())?;
        self.command.run(&settings)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// Configuration and profile shared by every command.
#[derive(Debug)]
pub struct Settings {
    config: Config,
    profile: Profile,
}

impl Settings {
    fn load(config: Option<&Path>, profile: Option<&Path>) -> anyhow::Result<Self> {
        let config = config
            .map(Config::load)
            .transpose()
            .map_err(anyhow::Error::msg)?
            .unwrap_or_default();
        let profile = profile
            .map(Profile::load)
            .transpose()
            .map_err(anyhow::Error::msg)?
            .unwrap_or_default();
        Ok(Self { config, profile })
    }

    fn minutes(&self) -> anyhow::Result<Minutes<HttpFetcher>> {
        Minutes::connect(self.config.clone()).context("failed to set up the HTTP client")
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Answer a question from the most recent minutes
    Ask(Ask),

    /// Show which section a question refers to
    Match(Match),

    /// List the sections of a minutes page
    Sections(Sections),

    /// Read out one section of a minutes page
    Show(Show),

    /// Print the URL of a minutes page
    Url(Url),

    /// Write a default configuration file
    Init(Init),
}

impl Command {
    fn run(self, settings: &Settings) -> anyhow::Result<()> {
        match self {
            Self::Ask(command) => command.run(settings)?,
            Self::Match(command) => command.run(),
            Self::Sections(command) => command.run(settings)?,
            Self::Show(command) => command.run(settings)?,
            Self::Url(command) => command.run(settings)?,
            Self::Init(command) => command.run()?,
        }
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Url {
    /// Meeting date (mm/dd/yyyy); defaults to the most recent meeting
    #[arg(long)]
    date: Option<MinutesDate>,
}

impl Url {
    #[instrument(skip(settings))]
    fn run(self, settings: &Settings) -> anyhow::Result<()> {
        let url = settings.minutes()?.page_url(self.date.as_ref())?;
        println!("{url}");
        Ok(())
    }
}
