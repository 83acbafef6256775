use std::path::PathBuf;

use clap::Parser;
use minutes::Config;
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Write a default configuration file")]
pub struct Init {
    /// Where to write the configuration
    #[arg(default_value = "minutes.toml")]
    path: PathBuf,
}

impl Init {
    #[instrument]
    pub fn run(self) -> anyhow::Result<()> {
        if self.path.exists() {
            anyhow::bail!("{} already exists", self.path.display());
        }

        Config::default()
            .save(&self.path)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", self.path.display()))?;

        println!("{}", format!("Created {}", self.path.display()).success());
        Ok(())
    }
}
