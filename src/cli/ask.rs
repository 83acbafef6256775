use clap::Parser;
use minutes::{MinutesDate, Speaker};
use tracing::instrument;

use super::Settings;

#[derive(Debug, Parser)]
#[command(about = "Answer a question from the minutes")]
pub struct Ask {
    /// The question, e.g. "what supplies are needed"
    #[arg(required = true, num_args = 1..)]
    text: Vec<String>,

    /// Meeting date (mm/dd/yyyy); defaults to the most recent meeting
    #[arg(long)]
    date: Option<MinutesDate>,
}

impl Ask {
    #[instrument(level = "debug", skip(settings))]
    pub fn run(self, settings: &Settings) -> anyhow::Result<()> {
        let text = self.text.join(" ");
        if !minutes::is_valid(&text) {
            anyhow::bail!("Nothing in the minutes matches '{text}'");
        }

        settings.minutes()?.handle_on(
            &text,
            self.date.as_ref(),
            &mut Console,
            &settings.profile,
        )?;
        Ok(())
    }
}

/// Speaks by printing each phrase on its own line.
struct Console;

impl Speaker for Console {
    fn say(&mut self, phrase: &str) {
        println!("{phrase}");
    }
}
