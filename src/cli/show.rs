use clap::Parser;
use minutes::MinutesDate;
use tracing::instrument;

use super::Settings;

#[derive(Debug, Parser)]
#[command(about = "Read out one section of a minutes page")]
pub struct Show {
    /// Section title, matched ignoring case
    #[arg(required = true, num_args = 1..)]
    title: Vec<String>,

    /// Treat the title as a question and show the section it refers to
    #[arg(long)]
    question: bool,

    /// Meeting date (mm/dd/yyyy); defaults to the most recent meeting
    #[arg(long)]
    date: Option<MinutesDate>,
}

impl Show {
    #[instrument(level = "debug", skip(settings))]
    pub fn run(self, settings: &Settings) -> anyhow::Result<()> {
        let text = self.title.join(" ");
        let title = if self.question {
            minutes::match_title(&text)
                .ok_or_else(|| anyhow::anyhow!("No section matches '{text}'"))?
        } else {
            text.as_str()
        };

        let section = settings.minutes()?.section(title, self.date.as_ref())?;
        println!("{}", section.to_speakable_string());
        Ok(())
    }
}
