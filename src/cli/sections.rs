use clap::Parser;
use minutes::{MinutesDate, SectionIndex};
use tracing::instrument;

use super::{Settings, terminal::Colorize};

#[derive(Debug, Parser)]
#[command(about = "List the sections of a minutes page")]
pub struct Sections {
    /// Meeting date (mm/dd/yyyy); defaults to the most recent meeting
    #[arg(long)]
    date: Option<MinutesDate>,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl Sections {
    #[instrument(level = "debug", skip(settings))]
    pub fn run(self, settings: &Settings) -> anyhow::Result<()> {
        let index = settings.minutes()?.sections(self.date.as_ref())?;

        match self.output {
            OutputFormat::Pretty => Self::output_pretty(&index),
            OutputFormat::Json => Self::output_json(&index)?,
        }

        Ok(())
    }

    fn output_pretty(index: &SectionIndex) {
        if index.is_empty() {
            println!("{}", "No sections found".warning());
            return;
        }

        for section in index.iter() {
            let nodes = format!("({} nodes)", section.body().len());
            println!("{}  {}", section.title().info(), nodes.dim());
        }
    }

    fn output_json(index: &SectionIndex) -> anyhow::Result<()> {
        let sections: Vec<_> = index
            .iter()
            .map(|section| {
                serde_json::json!({
                    "title": section.title(),
                    "heading": section.heading().tag(),
                    "speakable": section.to_speakable_string(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&sections)?);
        Ok(())
    }
}
