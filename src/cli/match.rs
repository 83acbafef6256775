use clap::Parser;
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Show which section a question refers to")]
pub struct Match {
    /// The question to match
    #[arg(required = true, num_args = 1..)]
    text: Vec<String>,
}

impl Match {
    #[instrument]
    pub fn run(self) {
        let text = self.text.join(" ");
        if let Some(title) = minutes::match_title(&text) {
            println!("{title}");
        } else {
            eprintln!("{}", format!("No section matches '{text}'").warning());
            std::process::exit(1);
        }
    }
}
