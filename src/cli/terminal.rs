//! Colour for command output, disabled when stdout cannot show it.

use std::fmt::Display;

use owo_colors::{OwoColorize, Style, colors::css};

fn paint(text: impl Display, style: Style) -> String {
    if supports_color::on_cached(supports_color::Stream::Stdout).is_some() {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Styles for the kinds of text the commands print.
pub trait Colorize: Display {
    /// Green, for completed actions.
    fn success(&self) -> String {
        paint(self, Style::new().fg::<css::Green>())
    }

    /// Amber, for results that need attention.
    fn warning(&self) -> String {
        paint(self, Style::new().fg::<css::Orange>())
    }

    /// Blue, for section titles.
    fn info(&self) -> String {
        paint(self, Style::new().fg::<css::LightBlue>())
    }

    /// Dimmed, for secondary details.
    fn dim(&self) -> String {
        paint(self, Style::new().dimmed())
    }
}

impl<T: Display + ?Sized> Colorize for T {}
