//! Terminal rendering of markdown output.
//!
//! Everything the core crate displays is markdown. In rich mode headers are
//! printed in blue with their hash marks kept, and other lines go through
//! termimad's inline styling; plain mode prints the text unchanged.

use std::fmt::Display;

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render anything with a markdown `Display` to stdout.
    pub fn render(&self, content: impl Display) -> Result<()> {
        print!("{}", self.format(&content.to_string()));
        Ok(())
    }

    fn format(&self, markdown: &str) -> String {
        if !self.rich_enabled {
            return markdown.to_string();
        }

        let mut out = String::with_capacity(markdown.len());
        for line in markdown.lines() {
            if line.starts_with('#') {
                out.push_str(&format!("\x1b[34m{line}\x1b[0m"));
            } else {
                out.push_str(&self.skin.inline(line).to_string());
            }
            out.push('\n');
        }
        out
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
