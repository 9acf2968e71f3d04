//! Terminal rendering module for command output
//!
//! This module provides terminal styling using termimad's compound styles,
//! with optional fallback to plain text. Task text is user input, so it is
//! never parsed as markdown: only the fixed labels around it are styled.

use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use termimad::{
    crossterm::style::{Attribute, Color},
    CompoundStyle, MadSkin,
};

/// Labels that follow the description on a task line.
const TRAILING_LABELS: [&str; 3] = ["Status:", "Created:", "Updated:"];

/// Terminal renderer that can switch between rich and plain text output
#[derive(Clone)]
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
    error_style: CompoundStyle,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Yellow);

        Self {
            rich_enabled,
            skin,
            error_style: CompoundStyle::new(Some(Color::Red), None, Attribute::Bold.into()),
        }
    }

    /// Rich output unless disabled or stdout is redirected.
    pub fn for_stdout(no_color: bool) -> Self {
        Self::new(!no_color && io::stdout().is_terminal())
    }

    /// Render command output to the terminal
    pub fn render(&self, text: &str) -> Result<()> {
        let stdout = io::stdout();
        self.write_to(&mut stdout.lock(), text)?;
        Ok(())
    }

    fn write_to<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        if !self.rich_enabled {
            return write!(out, "{text}");
        }
        for line in text.lines() {
            writeln!(out, "{}", self.style_line(line))?;
        }
        Ok(())
    }

    fn style_line(&self, line: &str) -> String {
        if line.starts_with("Error:") {
            return self.error_style.apply_to(line).to_string();
        }
        let Some(rest) = line.strip_prefix("ID: ") else {
            return line.to_string();
        };
        // The description may itself contain " | Status: ", so split at the
        // last occurrence; everything after it is generated text.
        let Some(split) = rest.rfind(" | Status: ") else {
            return line.to_string();
        };
        let (head, tail) = rest.split_at(split);

        let mut styled_tail = tail.to_string();
        for label in TRAILING_LABELS {
            styled_tail = styled_tail.replace(label, &self.skin.bold.apply_to(label).to_string());
        }
        format!("{} {head}{styled_tail}", self.skin.bold.apply_to("ID:"))
    }
}
