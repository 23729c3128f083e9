//! Rendering surface abstraction for the greeting line and visual theme.
//!
//! The monitor talks to a `GreetingSurface` trait object so classification
//! and transition logic can be exercised against a recording fake in tests.
//! The production implementation renders into the attached terminal.

use anyhow::Result;
use crossterm::{
    execute,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::SetTitle,
    tty::IsTty,
};
use std::io::stdout;

/// Target for the two rendering side effects of a label transition.
///
/// `set_greeting` is always invoked before `apply_theme`; implementations
/// may rely on that ordering.
pub trait GreetingSurface {
    /// Update the greeting text, if a display target exists.
    ///
    /// A missing display target is tolerated silently and is not an error.
    fn set_greeting(&mut self, text: &str) -> Result<()>;

    /// Replace the active theme with the given marker.
    ///
    /// Exactly one theme is active at a time; applying a theme discards the
    /// previous one.
    fn apply_theme(&mut self, theme: &str) -> Result<()>;
}

/// Terminal-backed surface.
///
/// The greeting goes into the terminal title, and the theme re-renders the
/// greeting as a colored status line. When stdout is not a terminal (piped
/// output, service context) both updates are skipped silently.
pub struct TerminalSurface {
    greeting: Option<String>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self { greeting: None }
    }

    fn theme_color(theme: &str) -> Color {
        match theme {
            "morning" => Color::Yellow,
            "afternoon" => Color::Cyan,
            "night" => Color::DarkBlue,
            _ => Color::Reset,
        }
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl GreetingSurface for TerminalSurface {
    fn set_greeting(&mut self, text: &str) -> Result<()> {
        self.greeting = Some(text.to_string());

        let mut out = stdout();
        if !out.is_tty() {
            return Ok(());
        }
        execute!(out, SetTitle(text))?;
        Ok(())
    }

    fn apply_theme(&mut self, theme: &str) -> Result<()> {
        let mut out = stdout();
        if !out.is_tty() {
            return Ok(());
        }

        if let Some(greeting) = &self.greeting {
            execute!(
                out,
                Print("┃   "),
                SetForegroundColor(Self::theme_color(theme)),
                SetAttribute(Attribute::Bold),
                Print(greeting),
                ResetColor,
                Print("\n"),
            )?;
        }
        Ok(())
    }
}
