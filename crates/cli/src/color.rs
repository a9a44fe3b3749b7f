// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for text output.
//!
//! `NO_COLOR=1` disables color, `COLOR=1` forces it, otherwise color is used
//! only when stdout is a terminal.

use std::io::IsTerminal;

const RESET: &str = "\x1b[0m";

/// What a piece of text means, and so how it is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Labels and table headers (256-color steel blue).
    Header,
    /// Secondary text such as descriptions (256-color grey).
    Muted,
    /// Work that is done.
    Done,
    /// Work still to do, or passed over.
    Pending,
    Failed,
}

impl Tone {
    fn escape(self) -> &'static str {
        match self {
            Tone::Header => "\x1b[38;5;74m",
            Tone::Muted => "\x1b[38;5;240m",
            Tone::Done => "\x1b[32m",
            Tone::Pending => "\x1b[33m",
            Tone::Failed => "\x1b[31m",
        }
    }

    /// Tone for a migration status word: `applied`, `pending`, `skipped`, ...
    /// Only the first word counts, so `skipped (no migration)` is pending.
    pub fn of_status(status: &str) -> Option<Tone> {
        let word = status
            .trim_start()
            .split(|c: char| !c.is_alphabetic())
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match word.as_str() {
            "applied" | "current" | "done" => Some(Tone::Done),
            "pending" | "skipped" | "would" => Some(Tone::Pending),
            "failed" | "error" => Some(Tone::Failed),
            _ => None,
        }
    }
}

pub fn enabled() -> bool {
    if crate::env::no_color() {
        return false;
    }
    crate::env::force_color() || std::io::stdout().is_terminal()
}

/// Wrap `text` in the tone's escape codes.
pub fn paint(tone: Tone, text: &str) -> String {
    format!("{}{text}{RESET}", tone.escape())
}

/// [`paint`] when color is [`enabled`], `text` unchanged otherwise.
pub fn styled(tone: Tone, text: &str) -> String {
    if enabled() {
        paint(tone, text)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
