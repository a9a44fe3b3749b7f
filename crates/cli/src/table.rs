// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Aligned text tables for `list`, `status` and `migrate`.

use std::io::{self, Write};

use crate::color::{self, Tone};

enum Align {
    Left,
    Right,
}

enum Paint {
    None,
    Always(Tone),
    /// Tone picked per cell by [`Tone::of_status`].
    ByStatus,
}

pub struct Column {
    title: &'static str,
    align: Align,
    paint: Paint,
}

impl Column {
    fn new(title: &'static str, align: Align, paint: Paint) -> Self {
        Self { title, align, paint }
    }

    pub fn left(title: &'static str) -> Self {
        Self::new(title, Align::Left, Paint::None)
    }

    /// Right-aligned, for counts.
    pub fn right(title: &'static str) -> Self {
        Self::new(title, Align::Right, Paint::None)
    }

    pub fn muted(title: &'static str) -> Self {
        Self::new(title, Align::Left, Paint::Always(Tone::Muted))
    }

    pub fn status(title: &'static str) -> Self {
        Self::new(title, Align::Left, Paint::ByStatus)
    }
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    colorize: bool,
}

const GAP: &str = "  ";

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            colorize: color::enabled(),
        }
    }

    #[cfg(test)]
    pub fn plain(columns: Vec<Column>) -> Self {
        Self {
            colorize: false,
            ..Self::new(columns)
        }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Write the header and rows; nothing at all when there are no rows.
    ///
    /// A trailing left-aligned column is not padded, so lines carry no
    /// trailing spaces. Escapes are added after padding.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        if self.rows.is_empty() {
            return Ok(());
        }

        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.title.len()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        let header = self.columns.iter().zip(&widths).enumerate().map(|(i, (col, &w))| {
            let text = self.pad(i, col.title, w);
            if self.colorize {
                color::paint(Tone::Header, &text)
            } else {
                text
            }
        });
        writeln!(out, "{}", header.collect::<Vec<_>>().join(GAP))?;

        for row in &self.rows {
            let cells = self.columns.iter().zip(&widths).enumerate().map(|(i, (col, &w))| {
                let raw = row.get(i).map_or("", String::as_str);
                let text = self.pad(i, raw, w);
                let tone = match col.paint {
                    Paint::None => None,
                    Paint::Always(tone) => Some(tone),
                    Paint::ByStatus => Tone::of_status(raw),
                };
                match tone {
                    Some(tone) if self.colorize => color::paint(tone, &text),
                    _ => text,
                }
            });
            writeln!(out, "{}", cells.collect::<Vec<_>>().join(GAP))?;
        }
        Ok(())
    }

    fn pad(&self, index: usize, text: &str, width: usize) -> String {
        let last = index + 1 == self.columns.len();
        match self.columns[index].align {
            Align::Left if last => text.to_string(),
            Align::Left => format!("{text:<width$}"),
            Align::Right => format!("{text:>width$}"),
        }
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
