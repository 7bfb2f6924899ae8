// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Colors and box layout for the `--explain` report.
//!
//! Text is laid out plain and painted afterwards, so padding never has to see
//! escape codes. Color is off when `NO_COLOR` is set or stdout is not a
//! terminal. `ASKDOCS_THEME=light` picks the palette for light backgrounds.

/// Inner width of the report box, between the two `│`.
pub const BOX_WIDTH: usize = 78;

type Rgb = (u8, u8, u8);

/// What a span of report text is. Each tone has one color per palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Frame,
    Heading,
    Muted,
    Text,
    Best,
    Good,
    Weak,
}

/// Dark-background palette, indexed by [`Tone`].
const DARK: [Rgb; 7] = [
    (88, 96, 110),   // Frame
    (95, 200, 215),  // Heading
    (120, 126, 138), // Muted
    (200, 204, 212), // Text
    (120, 230, 90),  // Best
    (170, 210, 130), // Good
    (235, 185, 95),  // Weak
];

/// Light-background palette, indexed by [`Tone`].
const LIGHT: [Rgb; 7] = [
    (150, 154, 162),
    (0, 110, 170),
    (130, 134, 142),
    (40, 44, 52),
    (30, 140, 40),
    (90, 150, 60),
    (175, 110, 0),
];

/// Turns plain text into (possibly) colored text.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    palette: Option<&'static [Rgb; 7]>,
}

impl Painter {
    /// Colors for stdout, honoring `NO_COLOR`, TTY detection and `ASKDOCS_THEME`.
    pub fn for_stdout() -> Self {
        if std::env::var_os("NO_COLOR").is_some() || !atty::is(atty::Stream::Stdout) {
            return Self::plain();
        }
        Self::themed(std::env::var("ASKDOCS_THEME").ok().as_deref())
    }

    pub fn plain() -> Self {
        Self { palette: None }
    }

    fn themed(theme: Option<&str>) -> Self {
        let light = theme.is_some_and(|name| name.eq_ignore_ascii_case("light"));
        Self {
            palette: Some(if light { &LIGHT } else { &DARK }),
        }
    }

    pub fn paint(&self, tone: Tone, text: &str) -> String {
        match self.palette {
            Some(palette) => {
                let (r, g, b) = palette[tone as usize];
                format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[0m")
            }
            None => text.to_string(),
        }
    }
}

/// Tone for a score, relative to the best score in its column.
pub fn score_tone(score: f64, best: f64) -> Tone {
    if score <= 0.0 {
        Tone::Muted
    } else if score >= best {
        Tone::Best
    } else if score * 2.0 >= best {
        Tone::Good
    } else {
        Tone::Weak
    }
}

/// Truncate to `max_chars` characters, ending in … when cut.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// A box of labeled sections, built line by line.
///
/// ```text
/// ┌─ FILES ──────┐
/// │   1. python  │
/// ├─ SENTENCES ──┤
/// │   1. ...     │
/// └──────────────┘
/// ```
pub struct Frame<'p> {
    painter: &'p Painter,
    lines: Vec<String>,
}

impl<'p> Frame<'p> {
    pub fn new(painter: &'p Painter) -> Self {
        Self {
            painter,
            lines: Vec::new(),
        }
    }

    /// Open the box, or divide it, with a labeled rule.
    pub fn section(&mut self, label: &str) {
        let (left, right) = if self.lines.is_empty() { ('┌', '┐') } else { ('├', '┤') };
        let label = format!(" {} ", label);
        let rule = "─".repeat(BOX_WIDTH.saturating_sub(label.chars().count() + 1));
        self.lines.push(format!(
            "{}{}{}",
            self.painter.paint(Tone::Frame, &format!("{left}─")),
            self.painter.paint(Tone::Heading, &label),
            self.painter.paint(Tone::Frame, &format!("{rule}{right}")),
        ));
    }

    /// One content row. Spans are plain text; the row is padded to the box width.
    pub fn row(&mut self, spans: &[(Tone, &str)]) {
        let width: usize = spans.iter().map(|(_, text)| text.chars().count()).sum();
        let bar = self.painter.paint(Tone::Frame, "│");
        let mut line = bar.clone();
        for (tone, text) in spans {
            line.push_str(&self.painter.paint(*tone, text));
        }
        line.push_str(&" ".repeat(BOX_WIDTH.saturating_sub(width)));
        line.push_str(&bar);
        self.lines.push(line);
    }

    /// Close the box and return it as text, one line per row.
    pub fn finish(mut self) -> String {
        let bottom = format!("└{}┘", "─".repeat(BOX_WIDTH));
        self.lines.push(self.painter.paint(Tone::Frame, &bottom));
        self.lines.join("\n")
    }
}
