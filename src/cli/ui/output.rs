//! Status output: banners plus `[OK]` / `[WARN]` lines.
//!
//! All writes go to a caller-supplied sink so the exact byte sequence can be
//! checked in tests; the binary passes stdout.

use std::io::{self, Write};

use console::Style;

use crate::constants::output::{OK_LABEL, RULE_CHAR, WARN_LABEL};

pub struct Output<W: Write> {
    out: W,
    colored: bool,
    /// Width of the last opening banner, reused for the closing rule
    banner_width: usize,
}

impl Output<io::Stdout> {
    pub fn stdout(colored: bool) -> Self {
        Self::new(io::stdout(), colored)
    }
}

impl<W: Write> Output<W> {
    pub fn new(out: W, colored: bool) -> Self {
        Self {
            out,
            colored,
            banner_width: 0,
        }
    }

    pub fn success(&mut self, message: &str) -> io::Result<()> {
        let line = format_success(message, self.colored);
        writeln!(self.out, "{}", line)
    }

    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        let line = format_warning(message, self.colored);
        writeln!(self.out, "{}", line)
    }

    pub fn banner_open(&mut self, title: &str) -> io::Result<()> {
        let line = opening_line(title);
        self.banner_width = line.chars().count();
        writeln!(self.out, "\n{}\n", line)?;
        self.out.flush()
    }

    pub fn banner_close(&mut self) -> io::Result<()> {
        let rule = closing_line(self.banner_width);
        writeln!(self.out, "\n{}\n", rule)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// `[OK]   message` in bright green
pub fn format_success(message: &str, colored: bool) -> String {
    paint(
        format!("{} {}", OK_LABEL, message),
        Style::new().green().bright(),
        colored,
    )
}

/// `[WARN] message` in bright red
pub fn format_warning(message: &str, colored: bool) -> String {
    paint(
        format!("{} {}", WARN_LABEL, message),
        Style::new().red().bright(),
        colored,
    )
}

fn paint(text: String, style: Style, colored: bool) -> String {
    style.force_styling(colored).apply_to(text).to_string()
}

fn opening_line(title: &str) -> String {
    let fence: String = std::iter::repeat_n(RULE_CHAR, 3).collect();
    format!("{} {} {}", fence, title, fence)
}

fn closing_line(width: usize) -> String {
    std::iter::repeat_n(RULE_CHAR, width.max(3)).collect()
}
