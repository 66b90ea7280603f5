//! Output sink for the tutor. Injected wherever text is rendered; there is no
//! global console.

use std::io::{self, IsTerminal, Write};

/// How a line should be styled. Plain sinks ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Heading,
    Emphasis,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn ansi(self) -> Option<&'static str> {
        match self {
            Tone::Plain => None,
            Tone::Heading => Some("\x1b[1;36m"),
            Tone::Emphasis => Some("\x1b[1m"),
            Tone::Success => Some("\x1b[32m"),
            Tone::Warning => Some("\x1b[33m"),
            Tone::Error => Some("\x1b[31m"),
        }
    }
}

const ANSI_RESET: &str = "\x1b[0m";

pub trait Console {
    fn line(&mut self, tone: Tone, text: &str) -> io::Result<()>;

    fn panel(&mut self, title: &str, body: &str) -> io::Result<()>;

    fn blank(&mut self) -> io::Result<()> {
        self.line(Tone::Plain, "")
    }
}

/// Render `body` inside an ASCII box with `title` in the top border.
///
/// Leading and trailing blank lines of `body` are dropped; everything else
/// is kept verbatim.
pub fn render_panel(title: &str, body: &str) -> String {
    let lines: Vec<&str> = body.trim_matches('\n').lines().collect();
    let title_width = title.chars().count();
    let inner = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(title_width + 3);

    let mut out = String::new();
    let rule = "-".repeat(inner - title_width - 2);
    out.push_str(&format!("+-- {title} {rule}+\n"));
    for line in &lines {
        let pad = inner - line.chars().count();
        out.push_str(&format!("| {line}{} |\n", " ".repeat(pad)));
    }
    out.push_str(&format!("+{}+\n", "-".repeat(inner + 2)));
    out
}

/// Console over any writer. Colors only when asked for and writing to a tty.
pub struct TerminalConsole<W> {
    out: W,
    color: bool,
}

impl TerminalConsole<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        let out = io::stdout();
        let color = color && out.is_terminal();
        Self { out, color }
    }
}

impl<W: Write> TerminalConsole<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, tone: Tone, text: &str) -> String {
        match tone.ansi() {
            Some(code) if self.color && !text.is_empty() => format!("{code}{text}{ANSI_RESET}"),
            _ => text.to_owned(),
        }
    }
}

impl<W: Write> Console for TerminalConsole<W> {
    fn line(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        let painted = self.paint(tone, text);
        writeln!(self.out, "{painted}")?;
        self.out.flush()
    }

    fn panel(&mut self, title: &str, body: &str) -> io::Result<()> {
        let rendered = render_panel(title, body);
        let mut lines = rendered.lines();
        if let Some(top) = lines.next() {
            let top = self.paint(Tone::Heading, top);
            writeln!(self.out, "{top}")?;
        }
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }
}

/// Records everything written as plain text. Used to assert on sessions.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    lines: Vec<String>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn transcript(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}

impl Console for MemoryConsole {
    fn line(&mut self, _tone: Tone, text: &str) -> io::Result<()> {
        self.lines.extend(text.split('\n').map(str::to_owned));
        Ok(())
    }

    fn panel(&mut self, title: &str, body: &str) -> io::Result<()> {
        self.lines
            .extend(render_panel(title, body).lines().map(str::to_owned));
        Ok(())
    }
}
