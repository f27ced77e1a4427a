use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Width of banners and closing rules.
pub const BANNER_WIDTH: usize = 80;

/// Kind of operator-facing message: picks the colour and the icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn colour(self) -> &'static str {
        match self {
            Tone::Info => "\x1b[34m",
            Tone::Success => "\x1b[32m",
            Tone::Warning => "\x1b[33m",
            Tone::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tone::Info => "ℹ️",
            Tone::Success => "✅",
            Tone::Warning => "⚠️",
            Tone::Error => "❌",
        }
    }

    fn paint(self, msg: impl fmt::Display) -> String {
        format!("{}{}{}{} {msg}", self.colour(), BOLD, self.icon(), RESET)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", Tone::Info.paint(msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", Tone::Success.paint(msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", Tone::Warning.paint(msg));
}

/// Errors go to stderr.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", Tone::Error.paint(msg));
}

/// Application banner: a full-width rule, the centered title, another rule.
pub fn header<T: fmt::Display>(msg: T) {
    let rule = "=".repeat(BANNER_WIDTH);
    println!("\n{rule}");
    println!(
        "{}{}{:^width$}{}",
        Tone::Info.colour(),
        BOLD,
        msg.to_string(),
        RESET,
        width = BANNER_WIDTH
    );
    println!("{rule}");
}

/// Section banner used between the collection steps.
pub fn section_banner(title: &str, width: usize) -> String {
    let rule = "=".repeat(width);
    let inner = width.saturating_sub(4);
    format!("\n{rule}\n  {title:^inner$}\n{rule}")
}
