use crate::error::{JsonLdError, UserFriendlyError};
use console::{style, Emoji, Term};
use std::io::{self, Write};

/// How extraction results are presented. Exactly one mode applies per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationMode {
    /// Human-readable text report on stdout.
    Report,
    /// One JSON array per page under the extracted directory.
    PerFile,
    /// A single `@graph` document, written to a file or printed to stdout.
    Combined { write_file: bool },
}

impl PresentationMode {
    pub fn from_flags(combined: bool, write_json: bool) -> Self {
        match (combined, write_json) {
            (true, write_file) => PresentationMode::Combined { write_file },
            (false, true) => PresentationMode::PerFile,
            (false, false) => PresentationMode::Report,
        }
    }
}

static CROSS: Emoji = Emoji("❌ ", "✗ ");
static INFO: Emoji = Emoji("ℹ️  ", "i ");
static WARNING: Emoji = Emoji("⚠️  ", "! ");

/// Results go to stdout; everything else (status, warnings, errors) goes to stderr
/// so the JSON and report output stays clean when piped.
///
/// `--quiet` hides status and debug lines only. Warnings about skipped blocks and
/// errors are always printed.
pub struct OutputFormatter {
    stdout: Term,
    stderr: Term,
    use_colors: bool,
    verbose_level: u8,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(verbose: u8, quiet: bool) -> Self {
        let stderr = Term::stderr();
        let use_colors = stderr.features().colors_supported() && !quiet;

        Self {
            stdout: Term::stdout(),
            stderr,
            use_colors,
            verbose_level: if quiet { 0 } else { verbose },
            quiet,
        }
    }

    /// Primary output: always shown, even in quiet mode.
    pub fn result(&self, message: &str) -> io::Result<()> {
        self.stdout.write_line(message)
    }

    /// Pre-rendered multi-line output, written as-is.
    pub fn print_block(&self, text: &str) -> io::Result<()> {
        let mut stdout = &self.stdout;
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }

    pub fn error(&self, message: &str) {
        self.print_status(MessageType::Error, message);
    }

    /// Recoverable problems; shown at every verbosity.
    pub fn warning(&self, message: &str) {
        self.print_status(MessageType::Warning, message);
    }

    pub fn info(&self, message: &str) {
        if self.should_show_message(1) {
            self.print_status(MessageType::Info, message);
        }
    }

    pub fn debug(&self, message: &str) {
        if self.should_show_message(2) {
            let line = if self.use_colors {
                format!("  {}", style(message).dim())
            } else {
                format!("  DEBUG: {}", message)
            };
            let _ = self.stderr.write_line(&line);
        }
    }

    pub fn print_user_friendly_error(&self, error: &JsonLdError) {
        self.error(&error.user_message());

        if let Some(suggestion) = error.suggestion() {
            let line = if self.use_colors {
                format!(
                    "{}{}",
                    INFO,
                    style(format!("Suggestion: {}", suggestion)).cyan()
                )
            } else {
                format!("Suggestion: {}", suggestion)
            };
            let _ = self.stderr.write_line(&line);
        }
    }

    fn should_show_message(&self, min_verbose_level: u8) -> bool {
        !self.quiet && self.verbose_level >= min_verbose_level
    }

    fn print_status(&self, msg_type: MessageType, message: &str) {
        let line = if self.use_colors {
            let (emoji, styled) = match msg_type {
                MessageType::Error => (CROSS, style(message).red().bold()),
                MessageType::Warning => (WARNING, style(message).yellow()),
                MessageType::Info => (INFO, style(message).cyan()),
            };
            format!("{}{}", emoji, styled)
        } else {
            match msg_type {
                MessageType::Warning => format!("  Warning: {}", message),
                MessageType::Error => message.to_string(),
                MessageType::Info => format!("i {}", message),
            }
        };

        let _ = self.stderr.write_line(&line);
    }
}

#[derive(Debug, Clone, Copy)]
enum MessageType {
    Error,
    Warning,
    Info,
}
