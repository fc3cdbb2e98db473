//! Logging utilities with colored output and progress display.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro, only printed with `--verbose`
//! - `ProgressLine` for a single in-place progress counter
//!
//! Everything goes to stderr; stdout is reserved for command output such as
//! a migrated post or formatted slugs.
//!
//! # Example
//!
//! ```ignore
//! log!("migrate"; "{} posts", count);
//!
//! let mut progress = ProgressLine::new("posts", 40);
//! progress.inc();
//! progress.finish();
//! ```

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use owo_colors::{OwoColorize, Stream, Style};
use std::io::{IsTerminal, Write, stderr};
use std::sync::atomic::{AtomicBool, Ordering};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Whether a progress line currently occupies the last terminal line
static PROGRESS_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);
    let mut stderr = stderr().lock();

    // Overwrite the progress line; the next update redraws it below
    if PROGRESS_ACTIVE.load(Ordering::SeqCst) {
        execute!(
            stderr,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine)
        )
        .ok();
    }

    writeln!(stderr, "{prefix} {message}").ok();
    stderr.flush().ok();
}

/// Apply color to a module prefix based on module type
///
/// Honors the global `--color` override and whether stderr supports color.
fn colorize_prefix(module: &str) -> String {
    let style = match module.to_ascii_lowercase().as_str() {
        "error" => Style::new().bright_red().bold(),
        "warning" => Style::new().bright_magenta().bold(),
        "migrate" | "done" => Style::new().bright_green().bold(),
        "skip" => Style::new().bright_blue().bold(),
        _ => Style::new().bright_yellow().bold(),
    };
    format!("[{module}]")
        .if_supports_color(Stream::Stderr, move |prefix| prefix.style(style))
        .to_string()
}

// ============================================================================
// Progress Line (single-line counter)
// ============================================================================

/// Single-line progress display
///
/// Displays: `[migrate] posts(42/69)`, updated in place. Disabled when
/// stderr is not a terminal.
pub struct ProgressLine {
    name: &'static str,
    total: usize,
    current: usize,
    enabled: bool,
}

impl ProgressLine {
    pub fn new(name: &'static str, total: usize) -> Self {
        let enabled = total > 0 && stderr().is_terminal();
        PROGRESS_ACTIVE.store(enabled, Ordering::SeqCst);

        let progress = Self {
            name,
            total,
            current: 0,
            enabled,
        };
        progress.display(false);
        progress
    }

    pub fn inc(&mut self) {
        self.current = (self.current + 1).min(self.total);
        self.display(false);
    }

    fn line(&self) -> String {
        format!(
            "{} {}({}/{})",
            colorize_prefix("migrate"),
            self.name,
            self.current,
            self.total
        )
    }

    fn display(&self, newline: bool) {
        if !self.enabled {
            return;
        }

        let mut stderr = stderr().lock();
        execute!(
            stderr,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine)
        )
        .ok();
        if newline {
            writeln!(stderr, "{}", self.line()).ok();
        } else {
            write!(stderr, "{}", self.line()).ok();
        }
        stderr.flush().ok();
    }

    /// Keep the final counts on screen and move to the next line.
    pub fn finish(mut self) {
        self.display(true);
        self.enabled = false;
    }
}

impl Drop for ProgressLine {
    fn drop(&mut self) {
        PROGRESS_ACTIVE.store(false, Ordering::SeqCst);

        // Clear the line if not finished properly
        if self.enabled {
            let mut stderr = stderr().lock();
            execute!(
                stderr,
                cursor::MoveToColumn(0),
                Clear(ClearType::CurrentLine)
            )
            .ok();
            stderr.flush().ok();
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_follows_color_override() {
        owo_colors::set_override(false);
        assert_eq!(colorize_prefix("error"), "[error]");
        assert_eq!(colorize_prefix("slug"), "[slug]");

        owo_colors::set_override(true);
        let colored = colorize_prefix("error");
        assert!(colored.contains("[error]"));
        assert!(colored.contains('\u{1b}'));

        owo_colors::unset_override();
    }

    #[test]
    fn test_progress_counts_saturate() {
        let mut progress = ProgressLine::new("posts", 2);
        progress.inc();
        progress.inc();
        progress.inc();
        assert_eq!(progress.current, 2);
        progress.finish();
        assert!(!PROGRESS_ACTIVE.load(Ordering::SeqCst));
    }

    #[test]
    fn test_progress_empty_is_disabled() {
        let progress = ProgressLine::new("posts", 0);
        assert!(!progress.enabled);
    }
}
