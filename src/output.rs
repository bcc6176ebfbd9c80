//! Output sinks and line printers.
//!
//! Everything user-facing goes through an `OutputSink`: the console in the
//! binary, a `BufferSink` in tests, a `NullSink` when used as a library.
//! Printers compose the line text (`ERROR: ...`, `WARNING: ...`,
//! `* name:\tvalue`) and only colorize when the sink asks for it.

use crate::models::{Diagnostic, Severity};
use crate::utils;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Channel of an emitted line.
pub enum LineKind {
    Info,
    Debug,
    Warning,
    Error,
}

/// Accepts lines of text in program order.
pub trait OutputSink {
    fn write_line(&mut self, kind: LineKind, line: &str);

    fn use_colors(&self) -> bool {
        false
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn write_line(&mut self, kind: LineKind, line: &str) {
        (**self).write_line(kind, line)
    }

    fn use_colors(&self) -> bool {
        (**self).use_colors()
    }
}

/// Console output: errors and warnings on stderr, the rest on stdout.
pub struct ConsoleSink {
    color: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            color: std::env::var_os("NO_COLOR").is_none(),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for ConsoleSink {
    fn write_line(&mut self, kind: LineKind, line: &str) {
        match kind {
            LineKind::Error | LineKind::Warning => eprintln!("{}", line),
            LineKind::Info | LineKind::Debug => println!("{}", line),
        }
    }

    fn use_colors(&self) -> bool {
        self.color
    }
}

#[derive(Debug, Default)]
/// Collects everything written into one string.
pub struct BufferSink {
    data: String,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn written(&self) -> &str {
        &self.data
    }
}

impl OutputSink for BufferSink {
    fn write_line(&mut self, _kind: LineKind, line: &str) {
        self.data.push_str(line);
        self.data.push('\n');
    }
}

#[derive(Debug, Default, Clone, Copy)]
/// Discards all output.
pub struct NullSink;

impl OutputSink for NullSink {
    fn write_line(&mut self, _kind: LineKind, _line: &str) {}
}

/// Print a diagnostic as `ERROR: <message>` or `WARNING: <message>`.
pub fn print_diagnostic(sink: &mut dyn OutputSink, diagnostic: &Diagnostic) {
    let color = sink.use_colors();
    let (kind, prefix) = match diagnostic.severity {
        Severity::Error => (LineKind::Error, utils::error_prefix(color)),
        Severity::Warning => (LineKind::Warning, utils::warn_prefix(color)),
    };
    sink.write_line(kind, &format!("{} {}", prefix, diagnostic.message));
}

/// Print a plain informational line.
pub fn print_info(sink: &mut dyn OutputSink, text: &str) {
    sink.write_line(LineKind::Info, text);
}

/// Print a verbose detail line as `* <text>`.
pub fn print_debug(sink: &mut dyn OutputSink, text: &str) {
    let prefix = utils::debug_prefix(sink.use_colors());
    sink.write_line(LineKind::Debug, &format!("{} {}", prefix, text));
}
