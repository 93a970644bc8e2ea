//! Structured logging
//!
//! Synchronous line-oriented JSON logs. Info and warning lines go to
//! stdout and can be muted globally; critical lines always reach
//! stderr, muted or not, because they flag conditions (like a missing
//! template) that the caller must see to act on.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;

/// Global mute switch for non-critical output.
static MUTED: AtomicBool = AtomicBool::new(false);

/// Log line severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
        }
    }
}

pub struct Logger;

impl Logger {
    /// Silences info and warning output. Critical lines still print.
    pub fn set_muted(muted: bool) {
        MUTED.store(muted, Ordering::Relaxed);
    }

    pub fn is_muted() -> bool {
        MUTED.load(Ordering::Relaxed)
    }

    pub fn info(component: &str, message: &str) {
        if Self::is_muted() {
            return;
        }
        let line = format_line(Severity::Info, component, message);
        println!("{}", line);
    }

    pub fn warning(component: &str, message: &str) {
        if Self::is_muted() {
            return;
        }
        let line = format_line(Severity::Warning, component, message);
        println!("{}", line);
    }

    /// Critical lines bypass the mute switch.
    pub fn critical(component: &str, message: &str) {
        let line = format_line(Severity::Critical, component, message);
        eprintln!("{}", line);
    }

    /// Writer seam used by tests to capture formatted output.
    pub fn log_to_writer<W: Write>(
        writer: &mut W,
        severity: Severity,
        component: &str,
        message: &str,
    ) -> std::io::Result<()> {
        writeln!(writer, "{}", format_line(severity, component, message))
    }
}

fn format_line(severity: Severity, component: &str, message: &str) -> String {
    format!(
        r#"{{"ts":"{}","severity":"{}","component":"{}","message":"{}"}}"#,
        Utc::now().to_rfc3339(),
        severity.as_str(),
        escape_json_string(component),
        escape_json_string(message)
    )
}

fn escape_json_string(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
