// SPDX-License-Identifier: MPL-2.0
//! Diagnostic types reported by the lightbox.

use chrono::{DateTime, Utc};
use std::fmt;

/// Type of a host-supplied value, named the way web hosts name them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Number,
    Boolean,
    Object,
    Undefined,
}

impl ValueKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Object => "object",
            ValueKind::Undefined => "undefined",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recoverable problems surfaced to the host instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A callback slot received something that cannot be called.
    CallbackNotCallable {
        callback: &'static str,
        received: ValueKind,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::CallbackNotCallable { callback, received } => write!(
                f,
                "you are not passing a function in your \"{callback}\" callback! You are passing a {received}."
            ),
        }
    }
}

/// A diagnostic with the wall-clock time it was reported.
#[derive(Debug, Clone)]
pub struct DiagnosticRecord {
    pub at: DateTime<Utc>,
    pub diagnostic: Diagnostic,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_diagnostic_names_callback_and_type() {
        let diagnostic = Diagnostic::CallbackNotCallable {
            callback: "onSlideChange",
            received: ValueKind::String,
        };
        let message = diagnostic.to_string();
        assert!(message.contains("\"onSlideChange\""));
        assert!(message.ends_with("You are passing a string."));
    }
}
