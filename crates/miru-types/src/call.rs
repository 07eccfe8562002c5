use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Span;

/// Which `printf` format specifier an output call used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// `printf("%d\n", ...)`
    Integer,
    /// `printf("%f\n", ...)`
    Float,
    /// `printf("%s\n", ...)` with a quoted literal argument.
    Text,
}

impl OutputKind {
    /// All kinds, in the order the extractor scans for them.
    pub const ALL: [OutputKind; 3] = [Self::Integer, Self::Float, Self::Text];

    /// The `printf` conversion this kind corresponds to.
    pub fn specifier(self) -> &'static str {
        match self {
            Self::Integer => "%d",
            Self::Float => "%f",
            Self::Text => "%s",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// One recognized output statement in the generated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputCall {
    pub kind: OutputKind,
    /// Argument expression, trimmed of surrounding whitespace.
    pub raw_expression: String,
    /// Byte offset of the call; orders calls across kinds.
    pub source_order: usize,
    /// The whole matched call.
    pub span: Span,
}

impl OutputCall {
    /// Content of a `Text` call's literal with the enclosing quotes removed.
    ///
    /// Returns `None` for non-text calls or arguments that are not a quoted
    /// literal.
    pub fn literal_text(&self) -> Option<&str> {
        if self.kind != OutputKind::Text {
            return None;
        }
        self.raw_expression
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
    }
}
