//! Pattern-driven scan of generated text for output calls.

use std::sync::LazyLock;

use miru_types::{OutputCall, OutputKind, SourceFile, Span};
use regex::Regex;

/// Argument of a `%d`/`%f` call: everything up to the first `)` on the line.
const EXPR_ARGUMENT: &str = r"[^)\r\n]+";

/// Argument of a `%s` call: a quoted literal (which may itself contain `)`
/// and escaped quotes), falling back to the plain expression form.
const TEXT_ARGUMENT: &str = r#""(?:[^"\\\r\n]|\\.)*"[ \t]*|[^)\r\n]+"#;

/// One compiled pattern per output kind.
///
/// Compiled once per process on first use. The `\\n` in each pattern matches
/// the two-character escape `\n` as it appears in C source, not a newline.
///
/// The argument may not span lines, and only spaces or tabs may separate it
/// from the comma. `printf("%d\n",` with its argument on the next line is
/// deliberately not recognized, even though a `\s*` separator would accept
/// it, so that an unterminated call cannot swallow the statements after it.
static CALL_PATTERNS: LazyLock<Vec<(OutputKind, Regex)>> = LazyLock::new(|| {
    OutputKind::ALL
        .iter()
        .map(|&kind| {
            let argument = match kind {
                OutputKind::Text => TEXT_ARGUMENT,
                OutputKind::Integer | OutputKind::Float => EXPR_ARGUMENT,
            };
            let pattern = format!(
                r#"printf\("{}\\n",[ \t]*({argument})\)"#,
                kind.specifier()
            );
            let re = Regex::new(&pattern).expect("output call pattern is a valid regex");
            (kind, re)
        })
        .collect()
});

/// Scans one generated text for output calls.
pub struct Extractor<'src> {
    source: SourceFile<'src>,
}

impl<'src> Extractor<'src> {
    /// Create an extractor over the given generated text.
    pub fn new(text: &'src str) -> Self {
        Self {
            source: SourceFile::new(text),
        }
    }

    /// The indexed text, for mapping call offsets to line/column.
    pub fn source(&self) -> &SourceFile<'src> {
        &self.source
    }

    /// Every recognized output call, ordered by position in the text.
    ///
    /// Kinds are scanned one after another, so the merged list must be
    /// re-sorted; otherwise all integer calls would precede all float calls
    /// regardless of where they appear.
    pub fn extract(&self) -> Vec<OutputCall> {
        let mut calls = Vec::new();

        for (kind, re) in CALL_PATTERNS.iter() {
            let before = calls.len();
            for caps in re.captures_iter(self.source.text) {
                let (Some(whole), Some(arg)) = (caps.get(0), caps.get(1)) else {
                    continue;
                };
                let raw_expression = arg.as_str().trim();

                if *kind == OutputKind::Text && !is_quoted_literal(raw_expression) {
                    let (line, column) = self.source.line_col(whole.start());
                    tracing::trace!(line, column, raw_expression, "skipping non-literal %s argument");
                    continue;
                }

                calls.push(OutputCall {
                    kind: *kind,
                    raw_expression: raw_expression.to_string(),
                    source_order: whole.start(),
                    span: Span::new(whole.start(), whole.end()),
                });
            }
            tracing::trace!(kind = %kind, found = calls.len() - before, "scanned output calls");
        }

        calls.sort_by_key(|call| call.source_order);

        tracing::debug!(total = calls.len(), "extracted output calls");
        calls
    }
}

/// Extract the output calls of `text` in document order.
pub fn extract(text: &str) -> Vec<OutputCall> {
    Extractor::new(text).extract()
}

fn is_quoted_literal(expr: &str) -> bool {
    expr.len() >= 2 && expr.starts_with('"') && expr.ends_with('"')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_literal() {
        assert!(is_quoted_literal("\"hi\""));
        assert!(is_quoted_literal("\"\""));
        assert!(!is_quoted_literal("\""));
        assert!(!is_quoted_literal("name"));
        assert!(!is_quoted_literal("\"open"));
    }

    #[test]
    fn test_patterns_compile() {
        assert_eq!(CALL_PATTERNS.len(), 3);
    }
}
