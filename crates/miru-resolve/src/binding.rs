//! Integer variable lookup in the generated text.
//!
//! There is no symbol table: each lookup re-scans the text for the first
//! `int <name> = <initializer>;` whose initializer contains only digits,
//! arithmetic operators and spaces.

use std::sync::LazyLock;

use regex::Regex;

static INT_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bint\s+([A-Za-z_][A-Za-z0-9_]*)\s*=\s*([0-9+\-*/% ]+);")
        .expect("integer declaration pattern is a valid regex")
});

/// A declaration found for a looked-up name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding<'src> {
    pub name: &'src str,
    /// Initializer text, untrimmed.
    pub initializer: &'src str,
    /// Byte offset of the declaration.
    pub offset: usize,
}

/// Find the first numeric `int` declaration of `name` in `text`.
///
/// Declarations whose initializer mentions another identifier (or anything
/// outside the numeric character set) are not candidates, so `int b = a;`
/// is never returned.
pub fn find_int_binding<'src>(text: &'src str, name: &str) -> Option<Binding<'src>> {
    INT_DECL.captures_iter(text).find_map(|caps| {
        let decl_name = caps.get(1)?;
        if decl_name.as_str() != name {
            return None;
        }
        let initializer = caps.get(2)?;
        Some(Binding {
            name: decl_name.as_str(),
            initializer: initializer.as_str(),
            offset: caps.get(0)?.start(),
        })
    })
}
