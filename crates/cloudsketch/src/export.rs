//! Diagram exporters.
//!
//! The only export target is the Graphviz DOT AST from the
//! `dot-structures` crate; everything downstream of that (layout, edge
//! routing, rasterization) is Graphviz's job.

pub(crate) mod dot;

/// Escapes a string for use inside a double-quoted DOT value.
///
/// Embedded newlines become the `\n` escape so multi-line labels survive
/// the trip through the DOT source.
pub(crate) fn escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::escape;

    #[test]
    fn escapes_quotes_backslashes_and_newlines() {
        assert_eq!(escape(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape("a\\b"), "a\\\\b");
        assert_eq!(escape("line one\nline two"), "line one\\nline two");
        assert_eq!(escape("plain"), "plain");
    }
}
