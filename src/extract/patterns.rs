//! Pattern-based doc comment extraction.

use regex::Regex;

use crate::types::Result;

/// Leading whitespace, then a symmetric triple-quoted string at file start.
const PYTHON_DOCSTRING: &str = r#"(?s)\A\s*(?:'''(.*?)'''|"""(.*?)""")"#;

/// First `/**` through the next `*/`, anywhere in the file.
const BLOCK_DOC: &str = r"(?s)/\*\*(.*?)\*/";

/// Compiled extraction patterns
#[derive(Debug, Clone)]
pub struct DocPatterns {
    python: Regex,
    block: Regex,
}

impl DocPatterns {
    pub fn new() -> Result<Self> {
        Ok(Self {
            python: Regex::new(PYTHON_DOCSTRING)?,
            block: Regex::new(BLOCK_DOC)?,
        })
    }

    /// Module docstring at the very start of a Python file, trimmed.
    pub fn python_docstring(&self, content: &str) -> String {
        self.python
            .captures(content)
            .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default()
    }

    /// Interior of the first `/** ... */` block, trimmed.
    pub fn first_block_doc(&self, content: &str) -> String {
        self.block
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default()
    }
}

/// Strip `/**` and `*/` from a doc comment's full text and trim.
pub fn strip_block_delimiters(comment: &str) -> String {
    let inner = comment.strip_prefix("/**").unwrap_or(comment);
    let inner = inner.strip_suffix("*/").unwrap_or(inner);
    inner.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> DocPatterns {
        DocPatterns::new().unwrap()
    }

    #[test]
    fn test_python_single_quotes_multiline() {
        assert_eq!(patterns().python_docstring("'''Hello\nWorld'''"), "Hello\nWorld");
    }

    #[test]
    fn test_python_double_quotes_after_whitespace() {
        let src = "\n\n   \"\"\"  Utility functions\n\"\"\"\nimport os\n";
        assert_eq!(patterns().python_docstring(src), "Utility functions");
    }

    #[test]
    fn test_python_requires_docstring_at_start() {
        let src = "import os\n\"\"\"Not a module docstring\"\"\"\n";
        assert_eq!(patterns().python_docstring(src), "");
    }

    #[test]
    fn test_python_delimiters_are_symmetric() {
        assert_eq!(patterns().python_docstring("'''open\"\"\" still open"), "");
        assert_eq!(
            patterns().python_docstring("\"\"\"has ''' inside\"\"\""),
            "has ''' inside"
        );
    }

    #[test]
    fn test_python_comment_before_docstring_is_no_match() {
        assert_eq!(patterns().python_docstring("# header\n'''doc'''"), "");
    }

    #[test]
    fn test_block_returns_first_only() {
        let src = "/** First comment */\nconst a = 1;\n/** Second comment */\n";
        assert_eq!(patterns().first_block_doc(src), "First comment");
    }

    #[test]
    fn test_block_keeps_interior_verbatim() {
        let src = "/**\n * Line one\n * Line two\n */\nexport default {}";
        assert_eq!(patterns().first_block_doc(src), "* Line one\n * Line two");
    }

    #[test]
    fn test_block_ignores_plain_block_comment() {
        assert_eq!(patterns().first_block_doc("/* plain */ let x;"), "");
    }

    #[test]
    fn test_block_unterminated() {
        assert_eq!(patterns().first_block_doc("/** never closed"), "");
    }

    #[test]
    fn test_strip_block_delimiters() {
        assert_eq!(strip_block_delimiters("/** Doc */"), "Doc");
        assert_eq!(strip_block_delimiters("/**\n * Doc\n */"), "* Doc");
    }
}
