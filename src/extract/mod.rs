//! Doc Comment Extraction
//!
//! Pulls the leading or primary documentation comment out of a source file:
//! - Kotlin/Java: doc comment attached to a class declaration (tree-sitter)
//! - Python: module docstring at the start of the file
//! - JavaScript/TypeScript: first `/** ... */` block
//!
//! Extraction never fails on content. A file that does not match its
//! convention simply yields an empty string.
//!
//! ```rust,ignore
//! use structdoc::extract::{DocExtractor, LanguageClass};
//!
//! let extractor = DocExtractor::new()?;
//! let doc = extractor.extract("'''Hello'''", LanguageClass::Python);
//! assert_eq!(doc, "Hello");
//! ```

pub mod language;
pub mod patterns;
pub mod structured;

pub use language::LanguageClass;
pub use patterns::DocPatterns;

use serde::{Deserialize, Serialize};

use crate::snapshot::DirectoryEntry;
use crate::types::Result;

/// How Kotlin/Java documentation is located
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum KotlinJavaStrategy {
    /// Doc comment attached to a class-like declaration
    #[default]
    ClassDeclaration,
    /// First `/** ... */` block anywhere in the file
    FirstBlock,
}

impl std::fmt::Display for KotlinJavaStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KotlinJavaStrategy::ClassDeclaration => write!(f, "class-declaration"),
            KotlinJavaStrategy::FirstBlock => write!(f, "first-block"),
        }
    }
}

impl std::str::FromStr for KotlinJavaStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "class-declaration" | "class" => Ok(KotlinJavaStrategy::ClassDeclaration),
            "first-block" | "block" => Ok(KotlinJavaStrategy::FirstBlock),
            _ => Err(format!(
                "Unknown Kotlin/Java strategy: {}. Valid values: class-declaration, first-block",
                s
            )),
        }
    }
}

/// Extracts documentation text from file content
#[derive(Debug, Clone)]
pub struct DocExtractor {
    patterns: DocPatterns,
    kotlin_java: KotlinJavaStrategy,
}

impl DocExtractor {
    pub fn new() -> Result<Self> {
        Self::with_strategy(KotlinJavaStrategy::default())
    }

    pub fn with_strategy(kotlin_java: KotlinJavaStrategy) -> Result<Self> {
        if kotlin_java == KotlinJavaStrategy::ClassDeclaration {
            structured::check_grammars()?;
        }
        Ok(Self {
            patterns: DocPatterns::new()?,
            kotlin_java,
        })
    }

    /// Extract the documentation text for `content`, or an empty string.
    pub fn extract(&self, content: &str, language: LanguageClass) -> String {
        match language {
            LanguageClass::KotlinJava => match self.kotlin_java {
                KotlinJavaStrategy::ClassDeclaration => structured::class_doc(content),
                KotlinJavaStrategy::FirstBlock => self.patterns.first_block_doc(content),
            },
            LanguageClass::Python => self.patterns.python_docstring(content),
            LanguageClass::JavaScriptFamily => self.patterns.first_block_doc(content),
            LanguageClass::Unknown => String::new(),
        }
    }

    /// Classify a snapshot file and extract its documentation.
    ///
    /// Returns None for directories, unknown languages and unreadable content.
    pub fn extract_entry(&self, entry: &DirectoryEntry) -> Option<String> {
        if entry.is_directory() {
            return None;
        }

        let language = entry
            .extension()
            .map(LanguageClass::from_extension)
            .unwrap_or_default();
        if !language.is_documented() {
            return None;
        }

        let Some(content) = entry.read_text() else {
            tracing::debug!("No readable content for {}", entry.name);
            return None;
        };

        Some(self.extract(&content, language))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> DocExtractor {
        DocExtractor::new().unwrap()
    }

    #[test]
    fn test_python_round_trip() {
        assert_eq!(
            extractor().extract("'''Hello\nWorld'''", LanguageClass::Python),
            "Hello\nWorld"
        );
    }

    #[test]
    fn test_javascript_first_block_only() {
        let src = "/** First */\nfunction a() {}\n/** Second */\nfunction b() {}\n";
        assert_eq!(
            extractor().extract(src, LanguageClass::JavaScriptFamily),
            "First"
        );
    }

    #[test]
    fn test_unknown_never_inspects() {
        assert_eq!(
            extractor().extract("/** looks like a doc */", LanguageClass::Unknown),
            ""
        );
    }

    #[test]
    fn test_extract_is_idempotent() {
        let ex = extractor();
        let src = "\"\"\"Stable\"\"\"\n";
        let first = ex.extract(src, LanguageClass::Python);
        let second = ex.extract(src, LanguageClass::Python);
        assert_eq!(first, second);
        assert_eq!(first, "Stable");
    }

    #[test]
    fn test_binary_content_yields_empty() {
        let ex = extractor();
        let garbage = String::from_utf8_lossy(&[0u8, 159, 146, 150, 0xff, 0x2f]).into_owned();
        for language in [
            LanguageClass::KotlinJava,
            LanguageClass::Python,
            LanguageClass::JavaScriptFamily,
        ] {
            assert_eq!(ex.extract(&garbage, language), "");
        }
    }

    #[test]
    fn test_kotlin_java_strategies_differ() {
        let src = r#"/** Helper docs */
fun helper() {}

/** Widget docs */
class Widget
"#;
        let class = DocExtractor::with_strategy(KotlinJavaStrategy::ClassDeclaration).unwrap();
        let block = DocExtractor::with_strategy(KotlinJavaStrategy::FirstBlock).unwrap();

        assert_eq!(class.extract(src, LanguageClass::KotlinJava), "Widget docs");
        assert_eq!(block.extract(src, LanguageClass::KotlinJava), "Helper docs");
    }

    #[test]
    fn test_extract_entry() {
        let ex = extractor();

        let py = DirectoryEntry::file("util.py", "\"\"\"Utility functions\"\"\"");
        assert_eq!(ex.extract_entry(&py).as_deref(), Some("Utility functions"));

        let undocumented = DirectoryEntry::file("main.py", "print('hi')");
        assert_eq!(ex.extract_entry(&undocumented).as_deref(), Some(""));

        let md = DirectoryEntry::file("README.md", "/** not code */");
        assert_eq!(ex.extract_entry(&md), None);

        let dir = DirectoryEntry::directory("lib", vec![]);
        assert_eq!(ex.extract_entry(&dir), None);
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!(
            "first-block".parse::<KotlinJavaStrategy>(),
            Ok(KotlinJavaStrategy::FirstBlock)
        );
        assert_eq!(
            "class".parse::<KotlinJavaStrategy>(),
            Ok(KotlinJavaStrategy::ClassDeclaration)
        );
        assert!("ast".parse::<KotlinJavaStrategy>().is_err());
        assert_eq!(KotlinJavaStrategy::FirstBlock.to_string(), "first-block");
    }
}
