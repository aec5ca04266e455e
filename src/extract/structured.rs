//! Class-level doc comments for Kotlin and Java via tree-sitter.
//!
//! A doc comment counts when only whitespace separates it from a
//! class-like declaration. Both grammars are tried; an error-free tree wins.

use tree_sitter::{Node, Parser as TsParser, Tree};

use super::patterns::strip_block_delimiters;
use crate::types::{DocError, Result};

/// Declaration kinds across the Java and Kotlin grammars
const CLASS_KINDS: &[&str] = &[
    "class_declaration",
    "interface_declaration",
    "enum_declaration",
    "record_declaration",
    "annotation_type_declaration",
    "object_declaration",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grammar {
    Java,
    Kotlin,
}

impl Grammar {
    fn name(&self) -> &'static str {
        match self {
            Grammar::Java => "Java",
            Grammar::Kotlin => "Kotlin",
        }
    }

    fn language(&self) -> tree_sitter::Language {
        match self {
            Grammar::Java => tree_sitter_java::LANGUAGE.into(),
            Grammar::Kotlin => tree_sitter_kotlin_sg::LANGUAGE.into(),
        }
    }

    fn parser(&self) -> Result<TsParser> {
        let mut parser = TsParser::new();
        parser
            .set_language(&self.language())
            .map_err(|e| DocError::Parse {
                message: format!("Failed to set {} language: {}", self.name(), e),
                path: String::new(),
            })?;
        Ok(parser)
    }

    fn parse(&self, content: &str) -> Option<Tree> {
        match self.parser() {
            Ok(mut parser) => parser.parse(content, None),
            Err(e) => {
                tracing::debug!("{}", e);
                None
            }
        }
    }
}

/// Verify both grammars load.
pub fn check_grammars() -> Result<()> {
    Grammar::Java.parser()?;
    Grammar::Kotlin.parser()?;
    Ok(())
}

/// First doc comment attached to a class declaration, trimmed, or empty.
pub fn class_doc(content: &str) -> String {
    let mut fallback: Option<String> = None;

    for grammar in [Grammar::Java, Grammar::Kotlin] {
        let Some(tree) = grammar.parse(content) else {
            continue;
        };
        let root = tree.root_node();
        let doc = first_class_doc(root, content.as_bytes());

        if !root.has_error() {
            return doc.unwrap_or_default();
        }
        if fallback.is_none() {
            fallback = doc;
        }
    }

    fallback.unwrap_or_default()
}

fn first_class_doc(root: Node, source: &[u8]) -> Option<String> {
    let mut comments = Vec::new();
    let mut declarations = Vec::new();
    collect(root, &mut comments, &mut declarations);

    declarations.iter().find_map(|decl| {
        comments
            .iter()
            .find(|comment| is_attached(**comment, *decl, source))
            .and_then(|comment| doc_text(*comment, source))
    })
}

/// Gather comments and top-level declarations in document order.
///
/// Nested classes never document the file.
fn collect<'t>(node: Node<'t>, comments: &mut Vec<Node<'t>>, declarations: &mut Vec<Node<'t>>) {
    if node.kind().contains("comment") {
        comments.push(node);
        return;
    }
    if CLASS_KINDS.contains(&node.kind()) && is_top_level(node) {
        declarations.push(node);
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect(child, comments, declarations);
    }
}

/// Direct child of the `program` / `source_file` root
fn is_top_level(node: Node) -> bool {
    node.parent().is_some_and(|parent| parent.parent().is_none())
}

/// Only whitespace may separate the comment from the declaration.
///
/// Some grammars put a leading comment inside the declaration node, so a
/// comment starting exactly at the declaration also counts.
fn is_attached(comment: Node, decl: Node, source: &[u8]) -> bool {
    let (end, start) = (comment.end_byte(), decl.start_byte());
    if comment.start_byte() == start {
        return true;
    }
    end <= start
        && source
            .get(end..start)
            .is_some_and(|gap| gap.iter().all(u8::is_ascii_whitespace))
}

fn doc_text(comment: Node, source: &[u8]) -> Option<String> {
    let text = comment.utf8_text(source).ok()?;
    if !text.starts_with("/**") {
        return None;
    }
    let doc = strip_block_delimiters(text);
    (!doc.is_empty()).then_some(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grammars_load() {
        assert!(check_grammars().is_ok());
    }

    #[test]
    fn test_java_class_doc() {
        let src = r#"package com.example;

import java.util.List;

/**
 * Entry point for the service.
 */
public class Service {
    public void run() {}
}
"#;
        assert_eq!(class_doc(src), "* Entry point for the service.");
    }

    #[test]
    fn test_java_annotated_class() {
        let src = "/** Configured bean */\n@Deprecated\npublic class Bean {}\n";
        assert_eq!(class_doc(src), "Configured bean");
    }

    #[test]
    fn test_java_skips_doc_on_non_class_element() {
        let src = r#"public class Outer {
    /** Field docs */
    private int count;
}
"#;
        assert_eq!(class_doc(src), "");
    }

    #[test]
    fn test_java_nested_class_doc_ignored() {
        let src = "public class Outer {\n    /** Inner docs */\n    static class Inner {}\n}\n";
        assert_eq!(class_doc(src), "");
    }

    #[test]
    fn test_kotlin_nested_class_doc_ignored() {
        let src = "class Outer {\n    /** Inner docs */\n    class Inner\n}\n";
        assert_eq!(class_doc(src), "");
    }

    #[test]
    fn test_later_top_level_class_doc_found() {
        let src = "class First {}\n\n/** Second docs */\nclass Second {}\n";
        assert_eq!(class_doc(src), "Second docs");
    }

    #[test]
    fn test_java_interface_doc() {
        let src = "/** A contract */\ninterface Contract { void call(); }\n";
        assert_eq!(class_doc(src), "A contract");
    }

    #[test]
    fn test_kotlin_class_doc() {
        let src = r#"package com.example

/** Holds user settings */
data class Settings(val theme: String)
"#;
        assert_eq!(class_doc(src), "Holds user settings");
    }

    #[test]
    fn test_kotlin_object_doc() {
        let src = "/** Shared registry */\nobject Registry {\n    val items = mutableListOf<String>()\n}\n";
        assert_eq!(class_doc(src), "Shared registry");
    }

    #[test]
    fn test_plain_comment_is_not_doc() {
        let src = "/* not a doc */\npublic class Plain {}\n";
        assert_eq!(class_doc(src), "");
    }

    #[test]
    fn test_no_class() {
        assert_eq!(class_doc("fun main() { println(\"hi\") }\n"), "");
        assert_eq!(class_doc(""), "");
    }
}
