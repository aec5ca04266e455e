//! Language Classification
//!
//! **Single source of truth** for mapping file extensions to the
//! documentation-comment convention used to extract file docs.
//!
//! ```rust,ignore
//! use structdoc::extract::LanguageClass;
//!
//! assert_eq!(LanguageClass::from_extension("kt"), LanguageClass::KotlinJava);
//! assert_eq!(LanguageClass::from_path("web/app.tsx"), LanguageClass::JavaScriptFamily);
//! assert!(LanguageClass::is_watched("lib/util.py"));
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

// =============================================================================
// Class Metadata Table
// =============================================================================

struct ClassMeta {
    /// Display name (human-readable)
    display_name: &'static str,
    /// Exact, case-sensitive file extensions
    extensions: &'static [&'static str],
    /// Alternative names for parsing from string
    aliases: &'static [&'static str],
}

macro_rules! class_meta {
    ($display:literal, [$($ext:literal),*], [$($alias:literal),*]) => {
        ClassMeta {
            display_name: $display,
            extensions: &[$($ext),*],
            aliases: &[$($alias),*],
        }
    };
}

/// Documentation-comment convention of a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageClass {
    /// `/** ... */` attached to a class declaration
    KotlinJava,
    /// Leading triple-quoted module docstring
    Python,
    /// First `/** ... */` block in the file
    JavaScriptFamily,
    /// Listed in the tree, never documented
    #[default]
    Unknown,
}

impl LanguageClass {
    fn meta(&self) -> ClassMeta {
        match self {
            LanguageClass::KotlinJava => {
                class_meta!("Kotlin/Java", ["kt", "java"], ["kotlin", "java", "kotlin-java"])
            }
            LanguageClass::Python => class_meta!("Python", ["py"], ["python", "py"]),
            LanguageClass::JavaScriptFamily => class_meta!(
                "JavaScript/TypeScript",
                ["js", "jsx", "ts", "tsx"],
                ["javascript", "typescript", "js", "ts"]
            ),
            LanguageClass::Unknown => class_meta!("Unknown", [], ["unknown", "text"]),
        }
    }

    fn documented_variants() -> &'static [LanguageClass] {
        &[
            LanguageClass::KotlinJava,
            LanguageClass::Python,
            LanguageClass::JavaScriptFamily,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        self.meta().display_name
    }

    /// Classify an extension (without the dot). Matching is case-sensitive.
    pub fn from_extension(ext: &str) -> Self {
        Self::documented_variants()
            .iter()
            .copied()
            .find(|class| class.meta().extensions.contains(&ext))
            .unwrap_or(LanguageClass::Unknown)
    }

    /// Classify a file by the extension of its path or name
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(Self::from_extension)
            .unwrap_or(LanguageClass::Unknown)
    }

    pub fn is_documented(&self) -> bool {
        !matches!(self, LanguageClass::Unknown)
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        self.meta().extensions
    }

    /// Extensions whose changes should trigger regeneration
    pub fn watched_extensions() -> Vec<&'static str> {
        Self::documented_variants()
            .iter()
            .flat_map(|class| class.extensions().iter().copied())
            .collect()
    }

    /// Whether a change to `path` should trigger regeneration
    pub fn is_watched<P: AsRef<Path>>(path: P) -> bool {
        Self::from_path(path).is_documented()
    }
}

impl fmt::Display for LanguageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LanguageClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        [
            LanguageClass::KotlinJava,
            LanguageClass::Python,
            LanguageClass::JavaScriptFamily,
            LanguageClass::Unknown,
        ]
        .into_iter()
        .find(|class| class.meta().aliases.contains(&lower.as_str()))
        .ok_or_else(|| format!("Unknown language class: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(LanguageClass::from_extension("kt"), LanguageClass::KotlinJava);
        assert_eq!(LanguageClass::from_extension("java"), LanguageClass::KotlinJava);
        assert_eq!(LanguageClass::from_extension("py"), LanguageClass::Python);
        for ext in ["js", "jsx", "ts", "tsx"] {
            assert_eq!(
                LanguageClass::from_extension(ext),
                LanguageClass::JavaScriptFamily
            );
        }
        assert_eq!(LanguageClass::from_extension("md"), LanguageClass::Unknown);
        assert_eq!(LanguageClass::from_extension("kts"), LanguageClass::Unknown);
    }

    #[test]
    fn test_extension_is_case_sensitive() {
        assert_eq!(LanguageClass::from_extension("PY"), LanguageClass::Unknown);
        assert_eq!(LanguageClass::from_extension("Java"), LanguageClass::Unknown);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(LanguageClass::from_path("lib/util.py"), LanguageClass::Python);
        assert_eq!(
            LanguageClass::from_path("web/App.test.tsx"),
            LanguageClass::JavaScriptFamily
        );
        assert_eq!(LanguageClass::from_path("Makefile"), LanguageClass::Unknown);
        assert_eq!(LanguageClass::from_path("README.md"), LanguageClass::Unknown);
    }

    #[test]
    fn test_watched_extensions() {
        assert_eq!(
            LanguageClass::watched_extensions(),
            vec!["kt", "java", "py", "js", "jsx", "ts", "tsx"]
        );
        assert!(LanguageClass::is_watched("src/Main.kt"));
        assert!(!LanguageClass::is_watched("docs/notes.md"));
    }

    #[test]
    fn test_display_and_from_str() {
        assert_eq!(LanguageClass::KotlinJava.to_string(), "Kotlin/Java");
        assert_eq!("Python".parse::<LanguageClass>(), Ok(LanguageClass::Python));
        assert_eq!("ts".parse::<LanguageClass>(), Ok(LanguageClass::JavaScriptFamily));
        assert!("cobol".parse::<LanguageClass>().is_err());
    }

    #[test]
    fn test_unknown_has_no_extensions() {
        assert!(LanguageClass::Unknown.extensions().is_empty());
        assert!(!LanguageClass::Unknown.is_documented());
    }
}
