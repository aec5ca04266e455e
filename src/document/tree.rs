//! ASCII tree block rendering.

use crate::constants::tree::{BLANK, BRANCH, CONTINUATION, LAST_BRANCH};
use crate::snapshot::DirectoryEntry;

/// Renders a directory's contents as box-drawing tree lines
pub struct TreeRenderer;

impl TreeRenderer {
    /// One line per descendant, each ending in a line break.
    ///
    /// An empty directory renders to the empty string.
    pub fn render(entry: &DirectoryEntry) -> String {
        let mut out = String::new();
        Self::render_into(entry, "", &mut out);
        out
    }

    /// Render with every line starting with `prefix`
    pub fn render_with_prefix(entry: &DirectoryEntry, prefix: &str) -> String {
        let mut out = String::new();
        Self::render_into(entry, prefix, &mut out);
        out
    }

    fn render_into(entry: &DirectoryEntry, prefix: &str, out: &mut String) {
        let children = entry.sorted_children();
        let last = children.len().saturating_sub(1);

        for (i, child) in children.iter().enumerate() {
            let is_last = i == last;
            out.push_str(prefix);
            out.push_str(if is_last { LAST_BRANCH } else { BRANCH });
            out.push_str(&child.name);
            out.push('\n');

            if child.is_directory() {
                let next = format!("{}{}", prefix, if is_last { BLANK } else { CONTINUATION });
                Self::render_into(child, &next, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn file(name: &str) -> DirectoryEntry {
        DirectoryEntry::file(name, "")
    }

    fn dir(name: &str, children: Vec<DirectoryEntry>) -> DirectoryEntry {
        DirectoryEntry::directory(name, children)
    }

    #[test]
    fn test_empty_directory() {
        assert_eq!(TreeRenderer::render(&dir("root", vec![])), "");
    }

    #[test]
    fn test_directories_before_files() {
        let root = dir("root", vec![file("a"), dir("b", vec![]), file("c")]);
        assert_eq!(TreeRenderer::render(&root), "├── b\n├── a\n└── c\n");
    }

    #[test]
    fn test_three_levels_mixed_branches() {
        let root = dir(
            "root",
            vec![
                file("README.md"),
                dir(
                    "src",
                    vec![
                        file("main.py"),
                        dir("util", vec![file("b.py"), file("a.py")]),
                    ],
                ),
                dir(
                    "lib",
                    vec![dir("core", vec![file("x.ts")]), file("index.ts")],
                ),
            ],
        );

        let expected = "\
├── lib
│   ├── core
│   │   └── x.ts
│   └── index.ts
├── src
│   ├── util
│   │   ├── a.py
│   │   └── b.py
│   └── main.py
└── README.md
";
        assert_eq!(TreeRenderer::render(&root), expected);
    }

    #[test]
    fn test_last_directory_uses_blank_continuation() {
        let root = dir("root", vec![file("a.py"), dir("z", vec![dir("y", vec![file("k")])])]);
        // directories sort first, so "z" is not last here
        let expected = "├── z\n│   └── y\n│       └── k\n└── a.py\n";
        assert_eq!(TreeRenderer::render(&root), expected);

        let only_dir = dir("root", vec![dir("z", vec![file("k"), file("j")])]);
        assert_eq!(
            TreeRenderer::render(&only_dir),
            "└── z\n    ├── j\n    └── k\n"
        );
    }

    #[test]
    fn test_render_with_prefix() {
        let root = dir("root", vec![file("a")]);
        assert_eq!(TreeRenderer::render_with_prefix(&root, ">> "), ">> └── a\n");
    }

    #[test]
    fn test_file_entry_renders_empty() {
        assert_eq!(TreeRenderer::render(&file("lonely.py")), "");
    }

    fn arb_tree() -> impl Strategy<Value = DirectoryEntry> {
        let leaf = "[a-z]{1,6}(\\.py)?".prop_map(|n| DirectoryEntry::file(n, ""));
        leaf.prop_recursive(3, 24, 5, |inner| {
            ("[a-z]{1,6}", prop::collection::vec(inner, 0..5))
                .prop_map(|(name, children)| DirectoryEntry::directory(name, children))
        })
    }

    proptest! {
        #[test]
        fn prop_one_line_per_descendant(children in prop::collection::vec(arb_tree(), 0..6)) {
            let root = DirectoryEntry::directory("root", children);
            let rendered = TreeRenderer::render(&root);
            prop_assert_eq!(rendered.lines().count(), root.descendant_count());
            prop_assert!(rendered.is_empty() || rendered.ends_with('\n'));
        }

        #[test]
        fn prop_top_level_directories_first(children in prop::collection::vec(arb_tree(), 0..6)) {
            let root = DirectoryEntry::directory("root", children);
            let kinds: Vec<bool> = root.sorted_children().iter().map(|c| c.is_directory()).collect();
            let first_file = kinds.iter().position(|d| !d).unwrap_or(kinds.len());
            prop_assert!(kinds[first_file..].iter().all(|d| !d));
        }

        #[test]
        fn prop_render_is_deterministic(children in prop::collection::vec(arb_tree(), 0..6)) {
            let root = DirectoryEntry::directory("root", children);
            prop_assert_eq!(TreeRenderer::render(&root), TreeRenderer::render(&root));
        }
    }
}
