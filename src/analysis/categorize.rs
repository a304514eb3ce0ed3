//! File categorization into a fixed set of buckets.

use crate::config::ExclusionRules;

/// The closed set of file categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    Components,
    Hooks,
    Utils,
    Types,
    Styles,
    Tests,
    Docs,
    Config,
    Scripts,
    Other,
}

impl FileCategory {
    /// Fixed display order used everywhere categories are rendered.
    pub const ALL: [FileCategory; 10] = [
        Self::Components,
        Self::Hooks,
        Self::Utils,
        Self::Types,
        Self::Styles,
        Self::Tests,
        Self::Docs,
        Self::Config,
        Self::Scripts,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Components => "Components",
            Self::Hooks => "Hooks",
            Self::Utils => "Utils",
            Self::Types => "Types",
            Self::Styles => "Styles",
            Self::Tests => "Tests",
            Self::Docs => "Docs",
            Self::Config => "Config",
            Self::Scripts => "Scripts",
            Self::Other => "Other",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(9)
    }
}

/// Non-excluded file paths partitioned into categories, insertion order
/// preserved within each bucket.
#[derive(Debug, Default)]
pub struct FileCategories {
    buckets: [Vec<String>; 10],
}

impl FileCategories {
    pub fn files(&self, category: FileCategory) -> &[String] {
        &self.buckets[category.index()]
    }

    pub fn is_empty(&self, category: FileCategory) -> bool {
        self.files(category).is_empty()
    }

    /// Iterate (category, files) pairs in the fixed display order,
    /// skipping empty buckets.
    pub fn iter_non_empty<'a>(&'a self) -> impl Iterator<Item = (FileCategory, &'a [String])> + 'a {
        FileCategory::ALL
            .iter()
            .map(|c| (*c, self.files(*c)))
            .filter(|(_, files)| !files.is_empty())
    }

    /// Total number of categorized files.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    fn push(&mut self, category: FileCategory, path: &str) {
        self.buckets[category.index()].push(path.to_string());
    }
}

/// Extension of a path, without the dot. Dotfiles count as extensionless.
fn extension(path: &str) -> &str {
    let name = file_name(path);
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[idx + 1..],
        _ => "",
    }
}

fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Whether the file name looks like `*.config.ts` / `*.config.js`.
fn is_config_script(name: &str) -> bool {
    name.ends_with(".config.ts") || name.ends_with(".config.js")
}

/// Whether the file name looks like `*.test.*` / `*.spec.*` with a
/// script extension.
fn is_test_file(name: &str, ext: &str) -> bool {
    (name.contains(".test.") || name.contains(".spec."))
        && matches!(ext, "ts" | "tsx" | "js" | "jsx")
}

/// Ordered categorization rules: first match wins, directory rules before
/// extension rules. Unmatched paths land in `Other`.
fn categorize_path(path: &str) -> FileCategory {
    let name = file_name(path);
    let ext = extension(path);

    type Rule = (fn(&str, &str, &str) -> bool, FileCategory);
    const RULES: &[Rule] = &[
        (|p, _, _| p.contains("components/"), FileCategory::Components),
        (|p, _, _| p.contains("hooks/"), FileCategory::Hooks),
        (|p, _, _| p.contains("utils/"), FileCategory::Utils),
        (|p, _, _| p.contains("types/"), FileCategory::Types),
        (
            |_, _, e| matches!(e, "scss" | "css" | "less" | "sass"),
            FileCategory::Styles,
        ),
        (|_, n, e| is_test_file(n, e), FileCategory::Tests),
        (|p, _, _| p.contains("scripts/"), FileCategory::Scripts),
        (|_, _, e| e == "md", FileCategory::Docs),
        (
            |_, n, e| matches!(e, "json" | "yml" | "yaml") || is_config_script(n),
            FileCategory::Config,
        ),
    ];

    for (predicate, category) in RULES {
        if predicate(path, name, ext) {
            return *category;
        }
    }

    FileCategory::Other
}

/// Partition non-excluded file paths into categories.
///
/// Every path that survives the exclusion filter lands in exactly one
/// bucket; first-occurrence order is preserved within buckets.
pub fn categorize(paths: &[String], exclusions: &ExclusionRules) -> FileCategories {
    let mut categories = FileCategories::default();

    for path in paths {
        if exclusions.is_excluded(path) {
            continue;
        }
        categories.push(categorize_path(path), path);
    }

    categories
}
