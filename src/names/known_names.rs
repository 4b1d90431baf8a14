use super::NameRegistry;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static SEPARATOR_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_.]+").expect("invalid regex"));

/// Folds a package name into the key the index uses to compare names.
///
/// Names compare case-insensitively and treat runs of `-`, `_`, and `.` as a single `-`,
/// so `Foo_Bar`, `foo.bar`, and `FOO--bar` all fold to `foo-bar`.
#[must_use]
pub fn index_key(name: &str) -> String {
    SEPARATOR_RUNS.replace_all(&name.to_lowercase(), "-").into_owned()
}

/// An in-memory [`NameRegistry`] built from a list of registered spellings.
#[derive(Debug, Clone, Default)]
pub struct KnownNames {
    by_key: HashMap<String, String>,
}

impl KnownNames {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name` as the canonical spelling for every name folding to the same key.
    ///
    /// A later registration of the same key replaces the earlier spelling.
    pub fn insert(&mut self, name: impl Into<String>) {
        let name = name.into();
        let _ = self.by_key.insert(index_key(&name), name);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for KnownNames {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut names = Self::new();
        for name in iter {
            names.insert(name);
        }

        names
    }
}

impl NameRegistry for KnownNames {
    fn canonical_name(&self, name: &str) -> Option<String> {
        self.by_key.get(&index_key(name)).cloned()
    }
}
