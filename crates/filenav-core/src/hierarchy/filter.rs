//! Extension filter applied to every listing request.

use std::collections::BTreeSet;

/// Which files a listing should surface.
///
/// Either everything, or files whose lowercased name ends with one of a
/// set of lowercase, dot-prefixed extensions such as `.png`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ExtensionFilter {
    #[default]
    All,
    Only(BTreeSet<String>),
}

impl ExtensionFilter {
    /// Build a filter from the accepted types a picker sent.
    ///
    /// An empty list, or any entry equal to `*`, accepts everything.
    pub fn from_accepted<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for t in types {
            let t = t.as_ref().trim();
            if t == "*" {
                return ExtensionFilter::All;
            }
            if !t.is_empty() {
                set.insert(t.to_lowercase());
            }
        }
        if set.is_empty() {
            ExtensionFilter::All
        } else {
            ExtensionFilter::Only(set)
        }
    }

    /// Build a filter from a single accepted-types value.
    pub fn parse(raw: &str) -> Self {
        Self::from_accepted([raw])
    }

    pub fn accepts_all(&self) -> bool {
        matches!(self, ExtensionFilter::All)
    }

    /// Whether a file with this name passes the filter.
    pub fn accepts(&self, file_name: &str) -> bool {
        match self {
            ExtensionFilter::All => true,
            ExtensionFilter::Only(exts) => {
                let lower = file_name.to_lowercase();
                exts.iter().any(|ext| lower.ends_with(ext.as_str()))
            }
        }
    }
}
