use crate::detection::{DetectionResult, ResultItem};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseSelectionError {
    #[error("unknown filter `{0}`")]
    Filter(String),
    #[error("unknown sort key `{0}`")]
    Sort(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Detected,
    NotDetected,
    Unknown,
}

impl Filter {
    pub const ALL: [Filter; 4] = [Filter::All, Filter::Detected, Filter::NotDetected, Filter::Unknown];

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Detected => "detected",
            Filter::NotDetected => "not-detected",
            Filter::Unknown => "unknown",
        }
    }

    pub fn matches(self, result: DetectionResult) -> bool {
        match self {
            Filter::All => true,
            Filter::Detected => result == DetectionResult::Detected,
            Filter::NotDetected => result == DetectionResult::NotDetected,
            Filter::Unknown => result == DetectionResult::Unknown,
        }
    }
}

impl FromStr for Filter {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Filter::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ParseSelectionError::Filter(s.to_owned()))
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    FilenameAsc,
    FilenameDesc,
    StatusAsc,
    StatusDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::FilenameAsc,
        SortKey::FilenameDesc,
        SortKey::StatusAsc,
        SortKey::StatusDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::FilenameAsc => "filename-asc",
            SortKey::FilenameDesc => "filename-desc",
            SortKey::StatusAsc => "status-asc",
            SortKey::StatusDesc => "status-desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::FilenameAsc => "filename (A to Z)",
            SortKey::FilenameDesc => "filename (Z to A)",
            SortKey::StatusAsc => "status (No first)",
            SortKey::StatusDesc => "status (Yes first)",
        }
    }

    /// `names` is the filename collation; the browser passes `localeCompare`.
    pub fn compare<F>(self, a: &ResultItem, b: &ResultItem, names: &F) -> Ordering
    where
        F: Fn(&str, &str) -> Ordering,
    {
        match self {
            SortKey::FilenameAsc => names(&a.filename, &b.filename),
            SortKey::FilenameDesc => names(&b.filename, &a.filename),
            SortKey::StatusAsc => a.result.cmp_status(b.result),
            SortKey::StatusDesc => b.result.cmp_status(a.result),
        }
    }
}

impl FromStr for SortKey {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ParseSelectionError::Sort(s.to_owned()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub filter: Filter,
    pub sort: SortKey,
}

/// Outcome of reading a selection back from storage. A `*_reset` flag means
/// the stored value was present but unusable and should be overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Restored {
    pub selection: Selection,
    pub filter_reset: bool,
    pub sort_reset: bool,
}

impl Selection {
    pub fn new(filter: Filter, sort: SortKey) -> Self {
        Self { filter, sort }
    }

    pub fn restore(filter: Option<&str>, sort: Option<&str>) -> Restored {
        let (filter, filter_reset) = match filter.map(str::parse::<Filter>) {
            None => (Filter::default(), false),
            Some(Ok(f)) => (f, false),
            Some(Err(_)) => (Filter::default(), true),
        };
        let (sort, sort_reset) = match sort.map(str::parse::<SortKey>) {
            None => (SortKey::default(), false),
            Some(Ok(k)) => (k, false),
            Some(Err(_)) => (SortKey::default(), true),
        };
        Restored {
            selection: Selection { filter, sort },
            filter_reset,
            sort_reset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_parse_from_their_own_names() {
        for f in Filter::ALL {
            assert_eq!(f.as_str().parse::<Filter>(), Ok(f));
        }
        for k in SortKey::ALL {
            assert_eq!(k.to_string().parse::<SortKey>(), Ok(k));
        }
        assert_eq!(
            "notdetected".parse::<Filter>(),
            Err(ParseSelectionError::Filter("notdetected".into()))
        );
    }

    #[test]
    fn unknown_filter_matches_only_unresolved() {
        assert!(Filter::Unknown.matches(DetectionResult::Unknown));
        assert!(!Filter::Unknown.matches(DetectionResult::Detected));
        assert!(!Filter::Unknown.matches(DetectionResult::NotDetected));
        assert!(Filter::All.matches(DetectionResult::NotDetected));
    }

    #[test]
    fn restore_defaults_when_storage_is_empty() {
        let restored = Selection::restore(None, None);
        assert_eq!(restored.selection, Selection::new(Filter::All, SortKey::FilenameAsc));
        assert!(!restored.filter_reset);
        assert!(!restored.sort_reset);
    }

    #[test]
    fn restore_resets_bogus_filter() {
        let restored = Selection::restore(Some("bogus"), Some("status-desc"));
        assert_eq!(restored.selection.filter, Filter::All);
        assert_eq!(restored.selection.sort, SortKey::StatusDesc);
        assert!(restored.filter_reset);
        assert!(!restored.sort_reset);
    }

    #[test]
    fn restore_resets_bogus_sort() {
        let restored = Selection::restore(Some("detected"), Some("size-asc"));
        assert_eq!(restored.selection.filter, Filter::Detected);
        assert_eq!(restored.selection.sort, SortKey::FilenameAsc);
        assert!(restored.sort_reset);
    }
}
