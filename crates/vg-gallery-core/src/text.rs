//! Counts and the human-readable strings built from them.

use crate::detection::DetectionResult;
use crate::selection::{Filter, Selection};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub detected: usize,
    pub not_detected: usize,
    pub unknown: usize,
}

impl Counts {
    pub fn tally<I>(results: I) -> Self
    where
        I: IntoIterator<Item = DetectionResult>,
    {
        results.into_iter().fold(Counts::default(), |mut c, r| {
            c.total += 1;
            match r {
                DetectionResult::Detected => c.detected += 1,
                DetectionResult::NotDetected => c.not_detected += 1,
                DetectionResult::Unknown => c.unknown += 1,
            }
            c
        })
    }
}

pub fn pluralize(noun: &str) -> String {
    if noun.to_lowercase().ends_with('s') {
        noun.to_owned()
    } else {
        format!("{noun}s")
    }
}

/// The noun being detected, e.g. "Person".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject(String);

impl Subject {
    pub const FALLBACK: &'static str = "item";

    /// First non-blank candidate wins.
    pub fn resolve<'a, I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        candidates
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
            .map(|s| Subject(s.to_owned()))
            .unwrap_or_else(|| Subject(Self::FALLBACK.to_owned()))
    }

    pub fn singular(&self) -> &str {
        &self.0
    }

    pub fn plural(&self) -> String {
        pluralize(&self.0)
    }
}

impl Default for Subject {
    fn default() -> Self {
        Subject(Self::FALLBACK.to_owned())
    }
}

/// Filter info line. `emphasis` is rendered in bold between `lead` and `tail`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub lead: String,
    pub emphasis: Option<String>,
    pub tail: String,
}

impl SummaryLine {
    pub fn describe(selection: Selection, subject: &Subject) -> Self {
        let (lead, emphasis) = match selection.filter {
            Filter::All => ("Showing all images".to_owned(), None),
            Filter::Detected => (
                "Showing only images with ".to_owned(),
                Some(format!("{} detected", subject.singular())),
            ),
            Filter::NotDetected => (
                "Showing only images with ".to_owned(),
                Some(format!("no {} detected", subject.plural())),
            ),
            Filter::Unknown => (
                "Showing only images with ".to_owned(),
                Some("unknown detection status".to_owned()),
            ),
        };
        SummaryLine {
            lead,
            emphasis,
            tail: format!(", sorted by {}", selection.sort.label()),
        }
    }

    pub fn to_plain_text(&self) -> String {
        format!("{}{}{}", self.lead, self.emphasis.as_deref().unwrap_or_default(), self.tail)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub icon_class: &'static str,
    pub text: String,
}

impl StatusBadge {
    pub fn for_result(result: DetectionResult, subject: &str) -> Self {
        let (icon_class, answer) = match result {
            DetectionResult::Detected => ("fas fa-check-circle text-success", "Yes"),
            DetectionResult::NotDetected => ("fas fa-times-circle text-danger", "No"),
            DetectionResult::Unknown => ("fas fa-question-circle text-secondary", "Unknown"),
        };
        StatusBadge {
            icon_class,
            text: format!("{subject} Detected: {answer}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::SortKey;
    use DetectionResult::*;

    #[test]
    fn tally_counts_every_present_item() {
        let counts = Counts::tally([Detected, NotDetected, Unknown, Detected, Unknown, Unknown]);
        assert_eq!(
            counts,
            Counts { total: 6, detected: 2, not_detected: 1, unknown: 3 }
        );
        assert_eq!(Counts::tally(Vec::<DetectionResult>::new()), Counts::default());
    }

    #[test]
    fn removing_one_item_drops_total_by_one() {
        let before = Counts::tally([Detected, NotDetected, Unknown]);
        let after = Counts::tally([Detected, Unknown]);
        assert_eq!(before.total - after.total, 1);
        assert_eq!(before.not_detected - after.not_detected, 1);
    }

    #[test]
    fn plural_appends_s_unless_present() {
        assert_eq!(pluralize("Person"), "Persons");
        assert_eq!(pluralize("Flare"), "Flares");
        assert_eq!(pluralize("Bus"), "Bus");
        assert_eq!(pluralize("GLASSES"), "GLASSES");
    }

    #[test]
    fn subject_falls_back_to_item() {
        let subject = Subject::resolve([None, Some("  "), None]);
        assert_eq!(subject.singular(), "item");
        assert_eq!(subject.plural(), "items");
        assert_eq!(Subject::resolve([Some(""), Some("Flare")]).singular(), "Flare");
    }

    #[test]
    fn summary_reflects_filter_and_sort() {
        let subject = Subject::resolve([Some("Person")]);
        let all = SummaryLine::describe(Selection::default(), &subject);
        assert_eq!(all.to_plain_text(), "Showing all images, sorted by filename (A to Z)");
        assert_eq!(all.emphasis, None);

        let none = SummaryLine::describe(
            Selection::new(Filter::NotDetected, SortKey::FilenameDesc),
            &subject,
        );
        assert_eq!(none.emphasis.as_deref(), Some("no Persons detected"));
        assert_eq!(
            none.to_plain_text(),
            "Showing only images with no Persons detected, sorted by filename (Z to A)"
        );

        let yes = SummaryLine::describe(Selection::new(Filter::Detected, SortKey::StatusAsc), &subject);
        assert_eq!(yes.emphasis.as_deref(), Some("Person detected"));
        assert!(yes.tail.ends_with("status (No first)"));
    }

    #[test]
    fn badge_variants_are_distinct() {
        let yes = StatusBadge::for_result(Detected, "Flare");
        let no = StatusBadge::for_result(NotDetected, "Flare");
        let unknown = StatusBadge::for_result(Unknown, "Flare");
        assert_eq!(yes.text, "Flare Detected: Yes");
        assert_eq!(no.text, "Flare Detected: No");
        assert_eq!(unknown.text, "Flare Detected: Unknown");
        assert_ne!(yes.icon_class, no.icon_class);
        assert_ne!(no.icon_class, unknown.icon_class);
    }
}
