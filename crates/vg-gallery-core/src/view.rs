use crate::detection::ResultItem;
use crate::selection::{Filter, Selection, SortKey};
use std::cmp::Ordering;

pub fn compute_visibility(items: &[ResultItem], filter: Filter) -> Vec<bool> {
    items.iter().map(|item| filter.matches(item.result)).collect()
}

/// Indices of `items` in display order, using [`fold_compare`] for filenames.
pub fn compute_order(items: &[ResultItem], sort: SortKey) -> Vec<usize> {
    compute_order_by(items, sort, fold_compare)
}

pub fn compute_order_by<F>(items: &[ResultItem], sort: SortKey, names: F) -> Vec<usize>
where
    F: Fn(&str, &str) -> Ordering,
{
    sorted_indices(items, (0..items.len()).collect(), sort, &names)
}

/// Case-insensitive collation with lowercase ahead of uppercase on ties,
/// close enough to `localeCompare` for filenames off the browser.
pub fn fold_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

fn sorted_indices<F>(items: &[ResultItem], mut indices: Vec<usize>, sort: SortKey, names: &F) -> Vec<usize>
where
    F: Fn(&str, &str) -> Ordering,
{
    // stable: equal keys keep page order
    indices.sort_by(|&a, &b| sort.compare(&items[a], &items[b], names));
    indices
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView {
    /// One flag per input item, in input order.
    pub visible: Vec<bool>,
    /// Visible items only, in display order.
    pub order: Vec<usize>,
}

impl GalleryView {
    pub fn compute(items: &[ResultItem], selection: Selection) -> Self {
        Self::compute_by(items, selection, fold_compare)
    }

    pub fn compute_by<F>(items: &[ResultItem], selection: Selection, names: F) -> Self
    where
        F: Fn(&str, &str) -> Ordering,
    {
        let visible = compute_visibility(items, selection.filter);
        let shown = visible
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.then_some(i))
            .collect();
        let order = sorted_indices(items, shown, selection.sort, &names);
        Self { visible, order }
    }

    pub fn visible_count(&self) -> usize {
        self.order.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::DetectionResult::{self, *};

    fn items(spec: &[(&str, DetectionResult, &str)]) -> Vec<ResultItem> {
        spec.iter()
            .map(|(id, result, name)| ResultItem::new(*id, *name, *result))
            .collect()
    }

    fn names(items: &[ResultItem], order: &[usize]) -> Vec<String> {
        order.iter().map(|&i| items[i].filename.clone()).collect()
    }

    fn sample() -> Vec<ResultItem> {
        items(&[("1", Detected, "b.jpg"), ("2", NotDetected, "a.jpg"), ("3", Unknown, "c.jpg")])
    }

    fn mixed() -> Vec<ResultItem> {
        items(&[
            ("1", Detected, "harbour.png"),
            ("2", Unknown, "Alley.jpg"),
            ("3", NotDetected, "crowd.jpg"),
            ("4", Detected, "beach.jpeg"),
            ("5", NotDetected, "zebra.png"),
            ("6", Unknown, "market.jpg"),
            ("7", Detected, "Dock.jpg"),
        ])
    }

    #[test]
    fn all_by_filename_orders_every_item() {
        let items = sample();
        let view = GalleryView::compute(&items, Selection::new(Filter::All, SortKey::FilenameAsc));
        assert_eq!(view.visible, vec![true, true, true]);
        assert_eq!(names(&items, &view.order), ["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn not_detected_shows_only_negatives() {
        let items = sample();
        let view = GalleryView::compute(&items, Selection::new(Filter::NotDetected, SortKey::FilenameAsc));
        assert_eq!(view.visible, vec![false, true, false]);
        assert_eq!(names(&items, &view.order), ["a.jpg"]);
    }

    #[test]
    fn detected_filter_is_exact() {
        let items = mixed();
        let visible = compute_visibility(&items, Filter::Detected);
        for (item, shown) in items.iter().zip(&visible) {
            assert_eq!(*shown, item.result == Detected, "{}", item.filename);
        }
    }

    #[test]
    fn filter_then_all_restores_everything() {
        let items = mixed();
        for filter in Filter::ALL {
            let _ = compute_visibility(&items, filter);
            assert!(compute_visibility(&items, Filter::All).into_iter().all(|v| v));
        }
    }

    #[test]
    fn filename_sorts_ignore_case_and_mirror_each_other() {
        let items = mixed();
        let asc = names(&items, &compute_order(&items, SortKey::FilenameAsc));
        assert_eq!(
            asc,
            ["Alley.jpg", "beach.jpeg", "crowd.jpg", "Dock.jpg", "harbour.png", "market.jpg", "zebra.png"]
        );
        for pair in asc.windows(2) {
            assert_ne!(fold_compare(&pair[0], &pair[1]), Ordering::Greater);
        }
        let mut desc = names(&items, &compute_order(&items, SortKey::FilenameDesc));
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn status_asc_groups_no_then_unknown_then_yes() {
        let items = mixed();
        let order = compute_order(&items, SortKey::StatusAsc);
        let results: Vec<_> = order.iter().map(|&i| items[i].result).collect();
        assert_eq!(
            results,
            [NotDetected, NotDetected, Unknown, Unknown, Detected, Detected, Detected]
        );
        // ties keep page order
        let ids: Vec<_> = order.iter().map(|&i| items[i].id.as_str()).collect();
        assert_eq!(ids, ["3", "5", "2", "6", "1", "4", "7"]);
    }

    #[test]
    fn status_desc_groups_yes_first() {
        let items = mixed();
        let order = compute_order(&items, SortKey::StatusDesc);
        let results: Vec<_> = order.iter().map(|&i| items[i].result).collect();
        assert_eq!(
            results,
            [Detected, Detected, Detected, Unknown, Unknown, NotDetected, NotDetected]
        );
    }

    #[test]
    fn view_orders_only_visible_items() {
        let items = mixed();
        let view = GalleryView::compute(&items, Selection::new(Filter::Unknown, SortKey::FilenameDesc));
        assert_eq!(view.visible_count(), 2);
        assert_eq!(names(&items, &view.order), ["market.jpg", "Alley.jpg"]);
    }

    #[test]
    fn custom_collation_is_used_for_filenames() {
        let items = items(&[("1", Detected, "b"), ("2", Detected, "B"), ("3", Detected, "a")]);
        let order = compute_order_by(&items, SortKey::FilenameAsc, |a: &str, b: &str| a.cmp(b));
        assert_eq!(names(&items, &order), ["B", "a", "b"]);
    }

    #[test]
    fn empty_gallery_has_empty_view() {
        let view = GalleryView::compute(&[], Selection::default());
        assert!(view.visible.is_empty());
        assert!(view.order.is_empty());
    }
}
