//! Pagination
//!
//! Client-side paging over the fetched list. The visible slice is owned here and
//! can be shrunk by local removals without touching the source list.

use crate::models::Item;

/// Cards per page
pub const PAGE_SIZE: usize = 6;

/// `ceil(len / PAGE_SIZE)`, or 0 when nothing has been loaded
pub fn page_count(len: Option<usize>) -> usize {
    len.map_or(0, |len| len.div_ceil(PAGE_SIZE))
}

/// Items on a 1-based page. Pages past the end yield an empty slice.
pub fn page_slice(items: &[Item], page: usize) -> &[Item] {
    let end = page.saturating_mul(PAGE_SIZE).min(items.len());
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE).min(end);
    &items[start..end]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paginator {
    page: usize,
    visible: Vec<Item>,
}

impl Default for Paginator {
    fn default() -> Self {
        Self { page: 1, visible: Vec::new() }
    }
}

impl Paginator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn visible(&self) -> &[Item] {
        &self.visible
    }

    /// Re-slice the current page from `source`. A missing source leaves the
    /// visible slice as it was.
    pub fn resync(&mut self, source: Option<&[Item]>) {
        if let Some(items) = source {
            self.visible = page_slice(items, self.page).to_vec();
        }
    }

    /// Move to `page` and re-slice. Returns false when nothing changed
    /// (page 0 or the page already shown), so removals on the current page survive.
    pub fn go_to(&mut self, page: usize, source: Option<&[Item]>) -> bool {
        if page < 1 || page == self.page {
            return false;
        }
        self.page = page;
        self.resync(source);
        true
    }

    pub fn prev(&mut self, source: Option<&[Item]>) -> bool {
        self.can_prev() && self.go_to(self.page - 1, source)
    }

    pub fn next(&mut self, source: Option<&[Item]>) -> bool {
        self.can_next() && self.go_to(self.page + 1, source)
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    // Short slice stands in for "last page"; it does not consult page_count.
    pub fn can_next(&self) -> bool {
        self.visible.len() >= PAGE_SIZE
    }

    /// Drop every visible card with `id`. The source list is not touched.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.visible.len();
        self.visible.retain(|item| item.id != id);
        self.visible.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: i64) -> Item {
        Item {
            id,
            title: format!("Title {}", id),
            body: format!("Body {}", id),
        }
    }

    fn make_items(n: i64) -> Vec<Item> {
        (1..=n).map(make_item).collect()
    }

    fn ids(items: &[Item]) -> Vec<i64> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(None), 0);
        assert_eq!(page_count(Some(0)), 0);
        assert_eq!(page_count(Some(1)), 1);
        assert_eq!(page_count(Some(6)), 1);
        assert_eq!(page_count(Some(7)), 2);
        assert_eq!(page_count(Some(14)), 3);
    }

    #[test]
    fn test_slices_cover_list_exactly() {
        for n in 0..40i64 {
            let items = make_items(n);
            let pages = page_count(Some(items.len()));
            let covered: Vec<i64> = (1..=pages).flat_map(|p| ids(page_slice(&items, p))).collect();
            assert_eq!(covered, ids(&items), "n = {}", n);
        }
    }

    #[test]
    fn test_page_slice_out_of_range_is_empty() {
        let items = make_items(14);
        assert!(page_slice(&items, 4).is_empty());
        assert!(page_slice(&items, 100).is_empty());
        assert!(page_slice(&items, 0).is_empty());
        assert!(page_slice(&[], 1).is_empty());
    }

    #[test]
    fn test_resync_without_source_keeps_slice() {
        let items = make_items(3);
        let mut paginator = Paginator::new();
        paginator.resync(Some(&items));
        paginator.resync(None);

        assert_eq!(ids(paginator.visible()), vec![1, 2, 3]);
    }

    #[test]
    fn test_prev_guard() {
        let items = make_items(14);
        let mut paginator = Paginator::new();
        paginator.resync(Some(&items));

        assert!(!paginator.can_prev());
        assert!(!paginator.prev(Some(&items)));
        assert_eq!(paginator.page(), 1);

        assert!(paginator.go_to(2, Some(&items)));
        assert!(paginator.can_prev());
    }

    #[test]
    fn test_next_guard_uses_slice_length() {
        let items = make_items(14);
        let mut paginator = Paginator::new();
        paginator.resync(Some(&items));
        assert!(paginator.can_next());

        // Removing a card on a full page makes it look like the last page
        paginator.remove(3);
        assert!(!paginator.can_next());
        assert!(!paginator.next(Some(&items)));
        assert_eq!(paginator.page(), 1);
    }

    #[test]
    fn test_next_allows_empty_page_on_exact_multiple() {
        let items = make_items(12);
        let mut paginator = Paginator::new();
        paginator.resync(Some(&items));

        assert!(paginator.next(Some(&items)));
        assert!(paginator.can_next());
        assert!(paginator.next(Some(&items)));
        assert_eq!(paginator.page(), 3);
        assert!(paginator.visible().is_empty());
        assert!(!paginator.can_next());
    }

    #[test]
    fn test_go_to_zero_and_same_page_are_noops() {
        let items = make_items(14);
        let mut paginator = Paginator::new();
        paginator.resync(Some(&items));
        paginator.remove(1);

        assert!(!paginator.go_to(0, Some(&items)));
        assert!(!paginator.go_to(1, Some(&items)));
        assert_eq!(ids(paginator.visible()), vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_remove_duplicate_ids() {
        let items = vec![make_item(1), make_item(2), make_item(2)];
        let mut paginator = Paginator::new();
        paginator.resync(Some(&items));

        assert!(paginator.remove(2));
        assert_eq!(ids(paginator.visible()), vec![1]);
        assert!(!paginator.remove(2));
    }

    #[test]
    fn test_fourteen_item_walkthrough() {
        let items = make_items(14);
        let mut paginator = Paginator::new();
        paginator.resync(Some(&items));

        assert_eq!(page_count(Some(items.len())), 3);
        assert_eq!(ids(paginator.visible()), vec![1, 2, 3, 4, 5, 6]);
        assert!(!paginator.can_prev());
        assert!(paginator.can_next());

        assert!(paginator.go_to(3, Some(&items)));
        assert_eq!(ids(paginator.visible()), vec![13, 14]);
        assert!(!paginator.can_next());

        assert!(paginator.remove(13));
        assert_eq!(ids(paginator.visible()), vec![14]);
        assert_eq!(items.len(), 14);

        paginator.go_to(1, Some(&items));
        paginator.go_to(3, Some(&items));
        assert_eq!(ids(paginator.visible()), vec![13, 14]);
    }

    #[test]
    fn test_source_change_resurfaces_removed() {
        let items = make_items(5);
        let mut paginator = Paginator::new();
        paginator.resync(Some(&items));
        paginator.remove(4);
        assert_eq!(paginator.visible().len(), 4);

        let refreshed = make_items(5);
        paginator.resync(Some(&refreshed));
        assert_eq!(ids(paginator.visible()), vec![1, 2, 3, 4, 5]);
    }
}
