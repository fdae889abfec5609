//! List Controller
//!
//! Search and pagination over a screen's in-memory collection.
//! `ListState` is the only stored state; everything shown in the table and
//! the pager is derived from it by `ListState::view`.

use tracing::trace;

use crate::domain::Record;

/// Rows per page offered by the page size selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    Five,
    #[default]
    Ten,
    Twenty,
    Fifty,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [PageSize::Five, PageSize::Ten, PageSize::Twenty, PageSize::Fifty];

    pub fn as_usize(self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
        }
    }

    /// `None` for anything outside {5, 10, 20, 50}
    pub fn from_usize(size: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_usize() == size)
    }
}

/// Number of pages needed for `count` rows, never less than one
pub fn total_pages(count: usize, page_size: PageSize) -> usize {
    count.div_ceil(page_size.as_usize()).max(1)
}

/// User intents the list responds to
#[derive(Debug, Clone, PartialEq)]
pub enum ListAction {
    Search(String),
    Resize(PageSize),
    GoTo(usize),
    First,
    Prev,
    Next,
    Last,
    /// Raw text typed into the "go to page" box
    JumpTo(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub query: String,
    pub page_size: PageSize,
    /// Requested page; may exceed the page count after a delete, `view` clamps it
    pub page: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl ListState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            query: String::new(),
            page_size,
            page: 1,
        }
    }

    /// Query lower-cased the way `Record::matches` expects it
    fn needle(&self) -> String {
        self.query.to_lowercase()
    }

    /// Records passing the search filter, in collection order
    pub fn filter<'a, R: Record>(&self, records: &'a [R]) -> Vec<&'a R> {
        let needle = self.needle();
        records.iter().filter(|r| r.matches(&needle)).collect()
    }

    /// Reduce one action into the state.
    ///
    /// `total_pages` is the page count of the current filtered collection;
    /// navigation never leaves `[1, total_pages]`.
    pub fn apply(&mut self, action: ListAction, total_pages: usize) {
        let last = total_pages.max(1);
        let current = self.page.clamp(1, last);
        self.page = match action {
            ListAction::Search(query) => {
                self.query = query;
                1
            }
            ListAction::Resize(size) => {
                self.page_size = size;
                1
            }
            ListAction::GoTo(page) => page.clamp(1, last),
            ListAction::First => 1,
            ListAction::Prev => current.saturating_sub(1).max(1),
            ListAction::Next => (current + 1).min(last),
            ListAction::Last => last,
            ListAction::JumpTo(raw) => typed_page(&raw, last).unwrap_or(current),
        };
        trace!(page = self.page, query = %self.query, "list state");
    }

    /// Apply an action against a collection, computing the page count first
    pub fn apply_to<R: Record>(&mut self, action: ListAction, records: &[R]) {
        let pages = total_pages(self.filter(records).len(), self.page_size);
        self.apply(action, pages);
    }

    /// Derive the visible page
    pub fn view<'a, R: Record>(&self, records: &'a [R]) -> PageView<'a, R> {
        let filtered = self.filter(records);
        let total_items = filtered.len();
        let total_pages = total_pages(total_items, self.page_size);
        let page = self.page.clamp(1, total_pages);
        let size = self.page_size.as_usize();
        let start = (page - 1) * size;
        let items: Vec<&R> = filtered.into_iter().skip(start).take(size).collect();

        PageView {
            first_row: if items.is_empty() { 0 } else { start + 1 },
            last_row: start + items.len(),
            items,
            total_items,
            total_pages,
            page,
            can_first: page > 1,
            can_prev: page > 1,
            can_next: page < total_pages,
            can_last: page < total_pages,
        }
    }
}

/// Page for a typed number, `None` when the text is not a whole number.
///
/// Numbers too long for `usize` still count: they land on the last page,
/// negative ones on the first.
fn typed_page(raw: &str, last: usize) -> Option<usize> {
    let text = raw.trim();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if negative {
        return Some(1);
    }
    Some(digits.parse::<usize>().map_or(last, |n| n.clamp(1, last)))
}

/// One derived page of a list
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a, R> {
    pub items: Vec<&'a R>,
    /// Filtered row count
    pub total_items: usize,
    pub total_pages: usize,
    /// Current page after clamping
    pub page: usize,
    /// 1-based row numbers for "Showing x to y of z", zero when empty
    pub first_row: usize,
    pub last_row: usize,
    pub can_first: bool,
    pub can_prev: bool,
    pub can_next: bool,
    pub can_last: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{seed, Bank};
    use proptest::prelude::*;

    fn banks_state(size: usize) -> ListState {
        ListState::new(PageSize::from_usize(size).unwrap())
    }

    #[test]
    fn test_six_banks_page_five() {
        let banks = seed::banks();
        let mut state = banks_state(5);

        let first = state.view(&banks);
        assert_eq!(first.items.len(), 5);
        assert_eq!(first.total_pages, 2);
        assert_eq!((first.first_row, first.last_row), (1, 5));
        assert!(!first.can_prev && first.can_next);

        state.apply(ListAction::GoTo(2), first.total_pages);
        let second = state.view(&banks);
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.items[0].name, "Janata Bank Ltd");
        assert!(second.can_prev && !second.can_last);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let banks = seed::banks();
        let mut state = ListState::default();
        state.apply_to(ListAction::Search("UTT".to_string()), &banks);

        let view = state.view(&banks);
        let names: Vec<_> = view.items.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Uttara Bank Ltd"]);
        assert_eq!(view.total_pages, 1);
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let branches = seed::branches();
        let view = banks_state(20).view(&branches);
        assert_eq!(view.total_items, 10);
        assert_eq!(view.items.len(), 10);
    }

    #[test]
    fn test_no_match_still_has_one_page() {
        let banks = seed::banks();
        let mut state = ListState::default();
        state.apply_to(ListAction::Search("zzz".to_string()), &banks);

        let view = state.view(&banks);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.page, 1);
        assert_eq!((view.first_row, view.last_row), (0, 0));
        assert!(!view.can_next && !view.can_prev);
    }

    #[test]
    fn test_search_and_resize_reset_page() {
        let banks = seed::banks();
        let mut state = banks_state(5);
        state.apply_to(ListAction::Last, &banks);
        assert_eq!(state.page, 2);

        state.apply_to(ListAction::Search("bank".to_string()), &banks);
        assert_eq!(state.page, 1);

        state.apply_to(ListAction::Next, &banks);
        state.apply_to(ListAction::Resize(PageSize::Fifty), &banks);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_shrinking_collection_clamps_page() {
        let mut banks = seed::banks();
        let mut state = banks_state(5);
        state.apply_to(ListAction::Last, &banks);

        banks.retain(|b: &Bank| b.id != 6);
        let view = state.view(&banks);
        // stored page untouched, derived page clamped
        assert_eq!(state.page, 2);
        assert_eq!(view.page, 1);
        assert_eq!(view.items.len(), 5);
    }

    #[test]
    fn test_jump_to_text() {
        let mut state = ListState::default();
        state.apply(ListAction::JumpTo("3".to_string()), 4);
        assert_eq!(state.page, 3);
        state.apply(ListAction::JumpTo("abc".to_string()), 4);
        assert_eq!(state.page, 3);
        state.apply(ListAction::JumpTo("99".to_string()), 4);
        assert_eq!(state.page, 4);
        state.apply(ListAction::JumpTo("-2".to_string()), 4);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_jump_to_huge_numbers_clamps() {
        let mut state = ListState::default();
        state.apply(ListAction::JumpTo("99999999999999999999".to_string()), 4);
        assert_eq!(state.page, 4);
        state.apply(ListAction::JumpTo("-99999999999999999999".to_string()), 4);
        assert_eq!(state.page, 1);
        state.apply(ListAction::JumpTo(" +2 ".to_string()), 4);
        assert_eq!(state.page, 2);
        // still not a number
        state.apply(ListAction::JumpTo("1e30".to_string()), 4);
        assert_eq!(state.page, 2);
        state.apply(ListAction::JumpTo("-".to_string()), 4);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_prev_at_first_page_stays() {
        let mut state = ListState::default();
        state.apply(ListAction::Prev, 3);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_page_size_parsing() {
        assert_eq!(PageSize::from_usize(20), Some(PageSize::Twenty));
        assert_eq!(PageSize::from_usize(15), None);
        assert_eq!(PageSize::default().as_usize(), 10);
    }

    fn page_size() -> impl Strategy<Value = PageSize> {
        prop::sample::select(PageSize::ALL.to_vec())
    }

    fn action() -> impl Strategy<Value = ListAction> {
        prop_oneof![
            (0usize..200).prop_map(ListAction::GoTo),
            Just(ListAction::First),
            Just(ListAction::Prev),
            Just(ListAction::Next),
            Just(ListAction::Last),
            "-?[0-9a-z]{0,4}".prop_map(ListAction::JumpTo),
            "[0-9]{18,30}".prop_map(ListAction::JumpTo),
        ]
    }

    proptest! {
        #[test]
        fn prop_total_pages_formula(count in 0usize..500, size in page_size()) {
            let n = size.as_usize();
            let expected = std::cmp::max(1, (count + n - 1) / n);
            prop_assert_eq!(total_pages(count, size), expected);
        }

        #[test]
        fn prop_navigation_stays_in_range(
            pages in 1usize..40,
            start in 0usize..60,
            actions in prop::collection::vec(action(), 0..20),
        ) {
            let mut state = ListState { page: start, ..ListState::default() };
            for action in actions {
                state.apply(action, pages);
                prop_assert!(state.page >= 1 && state.page <= pages);
            }
        }

        #[test]
        fn prop_view_slices_filtered_rows(count in 0usize..60, size in page_size(), page in 0usize..20) {
            let banks: Vec<Bank> = (1..=count as u32).map(|id| Bank::new(id, "Bank", "")).collect();
            let state = ListState { query: String::new(), page_size: size, page };
            let view = state.view(&banks);

            prop_assert!(view.page >= 1 && view.page <= view.total_pages);
            prop_assert!(view.items.len() <= size.as_usize());
            let expected_first = (view.page - 1) * size.as_usize();
            if let Some(first) = view.items.first() {
                prop_assert_eq!(first.id as usize, expected_first + 1);
            }
        }

        #[test]
        fn prop_query_filters_before_paging(
            names in prop::collection::vec("[a-zA-Z ]{0,12}", 0..40),
            query in "[a-zA-Z]{0,3}",
            size in page_size(),
            page in 0usize..12,
        ) {
            let banks: Vec<Bank> = names
                .iter()
                .enumerate()
                .map(|(i, name)| Bank::new(i as u32 + 1, name, ""))
                .collect();
            let state = ListState { query: query.clone(), page_size: size, page };
            let view = state.view(&banks);

            let needle = query.to_lowercase();
            let expected: Vec<u32> = banks
                .iter()
                .filter(|b| b.name.to_lowercase().contains(&needle))
                .map(|b| b.id)
                .collect();
            prop_assert_eq!(view.total_items, expected.len());
            prop_assert_eq!(view.total_pages, total_pages(expected.len(), size));

            let n = size.as_usize();
            let start = (view.page - 1) * n;
            let shown: Vec<u32> = view.items.iter().map(|b| b.id).collect();
            let wanted: Vec<u32> = expected.iter().copied().skip(start).take(n).collect();
            prop_assert_eq!(shown, wanted);
            for bank in &view.items {
                prop_assert!(bank.name.to_lowercase().contains(&needle));
            }
        }
    }
}
