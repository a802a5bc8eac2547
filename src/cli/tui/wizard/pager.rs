//! Suggestion paging state machine.
//!
//! Holds the current candidate batch and a window offset into it. The
//! window cycles forward in steps of [`PAGE_SIZE`]; there is no
//! "previous page". A search replaces the batch wholesale and resets
//! the window, guarded so overlapping searches cannot interleave.

/// Number of suggestions shown at a time.
pub const PAGE_SIZE: usize = 3;

#[derive(Debug, Default)]
pub struct SuggestionPager {
    batch: Vec<String>,
    offset: usize,
    search_in_flight: bool,
    initialized: bool,
}

impl SuggestionPager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the pager with the initial suggestion batch.
    ///
    /// Only the first call takes effect. The guard is an explicit flag
    /// rather than an emptiness check, so an empty initial result still
    /// counts as initialized and a re-delivery of the initial data never
    /// clobbers a batch that a search has since replaced.
    pub fn initialize(&mut self, batch: Vec<String>) {
        if self.initialized {
            return;
        }
        self.batch = batch;
        self.offset = 0;
        self.initialized = true;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_searching(&self) -> bool {
        self.search_in_flight
    }

    /// Advance the window by one page, wrapping to the start when the
    /// next offset would fall at or past the end of the batch. No-op on
    /// an empty batch.
    pub fn advance_page(&mut self) {
        if self.batch.is_empty() {
            return;
        }
        let next = self.offset + PAGE_SIZE;
        self.offset = if next >= self.batch.len() { 0 } else { next };
    }

    /// Claim the in-flight search slot.
    ///
    /// Returns false while another search is outstanding; the caller
    /// must then drop the submission (no queuing, no cancellation).
    pub fn try_begin_search(&mut self) -> bool {
        if self.search_in_flight {
            return false;
        }
        self.search_in_flight = true;
        true
    }

    /// Complete an outstanding search.
    ///
    /// A non-empty result replaces the batch wholesale and resets the
    /// window; an empty or absent result leaves the prior batch and
    /// offset untouched. The in-flight slot is released either way.
    pub fn finish_search(&mut self, result: Option<Vec<String>>) {
        self.search_in_flight = false;
        match result {
            Some(batch) if !batch.is_empty() => {
                self.batch = batch;
                self.offset = 0;
            }
            _ => {}
        }
    }

    /// The currently visible window, at most [`PAGE_SIZE`] entries and
    /// shorter near the end of the batch.
    pub fn visible_page(&self) -> &[String] {
        let end = (self.offset + PAGE_SIZE).min(self.batch.len());
        &self.batch[self.offset..end]
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.batch.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batch.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn numbers(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn initialize_starts_at_offset_zero() {
        let mut pager = SuggestionPager::new();
        pager.initialize(numbers(&["a", "b", "c", "d"]));

        assert_eq!(pager.offset(), 0);
        assert_eq!(pager.visible_page(), &["a", "b", "c"]);
    }

    #[test]
    fn initialize_applies_only_once() {
        let mut pager = SuggestionPager::new();
        pager.initialize(numbers(&["a"]));
        pager.initialize(numbers(&["b", "c"]));

        assert_eq!(pager.visible_page(), &["a"]);
    }

    #[test]
    fn empty_initial_batch_still_counts_as_initialized() {
        let mut pager = SuggestionPager::new();
        pager.initialize(Vec::new());

        assert!(pager.is_initialized());
        assert!(pager.visible_page().is_empty());

        // A late re-delivery must not repopulate.
        pager.initialize(numbers(&["a"]));
        assert!(pager.is_empty());
    }

    #[test]
    fn initial_data_never_overwrites_search_results() {
        let mut pager = SuggestionPager::new();
        pager.initialize(numbers(&["a", "b"]));

        assert!(pager.try_begin_search());
        pager.finish_search(Some(numbers(&["x"])));

        pager.initialize(numbers(&["a", "b"]));
        assert_eq!(pager.visible_page(), &["x"]);
    }

    #[test]
    fn advance_wraps_when_next_offset_reaches_length() {
        // Worked scenario: 4 suggestions, page of 3.
        let mut pager = SuggestionPager::new();
        pager.initialize(numbers(&[
            "5035550100",
            "5035550101",
            "5035550102",
            "5035550103",
        ]));

        assert_eq!(
            pager.visible_page(),
            &["5035550100", "5035550101", "5035550102"]
        );

        pager.advance_page();
        assert_eq!(pager.offset(), 3);
        assert_eq!(pager.visible_page(), &["5035550103"]);

        // 3 + 3 = 6 >= 4, so the window wraps to the start.
        pager.advance_page();
        assert_eq!(pager.offset(), 0);
    }

    #[test]
    fn advance_on_empty_batch_is_a_noop() {
        let mut pager = SuggestionPager::new();
        pager.initialize(Vec::new());
        pager.advance_page();
        assert_eq!(pager.offset(), 0);
    }

    #[test]
    fn offset_stays_in_bounds_and_cycles() {
        for len in 1..=10usize {
            let batch: Vec<String> = (0..len).map(|i| i.to_string()).collect();
            let mut pager = SuggestionPager::new();
            pager.initialize(batch);

            let pages = len.div_ceil(PAGE_SIZE);
            for step in 1..=pages {
                pager.advance_page();
                assert!(pager.offset() < len, "offset out of bounds for len {len}");
                assert_eq!(pager.offset() % PAGE_SIZE, 0);
                if step == pages {
                    assert_eq!(pager.offset(), 0, "no cycle after {pages} advances");
                }
            }
        }
    }

    #[test]
    fn search_while_in_flight_is_dropped() {
        let mut pager = SuggestionPager::new();
        pager.initialize(numbers(&["a", "b", "c"]));
        pager.advance_page();

        assert!(pager.try_begin_search());
        assert!(!pager.try_begin_search());

        // The dropped submission changed nothing.
        assert_eq!(pager.offset(), 0);
        assert_eq!(pager.len(), 3);
    }

    #[test]
    fn successful_search_replaces_batch_and_resets_offset() {
        // Worked scenario: search for "503" resolving to one number.
        let mut pager = SuggestionPager::new();
        pager.initialize(numbers(&["a", "b", "c", "d"]));
        pager.advance_page();

        assert!(pager.try_begin_search());
        pager.finish_search(Some(numbers(&["5035559999"])));

        assert_eq!(pager.visible_page(), &["5035559999"]);
        assert_eq!(pager.offset(), 0);
        assert!(!pager.is_searching());
    }

    #[test]
    fn repeating_a_search_result_is_idempotent() {
        let mut pager = SuggestionPager::new();
        pager.initialize(numbers(&["a"]));

        for _ in 0..2 {
            assert!(pager.try_begin_search());
            pager.finish_search(Some(numbers(&["x", "y"])));
        }

        assert_eq!(pager.visible_page(), &["x", "y"]);
        assert_eq!(pager.offset(), 0);
    }

    #[test]
    fn empty_search_result_leaves_state_untouched() {
        let mut pager = SuggestionPager::new();
        pager.initialize(numbers(&["a", "b", "c", "d"]));
        pager.advance_page();

        assert!(pager.try_begin_search());
        pager.finish_search(None);
        assert_eq!(pager.offset(), 3);
        assert_eq!(pager.len(), 4);

        assert!(pager.try_begin_search());
        pager.finish_search(Some(Vec::new()));
        assert_eq!(pager.offset(), 3);
        assert_eq!(pager.len(), 4);
    }

    #[test]
    fn finish_search_always_releases_the_guard() {
        let mut pager = SuggestionPager::new();
        assert!(pager.try_begin_search());
        pager.finish_search(None);
        assert!(!pager.is_searching());
        assert!(pager.try_begin_search());
    }
}
