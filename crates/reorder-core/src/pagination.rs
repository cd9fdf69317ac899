//! Pagination State
//!
//! Page/limit/search state mirrored into backend query parameters.
//! Pages are 1-based, as the backend expects.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub page: u32,
    pub limit: u32,
    pub search: String,
    /// Total matching rows, once the backend has told us
    pub total: Option<u64>,
}

impl PageState {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            search: String::new(),
            total: None,
        }
    }

    /// `page`, `limit` and, when set, `search`
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string()), ("limit", self.limit.to_string())];
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        pairs
    }

    pub fn total_pages(&self) -> Option<u32> {
        self.total.map(|total| {
            let pages = total.div_ceil(u64::from(self.limit));
            u32::try_from(pages.max(1)).unwrap_or(u32::MAX)
        })
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Unknown totals allow paging forward
    pub fn has_next(&self) -> bool {
        self.total_pages().map_or(true, |pages| self.page < pages)
    }

    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn prev_page(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.page -= 1;
        true
    }

    pub fn set_limit(&mut self, limit: u32) {
        self.limit = limit.max(1);
        self.page = 1;
    }

    /// New search term; back to the first page
    pub fn set_search(&mut self, search: &str) {
        let search = search.trim();
        if search != self.search {
            self.search = search.to_string();
            self.page = 1;
            self.total = None;
        }
    }

    /// Record the backend total, clamping the page if it ran past the end
    pub fn set_total(&mut self, total: u64) {
        self.total = Some(total);
        if let Some(pages) = self.total_pages() {
            self.page = self.page.min(pages);
        }
    }
}
