use std::fmt;

use tasklist_core::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

/// Pagination state of one client.
///
/// `total_pages` is whatever the last successful load reported; it is not
/// touched when a load fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientState {
    pub current_page: u32,
    pub page_size: u32,
    pub total_pages: u64,
}

impl Default for ClientState {
    fn default() -> Self {
        Self { current_page: DEFAULT_PAGE, page_size: DEFAULT_PAGE_SIZE, total_pages: 0 }
    }
}

impl ClientState {
    #[must_use]
    pub fn new(current_page: u32, page_size: u32) -> Self {
        Self { current_page: current_page.max(1), page_size: page_size.max(1), total_pages: 0 }
    }

    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        u64::from(self.current_page) < self.total_pages
    }

    #[must_use]
    pub fn controls(&self) -> PaginationControls {
        PaginationControls {
            current_page: self.current_page,
            total_pages: self.total_pages,
            prev_disabled: !self.has_prev(),
            next_disabled: !self.has_next(),
        }
    }
}

/// What the pagination bar shows after a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationControls {
    pub current_page: u32,
    pub total_pages: u64,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl fmt::Display for PaginationControls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page {} of {}", self.current_page, self.total_pages)
    }
}
