//! Page walking for the AiSEG2 device listing.
//!
//! Past its last real page the device keeps serving the final page again,
//! so the walk stops at the first page whose fingerprint equals the one
//! before it, or after `max_pages`.

/// Configuration for pagination behavior.
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// Maximum number of pages to fetch
    pub max_pages: usize,
    /// Starting page number
    pub start_page: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            max_pages: 20,
            start_page: 1,
        }
    }
}

/// What to do with a page just observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageVerdict {
    /// New content; keep its items and continue.
    Fresh,
    /// Same content as the previous page; discard it and stop.
    Duplicate,
}

/// State machine deciding which listing page to fetch next.
#[derive(Debug, Clone)]
pub struct Paginator {
    config: PaginationConfig,
    next_page: usize,
    previous_fingerprint: String,
    finished: bool,
}

impl Paginator {
    pub fn new(config: PaginationConfig) -> Self {
        Self {
            next_page: config.start_page,
            config,
            previous_fingerprint: String::new(),
            finished: false,
        }
    }

    /// The page to fetch next, or `None` once the walk is over.
    pub fn next_page(&self) -> Option<usize> {
        let last_page = self.config.start_page + self.config.max_pages;
        if self.finished || self.next_page >= last_page {
            None
        } else {
            Some(self.next_page)
        }
    }

    /// Records the slot names of the page returned by [`next_page`](Self::next_page).
    ///
    /// Absent slots are passed as empty strings so that pages differing only
    /// in which slots are filled get different fingerprints.
    pub fn observe<S: AsRef<str>>(&mut self, names: &[S]) -> PageVerdict {
        let fingerprint = names
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(",");

        if fingerprint == self.previous_fingerprint {
            self.finished = true;
            return PageVerdict::Duplicate;
        }

        self.previous_fingerprint = fingerprint;
        self.next_page += 1;
        PageVerdict::Fresh
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(PaginationConfig::default())
    }
}
