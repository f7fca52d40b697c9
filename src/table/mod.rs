//! Client-side table view state: search, sort and pagination
//!
//! A [`TableState`] owns the four view-state fields of one screen (search
//! term, sort specifier, current page, page size). It never owns the
//! records: every call to [`TableState::view`] derives a fresh
//! [`TableView`] from whatever collection the caller supplies, so the
//! same state can be re-applied after each refresh.
//!
//! ```
//! use airops::table::{TableConfig, TableState};
//! use serde_json::json;
//!
//! let records = vec![
//!     json!({"name": "Delta", "country": "US"}),
//!     json!({"name": "Alpha", "country": "FR"}),
//!     json!({"name": "Charlie", "country": "US"}),
//! ];
//! let config = TableConfig::new(["name", "country"])
//!     .with_default_sort("name:asc")
//!     .with_page_size(2);
//! let mut state = TableState::new(config);
//! state.set_search_term("us");
//!
//! let view = state.view(&records);
//! assert_eq!(view.filtered_count, 2);
//! assert_eq!(view.visible()[0]["name"], "Charlie");
//! ```

pub mod filter;
pub mod sort;

pub use filter::SearchTerm;

use crate::core::query::{PaginationMeta, SortSpec};
use crate::core::record::{FieldPath, Record};

/// Page size used when a screen does not choose one
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Construction-time configuration of a table
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    pub search_fields: Vec<FieldPath>,
    pub default_sort: String,
    pub default_page_size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            search_fields: Vec::new(),
            default_sort: String::new(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TableConfig {
    pub fn new<I, P>(search_fields: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<FieldPath>,
    {
        Self {
            search_fields: search_fields.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_default_sort(mut self, sort: impl Into<String>) -> Self {
        self.default_sort = sort.into();
        self
    }

    /// Page size is floored at 1
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.default_page_size = size.max(1);
        self
    }
}

/// View state of one table
#[derive(Debug, Clone)]
pub struct TableState {
    config: TableConfig,
    search_term: String,
    sort: String,
    current_page: usize,
    page_size: usize,
}

impl TableState {
    pub fn new(config: TableConfig) -> Self {
        let sort = config.default_sort.clone();
        let page_size = config.default_page_size.max(1);
        Self {
            config,
            search_term: String::new(),
            sort,
            current_page: 1,
            page_size,
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort(&self) -> &str {
        &self.sort
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replace the search term and go back to the first page
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    /// Replace the sort specifier and go back to the first page
    ///
    /// An empty specifier keeps the filtered records in input order.
    pub fn set_sort(&mut self, spec: impl Into<String>) {
        self.sort = spec.into();
        self.current_page = 1;
    }

    /// Jump to a page
    ///
    /// Not clamped against the page count, which depends on the data. A
    /// page past the end renders empty; page 0 is read as page 1.
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Replace the page size and go back to the first page
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.current_page = 1;
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    /// Advance unless already on (or past) the last page
    pub fn next_page(&mut self, total_pages: usize) {
        if self.current_page < total_pages {
            self.current_page += 1;
        }
    }

    /// Back to the state the table was created with
    pub fn reset(&mut self) {
        self.search_term.clear();
        self.sort = self.config.default_sort.clone();
        self.page_size = self.config.default_page_size.max(1);
        self.current_page = 1;
    }

    /// Derive the current view of a collection
    pub fn view<'a, R: Record>(&self, records: &'a [R]) -> TableView<'a, R> {
        let term = SearchTerm::new(&self.search_term);
        let mut matched: Vec<&'a R> = records
            .iter()
            .filter(|record| term.matches(*record, &self.config.search_fields))
            .collect();

        if let Some(spec) = SortSpec::parse(&self.sort) {
            sort::sort_records(&mut matched, &spec);
        }

        let pagination = PaginationMeta::new(self.current_page, self.page_size, matched.len());

        tracing::debug!(
            total = records.len(),
            matched = matched.len(),
            page = pagination.page,
            total_pages = pagination.total_pages,
            sort = %self.sort,
            "table view recomputed"
        );

        TableView {
            total_items: records.len(),
            filtered_count: matched.len(),
            total_pages: pagination.total_pages,
            matched,
            pagination,
        }
    }
}

/// A derived, read-only view over a record collection
#[derive(Debug)]
pub struct TableView<'a, R> {
    matched: Vec<&'a R>,
    pagination: PaginationMeta,
    pub total_items: usize,
    pub filtered_count: usize,
    pub total_pages: usize,
}

impl<'a, R> TableView<'a, R> {
    /// Records of the current page
    pub fn visible(&self) -> &[&'a R] {
        &self.matched[self.pagination.offsets()]
    }

    /// Every matching record, sorted
    pub fn matched(&self) -> &[&'a R] {
        &self.matched
    }

    pub fn pagination(&self) -> &PaginationMeta {
        &self.pagination
    }

    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }
}
