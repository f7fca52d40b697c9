//! Sort specifiers and pagination metadata

use serde::Serialize;
use std::fmt;
use std::ops::RangeInclusive;

/// Number of numbered page buttons shown by the table controls
pub const DEFAULT_PAGE_WINDOW: usize = 5;

/// Sort direction of a [`SortSpec`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// A parsed sort specifier
///
/// # Format
/// - `field` or `field:asc` (ascending)
/// - `field:desc` (descending)
///
/// Any direction other than `desc` reads as ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Parse a specifier, `None` when no field is named (sorting disabled)
    pub fn parse(spec: &str) -> Option<Self> {
        let (field, direction) = match spec.split_once(':') {
            Some((field, direction)) => (field, direction),
            None => (spec, ""),
        };
        let field = field.trim();
        if field.is_empty() {
            return None;
        }
        let direction = if direction.trim().eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        Some(Self::new(field, direction))
    }

    pub fn is_descending(&self) -> bool {
        self.direction == SortDirection::Desc
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.direction.as_str())
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub page_size: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Create pagination metadata from calculation
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        // Ensure page size is at least 1 to avoid division by zero
        let page_size = page_size.max(1);
        let page = page.max(1);
        let total_pages = total.div_ceil(page_size);

        Self {
            page,
            page_size,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Half-open index range of the current page, clamped to `total`
    pub fn offsets(&self) -> std::ops::Range<usize> {
        let start = (self.page - 1).saturating_mul(self.page_size).min(self.total);
        let end = start.saturating_add(self.page_size).min(self.total);
        start..end
    }

    /// 1-based first and last item shown, `None` for an empty page
    pub fn item_range(&self) -> Option<(usize, usize)> {
        let range = self.offsets();
        if range.is_empty() {
            None
        } else {
            Some((range.start + 1, range.end))
        }
    }

    /// Page numbers to render as buttons
    ///
    /// Centred on the current page and at most `max_visible` wide, shifted
    /// so the window stays inside `1..=total_pages`. Empty when there are
    /// no pages.
    pub fn page_window(&self, max_visible: usize) -> RangeInclusive<usize> {
        if self.total_pages == 0 || max_visible == 0 {
            return RangeInclusive::new(1, 0);
        }
        let mut start = self.page.saturating_sub(max_visible / 2).max(1);
        let end = (start + max_visible - 1).min(self.total_pages);
        if end + 1 - start < max_visible {
            start = (end + 1).saturating_sub(max_visible).max(1);
        }
        start..=end
    }
}
