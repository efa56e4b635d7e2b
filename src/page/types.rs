//! Page types and construction
//!
//! Defines [`PageConfig`], the out-of-range policy and the [`Page`] itself.

use crate::collection::Collection;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// What to do when the requested page is outside `1..=page_count`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutOfRangePolicy {
    /// Silently adjust to the nearest valid page. Callers detect that
    /// clamping happened by comparing [`Page::page`] with the number they
    /// asked for.
    #[default]
    Clamp,

    /// Surface the request as [`Error::PageOutOfRange`]
    Reject,
}

/// Configuration for page construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Maximal number of items displayed on a page (must be at least 1)
    pub items_per_page: usize,
    /// Policy for out-of-range page requests
    pub out_of_range: OutOfRangePolicy,
    /// Total item count, if the caller already knows it. Skips the length
    /// query on the collection.
    pub item_count: Option<usize>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            items_per_page: 20,
            out_of_range: OutOfRangePolicy::Clamp,
            item_count: None,
        }
    }
}

impl PageConfig {
    /// Create a config with the default settings (20 items per page, clamp)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of items per page
    #[must_use]
    pub fn with_items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page;
        self
    }

    /// Set the out-of-range policy
    #[must_use]
    pub fn with_out_of_range(mut self, policy: OutOfRangePolicy) -> Self {
        self.out_of_range = policy;
        self
    }

    /// Provide a known item count so construction skips the length query
    #[must_use]
    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = Some(item_count);
        self
    }
}

/// Serializable summary of a page, without the items
///
/// Handy for JSON API responses that return the records and the pagination
/// envelope side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Number of the current page (1-based)
    pub page: usize,
    /// Maximal number of items per page
    pub items_per_page: usize,
    /// Total number of items in the collection
    pub item_count: usize,
    /// Total number of pages (at least 1)
    pub page_count: usize,
    /// 1-based index of the first item on this page, if any
    pub first_item: Option<usize>,
    /// 1-based index of the last item on this page, if any
    pub last_item: Option<usize>,
    /// Number of the previous page, unless this is the first
    pub previous_page: Option<usize>,
    /// Number of the next page, unless this is the last
    pub next_page: Option<usize>,
}

/// One page of a paginated collection
///
/// Immutable once built: all derived fields are computed at construction and
/// the visible items are materialized exactly once, so a query-backed source
/// is not re-executed on every access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    page: usize,
    items_per_page: usize,
    item_count: usize,
    page_count: usize,
    first_item: Option<usize>,
    last_item: Option<usize>,
    items: Vec<T>,
}

impl<T> Page<T> {
    /// Build a page from a collection.
    ///
    /// `requested_page` is 1-based and may be any integer; how values outside
    /// `1..=page_count` are handled depends on [`PageConfig::out_of_range`].
    ///
    /// The collection is sliced with the indices implied by the request
    /// *before* its length is forced, so sources that learn their real count
    /// from a windowed fetch pay no separate count query upfront. If the
    /// length then shows the request was past the end, the page is resolved
    /// per policy and sliced once more.
    pub fn new<C>(collection: &C, requested_page: isize, config: &PageConfig) -> Result<Self>
    where
        C: Collection<Item = T> + ?Sized,
    {
        if config.items_per_page == 0 {
            return Err(Error::invalid_config("items_per_page must be at least 1"));
        }
        let per_page = config.items_per_page;

        // Tentatively trust the request; pages below 1 start at the front.
        let tentative = if requested_page < 1 {
            1
        } else {
            requested_page as usize
        };
        let start = (tentative - 1).saturating_mul(per_page);
        let end = start.saturating_add(per_page);
        trace!(start, end, "slicing collection");
        let mut items = collection.slice(start, end)?;

        let item_count = match config.item_count {
            Some(count) => count,
            None => collection.length()?,
        };
        let page_count = page_count_for(item_count, per_page);

        let page = if requested_page < 1 || tentative > page_count {
            match config.out_of_range {
                OutOfRangePolicy::Clamp => {
                    let clamped = tentative.min(page_count);
                    debug!(
                        requested = requested_page,
                        page = clamped,
                        page_count,
                        "requested page out of range, clamped"
                    );
                    clamped
                }
                OutOfRangePolicy::Reject => {
                    return Err(Error::PageOutOfRange {
                        requested: requested_page,
                        page_count,
                    });
                }
            }
        } else {
            tentative
        };

        let start = (page - 1) * per_page;
        if page != tentative {
            debug!(page, "reslicing after the true length became known");
            items = collection.slice(start, start + per_page)?;
        }
        // Keep the slice consistent with the reported count: a hinted count
        // wins over whatever the source returned past it.
        items.truncate(item_count.saturating_sub(start));

        let first_item = (!items.is_empty()).then_some(start + 1);
        let last_item = (!items.is_empty()).then(|| start + items.len());

        Ok(Self {
            page,
            items_per_page: per_page,
            item_count,
            page_count,
            first_item,
            last_item,
            items,
        })
    }

    /// Number of the current page (1-based, within `1..=page_count`)
    pub fn page(&self) -> usize {
        self.page
    }

    /// Maximal number of items per page
    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Total number of items in the collection
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Total number of pages (at least 1, even for an empty collection)
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// 1-based index of the first item on this page, `None` if empty
    pub fn first_item(&self) -> Option<usize> {
        self.first_item
    }

    /// 1-based index of the last item on this page, `None` if empty
    pub fn last_item(&self) -> Option<usize> {
        self.last_item
    }

    /// Number of the previous page, unless this is the first
    pub fn previous_page(&self) -> Option<usize> {
        (self.page > 1).then(|| self.page - 1)
    }

    /// Number of the next page, unless this is the last
    pub fn next_page(&self) -> Option<usize> {
        (self.page < self.page_count).then(|| self.page + 1)
    }

    /// The items on this page
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the page, returning its items
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the items on this page
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Serializable summary of this page, without the items
    pub fn metadata(&self) -> PageMetadata {
        PageMetadata {
            page: self.page,
            items_per_page: self.items_per_page,
            item_count: self.item_count,
            page_count: self.page_count,
            first_item: self.first_item,
            last_item: self.last_item,
            previous_page: self.previous_page(),
            next_page: self.next_page(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Number of pages needed for `item_count` items, never less than 1
fn page_count_for(item_count: usize, items_per_page: usize) -> usize {
    item_count.div_ceil(items_per_page).max(1)
}
