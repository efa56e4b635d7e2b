//! Link-window computation
//!
//! Pure integer arithmetic: given the current page, the page count and a
//! radius, decide which page numbers to show and where a gap marker stands
//! in for an elided run. No rendering concerns live here.

use serde::{Deserialize, Serialize};

/// One slot in the pager window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowEntry {
    /// A page number to link to, or to highlight when current
    Number {
        /// The page number (1-based)
        number: usize,
        /// Whether this is the page being displayed
        current: bool,
    },
    /// Stands in for a run of two or more elided pages
    Gap,
}

impl WindowEntry {
    fn number(number: usize, current_page: usize) -> Self {
        Self::Number {
            number,
            current: number == current_page,
        }
    }

    /// Check if this entry is a gap marker
    pub fn is_gap(&self) -> bool {
        matches!(self, Self::Gap)
    }

    /// Check if this entry is the current page
    pub fn is_current(&self) -> bool {
        matches!(self, Self::Number { current: true, .. })
    }

    /// The page number, if this entry is one
    pub fn page_number(&self) -> Option<usize> {
        match self {
            Self::Number { number, .. } => Some(*number),
            Self::Gap => None,
        }
    }
}

/// Compute the ordered window of page numbers and gap markers.
///
/// The window is `[page - radius, page + radius]` intersected with
/// `[1, page_count]`. With `include_first_last` the boundary pages are forced
/// in even when outside the radius; a run of two or more pages elided between
/// a boundary and the window collapses into exactly one [`WindowEntry::Gap`],
/// while a run of exactly one shows that page number instead of a marker.
///
/// `page` is clamped into `[1, page_count]` so a stray argument cannot
/// produce a window without a current page.
pub fn link_window(
    page: usize,
    page_count: usize,
    radius: usize,
    include_first_last: bool,
) -> Vec<WindowEntry> {
    let page_count = page_count.max(1);
    let page = page.clamp(1, page_count);

    let leftmost = page.saturating_sub(radius).max(1);
    let rightmost = page.saturating_add(radius).min(page_count);

    let mut entries = Vec::new();

    if include_first_last && leftmost > 1 {
        entries.push(WindowEntry::number(1, page));
        match leftmost - 2 {
            0 => {}
            1 => entries.push(WindowEntry::number(2, page)),
            _ => entries.push(WindowEntry::Gap),
        }
    }

    for number in leftmost..=rightmost {
        entries.push(WindowEntry::number(number, page));
    }

    if include_first_last && rightmost < page_count {
        match page_count - rightmost - 1 {
            0 => {}
            1 => entries.push(WindowEntry::number(page_count - 1, page)),
            _ => entries.push(WindowEntry::Gap),
        }
        entries.push(WindowEntry::number(page_count, page));
    }

    entries
}
