//! # pagekit
//!
//! Splits large ordered collections into pages and builds pager navigation.
//!
//! ## Features
//!
//! - **Page construction**: slice any length-and-range-capable source into
//!   fixed-size pages with clamp-or-reject handling of out-of-range requests
//! - **Deferred sources**: query-backed collections are sliced before their
//!   count is forced, so a windowed fetch is never paid for twice
//! - **Link windows**: pure computation of the page numbers and gap markers
//!   to display around the current page, for a given radius
//! - **Link descriptors**: URL templates or callbacks resolved into
//!   renderer-ready link data, plus first/previous/next/last controls
//!
//! ## Quick Start
//!
//! ```rust
//! use pagekit::{LinkTarget, Page, PageConfig, PagerConfig, Result};
//!
//! fn main() -> Result<()> {
//!     let phonebook: Vec<u32> = (1..=23).collect();
//!
//!     let config = PageConfig::new().with_items_per_page(10);
//!     let page = Page::new(&phonebook, 3, &config)?;
//!     assert_eq!(page.items(), &[21, 22, 23]);
//!     assert_eq!(page.first_item(), Some(21));
//!     assert_eq!(page.page_count(), 3);
//!
//!     let pager = page.pager(PagerConfig::default());
//!     let nav = pager.render(&LinkTarget::template("/phonebook?page=$page"))?;
//!     assert!(nav.contains("href=\"/phonebook?page=1\""));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        Collection                        │
//! │        length() → usize    slice(start, end) → Vec       │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//! ┌──────────────┬────────────┴─────────────┬────────────────┐
//! │     Page     │          Pager           │     Render     │
//! ├──────────────┼──────────────────────────┼────────────────┤
//! │ clamp/reject │ link_window (Number|Gap) │ template $page │
//! │ first/last   │ PageLink descriptors     │ callback       │
//! │ prev/next    │ nav controls             │ format tokens  │
//! └──────────────┴──────────────────────────┴────────────────┘
//! ```
//!
//! Page numbers and item numbers start at 1: users expect the first page to
//! be page 1 and the first item on it to be item 1.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Collection accessors (in-memory and deferred)
pub mod collection;

/// Page construction and metadata
pub mod page;

/// Pager navigation: windows, link descriptors, rendering
pub mod pager;

// ============================================================================
// Re-exports
// ============================================================================

pub use collection::{Collection, DeferredCollection};
pub use error::{Error, Result};
pub use page::{OutOfRangePolicy, Page, PageConfig, PageMetadata};
pub use pager::{
    link_window, LinkKind, LinkTarget, NavLinks, PageLink, Pager, PagerConfig, WindowEntry,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
