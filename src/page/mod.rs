//! Page module
//!
//! One page of a larger collection: construction, clamping and metadata.
//!
//! # Overview
//!
//! A [`Page`] is built from a [`crate::Collection`], a requested page number
//! and a [`PageConfig`]. Construction computes the valid page range, resolves
//! out-of-range requests per policy, slices the visible items exactly once
//! and derives the metadata the pager needs (first/last item, previous/next
//! page, page count).

mod types;

pub use types::{OutOfRangePolicy, Page, PageConfig, PageMetadata};
