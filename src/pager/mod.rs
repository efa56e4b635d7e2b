//! Pager module
//!
//! Navigation between pages: window computation, link descriptors and
//! string rendering.
//!
//! # Overview
//!
//! [`link_window`] is a pure function deciding which page numbers to show
//! around the current page and where a gap marker elides a run. [`Pager`]
//! consumes a page's metadata and a [`PagerConfig`] to turn that window into
//! [`PageLink`] descriptors and, if wanted, a finished navigation string.

mod links;
mod window;

pub use links::{LinkKind, LinkTarget, NavLinks, PageLink, Pager, PagerConfig};
pub use window::{link_window, WindowEntry};

#[cfg(test)]
mod tests;
