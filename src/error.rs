//! Error types for pagekit
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for pagekit
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// A configuration value is invalid (e.g. `items_per_page` of zero)
    #[error("Configuration error: {message}")]
    InvalidConfig {
        /// What was wrong with the configuration
        message: String,
    },

    // ============================================================================
    // Page Errors
    // ============================================================================
    /// The requested page is outside `1..=page_count` and the policy is
    /// [`crate::OutOfRangePolicy::Reject`]
    #[error("Page {requested} is out of range (valid pages: 1..={page_count})")]
    PageOutOfRange {
        /// The page number that was asked for
        requested: isize,
        /// Number of pages actually available
        page_count: usize,
    },

    // ============================================================================
    // Collection Errors
    // ============================================================================
    /// The collection accessor failed to count or slice
    #[error("Collection error: {message}")]
    Collection {
        /// What the accessor reported
        message: String,
    },

    // ============================================================================
    // Template Errors
    // ============================================================================
    /// A URL template violates the `$page` placeholder contract
    #[error("Template error: {message}")]
    Template {
        /// What was wrong with the template
        message: String,
    },
}

impl Error {
    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a collection error
    pub fn collection(message: impl Into<String>) -> Self {
        Self::Collection {
            message: message.into(),
        }
    }

    /// Create a template error
    pub fn template(message: impl Into<String>) -> Self {
        Self::Template {
            message: message.into(),
        }
    }

    /// Check if this error is an out-of-range page request
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::PageOutOfRange { .. })
    }
}

/// Result type alias for pagekit
pub type Result<T> = std::result::Result<T, Error>;
