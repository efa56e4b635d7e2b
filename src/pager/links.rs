//! Link descriptors and rendering
//!
//! Maps a computed window into [`PageLink`] descriptors with resolved
//! targets, builds the first/previous/next/last controls, and assembles the
//! final navigation string. Targets come either from a URL template with a
//! `$page` placeholder or from a caller-supplied callback.

use super::window::{link_window, WindowEntry};
use crate::error::{Error, Result};
use crate::page::{Page, PageMetadata};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Regex for the page-number placeholder in URL templates: `$page`
static PAGE_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$page").unwrap());

/// Regex for the window token in format strings: `~3~`
static RANGE_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"~(\d+)~").unwrap());

/// What kind of pager entry a link descriptor represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// A numbered page link from the window
    Number,
    /// A non-link marker for an elided run of pages
    Gap,
    /// Control link to the first page
    First,
    /// Control link to the previous page
    Previous,
    /// Control link to the next page
    Next,
    /// Control link to the last page
    Last,
}

/// One entry of the rendered pager
///
/// Carries enough for a renderer to produce markup: the target page, the
/// current flag, the resolved `href` (template targets only; the current
/// page and gap markers are not links) and the display text. When the target
/// is a callback, `text` holds the callback's markup verbatim and `href` is
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    /// What this entry represents
    pub kind: LinkKind,
    /// Target page number, absent for gap markers
    pub page: Option<usize>,
    /// Whether this entry is the page being displayed
    pub current: bool,
    /// Resolved link target, when this entry is navigable via a template
    pub href: Option<String>,
    /// Display text (page number, symbol, or callback markup)
    pub text: String,
}

/// How page numbers are turned into link targets
pub enum LinkTarget<'a> {
    /// URL template containing exactly one `$page` placeholder. The page
    /// number is substituted verbatim; the URL itself is never escaped.
    Template(String),
    /// Callback receiving the page number and the current flag, returning
    /// markup that is passed through verbatim. Supersedes any template and
    /// makes escaping the caller's responsibility.
    Callback(&'a dyn Fn(usize, bool) -> String),
}

impl LinkTarget<'_> {
    /// Create a template target
    pub fn template(url: impl Into<String>) -> Self {
        LinkTarget::Template(url.into())
    }

    /// Check that a template target carries exactly one `$page` placeholder
    pub fn validate(&self) -> Result<()> {
        match self {
            LinkTarget::Template(url) => match PAGE_TOKEN.find_iter(url).count() {
                1 => Ok(()),
                0 => Err(Error::template(format!(
                    "url template '{url}' is missing the '$page' placeholder"
                ))),
                n => Err(Error::template(format!(
                    "url template '{url}' has {n} '$page' placeholders, expected exactly one"
                ))),
            },
            LinkTarget::Callback(_) => Ok(()),
        }
    }
}

impl std::fmt::Debug for LinkTarget<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkTarget::Template(url) => f.debug_tuple("Template").field(url).finish(),
            LinkTarget::Callback(_) => f.debug_tuple("Callback").finish(),
        }
    }
}

/// Configuration for pager rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerConfig {
    /// Number of page links shown on each side of the current page
    pub radius: usize,
    /// Force the first and last page into the window
    pub include_first_last: bool,
    /// Render the pager even when there is only one page
    pub show_if_single_page: bool,
    /// Separator between rendered fragments
    pub separator: String,
    /// Symbol standing in for an elided run of pages
    pub symbol_gap: String,
    /// Symbol for the first-page control
    pub symbol_first: String,
    /// Symbol for the last-page control
    pub symbol_last: String,
    /// Symbol for the previous-page control
    pub symbol_previous: String,
    /// Symbol for the next-page control
    pub symbol_next: String,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            radius: 2,
            include_first_last: true,
            show_if_single_page: false,
            separator: " ".to_string(),
            symbol_gap: "..".to_string(),
            symbol_first: "<<".to_string(),
            symbol_last: ">>".to_string(),
            symbol_previous: "<".to_string(),
            symbol_next: ">".to_string(),
        }
    }
}

impl PagerConfig {
    /// Create a config with the default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window radius
    #[must_use]
    pub fn with_radius(mut self, radius: usize) -> Self {
        self.radius = radius;
        self
    }

    /// Control whether the boundary pages are forced into the window
    #[must_use]
    pub fn with_include_first_last(mut self, include: bool) -> Self {
        self.include_first_last = include;
        self
    }

    /// Render the pager even for a single page
    #[must_use]
    pub fn with_show_if_single_page(mut self, show: bool) -> Self {
        self.show_if_single_page = show;
        self
    }

    /// Set the fragment separator
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the gap symbol
    #[must_use]
    pub fn with_gap_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol_gap = symbol.into();
        self
    }
}

/// First/previous/next/last control links
///
/// Each control is `None` when the current page sits at that boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLinks {
    /// Link to page 1, unless already there
    pub first: Option<PageLink>,
    /// Link to the previous page, unless on the first
    pub previous: Option<PageLink>,
    /// Link to the next page, unless on the last
    pub next: Option<PageLink>,
    /// Link to the last page, unless already there
    pub last: Option<PageLink>,
}

/// Navigation renderer for a page
///
/// Works off a [`PageMetadata`] so it stays independent of the item type.
/// Usually obtained through [`Page::pager`].
#[derive(Debug, Clone)]
pub struct Pager {
    meta: PageMetadata,
    config: PagerConfig,
}

impl<T> Page<T> {
    /// Create a [`Pager`] over this page's metadata
    pub fn pager(&self, config: PagerConfig) -> Pager {
        Pager::new(self.metadata(), config)
    }
}

impl Pager {
    /// Create a pager from page metadata and a rendering config
    pub fn new(meta: PageMetadata, config: PagerConfig) -> Self {
        Self { meta, config }
    }

    /// The window of page numbers and gap markers at the configured radius
    pub fn window(&self) -> Vec<WindowEntry> {
        self.window_at(self.config.radius)
    }

    fn window_at(&self, radius: usize) -> Vec<WindowEntry> {
        link_window(
            self.meta.page,
            self.meta.page_count,
            radius,
            self.config.include_first_last,
        )
    }

    /// Map the window into link descriptors
    pub fn links(&self, target: &LinkTarget) -> Result<Vec<PageLink>> {
        target.validate()?;
        Ok(self.links_for(&self.window(), target))
    }

    fn links_for(&self, entries: &[WindowEntry], target: &LinkTarget) -> Vec<PageLink> {
        entries
            .iter()
            .map(|entry| match *entry {
                WindowEntry::Number { number, current } => self.page_link(
                    LinkKind::Number,
                    number,
                    current,
                    number.to_string(),
                    target,
                ),
                WindowEntry::Gap => PageLink {
                    kind: LinkKind::Gap,
                    page: None,
                    current: false,
                    href: None,
                    text: self.config.symbol_gap.clone(),
                },
            })
            .collect()
    }

    fn page_link(
        &self,
        kind: LinkKind,
        number: usize,
        current: bool,
        text: String,
        target: &LinkTarget,
    ) -> PageLink {
        match target {
            LinkTarget::Template(url) => PageLink {
                kind,
                page: Some(number),
                current,
                // The current page is displayed, not linked.
                href: (!current).then(|| substitute_page(url, number)),
                text,
            },
            LinkTarget::Callback(callback) => PageLink {
                kind,
                page: Some(number),
                current,
                href: None,
                text: callback(number, current),
            },
        }
    }

    /// Build the first/previous/next/last control links
    pub fn nav(&self, target: &LinkTarget) -> Result<NavLinks> {
        target.validate()?;
        let meta = &self.meta;
        let control = |kind: LinkKind, number: usize, symbol: &str| {
            self.page_link(kind, number, false, symbol.to_string(), target)
        };

        Ok(NavLinks {
            first: (meta.page > 1).then(|| control(LinkKind::First, 1, &self.config.symbol_first)),
            previous: meta
                .previous_page
                .map(|p| control(LinkKind::Previous, p, &self.config.symbol_previous)),
            next: meta
                .next_page
                .map(|p| control(LinkKind::Next, p, &self.config.symbol_next)),
            last: (meta.page < meta.page_count)
                .then(|| control(LinkKind::Last, meta.page_count, &self.config.symbol_last)),
        })
    }

    /// Render the window as a single string, fragments joined by the
    /// configured separator.
    ///
    /// Template targets produce minimal escaped anchors; callback targets
    /// pass their markup through verbatim. Returns an empty string when
    /// there is at most one page, unless `show_if_single_page` is set.
    pub fn render(&self, target: &LinkTarget) -> Result<String> {
        if self.single_page_hidden() {
            return Ok(String::new());
        }
        target.validate()?;
        Ok(self.render_entries(&self.window(), target))
    }

    /// Render a format string with `~N~` window tokens and `$`-tokens.
    ///
    /// `~N~` expands to the window rendered at radius `N`. Recognized
    /// `$`-tokens: `$page`, `$page_count`, `$item_count`, `$items_per_page`,
    /// `$first_item`, `$last_item`, `$link_first`, `$link_last`,
    /// `$link_previous`, `$link_next`. Control tokens render empty at their
    /// boundary; absent item indices render empty.
    pub fn render_format(&self, format: &str, target: &LinkTarget) -> Result<String> {
        if self.single_page_hidden() {
            return Ok(String::new());
        }
        target.validate()?;

        // Expand ~N~ window tokens first.
        let mut out = String::new();
        let mut last = 0;
        for cap in RANGE_TOKEN.captures_iter(format) {
            let matched = cap.get(0).unwrap();
            out.push_str(&format[last..matched.start()]);
            let radius: usize = cap[1]
                .parse()
                .map_err(|_| Error::template(format!("bad radius in '{}'", matched.as_str())))?;
            out.push_str(&self.render_entries(&self.window_at(radius), target));
            last = matched.end();
        }
        out.push_str(&format[last..]);

        let nav = self.nav(target)?;
        let fragment = |link: &Option<PageLink>| {
            link.as_ref()
                .map_or_else(String::new, |l| self.fragment(l, target))
        };
        let index = |value: Option<usize>| value.map_or_else(String::new, |v| v.to_string());

        // Longer token names go first so '$page' does not eat '$page_count'.
        let out = out
            .replace("$items_per_page", &self.meta.items_per_page.to_string())
            .replace("$item_count", &self.meta.item_count.to_string())
            .replace("$first_item", &index(self.meta.first_item))
            .replace("$last_item", &index(self.meta.last_item))
            .replace("$page_count", &self.meta.page_count.to_string())
            .replace("$link_first", &fragment(&nav.first))
            .replace("$link_last", &fragment(&nav.last))
            .replace("$link_previous", &fragment(&nav.previous))
            .replace("$link_next", &fragment(&nav.next))
            .replace("$page", &self.meta.page.to_string());

        Ok(out)
    }

    /// Render a single link descriptor to a fragment
    pub fn fragment(&self, link: &PageLink, target: &LinkTarget) -> String {
        match target {
            // Callback markup is the caller's, verbatim.
            LinkTarget::Callback(_) => link.text.clone(),
            LinkTarget::Template(_) => match &link.href {
                Some(href) => format!("<a href=\"{}\">{}</a>", href, escape(&link.text)),
                None => escape(&link.text),
            },
        }
    }

    fn render_entries(&self, entries: &[WindowEntry], target: &LinkTarget) -> String {
        let fragments: Vec<String> = self
            .links_for(entries, target)
            .iter()
            .map(|link| self.fragment(link, target))
            .collect();
        fragments.join(&self.config.separator)
    }

    fn single_page_hidden(&self) -> bool {
        self.meta.page_count <= 1 && !self.config.show_if_single_page
    }
}

/// Substitute the page number into a `$page` template, verbatim
fn substitute_page(url: &str, number: usize) -> String {
    PAGE_TOKEN
        .replace(url, number.to_string().as_str())
        .into_owned()
}

/// Minimal text escaping for the template rendering path
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
