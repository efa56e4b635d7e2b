//! Tests for the pager module

use super::*;
use crate::error::Error;
use crate::page::{Page, PageConfig};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn num(number: usize, current: bool) -> WindowEntry {
    WindowEntry::Number { number, current }
}

fn page_of(item_count: usize, items_per_page: usize, page: isize) -> Page<usize> {
    let items: Vec<usize> = (1..=item_count).collect();
    let config = PageConfig::new().with_items_per_page(items_per_page);
    Page::new(&items, page, &config).unwrap()
}

// ============================================================================
// Window Computation
// ============================================================================

#[test]
fn test_window_with_gaps_on_both_sides() {
    let window = link_window(50, 100, 2, true);
    assert_eq!(
        window,
        vec![
            num(1, false),
            WindowEntry::Gap,
            num(48, false),
            num(49, false),
            num(50, true),
            num(51, false),
            num(52, false),
            WindowEntry::Gap,
            num(100, false),
        ]
    );
}

#[test_case(1; "first page")]
#[test_case(2; "second page")]
#[test_case(3; "middle page")]
#[test_case(4; "fourth page")]
#[test_case(5; "last page")]
fn test_small_range_has_no_gaps(page: usize) {
    let window = link_window(page, 5, 2, true);
    let numbers: Vec<usize> = window.iter().filter_map(WindowEntry::page_number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    assert!(window.iter().all(|e| !e.is_gap()));
    assert_eq!(
        window.iter().position(|e| e.is_current()),
        Some(page - 1)
    );
}

#[test]
fn test_single_page_window() {
    assert_eq!(link_window(1, 1, 2, true), vec![num(1, true)]);
}

#[test]
fn test_radius_covering_everything() {
    let window = link_window(3, 6, 10, true);
    let numbers: Vec<usize> = window.iter().filter_map(WindowEntry::page_number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    assert!(window.iter().all(|e| !e.is_gap()));
}

#[test]
fn test_run_of_one_shows_the_page_instead_of_a_gap() {
    // Between page 1 and the window [3, 5] only page 2 is skipped, so it is
    // shown outright; the right side still elides a long run.
    let window = link_window(4, 100, 1, true);
    assert_eq!(
        window,
        vec![
            num(1, false),
            num(2, false),
            num(3, false),
            num(4, true),
            num(5, false),
            WindowEntry::Gap,
            num(100, false),
        ]
    );
}

#[test]
fn test_run_of_one_on_the_right() {
    let window = link_window(4, 7, 1, true);
    let numbers: Vec<usize> = window.iter().filter_map(WindowEntry::page_number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7]);
    assert!(window.iter().all(|e| !e.is_gap()));
}

#[test]
fn test_current_page_at_the_boundaries() {
    assert_eq!(
        link_window(1, 10, 2, true),
        vec![
            num(1, true),
            num(2, false),
            num(3, false),
            WindowEntry::Gap,
            num(10, false),
        ]
    );
    assert_eq!(
        link_window(10, 10, 2, true),
        vec![
            num(1, false),
            WindowEntry::Gap,
            num(8, false),
            num(9, false),
            num(10, true),
        ]
    );
}

#[test]
fn test_without_first_last() {
    let window = link_window(50, 100, 2, false);
    let numbers: Vec<usize> = window.iter().filter_map(WindowEntry::page_number).collect();
    assert_eq!(numbers, vec![48, 49, 50, 51, 52]);
    assert!(window.iter().all(|e| !e.is_gap()));
}

#[test]
fn test_window_is_ascending() {
    for page in 1..=40 {
        let window = link_window(page, 40, 3, true);
        let numbers: Vec<usize> = window.iter().filter_map(WindowEntry::page_number).collect();
        let mut sorted = numbers.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(numbers, sorted, "page {page}");
        assert_eq!(window.iter().filter(|e| e.is_current()).count(), 1);
    }
}

#[test]
fn test_stray_page_argument_is_clamped() {
    let window = link_window(99, 5, 2, true);
    assert!(window.iter().any(|e| e.is_current()));
    assert_eq!(window.last().unwrap().page_number(), Some(5));
}

// ============================================================================
// Link Descriptors
// ============================================================================

#[test]
fn test_template_links() {
    let page = page_of(100, 15, 1);
    let pager = page.pager(PagerConfig::default());
    let target = LinkTarget::template("http://example.org/foo/page=$page");

    let links = pager.links(&target).unwrap();
    assert_eq!(links.len(), 5); // 1 2 3 .. 7

    assert_eq!(links[0].kind, LinkKind::Number);
    assert!(links[0].current);
    assert_eq!(links[0].href, None); // current page is not a link
    assert_eq!(links[0].text, "1");

    assert_eq!(
        links[1].href.as_deref(),
        Some("http://example.org/foo/page=2")
    );

    assert_eq!(links[3].kind, LinkKind::Gap);
    assert_eq!(links[3].page, None);
    assert_eq!(links[3].text, "..");

    assert_eq!(links[4].page, Some(7));
    assert_eq!(
        links[4].href.as_deref(),
        Some("http://example.org/foo/page=7")
    );
}

#[test]
fn test_template_must_have_exactly_one_placeholder() {
    let page = page_of(50, 10, 2);
    let pager = page.pager(PagerConfig::default());

    let err = pager
        .links(&LinkTarget::template("http://example.org/foo"))
        .unwrap_err();
    assert!(matches!(err, Error::Template { .. }));

    let err = pager
        .links(&LinkTarget::template("/p/$page/x/$page"))
        .unwrap_err();
    assert!(matches!(err, Error::Template { .. }));
}

#[test]
fn test_callback_links() {
    let page = page_of(50, 10, 2);
    let pager = page.pager(PagerConfig::default());
    let render_link =
        |number: usize, current: bool| format!("[{}{}]", number, if current { "*" } else { "" });
    let target = LinkTarget::Callback(&render_link);

    let links = pager.links(&target).unwrap();
    assert_eq!(links[0].text, "[1]");
    assert_eq!(links[0].href, None);
    assert_eq!(links[1].text, "[2*]");
    assert!(links[1].current);
}

// ============================================================================
// Navigation Controls
// ============================================================================

#[test]
fn test_nav_on_a_middle_page() {
    let page = page_of(100, 10, 5);
    let pager = page.pager(PagerConfig::default());
    let nav = pager.nav(&LinkTarget::template("/p/$page")).unwrap();

    let first = nav.first.unwrap();
    assert_eq!(first.kind, LinkKind::First);
    assert_eq!(first.page, Some(1));
    assert_eq!(first.href.as_deref(), Some("/p/1"));
    assert_eq!(first.text, "<<");

    assert_eq!(nav.previous.unwrap().page, Some(4));
    assert_eq!(nav.next.unwrap().page, Some(6));
    assert_eq!(nav.last.unwrap().page, Some(10));
}

#[test]
fn test_nav_at_the_boundaries() {
    let target = LinkTarget::template("/p/$page");

    let page = page_of(100, 10, 1);
    let nav = page.pager(PagerConfig::default()).nav(&target).unwrap();
    assert!(nav.first.is_none());
    assert!(nav.previous.is_none());
    assert_eq!(nav.next.unwrap().page, Some(2));
    assert_eq!(nav.last.unwrap().page, Some(10));

    let page = page_of(100, 10, 10);
    let nav = page.pager(PagerConfig::default()).nav(&target).unwrap();
    assert_eq!(nav.first.unwrap().page, Some(1));
    assert_eq!(nav.previous.unwrap().page, Some(9));
    assert!(nav.next.is_none());
    assert!(nav.last.is_none());
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_seven_pages() {
    let page = page_of(100, 15, 1);
    let url = "http://example.org/foo/page=$page";
    let rendered = page
        .pager(PagerConfig::default())
        .render(&LinkTarget::template(url))
        .unwrap();

    assert_eq!(
        rendered,
        "1 <a href=\"http://example.org/foo/page=2\">2</a> \
         <a href=\"http://example.org/foo/page=3\">3</a> .. \
         <a href=\"http://example.org/foo/page=7\">7</a>"
    );
}

#[test]
fn test_render_with_custom_separator() {
    let page = page_of(100, 15, 1);
    let url = "http://example.org/foo/page=$page";
    let rendered = page
        .pager(PagerConfig::default().with_separator("_"))
        .render(&LinkTarget::template(url))
        .unwrap();

    assert_eq!(
        rendered,
        "1_<a href=\"http://example.org/foo/page=2\">2</a>_\
         <a href=\"http://example.org/foo/page=3\">3</a>_.._\
         <a href=\"http://example.org/foo/page=7\">7</a>"
    );
}

#[test]
fn test_render_single_page() {
    let page = page_of(10, 10, 1);
    let target = LinkTarget::template("/p/$page");

    let hidden = page.pager(PagerConfig::default()).render(&target).unwrap();
    assert_eq!(hidden, "");

    let shown = page
        .pager(PagerConfig::default().with_show_if_single_page(true))
        .render(&target)
        .unwrap();
    assert_eq!(shown, "1");
}

#[test]
fn test_render_empty_collection() {
    let items: Vec<usize> = Vec::new();
    let page = Page::new(&items, 1, &PageConfig::default()).unwrap();
    let rendered = page
        .pager(PagerConfig::default())
        .render(&LinkTarget::template("/p/$page"))
        .unwrap();
    assert_eq!(rendered, "");
}

#[test]
fn test_render_escapes_text_but_not_urls() {
    let page = page_of(100, 10, 5);
    let config = PagerConfig::default().with_gap_symbol("<..>");
    let rendered = page
        .pager(config)
        .render(&LinkTarget::template("/p?page=$page&q=a"))
        .unwrap();

    assert!(rendered.contains("&lt;..&gt;"));
    assert!(rendered.contains("href=\"/p?page=4&q=a\""));
}

#[test]
fn test_render_callback_is_verbatim() {
    let page = page_of(30, 10, 2);
    let render_link = |number: usize, current: bool| {
        if current {
            format!("<em>{number}</em>")
        } else {
            format!("<a data-page=\"{number}\">{number}</a>")
        }
    };
    let rendered = page
        .pager(PagerConfig::default())
        .render(&LinkTarget::Callback(&render_link))
        .unwrap();

    assert_eq!(
        rendered,
        "<a data-page=\"1\">1</a> <em>2</em> <a data-page=\"3\">3</a>"
    );
}

// ============================================================================
// Format Strings
// ============================================================================

#[test]
fn test_format_window_and_controls() {
    let page = page_of(500, 10, 3);
    let rendered = page
        .pager(PagerConfig::default())
        .render_format("$link_previous ~1~ $link_next", &LinkTarget::template("/p/$page"))
        .unwrap();

    assert_eq!(
        rendered,
        "<a href=\"/p/2\">&lt;</a> \
         <a href=\"/p/1\">1</a> <a href=\"/p/2\">2</a> 3 <a href=\"/p/4\">4</a> .. \
         <a href=\"/p/50\">50</a> \
         <a href=\"/p/4\">&gt;</a>"
    );
}

#[test]
fn test_format_page_tokens() {
    let page = page_of(500, 10, 3);
    let pager = page.pager(PagerConfig::default());
    let target = LinkTarget::template("/p/$page");

    let rendered = pager
        .render_format("Page $page of $page_count", &target)
        .unwrap();
    assert_eq!(rendered, "Page 3 of 50");

    let rendered = pager
        .render_format("Items $first_item-$last_item of $item_count", &target)
        .unwrap();
    assert_eq!(rendered, "Items 21-30 of 500");
}

#[test]
fn test_format_controls_empty_at_boundary() {
    let page = page_of(500, 10, 1);
    let rendered = page
        .pager(PagerConfig::default())
        .render_format("[$link_previous]", &LinkTarget::template("/p/$page"))
        .unwrap();
    assert_eq!(rendered, "[]");
}

#[test]
fn test_format_single_page_is_hidden() {
    let page = page_of(5, 10, 1);
    let rendered = page
        .pager(PagerConfig::default())
        .render_format("~2~", &LinkTarget::template("/p/$page"))
        .unwrap();
    assert_eq!(rendered, "");
}
