//! Compiled regex patterns and CSS selectors for content classification.
//!
//! All patterns are compiled once at startup using `LazyLock`. They are
//! case-insensitive and anchored by delimiter classes (`[\s_-]`, start, end)
//! rather than full-line anchors, so a pattern matches a single token inside
//! a compound `class`/`id` attribute without matching the middle of an
//! unrelated token.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// CSS query used to pre-select an unambiguous main-content root before
/// walking. Only applied when exactly one node matches.
pub static MAIN_CONTENT_SELECTOR: &str = "\
.article-body, .articleBody, .contentBody, .article-text, .main-content, \
.postcontent, .post-content, .single-post, [role=\"main\"]";

// =============================================================================
// Whitelist
// =============================================================================

/// Matches class/id names identifying article body containers.
/// A match on a block element short-circuits all further rejection rules.
pub static ARTICLE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|[\s_-])(?:article|entry|post|story|single[_-]?post|main)(?:content|body|text|page)?(?:$|[\s_-])",
    )
    .expect("ARTICLE_CLASS regex")
});

// =============================================================================
// Page chrome (block-only rules)
// =============================================================================

/// Matches class/id names of site navigation containers.
pub static NAVIGATION_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|\s)(?:[a-z]-)?(?:(?:main|site|page|sub|article)[_-]*)?(?:nav(?:bar|igation|box)?|menu(?:[_-]item)?|dropdown|bread[_-]?crumbs?)|(?:link[_-]?(?:list|container))(?:$|[\s_-])",
    )
    .expect("NAVIGATION_CLASS regex")
});

/// Matches class/id names of global page headers.
pub static HEADER_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|[\s_-])(?:(?:global|page|site|top)[_-]*)?header(?:[_-]*(?:bar|container|wrapper|content|inner))?(?:$|[\s_-])",
    )
    .expect("HEADER_CLASS regex")
});

/// Matches class/id names of global page footers.
pub static FOOTER_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|[\s_-])(?:(?:global|page|site|bottom)[_-]*)?footer(?:[_-]*(?:bar|container|wrapper|content|inner|nav(?:igation)?))?(?:$|[\s_-])",
    )
    .expect("FOOTER_CLASS regex")
});

/// Matches class/id names of recommendation and related-content widgets.
pub static RECOMMENDED_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|[\s_-])(?:trends|trending|recommended|popular|editorial|editors?[_-]picks|(?:related|more)[_-]?(?:links|articles|posts|guides|stories))(?:$|[\s_-])",
    )
    .expect("RECOMMENDED_CLASS regex")
});

/// Matches class/id names of comment sections.
pub static COMMENTS_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|[\s_-])(?:comments?(?:[_-]?(?:section|list|area|form|wrapper|container|count))?|discussion|disqus(?:_thread)?|respond)(?:$|[\s_-])",
    )
    .expect("COMMENTS_CLASS regex")
});

/// Matches class/id names of global search bars.
pub static SEARCH_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|[\s_-])(?:(?:global|site|page|quick)[_-]*)?search(?:[_-]*(?:bar|box|form|field|input|btn|button|widget))?(?:$|[\s_-])",
    )
    .expect("SEARCH_CLASS regex")
});

/// Matches class/id names of sidebars and secondary widget areas.
pub static SIDEBAR_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|[\s_-])(?:side[_-]?bar|widget[_-]?(?:area|zone)|secondary[_-]?(?:content|column))(?:$|[\s_-])",
    )
    .expect("SIDEBAR_CLASS regex")
});

/// Matches class/id names of modals, popups and lightboxes.
pub static MODAL_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|[\s_-])(?:modal|pop[_-]?(?:up|over)|lightbox|overlay|dialog|interstitial)(?:$|[\s_-])",
    )
    .expect("MODAL_CLASS regex")
});

// =============================================================================
// Generic rules (apply to inline elements too)
// =============================================================================

/// Matches class names that hide an element via CSS utility classes.
pub static DISPLAY_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|[\s_-])(?:display[_-]?none|hidden|invisible|collapsed|h-0|nocontent|expandable)(?:$|[\s_-])",
    )
    .expect("DISPLAY_CLASS regex")
});

/// Matches inline `style` attribute values that hide an element.
pub static DISPLAY_CSS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)display\s*:\s*none|visibility\s*:\s*hidden").expect("DISPLAY_CSS regex")
});

/// Matches class/id names of skip links, scroll anchors and pagination.
/// Only evaluated for `<a>`, `<div>` and `<li>` elements.
pub static SKIP_LINK_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|[\s_-])(?:skip[_-]?(?:to|link|nav)|scroll[_-]?(?:up|down|top)|next|prev(?:ious)?|permalink|pagination|pager)(?:$|[\s_-])",
    )
    .expect("SKIP_LINK_CLASS regex")
});

/// Matches class/id names of sign-in / registration widgets.
pub static SIGNIN_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|[\s_-])(?:sign[_-]?(?:in|up)|log[_-]?(?:in|out)|register|registration|subscribe|subscription|newsletter|paywall)(?:$|[\s_-])",
    )
    .expect("SIGNIN_CLASS regex")
});

/// Matches class/id names of post metadata lines (bylines, dates, tags).
pub static POST_META_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|[\s_-])(?:(?:post|entry|article|story)[_-]?(?:meta|info|date|byline|author|tags?|labels?)|byline|date[_-]?line|time[_-]?stamp|published|meta[_-]?(?:data|info|line))(?:$|[\s_-])",
    )
    .expect("POST_META_CLASS regex")
});

/// Matches class/id names of social sharing and feedback widgets.
pub static SOCIAL_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|[\s_-])(?:social(?:[_-]?(?:media|links?|icons?|bar))?|shar(?:e|ing)(?:[_-]?(?:bar|buttons?|links?|tools?))?|feedback|upvote|downvote|vot(?:e|ing)|rating|reactions?|likes?|follow[_-]?us)(?:$|[\s_-])",
    )
    .expect("SOCIAL_CLASS regex")
});

/// Matches class/id names of site logos.
pub static LOGO_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[\s_-])(?:brand[_-]?)?logo(?:$|[\s_-])").expect("LOGO_CLASS regex")
});

/// Matches class/id names of advertisement containers.
pub static ADS_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|[\s_-])(?:ads?|advert(?:isement|ising)?|ad[_-]?(?:slot|unit|wrapper|container|block)|sponsor(?:ed)?|promot(?:ed|ion)|banner|donat(?:e|ion))(?:$|[\s_-])",
    )
    .expect("ADS_CLASS regex")
});

/// Attributes whose bare presence marks an element as an ad container.
pub static AD_ATTRIBUTES: &[&str] = &["data-ad", "data-advertisement", "data-text-ad"];
