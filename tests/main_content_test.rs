use warctext::{extract_text, ExtractOpts};

fn main_content() -> ExtractOpts {
    ExtractOpts {
        main_content: true,
        ..ExtractOpts::default()
    }
}

#[test]
fn article_kept_site_footer_dropped() {
    let html = r#"<html><body>
        <div class="article-body"><p>Good</p></div>
        <div class="site-footer"><p>Bad</p></div>
    </body></html>"#;
    let text = extract_text(html, &main_content());
    assert_eq!(text, "Good");
}

#[test]
fn navigation_and_sidebar_suppressed() {
    let html = r#"<html><body>
        <nav><a href="/">Home</a><a href="/about">About</a></nav>
        <div class="main-content"><p>Article text here.</p></div>
        <div class="sidebar"><p>Widget</p></div>
    </body></html>"#;
    let text = extract_text(html, &main_content());
    assert_eq!(text, "Article text here.");
}

#[test]
fn preselection_restricts_to_single_container() {
    let html = r#"<html><body>
        <div class="postcontent"><p>Inside</p></div>
        <p>Outside the container</p>
    </body></html>"#;
    let text = extract_text(html, &main_content());
    assert_eq!(text, "Inside");
}

#[test]
fn preselection_skipped_when_ambiguous() {
    let html = r#"<html><body>
        <div class="post-content"><p>one</p></div>
        <div class="post-content"><p>two</p></div>
    </body></html>"#;
    let text = extract_text(html, &main_content());
    assert!(text.contains("one"));
    assert!(text.contains("two"));
}

#[test]
fn comments_kept_by_default_dropped_on_request() {
    let html = r#"<html><body>
        <div class="entry"><p>Story</p></div>
        <div><div><div class="comments-section"><p>First!</p></div></div></div>
    </body></html>"#;
    let kept = extract_text(html, &main_content());
    assert!(kept.contains("Story"));
    assert!(kept.contains("First!"));

    let opts = ExtractOpts {
        comments: false,
        ..main_content()
    };
    let dropped = extract_text(html, &opts);
    assert!(dropped.contains("Story"));
    assert!(!dropped.contains("First!"));
}

#[test]
fn hidden_elements_suppressed() {
    let html = r#"<html><body>
        <p>visible</p>
        <div hidden><p>gone</p></div>
        <div aria-hidden="true"><p>also gone</p></div>
        <div style="display: none"><p>styled away</p></div>
    </body></html>"#;
    let text = extract_text(html, &main_content());
    assert_eq!(text, "visible");
}

#[test]
fn ads_and_modals_suppressed() {
    let html = r#"<html><body>
        <p>content</p>
        <div class="ad-banner"><p>Buy now</p></div>
        <div data-ad="slot-1"><p>Sponsored</p></div>
        <div class="newsletter-modal"><p>Subscribe!</p></div>
    </body></html>"#;
    let text = extract_text(html, &main_content());
    assert_eq!(text, "content");
}

#[test]
fn main_element_always_kept() {
    let html = r#"<html><body>
        <main><p>kept even without article classes</p></main>
        <footer><div><div><p>deep global footer</p></div></div></footer>
    </body></html>"#;
    let text = extract_text(html, &main_content());
    assert!(text.contains("kept even without article classes"));
}

#[test]
fn global_footer_rejected_by_position() {
    let html = r#"<html><body>
        <div><p>body text</p>
            <div><footer><p>site footer links</p></footer></div>
        </div>
    </body></html>"#;
    let text = extract_text(html, &main_content());
    assert!(text.contains("body text"));
    assert!(!text.contains("site footer links"));
}

#[test]
fn icon_anchors_suppressed() {
    let html = "<html><body><p>Section title<a href=\"#sec\">\u{b6}</a></p>\
                <p>icon <span>\u{e0a1}</span> here</p></body></html>";
    let text = extract_text(html, &main_content());
    assert!(!text.contains('\u{b6}'));
    assert!(!text.contains('\u{e0a1}'));
    assert!(text.contains("Section title"));
    assert!(text.contains("icon here") || text.contains("icon  here"));
}

#[test]
fn classifier_off_without_main_content_flag() {
    let html = r#"<html><body>
        <nav>Home About</nav>
        <div class="site-footer">footer text</div>
    </body></html>"#;
    let text = extract_text(html, &ExtractOpts::default());
    assert!(text.contains("Home About"));
    assert!(text.contains("footer text"));
}
