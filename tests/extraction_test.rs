use warctext::{extract_text, ExtractOpts};

#[test]
fn inline_markup_flattens_to_plain_text() {
    let text = extract_text("<p>Hello <b>world</b>!</p>", &ExtractOpts::default());
    assert_eq!(text, "Hello world!");
}

#[test]
fn empty_input_yields_empty_string() {
    assert_eq!(extract_text("", &ExtractOpts::default()), "");
    assert_eq!(
        extract_text("<html><head></head></html>", &ExtractOpts::default()),
        ""
    );
}

#[test]
fn head_content_never_leaks() {
    let html = "<html><head><title>Page Title</title><style>p{}</style></head>\
                <body><p>body text</p></body></html>";
    let text = extract_text(html, &ExtractOpts::default());
    assert_eq!(text, "body text");
}

#[test]
fn link_targets_appended_when_requested() {
    let html = r#"<p>Visit <a href="https://x.example">click</a> now.</p>"#;
    let defaults = extract_text(html, &ExtractOpts::default());
    assert!(!defaults.contains("x.example"));

    let opts = ExtractOpts {
        links: true,
        ..ExtractOpts::default()
    };
    let with_links = extract_text(html, &opts);
    assert!(with_links.contains("click (https://x.example)"));
}

#[test]
fn link_without_href_stays_bare() {
    let opts = ExtractOpts {
        links: true,
        ..ExtractOpts::default()
    };
    assert_eq!(extract_text("<p><a>click</a></p>", &opts), "click");
}

#[test]
fn alt_texts_on_by_default_and_removable() {
    let html = r#"<p>before <img src="x.png" alt="diagram"> after</p>"#;
    let text = extract_text(html, &ExtractOpts::default());
    assert!(text.contains("diagram"));

    let opts = ExtractOpts {
        alt_texts: false,
        ..ExtractOpts::default()
    };
    let text = extract_text(html, &opts);
    assert!(!text.contains("diagram"));
    assert!(text.contains("before"));
    assert!(text.contains("after"));
}

#[test]
fn form_fields_hidden_by_default() {
    let html = r#"<form><input type="text" value="query"><button>Go</button></form><p>x</p>"#;
    let text = extract_text(html, &ExtractOpts::default());
    assert_eq!(text, "x");
}

#[test]
fn form_fields_bracketed_when_enabled() {
    let opts = ExtractOpts {
        form_fields: true,
        ..ExtractOpts::default()
    };
    let html =
        r#"<form><input type="text" value="query"><input type="hidden" value="secret"></form>"#;
    let text = extract_text(html, &opts);
    assert!(text.contains("[ query ]"));
    assert!(!text.contains("secret"));
}

#[test]
fn input_placeholder_used_as_fallback() {
    let opts = ExtractOpts {
        form_fields: true,
        ..ExtractOpts::default()
    };
    let html = r#"<form><input type="search" placeholder="Search…"></form>"#;
    assert!(extract_text(html, &opts).contains("[ Search… ]"));
}

#[test]
fn button_contents_bracketed() {
    let opts = ExtractOpts {
        form_fields: true,
        ..ExtractOpts::default()
    };
    let text = extract_text("<button>Send</button>", &opts);
    assert!(text.contains("[ Send ]"));
}

#[test]
fn noscript_excluded_by_default() {
    let html = "<p>a</p><noscript><p>no-js fallback</p></noscript>";
    assert!(!extract_text(html, &ExtractOpts::default()).contains("fallback"));
    let opts = ExtractOpts {
        noscript: true,
        ..ExtractOpts::default()
    };
    assert!(extract_text(html, &opts).contains("fallback"));
}

#[test]
fn caller_skip_selectors_prune() {
    let opts = ExtractOpts {
        skip_elements: vec![".promo".into(), "#related".into()],
        ..ExtractOpts::default()
    };
    let html = r#"<p>keep</p><div class="promo">buy now</div><div id="related">more</div>"#;
    let text = extract_text(html, &opts);
    assert_eq!(text, "keep");
}

#[test]
fn adding_skip_selectors_only_shrinks_output() {
    let html = r#"<div><p>alpha</p><div class="x"><p>beta</p></div><p>gamma</p></div>"#;
    let base = extract_text(html, &ExtractOpts::default());
    let opts = ExtractOpts {
        skip_elements: vec![".x".into()],
        ..ExtractOpts::default()
    };
    let pruned = extract_text(html, &opts);

    let base_tokens: Vec<&str> = base.split_whitespace().collect();
    let pruned_tokens: Vec<&str> = pruned.split_whitespace().collect();
    // pruned tokens must be a subsequence of the base tokens
    let mut iter = base_tokens.iter();
    for token in &pruned_tokens {
        assert!(
            iter.any(|t| t == token),
            "token {token:?} not in original order"
        );
    }
    assert!(pruned_tokens.len() < base_tokens.len());
}
