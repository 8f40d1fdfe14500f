use logo_extract::{extract_images, extract_images_bytes, ImageSelection, PageContext, RuleKind};

fn run(html: &str, show_all: bool) -> ImageSelection {
    extract_images(&PageContext::new("https://example.com/", html), show_all)
}

#[test]
fn empty_document_yields_nothing() {
    assert_eq!(run("", false), ImageSelection::One(None));
    assert_eq!(run("", true), ImageSelection::All(Vec::new()));
}

#[test]
fn document_without_matching_tags_yields_nothing() {
    let html = r#"
        <html><head><title>Plain</title><link rel="stylesheet" href="/a.css"></head>
        <body><p>No images here.</p><img src="/photo.jpg" alt="a cat"></body></html>
    "#;
    assert_eq!(run(html, false), ImageSelection::One(None));
    assert_eq!(run(html, true), ImageSelection::All(Vec::new()));
}

#[test]
fn malformed_json_ld_contributes_no_candidate() {
    let html = r#"
        <html><head>
          <script type="application/ld+json">{ "@type": "Organization", "logo": </script>
          <script type="application/ld+json">{"@type": "Organization", "logo": "/good.png"}</script>
        </head></html>
    "#;

    let images = run(html, true).into_vec();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].kind, RuleKind::JsonLdLogo);
    assert_eq!(images[0].url, "https://example.com/good.png");
}

#[test]
fn only_malformed_json_ld_yields_nothing() {
    let html = r#"<script type="application/ld+json">not json</script>"#;
    assert!(run(html, true).is_empty());
}

#[test]
fn does_not_panic_on_broken_markup() {
    let inputs = [
        "<p>text<div>more",
        "<link rel=\"icon\" href=\"/a.ico\"",
        "<meta property=\"og:logo content=/x.png>",
        "<a class=\"logo\"><svg><path d=\"M0 0\"></a>",
        "<img alt=logo src=>",
        "&amp text &lt;",
    ];

    for html in inputs {
        let all = run(html, true);
        let one = run(html, false);
        assert_eq!(one.first(), all.first(), "mismatch for {html:?}");
    }
}

#[test]
fn whitespace_only_reference_is_dropped() {
    let html = r#"<meta property="og:logo" content="   "><link rel="icon" href=" ">"#;
    assert!(run(html, true).is_empty());
}

#[test]
fn non_utf8_body_is_decoded() {
    let body = b"<html><head><meta charset=\"windows-1252\"><link rel=\"icon\" href=\"/caf\xE9.ico\"></head></html>";
    let best = extract_images_bytes("https://example.com", body, false);
    assert_eq!(
        best.first().map(|i| i.url.as_str()),
        Some("https://example.com/caf\u{e9}.ico")
    );
}
