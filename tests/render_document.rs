use editorjs_html::{DocumentRenderer, ParseError, Stylesheet, document_renderer, parse, render};
use serde_json::{Value, json};

fn kitchen_sink() -> Value {
    serde_json::from_str(include_str!("fixtures/kitchen_sink.json")).expect("fixture is valid JSON")
}

#[test]
fn kitchen_sink_raw_body_matches() {
    let document = document_renderer()
        .render_document(&kitchen_sink(), false)
        .expect("fixture renders");

    let expected = include_str!("fixtures/kitchen_sink_body.html");
    assert_eq!(expected.trim_end(), document.body.trim_end());
    assert_eq!(document.block_count, 8);
}

#[test]
fn kitchen_sink_head_embeds_bundled_stylesheet() {
    let html = render(&kitchen_sink(), false).expect("fixture renders");

    let head = format!(
        "<head><style type=\"text/css\">{}</style></head>",
        Stylesheet::bundled().as_str()
    );
    assert!(html.starts_with(&head));
    assert!(html.ends_with("</body>"));
    assert!(!Stylesheet::bundled().as_str().trim().is_empty());
}

#[test]
fn hostile_markup_is_cleaned_when_sanitising() {
    let content = json!({
        "blocks": [
            { "type": "paragraph", "data": { "text": "Hello <b>world</b><script>alert(1)</script>" } },
            { "type": "header", "data": { "text": "<span style=\"color:red\">Styled</span> title", "level": 2 } },
            {
                "type": "list",
                "data": {
                    "items": [
                        "<a href=\"https://example.com\" onclick=\"steal()\">link</a>",
                        "<mark class=\"cdx-marker\">marked</mark>"
                    ]
                }
            },
            { "type": "table", "data": { "content": [["<img src=x onerror=alert(1)>cell"]] } }
        ]
    });

    let document = document_renderer()
        .render_document(&content, true)
        .expect("document renders");
    insta::assert_snapshot!("sanitized_hostile_body", document.body);
}

#[test]
fn parse_keeps_block_count_and_order() {
    let document = parse(&kitchen_sink()).expect("fixture parses");
    let kinds: Vec<String> = document.iter().map(|block| block.kind().to_string()).collect();

    assert_eq!(
        kinds,
        [
            "header",
            "paragraph",
            "list",
            "list",
            "delimiter",
            "table",
            "image",
            "header"
        ]
    );
}

#[test]
fn unknown_block_types_do_not_reach_the_output() {
    let content = json!({
        "blocks": [
            { "type": "paragraph", "data": { "text": "kept" } },
            { "type": "bogus", "data": { "text": "dropped" } }
        ]
    });

    assert_eq!(parse(&content).expect("parses").len(), 1);
    let html = render(&content, false).expect("renders");
    assert!(html.contains("<p>kept</p>"));
    assert!(!html.contains("dropped"));
}

#[test]
fn script_is_removed_only_when_sanitising() {
    let content = json!({
        "blocks": [{ "type": "paragraph", "data": { "text": "<script>alert(1)</script>" } }]
    });

    let trusted = render(&content, false).expect("renders");
    assert!(trusted.contains("<p><script>alert(1)</script></p>"));

    let cleaned = render(&content, true).expect("renders");
    assert!(cleaned.contains("<p></p>"));
    assert!(!cleaned.contains("<script"));
}

#[test]
fn checklist_documents_render_every_block() {
    let content = json!({
        "blocks": [
            { "type": "paragraph", "data": { "text": "Errands" } },
            {
                "type": "list",
                "data": {
                    "style": "checklist",
                    "meta": {},
                    "items": [{ "content": "buy milk", "meta": { "checked": true }, "items": [] }]
                }
            },
            { "type": "table", "data": null }
        ]
    });

    let document = document_renderer()
        .render_document(&content, true)
        .expect("checklist and null data are accepted");
    assert_eq!(document.block_count, 3);
    assert_eq!(
        document.body,
        "<body><p>Errands</p>\n\
         <ul class=\"cdx-checklist\"><li class=\"cdx-checklist__item cdx-checklist__item--checked\">buy milk</li></ul>\n\
         <table></table></body>"
    );
}

#[test]
fn structural_errors_are_reported() {
    assert!(matches!(
        render(&json!("just text"), false),
        Err(ParseError::NotAnObject { found: "string" })
    ));
    assert!(matches!(
        render(&json!({ "blocks": { "0": {} } }), false),
        Err(ParseError::BlocksNotAnArray { found: "object" })
    ));
}

#[test]
fn malformed_payload_names_the_block() {
    let content = json!({
        "blocks": [
            { "type": "paragraph", "data": { "text": "fine" } },
            { "type": "header", "data": { "text": "Too deep", "level": 9 } }
        ]
    });

    let error = render(&content, false).expect_err("level 9 is rejected");
    match &error {
        ParseError::Block { index, .. } => assert_eq!(*index, 1),
        other => panic!("unexpected error: {other}"),
    }
    assert!(error.to_string().contains("`header`"));
}

#[test]
fn rendering_is_deterministic() {
    let content = kitchen_sink();
    for sanitize in [false, true] {
        let first = render(&content, sanitize).expect("renders");
        let second = render(&content, sanitize).expect("renders");
        assert_eq!(first, second);
    }
}
