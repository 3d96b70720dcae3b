use super::*;

#[test]
fn renders_basic_markdown() {
    let out = render_markdown_html("# Lore\n\nThe **old** kingdom.");
    assert!(out.contains("<h1>"));
    assert!(out.contains("<strong>old</strong>"));
}

#[test]
fn strips_raw_html() {
    let out = render_markdown_html("before <script>alert(1)</script> after");
    assert!(!out.contains("<script>"));
    assert!(out.contains("before"));
}

#[test]
fn empty_input_renders_empty() {
    assert_eq!(render_markdown_html(""), "");
}
