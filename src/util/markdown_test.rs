use super::*;

#[test]
fn render_html_renders_bold() {
    assert_eq!(render_html("**hi**"), "<p><strong>hi</strong></p>\n");
}

#[test]
fn render_html_renders_lists() {
    let out = render_html("- one\n- two");
    assert!(out.contains("<ul>"));
    assert!(out.contains("<li>one</li>"));
    assert!(out.contains("<li>two</li>"));
}

#[test]
fn render_html_renders_tables() {
    let out = render_html("| a | b |\n| --- | --- |\n| 1 | 2 |");
    assert!(out.contains("<table>"));
}

#[test]
fn render_html_strips_block_html() {
    let out = render_html("<script>alert('x')</script>");
    assert!(!out.contains("<script>"));
}

#[test]
fn render_html_strips_inline_html() {
    let out = render_html("before <b onclick=\"x()\">mid</b> after");
    assert!(!out.contains("onclick"));
    assert!(out.contains("before"));
    assert!(out.contains("after"));
}

#[test]
fn render_html_keeps_plain_text_as_paragraph() {
    assert_eq!(render_html("hello"), "<p>hello</p>\n");
}
