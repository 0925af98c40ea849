use super::*;

#[test]
fn renders_headings_and_emphasis() {
    let html = render_markdown_html("## Title\n\nSome *emphasis* here.");
    assert!(html.contains("<h2>Title</h2>"));
    assert!(html.contains("<em>emphasis</em>"));
}

#[test]
fn renders_tables() {
    let html = render_markdown_html("| a | b |\n|---|---|\n| 1 | 2 |\n");
    assert!(html.contains("<table>"));
    assert!(html.contains("<td>1</td>"));
}

#[test]
fn renders_strikethrough() {
    let html = render_markdown_html("~~old~~ new");
    assert!(html.contains("<del>old</del>"));
}

#[test]
fn drops_raw_html() {
    let html = render_markdown_html("before <script>alert(1)</script> after\n\n<div>block</div>\n");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<div>"));
    assert!(html.contains("before"));
}

#[test]
fn empty_markdown_renders_empty() {
    assert_eq!(render_markdown_html(""), "");
}

#[test]
fn reading_minutes_rounds_up_with_floor_of_one() {
    assert_eq!(reading_minutes(""), 1);
    assert_eq!(reading_minutes("one two three"), 1);
    assert_eq!(reading_minutes(&"word ".repeat(200)), 1);
    assert_eq!(reading_minutes(&"word ".repeat(201)), 2);
}
