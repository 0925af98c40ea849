//! Markdown rendering for blog posts.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Event, Options, Parser, html};

const WORDS_PER_MINUTE: usize = 200;

/// Render post Markdown to an HTML fragment. Raw HTML in the source is dropped.
#[must_use]
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);

    let parser = Parser::new_ext(markdown, options).filter(|event| !matches!(event, Event::Html(_) | Event::InlineHtml(_)));

    let mut out = String::with_capacity(markdown.len() + markdown.len() / 2);
    html::push_html(&mut out, parser);
    out
}

/// Whole minutes to read `markdown`, at least one.
#[must_use]
pub fn reading_minutes(markdown: &str) -> usize {
    let words = markdown.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}
