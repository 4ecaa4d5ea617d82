use ammonia::{Builder, UrlRelative};
use pulldown_cmark::{html, Options, Parser};

/// Converts fetched README Markdown to sanitized HTML. The content comes
/// from a remote store, so it is never trusted as-is.
pub fn safe_markdown_to_html(markdown: &str) -> String {
    let options = Options::all();
    let parser = Parser::new_ext(markdown, options);

    let mut raw_html = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut raw_html, parser);

    sanitize_markdown_content(&raw_html)
}

/// Sanitizes rendered HTML to remove unsafe markup.
pub fn sanitize_markdown_content(content: &str) -> String {
    Builder::default()
        .link_rel(Some("nofollow noopener noreferrer"))
        .url_relative(UrlRelative::Deny)
        .clean(content)
        .to_string()
}

/// Checks whether a given Markdown string is structurally valid.
pub fn is_valid_markdown(content: &str) -> bool {
    let parser = Parser::new_ext(content, Options::all());
    parser.into_iter().next().is_some()
}
