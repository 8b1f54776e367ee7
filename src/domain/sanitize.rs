//! Inline-markup sanitisation shared by every block renderer.
//!
//! Editor.js stores rich text as HTML snippets produced by its inline tools
//! (bold, italic, link, marker, inline code, underline). The allow-list below
//! keeps exactly that subset and drops everything else, including the content
//! of `<script>` and `<style>` elements.

use std::{borrow::Cow, collections::HashSet};

use ammonia::Builder as AmmoniaBuilder;
use once_cell::sync::Lazy;
use url::Url;

static INLINE_SANITIZER: Lazy<AmmoniaBuilder<'static>> = Lazy::new(build_inline_sanitizer);

fn build_inline_sanitizer() -> AmmoniaBuilder<'static> {
    let mut builder = AmmoniaBuilder::default();

    let tags: HashSet<&'static str> =
        HashSet::from(["a", "b", "br", "code", "em", "i", "mark", "s", "strong", "u"]);
    builder.tags(tags);
    builder.generic_attributes(HashSet::new());

    builder.add_tag_attributes("mark", &["class"]);
    builder.add_tag_attributes("code", &["class"]);

    builder
}

/// Clean a user-supplied HTML snippet, keeping only the editor's inline tags.
pub fn sanitize_inline(text: &str) -> String {
    INLINE_SANITIZER.clean(text).to_string()
}

/// Return `text` untouched for trusted output, sanitised otherwise.
pub(crate) fn inline_text(text: &str, sanitize: bool) -> Cow<'_, str> {
    if sanitize {
        Cow::Owned(sanitize_inline(text))
    } else {
        Cow::Borrowed(text)
    }
}

/// Prepare an image URL for a `src` attribute.
///
/// Sanitised output keeps http(s), relative and `data:image/` URLs only, and
/// always escapes the value for attribute context.
pub(crate) fn image_source(url: &str, sanitize: bool) -> Cow<'_, str> {
    if !sanitize {
        return Cow::Borrowed(url);
    }

    let trimmed = url.trim();
    if is_allowed_image_url(trimmed) {
        Cow::Owned(escape_attribute(trimmed))
    } else {
        Cow::Borrowed("")
    }
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\n' | '\r' | '\t' => escaped.push(' '),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn is_allowed_image_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" => true,
            "data" => parsed.path().to_ascii_lowercase().starts_with("image/"),
            _ => false,
        },
        Err(url::ParseError::RelativeUrlWithoutBase) => true,
        Err(_) => false,
    }
}
