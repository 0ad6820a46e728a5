//! HTML sanitization for catalog-supplied markup.
//!
//! Product copy comes from the catalog as free-form HTML and is rendered
//! unescaped, so it passes through an allow-list first:
//!
//! - script-like and embedding elements are dropped along with their content
//! - raw-text and RCDATA elements are dropped too, since the rewriter sees
//!   their content as text and unwrapping them would emit it as markup
//! - elements outside the allow-list are unwrapped (their text is kept)
//! - every attribute is dropped except `title`, and `href` on links when it
//!   is an `http(s)`, `mailto` or relative URL
//! - comments are removed
//!
//! If the rewriter fails the fragment is discarded rather than passed through.

use lol_html::{RewriteStrSettings, doc_comments, element, rewrite_str};

/// Elements kept as-is (minus disallowed attributes).
const ALLOWED_TAGS: &[&str] = &[
    "a", "b", "br", "div", "em", "i", "li", "ol", "p", "s", "small", "span", "strong", "sub",
    "sup", "u", "ul",
];

/// Elements removed together with everything inside them.
const DROPPED_TAGS: &[&str] = &[
    "audio", "base", "button", "embed", "form", "frame", "frameset", "iframe", "img", "input",
    "link", "math", "meta", "noscript", "object", "script", "select", "style", "svg",
    "template", "video",
];

/// Elements whose content is parsed as text rather than markup.
const TEXT_CONTENT_TAGS: &[&str] = &[
    "listing", "noembed", "noframes", "plaintext", "textarea", "title", "xmp",
];

const SAFE_URL_PREFIXES: &[&str] = &["http://", "https://", "mailto:", "/", "#"];

const LINK_REL: &str = "nofollow noopener noreferrer";

/// Sanitize an HTML fragment for rendering as rich content.
#[must_use]
pub fn sanitize_fragment(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }

    let result = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![element!("*", |el| {
                let tag = el.tag_name();

                if DROPPED_TAGS.contains(&tag.as_str())
                    || TEXT_CONTENT_TAGS.contains(&tag.as_str())
                {
                    el.remove();
                    return Ok(());
                }
                if !ALLOWED_TAGS.contains(&tag.as_str()) {
                    el.remove_and_keep_content();
                    return Ok(());
                }

                let is_link = tag == "a";
                let names: Vec<String> = el.attributes().iter().map(|a| a.name()).collect();
                for name in names {
                    let keep = match name.as_str() {
                        "title" => true,
                        "href" if is_link => el.get_attribute("href").is_some_and(|v| is_safe_url(&v)),
                        _ => false,
                    };
                    if !keep {
                        el.remove_attribute(&name);
                    }
                }

                if is_link && el.has_attribute("href") {
                    el.set_attribute("rel", LINK_REL)?;
                }
                Ok(())
            })],
            document_content_handlers: vec![doc_comments!(|comment| {
                comment.remove();
                Ok(())
            })],
            ..RewriteStrSettings::default()
        },
    );

    match result {
        Ok(sanitized) => sanitized,
        Err(e) => {
            tracing::warn!(error = %e, "Discarding product markup that failed to sanitize");
            String::new()
        }
    }
}

/// Whether a link target is safe to keep.
///
/// Whitespace and control characters are ignored the way browsers ignore
/// them in URL schemes. Anything that is not an allowed absolute URL must be
/// free of `:` and `&` so neither a scheme nor an encoded one can hide in it.
fn is_safe_url(raw: &str) -> bool {
    let value: String = raw
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .collect::<String>()
        .to_ascii_lowercase();

    SAFE_URL_PREFIXES.iter().any(|p| value.starts_with(p))
        || !(value.contains(':') || value.contains('&'))
}
