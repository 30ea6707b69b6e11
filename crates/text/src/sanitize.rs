//! Allow-list sanitizer for rich text shown in the interactive preview.

use crate::entities::{decode_entities, escape_html};
use crate::markup::{Token, attributes, tokenize};
use std::fmt;

/// HTML that went through [`sanitize_html`]. The only way to obtain one, so
/// holding a `SafeHtml` means the markup is already allow-listed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SafeHtml(String);

impl SafeHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

const ALLOWED_ATTRS: &[&str] = &["href", "target", "rel"];
const BLOCKED_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

/// Maps a source tag to the allow-listed tag it is emitted as.
fn allowed_tag(name: &str) -> Option<&'static str> {
    match name {
        "p" => Some("p"),
        "br" => Some("br"),
        "strong" | "b" => Some("strong"),
        "em" | "i" => Some("em"),
        "u" => Some("u"),
        "a" => Some("a"),
        _ => None,
    }
}

/// Keeps `p`, `br`, `strong`, `em`, `u` and `a` (with `href`, `target` and
/// `rel` only). Other tags are removed but their text is kept; script-like
/// elements are removed with their content. The output is balanced.
pub fn sanitize_html(input: &str) -> SafeHtml {
    let mut out = String::with_capacity(input.len());
    let mut open: Vec<&'static str> = Vec::new();

    for token in tokenize(input) {
        match token {
            Token::Text(text) => out.push_str(&escape_html(&decode_entities(text))),
            Token::Open { name, attrs } => {
                let Some(tag) = allowed_tag(&name) else {
                    continue;
                };
                if tag == "br" {
                    out.push_str("<br>");
                    continue;
                }
                out.push('<');
                out.push_str(tag);
                if tag == "a" {
                    push_anchor_attributes(&mut out, attrs);
                }
                out.push('>');
                open.push(tag);
            }
            Token::Close { name } => {
                let Some(tag) = allowed_tag(&name) else {
                    continue;
                };
                let Some(idx) = open.iter().rposition(|t| *t == tag) else {
                    continue;
                };
                for inner in open.drain(idx..).rev() {
                    out.push_str("</");
                    out.push_str(inner);
                    out.push('>');
                }
            }
        }
    }

    for tag in open.into_iter().rev() {
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
    SafeHtml(out)
}

fn push_anchor_attributes(out: &mut String, raw: &str) {
    for (name, value) in attributes(raw) {
        if !ALLOWED_ATTRS.contains(&name.as_str()) {
            continue;
        }
        let value = decode_entities(&value);
        if name == "href" && !is_safe_href(&value) {
            continue;
        }
        out.push(' ');
        out.push_str(&name);
        out.push_str("=\"");
        out.push_str(&escape_html(&value));
        out.push('"');
    }
}

/// False for `javascript:`, `vbscript:` and `data:` URLs, however obfuscated
/// with case, whitespace or control characters.
pub fn is_safe_href(href: &str) -> bool {
    let normalized: String = href
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    !BLOCKED_SCHEMES.iter().any(|s| normalized.starts_with(s))
}
