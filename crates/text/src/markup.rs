//! A small tag scanner shared by the sanitizer and the print flattener.
//!
//! This is not an HTML parser. It splits input into text runs, tags and
//! comments, which is all the allow-list policy needs: anything the scanner
//! does not recognise as a tag stays in a text run and is escaped later.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<!--.*?-->|<(/?)([A-Za-z][A-Za-z0-9]*)((?:[^>"']|"[^"]*"|'[^']*')*)>"#)
        .expect("BUG: invalid TAG_RE regex literal")
});

static ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+)))?"#)
        .expect("BUG: invalid ATTR_RE regex literal")
});

/// Elements whose content is discarded along with the tags.
const DROP_CONTENT: &[&str] = &[
    "script", "style", "iframe", "object", "embed", "template", "noscript", "textarea", "title",
];

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token<'a> {
    Text(&'a str),
    Open { name: String, attrs: &'a str },
    Close { name: String },
}

/// Splits `input` into tokens. Comments and the bodies of [`DROP_CONTENT`]
/// elements never appear in the output.
pub(crate) fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < input.len() {
        let Some(caps) = TAG_RE.captures_at(input, pos) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };
        if whole.start() > pos {
            tokens.push(Token::Text(&input[pos..whole.start()]));
        }
        pos = whole.end();

        let Some(name) = caps.get(2) else {
            // comment
            continue;
        };
        let name = name.as_str().to_ascii_lowercase();
        let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());

        if closing {
            tokens.push(Token::Close { name });
            continue;
        }

        if DROP_CONTENT.contains(&name.as_str()) {
            pos = skip_element_body(input, pos, &name);
            continue;
        }

        let attrs = caps.get(3).map_or("", |m| m.as_str());
        tokens.push(Token::Open { name, attrs });
    }

    if pos < input.len() {
        tokens.push(Token::Text(&input[pos..]));
    }
    tokens
}

/// Returns the offset just past `</name ...>`, or the end of input when the
/// element is never closed.
fn skip_element_body(input: &str, from: usize, name: &str) -> usize {
    let rest = input[from..].to_ascii_lowercase();
    let needle = format!("</{}", name);
    match rest.find(&needle) {
        Some(idx) => {
            let after = from + idx + needle.len();
            input[after..]
                .find('>')
                .map_or(input.len(), |gt| after + gt + 1)
        }
        None => input.len(),
    }
}

/// Parses an attribute string into lower-cased names and raw values.
pub(crate) fn attributes(raw: &str) -> Vec<(String, String)> {
    ATTR_RE
        .captures_iter(raw)
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str().to_ascii_lowercase();
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map_or("", |m| m.as_str());
            Some((name, value.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_body_is_dropped() {
        let tokens = tokenize("<script>alert('<p>')</script><p>ok</p>");
        assert_eq!(
            tokens,
            vec![
                Token::Open {
                    name: "p".into(),
                    attrs: ""
                },
                Token::Text("ok"),
                Token::Close { name: "p".into() },
            ]
        );
    }

    #[test]
    fn unclosed_script_swallows_rest() {
        assert!(tokenize("a<SCRIPT>b c").iter().all(|t| *t == Token::Text("a")));
    }

    #[test]
    fn stray_angle_bracket_stays_text() {
        let tokens = tokenize("1 < 2 and 3 > 2");
        assert_eq!(tokens, vec![Token::Text("1 < 2 and 3 > 2")]);
    }

    #[test]
    fn attribute_forms() {
        let attrs = attributes(r#" href="x" target='_blank' rel=noopener disabled"#);
        assert_eq!(
            attrs,
            vec![
                ("href".into(), "x".into()),
                ("target".into(), "_blank".into()),
                ("rel".into(), "noopener".into()),
                ("disabled".into(), "".into()),
            ]
        );
    }
}
