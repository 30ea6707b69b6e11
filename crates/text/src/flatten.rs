//! Markup-destroying conversion of rich text into plain text for print.

use crate::entities::decode_entities;
use crate::markup::{Token, tokenize};

/// Strips all markup, keeping paragraph structure: `<br>` becomes a line
/// break, `</p>` a blank line. Entities are decoded and runs of three or more
/// newlines collapse to one blank line.
pub fn flatten_for_print(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let mut raw = String::with_capacity(input.len());
    for token in tokenize(input) {
        match token {
            Token::Text(text) => raw.push_str(text),
            Token::Open { name, .. } if name == "br" => raw.push('\n'),
            Token::Close { name } if name == "p" => raw.push_str("\n\n"),
            _ => {}
        }
    }

    let decoded = decode_entities(&raw).replace('\u{a0}', " ");
    collapse_blank_lines(&decoded).trim().to_string()
}

/// Flattens each entry and drops the ones left empty.
pub fn flatten_all(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|item| flatten_for_print(item))
        .filter(|item| !item.is_empty())
        .collect()
}

fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut newlines = 0;
    for c in text.chars() {
        if c == '\n' {
            newlines += 1;
            if newlines <= 2 {
                out.push(c);
            }
        } else {
            newlines = 0;
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_and_tags_stripped() {
        assert_eq!(flatten_for_print("<script>alert(1)</script><p>ok</p>"), "ok");
    }

    #[test]
    fn structure_preserved() {
        assert_eq!(
            flatten_for_print("<p>one<br/>two</p><p>three</p>"),
            "one\ntwo\n\nthree"
        );
    }

    #[test]
    fn blank_lines_collapse() {
        assert_eq!(flatten_for_print("<p>a</p><p></p><p>b</p>"), "a\n\nb");
    }

    #[test]
    fn entities_decoded_after_stripping() {
        assert_eq!(
            flatten_for_print("<strong>R&amp;D</strong> &lt;team&gt;&nbsp;lead"),
            "R&D <team> lead"
        );
    }

    #[test]
    fn empty_entries_dropped() {
        let items = vec!["<p> </p>".to_string(), "<em>Shipped</em> v2".to_string()];
        assert_eq!(flatten_all(&items), vec!["Shipped v2".to_string()]);
    }
}
