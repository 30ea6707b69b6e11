/// Encodes text for a standard-14 font using WinAnsiEncoding.
///
/// Latin-1 maps through unchanged; the typographic characters CV text uses
/// (bullets, dashes, curly quotes) map to their WinAnsi code points. Arrows
/// have no glyph and are drawn as `->`/`<-`, which the layout metrics measure
/// as two glyphs. Anything else becomes `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{ff}' => out.push(c as u8),
            '\t' => out.push(b' '),
            '€' => out.push(0x80),
            '‚' => out.push(0x82),
            '„' => out.push(0x84),
            '…' => out.push(0x85),
            '‘' => out.push(0x91),
            '’' => out.push(0x92),
            '“' => out.push(0x93),
            '”' => out.push(0x94),
            '•' => out.push(0x95),
            '–' => out.push(0x96),
            '—' => out.push(0x97),
            '™' => out.push(0x99),
            '→' => out.extend_from_slice(b"->"),
            '←' => out.extend_from_slice(b"<-"),
            _ => out.push(b'?'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin1_passes_through() {
        assert_eq!(to_win_ansi("María"), vec![b'M', b'a', b'r', 0xED, b'a']);
    }

    #[test]
    fn typographic_characters_map() {
        assert_eq!(to_win_ansi("• 2019 – 2021"), b"\x95 2019 \x96 2021".to_vec());
        assert_eq!(to_win_ansi("a → b"), b"a -> b".to_vec());
        assert_eq!(to_win_ansi("Rust · Go"), b"Rust \xb7 Go".to_vec());
    }

    #[test]
    fn unsupported_characters_become_question_marks() {
        assert_eq!(to_win_ansi("日本"), b"??".to_vec());
    }
}
