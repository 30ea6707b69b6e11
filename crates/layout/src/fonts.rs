//! The PDF standard-14 text fonts and approximate metrics for them.
//!
//! Standard fonts need no embedding, so every viewer can display the output.
//! The advance widths below are close to the Adobe AFM values; they only
//! drive line breaking, so small deviations show up as slightly ragged
//! right edges, never as clipped text.

use vitae_style::{FontStyle, FontWeight};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFamily {
    Helvetica,
    Times,
    Courier,
}

impl FontFamily {
    /// Maps a CSS-ish family name onto the closest standard family.
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        if lower.contains("courier") || lower.contains("mono") {
            FontFamily::Courier
        } else if lower.contains("times") || lower.contains("georgia") || lower == "serif" {
            FontFamily::Times
        } else {
            FontFamily::Helvetica
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
    TimesBoldItalic,
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
}

impl StandardFont {
    pub const ALL: [StandardFont; 12] = [
        StandardFont::Helvetica,
        StandardFont::HelveticaBold,
        StandardFont::HelveticaOblique,
        StandardFont::HelveticaBoldOblique,
        StandardFont::TimesRoman,
        StandardFont::TimesBold,
        StandardFont::TimesItalic,
        StandardFont::TimesBoldItalic,
        StandardFont::Courier,
        StandardFont::CourierBold,
        StandardFont::CourierOblique,
        StandardFont::CourierBoldOblique,
    ];

    pub fn resolve(family: &str, weight: FontWeight, style: FontStyle) -> Self {
        let bold = weight.is_bold();
        let italic = style == FontStyle::Italic;
        match (FontFamily::from_name(family), bold, italic) {
            (FontFamily::Helvetica, false, false) => StandardFont::Helvetica,
            (FontFamily::Helvetica, true, false) => StandardFont::HelveticaBold,
            (FontFamily::Helvetica, false, true) => StandardFont::HelveticaOblique,
            (FontFamily::Helvetica, true, true) => StandardFont::HelveticaBoldOblique,
            (FontFamily::Times, false, false) => StandardFont::TimesRoman,
            (FontFamily::Times, true, false) => StandardFont::TimesBold,
            (FontFamily::Times, false, true) => StandardFont::TimesItalic,
            (FontFamily::Times, true, true) => StandardFont::TimesBoldItalic,
            (FontFamily::Courier, false, false) => StandardFont::Courier,
            (FontFamily::Courier, true, false) => StandardFont::CourierBold,
            (FontFamily::Courier, false, true) => StandardFont::CourierOblique,
            (FontFamily::Courier, true, true) => StandardFont::CourierBoldOblique,
        }
    }

    /// The `/BaseFont` name.
    pub fn base_font_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
            StandardFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            StandardFont::TimesRoman => "Times-Roman",
            StandardFont::TimesBold => "Times-Bold",
            StandardFont::TimesItalic => "Times-Italic",
            StandardFont::TimesBoldItalic => "Times-BoldItalic",
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
            StandardFont::CourierOblique => "Courier-Oblique",
            StandardFont::CourierBoldOblique => "Courier-BoldOblique",
        }
    }

    /// Resource name in page dictionaries: `F1` to `F12`.
    pub fn resource_name(&self) -> String {
        let idx = StandardFont::ALL
            .iter()
            .position(|f| f == self)
            .unwrap_or_default();
        format!("F{}", idx + 1)
    }

    pub fn family(&self) -> FontFamily {
        match self {
            StandardFont::Helvetica
            | StandardFont::HelveticaBold
            | StandardFont::HelveticaOblique
            | StandardFont::HelveticaBoldOblique => FontFamily::Helvetica,
            StandardFont::TimesRoman
            | StandardFont::TimesBold
            | StandardFont::TimesItalic
            | StandardFont::TimesBoldItalic => FontFamily::Times,
            StandardFont::Courier
            | StandardFont::CourierBold
            | StandardFont::CourierOblique
            | StandardFont::CourierBoldOblique => FontFamily::Courier,
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(
            self,
            StandardFont::HelveticaBold
                | StandardFont::HelveticaBoldOblique
                | StandardFont::TimesBold
                | StandardFont::TimesBoldItalic
                | StandardFont::CourierBold
                | StandardFont::CourierBoldOblique
        )
    }

    /// Advance width of `c` in em units. Arrows are written as two ASCII
    /// glyphs and measured that way.
    pub fn char_width(&self, c: char) -> f32 {
        match c {
            '\u{2192}' => return self.char_width('-') + self.char_width('>'),
            '\u{2190}' => return self.char_width('<') + self.char_width('-'),
            _ => {}
        }
        let base = match self.family() {
            FontFamily::Courier => return 0.6,
            FontFamily::Helvetica => helvetica_width(c),
            FontFamily::Times => helvetica_width(c) * 0.9,
        };
        if self.is_bold() { base * 1.06 } else { base }
    }

    /// Width of `text` in points at `size`.
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().map(|c| self.char_width(c)).sum::<f32>() * size
    }
}

fn helvetica_width(c: char) -> f32 {
    match c {
        ' ' | 'f' | 't' | 'I' | '!' | '.' | ',' | ':' | ';' | '/' | '[' | ']' => 0.278,
        'i' | 'j' | 'l' | '\'' | '|' => 0.222,
        'r' | '-' | '(' | ')' => 0.333,
        'm' | 'M' => 0.833,
        'w' => 0.722,
        'W' => 0.944,
        'c' | 'k' | 's' | 'v' | 'x' | 'y' | 'z' | 'J' => 0.5,
        'a'..='z' | '0'..='9' | '$' | '#' | '?' | 'L' | '_' => 0.556,
        'C' | 'D' | 'H' | 'N' | 'R' | 'U' => 0.722,
        'G' | 'O' | 'Q' => 0.778,
        'F' | 'T' | 'Z' => 0.611,
        '<' | '>' | '=' | '+' | '~' => 0.584,
        '@' => 1.015,
        '%' => 0.889,
        '&' => 0.667,
        'A'..='Z' => 0.667,
        '\u{2022}' | '\u{2013}' => 0.556,
        '\u{2014}' => 1.0,
        _ => 0.556,
    }
}
