use serde::{Deserialize, Deserializer, Serialize, de};
use std::hash::{Hash, Hasher};

fn default_one() -> f32 {
    1.0
}

fn is_one(num: &f32) -> bool {
    *num == 1.0
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(skip_serializing_if = "is_one", default = "default_one")]
    pub a: f32,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.r.hash(state);
        self.g.hash(state);
        self.b.hash(state);
        self.a.to_bits().hash(state);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn gray(value: u8) -> Self {
        Self::rgb(value, value, value)
    }

    /// Components scaled to the 0.0..=1.0 range used by PDF colour operators.
    pub fn to_unit_rgb(&self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// CSS notation, `#rrggbb` or `rgba(...)` when translucent.
    pub fn to_css(&self) -> String {
        if is_one(&self.a) {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }

    /// Linear blend towards `other`; `t = 0.0` keeps `self`.
    pub fn mix(&self, other: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color::rgb(lerp(self.r, other.r), lerp(self.g, other.g), lerp(self.b, other.b))
    }

    /// Parse a hex color string (#RGB or #RRGGBB format)
    pub fn parse_hex(s: &str) -> Result<Color, String> {
        let s = s.trim();
        let Some(hex) = s.strip_prefix('#') else {
            return Err(format!("Color must start with #, got: {}", s));
        };
        if !hex.is_ascii() {
            return Err(format!("Invalid hex color: {}", s));
        }

        let component = |digits: &str, name: &str| {
            u8::from_str_radix(digits, 16).map_err(|e| format!("Invalid {} component: {}", name, e))
        };

        match hex.len() {
            3 => {
                // #RGB format - expand each digit
                let r = component(&hex[0..1].repeat(2), "red")?;
                let g = component(&hex[1..2].repeat(2), "green")?;
                let b = component(&hex[2..3].repeat(2), "blue")?;
                Ok(Color::rgb(r, g, b))
            }
            6 => {
                let r = component(&hex[0..2], "red")?;
                let g = component(&hex[2..4], "green")?;
                let b = component(&hex[4..6], "blue")?;
                Ok(Color::rgb(r, g, b))
            }
            _ => Err(format!(
                "Invalid hex color length: expected 3 or 6, got {}",
                hex.len()
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "default_one")]
                a: f32,
            },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::parse_hex(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b, a } => Ok(Color { r, g, b, a }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!(Color::parse_hex("#fff").unwrap(), Color::WHITE);
        assert_eq!(Color::parse_hex("#1E293B").unwrap(), Color::rgb(0x1e, 0x29, 0x3b));
        assert!(Color::parse_hex("1E293B").is_err());
        assert!(Color::parse_hex("#12345").is_err());
    }

    #[test]
    fn css_round_trip() {
        let c = Color::rgb(14, 165, 233);
        assert_eq!(c.to_css(), "#0ea5e9");
        assert_eq!(Color::parse_hex(&c.to_css()).unwrap(), c);
    }

    #[test]
    fn mix_endpoints() {
        let a = Color::BLACK;
        let b = Color::WHITE;
        assert_eq!(a.mix(&b, 0.0), a);
        assert_eq!(a.mix(&b, 1.0), b);
    }
}
