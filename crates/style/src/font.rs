use serde::{Deserialize, Deserializer, Serialize, de};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Bold,
    Numeric(u16),
}

impl FontWeight {
    /// Returns the numeric weight value (100-900 scale).
    pub fn numeric_value(&self) -> u16 {
        match self {
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Bold => 700,
            FontWeight::Numeric(n) => *n,
        }
    }

    /// Standard PDF fonts only come in regular and bold cuts.
    pub fn is_bold(&self) -> bool {
        self.numeric_value() >= 600
    }

    fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "light" => Ok(FontWeight::Light),
            "regular" | "normal" => Ok(FontWeight::Regular),
            "medium" => Ok(FontWeight::Medium),
            "bold" => Ok(FontWeight::Bold),
            _ => s
                .parse::<u16>()
                .map(FontWeight::Numeric)
                .map_err(|_| format!("Invalid font weight: '{}'", s)),
        }
    }
}

impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum FontWeightDef {
            Str(String),
            Num(u16),
        }

        match FontWeightDef::deserialize(deserializer)? {
            FontWeightDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            FontWeightDef::Num(n) => Ok(FontWeight::Numeric(n)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_parsing() {
        let w: FontWeight = serde_json::from_str("\"bold\"").unwrap();
        assert!(w.is_bold());
        let w: FontWeight = serde_json::from_str("500").unwrap();
        assert_eq!(w, FontWeight::Numeric(500));
        assert!(!w.is_bold());
    }
}
