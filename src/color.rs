use serde::Deserialize;

/// Color input accepted by `set_color`
///
/// The host framework hands colors over as loose JSON; an omnicolor value is
/// `{"r": .., "g": .., "b": ..}` while palette fixtures receive
/// `{"color": "<name>"}`. Deserialization keeps both shapes so the connector
/// can reject the named form explicitly instead of ignoring it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Color {
    /// Named/palette color selector, unsupported by this fixture
    Named {
        color: String,
    },
    /// Full per-pixel RGB value
    Rgb {
        r: u8,
        g: u8,
        b: u8,
    },
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }
}

/// Level input accepted by `set_level`
///
/// Numeric fractions (0.0-1.0 recommended) and booleans are both valid; a
/// boolean collapses to full on or full off in the per-pixel multiply.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Level {
    Switch(bool),
    Value(f32),
}

impl Level {
    /// Brightness multiplier applied per channel at render time
    pub fn factor(self) -> f32 {
        match self {
            Level::Switch(true) => 1.0,
            Level::Switch(false) => 0.0,
            Level::Value(v) => v,
        }
    }
}

impl From<f32> for Level {
    fn from(v: f32) -> Self {
        Level::Value(v)
    }
}

impl From<bool> for Level {
    fn from(on: bool) -> Self {
        Level::Switch(on)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_json() {
        let color: Color = serde_json::from_str(r#"{"r": 10, "g": 20, "b": 30}"#).unwrap();
        assert_eq!(color, Color::rgb(10, 20, 30));
    }

    #[test]
    fn test_named_from_json() {
        let color: Color = serde_json::from_str(r#"{"color": "red"}"#).unwrap();
        assert_eq!(
            color,
            Color::Named {
                color: "red".to_string()
            }
        );
    }

    #[test]
    fn test_level_from_json() {
        let level: Level = serde_json::from_str("0.5").unwrap();
        assert_eq!(level.factor(), 0.5);

        let level: Level = serde_json::from_str("true").unwrap();
        assert_eq!(level.factor(), 1.0);

        let level: Level = serde_json::from_str("false").unwrap();
        assert_eq!(level.factor(), 0.0);
    }
}
