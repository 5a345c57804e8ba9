use ratatui::{style::Color, widgets::BorderType};
use serde::{Deserialize, Serialize};

use super::ThemeStyleConfig;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BorderThemeConfig {
    #[serde(default, rename = "type", with = "serde_border_type")]
    pub ty: BorderType,

    #[serde(default)]
    pub active: ThemeStyleConfig,

    #[serde(default = "default_inactive")]
    pub inactive: ThemeStyleConfig,

    #[serde(default = "default_mouse_over")]
    pub mouse_over: ThemeStyleConfig,
}

impl Default for BorderThemeConfig {
    fn default() -> Self {
        Self {
            ty: BorderType::default(),
            active: ThemeStyleConfig::default(),
            inactive: default_inactive(),
            mouse_over: default_mouse_over(),
        }
    }
}

fn default_inactive() -> ThemeStyleConfig {
    ThemeStyleConfig::fg(Color::DarkGray)
}

fn default_mouse_over() -> ThemeStyleConfig {
    ThemeStyleConfig::fg(Color::Gray)
}

/// Border types are written lowercase (`plain`, `rounded`, ...).
mod serde_border_type {
    use std::str::FromStr;

    use serde::Deserialize as _;

    use super::BorderType;

    pub fn serialize<S>(ty: &BorderType, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&ty.to_string().to_lowercase())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BorderType, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        BorderType::from_str(&capitalize(&s)).map_err(serde::de::Error::custom)
    }

    fn capitalize(s: &str) -> String {
        let mut chars = s.chars();
        match chars.next() {
            None => String::new(),
            Some(first) => first.to_uppercase().chain(chars).collect(),
        }
    }

    #[cfg(test)]
    mod tests {
        use pretty_assertions::assert_eq;
        use rstest::rstest;

        use super::*;

        #[rstest]
        #[case::lower("rounded", "Rounded")]
        #[case::already("Double", "Double")]
        #[case::empty("", "")]
        fn capitalize_first_char(#[case] s: &str, #[case] expected: &str) {
            assert_eq!(capitalize(s), expected);
        }
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn deserialize_border() {
        let yaml = indoc! {"
            type: rounded
            active:
              fg_color: yellow
        "};

        let actual: BorderThemeConfig = serde_yaml::from_str(yaml).unwrap();

        let expected = BorderThemeConfig {
            ty: BorderType::Rounded,
            active: ThemeStyleConfig::fg(Color::Yellow),
            ..Default::default()
        };

        assert_eq!(actual, expected);
    }
}
