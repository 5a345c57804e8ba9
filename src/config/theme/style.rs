use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// A style as written in the config file. Unset colors leave the widget default in place.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeStyleConfig {
    #[serde(with = "serde_color", skip_serializing_if = "Option::is_none", default)]
    pub fg_color: Option<Color>,

    #[serde(with = "serde_color", skip_serializing_if = "Option::is_none", default)]
    pub bg_color: Option<Color>,

    #[serde(
        with = "serde_modifier",
        skip_serializing_if = "Modifier::is_empty",
        default
    )]
    pub modifier: Modifier,
}

impl ThemeStyleConfig {
    pub fn fg(color: Color) -> Self {
        Self {
            fg_color: Some(color),
            ..Default::default()
        }
    }

    pub fn modifier(modifier: Modifier) -> Self {
        Self {
            modifier,
            ..Default::default()
        }
    }
}

impl From<ThemeStyleConfig> for Style {
    fn from(config: ThemeStyleConfig) -> Self {
        let mut style = Style::new();

        if let Some(fg_color) = config.fg_color {
            style = style.fg(fg_color);
        }

        if let Some(bg_color) = config.bg_color {
            style = style.bg(bg_color);
        }

        if !config.modifier.is_empty() {
            style = style.add_modifier(config.modifier);
        }

        style
    }
}

/// Modifiers are written lowercase (`bold | italic`) and parsed case-insensitively.
mod serde_modifier {
    use serde::Deserialize as _;

    use super::Modifier;

    const NONE: &str = "NONE";

    pub fn serialize<S>(modifier: &Modifier, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if modifier.is_empty() {
            return serializer.serialize_str(&NONE.to_lowercase());
        }

        serializer.serialize_str(&format!("{modifier:?}").to_lowercase())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Modifier, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?.to_uppercase();

        if s == NONE {
            return Ok(Modifier::empty());
        }

        bitflags::parser::from_str::<Modifier>(&s).map_err(serde::de::Error::custom)
    }
}

/// `default` maps to the terminal's default color.
mod serde_color {
    use std::str::FromStr;

    use serde::Deserialize as _;

    use super::Color;

    const DEFAULT: &str = "default";

    pub fn serialize<S>(color: &Option<Color>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match color {
            None => serializer.serialize_none(),
            Some(Color::Reset) => serializer.serialize_str(DEFAULT),
            Some(c) => serializer.serialize_str(&c.to_string().to_lowercase()),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        if s == DEFAULT {
            return Ok(Some(Color::Reset));
        }

        Color::from_str(&s)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::empty("{}", ThemeStyleConfig::default())]
    #[case::default_fg("fg_color: default", ThemeStyleConfig::fg(Color::Reset))]
    #[case::named_fg("fg_color: cyan", ThemeStyleConfig::fg(Color::Cyan))]
    #[case::hex_bg(
        "bg_color: '#112233'",
        ThemeStyleConfig {
            bg_color: Some(Color::Rgb(0x11, 0x22, 0x33)),
            ..Default::default()
        }
    )]
    #[case::none_modifier("modifier: none", ThemeStyleConfig::default())]
    #[case::mixed_case_modifiers(
        "modifier: Bold | REVERSED",
        ThemeStyleConfig::modifier(Modifier::BOLD | Modifier::REVERSED)
    )]
    #[case::combined(
        indoc! {"
            fg_color: red
            bg_color: blue
            modifier: underlined
        "},
        ThemeStyleConfig {
            fg_color: Some(Color::Red),
            bg_color: Some(Color::Blue),
            modifier: Modifier::UNDERLINED,
        }
    )]
    fn deserialize(#[case] yaml: &str, #[case] expected: ThemeStyleConfig) {
        let actual: ThemeStyleConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case::empty(ThemeStyleConfig::default(), "{}")]
    #[case::default_color(ThemeStyleConfig::fg(Color::Reset), "fg_color: default")]
    #[case::modifiers(
        ThemeStyleConfig::modifier(Modifier::BOLD | Modifier::ITALIC),
        "modifier: bold | italic"
    )]
    fn serialize(#[case] config: ThemeStyleConfig, #[case] expected: &str) {
        let actual = serde_yaml::to_string(&config).unwrap();
        assert_eq!(actual.trim(), expected);
    }

    #[test]
    fn unknown_modifier_is_error() {
        let actual = serde_yaml::from_str::<ThemeStyleConfig>("modifier: sparkly");
        assert!(actual.is_err());
    }

    #[test]
    fn into_style() {
        let config = ThemeStyleConfig {
            fg_color: Some(Color::Green),
            bg_color: None,
            modifier: Modifier::BOLD,
        };

        assert_eq!(
            Style::from(config),
            Style::new().fg(Color::Green).add_modifier(Modifier::BOLD)
        );
    }
}
