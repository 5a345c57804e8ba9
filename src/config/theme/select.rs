use ratatui::style::{Color, Modifier};
use serde::{Deserialize, Serialize};

use super::{BorderThemeConfig, ThemeStyleConfig};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TitleThemeConfig {
    #[serde(default = "default_title_active")]
    pub active: ThemeStyleConfig,

    #[serde(default = "default_title_inactive")]
    pub inactive: ThemeStyleConfig,
}

impl Default for TitleThemeConfig {
    fn default() -> Self {
        Self {
            active: default_title_active(),
            inactive: default_title_inactive(),
        }
    }
}

fn default_title_active() -> ThemeStyleConfig {
    ThemeStyleConfig::modifier(Modifier::BOLD)
}

fn default_title_inactive() -> ThemeStyleConfig {
    ThemeStyleConfig::fg(Color::DarkGray)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OptionThemeConfig {
    #[serde(default = "default_option_selected")]
    pub selected: ThemeStyleConfig,

    #[serde(default = "default_option_highlighted")]
    pub highlighted: ThemeStyleConfig,
}

impl Default for OptionThemeConfig {
    fn default() -> Self {
        Self {
            selected: default_option_selected(),
            highlighted: default_option_highlighted(),
        }
    }
}

fn default_option_selected() -> ThemeStyleConfig {
    ThemeStyleConfig::fg(Color::Green)
}

fn default_option_highlighted() -> ThemeStyleConfig {
    ThemeStyleConfig::modifier(Modifier::REVERSED)
}

/// Styles of the select fields
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SelectThemeConfig {
    #[serde(default)]
    pub title: TitleThemeConfig,

    #[serde(default)]
    pub border: BorderThemeConfig,

    #[serde(default = "default_placeholder")]
    pub placeholder: ThemeStyleConfig,

    #[serde(default = "default_tag")]
    pub tag: ThemeStyleConfig,

    #[serde(default = "default_chip")]
    pub chip: ThemeStyleConfig,

    #[serde(default = "default_clear_all")]
    pub clear_all: ThemeStyleConfig,

    #[serde(default)]
    pub option: OptionThemeConfig,
}

impl Default for SelectThemeConfig {
    fn default() -> Self {
        Self {
            title: TitleThemeConfig::default(),
            border: BorderThemeConfig::default(),
            placeholder: default_placeholder(),
            tag: default_tag(),
            chip: default_chip(),
            clear_all: default_clear_all(),
            option: OptionThemeConfig::default(),
        }
    }
}

fn default_placeholder() -> ThemeStyleConfig {
    ThemeStyleConfig::fg(Color::DarkGray)
}

fn default_tag() -> ThemeStyleConfig {
    ThemeStyleConfig {
        fg_color: Some(Color::Black),
        bg_color: Some(Color::Cyan),
        modifier: Modifier::empty(),
    }
}

fn default_chip() -> ThemeStyleConfig {
    ThemeStyleConfig {
        fg_color: Some(Color::Cyan),
        bg_color: None,
        modifier: Modifier::BOLD,
    }
}

fn default_clear_all() -> ThemeStyleConfig {
    ThemeStyleConfig::fg(Color::Red)
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_override_keeps_other_defaults() {
        let yaml = indoc! {"
            tag:
              fg_color: white
            option:
              highlighted:
                bg_color: blue
        "};

        let actual: SelectThemeConfig = serde_yaml::from_str(yaml).unwrap();

        let expected = SelectThemeConfig {
            tag: ThemeStyleConfig::fg(Color::White),
            option: OptionThemeConfig {
                highlighted: ThemeStyleConfig {
                    bg_color: Some(Color::Blue),
                    ..Default::default()
                },
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(actual, expected);
    }
}
