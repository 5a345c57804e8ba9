mod border;
mod select;
mod style;

use serde::{Deserialize, Serialize};

use crate::ui::{
    widget::{SelectTheme, WidgetTheme},
    WindowTheme,
};

pub use border::BorderThemeConfig;
pub use select::{OptionThemeConfig, SelectThemeConfig, TitleThemeConfig};
pub use style::ThemeStyleConfig;

const DEFAULT_MAX_DROPDOWN_HEIGHT: u16 = 8;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub base: ThemeStyleConfig,

    #[serde(default)]
    pub select: SelectThemeConfig,

    /// Rows of options shown before the dropdown scrolls
    #[serde(default = "default_max_dropdown_height")]
    pub max_dropdown_height: u16,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            base: ThemeStyleConfig::default(),
            select: SelectThemeConfig::default(),
            max_dropdown_height: default_max_dropdown_height(),
        }
    }
}

fn default_max_dropdown_height() -> u16 {
    DEFAULT_MAX_DROPDOWN_HEIGHT
}

impl From<ThemeConfig> for WidgetTheme {
    fn from(theme: ThemeConfig) -> Self {
        WidgetTheme::default()
            .base_style(theme.base)
            .title_active_style(theme.select.title.active)
            .title_inactive_style(theme.select.title.inactive)
            .border_type(theme.select.border.ty)
            .border_active_style(theme.select.border.active)
            .border_mouse_over_style(theme.select.border.mouse_over)
            .border_inactive_style(theme.select.border.inactive)
    }
}

impl From<ThemeConfig> for SelectTheme {
    fn from(theme: ThemeConfig) -> Self {
        SelectTheme::default()
            .placeholder_style(theme.select.placeholder)
            .tag_style(theme.select.tag)
            .chip_style(theme.select.chip)
            .clear_all_style(theme.select.clear_all)
            .selected_style(theme.select.option.selected)
            .highlighted_style(theme.select.option.highlighted)
            .max_dropdown_height(theme.max_dropdown_height.max(1))
    }
}

impl From<ThemeConfig> for WindowTheme {
    fn from(theme: ThemeConfig) -> Self {
        WindowTheme::default()
            .base_style(theme.base)
            .title_style(theme.select.title.active)
            .status_style(theme.select.placeholder)
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use ratatui::style::Color;

    use super::*;

    #[test]
    fn empty_theme_uses_defaults() {
        let actual: ThemeConfig = serde_yaml::from_str("{}").unwrap();

        assert_eq!(actual, ThemeConfig::default());
        assert_eq!(actual.max_dropdown_height, 8);
    }

    #[test]
    fn nested_override() {
        let yaml = indoc! {"
            max_dropdown_height: 4
            select:
              clear_all:
                fg_color: magenta
        "};

        let actual: ThemeConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(actual.max_dropdown_height, 4);
        assert_eq!(actual.select.clear_all, ThemeStyleConfig::fg(Color::Magenta));
        assert_eq!(actual.select.tag, SelectThemeConfig::default().tag);
    }
}
