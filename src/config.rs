pub mod theme;

use std::path::PathBuf;

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

use theme::ThemeConfig;

const ENV_PREFIX: &str = "SELECTKIT_";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum ConfigLoadOption {
    #[default]
    Default,

    Path(PathBuf),
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Config {
    /// Defaults, then the YAML file, then `SELECTKIT_*` variables (`__` separates keys).
    pub fn load(option: ConfigLoadOption) -> Result<Self> {
        let config = Self::figment(option).extract_lossy()?;

        Ok(config)
    }

    fn figment(option: ConfigLoadOption) -> Figment {
        let figment = Figment::new().merge(Serialized::defaults(Self::default()));

        match option {
            ConfigLoadOption::Default => figment,
            ConfigLoadOption::Path(path) => figment.merge(Yaml::file(path)),
        }
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use ratatui::style::Color;

    use super::{theme::ThemeStyleConfig, *};

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config =
            Config::load(ConfigLoadOption::Path("/nonexistent/selectkit.yaml".into())).unwrap();

        assert_eq!(config.theme.select, Config::default().theme.select);
    }

    #[test]
    fn yaml_layer_overrides_defaults() {
        let yaml = indoc! {"
            theme:
              max_dropdown_height: 5
              select:
                tag:
                  fg_color: white
        "};

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::string(yaml))
            .extract_lossy()
            .unwrap();

        let tag = ThemeStyleConfig {
            fg_color: Some(Color::White),
            ..Config::default().theme.select.tag
        };

        assert_eq!(config.theme.max_dropdown_height, 5);
        assert_eq!(config.theme.select.tag, tag);
        assert_eq!(config.theme.select.chip, Config::default().theme.select.chip);
    }
}
