use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use strum::Display;

/// How the submitted form is printed
#[derive(Debug, Default, ValueEnum, Display, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn render<T: Serialize>(self, value: &T) -> Result<String> {
        let s = match self {
            OutputFormat::Json => serde_json::to_string_pretty(value)?,
            OutputFormat::Yaml => serde_yaml::to_string(value)?,
        };

        Ok(s)
    }
}
