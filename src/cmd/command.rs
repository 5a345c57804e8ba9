use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{config::ConfigLoadOption, form::FormMarkup};

use super::args::OutputFormat;

const APP_DIR: &str = "selectkit";

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Command {
    /// Form file (YAML). The built-in demo form is used when omitted
    #[arg(short, long, display_order = 1000)]
    pub form: Option<PathBuf>,

    /// Output format of the submitted form
    #[arg(
        short,
        long,
        value_name = "json|yaml",
        default_value_t = OutputFormat::Json,
        value_enum,
        display_order = 1000
    )]
    pub output: OutputFormat,

    /// Logging
    #[arg(short = 'l', long, display_order = 1000)]
    pub logging: bool,

    /// Config file path
    #[arg(long, display_order = 1000)]
    pub config_file: Option<PathBuf>,
}

impl Command {
    pub fn init() -> Self {
        Self::parse()
    }

    pub fn form(&self) -> Result<FormMarkup> {
        let form = match &self.form {
            Some(path) => FormMarkup::load(path)?,
            None => FormMarkup::demo()?,
        };

        Ok(form)
    }

    pub fn config_load_option(&self) -> ConfigLoadOption {
        let path = match &self.config_file {
            Some(path) => path.clone(),
            None => match xdg_config_home() {
                Some(dir) => dir.join("config.yaml"),
                None => return ConfigLoadOption::Default,
            },
        };

        match path.try_exists() {
            Ok(true) => ConfigLoadOption::Path(path),
            Ok(false) => {
                if self.config_file.is_some() {
                    eprintln!("Config file not found: {:?}", path);
                }

                ConfigLoadOption::Default
            }
            Err(err) => {
                eprintln!("Failed to check config file exists: {}", err);

                ConfigLoadOption::Default
            }
        }
    }
}

fn xdg_config_home() -> Option<PathBuf> {
    match std::env::var_os("XDG_CONFIG_HOME") {
        Some(path) => Some(PathBuf::from(path).join(APP_DIR)),
        None => dirs::home_dir().map(|home| home.join(".config").join(APP_DIR)),
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn defaults() {
        let cmd = Command::try_parse_from(["selectkit"]).unwrap();

        assert_eq!(cmd.form, None);
        assert_eq!(cmd.output, OutputFormat::Json);
        assert!(!cmd.logging);
    }

    #[rstest]
    #[case::short(&["selectkit", "-o", "yaml"], OutputFormat::Yaml)]
    #[case::long(&["selectkit", "--output", "json"], OutputFormat::Json)]
    fn output_format(#[case] args: &[&str], #[case] expected: OutputFormat) {
        let cmd = Command::try_parse_from(args).unwrap();

        assert_eq!(cmd.output, expected);
    }

    #[test]
    fn unknown_output_format() {
        let cmd = Command::try_parse_from(["selectkit", "-o", "toml"]);

        assert_eq!(cmd.unwrap_err().kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn form_and_logging() {
        let cmd = Command::try_parse_from(["selectkit", "--form", "order.yaml", "-l"]).unwrap();

        assert_eq!(cmd.form, Some(PathBuf::from("order.yaml")));
        assert!(cmd.logging);
    }

    #[test]
    fn missing_config_file_falls_back_to_default() {
        let cmd =
            Command::try_parse_from(["selectkit", "--config-file", "/nonexistent/config.yaml"])
                .unwrap();

        assert_eq!(cmd.config_load_option(), ConfigLoadOption::Default);
    }

    #[test]
    fn demo_form_without_path() {
        let cmd = Command::try_parse_from(["selectkit"]).unwrap();

        assert!(cmd.form().is_ok());
    }
}
