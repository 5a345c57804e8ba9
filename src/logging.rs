use std::{env, path::PathBuf, str::FromStr};

use anyhow::{anyhow, Result};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::json::JsonEncoder,
};
use once_cell::sync::OnceCell;

const DEFAULT_LOG_PATH: &str = "selectkit.log";

pub struct Logger;

pub static LOGGER_ENABLED: OnceCell<bool> = OnceCell::new();

#[macro_export]
macro_rules! logger {
    ($level:ident, $($arg:tt)+) => {
        if let Some(true) = $crate::logging::LOGGER_ENABLED.get() {
            ::log::$level!($($arg)+);
        }
    };
}

impl Logger {
    /// Writes JSON lines to `LOG_PATH` at the `RUST_LOG` level.
    pub fn init() -> Result<()> {
        let level_filter = level_filter(env::var("RUST_LOG").ok().as_deref())?;

        let log_path = env::var_os("LOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH));

        let logfile = FileAppender::builder()
            .append(false)
            .encoder(Box::new(JsonEncoder::new()))
            .build(log_path)?;

        let config = Config::builder()
            .appender(Appender::builder().build("logfile", Box::new(logfile)))
            .build(Root::builder().appender("logfile").build(level_filter))?;

        log4rs::init_config(config)?;

        LOGGER_ENABLED
            .set(true)
            .map_err(|_| anyhow!("logger is already initialized"))?;

        Ok(())
    }
}

fn level_filter(value: Option<&str>) -> Result<LevelFilter> {
    let level = LevelFilter::from_str(value.unwrap_or("info"))?;
    Ok(level)
}
