mod app;
mod cmd;
mod config;
mod form;
mod logging;
mod message;
mod select;
mod ui;
mod workers;

use std::{io, panic};

use anyhow::Result;
use ratatui::crossterm::{
    cursor::Show,
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::{
    app::{App, Outcome},
    cmd::Command,
    config::Config,
    logging::Logger,
};

macro_rules! enable_raw_mode {
    () => {
        enable_raw_mode()?;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange
        )?;
    };
}

macro_rules! disable_raw_mode {
    () => {
        execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableFocusChange,
            Show
        )?;
        disable_raw_mode()?;
    };
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode!();
    Ok(())
}

fn set_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        if let Err(e) = restore_terminal() {
            eprintln!("failed to restore terminal: {}", e);
        }

        eprintln!("\x1b[31mPanic! disable raw mode\x1b[39m");

        default_hook(info);
    }));
}

fn main() -> Result<()> {
    let cmd = Command::init();

    if cmd.logging {
        Logger::init()?;
    }

    let config = Config::load(cmd.config_load_option())?;

    let form = cmd.form()?;

    set_panic_hook();

    enable_raw_mode!();

    let result = App::run(config, form);

    disable_raw_mode!();

    match result? {
        Outcome::Submitted(values) => {
            println!("{}", cmd.output.render(&values)?);
        }
        Outcome::Cancelled => {}
    }

    Ok(())
}
