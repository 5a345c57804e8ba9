mod action;
mod window;

use std::io;

use anyhow::Result;
use crossbeam::channel::{Receiver, Sender};
use ratatui::{backend::CrosstermBackend, Terminal, TerminalOptions, Viewport};

use crate::{
    app::Outcome, config::theme::ThemeConfig, form::FormMarkup, logger, message::Message,
    panic_set_hook, ui::WindowAction,
};

use self::{action::window_action, window::WindowInit};

pub struct Render {
    rx: Receiver<Message>,
    tx_shutdown: Sender<Result<Outcome>>,
    form: FormMarkup,
    theme: ThemeConfig,
}

impl Render {
    pub fn new(
        rx: Receiver<Message>,
        tx_shutdown: Sender<Result<Outcome>>,
        form: FormMarkup,
        theme: ThemeConfig,
    ) -> Self {
        Self {
            rx,
            tx_shutdown,
            form,
            theme,
        }
    }

    pub fn start(self) {
        logger!(info, "render start");

        let ret = self.render();

        if let Err(e) = &ret {
            logger!(error, "{}", e);
        }

        logger!(info, "render end");

        if self.tx_shutdown.send(ret).is_err() {
            logger!(error, "failed to send shutdown signal");
        }
    }

    pub fn set_panic_hook(&self) {
        let tx_shutdown = self.tx_shutdown.clone();

        panic_set_hook!({
            let _ = tx_shutdown.send(Err(anyhow::anyhow!("panic occurred in Render worker")));
        });
    }

    fn render(&self) -> Result<Outcome> {
        let mut window = WindowInit::new(self.form.clone(), self.theme.clone()).build();

        let mut terminal = Terminal::with_options(
            CrosstermBackend::new(io::stdout()),
            TerminalOptions {
                viewport: Viewport::Fullscreen,
            },
        )?;

        terminal.clear()?;

        loop {
            terminal.draw(|f| {
                window.render(f);
            })?;

            match window_action(&mut window, &self.rx)? {
                WindowAction::Continue => {}
                WindowAction::Submit => {
                    return Ok(Outcome::Submitted(window.snapshot()));
                }
                WindowAction::Cancel => {
                    return Ok(Outcome::Cancelled);
                }
            }
        }
    }
}
