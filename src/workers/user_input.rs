use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use anyhow::Result;
use crossbeam::channel::Sender;
use ratatui::crossterm::event::{poll, read, Event as CEvent, KeyEvent, KeyEventKind};

use crate::{
    app::Outcome,
    logger,
    message::{Message, UserEvent},
    panic_set_hook,
};

/// Reads terminal events on its own thread and forwards them to the render loop.
pub struct UserInput {
    tx: Sender<Message>,
    tx_shutdown: Sender<Result<Outcome>>,
    is_terminated: Arc<AtomicBool>,
}

impl UserInput {
    pub fn new(
        tx: Sender<Message>,
        tx_shutdown: Sender<Result<Outcome>>,
        is_terminated: Arc<AtomicBool>,
    ) -> Self {
        Self {
            tx,
            tx_shutdown,
            is_terminated,
        }
    }

    pub fn start(&self) {
        logger!(info, "user_input start");

        if let Err(e) = self.poll() {
            logger!(error, "{}", e);

            if self.tx_shutdown.send(Err(e)).is_err() {
                logger!(error, "failed to send shutdown signal");
            }
        }

        logger!(info, "user_input end");
    }

    pub fn set_panic_hook(&self) {
        let tx_shutdown = self.tx_shutdown.clone();

        panic_set_hook!({
            let _ = tx_shutdown.send(Err(anyhow::anyhow!("panic occurred in UserInput worker")));
        });
    }

    fn poll(&self) -> Result<()> {
        while !self.is_terminated.load(Ordering::Relaxed) {
            if let Ok(true) = poll(Duration::from_millis(200)) {
                let ev = read()?;

                logger!(debug, "{:?}", ev);

                match ev {
                    CEvent::Key(ev) => {
                        if let KeyEvent {
                            kind: KeyEventKind::Press | KeyEventKind::Repeat,
                            ..
                        } = ev
                        {
                            self.tx.send(Message::User(UserEvent::Key(ev)))?
                        }
                    }
                    CEvent::Mouse(ev) => self.tx.send(Message::User(UserEvent::Mouse(ev)))?,
                    CEvent::Resize(..) => {}
                    CEvent::FocusGained => self.tx.send(UserEvent::FocusGained.into())?,
                    CEvent::FocusLost => self.tx.send(UserEvent::FocusLost.into())?,
                    CEvent::Paste(_) => {}
                }
            }
        }

        Ok(())
    }
}
