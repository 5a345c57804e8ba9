use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread::sleep,
    time::Duration,
};

use anyhow::Result;
use crossbeam::channel::Sender;

use crate::{logger, message::Message, panic_set_hook};

/// Sends `Message::Tick` at a fixed rate so the cursor keeps blinking without input.
pub struct Tick {
    tx: Sender<Message>,
    duration: Duration,
    is_terminated: Arc<AtomicBool>,
}

impl Tick {
    pub fn new(tx: Sender<Message>, rate: Duration, is_terminated: Arc<AtomicBool>) -> Self {
        Self {
            tx,
            duration: rate,
            is_terminated,
        }
    }

    pub fn start(&self) {
        logger!(info, "tick start");

        if let Err(e) = self.tick() {
            logger!(error, "{}", e);
        }

        self.is_terminated.store(true, Ordering::Relaxed);

        logger!(info, "tick end");
    }

    pub fn set_panic_hook(&self) {
        let is_terminated = self.is_terminated.clone();

        panic_set_hook!({
            is_terminated.store(true, Ordering::Relaxed);
        });
    }

    fn tick(&self) -> Result<()> {
        while !self.is_terminated.load(Ordering::Relaxed) {
            sleep(self.duration);

            self.tx.send(Message::Tick)?;
        }

        Ok(())
    }
}
