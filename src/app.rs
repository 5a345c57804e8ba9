use std::{
    sync::{atomic::AtomicBool, Arc},
    thread, time,
};

use anyhow::Result;
use crossbeam::channel::{bounded, Receiver, Sender};

use crate::{
    config::Config,
    form::FormMarkup,
    logger,
    message::Message,
    ui::FieldValue,
    workers::{Render, Tick, UserInput},
};

/// How the form was left.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Submitted(Vec<FieldValue>),
    Cancelled,
}

pub struct App;

impl App {
    pub fn run(config: Config, form: FormMarkup) -> Result<Outcome> {
        let (tx_input, rx_main): (Sender<Message>, Receiver<Message>) = bounded(128);
        let tx_tick = tx_input.clone();

        let (tx_shutdown, rx_shutdown) = bounded::<Result<Outcome>>(1);

        let is_terminated = Arc::new(AtomicBool::new(false));

        let user_input = UserInput::new(tx_input, tx_shutdown.clone(), is_terminated.clone());

        let tick = Tick::new(
            tx_tick,
            time::Duration::from_millis(200),
            is_terminated.clone(),
        );

        let render = Render::new(rx_main, tx_shutdown, form, config.theme);

        logger!(info, "app start");

        thread::spawn(move || {
            tick.set_panic_hook();
            tick.start();
        });

        thread::spawn(move || {
            user_input.set_panic_hook();
            user_input.start();
        });

        thread::spawn(move || {
            render.set_panic_hook();
            render.start();
        });

        let result = rx_shutdown.recv()?;

        is_terminated.store(true, std::sync::atomic::Ordering::Relaxed);

        logger!(info, "app end");

        result
    }
}
