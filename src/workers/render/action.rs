use anyhow::Result;
use crossbeam::channel::Receiver;

use crate::{
    message::Message,
    ui::{event::EventResult, Window, WindowAction},
};

/// Waits for the next message and applies it to the window.
pub fn window_action(window: &mut Window, rx: &Receiver<Message>) -> Result<WindowAction> {
    let action = match rx.recv()? {
        Message::User(ev) => match window.on_event(ev) {
            EventResult::Nop => WindowAction::Continue,
            EventResult::Ignore => window.match_action(ev).unwrap_or(WindowAction::Continue),
        },
        Message::Tick => WindowAction::Continue,
    };

    Ok(action)
}
