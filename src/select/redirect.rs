use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::logger;

#[derive(Debug, Default)]
struct Registry {
    next_token: u64,
    subscribers: Vec<(u64, String)>,
}

/// Form-wide registry of select fields that want typing redirected into their search line.
///
/// Cloning shares the same registry.
#[derive(Debug, Clone, Default)]
pub struct KeyRedirects {
    registry: Rc<RefCell<Registry>>,
}

impl KeyRedirects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `owner` until the returned guard is dropped.
    pub fn subscribe(&self, owner: impl Into<String>) -> RedirectGuard {
        let owner = owner.into();
        let mut registry = self.registry.borrow_mut();

        let token = registry.next_token;
        registry.next_token += 1;

        logger!(debug, "key redirect subscribe: {}", owner);

        registry.subscribers.push((token, owner));

        RedirectGuard {
            token,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Owners that should receive `ev`, in subscription order.
    pub fn targets(&self, ev: &KeyEvent) -> Vec<String> {
        if !is_redirectable(ev) {
            return Vec::new();
        }

        self.subscribers()
    }

    pub fn subscribers(&self) -> Vec<String> {
        self.registry
            .borrow()
            .subscribers
            .iter()
            .map(|(_, owner)| owner.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keeps a subscription alive. Dropping it unsubscribes.
#[derive(Debug)]
pub struct RedirectGuard {
    token: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for RedirectGuard {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .subscribers
                .retain(|(token, _)| *token != self.token);
        }
    }
}

/// Printable characters, Backspace and Delete without Ctrl, Alt, Super or Meta.
pub fn is_redirectable(ev: &KeyEvent) -> bool {
    let blocked =
        KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER | KeyModifiers::META;

    if ev.modifiers.intersects(blocked) {
        return false;
    }

    matches!(
        ev.code,
        KeyCode::Char(_) | KeyCode::Backspace | KeyCode::Delete
    )
}
