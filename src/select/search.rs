use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::key_event_to_code;

/// What a key did to the search text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEdit {
    /// Text changed
    Edited,
    /// Cursor moved or an edit had nothing to remove
    Moved,
    Ignored,
}

/// Single-line editable text with a cursor, used as the search input of a select field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchField {
    chars: Vec<char>,
    cursor_pos: usize,
    read_only: bool,
}

impl SearchField {
    pub fn new(read_only: bool) -> Self {
        Self {
            read_only,
            ..Default::default()
        }
    }

    pub fn content(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor_pos = 0;
    }

    pub fn set_content(&mut self, s: &str) {
        self.chars = s.chars().collect();
        self.cursor_end();
    }

    fn max_cursor_pos(&self) -> usize {
        self.chars.len()
    }

    pub fn cursor_forward(&mut self, addend: usize) {
        self.cursor_pos = self
            .cursor_pos
            .saturating_add(addend)
            .min(self.max_cursor_pos());
    }

    pub fn cursor_back(&mut self, subst: usize) {
        self.cursor_pos = self.cursor_pos.saturating_sub(subst);
    }

    pub fn cursor_top(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_pos = self.max_cursor_pos();
    }

    pub fn insert_char(&mut self, c: char) {
        self.chars.insert(self.cursor_pos, c);
        self.cursor_forward(1);
    }

    /// Removes the char before the cursor. Returns false when there is none.
    pub fn remove_char(&mut self) -> bool {
        if self.cursor_pos == 0 {
            return false;
        }

        self.cursor_back(1);
        self.chars.remove(self.cursor_pos);

        true
    }

    pub fn remove_chars_before_cursor(&mut self) -> bool {
        if self.cursor_pos == 0 {
            return false;
        }

        self.chars.drain(..self.cursor_pos);
        self.cursor_pos = 0;

        true
    }

    pub fn remove_chars_after_cursor(&mut self) -> bool {
        if self.cursor_pos == self.chars.len() {
            return false;
        }

        self.chars.truncate(self.cursor_pos);

        true
    }

    pub fn on_key_event(&mut self, ev: KeyEvent) -> SearchEdit {
        let edited = |changed: bool| {
            if changed {
                SearchEdit::Edited
            } else {
                SearchEdit::Moved
            }
        };

        match key_event_to_code(ev) {
            KeyCode::Left => {
                self.cursor_back(1);
                SearchEdit::Moved
            }
            KeyCode::Right => {
                self.cursor_forward(1);
                SearchEdit::Moved
            }
            KeyCode::Home => {
                self.cursor_top();
                SearchEdit::Moved
            }
            KeyCode::End => {
                self.cursor_end();
                SearchEdit::Moved
            }
            _ if self.read_only => SearchEdit::Ignored,
            KeyCode::Delete => edited(self.remove_char()),
            KeyCode::Char('w') if ev.modifiers == KeyModifiers::CONTROL => {
                edited(self.remove_chars_before_cursor())
            }
            KeyCode::Char('k') if ev.modifiers == KeyModifiers::CONTROL => {
                edited(self.remove_chars_after_cursor())
            }
            KeyCode::Char(c)
                if !ev
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert_char(c);
                SearchEdit::Edited
            }
            _ => SearchEdit::Ignored,
        }
    }
}
