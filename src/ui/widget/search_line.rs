use std::time::{Duration, Instant};

use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::select::SearchField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Show,
    Hide,
}

impl Mode {
    fn toggle(&mut self) {
        match self {
            Mode::Show => *self = Mode::Hide,
            Mode::Hide => *self = Mode::Show,
        }
    }
}

#[derive(Debug)]
struct Cursor {
    symbol: char,
    last_tick: Instant,
    tick_rate: Duration,
    mode: Mode,
}

impl Cursor {
    fn update_tick(&mut self) {
        if self.tick_rate <= self.last_tick.elapsed() {
            self.mode.toggle();
            self.last_tick = Instant::now();
        }
    }

    fn style(&self) -> Style {
        match self.mode {
            Mode::Show => Style::default().add_modifier(Modifier::REVERSED),
            Mode::Hide => Style::default(),
        }
    }

    fn reset(&mut self) {
        self.last_tick = Instant::now();
        self.mode = Mode::Show;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            symbol: ' ',
            last_tick: Instant::now(),
            tick_rate: Duration::from_millis(500),
            mode: Mode::Show,
        }
    }
}

/// Renders a [`SearchField`] with a blinking block cursor while it has the focus.
#[derive(Debug, Default)]
pub struct SearchLine {
    cursor: Cursor,
}

impl SearchLine {
    pub fn reset_cursor(&mut self) {
        self.cursor.reset();
    }

    pub fn spans(
        &mut self,
        field: &SearchField,
        placeholder: Option<&str>,
        is_focused: bool,
        placeholder_style: Style,
    ) -> Vec<Span<'static>> {
        let is_focused = is_focused && !field.is_read_only();

        if is_focused {
            self.cursor.update_tick();
        } else {
            self.cursor.mode = Mode::Hide;
        }

        let chars = field.chars();
        let cursor_pos = field.cursor_pos();

        if chars.is_empty() {
            let mut spans = Vec::new();

            if is_focused {
                spans.push(Span::styled(
                    self.cursor.symbol.to_string(),
                    self.cursor.style(),
                ));
            }

            if let Some(placeholder) = placeholder.filter(|p| !p.is_empty()) {
                spans.push(Span::styled(placeholder.to_string(), placeholder_style));
            }

            return spans;
        }

        if cursor_pos < chars.len() {
            return chars
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    if i == cursor_pos {
                        Span::styled(c.to_string(), self.cursor.style())
                    } else {
                        Span::raw(c.to_string())
                    }
                })
                .collect();
        }

        let mut spans = vec![Span::raw(chars.iter().collect::<String>())];

        if is_focused {
            spans.push(Span::styled(
                self.cursor.symbol.to_string(),
                self.cursor.style(),
            ));
        }

        spans
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn field(s: &str) -> SearchField {
        let mut field = SearchField::default();
        field.set_content(s);
        field
    }

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn placeholder_after_cursor_when_empty() {
        let mut line = SearchLine::default();

        let spans = line.spans(&field(""), Some("Pick"), true, Style::default());

        assert_eq!(text(&spans), " Pick");
        assert_eq!(spans[0].style, Style::default().add_modifier(Modifier::REVERSED));
    }

    #[test]
    fn unfocused_has_no_cursor_cell() {
        let mut line = SearchLine::default();

        let spans = line.spans(&field("ban"), None, false, Style::default());

        assert_eq!(text(&spans), "ban");
    }

    #[test]
    fn read_only_field_has_no_cursor() {
        let mut line = SearchLine::default();

        let spans = line.spans(&SearchField::new(true), Some("Size"), true, Style::default());

        assert_eq!(text(&spans), "Size");
    }

    #[test]
    fn cursor_inside_text() {
        let mut line = SearchLine::default();
        let mut f = field("ban");
        f.cursor_top();

        let spans = line.spans(&f, None, true, Style::default());

        assert_eq!(text(&spans), "ban");
        assert_eq!(spans[0].style, Style::default().add_modifier(Modifier::REVERSED));
    }
}
