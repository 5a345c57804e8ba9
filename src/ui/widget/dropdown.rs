use ratatui::{
    layout::{Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState},
    Frame,
};

use crate::{
    select::OptionList,
    ui::util::RectContainsPoint,
};

use super::SelectTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMarker {
    /// `[x]` / `[ ]` in front of every row
    Checkbox,
    Plain,
}

/// The option list below an open field. Rows are the visible options in markup order.
#[derive(Debug, Default)]
pub struct Dropdown {
    state: ListState,
    chunk: Rect,
    rows: Vec<usize>,
}

impl Dropdown {
    /// Rows needed for `visible` options, borders included.
    pub fn height(visible: usize, max_rows: u16) -> u16 {
        visible.min(max_rows as usize) as u16 + 2
    }

    pub fn chunk(&self) -> Rect {
        self.chunk
    }

    pub fn update_chunk(&mut self, chunk: Rect) {
        self.chunk = chunk;
    }

    #[allow(clippy::too_many_arguments)]
    pub fn render(
        &mut self,
        f: &mut Frame,
        block: Block<'static>,
        options: &OptionList,
        is_selected: impl Fn(&str) -> bool,
        highlighted: Option<usize>,
        marker: RowMarker,
        theme: &SelectTheme,
    ) {
        self.rows = options.visible_indices();

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .filter_map(|i| options.get(*i))
            .map(|option| {
                let selected = is_selected(option.value());
                row(option.label(), selected, marker, theme)
            })
            .collect();

        let selected_row = highlighted.and_then(|h| self.rows.iter().position(|i| *i == h));
        self.state.select(selected_row);

        let list = List::new(items)
            .block(block)
            .highlight_style(theme.highlighted_style);

        f.render_stateful_widget(list, self.chunk, &mut self.state);
    }

    /// Option index under `point`, if any.
    pub fn option_at(&self, point: (u16, u16)) -> Option<usize> {
        let inner = self.chunk.inner(Margin::new(1, 1));

        if !inner.contains_point(point) {
            return None;
        }

        let row = self.state.offset() + (point.1 - inner.y) as usize;

        self.rows.get(row).copied()
    }
}

fn row(label: &str, selected: bool, marker: RowMarker, theme: &SelectTheme) -> ListItem<'static> {
    let style = if selected {
        theme.selected_style
    } else {
        Style::default()
    };

    let mut spans = Vec::new();

    if marker == RowMarker::Checkbox {
        spans.push(Span::raw(if selected { "[x] " } else { "[ ] " }));
    }

    spans.push(Span::raw(label.to_string()));

    ListItem::new(Line::from(spans)).style(style)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, widgets::Borders, Terminal};
    use rstest::rstest;

    use crate::select::SelectOption;

    use super::*;

    fn options() -> OptionList {
        OptionList::new(vec![
            SelectOption::new("a", "Apple"),
            SelectOption::new("b", "Banana"),
            SelectOption::new("c", "Cherry"),
        ])
    }

    #[rstest]
    #[case::fits(2, 8, 4)]
    #[case::capped(20, 5, 7)]
    #[case::empty(0, 5, 2)]
    fn dropdown_height(#[case] visible: usize, #[case] max: u16, #[case] expected: u16) {
        assert_eq!(Dropdown::height(visible, max), expected);
    }

    #[test]
    fn render_checkboxes_and_hit_test() {
        let mut terminal = Terminal::new(TestBackend::new(14, 5)).unwrap();
        let mut dropdown = Dropdown::default();
        dropdown.update_chunk(Rect::new(0, 0, 14, 5));

        let mut options = options();
        options.apply_filter("an");
        let theme = SelectTheme::default();

        terminal
            .draw(|f| {
                dropdown.render(
                    f,
                    Block::default().borders(Borders::ALL),
                    &options,
                    |value| value == "b",
                    None,
                    RowMarker::Checkbox,
                    &theme,
                );
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let line: String = (1..13)
            .map(|x| buffer[(x, 1)].symbol().to_string())
            .collect();

        assert_eq!(line.trim_end(), "[x] Banana");
        assert_eq!(dropdown.option_at((3, 1)), Some(1));
        assert_eq!(dropdown.option_at((3, 2)), None);
        assert_eq!(dropdown.option_at((0, 1)), None);
    }
}
