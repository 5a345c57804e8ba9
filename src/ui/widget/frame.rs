use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::{
    select::{OptionList, SearchField},
    ui::util::RectContainsPoint,
};

use super::{
    dropdown::{Dropdown, RowMarker},
    SearchLine, SelectTheme, WidgetBase,
};

/// Bordered display box plus one line of content
pub const FIELD_HEIGHT: u16 = 3;

const CLEAR_ALL_SYMBOL: &str = "✕";
const REMOVE_SYMBOL: &str = "×";

/// Pieces of the display line, laid out left to right.
#[derive(Debug, Default)]
pub struct DisplayLine {
    spans: Vec<Span<'static>>,
    removables: Vec<(usize, String)>,
}

impl DisplayLine {
    /// A tag or chip with a trailing remove button that maps back to `value`.
    pub fn push_removable(&mut self, label: &str, value: &str, style: Style) {
        self.spans.push(Span::styled(format!(" {} ", label), style));
        self.removables.push((self.spans.len(), value.to_string()));
        self.spans.push(Span::styled(REMOVE_SYMBOL, style));
        self.spans.push(Span::raw(" "));
    }

    pub fn extend(&mut self, spans: impl IntoIterator<Item = Span<'static>>) {
        self.spans.extend(spans);
    }
}

/// Layout, chrome and hit testing shared by the select widgets.
#[derive(Debug)]
pub struct SelectFrame {
    widget_base: WidgetBase,
    theme: SelectTheme,
    search_line: SearchLine,
    dropdown: Dropdown,
    chunk: Rect,
    field_chunk: Rect,
    remove_hitboxes: Vec<(Rect, String)>,
    clear_all_chunk: Option<Rect>,
    hovered: Option<usize>,
}

impl SelectFrame {
    pub fn new(widget_base: WidgetBase, theme: SelectTheme) -> Self {
        Self {
            widget_base,
            theme,
            search_line: SearchLine::default(),
            dropdown: Dropdown::default(),
            chunk: Rect::default(),
            field_chunk: Rect::default(),
            remove_hitboxes: Vec::new(),
            clear_all_chunk: None,
            hovered: None,
        }
    }

    pub fn theme(&self) -> &SelectTheme {
        &self.theme
    }

    pub fn height(&self, is_open: bool, visible: usize) -> u16 {
        if is_open {
            FIELD_HEIGHT + Dropdown::height(visible, self.theme.max_dropdown_height)
        } else {
            FIELD_HEIGHT
        }
    }

    pub fn chunk(&self) -> Rect {
        self.chunk
    }

    pub fn update_chunk(&mut self, chunk: Rect) {
        self.chunk = chunk;

        let field_height = FIELD_HEIGHT.min(chunk.height);

        self.field_chunk = Rect::new(chunk.x, chunk.y, chunk.width, field_height);
        self.dropdown.update_chunk(Rect::new(
            chunk.x,
            chunk.y + field_height,
            chunk.width,
            chunk.height - field_height,
        ));
    }

    pub fn reset_cursor(&mut self) {
        self.search_line.reset_cursor();
    }

    pub fn search_spans(
        &mut self,
        field: &SearchField,
        placeholder: Option<&str>,
        is_focused: bool,
    ) -> Vec<Span<'static>> {
        let placeholder_style = self.theme.placeholder_style;
        self.search_line
            .spans(field, placeholder, is_focused, placeholder_style)
    }

    pub fn in_field(&self, point: (u16, u16)) -> bool {
        self.field_chunk.contains_point(point)
    }

    pub fn in_clear_all(&self, point: (u16, u16)) -> bool {
        self.clear_all_chunk
            .is_some_and(|chunk| chunk.contains_point(point))
    }

    /// Value of the tag or chip whose remove button is under `point`.
    pub fn removable_at(&self, point: (u16, u16)) -> Option<&str> {
        self.remove_hitboxes
            .iter()
            .find(|(rect, _)| rect.contains_point(point))
            .map(|(_, value)| value.as_str())
    }

    /// Option row under `point`. Only meaningful while the dropdown is shown.
    pub fn option_at(&self, point: (u16, u16)) -> Option<usize> {
        self.dropdown.option_at(point)
    }

    /// Records the row under the pointer. Returns the new row when it changed.
    pub fn update_hover(&mut self, row: Option<usize>) -> Option<Option<usize>> {
        if self.hovered == row {
            return None;
        }

        self.hovered = row;
        Some(row)
    }

    /// Returns true when a row was hovered.
    pub fn clear_hover(&mut self) -> bool {
        self.hovered.take().is_some()
    }

    pub fn render_field(
        &mut self,
        f: &mut Frame,
        is_active: bool,
        is_mouse_over: bool,
        line: DisplayLine,
        clear_all: bool,
    ) {
        let block = self.widget_base.render_block(is_active, is_mouse_over);
        let inner = block.inner(self.field_chunk);

        f.render_widget(block, self.field_chunk);

        let mut text_area = inner;

        self.clear_all_chunk = None;

        if clear_all && 2 < inner.width {
            let chunk = Rect::new(inner.right() - 1, inner.y, 1, 1.min(inner.height));

            text_area.width -= 2;

            f.render_widget(
                Paragraph::new(Span::styled(CLEAR_ALL_SYMBOL, self.theme.clear_all_style)),
                chunk,
            );

            self.clear_all_chunk = Some(chunk);
        }

        self.remove_hitboxes = remove_hitboxes(&line, text_area);

        f.render_widget(Paragraph::new(Line::from(line.spans)), text_area);
    }

    pub fn render_dropdown(
        &mut self,
        f: &mut Frame,
        is_active: bool,
        options: &OptionList,
        is_selected: impl Fn(&str) -> bool,
        highlighted: Option<usize>,
        marker: RowMarker,
    ) {
        if self.dropdown.chunk().height == 0 {
            return;
        }

        let block = self.widget_base.render_dropdown_block(is_active);

        self.dropdown.render(
            f,
            block,
            options,
            is_selected,
            highlighted,
            marker,
            &self.theme,
        );
    }

    /// A field whose markup is incomplete: drawn, never interactive.
    pub fn render_inert(&mut self, f: &mut Frame, is_active: bool, is_mouse_over: bool) {
        let mut line = DisplayLine::default();
        line.extend([Span::styled("unavailable", self.theme.placeholder_style)]);

        self.render_field(f, is_active, is_mouse_over, line, false);
    }
}

fn remove_hitboxes(line: &DisplayLine, area: Rect) -> Vec<(Rect, String)> {
    let mut hitboxes = Vec::new();
    let mut x = area.x;
    let mut removables = line.removables.iter().peekable();

    for (i, span) in line.spans.iter().enumerate() {
        let width = span.content.width() as u16;

        if let Some((_, value)) = removables.next_if(|(index, _)| *index == i) {
            if x < area.right() && 0 < area.height {
                hitboxes.push((Rect::new(x, area.y, width.max(1), 1), value.clone()));
            }
        }

        x = x.saturating_add(width);
    }

    hitboxes
}
