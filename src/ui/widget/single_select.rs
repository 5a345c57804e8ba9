use ratatui::{
    crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind},
    layout::Rect,
    Frame,
};

use crate::{
    form::FieldKind,
    select::{FieldFocus, KeyHandled, Selection, SingleSelect},
    ui::{event::EventResult, util::MousePosition},
};

use super::{
    DisplayLine, RenderTrait, RowMarker, SelectFrame, SelectTheme, WidgetBase, WidgetTrait,
};

#[derive(Debug, Default)]
pub struct SingleSelectFormBuilder {
    id: String,
    widget_base: WidgetBase,
    theme: SelectTheme,
    select: Option<SingleSelect>,
}

impl SingleSelectFormBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn widget_base(mut self, widget_base: WidgetBase) -> Self {
        self.widget_base = widget_base;
        self
    }

    pub fn theme(mut self, theme: SelectTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn select(mut self, select: Option<SingleSelect>) -> Self {
        self.select = select;
        self
    }

    pub fn build(self) -> SingleSelectForm {
        SingleSelectForm {
            id: self.id,
            frame: SelectFrame::new(self.widget_base, self.theme),
            select: self.select,
        }
    }
}

/// A chip in place of the search line once something is chosen
#[derive(Debug)]
pub struct SingleSelectForm {
    id: String,
    frame: SelectFrame,
    select: Option<SingleSelect>,
}

impl SingleSelectForm {
    pub fn builder() -> SingleSelectFormBuilder {
        SingleSelectFormBuilder::default()
    }

    pub fn select(&self) -> Option<&SingleSelect> {
        self.select.as_ref()
    }

    pub fn select_mut(&mut self) -> Option<&mut SingleSelect> {
        self.select.as_mut()
    }

    fn on_mouse_down(&mut self, pos: (u16, u16)) -> EventResult {
        let Some(select) = self.select.as_mut() else {
            return EventResult::Ignore;
        };

        if self.frame.removable_at(pos).is_some() {
            select.click_remove_chip();
        } else if self.frame.in_field(pos) {
            select.click_field();
        } else if let Some(index) = select
            .is_open()
            .then(|| self.frame.option_at(pos))
            .flatten()
        {
            select.click_option(index);
        } else {
            return EventResult::Ignore;
        }

        self.frame.reset_cursor();

        EventResult::Nop
    }

    fn on_mouse_moved(&mut self, pos: (u16, u16)) -> EventResult {
        let Some(select) = self.select.as_mut() else {
            return EventResult::Ignore;
        };

        let row = select
            .is_open()
            .then(|| self.frame.option_at(pos))
            .flatten();

        match self.frame.update_hover(row) {
            Some(Some(index)) => select.hover_option(index),
            Some(None) => select.leave_options(),
            None => {}
        }

        EventResult::Nop
    }
}

impl WidgetTrait for SingleSelectForm {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> FieldKind {
        FieldKind::SingleSelect
    }

    fn selection(&self) -> Option<Selection> {
        self.select.as_ref().map(SingleSelect::selection)
    }

    fn height(&self) -> u16 {
        match &self.select {
            Some(select) => self
                .frame
                .height(select.is_open(), select.options().visible_indices().len()),
            None => self.frame.height(false, 0),
        }
    }

    fn chunk(&self) -> Rect {
        self.frame.chunk()
    }

    fn update_chunk(&mut self, chunk: Rect) {
        self.frame.update_chunk(chunk);
    }

    fn on_key_event(&mut self, ev: KeyEvent) -> EventResult {
        let Some(select) = self.select.as_mut() else {
            return EventResult::Ignore;
        };

        match select.on_key_event(ev) {
            KeyHandled::Consumed => {
                self.frame.reset_cursor();
                EventResult::Nop
            }
            KeyHandled::Ignored => EventResult::Ignore,
        }
    }

    fn on_mouse_event(&mut self, ev: MouseEvent) -> EventResult {
        match ev.kind {
            MouseEventKind::Down(MouseButton::Left) => self.on_mouse_down(ev.position()),
            MouseEventKind::Moved => self.on_mouse_moved(ev.position()),
            _ => EventResult::Ignore,
        }
    }

    fn on_focus(&mut self) {
        if let Some(select) = self.select.as_mut() {
            select.on_focus();
        }
    }

    fn on_blur(&mut self) {
        if let Some(select) = self.select.as_mut() {
            select.on_blur();
        }
    }

    fn on_outside_click(&mut self) {
        if let Some(select) = self.select.as_mut() {
            select.click_outside();
        }
    }

    fn focus_search(&mut self) {
        if let Some(select) = self.select.as_mut() {
            select.focus_search();
        }
    }

    fn clear_mouse_over(&mut self) {
        if self.frame.clear_hover() {
            if let Some(select) = self.select.as_mut() {
                select.leave_options();
            }
        }
    }
}

impl RenderTrait for SingleSelectForm {
    fn render(&mut self, f: &mut Frame, is_active: bool, is_mouse_over: bool) {
        let Some(select) = self.select.as_ref() else {
            self.frame.render_inert(f, is_active, is_mouse_over);
            return;
        };

        let mut line = DisplayLine::default();

        if let Some(option) = select.selected() {
            let chip_style = self.frame.theme().chip_style;
            line.push_removable(option.label(), option.value(), chip_style);
        } else {
            let is_focused = is_active && select.focus() == FieldFocus::Search;
            line.extend(
                self.frame
                    .search_spans(select.search(), select.placeholder(), is_focused),
            );
        }

        self.frame
            .render_field(f, is_active, is_mouse_over, line, false);

        if select.is_open() {
            self.frame.render_dropdown(
                f,
                is_active,
                select.options(),
                |value| select.is_selected(value),
                select.highlighted(),
                RowMarker::Plain,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::{
        backend::TestBackend, buffer::Buffer, crossterm::event::KeyModifiers, Terminal,
    };

    use crate::{
        form::{ContainerMarkup, OptionMarkup},
        select::{KeyRedirects, SelectConfig},
    };

    use super::*;

    fn form(redirects: &KeyRedirects) -> SingleSelectForm {
        let mut container = ContainerMarkup::complete(vec![
            OptionMarkup::new("s", "Small"),
            OptionMarkup::new("m", "Medium"),
            OptionMarkup::new("l", "Large"),
        ]);
        container.clear_all = None;

        let config = SelectConfig::builder().placeholder("Size").build();

        SingleSelectForm::builder()
            .id("size")
            .widget_base(WidgetBase::builder().title("Size").build())
            .select(SingleSelect::mount("size", &container, config, redirects))
            .build()
    }

    fn draw(form: &mut SingleSelectForm) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(20, 8)).unwrap();
        let height = form.height();

        form.update_chunk(Rect::new(0, 0, 20, height));

        terminal.draw(|f| form.render(f, false, false)).unwrap();

        terminal
    }

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Down(MouseButton::Left), column, row)
    }

    #[test]
    fn chip_replaces_search_line() {
        let redirects = KeyRedirects::new();
        let mut form = form(&redirects);

        if let Some(select) = form.select_mut() {
            select.set_value("m");
        }

        let terminal = draw(&mut form);

        assert_eq!(row(terminal.backend().buffer(), 1), "│ Medium ×         │");
    }

    #[test]
    fn chip_remove_button_clears_selection() {
        let redirects = KeyRedirects::new();
        let mut form = form(&redirects);

        if let Some(select) = form.select_mut() {
            select.set_value("m");
        }

        draw(&mut form);

        assert_eq!(form.on_mouse_event(click(9, 1)), EventResult::Nop);
        assert_eq!(form.selection(), Some(Selection::One(None)));
    }

    #[test]
    fn hover_moves_highlight_and_click_selects() {
        let redirects = KeyRedirects::new();
        let mut form = form(&redirects);

        draw(&mut form);
        form.on_mouse_event(click(3, 1));

        let terminal = draw(&mut form);
        assert_eq!(row(terminal.backend().buffer(), 5), "│Medium            │");

        form.on_mouse_event(mouse(MouseEventKind::Moved, 3, 5));

        assert_eq!(form.select().and_then(|s| s.highlighted()), Some(1));

        form.clear_mouse_over();

        assert_eq!(form.select().and_then(|s| s.highlighted()), None);

        form.on_mouse_event(click(3, 5));

        assert_eq!(form.selection(), Some(Selection::One(Some("m".to_string()))));
        assert_eq!(form.height(), 3);
    }
}
