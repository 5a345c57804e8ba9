use ratatui::{
    crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind},
    layout::Rect,
    Frame,
};

use crate::{
    form::FieldKind,
    select::{FieldFocus, KeyHandled, MultiSelect, Selection},
    ui::{event::EventResult, util::MousePosition},
};

use super::{
    DisplayLine, RenderTrait, RowMarker, SelectFrame, SelectTheme, WidgetBase, WidgetTrait,
};

#[derive(Debug, Default)]
pub struct MultiSelectFormBuilder {
    id: String,
    widget_base: WidgetBase,
    theme: SelectTheme,
    select: Option<MultiSelect>,
}

impl MultiSelectFormBuilder {
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

    /// None renders an inert field.
    pub fn select(mut self, select: Option<MultiSelect>) -> Self {
        self.select = select;
        self
    }

    pub fn build(self) -> MultiSelectForm {
        MultiSelectForm {
            id: self.id,
            frame: SelectFrame::new(self.widget_base, self.theme),
            select: self.select,
        }
    }
}

/// Tags in the display box, checkbox rows in the dropdown
#[derive(Debug)]
pub struct MultiSelectForm {
    id: String,
    frame: SelectFrame,
    select: Option<MultiSelect>,
}

impl MultiSelectForm {
    pub fn builder() -> MultiSelectFormBuilder {
        MultiSelectFormBuilder::default()
    }

    pub fn select(&self) -> Option<&MultiSelect> {
        self.select.as_ref()
    }

    pub fn select_mut(&mut self) -> Option<&mut MultiSelect> {
        self.select.as_mut()
    }
}

impl WidgetTrait for MultiSelectForm {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> FieldKind {
        FieldKind::MultiSelect
    }

    fn selection(&self) -> Option<Selection> {
        self.select.as_ref().map(MultiSelect::selection)
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
        let Some(select) = self.select.as_mut() else {
            return EventResult::Ignore;
        };

        if ev.kind != MouseEventKind::Down(MouseButton::Left) {
            return EventResult::Ignore;
        }

        let pos = ev.position();

        if select.clear_all_visible() && self.frame.in_clear_all(pos) {
            select.click_clear_all();
        } else if let Some(value) = self.frame.removable_at(pos) {
            select.click_remove_tag(value);
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

    fn clear_mouse_over(&mut self) {}
}

impl RenderTrait for MultiSelectForm {
    fn render(&mut self, f: &mut Frame, is_active: bool, is_mouse_over: bool) {
        let Some(select) = self.select.as_ref() else {
            self.frame.render_inert(f, is_active, is_mouse_over);
            return;
        };

        let tag_style = self.frame.theme().tag_style;

        let mut line = DisplayLine::default();

        for option in select.selected() {
            line.push_removable(option.label(), option.value(), tag_style);
        }

        let is_focused = is_active && select.focus() == FieldFocus::Search;
        line.extend(
            self.frame
                .search_spans(select.search(), select.placeholder(), is_focused),
        );

        self.frame.render_field(
            f,
            is_active,
            is_mouse_over,
            line,
            select.clear_all_visible(),
        );

        if select.is_open() {
            self.frame.render_dropdown(
                f,
                is_active,
                select.options(),
                |value| select.is_selected(value),
                select.highlighted(),
                RowMarker::Checkbox,
            );
        }
    }
}
