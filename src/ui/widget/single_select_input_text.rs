use ratatui::{
    crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind},
    layout::Rect,
    Frame,
};

use crate::{
    form::FieldKind,
    select::{FieldFocus, KeyHandled, Selection, SingleSelectInputText},
    ui::{event::EventResult, util::MousePosition},
};

use super::{
    DisplayLine, RenderTrait, RowMarker, SelectFrame, SelectTheme, WidgetBase, WidgetTrait,
};

#[derive(Debug, Default)]
pub struct SingleSelectInputTextFormBuilder {
    id: String,
    widget_base: WidgetBase,
    theme: SelectTheme,
    select: Option<SingleSelectInputText>,
}

impl SingleSelectInputTextFormBuilder {
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

    pub fn select(mut self, select: Option<SingleSelectInputText>) -> Self {
        self.select = select;
        self
    }

    pub fn build(self) -> SingleSelectInputTextForm {
        SingleSelectInputTextForm {
            id: self.id,
            frame: SelectFrame::new(self.widget_base, self.theme),
            select: self.select,
        }
    }
}

/// Free text with suggestions. The chosen label is written into the search line.
#[derive(Debug)]
pub struct SingleSelectInputTextForm {
    id: String,
    frame: SelectFrame,
    select: Option<SingleSelectInputText>,
}

impl SingleSelectInputTextForm {
    pub fn builder() -> SingleSelectInputTextFormBuilder {
        SingleSelectInputTextFormBuilder::default()
    }

    pub fn select(&self) -> Option<&SingleSelectInputText> {
        self.select.as_ref()
    }

    pub fn select_mut(&mut self) -> Option<&mut SingleSelectInputText> {
        self.select.as_mut()
    }

    fn on_mouse_down(&mut self, pos: (u16, u16)) -> EventResult {
        let Some(select) = self.select.as_mut() else {
            return EventResult::Ignore;
        };

        if self.frame.in_field(pos) {
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

impl WidgetTrait for SingleSelectInputTextForm {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> FieldKind {
        FieldKind::SingleSelectInputText
    }

    fn selection(&self) -> Option<Selection> {
        self.select.as_ref().map(SingleSelectInputText::selection)
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

impl RenderTrait for SingleSelectInputTextForm {
    fn render(&mut self, f: &mut Frame, is_active: bool, is_mouse_over: bool) {
        let Some(select) = self.select.as_ref() else {
            self.frame.render_inert(f, is_active, is_mouse_over);
            return;
        };

        let is_focused = is_active && select.focus() == FieldFocus::Search;

        let mut line = DisplayLine::default();
        line.extend(
            self.frame
                .search_spans(select.search(), select.placeholder(), is_focused),
        );

        self.frame
            .render_field(f, is_active, is_mouse_over, line, false);

        if select.is_open() {
            self.frame.render_dropdown(
                f,
                is_active,
                select.options(),
                |_| false,
                select.highlighted(),
                RowMarker::Plain,
            );
        }
    }
}
