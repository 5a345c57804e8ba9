use std::{cell::RefCell, rc::Rc};

use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use serde::Serialize;

use crate::{
    form::FieldKind,
    logger,
    message::UserEvent,
    select::{KeyRedirects, Selection},
};

use super::{
    event::EventResult,
    util::{key_event_to_code, MousePosition, RectContainsPoint},
    widget::{RenderTrait, Widget, WidgetTrait},
};

const HINT: &str = "Tab next · Ctrl-S submit · Ctrl-C cancel";

#[derive(Debug, Clone, PartialEq)]
pub struct WindowTheme {
    base_style: Style,
    title_style: Style,
    status_style: Style,
}

impl Default for WindowTheme {
    fn default() -> Self {
        Self {
            base_style: Style::default(),
            title_style: Style::default().add_modifier(Modifier::BOLD),
            status_style: Style::default().add_modifier(Modifier::DIM),
        }
    }
}

impl WindowTheme {
    pub fn base_style(mut self, style: impl Into<Style>) -> Self {
        self.base_style = style.into();
        self
    }

    pub fn title_style(mut self, style: impl Into<Style>) -> Self {
        self.title_style = style.into();
        self
    }

    pub fn status_style(mut self, style: impl Into<Style>) -> Self {
        self.status_style = style.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowAction {
    Continue,
    Submit,
    Cancel,
}

/// One field of the submitted form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValue {
    pub id: String,
    pub kind: FieldKind,
    /// None for a field that could not be mounted
    pub value: Option<Selection>,
}

#[derive(Debug, Default)]
pub struct WindowBuilder {
    title: String,
    widgets: Vec<Widget>,
    redirects: KeyRedirects,
    actions: Vec<(UserEvent, WindowAction)>,
    status: Rc<RefCell<String>>,
    theme: WindowTheme,
}

impl WindowBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn widgets(mut self, widgets: impl Into<Vec<Widget>>) -> Self {
        self.widgets = widgets.into();
        self
    }

    /// Registry shared with the mounted select fields
    pub fn redirects(mut self, redirects: KeyRedirects) -> Self {
        self.redirects = redirects;
        self
    }

    pub fn action<E>(mut self, ev: E, action: WindowAction) -> Self
    where
        E: Into<UserEvent>,
    {
        self.actions.push((ev.into(), action));
        self
    }

    /// Text shown on the status line, written by the change callbacks
    pub fn status(mut self, status: Rc<RefCell<String>>) -> Self {
        self.status = status;
        self
    }

    pub fn theme(mut self, theme: WindowTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn build(self) -> Window {
        let mut window = Window {
            title: self.title,
            widgets: self.widgets,
            active_index: 0,
            mouse_over_index: None,
            redirects: self.redirects,
            actions: self.actions,
            status: self.status,
            theme: self.theme,
        };

        if let Some(widget) = window.widgets.first_mut() {
            widget.on_focus();
        }

        window
    }
}

/// The form: fields stacked vertically, one of them active.
#[derive(Debug)]
pub struct Window {
    title: String,
    widgets: Vec<Widget>,
    active_index: usize,
    mouse_over_index: Option<usize>,
    redirects: KeyRedirects,
    actions: Vec<(UserEvent, WindowAction)>,
    status: Rc<RefCell<String>>,
    theme: WindowTheme,
}

impl Window {
    pub fn builder() -> WindowBuilder {
        WindowBuilder::default()
    }

    pub fn snapshot(&self) -> Vec<FieldValue> {
        self.widgets
            .iter()
            .map(|w| FieldValue {
                id: w.id().to_string(),
                kind: w.kind(),
                value: w.selection(),
            })
            .collect()
    }

    pub fn match_action(&self, ev: UserEvent) -> Option<WindowAction> {
        self.actions
            .iter()
            .find_map(|(action_ev, action)| (*action_ev == ev).then_some(*action))
    }

    /// Makes `index` active. The newly active field only gets `on_focus` when `focus` is set.
    fn activate(&mut self, index: usize, focus: bool) {
        if index == self.active_index || self.widgets.len() <= index {
            return;
        }

        if let Some(widget) = self.widgets.get_mut(self.active_index) {
            widget.on_blur();
        }

        self.active_index = index;

        logger!(debug, "active field [{}]", self.widgets[index].id());

        if focus {
            self.widgets[index].on_focus();
        }
    }

    fn activate_next_widget(&mut self) {
        if self.widgets.is_empty() {
            return;
        }

        let index = (self.active_index + 1) % self.widgets.len();
        self.activate(index, true);
    }

    fn activate_prev_widget(&mut self) {
        if self.widgets.is_empty() {
            return;
        }

        let index = (self.active_index + self.widgets.len() - 1) % self.widgets.len();
        self.activate(index, true);
    }

    pub fn clear_mouse_over(&mut self) {
        self.mouse_over_index = None;

        self.widgets.iter_mut().for_each(|w| w.clear_mouse_over());
    }

    fn widget_index_at(&self, pos: (u16, u16)) -> Option<usize> {
        self.widgets
            .iter()
            .position(|w| w.chunk().contains_point(pos))
    }
}

// Render
impl Window {
    fn chunks(&self, area: Rect) -> Vec<Rect> {
        let constraints = std::iter::once(Constraint::Length(1))
            .chain(self.widgets.iter().map(|w| Constraint::Length(w.height())))
            .chain([Constraint::Min(0), Constraint::Length(1)]);

        Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area)
            .to_vec()
    }

    pub fn render(&mut self, f: &mut Frame) {
        let area = f.area();
        let chunks = self.chunks(area);

        f.render_widget(Block::default().style(self.theme.base_style), area);

        f.render_widget(
            Paragraph::new(Span::styled(format!(" {} ", self.title), self.theme.title_style)),
            chunks[0],
        );

        for (i, widget) in self.widgets.iter_mut().enumerate() {
            widget.update_chunk(chunks[i + 1]);
            widget.render(
                f,
                i == self.active_index,
                self.mouse_over_index == Some(i),
            );
        }

        if let Some(chunk) = chunks.last() {
            f.render_widget(Paragraph::new(self.status_line()), *chunk);
        }
    }

    fn status_line(&self) -> Line<'static> {
        let status = self.status.borrow();

        let mut spans = Vec::new();

        if !status.is_empty() {
            spans.push(Span::raw(format!(" {} ", status)));
            spans.push(Span::styled("│", self.theme.status_style));
        }

        spans.push(Span::styled(format!(" {}", HINT), self.theme.status_style));

        Line::from(spans)
    }
}

// Event
impl Window {
    pub fn on_event(&mut self, ev: UserEvent) -> EventResult {
        match ev {
            UserEvent::Key(ev) => self.on_key_event(ev),
            UserEvent::Mouse(ev) => self.on_mouse_event(ev),
            UserEvent::FocusLost | UserEvent::FocusGained => {
                self.clear_mouse_over();
                EventResult::Nop
            }
        }
    }

    /// Hands the key to every field that asked for typing, the last one keeps the focus.
    fn redirect_key(&mut self, ev: &KeyEvent) {
        for owner in self.redirects.targets(ev) {
            let Some(index) = self.widgets.iter().position(|w| w.id() == owner) else {
                continue;
            };

            logger!(debug, "key redirected to [{}]", owner);

            self.activate(index, false);
            self.widgets[index].focus_search();
        }
    }

    pub fn on_key_event(&mut self, ev: KeyEvent) -> EventResult {
        self.clear_mouse_over();

        self.redirect_key(&ev);

        let Some(widget) = self.widgets.get_mut(self.active_index) else {
            return EventResult::Ignore;
        };

        match widget.on_key_event(ev) {
            EventResult::Ignore => match key_event_to_code(ev) {
                KeyCode::Tab => {
                    self.activate_next_widget();
                }

                KeyCode::BackTab => {
                    self.activate_prev_widget();
                }

                _ => {
                    return EventResult::Ignore;
                }
            },
            ev => {
                return ev;
            }
        }

        EventResult::Nop
    }

    pub fn on_mouse_event(&mut self, ev: MouseEvent) -> EventResult {
        let target = self.widget_index_at(ev.position());

        match ev.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.widgets
                    .iter_mut()
                    .enumerate()
                    .filter(|(i, _)| Some(*i) != target)
                    .for_each(|(_, w)| w.on_outside_click());

                let Some(index) = target else {
                    return EventResult::Ignore;
                };

                self.activate(index, false);

                self.widgets[index].on_mouse_event(ev)
            }
            MouseEventKind::Moved => {
                if self.mouse_over_index != target {
                    self.clear_mouse_over();
                    self.mouse_over_index = target;
                }

                match target {
                    Some(index) => self.widgets[index].on_mouse_event(ev),
                    None => EventResult::Ignore,
                }
            }
            _ => EventResult::Ignore,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::{
        backend::TestBackend,
        crossterm::event::KeyModifiers,
        Terminal,
    };

    use crate::{
        form::{ContainerMarkup, OptionMarkup},
        select::{MultiSelect, SelectConfig, SingleSelect},
        ui::widget::{MultiSelectForm, SingleSelectForm, WidgetBase},
    };

    use super::*;

    impl Window {
        fn find_widget(&self, id: &str) -> Option<&Widget> {
            self.widgets.iter().find(|w| w.id() == id)
        }

        fn find_widget_mut(&mut self, id: &str) -> Option<&mut Widget> {
            self.widgets.iter_mut().find(|w| w.id() == id)
        }

        fn active_widget_id(&self) -> Option<&str> {
            self.widgets.get(self.active_index).map(|w| w.id())
        }
    }

    fn container() -> ContainerMarkup {
        ContainerMarkup::complete(vec![
            OptionMarkup::new("a", "Apple"),
            OptionMarkup::new("b", "Banana"),
        ])
    }

    fn multi(id: &str, redirects: &KeyRedirects) -> Widget {
        let config = SelectConfig::builder().build();

        MultiSelectForm::builder()
            .id(id)
            .widget_base(WidgetBase::builder().title(id).build())
            .select(MultiSelect::mount(id, &container(), config, redirects))
            .build()
            .into()
    }

    fn single(id: &str, redirects: &KeyRedirects) -> Widget {
        let config = SelectConfig::builder().build();

        SingleSelectForm::builder()
            .id(id)
            .widget_base(WidgetBase::builder().title(id).build())
            .select(SingleSelect::mount(id, &container(), config, redirects))
            .build()
            .into()
    }

    fn window(redirects: &KeyRedirects, widgets: Vec<Widget>) -> Window {
        Window::builder()
            .title("Form")
            .widgets(widgets)
            .redirects(redirects.clone())
            .action(
                KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
                WindowAction::Submit,
            )
            .action(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                WindowAction::Cancel,
            )
            .build()
    }

    fn draw(window: &mut Window) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(50, 20)).unwrap();
        terminal.draw(|f| window.render(f)).unwrap();
        terminal
    }

    fn key(code: KeyCode) -> UserEvent {
        UserEvent::Key(KeyEvent::from(code))
    }

    fn click(column: u16, row: u16) -> UserEvent {
        UserEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn open(window: &mut Window, id: &str) {
        match window.find_widget_mut(id) {
            Some(Widget::MultiSelect(w)) => {
                if let Some(select) = w.select_mut() {
                    select.toggle_dropdown(Some(true));
                }
            }
            Some(Widget::SingleSelect(w)) => {
                if let Some(select) = w.select_mut() {
                    select.toggle_dropdown(Some(true));
                }
            }
            _ => {}
        }
    }

    #[test]
    fn tab_moves_between_fields() {
        let redirects = KeyRedirects::new();
        let mut window = window(&redirects, vec![multi("x", &redirects), single("y", &redirects)]);

        assert_eq!(window.active_widget_id(), Some("x"));

        window.on_event(key(KeyCode::Tab));
        assert_eq!(window.active_widget_id(), Some("y"));

        window.on_event(key(KeyCode::Tab));
        assert_eq!(window.active_widget_id(), Some("x"));

        window.on_event(key(KeyCode::BackTab));
        assert_eq!(window.active_widget_id(), Some("y"));
    }

    #[test]
    fn unhandled_ctrl_keys_map_to_actions() {
        let redirects = KeyRedirects::new();
        let window = window(&redirects, vec![multi("x", &redirects)]);

        let submit = UserEvent::Key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        let cancel = UserEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

        assert_eq!(window.match_action(submit), Some(WindowAction::Submit));
        assert_eq!(window.match_action(cancel), Some(WindowAction::Cancel));
        assert_eq!(window.match_action(UserEvent::from('s')), None);
    }

    #[test]
    fn typing_goes_to_every_open_field_last_one_keeps_focus() {
        let redirects = KeyRedirects::new();
        let mut window = window(
            &redirects,
            vec![
                multi("x", &redirects),
                single("y", &redirects),
                single("z", &redirects),
            ],
        );

        open(&mut window, "x");
        open(&mut window, "y");

        assert_eq!(redirects.subscribers(), vec!["x", "y"]);

        window.on_event(UserEvent::from('b'));

        assert_eq!(window.active_widget_id(), Some("y"));

        let Some(Widget::SingleSelect(y)) = window.find_widget("y") else {
            panic!("y is a single select");
        };
        assert_eq!(y.select().map(|s| s.search().content()), Some("b".to_string()));
    }

    #[test]
    fn click_closes_other_fields_and_activates_target() {
        let redirects = KeyRedirects::new();
        let mut window = window(&redirects, vec![multi("x", &redirects), single("y", &redirects)]);

        draw(&mut window);
        open(&mut window, "x");
        draw(&mut window);

        let y_chunk = window.find_widget("y").map(|w| w.chunk()).unwrap_or_default();
        window.on_event(click(y_chunk.x + 2, y_chunk.y + 1));

        assert_eq!(window.active_widget_id(), Some("y"));
        assert!(redirects.subscribers().iter().all(|owner| owner != "x"));

        let Some(Widget::MultiSelect(x)) = window.find_widget("x") else {
            panic!("x is a multi select");
        };
        assert_eq!(x.select().map(|s| s.is_open()), Some(false));
    }

    #[test]
    fn snapshot_lists_every_field() {
        let redirects = KeyRedirects::new();
        let mut window = window(&redirects, vec![multi("x", &redirects), single("y", &redirects)]);

        window.on_event(key(KeyCode::Enter));
        window.on_event(key(KeyCode::Down));
        window.on_event(key(KeyCode::Enter));

        assert_eq!(
            window.snapshot(),
            vec![
                FieldValue {
                    id: "x".to_string(),
                    kind: FieldKind::MultiSelect,
                    value: Some(Selection::Many(vec!["a".to_string()])),
                },
                FieldValue {
                    id: "y".to_string(),
                    kind: FieldKind::SingleSelect,
                    value: Some(Selection::One(None)),
                },
            ]
        );
    }

    #[test]
    fn render_title_fields_and_hint() {
        let redirects = KeyRedirects::new();
        let status = Rc::new(RefCell::new("x: a".to_string()));

        let mut window = Window::builder()
            .title("Form")
            .widgets(vec![multi("x", &redirects)])
            .redirects(redirects.clone())
            .status(status)
            .build();

        let terminal = draw(&mut window);
        let buffer = terminal.backend().buffer();

        let row = |y: u16| -> String {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect()
        };

        assert_eq!(row(0).trim_end(), " Form");
        assert!(row(1).starts_with("┌ + x "));
        assert_eq!(
            row(19).trim_end(),
            " x: a │ Tab next · Ctrl-S submit · Ctrl-C cancel"
        );
    }
}
