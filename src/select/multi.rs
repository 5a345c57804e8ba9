use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::{
    form::{ContainerMarkup, Role},
    logger,
    ui::key_event_to_code,
};

use super::{
    state::FieldState, FieldFocus, KeyHandled, KeyRedirects, NavDirection, OptionList,
    SearchEdit, SearchField, SelectConfig, SelectOption, Selection,
};

const REQUIRED_ROLES: [Role; 5] = [
    Role::Input,
    Role::Dropdown,
    Role::Search,
    Role::Options,
    Role::ClearAll,
];

/// Zero to N selections shown as removable tags, with an optional cap.
#[derive(Debug)]
pub struct MultiSelect {
    config: SelectConfig,
    state: FieldState,
    selected: Vec<SelectOption>,
}

impl MultiSelect {
    /// None when the container lacks one of the required roles.
    pub fn mount(
        id: impl Into<String>,
        container: &ContainerMarkup,
        config: SelectConfig,
        redirects: &KeyRedirects,
    ) -> Option<Self> {
        let id = id.into();

        let missing = container.missing_roles(&REQUIRED_ROLES);
        if !missing.is_empty() {
            logger!(debug, "multi select [{}] inert, missing roles {:?}", id, missing);
            return None;
        }

        if !config.data().is_empty() {
            logger!(
                debug,
                "multi select [{}] options come from markup, config data ignored",
                id
            );
        }

        let options = OptionList::new(container.select_options());

        Some(Self {
            state: FieldState::new(id, options, SearchField::default(), redirects),
            config,
            selected: Vec::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.state.id
    }

    pub fn options(&self) -> &OptionList {
        &self.state.options
    }

    pub fn selected(&self) -> &[SelectOption] {
        &self.selected
    }

    pub fn selected_values(&self) -> Vec<String> {
        self.selected.iter().map(|o| o.value().to_string()).collect()
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.iter().any(|o| o.value() == value)
    }

    pub fn selection(&self) -> Selection {
        Selection::Many(self.selected_values())
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.state.highlighted
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn search(&self) -> &SearchField {
        &self.state.search
    }

    pub fn focus(&self) -> FieldFocus {
        self.state.focus
    }

    pub fn is_subscribed(&self) -> bool {
        self.state.is_subscribed()
    }

    /// Shown while nothing is selected and the search line is empty.
    pub fn placeholder(&self) -> Option<&str> {
        (self.selected.is_empty() && self.state.search.is_empty())
            .then_some(self.config.placeholder())
    }

    pub fn clear_all_visible(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn toggle_option(&mut self, value: &str) {
        let Some(option) = self.state.options.find(value).cloned() else {
            logger!(debug, "multi select [{}] unknown value {}", self.id(), value);
            return;
        };

        if let Some(pos) = self.selected.iter().position(|o| o.value() == value) {
            self.selected.remove(pos);
        } else {
            if self
                .config
                .max_selection()
                .is_some_and(|max| max <= self.selected.len())
            {
                return;
            }

            self.selected.push(option);
        }

        self.config.notify(self.selection());
    }

    pub fn clear_all(&mut self) {
        self.selected.clear();
        self.state.highlighted = None;

        self.config.notify(self.selection());
    }

    /// Replaces the selection. Values not among the options are ignored.
    pub fn set_values<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.clear_all();

        for value in values {
            let value = value.as_ref();
            if self.state.options.position(value).is_some() {
                self.toggle_option(value);
            }
        }
    }

    pub fn filter_options(&mut self, term: &str) {
        let any = self.state.filter(term);
        self.toggle_dropdown(Some(any));
    }

    pub fn toggle_dropdown(&mut self, show: Option<bool>) {
        self.state.set_open(show);

        if self.state.is_open {
            self.state.focus = FieldFocus::Search;
        }
    }

    pub fn handle_arrow_keys(&mut self, direction: NavDirection) {
        if self.state.step_highlight(direction) {
            self.state.focus = FieldFocus::Display;
        }
    }

    pub fn remove_last_tag(&mut self) {
        if let Some(value) = self.selected.last().map(|o| o.value().to_string()) {
            self.toggle_option(&value);
        }

        self.state.highlighted = None;
    }

    pub fn focus_search(&mut self) {
        self.state.focus = FieldFocus::Search;
    }

    pub fn on_focus(&mut self) {
        if !self.state.is_open {
            self.state.focus = FieldFocus::Search;
        }
    }

    pub fn on_blur(&mut self) {
        if !self.state.is_open {
            self.state.unsubscribe();
        }
    }

    pub fn click_field(&mut self) {
        self.state.highlighted = None;
        self.toggle_dropdown(Some(true));
    }

    pub fn click_remove_tag(&mut self, value: &str) {
        self.toggle_option(value);
        self.state.highlighted = None;
    }

    pub fn click_option(&mut self, index: usize) {
        let Some(option) = self.state.option_at(index) else {
            return;
        };

        self.state.focus = FieldFocus::Display;
        self.state.highlighted = Some(index);
        self.toggle_option(option.value());
    }

    pub fn click_clear_all(&mut self) {
        self.clear_all();
        self.state.focus = FieldFocus::Search;
    }

    pub fn click_outside(&mut self) {
        self.toggle_dropdown(Some(false));
        self.state.highlighted = None;
    }

    pub fn on_key_event(&mut self, ev: KeyEvent) -> KeyHandled {
        let handled = if self.state.focus == FieldFocus::Search {
            self.on_search_key_event(ev)
        } else {
            KeyHandled::Ignored
        };

        handled.or(self.on_container_key_event(ev))
    }

    fn on_search_key_event(&mut self, ev: KeyEvent) -> KeyHandled {
        match key_event_to_code(ev) {
            KeyCode::Enter => {
                let term = self.state.search.content();

                if let Some(option) = self
                    .state
                    .options
                    .first_match(&term)
                    .and_then(|i| self.state.option_at(i))
                {
                    self.toggle_option(option.value());
                    self.state.search.clear();
                    self.filter_options("");
                }

                KeyHandled::Consumed
            }
            KeyCode::Delete if self.state.search.is_empty() => {
                self.remove_last_tag();
                KeyHandled::Consumed
            }
            _ => match self.state.search.on_key_event(ev) {
                SearchEdit::Edited => {
                    let term = self.state.search.content();
                    self.filter_options(&term);
                    KeyHandled::Consumed
                }
                SearchEdit::Moved => KeyHandled::Consumed,
                SearchEdit::Ignored => KeyHandled::Ignored,
            },
        }
    }

    fn on_container_key_event(&mut self, ev: KeyEvent) -> KeyHandled {
        match key_event_to_code(ev) {
            KeyCode::Tab | KeyCode::BackTab if self.state.is_open => {
                self.state.highlighted = None;
                self.toggle_dropdown(Some(false));
            }
            KeyCode::Down => self.handle_arrow_keys(NavDirection::Down),
            KeyCode::Up => self.handle_arrow_keys(NavDirection::Up),
            KeyCode::Esc => self.toggle_dropdown(Some(false)),
            KeyCode::Enter => {
                if self.state.is_open {
                    if let Some(option) = self.state.highlighted_option() {
                        self.toggle_option(option.value());
                    }
                } else {
                    self.toggle_dropdown(Some(true));
                }
            }
            _ => return KeyHandled::Ignored,
        }

        KeyHandled::Consumed
    }
}
