use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::{
    form::{ContainerMarkup, Role},
    logger,
    ui::key_event_to_code,
};

use super::{
    state::FieldState, FieldFocus, KeyHandled, KeyRedirects, NavDirection, OptionList,
    SearchEdit, SearchField, SelectConfig, Selection,
};

const REQUIRED_ROLES: [Role; 4] = [Role::Input, Role::Dropdown, Role::Search, Role::Options];

/// Single select whose value is the text of the search line itself. Picking an
/// option writes its label into the line.
#[derive(Debug)]
pub struct SingleSelectInputText {
    config: SelectConfig,
    state: FieldState,
}

impl SingleSelectInputText {
    pub fn mount(
        id: impl Into<String>,
        container: &ContainerMarkup,
        config: SelectConfig,
        redirects: &KeyRedirects,
    ) -> Option<Self> {
        let id = id.into();

        let missing = container.missing_roles(&REQUIRED_ROLES);
        if !missing.is_empty() {
            logger!(debug, "text select [{}] inert, missing roles {:?}", id, missing);
            return None;
        }

        if !config.data().is_empty() {
            logger!(
                debug,
                "text select [{}] options come from markup, config data ignored",
                id
            );
        }

        let options = OptionList::new(container.select_options());

        Some(Self {
            state: FieldState::new(id, options, SearchField::default(), redirects),
            config,
        })
    }

    pub fn id(&self) -> &str {
        &self.state.id
    }

    pub fn options(&self) -> &OptionList {
        &self.state.options
    }

    pub fn text(&self) -> String {
        self.state.search.content()
    }

    pub fn selection(&self) -> Selection {
        Selection::Text(self.text())
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

    pub fn placeholder(&self) -> Option<&str> {
        self.state
            .search
            .is_empty()
            .then_some(self.config.placeholder())
    }

    /// Writes `label` as the field text and closes the dropdown.
    pub fn add_text(&mut self, label: &str) {
        self.state.search.set_content(label);
        self.state.filter("");
        self.toggle_dropdown(Some(false));
        self.state.focus = FieldFocus::Display;

        self.config.notify(self.selection());
    }

    pub fn clear_all(&mut self) {
        self.state.search.clear();
        self.state.filter("");

        self.config.notify(self.selection());
    }

    pub fn set_value(&mut self, value: &str) {
        self.clear_all();

        if let Some(option) = self.state.options.find(value).cloned() {
            self.add_text(option.label());
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

    pub fn focus_search(&mut self) {
        self.state.focus = FieldFocus::Search;
    }

    pub fn on_focus(&mut self) {
        if !self.state.is_open && self.state.search.is_empty() {
            self.state.focus = FieldFocus::Search;
        } else {
            self.state.focus = FieldFocus::Display;
            self.state.subscribe();
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

    pub fn click_option(&mut self, index: usize) {
        if let Some(option) = self.state.option_at(index) {
            self.state.highlighted = None;
            self.add_text(option.label());
        }
    }

    pub fn hover_option(&mut self, index: usize) {
        if self.state.options.is_visible(index) {
            self.state.highlighted = Some(index);
        }
    }

    pub fn leave_options(&mut self) {
        self.state.highlighted = None;
    }

    pub fn click_outside(&mut self) {
        self.toggle_dropdown(Some(false));
        self.state.highlighted = None;
    }

    pub fn on_key_event(&mut self, ev: KeyEvent) -> KeyHandled {
        let from_search = self.state.focus == FieldFocus::Search;

        let handled = if from_search {
            self.on_search_key_event(ev)
        } else {
            KeyHandled::Ignored
        };

        handled.or(self.on_container_key_event(ev, from_search))
    }

    fn on_search_key_event(&mut self, ev: KeyEvent) -> KeyHandled {
        if key_event_to_code(ev) == KeyCode::Enter {
            let term = self.state.search.content();

            if term.trim().is_empty() {
                return KeyHandled::Ignored;
            }

            match self
                .state
                .options
                .first_match(&term)
                .and_then(|i| self.state.option_at(i))
            {
                Some(option) => self.add_text(option.label()),
                None => {
                    self.toggle_dropdown(Some(false));
                    self.state.focus = FieldFocus::Display;
                }
            }

            return KeyHandled::Consumed;
        }

        match self.state.search.on_key_event(ev) {
            SearchEdit::Edited => {
                let term = self.state.search.content();
                self.filter_options(&term);
                KeyHandled::Consumed
            }
            SearchEdit::Moved => KeyHandled::Consumed,
            SearchEdit::Ignored => KeyHandled::Ignored,
        }
    }

    fn on_container_key_event(&mut self, ev: KeyEvent, from_search: bool) -> KeyHandled {
        match key_event_to_code(ev) {
            KeyCode::Tab | KeyCode::BackTab if self.state.is_open => {
                self.state.highlighted = None;
                self.toggle_dropdown(Some(false));
                self.state.focus = FieldFocus::Display;
            }
            KeyCode::Esc => self.toggle_dropdown(Some(false)),
            KeyCode::Down => self.handle_arrow_keys(NavDirection::Down),
            KeyCode::Up => self.handle_arrow_keys(NavDirection::Up),
            KeyCode::Enter => {
                if self.state.is_open {
                    if let Some(option) = self.state.highlighted_option() {
                        self.add_text(option.label());
                    }
                } else if !from_search || self.state.search.is_empty() {
                    self.toggle_dropdown(Some(true));
                }
            }
            _ => return KeyHandled::Ignored,
        }

        KeyHandled::Consumed
    }
}
