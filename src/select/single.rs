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

const REQUIRED_ROLES: [Role; 4] = [Role::Input, Role::Dropdown, Role::Search, Role::Options];

/// Zero or one selection shown as a removable chip. The search line is hidden
/// while the chip is shown.
#[derive(Debug)]
pub struct SingleSelect {
    config: SelectConfig,
    state: FieldState,
    selected: Option<SelectOption>,
}

impl SingleSelect {
    pub fn mount(
        id: impl Into<String>,
        container: &ContainerMarkup,
        config: SelectConfig,
        redirects: &KeyRedirects,
    ) -> Option<Self> {
        let id = id.into();

        let missing = container.missing_roles(&REQUIRED_ROLES);
        if !missing.is_empty() {
            logger!(debug, "single select [{}] inert, missing roles {:?}", id, missing);
            return None;
        }

        if !config.data().is_empty() {
            logger!(
                debug,
                "single select [{}] options come from markup, config data ignored",
                id
            );
        }

        let options = OptionList::new(container.select_options());
        let search = SearchField::new(!config.searchable());

        Some(Self {
            state: FieldState::new(id, options, search, redirects),
            config,
            selected: None,
        })
    }

    pub fn id(&self) -> &str {
        &self.state.id
    }

    pub fn options(&self) -> &OptionList {
        &self.state.options
    }

    pub fn selected(&self) -> Option<&SelectOption> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.as_ref().is_some_and(|o| o.value() == value)
    }

    pub fn selection(&self) -> Selection {
        Selection::One(self.selected.as_ref().map(|o| o.value().to_string()))
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

    pub fn search_visible(&self) -> bool {
        self.selected.is_none()
    }

    pub fn placeholder(&self) -> Option<&str> {
        (self.selected.is_none() && self.state.search.is_empty())
            .then_some(self.config.placeholder())
    }

    /// Selects `value`, replacing the current chip.
    ///
    /// A replacement reports only the new value. No intermediate `None` is emitted for the
    /// chip it drops.
    pub fn toggle_option(&mut self, value: &str) {
        let Some(option) = self.state.options.find(value).cloned() else {
            logger!(debug, "single select [{}] unknown value {}", self.id(), value);
            return;
        };

        if !self.is_selected(value) {
            self.selected = Some(option);
        }

        self.config.notify(self.selection());

        self.state.search.clear();
        self.state.filter("");
        self.toggle_dropdown(Some(false));
        self.state.focus = FieldFocus::Display;
    }

    pub fn remove_text(&mut self) {
        self.selected = None;
        self.state.highlighted = None;

        self.config.notify(self.selection());
    }

    pub fn set_value(&mut self, value: &str) {
        self.remove_text();

        if self.state.options.position(value).is_some() {
            self.toggle_option(value);
        }
    }

    pub fn filter_options(&mut self, term: &str) {
        let any = self.state.filter(term);
        self.toggle_dropdown(Some(any));
    }

    pub fn toggle_dropdown(&mut self, show: Option<bool>) {
        let opened = self.state.set_open(show);

        if opened {
            self.state.highlighted = self
                .selected
                .as_ref()
                .and_then(|o| self.state.options.position(o.value()))
                .filter(|i| self.state.options.is_visible(*i));
        }

        if self.state.is_open {
            self.focus_search();
        }
    }

    pub fn handle_arrow_keys(&mut self, direction: NavDirection) {
        if self.state.step_highlight(direction) {
            self.state.focus = FieldFocus::Display;
        }
    }

    /// Only a visible search line can take the focus.
    pub fn focus_search(&mut self) {
        if self.search_visible() {
            self.state.focus = FieldFocus::Search;
        }
    }

    pub fn on_focus(&mut self) {
        if !self.state.is_open && self.selected.is_none() {
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

    pub fn click_remove_chip(&mut self) {
        self.remove_text();
        self.state.focus = FieldFocus::Display;
    }

    pub fn click_option(&mut self, index: usize) {
        if let Some(option) = self.state.option_at(index) {
            self.state.highlighted = Some(index);
            self.toggle_option(option.value());
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
        if key_event_to_code(ev) == KeyCode::Delete && self.state.search.is_empty() {
            return KeyHandled::Ignored;
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
            }
            KeyCode::Esc => self.toggle_dropdown(Some(false)),
            KeyCode::Down => self.handle_arrow_keys(NavDirection::Down),
            KeyCode::Up => self.handle_arrow_keys(NavDirection::Up),
            KeyCode::Enter => {
                if self.state.is_open {
                    if let Some(option) = self.state.highlighted_option() {
                        self.toggle_option(option.value());
                    }
                } else if !from_search
                    || (self.state.search.is_empty() && self.selected.is_none())
                {
                    self.toggle_dropdown(Some(true));
                }
            }
            KeyCode::Delete if self.state.search.is_empty() => {
                self.remove_text();
                self.state.focus = FieldFocus::Display;
            }
            _ => return KeyHandled::Ignored,
        }

        KeyHandled::Consumed
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use crate::form::OptionMarkup;

    use super::*;

    fn container() -> ContainerMarkup {
        let mut markup = ContainerMarkup::complete(vec![
            OptionMarkup::new("s", "Small"),
            OptionMarkup::new("m", "Medium"),
            OptionMarkup::new("l", "Large"),
        ]);
        markup.clear_all = None;
        markup
    }

    fn mount_with(
        searchable: bool,
    ) -> (SingleSelect, Rc<RefCell<Vec<Selection>>>, KeyRedirects) {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let redirects = KeyRedirects::new();

        let log = changes.clone();
        let config = SelectConfig::builder()
            .placeholder("Size")
            .searchable(searchable)
            .on_change(move |selection: &Selection| log.borrow_mut().push(selection.clone()))
            .build();

        let select = SingleSelect::mount("size", &container(), config, &redirects).unwrap();

        (select, changes, redirects)
    }

    fn mount() -> (SingleSelect, Rc<RefCell<Vec<Selection>>>, KeyRedirects) {
        mount_with(true)
    }

    fn one(value: Option<&str>) -> Selection {
        Selection::One(value.map(str::to_string))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn missing_dropdown_is_inert() {
        let mut markup = container();
        markup.dropdown = None;

        let actual =
            SingleSelect::mount("size", &markup, SelectConfig::default(), &KeyRedirects::new());

        assert!(actual.is_none());
    }

    #[test]
    fn holds_at_most_one_value() {
        let (mut select, changes, _) = mount();

        select.toggle_option("s");
        select.toggle_option("l");

        assert_eq!(select.selection(), one(Some("l")));
        assert_eq!(
            *changes.borrow(),
            vec![one(Some("s")), one(Some("l"))]
        );
    }

    #[test]
    fn selecting_current_value_again_still_notifies() {
        let (mut select, changes, _) = mount();
        select.toggle_option("m");

        select.toggle_option("m");

        assert_eq!(select.selection(), one(Some("m")));
        assert_eq!(changes.borrow().len(), 2);
    }

    #[test]
    fn selection_closes_and_hides_search() {
        let (mut select, _, redirects) = mount();
        select.click_field();
        assert!(select.is_open());

        select.click_option(1);

        assert!(!select.is_open());
        assert!(!select.search_visible());
        assert_eq!(select.focus(), FieldFocus::Display);
        assert!(select.search().is_empty());
        assert!(redirects.is_empty());
    }

    #[test]
    fn reopening_after_chip_removal_shows_all_options() {
        let (mut select, _, _) = mount();
        select.on_focus();
        for c in "lar".chars() {
            select.on_key_event(key(KeyCode::Char(c)));
        }
        assert_eq!(select.options().visible_indices(), vec![2]);

        select.on_key_event(key(KeyCode::Down));
        select.on_key_event(key(KeyCode::Enter));
        assert_eq!(select.selection(), one(Some("l")));

        select.remove_text();
        select.click_field();

        assert!(select.is_open());
        assert!(select.search().is_empty());
        assert_eq!(select.options().visible_indices(), vec![0, 1, 2]);
    }

    #[test]
    fn remove_text_reports_none() {
        let (mut select, changes, _) = mount();
        select.toggle_option("s");

        select.remove_text();

        assert_eq!(select.selected(), None);
        assert_eq!(changes.borrow().last(), Some(&one(None)));
        assert!(select.search_visible());
    }

    #[test]
    fn set_value_unknown_leaves_empty() {
        let (mut select, changes, _) = mount();
        select.toggle_option("s");

        select.set_value("xl");

        assert_eq!(select.selected(), None);
        assert_eq!(changes.borrow().last(), Some(&one(None)));
    }

    #[test]
    fn opening_highlights_current_selection() {
        let (mut select, _, _) = mount();
        select.toggle_option("l");

        select.on_key_event(key(KeyCode::Enter));

        assert!(select.is_open());
        assert_eq!(select.highlighted(), Some(2));
    }

    #[test]
    fn enter_from_search_with_text_does_not_open() {
        let (mut select, _, _) = mount();
        select.on_focus();
        select.on_key_event(key(KeyCode::Char('x')));
        assert!(!select.is_open());

        select.on_key_event(key(KeyCode::Enter));

        assert!(!select.is_open());
    }

    #[test]
    fn enter_from_empty_search_opens() {
        let (mut select, _, _) = mount();
        select.on_focus();
        assert_eq!(select.focus(), FieldFocus::Search);

        select.on_key_event(key(KeyCode::Enter));

        assert!(select.is_open());
    }

    #[test]
    fn arrows_then_enter_selects() {
        let (mut select, changes, _) = mount();
        select.click_field();

        select.on_key_event(key(KeyCode::Down));
        select.on_key_event(key(KeyCode::Down));
        select.on_key_event(key(KeyCode::Enter));

        assert_eq!(select.selection(), one(Some("m")));
        assert_eq!(changes.borrow().last(), Some(&one(Some("m"))));
    }

    #[test]
    fn backspace_removes_chip() {
        let (mut select, _, _) = mount();
        select.toggle_option("s");
        select.on_focus();
        assert_eq!(select.focus(), FieldFocus::Display);

        select.on_key_event(key(KeyCode::Backspace));

        assert_eq!(select.selected(), None);
        assert_eq!(select.focus(), FieldFocus::Display);
    }

    #[test]
    fn hover_and_leave() {
        let (mut select, _, _) = mount();
        select.click_field();

        select.hover_option(1);
        assert_eq!(select.highlighted(), Some(1));

        select.leave_options();
        assert_eq!(select.highlighted(), None);
    }

    #[test]
    fn read_only_search_ignores_typing() {
        let (mut select, _, _) = mount_with(false);
        select.on_focus();

        select.on_key_event(key(KeyCode::Char('l')));

        assert!(select.search().is_empty());
        assert!(!select.is_open());
    }

    #[test]
    fn focus_with_selection_subscribes_until_blur() {
        let (mut select, _, redirects) = mount();
        select.toggle_option("s");

        select.on_focus();
        assert_eq!(redirects.len(), 1);

        select.on_blur();
        assert!(redirects.is_empty());
    }

    #[test]
    fn filter_keeps_selection() {
        let (mut select, _, _) = mount();
        select.toggle_option("s");

        select.filter_options("lar");
        select.filter_options("");

        assert_eq!(select.options().visible_indices(), vec![0, 1, 2]);
        assert_eq!(select.selection(), one(Some("s")));
    }
}
