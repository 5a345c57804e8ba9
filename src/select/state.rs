use super::{
    highlight::{self, NavDirection},
    FieldFocus, KeyRedirects, OptionList, RedirectGuard, SearchField, SelectOption,
};

/// Dropdown and focus state shared by every select variant.
#[derive(Debug)]
pub(super) struct FieldState {
    pub id: String,
    pub options: OptionList,
    pub highlighted: Option<usize>,
    pub is_open: bool,
    pub search: SearchField,
    pub focus: FieldFocus,
    redirects: KeyRedirects,
    redirect: Option<RedirectGuard>,
}

impl FieldState {
    pub fn new(
        id: String,
        options: OptionList,
        search: SearchField,
        redirects: &KeyRedirects,
    ) -> Self {
        Self {
            id,
            options,
            highlighted: None,
            is_open: false,
            search,
            focus: FieldFocus::Display,
            redirects: redirects.clone(),
            redirect: None,
        }
    }

    /// Opens, closes or toggles the dropdown. Returns true on a closed to open transition.
    pub fn set_open(&mut self, show: Option<bool>) -> bool {
        let was_open = self.is_open;

        self.is_open = show.unwrap_or(!self.is_open);

        if was_open != self.is_open {
            self.highlighted = None;
        }

        if self.is_open {
            self.subscribe();
        } else {
            self.unsubscribe();
        }

        !was_open && self.is_open
    }

    pub fn subscribe(&mut self) {
        if self.redirect.is_none() {
            self.redirect = Some(self.redirects.subscribe(self.id.clone()));
        }
    }

    pub fn unsubscribe(&mut self) {
        self.redirect = None;
    }

    pub fn is_subscribed(&self) -> bool {
        self.redirect.is_some()
    }

    /// Applies `term` and clears the highlight. Returns whether any option is visible.
    pub fn filter(&mut self, term: &str) -> bool {
        self.highlighted = None;
        self.options.apply_filter(term)
    }

    /// Returns true when this step highlighted the first row from nothing.
    pub fn step_highlight(&mut self, direction: NavDirection) -> bool {
        let visible = self.options.visible_indices();

        if visible.is_empty() {
            return false;
        }

        let first = self.highlighted.is_none() && direction == NavDirection::Down;

        self.highlighted = highlight::step(&visible, self.highlighted, direction);

        first
    }

    pub fn highlighted_option(&self) -> Option<SelectOption> {
        self.highlighted
            .and_then(|i| self.options.get(i))
            .cloned()
    }

    pub fn option_at(&self, index: usize) -> Option<SelectOption> {
        self.options.get(index).cloned()
    }
}
