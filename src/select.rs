mod config;
mod highlight;
mod multi;
mod option;
mod redirect;
mod search;
mod single;
mod single_text;
mod state;

pub use config::{OnChange, SelectConfig, SelectConfigBuilder, Selection};
pub use highlight::NavDirection;
pub use multi::MultiSelect;
pub use option::{OptionList, SelectOption};
pub use redirect::{is_redirectable, KeyRedirects, RedirectGuard};
pub use search::{SearchEdit, SearchField};
pub use single::SingleSelect;
pub use single_text::SingleSelectInputText;

/// Which part of a select field holds the keyboard inside the component.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FieldFocus {
    /// The display box that shows tags, chip or text
    #[default]
    Display,
    /// The search line inside the display box
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyHandled {
    Consumed,
    Ignored,
}

impl KeyHandled {
    fn or(self, other: KeyHandled) -> KeyHandled {
        match (self, other) {
            (KeyHandled::Ignored, KeyHandled::Ignored) => KeyHandled::Ignored,
            _ => KeyHandled::Consumed,
        }
    }
}
