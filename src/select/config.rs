use std::fmt;

use serde::{Deserialize, Serialize};

use crate::define_callback;

use super::SelectOption;

define_callback!(pub OnChange, Fn(&Selection));

/// Snapshot of a field's value handed to change callbacks and printed on submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selection {
    /// Selected values of a multi select, in selection order
    Many(Vec<String>),
    /// Selected value of a single select
    One(Option<String>),
    /// Text shown by a single select with text input
    Text(String),
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Many(values) if values.is_empty() => write!(f, "(none)"),
            Selection::Many(values) => write!(f, "{}", values.join(", ")),
            Selection::One(Some(value)) => write!(f, "{}", value),
            Selection::One(None) => write!(f, "(none)"),
            Selection::Text(text) if text.is_empty() => write!(f, "(empty)"),
            Selection::Text(text) => write!(f, "{}", text),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelectConfig {
    placeholder: String,
    searchable: bool,
    max_selection: Option<usize>,
    on_change: Option<OnChange>,
    data: Vec<SelectOption>,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            placeholder: String::new(),
            searchable: true,
            max_selection: None,
            on_change: None,
            data: Vec::new(),
        }
    }
}

#[derive(Debug, Default)]
pub struct SelectConfigBuilder(SelectConfig);

impl SelectConfigBuilder {
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.0.placeholder = placeholder.into();
        self
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.0.searchable = searchable;
        self
    }

    /// `0` means no cap.
    pub fn max_selection(mut self, max: Option<usize>) -> Self {
        self.0.max_selection = max.filter(|max| 0 < *max);
        self
    }

    pub fn on_change<F>(mut self, cb: F) -> Self
    where
        F: Into<OnChange>,
    {
        self.0.on_change = Some(cb.into());
        self
    }

    /// Accepted for compatibility with form files. Options always come from the markup.
    pub fn data(mut self, data: impl Into<Vec<SelectOption>>) -> Self {
        self.0.data = data.into();
        self
    }

    pub fn build(self) -> SelectConfig {
        self.0
    }
}

impl SelectConfig {
    pub fn builder() -> SelectConfigBuilder {
        SelectConfigBuilder::default()
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn searchable(&self) -> bool {
        self.searchable
    }

    pub fn max_selection(&self) -> Option<usize> {
        self.max_selection
    }

    pub fn data(&self) -> &[SelectOption] {
        &self.data
    }

    pub(super) fn notify(&self, selection: Selection) {
        if let Some(cb) = &self.on_change {
            (cb)(&selection);
        }
    }
}
