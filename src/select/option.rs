/// A selectable option. Identity is `value`; `label` is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectOption {
    value: String,
    label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// `term` must already be lowercased.
    fn label_contains(&self, term: &str) -> bool {
        self.label.to_lowercase().contains(term)
    }
}

/// Options in markup order, each with a visibility flag driven by the search filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionList {
    options: Vec<SelectOption>,
    visible: Vec<bool>,
}

impl OptionList {
    pub fn new(options: impl Into<Vec<SelectOption>>) -> Self {
        let options = options.into();
        let visible = vec![true; options.len()];

        Self { options, visible }
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SelectOption> {
        self.options.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectOption> {
        self.options.iter()
    }

    pub fn position(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|o| o.value == value)
    }

    pub fn find(&self, value: &str) -> Option<&SelectOption> {
        self.options.iter().find(|o| o.value == value)
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        self.visible
            .iter()
            .enumerate()
            .filter_map(|(i, visible)| visible.then_some(i))
            .collect()
    }

    /// Shows the options whose label contains `term` (case-insensitive) and hides the rest.
    /// Returns whether anything is left visible.
    pub fn apply_filter(&mut self, term: &str) -> bool {
        let term = term.to_lowercase();

        for (option, visible) in self.options.iter().zip(self.visible.iter_mut()) {
            *visible = option.label_contains(&term);
        }

        self.visible.iter().any(|v| *v)
    }

    /// First option in markup order whose label contains the trimmed term,
    /// regardless of the current visibility.
    pub fn first_match(&self, term: &str) -> Option<usize> {
        let term = term.trim().to_lowercase();

        if term.is_empty() {
            return None;
        }

        self.options.iter().position(|o| o.label_contains(&term))
    }
}

impl FromIterator<SelectOption> for OptionList {
    fn from_iter<T: IntoIterator<Item = SelectOption>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}
