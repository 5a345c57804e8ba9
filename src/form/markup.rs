use serde::{Deserialize, Serialize};
use strum::Display;

use crate::select::SelectOption;

/// Marks that a role element is present. Roles carry no data of their own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RoleMarkup {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OptionMarkup {
    #[serde(default)]
    pub value: Option<String>,

    #[serde(default)]
    pub label: Option<String>,
}

impl OptionMarkup {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            label: Some(label.into()),
        }
    }

    /// None when either the value or the label is missing.
    pub fn to_option(&self) -> Option<SelectOption> {
        Some(SelectOption::new(
            self.value.as_deref()?,
            self.label.as_deref()?,
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    Input,
    Dropdown,
    Search,
    Options,
    ClearAll,
}

/// The elements a select field is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContainerMarkup {
    #[serde(default)]
    pub input: Option<RoleMarkup>,

    #[serde(default)]
    pub dropdown: Option<RoleMarkup>,

    #[serde(default)]
    pub search: Option<RoleMarkup>,

    #[serde(default)]
    pub clear_all: Option<RoleMarkup>,

    #[serde(default)]
    pub options: Option<Vec<OptionMarkup>>,
}

impl ContainerMarkup {
    /// Markup with every role present.
    #[cfg(test)]
    pub fn complete(options: impl Into<Vec<OptionMarkup>>) -> Self {
        Self {
            input: Some(RoleMarkup::default()),
            dropdown: Some(RoleMarkup::default()),
            search: Some(RoleMarkup::default()),
            clear_all: Some(RoleMarkup::default()),
            options: Some(options.into()),
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        match role {
            Role::Input => self.input.is_some(),
            Role::Dropdown => self.dropdown.is_some(),
            Role::Search => self.search.is_some(),
            Role::Options => self.options.is_some(),
            Role::ClearAll => self.clear_all.is_some(),
        }
    }

    pub fn missing_roles(&self, roles: &[Role]) -> Vec<Role> {
        roles
            .iter()
            .copied()
            .filter(|role| !self.has_role(*role))
            .collect()
    }

    /// Options in markup order. Entries without a value or label are skipped.
    pub fn select_options(&self) -> Vec<SelectOption> {
        self.options
            .iter()
            .flatten()
            .filter_map(OptionMarkup::to_option)
            .collect()
    }
}
