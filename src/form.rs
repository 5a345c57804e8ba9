mod error;
mod markup;

use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};
use strum::Display;

pub use error::FormError;
pub use markup::*;

use crate::select::{SelectConfig, SelectOption};

const DEMO_FORM: &str = include_str!("../assets/demo-form.yaml");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FieldKind {
    MultiSelect,
    SingleSelect,
    SingleSelectInputText,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FieldConfigMarkup {
    #[serde(default)]
    pub placeholder: String,

    #[serde(default = "default_searchable")]
    pub searchable: bool,

    #[serde(default)]
    pub max_selection: Option<usize>,

    #[serde(default)]
    pub data: Vec<OptionMarkup>,
}

impl Default for FieldConfigMarkup {
    fn default() -> Self {
        Self {
            placeholder: String::new(),
            searchable: default_searchable(),
            max_selection: None,
            data: Vec::new(),
        }
    }
}

fn default_searchable() -> bool {
    true
}

impl FieldConfigMarkup {
    /// Select configuration without a change callback.
    pub fn to_select_config(&self) -> crate::select::SelectConfigBuilder {
        SelectConfig::builder()
            .placeholder(&self.placeholder)
            .searchable(self.searchable)
            .max_selection(self.max_selection)
            .data(
                self.data
                    .iter()
                    .filter_map(OptionMarkup::to_option)
                    .collect::<Vec<SelectOption>>(),
            )
    }
}

/// Value a field starts with: `value: m` or `value: [apple, peach]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum InitialValue {
    One(String),
    Many(Vec<String>),
}

impl InitialValue {
    pub fn values(&self) -> Vec<&str> {
        match self {
            InitialValue::One(value) => vec![value.as_str()],
            InitialValue::Many(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FieldMarkup {
    pub id: String,

    pub kind: FieldKind,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub value: Option<InitialValue>,

    #[serde(default)]
    pub config: FieldConfigMarkup,

    #[serde(default)]
    pub markup: ContainerMarkup,
}

impl FieldMarkup {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }
}

/// A form file: the fields to show, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormMarkup {
    #[serde(default)]
    pub title: Option<String>,

    pub fields: Vec<FieldMarkup>,
}

impl FormMarkup {
    pub fn load(path: &Path) -> Result<Self, FormError> {
        let s = fs::read_to_string(path).map_err(|source| FormError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_yaml(&s)
    }

    pub fn from_yaml(s: &str) -> Result<Self, FormError> {
        let form: Self = serde_yaml::from_str(s)?;

        form.validate()?;

        Ok(form)
    }

    pub fn demo() -> Result<Self, FormError> {
        Self::from_yaml(DEMO_FORM)
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("selectkit")
    }

    fn validate(&self) -> Result<(), FormError> {
        if self.fields.is_empty() {
            return Err(FormError::NoFields);
        }

        let mut ids = HashSet::new();

        for field in &self.fields {
            if !ids.insert(field.id.as_str()) {
                return Err(FormError::DuplicateFieldId(field.id.clone()));
            }
        }

        Ok(())
    }
}
