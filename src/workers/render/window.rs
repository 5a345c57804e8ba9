use std::{cell::RefCell, rc::Rc};

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    config::theme::ThemeConfig,
    form::{FieldKind, FieldMarkup, FormMarkup, InitialValue},
    logger,
    select::{KeyRedirects, MultiSelect, Selection, SingleSelect, SingleSelectInputText},
    ui::{
        widget::{
            MultiSelectForm, SelectTheme, SingleSelectForm, SingleSelectInputTextForm, Widget,
            WidgetBase, WidgetTheme,
        },
        Window, WindowAction, WindowTheme,
    },
};

type Status = Rc<RefCell<String>>;

/// Builds the window for a form: one widget per field, all sharing one key redirect registry.
pub struct WindowInit {
    form: FormMarkup,
    theme: ThemeConfig,
}

impl WindowInit {
    pub fn new(form: FormMarkup, theme: ThemeConfig) -> Self {
        Self { form, theme }
    }

    pub fn build(self) -> Window {
        let redirects = KeyRedirects::new();
        let status = Status::default();

        let widgets: Vec<Widget> = self
            .form
            .fields
            .iter()
            .map(|field| self.field_widget(field, &redirects, &status))
            .collect();

        // initial values are not a user change
        status.borrow_mut().clear();

        Window::builder()
            .title(self.form.title())
            .widgets(widgets)
            .redirects(redirects)
            .status(status)
            .theme(WindowTheme::from(self.theme.clone()))
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

    fn field_widget(
        &self,
        field: &FieldMarkup,
        redirects: &KeyRedirects,
        status: &Status,
    ) -> Widget {
        let config = field
            .config
            .to_select_config()
            .on_change(on_change(&field.id, status.clone()))
            .build();

        let widget_base = WidgetBase::builder()
            .title(field.title())
            .theme(WidgetTheme::from(self.theme.clone()))
            .build();

        let theme = SelectTheme::from(self.theme.clone());

        let values = field
            .value
            .as_ref()
            .map(InitialValue::values)
            .unwrap_or_default();

        match field.kind {
            FieldKind::MultiSelect => {
                let mut select = MultiSelect::mount(&field.id, &field.markup, config, redirects);

                if let Some(select) = select.as_mut().filter(|_| !values.is_empty()) {
                    select.set_values(&values);
                }

                MultiSelectForm::builder()
                    .id(&field.id)
                    .widget_base(widget_base)
                    .theme(theme)
                    .select(select)
                    .build()
                    .into()
            }
            FieldKind::SingleSelect => {
                let mut select = SingleSelect::mount(&field.id, &field.markup, config, redirects);

                if let (Some(select), Some(value)) = (select.as_mut(), values.first()) {
                    select.set_value(value);
                }

                SingleSelectForm::builder()
                    .id(&field.id)
                    .widget_base(widget_base)
                    .theme(theme)
                    .select(select)
                    .build()
                    .into()
            }
            FieldKind::SingleSelectInputText => {
                let mut select =
                    SingleSelectInputText::mount(&field.id, &field.markup, config, redirects);

                if let (Some(select), Some(value)) = (select.as_mut(), values.first()) {
                    select.set_value(value);
                }

                SingleSelectInputTextForm::builder()
                    .id(&field.id)
                    .widget_base(widget_base)
                    .theme(theme)
                    .select(select)
                    .build()
                    .into()
            }
        }
    }
}

/// Logs the change and shows it on the status line.
fn on_change(id: &str, status: Status) -> impl Fn(&Selection) + 'static {
    let id = id.to_string();

    move |selection: &Selection| {
        logger!(info, "[{}] {:?}", id, selection);

        *status.borrow_mut() = format!("{}: {}", id, selection);
    }
}
