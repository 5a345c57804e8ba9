use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders},
};

#[derive(Debug, PartialEq, Clone)]
pub struct WidgetTheme {
    base_style: Style,
    title_active_style: Style,
    title_inactive_style: Style,
    border_type: BorderType,
    border_active_style: Style,
    border_mouse_over_style: Style,
    border_inactive_style: Style,
}

impl Default for WidgetTheme {
    fn default() -> Self {
        Self {
            base_style: Style::default(),
            title_active_style: Style::default().add_modifier(Modifier::BOLD),
            title_inactive_style: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Plain,
            border_active_style: Style::default(),
            border_mouse_over_style: Style::default().fg(Color::Gray),
            border_inactive_style: Style::default().fg(Color::DarkGray),
        }
    }
}

impl WidgetTheme {
    pub fn base_style(mut self, style: impl Into<Style>) -> Self {
        self.base_style = style.into();
        self
    }

    pub fn title_active_style(mut self, style: impl Into<Style>) -> Self {
        self.title_active_style = style.into();
        self
    }

    pub fn title_inactive_style(mut self, style: impl Into<Style>) -> Self {
        self.title_inactive_style = style.into();
        self
    }

    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }

    pub fn border_active_style(mut self, style: impl Into<Style>) -> Self {
        self.border_active_style = style.into();
        self
    }

    pub fn border_mouse_over_style(mut self, style: impl Into<Style>) -> Self {
        self.border_mouse_over_style = style.into();
        self
    }

    pub fn border_inactive_style(mut self, style: impl Into<Style>) -> Self {
        self.border_inactive_style = style.into();
        self
    }
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct WidgetBaseBuilder(WidgetBase);

impl WidgetBaseBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = title.into();
        self
    }

    pub fn theme(mut self, theme: WidgetTheme) -> Self {
        self.0.theme = theme;
        self
    }

    pub fn build(self) -> WidgetBase {
        self.0
    }
}

/// Title and bordered block of a field
#[derive(Debug, PartialEq, Clone, Default)]
pub struct WidgetBase {
    title: String,
    theme: WidgetTheme,
}

impl WidgetBase {
    pub fn builder() -> WidgetBaseBuilder {
        WidgetBaseBuilder::default()
    }

    pub fn render_title(&self, is_active: bool) -> Vec<Span<'static>> {
        if self.title.is_empty() {
            return Vec::new();
        }

        if is_active {
            vec![
                Span::styled(" + ", self.theme.title_active_style),
                Span::styled(self.title.clone(), self.theme.title_active_style),
                Span::styled(" ", self.theme.title_active_style),
            ]
        } else {
            vec![
                Span::styled(" ", self.theme.title_inactive_style),
                Span::styled(self.title.clone(), self.theme.title_inactive_style),
                Span::styled(" ", self.theme.title_inactive_style),
            ]
        }
    }

    /// Active:   ─ + Title ───  (BOLD)
    /// Inactive: ─── Title ───  (DarkGray)
    pub fn render_block(&self, is_active: bool, is_mouse_over: bool) -> Block<'static> {
        let border_style = if is_active {
            self.theme.border_active_style
        } else if is_mouse_over {
            self.theme.border_mouse_over_style
        } else {
            self.theme.border_inactive_style
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(self.theme.border_type)
            .border_style(border_style)
            .style(self.theme.base_style);

        let title = self.render_title(is_active);

        if title.is_empty() {
            block
        } else {
            block.title(ratatui::text::Line::from(title))
        }
    }

    /// Block of the dropdown list below the field
    pub fn render_dropdown_block(&self, is_active: bool) -> Block<'static> {
        let border_style = if is_active {
            self.theme.border_active_style
        } else {
            self.theme.border_inactive_style
        };

        Block::default()
            .borders(Borders::ALL)
            .border_type(self.theme.border_type)
            .border_style(border_style)
            .style(self.theme.base_style)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn inactive_title() {
        let base = WidgetBase::builder().title("Fruits").build();

        let title: String = base
            .render_title(false)
            .into_iter()
            .map(|span| span.content)
            .collect();

        assert_eq!(title, " Fruits ");
    }

    #[test]
    fn active_title() {
        let base = WidgetBase::builder().title("Fruits").build();

        let title: String = base
            .render_title(true)
            .into_iter()
            .map(|span| span.content)
            .collect();

        assert_eq!(title, " + Fruits ");
    }

    #[test]
    fn empty_title() {
        assert!(WidgetBase::default().render_title(true).is_empty());
    }
}
