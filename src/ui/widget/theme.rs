use ratatui::style::{Color, Modifier, Style};

/// Styles for the contents of a select field
#[derive(Debug, PartialEq, Clone)]
pub struct SelectTheme {
    pub placeholder_style: Style,
    pub tag_style: Style,
    pub chip_style: Style,
    pub clear_all_style: Style,
    pub selected_style: Style,
    pub highlighted_style: Style,
    pub max_dropdown_height: u16,
}

impl Default for SelectTheme {
    fn default() -> Self {
        Self {
            placeholder_style: Style::default().fg(Color::DarkGray),
            tag_style: Style::default().fg(Color::Black).bg(Color::Cyan),
            chip_style: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            clear_all_style: Style::default().fg(Color::Red),
            selected_style: Style::default().fg(Color::Green),
            highlighted_style: Style::default().add_modifier(Modifier::REVERSED),
            max_dropdown_height: 8,
        }
    }
}

impl SelectTheme {
    pub fn placeholder_style(mut self, style: impl Into<Style>) -> Self {
        self.placeholder_style = style.into();
        self
    }

    pub fn tag_style(mut self, style: impl Into<Style>) -> Self {
        self.tag_style = style.into();
        self
    }

    pub fn chip_style(mut self, style: impl Into<Style>) -> Self {
        self.chip_style = style.into();
        self
    }

    pub fn clear_all_style(mut self, style: impl Into<Style>) -> Self {
        self.clear_all_style = style.into();
        self
    }

    pub fn selected_style(mut self, style: impl Into<Style>) -> Self {
        self.selected_style = style.into();
        self
    }

    pub fn highlighted_style(mut self, style: impl Into<Style>) -> Self {
        self.highlighted_style = style.into();
        self
    }

    pub fn max_dropdown_height(mut self, height: u16) -> Self {
        self.max_dropdown_height = height;
        self
    }
}
