//! Club colour palette.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub accent: Color,
    pub base_style: Style,
    pub dimmed_style: Style,
    pub focus_style: Style,
    pub disabled_style: Style,
    pub error_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::club()
    }
}

impl Theme {
    /// Red, yellow and green of the JLM flag.
    #[must_use]
    pub fn club() -> Self {
        let red = Color::Rgb(220, 38, 38);
        let yellow = Color::Rgb(234, 179, 8);
        let green = Color::Rgb(22, 163, 74);

        Self {
            red,
            yellow,
            green,
            accent: yellow,
            base_style: Style::default().fg(Color::White),
            dimmed_style: Style::default().fg(Color::DarkGray),
            focus_style: Style::default().fg(yellow).add_modifier(Modifier::BOLD),
            disabled_style: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
            error_style: Style::default().fg(red),
        }
    }

    /// Style of a push button in its current state.
    #[must_use]
    pub fn button_style(&self, color: Color, focused: bool, enabled: bool) -> Style {
        if !enabled {
            return self.disabled_style;
        }
        if focused {
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        }
    }
}
