//! Cycling select widget over a fixed option list.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::entities::Choice;

#[derive(Debug, Clone)]
pub struct ChoiceSelect {
    label: String,
    placeholder: String,
    options: &'static [Choice],
    selected: Option<usize>,
    focused: bool,
}

impl ChoiceSelect {
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        placeholder: impl Into<String>,
        options: &'static [Choice],
    ) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            options,
            selected: None,
            focused: false,
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Stored code of the selection, empty when nothing is picked.
    #[must_use]
    pub fn value(&self) -> &'static str {
        self.selected
            .and_then(|i| self.options.get(i))
            .map_or("", |choice| choice.code)
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Selects the next option, starting at the first one.
    pub fn select_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % self.options.len(),
            None => 0,
        });
    }

    /// Selects the previous option, starting at the last one.
    pub fn select_previous(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let last = self.options.len() - 1;
        self.selected = Some(match self.selected {
            Some(0) | None => last,
            Some(i) => i - 1,
        });
    }
}

impl Widget for &ChoiceSelect {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} * ", self.label));
        let inner = block.inner(area);
        block.render(area, buf);

        let current = self.selected.and_then(|i| self.options.get(i));
        let text = match current {
            Some(choice) => Span::styled(choice.label, Style::default().fg(Color::White)),
            None => Span::styled(
                self.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            ),
        };

        let mut spans = vec![text];
        if self.focused {
            spans.push(Span::styled("  ◀ ▶", Style::default().fg(Color::Yellow)));
        }
        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
