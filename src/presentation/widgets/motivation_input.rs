//! Multi-line motivation editor.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};
use tui_textarea::{CursorMove, TextArea};
use unicode_width::UnicodeWidthChar;

const PLACEHOLDER: &str = "Décrivez vos motivations, vos compétences, et ce que vous pouvez \
apporter au club JLM. Parlez de vos expériences, vos projets, et votre vision pour contribuer \
à notre communauté universitaire...";

/// Text buffer backed by `tui-textarea`, rendered with hard wrapping.
pub struct MotivationInput {
    textarea: TextArea<'static>,
    focused: bool,
}

impl Default for MotivationInput {
    fn default() -> Self {
        Self::new()
    }
}

impl MotivationInput {
    #[must_use]
    pub fn new() -> Self {
        Self {
            textarea: TextArea::default(),
            focused: false,
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Full text with newlines between lines.
    #[must_use]
    pub fn value(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn clear(&mut self) {
        self.textarea = TextArea::default();
    }

    fn is_blank(&self) -> bool {
        matches!(self.textarea.lines(), [only] if only.is_empty())
    }

    pub fn insert_char(&mut self, c: char) {
        self.textarea.insert_char(c);
    }

    pub fn insert_newline(&mut self) {
        self.textarea.insert_newline();
    }

    pub fn backspace(&mut self) {
        self.textarea.delete_char();
    }

    pub fn delete(&mut self) {
        self.textarea.delete_next_char();
    }

    pub fn move_cursor(&mut self, movement: CursorMove) {
        self.textarea.move_cursor(movement);
    }

    /// Splits logical lines into rows at most `width` columns wide and
    /// returns them with the cursor's row and display column.
    fn wrap(&self, width: usize) -> (Vec<String>, (usize, usize)) {
        let width = width.max(1);
        let (cursor_row, cursor_col) = self.textarea.cursor();
        let mut rows = Vec::new();
        let mut cursor = (0, 0);

        for (index, line) in self.textarea.lines().iter().enumerate() {
            let mut row = String::new();
            let mut row_width = 0;
            let mut len = 0;

            for (col, c) in line.chars().enumerate() {
                let char_width = c.width().unwrap_or(0);
                if row_width + char_width > width && !row.is_empty() {
                    rows.push(std::mem::take(&mut row));
                    row_width = 0;
                }
                if index == cursor_row && col == cursor_col {
                    cursor = (rows.len(), row_width);
                }
                row.push(c);
                row_width += char_width;
                len = col + 1;
            }

            // Cursor past the last char sits on a fresh row once this one is full.
            if index == cursor_row && cursor_col >= len {
                if row_width >= width {
                    rows.push(std::mem::take(&mut row));
                    row_width = 0;
                }
                cursor = (rows.len(), row_width);
            }
            rows.push(row);
        }

        (rows, cursor)
    }
}

impl Widget for &MotivationInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Pourquoi souhaitez-vous rejoindre le club JLM ? * ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.is_blank() {
            Paragraph::new(PLACEHOLDER)
                .style(Style::default().fg(Color::DarkGray))
                .wrap(ratatui::widgets::Wrap { trim: true })
                .render(inner, buf);
        } else {
            let (rows, (cursor_row, cursor_col)) = self.wrap(usize::from(inner.width));
            let height = usize::from(inner.height);
            let scroll = (cursor_row + 1).saturating_sub(height);

            let lines: Vec<Line> = rows
                .into_iter()
                .skip(scroll)
                .take(height)
                .map(Line::from)
                .collect();
            Paragraph::new(lines)
                .style(Style::default().fg(Color::White))
                .render(inner, buf);

            if self.focused {
                let x = u16::try_from(cursor_col).unwrap_or(u16::MAX);
                let y = u16::try_from(cursor_row - scroll).unwrap_or(u16::MAX);
                if x < inner.width && y < inner.height {
                    buf[(inner.x + x, inner.y + y)]
                        .set_style(Style::default().bg(Color::White).fg(Color::Black));
                }
            }
        }
    }
}
