use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{Notification, NotificationLevel};
use crate::presentation::theme::Theme;

const MAX_WIDTH: u16 = 64;

/// Centered modal for the notice at the front of the queue.
pub struct NotificationPopup<'a> {
    notification: &'a Notification,
    theme: &'a Theme,
}

impl<'a> NotificationPopup<'a> {
    #[must_use]
    pub fn new(notification: &'a Notification, theme: &'a Theme) -> Self {
        Self {
            notification,
            theme,
        }
    }
}

impl Widget for NotificationPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let message = &self.notification.message;
        let title = format!(" {} ", self.notification.title);

        let width = u16::try_from(message.width().max(title.width()))
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(MAX_WIDTH)
            .min(area.width);
        let inner_width = width.saturating_sub(4).max(1);
        let message_width = u16::try_from(message.width()).unwrap_or(u16::MAX);
        let message_lines = message_width.div_ceil(inner_width).max(1);
        let height = message_lines.saturating_add(5).min(area.height);

        let [_, row, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [_, popup, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .areas(row);

        if popup.area() == 0 {
            return;
        }

        let color = match self.notification.level {
            NotificationLevel::Info => self.theme.green,
            NotificationLevel::Error => self.theme.red,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .title(Line::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(popup);

        Clear.render(popup, buf);
        block.render(popup, buf);

        let [body, _, hint] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner.inner(ratatui::layout::Margin::new(1, 0)));

        Paragraph::new(message.as_str())
            .style(self.theme.base_style)
            .wrap(Wrap { trim: true })
            .render(body, buf);
        Paragraph::new("Entrée pour fermer")
            .style(self.theme.dimmed_style)
            .centered()
            .render(hint, buf);
    }
}
