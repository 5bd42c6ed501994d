//! Landing screen with the rotating backdrop.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use image::DynamicImage;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, StatefulWidget, Widget},
};
use ratatui_image::{Resize, StatefulImage, picker::Picker, protocol::StatefulProtocol};
use tachyonfx::{Effect, Interpolation, fx};
use tracing::debug;

use crate::presentation::theme::Theme;

const PANEL_WIDTH: u16 = 72;
const PANEL_HEIGHT: u16 = 13;

enum Slide {
    Pending,
    Ready(Box<StatefulProtocol>),
    Missing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingAction {
    None,
    Join,
    Quit,
}

pub struct LandingScreen {
    slides: Vec<Slide>,
    current: usize,
    picker: Picker,
    theme: Theme,
    enable_animations: bool,
    transition: Option<Effect>,
    pending_duration: Duration,
}

impl LandingScreen {
    #[must_use]
    pub fn new(slide_count: usize, picker: Picker, theme: Theme, enable_animations: bool) -> Self {
        Self {
            slides: (0..slide_count).map(|_| Slide::Pending).collect(),
            current: 0,
            picker,
            theme,
            enable_animations,
            transition: None,
            pending_duration: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn current_slide(&self) -> usize {
        self.current
    }

    /// Shows another slide, fading it in when animations are on.
    pub fn set_slide(&mut self, index: usize) {
        if index >= self.slides.len() || index == self.current {
            return;
        }
        self.current = index;
        if self.enable_animations {
            self.transition = Some(fx::coalesce((800, Interpolation::CircOut)));
            self.pending_duration = Duration::ZERO;
        }
    }

    pub fn set_loaded(&mut self, index: usize, image: Arc<DynamicImage>) {
        if let Some(slide) = self.slides.get_mut(index) {
            let protocol = self.picker.new_resize_protocol(Arc::unwrap_or_clone(image));
            *slide = Slide::Ready(Box::new(protocol));
            debug!(index, "Backdrop ready");
        }
    }

    pub fn set_missing(&mut self, index: usize) {
        if let Some(slide) = self.slides.get_mut(index) {
            *slide = Slide::Missing;
        }
    }

    pub fn tick(&mut self, duration: Duration) {
        if self.transition.is_some() {
            self.pending_duration = self.pending_duration.saturating_add(duration);
        }
    }

    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> LandingAction {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => LandingAction::Join,
            KeyCode::Esc => LandingAction::Quit,
            _ => LandingAction::None,
        }
    }

    fn render_backdrop(&mut self, area: Rect, buf: &mut Buffer) {
        match self.slides.get_mut(self.current) {
            Some(Slide::Ready(protocol)) => {
                StatefulImage::default()
                    .resize(Resize::Crop(None))
                    .render(area, buf, protocol.as_mut());
            }
            _ => render_placeholder(&self.theme, area, buf),
        }
    }

    fn render_panel(&self, area: Rect, buf: &mut Buffer) {
        let [_, row, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(PANEL_HEIGHT),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [_, panel, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Max(PANEL_WIDTH),
            Constraint::Fill(1),
        ])
        .areas(row);

        Clear.render(panel, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::White))
            .style(Style::default().bg(Color::Black));
        let inner = block.inner(panel);
        block.render(panel, buf);

        let bold = Modifier::BOLD;
        let lines = vec![
            Line::default(),
            Line::from(vec![
                Span::styled("CLUB", Style::default().fg(self.theme.red).add_modifier(bold)),
                Span::raw(" "),
                Span::styled("JLM", Style::default().fg(self.theme.green).add_modifier(bold)),
                Span::raw(" "),
                Span::styled("ESTK", Style::default().fg(self.theme.yellow).add_modifier(bold)),
            ]),
            Line::default(),
            Line::styled(
                "Exprimez votre résistance - Rejoignez notre communauté étudiante",
                self.theme.base_style,
            ),
            Line::default(),
            Line::from(Span::styled(
                "   Rejoignez-nous →   ",
                self.theme.button_style(Color::White, true, true),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("●", Style::default().fg(self.theme.red)),
                Span::raw(" "),
                Span::styled("●", Style::default().fg(self.theme.yellow)),
                Span::raw(" "),
                Span::styled("●", Style::default().fg(self.theme.green)),
            ]),
            Line::default(),
            Line::styled("Entrée : rejoindre · Échap : quitter", self.theme.dimmed_style),
        ];

        Paragraph::new(lines).centered().render(inner, buf);
    }
}

fn render_placeholder(theme: &Theme, area: Rect, buf: &mut Buffer) {
    Block::default()
        .style(Style::default().bg(Color::Rgb(24, 24, 27)))
        .render(area, buf);

    let stripe_height = area.height.min(1);
    let bottom = area.y + area.height.saturating_sub(stripe_height);
    let third = area.width / 3;
    let colors = [theme.red, theme.yellow, theme.green];
    for (i, color) in colors.into_iter().enumerate() {
        let offset = third * u16::try_from(i).unwrap_or(0);
        let width = if i == 2 { area.width - offset } else { third };
        let stripe = Rect::new(area.x + offset, bottom, width, stripe_height);
        Block::default()
            .style(Style::default().bg(color))
            .render(stripe, buf);
    }
}

impl Widget for &mut LandingScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_backdrop(area, buf);

        if let Some(effect) = self.transition.as_mut() {
            let duration = std::mem::take(&mut self.pending_duration);
            if effect.process(duration.into(), buf, area).is_some() {
                self.transition = None;
            }
        }

        self.render_panel(area, buf);
    }
}
