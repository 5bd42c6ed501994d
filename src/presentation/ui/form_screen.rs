//! Two-step application form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use tui_textarea::CursorMove;

use crate::application::{FormSession, View};
use crate::domain::entities::{ACADEMIC_YEARS, DraftField, FIELDS_OF_STUDY, MIN_MOTIVATION_CHARS};
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{ChoiceSelect, MotivationInput, TextInput};

const FORM_WIDTH: u16 = 76;

const TIPS: [&str; 4] = [
    "• Mentionnez vos expériences associatives ou de leadership",
    "• Expliquez vos compétences et talents particuliers",
    "• Décrivez votre vision pour le club",
    "• Montrez votre engagement et votre disponibilité",
];

/// Focusable control on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Name,
    Email,
    Telephone,
    Year,
    FieldOfStudy,
    Continue,
    Motivation,
    Back,
    Submit,
}

const STEP1_ORDER: [FormFocus; 6] = [
    FormFocus::Name,
    FormFocus::Email,
    FormFocus::Telephone,
    FormFocus::Year,
    FormFocus::FieldOfStudy,
    FormFocus::Continue,
];

const STEP2_ORDER: [FormFocus; 3] = [FormFocus::Motivation, FormFocus::Back, FormFocus::Submit];

impl FormFocus {
    const fn order(view: View) -> &'static [Self] {
        match view {
            View::Step2 => &STEP2_ORDER,
            View::Landing | View::Step1 => &STEP1_ORDER,
        }
    }

    const fn field(self) -> Option<DraftField> {
        match self {
            Self::Name => Some(DraftField::FullName),
            Self::Email => Some(DraftField::Email),
            Self::Telephone => Some(DraftField::Telephone),
            Self::Year => Some(DraftField::AcademicYear),
            Self::FieldOfStudy => Some(DraftField::FieldOfStudy),
            Self::Motivation => Some(DraftField::Motivation),
            Self::Continue | Self::Back | Self::Submit => None,
        }
    }
}

/// What the app should do after a key on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Advance,
    Back,
    Submit,
}

/// Widgets for both steps; every edit is written through to the session.
pub struct FormScreen {
    name: TextInput,
    email: TextInput,
    telephone: TextInput,
    year: ChoiceSelect,
    field_of_study: ChoiceSelect,
    motivation: MotivationInput,
    focus: FormFocus,
    theme: Theme,
}

impl FormScreen {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let mut screen = Self {
            name: TextInput::new("Nom complet")
                .required()
                .placeholder("Votre nom complet"),
            email: TextInput::new("Adresse email")
                .required()
                .placeholder("votre.email@universite.ma"),
            telephone: TextInput::new("Numéro de téléphone")
                .required()
                .placeholder("+212 6XX XXX XXX"),
            year: ChoiceSelect::new(
                "Année universitaire",
                "Sélectionnez votre année universitaire",
                ACADEMIC_YEARS,
            ),
            field_of_study: ChoiceSelect::new(
                "Filière d'études",
                "Sélectionnez votre filière",
                FIELDS_OF_STUDY,
            ),
            motivation: MotivationInput::new(),
            focus: FormFocus::Name,
            theme,
        };
        screen.apply_focus();
        screen
    }

    #[must_use]
    pub const fn focus(&self) -> FormFocus {
        self.focus
    }

    /// Empties every widget and focuses the first field.
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.telephone.clear();
        self.year.clear();
        self.field_of_study.clear();
        self.motivation.clear();
        self.focus = FormFocus::Name;
        self.apply_focus();
    }

    /// Moves focus onto the first control of `view` unless it is already there.
    pub fn sync_focus(&mut self, view: View) {
        let order = FormFocus::order(view);
        if !order.contains(&self.focus) {
            self.focus = order[0];
            self.apply_focus();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, session: &mut FormSession) -> FormAction {
        let view = session.view();
        if view == View::Landing {
            return FormAction::None;
        }
        self.sync_focus(view);

        if EventHandler::is_submit_shortcut(&key) {
            return if view == View::Step2 && session.is_step2_valid() {
                FormAction::Submit
            } else {
                FormAction::None
            };
        }

        match key.code {
            KeyCode::Esc if view == View::Step2 => return FormAction::Back,
            KeyCode::Tab => self.move_focus(view, true),
            KeyCode::BackTab => self.move_focus(view, false),
            KeyCode::Down if self.focus != FormFocus::Motivation => self.move_focus(view, true),
            KeyCode::Up if self.focus != FormFocus::Motivation => self.move_focus(view, false),
            KeyCode::Enter => return self.activate(view, session),
            KeyCode::Char(' ') if self.is_button() => return self.activate(view, session),
            _ => self.edit(key),
        }

        if let Some(field) = self.focus.field() {
            session.set_field(field, self.widget_value(field));
        }
        FormAction::None
    }

    fn is_button(&self) -> bool {
        self.focus.field().is_none()
    }

    fn move_focus(&mut self, view: View, forward: bool) {
        let order = FormFocus::order(view);
        let position = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (position + 1) % order.len()
        } else {
            (position + order.len() - 1) % order.len()
        };
        self.focus = order[next];
        self.apply_focus();
    }

    fn activate(&mut self, view: View, session: &FormSession) -> FormAction {
        match self.focus {
            FormFocus::Continue if session.is_step1_valid() => FormAction::Advance,
            FormFocus::Back => FormAction::Back,
            FormFocus::Submit if session.is_step2_valid() => FormAction::Submit,
            FormFocus::Continue | FormFocus::Submit => FormAction::None,
            FormFocus::Motivation => {
                self.motivation.insert_newline();
                FormAction::None
            }
            _ => {
                self.move_focus(view, true);
                FormAction::None
            }
        }
    }

    fn edit(&mut self, key: KeyEvent) {
        let typed = match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(c)
            }
            _ => None,
        };

        match self.focus {
            FormFocus::Name | FormFocus::Email | FormFocus::Telephone => {
                let Some(input) = self.text_input_mut() else {
                    return;
                };
                match key.code {
                    KeyCode::Backspace => input.backspace(),
                    KeyCode::Delete => input.delete(),
                    KeyCode::Left => input.move_left(),
                    KeyCode::Right => input.move_right(),
                    KeyCode::Home => input.move_start(),
                    KeyCode::End => input.move_end(),
                    _ => {
                        if let Some(c) = typed {
                            input.input_char(c);
                        }
                    }
                }
            }
            FormFocus::Year | FormFocus::FieldOfStudy => {
                let select = if self.focus == FormFocus::Year {
                    &mut self.year
                } else {
                    &mut self.field_of_study
                };
                match key.code {
                    KeyCode::Right => select.select_next(),
                    KeyCode::Left => select.select_previous(),
                    KeyCode::Backspace | KeyCode::Delete => select.clear(),
                    _ => {}
                }
            }
            FormFocus::Motivation => match key.code {
                KeyCode::Backspace => self.motivation.backspace(),
                KeyCode::Delete => self.motivation.delete(),
                KeyCode::Left => self.motivation.move_cursor(CursorMove::Back),
                KeyCode::Right => self.motivation.move_cursor(CursorMove::Forward),
                KeyCode::Up => self.motivation.move_cursor(CursorMove::Up),
                KeyCode::Down => self.motivation.move_cursor(CursorMove::Down),
                KeyCode::Home => self.motivation.move_cursor(CursorMove::Head),
                KeyCode::End => self.motivation.move_cursor(CursorMove::End),
                _ => {
                    if let Some(c) = typed {
                        self.motivation.insert_char(c);
                    }
                }
            },
            FormFocus::Back | FormFocus::Submit => {
                if matches!(key.code, KeyCode::Left | KeyCode::Right) {
                    self.focus = if self.focus == FormFocus::Back {
                        FormFocus::Submit
                    } else {
                        FormFocus::Back
                    };
                    self.apply_focus();
                }
            }
            FormFocus::Continue => {}
        }
    }

    fn text_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            FormFocus::Name => Some(&mut self.name),
            FormFocus::Email => Some(&mut self.email),
            FormFocus::Telephone => Some(&mut self.telephone),
            _ => None,
        }
    }

    fn widget_value(&self, field: DraftField) -> String {
        match field {
            DraftField::FullName => self.name.value().to_string(),
            DraftField::Email => self.email.value().to_string(),
            DraftField::Telephone => self.telephone.value().to_string(),
            DraftField::AcademicYear => self.year.value().to_string(),
            DraftField::FieldOfStudy => self.field_of_study.value().to_string(),
            DraftField::Motivation => self.motivation.value(),
        }
    }

    fn apply_focus(&mut self) {
        self.name.set_focused(self.focus == FormFocus::Name);
        self.email.set_focused(self.focus == FormFocus::Email);
        self.telephone.set_focused(self.focus == FormFocus::Telephone);
        self.year.set_focused(self.focus == FormFocus::Year);
        self.field_of_study
            .set_focused(self.focus == FormFocus::FieldOfStudy);
        self.motivation
            .set_focused(self.focus == FormFocus::Motivation);
    }
}

/// Renders a [`FormScreen`] against the session it edits.
pub struct FormScreenView<'a> {
    screen: &'a FormScreen,
    session: &'a FormSession,
}

impl<'a> FormScreenView<'a> {
    #[must_use]
    pub const fn new(screen: &'a FormScreen, session: &'a FormSession) -> Self {
        Self { screen, session }
    }

    fn theme(&self) -> &Theme {
        &self.screen.theme
    }

    fn button(&self, label: &str, color: Color, focus: FormFocus, enabled: bool) -> Span<'static> {
        let focused = self.screen.focus == focus;
        Span::styled(
            format!("  {label}  "),
            self.theme().button_style(color, focused, enabled),
        )
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme();
        let bold = Modifier::BOLD;
        let lines = vec![
            Line::from(vec![
                Span::styled("CLUB", Style::default().fg(theme.red).add_modifier(bold)),
                Span::raw(" "),
                Span::styled("JLM", Style::default().fg(theme.green).add_modifier(bold)),
                Span::raw(" "),
                Span::styled("ESTK", Style::default().fg(theme.yellow).add_modifier(bold)),
            ]),
            Line::styled("Rejoignez notre communauté étudiante", theme.dimmed_style),
        ];
        Paragraph::new(lines)
            .centered()
            .block(Block::default().borders(Borders::BOTTOM))
            .render(area, buf);
    }

    fn render_progress(&self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme();
        let step = self.session.view().step_number();
        let pill = |label: &'static str, number: u8| {
            if step == Some(number) {
                Span::styled(
                    format!(" {label} "),
                    Style::default()
                        .fg(Color::Black)
                        .bg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(format!(" {label} "), theme.base_style)
            }
        };
        let line = Line::from(vec![
            pill("Informations", 1),
            Span::styled(" → ", theme.dimmed_style),
            pill("Motivation", 2),
        ]);
        Paragraph::new(line).centered().render(area, buf);
    }

    fn card(&self, title: &'static str, color: Color) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .title(Line::styled(
                format!(" {title} "),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
    }

    fn render_step1(&self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme();
        let block = self.card("Informations Personnelles", theme.red);
        let inner = block.inner(area);
        block.render(area, buf);

        let [description, name, email, telephone, year, field, _, continue_row] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(inner);

        Paragraph::new("Remplissez vos informations pour rejoindre le club JLM")
            .style(theme.dimmed_style)
            .centered()
            .render(description, buf);
        (&self.screen.name).render(name, buf);
        (&self.screen.email).render(email, buf);
        (&self.screen.telephone).render(telephone, buf);
        (&self.screen.year).render(year, buf);
        (&self.screen.field_of_study).render(field, buf);

        let continue_button = self.button(
            "Continuer →",
            theme.yellow,
            FormFocus::Continue,
            self.session.is_step1_valid(),
        );
        Paragraph::new(Line::from(continue_button))
            .centered()
            .render(continue_row, buf);
    }

    fn render_step2(&self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme();
        let block = self.card("Lettre de Motivation", theme.green);
        let inner = block.inner(area);
        block.render(area, buf);

        let [description, editor, counter, _, tips, _, buttons] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new("Expliquez-nous pourquoi vous méritez de rejoindre notre équipe")
            .style(theme.dimmed_style)
            .centered()
            .render(description, buf);
        (&self.screen.motivation).render(editor, buf);

        let count = self.session.draft().motivation_chars();
        let counter_style = if self.session.is_step2_valid() {
            Style::default().fg(theme.green)
        } else {
            theme.dimmed_style
        };
        Paragraph::new(format!(
            "Minimum {MIN_MOTIVATION_CHARS} caractères ({count}/{MIN_MOTIVATION_CHARS})"
        ))
        .style(counter_style)
        .render(counter, buf);

        let mut tip_lines = vec![Line::styled(
            "Conseils pour votre motivation :",
            Style::default().fg(theme.red).add_modifier(Modifier::BOLD),
        )];
        tip_lines.extend(TIPS.iter().map(|tip| Line::styled(*tip, theme.dimmed_style)));
        Paragraph::new(tip_lines).render(tips, buf);

        let submitting = self.session.is_submitting();
        let submit_label = if submitting {
            "Envoi en cours..."
        } else {
            "Envoyer ma candidature"
        };
        let line = Line::from(vec![
            self.button("← Retour", theme.yellow, FormFocus::Back, !submitting),
            Span::raw("    "),
            self.button(
                submit_label,
                theme.green,
                FormFocus::Submit,
                !submitting && self.session.is_step2_valid(),
            ),
        ]);
        Paragraph::new(line).centered().render(buttons, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme();
        let lines = vec![
            Line::from(vec![
                Span::styled("●", Style::default().fg(theme.red)),
                Span::raw(" "),
                Span::styled("●", Style::default().fg(theme.yellow)),
                Span::raw(" "),
                Span::styled("●", Style::default().fg(theme.green)),
            ]),
            Line::styled("Club JLM - Ensemble vers l'excellence", theme.dimmed_style),
        ];
        Paragraph::new(lines).centered().render(area, buf);
    }
}

impl Widget for FormScreenView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [_, column, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Max(FORM_WIDTH),
            Constraint::Fill(1),
        ])
        .areas(area);

        let [header, progress, _, card, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .areas(column);

        self.render_header(header, buf);
        self.render_progress(progress, buf);
        match self.session.view() {
            View::Step2 => self.render_step2(card, buf),
            View::Step1 | View::Landing => self.render_step1(card, buf),
        }
        self.render_footer(footer, buf);
    }
}
