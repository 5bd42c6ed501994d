//! Main application orchestrator.

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use futures_util::future::Either;
use ratatui::{DefaultTerminal, Frame};
use ratatui_image::picker::Picker;
use tokio::sync::mpsc;
use tokio::time::{Instant, interval};
use tracing::{debug, error, info};

use crate::application::{FormSession, NotificationManager, SubmitApplicationUseCase, View};
use crate::domain::{Carousel, SubmissionError, SubmissionReceipt};
use crate::infrastructure::{AppConfig, BackdropLoadedEvent, BackdropLoader};
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::ui::{
    CarouselTimer, FormAction, FormScreen, FormScreenView, LandingAction, LandingScreen,
    NotificationPopup,
};

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

const SUCCESS_TITLE: &str = "Candidature envoyée";
const SUCCESS_MESSAGE: &str = "Merci pour votre candidature ! Nous vous contacterons bientôt. \
Votre candidature a été enregistrée dans Google Forms.";
const ERROR_TITLE: &str = "Erreur";
const ERROR_MESSAGE: &str =
    "Une erreur est survenue lors de l'envoi de votre candidature. Veuillez réessayer.";

#[derive(Debug)]
enum Action {
    SubmissionFinished(Result<SubmissionReceipt, SubmissionError>),
}

pub struct App {
    session: FormSession,
    submit_use_case: SubmitApplicationUseCase,
    backdrop_loader: BackdropLoader,
    landing: LandingScreen,
    form: FormScreen,
    carousel: CarouselTimer,
    notifications: NotificationManager,
    theme: Theme,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    backdrop_tx: mpsc::UnboundedSender<BackdropLoadedEvent>,
    backdrop_rx: mpsc::UnboundedReceiver<BackdropLoadedEvent>,
    should_exit: bool,
}

impl App {
    #[must_use]
    pub fn new(
        config: &AppConfig,
        submit_use_case: SubmitApplicationUseCase,
        backdrop_loader: BackdropLoader,
        picker: Picker,
    ) -> Self {
        let theme = Theme::club();
        let slide_count = backdrop_loader.paths().len();
        let carousel = Carousel::new(
            slide_count,
            config.carousel.initial_delay(),
            config.carousel.interval(),
        );
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (backdrop_tx, backdrop_rx) = mpsc::unbounded_channel();

        Self {
            session: FormSession::new(),
            submit_use_case,
            backdrop_loader,
            landing: LandingScreen::new(slide_count, picker, theme, config.ui.enable_animations),
            form: FormScreen::new(theme),
            carousel: CarouselTimer::new(carousel),
            notifications: NotificationManager::new(),
            theme,
            action_tx,
            action_rx,
            backdrop_tx,
            backdrop_rx,
            should_exit: false,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.backdrop_loader.spawn_all(&self.backdrop_tx);
        self.carousel.start(Instant::now());

        self.run_event_loop(terminal).await?;

        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while !self.should_exit {
            let carousel_deadline = match self.carousel.deadline() {
                Some(deadline) => Either::Left(tokio::time::sleep_until(deadline)),
                None => Either::Right(std::future::pending()),
            };
            let animating = self.session.view() == View::Landing && self.landing.is_animating();
            let terminal_event = terminal_events.next();

            tokio::select! {
                biased;

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                }

                Some(event) = self.backdrop_rx.recv() => {
                    self.handle_backdrop(event);
                }

                Some(Ok(event)) = terminal_event => {
                    if let Event::Key(key) = event {
                        if self.handle_key(key) == EventResult::Exit {
                            self.should_exit = true;
                        }
                    }
                }

                () = carousel_deadline => {
                    if let Some(index) = self.carousel.on_fire(Instant::now()) {
                        debug!(index, "Carousel advanced");
                        self.landing.set_slide(index);
                    }
                }

                _ = animation_interval.tick(), if animating => {
                    self.landing.tick(ANIMATION_TICK_RATE);
                }
            }

            terminal.draw(|frame| self.render(frame))?;
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        match self.session.view() {
            View::Landing => frame.render_widget(&mut self.landing, area),
            View::Step1 | View::Step2 => {
                frame.render_widget(FormScreenView::new(&self.form, &self.session), area);
            }
        }

        if let Some(notification) = self.notifications.current_notification() {
            frame.render_widget(NotificationPopup::new(notification, &self.theme), area);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if !EventHandler::is_press(&key) {
            return EventResult::Continue;
        }
        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }

        if self.notifications.is_blocking() {
            if EventHandler::is_dismiss_event(&key) {
                self.notifications.dismiss();
            }
            return EventResult::Continue;
        }

        if self.session.is_submitting() {
            return EventResult::Continue;
        }

        match self.session.view() {
            View::Landing => match self.landing.handle_key(key) {
                LandingAction::Join => self.enter_form(),
                LandingAction::Quit => return EventResult::Exit,
                LandingAction::None => {}
            },
            View::Step1 | View::Step2 => match self.form.handle_key(key, &mut self.session) {
                FormAction::Advance => {
                    if self.session.next_step() {
                        self.form.sync_focus(self.session.view());
                    }
                }
                FormAction::Back => {
                    if self.session.previous_step() {
                        self.form.sync_focus(self.session.view());
                    }
                }
                FormAction::Submit => self.start_submission(),
                FormAction::None => {}
            },
        }

        EventResult::Continue
    }

    fn enter_form(&mut self) {
        if self.session.join() {
            self.carousel.stop();
            self.form.sync_focus(self.session.view());
        }
    }

    fn start_submission(&mut self) {
        let draft = match self.session.begin_submission() {
            Ok(draft) => draft,
            Err(e) => {
                debug!(error = %e, "Submission not started");
                return;
            }
        };

        let use_case = self.submit_use_case.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let outcome = use_case.execute(draft).await;
            let _ = tx.send(Action::SubmissionFinished(outcome));
        });
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::SubmissionFinished(outcome) => {
                self.session.complete_submission(&outcome);
                match outcome {
                    Ok(_) => {
                        self.form.reset();
                        self.notifications.info(SUCCESS_TITLE, SUCCESS_MESSAGE);
                        self.carousel.start(Instant::now());
                        self.landing.set_slide(self.carousel.index());
                    }
                    Err(e) => {
                        error!(
                            error = %e,
                            network = e.is_network_error(),
                            "Application could not be sent"
                        );
                        self.notifications.error(ERROR_TITLE, ERROR_MESSAGE);
                    }
                }
            }
        }
    }

    fn handle_backdrop(&mut self, event: BackdropLoadedEvent) {
        match event.result {
            Ok(image) => self.landing.set_loaded(event.index, image),
            Err(_) => self.landing.set_missing(event.index),
        }
    }
}
