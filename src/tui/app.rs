use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::model::RegistrationInput;
use crate::submit::{RegistrationClient, SubmitOutcome, submit};

use super::action::Action;
use super::error::AppError;
use super::screens::{
    HelpState, HomeState, RegistrationState, draw_help, draw_home, draw_registration,
};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Landing page; the user returns here after a successful registration.
    Home,
    /// The registration form.
    Registration,
    /// Keybinding help.
    Help,
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    home: HomeState,
    registration: RegistrationState,
    help: HelpState,
    client: RegistrationClient,
    runtime: Handle,
    outcome_tx: UnboundedSender<SubmitOutcome>,
    outcome_rx: UnboundedReceiver<SubmitOutcome>,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` starting on the [`Screen::Home`] screen.
    ///
    /// `runtime` is the handle used to spawn submission requests.
    pub fn new(client: RegistrationClient, runtime: Handle) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            screen: Screen::Home,
            home: HomeState::new(),
            registration: RegistrationState::new(),
            help: HelpState::new(),
            client,
            runtime,
            outcome_tx,
            outcome_rx,
            should_quit: false,
        }
    }

    /// Main event loop: draw → poll key → dispatch → drain submit outcomes.
    ///
    /// Polling with a timeout keeps the loop turning while a request is in
    /// flight, so its outcome is applied without waiting for a keypress.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(Duration::from_millis(50))?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
            }
            self.drain_outcomes();
        }
        Ok(())
    }

    /// Renders the current screen.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        match self.screen {
            Screen::Home => draw_home(frame, area),
            Screen::Registration => draw_registration(&self.registration, frame, area),
            Screen::Help => draw_help(&self.help, frame, area),
        }
    }

    /// Handles a key event: global keys first, then the current screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::F(1) {
            if self.screen != Screen::Help {
                self.help.set_origin(self.screen);
                self.screen = Screen::Help;
            }
            return;
        }

        let action = match self.screen {
            Screen::Home => self.home.handle_key(key),
            Screen::Registration => self.registration.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    /// Applies an action returned by a screen handler.
    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.screen = screen,
            Action::Submit(input) => self.spawn_submit(input),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Spawns the POST on the runtime; the outcome comes back over the
    /// channel and is applied by [`drain_outcomes`](Self::drain_outcomes).
    fn spawn_submit(&mut self, input: RegistrationInput) {
        self.registration.begin_submit();
        let client = self.client.clone();
        let tx = self.outcome_tx.clone();
        self.runtime.spawn(async move {
            let outcome = submit(&client, &input).await;
            // The receiver only goes away on shutdown; drop the outcome then.
            let _ = tx.send(outcome);
        });
    }

    /// Applies any completed submission outcomes to the registration screen.
    pub fn drain_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.registration.apply_outcome(outcome);
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns a reference to the registration screen state.
    pub fn registration(&self) -> &RegistrationState {
        &self.registration
    }
}
