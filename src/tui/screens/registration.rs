//! Registration screen — the enrollment form and its submission lifecycle.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Field, Gender, RegistrationInput, ValidationErrors, validate};
use crate::submit::{SubmissionOutcome, SubmitOutcome};
use crate::tui::action::Action;
use crate::tui::app::Screen;
use crate::tui::widgets::form::{Form, FormField, draw_form};
use crate::tui::widgets::modal::{CONFIRMATION_MESSAGE, draw_modal};

/// Field index for the applicant's name.
const NAME: usize = 0;
/// Field index for the email address.
const EMAIL: usize = 1;
/// Field index for the mobile number.
const PHONE: usize = 2;
/// Field index for the current city.
const CITY: usize = 3;

/// State for the registration screen.
#[derive(Debug, Clone)]
pub struct RegistrationState {
    form: Form,
    gender: Option<Gender>,
    gender_error: Option<String>,
    outcome: SubmissionOutcome,
    submitting: bool,
}

impl Default for RegistrationState {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationState {
    /// Creates a fresh registration form with empty fields.
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                FormField::new("Name", "Enter your name"),
                FormField::new("E-Mail", "Enter your email"),
                FormField::new("Mobile Number", "Enter your mobile number"),
                FormField::new("Current City", "Enter your current city"),
            ]),
            gender: None,
            gender_error: None,
            outcome: SubmissionOutcome::Idle,
            submitting: false,
        }
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        // While the confirmation modal is up, the only interaction is dismiss.
        if self.modal_shown() {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => self.dismiss_modal(),
                _ => Action::None,
            };
        }

        // Alt+g cycles the gender selection; Shift+Alt+G cycles backward.
        if key.modifiers == KeyModifiers::ALT && key.code == KeyCode::Char('g') {
            self.cycle_gender(true);
            return Action::None;
        }
        const ALT_SHIFT: KeyModifiers = KeyModifiers::ALT.union(KeyModifiers::SHIFT);
        if key.modifiers == ALT_SHIFT && key.code == KeyCode::Char('G') {
            self.cycle_gender(false);
            return Action::None;
        }

        match key.code {
            KeyCode::Tab => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Char(ch) => {
                self.form.insert_char(ch);
                Action::None
            }
            KeyCode::Backspace => {
                self.form.delete_char();
                Action::None
            }
            KeyCode::Esc => Action::Navigate(Screen::Home),
            KeyCode::Enter => self.submit(),
            _ => Action::None,
        }
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns the current gender selection.
    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    /// Returns the gender validation error, if any.
    pub fn gender_error(&self) -> Option<&str> {
        self.gender_error.as_deref()
    }

    /// Returns the current submission outcome.
    pub fn outcome(&self) -> &SubmissionOutcome {
        &self.outcome
    }

    /// Returns `true` while a request is in flight.
    pub fn submitting(&self) -> bool {
        self.submitting
    }

    /// Returns the form-level submission error, if any.
    pub fn form_error(&self) -> Option<&str> {
        match &self.outcome {
            SubmissionOutcome::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Returns `true` if the confirmation modal is shown.
    pub fn modal_shown(&self) -> bool {
        self.outcome == SubmissionOutcome::Succeeded
    }

    /// Marks a submission as in flight. Called by the app when it spawns
    /// the request.
    pub fn begin_submit(&mut self) {
        self.submitting = true;
    }

    /// Applies the result of an asynchronous submit attempt.
    pub fn apply_outcome(&mut self, outcome: SubmitOutcome) {
        self.submitting = false;
        match outcome {
            SubmitOutcome::Invalid(errors) => self.apply_errors(&errors),
            SubmitOutcome::Succeeded => self.outcome = SubmissionOutcome::Succeeded,
            SubmitOutcome::Failed(msg) => self.outcome = SubmissionOutcome::Failed(msg),
        }
    }

    /// Resets all state back to a fresh form.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Dismisses the confirmation modal: the input is discarded and the
    /// user lands back on the home screen.
    fn dismiss_modal(&mut self) -> Action {
        self.reset();
        Action::Navigate(Screen::Home)
    }

    /// Cycles the gender selection forward or backward.
    ///
    /// The first press selects an option; after that the selection wraps
    /// among the options and never returns to unset.
    fn cycle_gender(&mut self, forward: bool) {
        let options = Gender::all();
        self.gender = Some(match self.gender {
            None if forward => options[0],
            None => options[options.len() - 1],
            Some(current) => cycle(options, current, forward),
        });
        self.gender_error = None;
    }

    /// Builds a [`RegistrationInput`] from the current field values.
    fn input(&self) -> RegistrationInput {
        RegistrationInput {
            name: self.form.value(NAME).to_string(),
            email: self.form.value(EMAIL).to_string(),
            phone: self.form.value(PHONE).to_string(),
            gender: self.gender,
            current_city: self.form.value(CITY).to_string(),
        }
    }

    /// Validates the form and, if clean, hands the input to the app for
    /// submission.
    fn submit(&mut self) -> Action {
        // One request in flight at a time; a second Enter is ignored.
        if self.submitting {
            return Action::None;
        }

        self.form.clear_errors();
        self.gender_error = None;
        if matches!(self.outcome, SubmissionOutcome::Failed(_)) {
            self.outcome = SubmissionOutcome::Idle;
        }

        let input = self.input();
        let errors = validate(&input);
        if !errors.is_empty() {
            self.apply_errors(&errors);
            return Action::None;
        }

        Action::Submit(input)
    }

    /// Surfaces validation errors next to their fields.
    fn apply_errors(&mut self, errors: &ValidationErrors) {
        for (field, error) in errors.iter() {
            match field {
                Field::Name => self.form.set_error(NAME, error.to_string()),
                Field::Email => self.form.set_error(EMAIL, error.to_string()),
                Field::Phone => self.form.set_error(PHONE, error.to_string()),
                Field::CurrentCity => self.form.set_error(CITY, error.to_string()),
                Field::Gender => self.gender_error = Some(error.to_string()),
            }
        }
    }
}

/// Cycles through a slice to find the next or previous element.
fn cycle<T: PartialEq + Copy>(items: &[T], current: T, forward: bool) -> T {
    let pos = items.iter().position(|&x| x == current).unwrap_or(0);
    let next = if forward {
        (pos + 1) % items.len()
    } else {
        (pos + items.len() - 1) % items.len()
    };
    items[next]
}

/// Renders the registration screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_registration(state: &RegistrationState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" French Learning Registration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [header_area, form_area, gender_area, status_area, _spacer, footer_area] =
        Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(12),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "French Learning Registration Form",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "Kshitiksha Educare",
            Style::default().fg(Color::Magenta),
        )),
    ]);
    frame.render_widget(header, header_area);

    draw_form(state.form(), frame, form_area);

    // Gender selector rendered as a radio row.
    let mut gender_spans = vec![Span::styled("Gender: ", Style::default().fg(Color::White))];
    for option in Gender::all() {
        let selected = state.gender() == Some(*option);
        let marker = if selected { "(x)" } else { "( )" };
        let style = if selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        gender_spans.push(Span::styled(format!("{marker} {option}  "), style));
    }
    if let Some(err) = state.gender_error() {
        gender_spans.push(Span::styled(err.to_string(), Style::default().fg(Color::Red)));
    }
    frame.render_widget(Paragraph::new(Line::from(gender_spans)), gender_area);

    if state.submitting() {
        let status = Paragraph::new(Line::from(Span::styled(
            "Submitting...",
            Style::default().fg(Color::Yellow),
        )));
        frame.render_widget(status, status_area);
    } else if let Some(err) = state.form_error() {
        let status = Paragraph::new(Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(status, status_area);
    }

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  Alt+g: gender  Enter: submit  Esc: home",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);

    if state.modal_shown() {
        draw_modal("Submission Confirmation", CONFIRMATION_MESSAGE, frame, area);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use crate::submit::SUBMIT_FAILED_MSG;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn alt_press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::ALT,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn shift_alt_press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::ALT.union(KeyModifiers::SHIFT),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_string(state: &mut RegistrationState, s: &str) {
        for ch in s.chars() {
            state.handle_key(press(KeyCode::Char(ch)));
        }
    }

    fn fill_valid_form(state: &mut RegistrationState) {
        type_string(state, "Amelie Moreau");
        state.handle_key(press(KeyCode::Tab));
        type_string(state, "amelie@example.com");
        state.handle_key(press(KeyCode::Tab));
        type_string(state, "1234567890");
        state.handle_key(press(KeyCode::Tab));
        type_string(state, "Lyon");
        state.handle_key(alt_press(KeyCode::Char('g'))); // Male
        state.handle_key(alt_press(KeyCode::Char('g'))); // Female
    }

    mod typing {
        use super::*;

        #[test]
        fn chars_fill_focused_field() {
            let mut state = RegistrationState::new();
            type_string(&mut state, "Jo");
            assert_eq!(state.form().value(NAME), "Jo");
        }

        #[test]
        fn tab_cycles_focus_through_fields() {
            let mut state = RegistrationState::new();
            assert_eq!(state.form().focus(), NAME);
            state.handle_key(press(KeyCode::Tab));
            assert_eq!(state.form().focus(), EMAIL);
            state.handle_key(press(KeyCode::Tab));
            assert_eq!(state.form().focus(), PHONE);
            state.handle_key(press(KeyCode::Tab));
            assert_eq!(state.form().focus(), CITY);
            state.handle_key(press(KeyCode::Tab));
            assert_eq!(state.form().focus(), NAME);
        }

        #[test]
        fn backtab_cycles_focus_backward() {
            let mut state = RegistrationState::new();
            state.handle_key(press(KeyCode::BackTab));
            assert_eq!(state.form().focus(), CITY);
        }

        #[test]
        fn backspace_deletes_char() {
            let mut state = RegistrationState::new();
            type_string(&mut state, "AB");
            state.handle_key(press(KeyCode::Backspace));
            assert_eq!(state.form().value(NAME), "A");
        }
    }

    mod gender {
        use super::*;

        #[test]
        fn starts_unselected() {
            let state = RegistrationState::new();
            assert_eq!(state.gender(), None);
        }

        #[test]
        fn alt_g_selects_then_wraps() {
            let mut state = RegistrationState::new();
            state.handle_key(alt_press(KeyCode::Char('g')));
            assert_eq!(state.gender(), Some(Gender::Male));
            state.handle_key(alt_press(KeyCode::Char('g')));
            assert_eq!(state.gender(), Some(Gender::Female));
            state.handle_key(alt_press(KeyCode::Char('g')));
            assert_eq!(state.gender(), Some(Gender::Male));
        }

        #[test]
        fn shift_alt_g_cycles_backward() {
            let mut state = RegistrationState::new();
            state.handle_key(shift_alt_press(KeyCode::Char('G')));
            assert_eq!(state.gender(), Some(Gender::Female));
            state.handle_key(shift_alt_press(KeyCode::Char('G')));
            assert_eq!(state.gender(), Some(Gender::Male));
        }

        #[test]
        fn selecting_clears_gender_error() {
            let mut state = RegistrationState::new();
            state.handle_key(press(KeyCode::Enter)); // empty submit
            assert!(state.gender_error().is_some());
            state.handle_key(alt_press(KeyCode::Char('g')));
            assert_eq!(state.gender_error(), None);
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn esc_navigates_home() {
            let mut state = RegistrationState::new();
            let action = state.handle_key(press(KeyCode::Esc));
            assert_eq!(action, Action::Navigate(Screen::Home));
        }

        #[test]
        fn unhandled_key_returns_none() {
            let mut state = RegistrationState::new();
            let action = state.handle_key(press(KeyCode::F(5)));
            assert_eq!(action, Action::None);
        }
    }

    mod invalid_submit {
        use super::*;

        #[test]
        fn empty_submit_flags_every_field() {
            let mut state = RegistrationState::new();
            let action = state.handle_key(press(KeyCode::Enter));
            assert_eq!(action, Action::None);
            assert_eq!(
                state.form().fields()[NAME].error,
                Some("Name is required".into())
            );
            assert_eq!(
                state.form().fields()[EMAIL].error,
                Some("Invalid email format".into())
            );
            assert_eq!(
                state.form().fields()[PHONE].error,
                Some("Phone number must be exactly 10 digits".into())
            );
            assert_eq!(
                state.form().fields()[CITY].error,
                Some("Current city is required".into())
            );
            assert_eq!(state.gender_error(), Some("Gender is required"));
        }

        #[test]
        fn missing_gender_flags_only_gender() {
            let mut state = RegistrationState::new();
            type_string(&mut state, "Amelie");
            state.handle_key(press(KeyCode::Tab));
            type_string(&mut state, "amelie@example.com");
            state.handle_key(press(KeyCode::Tab));
            type_string(&mut state, "1234567890");
            state.handle_key(press(KeyCode::Tab));
            type_string(&mut state, "Lyon");

            let action = state.handle_key(press(KeyCode::Enter));
            assert_eq!(action, Action::None);
            assert!(!state.form().has_errors());
            assert_eq!(state.gender_error(), Some("Gender is required"));
        }

        #[test]
        fn editing_clears_only_that_fields_error() {
            let mut state = RegistrationState::new();
            state.handle_key(press(KeyCode::Enter)); // flag everything
            state.handle_key(press(KeyCode::Char('J'))); // edit name
            assert_eq!(state.form().fields()[NAME].error, None);
            assert!(state.form().fields()[EMAIL].error.is_some());
            assert!(state.form().fields()[PHONE].error.is_some());
            assert_eq!(state.gender_error(), Some("Gender is required"));
        }

        #[test]
        fn errors_cleared_on_valid_resubmit() {
            let mut state = RegistrationState::new();
            state.handle_key(press(KeyCode::Enter));
            assert!(state.form().has_errors());
            fill_valid_form(&mut state);
            let action = state.handle_key(press(KeyCode::Enter));
            assert!(matches!(action, Action::Submit(_)));
            assert!(!state.form().has_errors());
            assert_eq!(state.gender_error(), None);
        }
    }

    mod valid_submit {
        use super::*;

        #[test]
        fn returns_submit_action_with_input() {
            let mut state = RegistrationState::new();
            fill_valid_form(&mut state);
            let action = state.handle_key(press(KeyCode::Enter));
            match action {
                Action::Submit(input) => {
                    assert_eq!(input.name, "Amelie Moreau");
                    assert_eq!(input.email, "amelie@example.com");
                    assert_eq!(input.phone, "1234567890");
                    assert_eq!(input.gender, Some(Gender::Female));
                    assert_eq!(input.current_city, "Lyon");
                }
                other => panic!("expected Submit, got {other:?}"),
            }
        }

        #[test]
        fn enter_while_submitting_is_ignored() {
            let mut state = RegistrationState::new();
            fill_valid_form(&mut state);
            state.begin_submit();
            let action = state.handle_key(press(KeyCode::Enter));
            assert_eq!(action, Action::None);
        }
    }

    mod outcomes {
        use super::*;

        #[test]
        fn succeeded_shows_modal() {
            let mut state = RegistrationState::new();
            state.begin_submit();
            state.apply_outcome(SubmitOutcome::Succeeded);
            assert!(state.modal_shown());
            assert!(!state.submitting());
            assert_eq!(state.outcome(), &SubmissionOutcome::Succeeded);
        }

        #[test]
        fn failed_surfaces_form_error() {
            let mut state = RegistrationState::new();
            state.begin_submit();
            state.apply_outcome(SubmitOutcome::Failed(SUBMIT_FAILED_MSG.into()));
            assert!(!state.modal_shown());
            assert_eq!(state.form_error(), Some(SUBMIT_FAILED_MSG));
        }

        #[test]
        fn resubmit_after_failure_clears_form_error() {
            let mut state = RegistrationState::new();
            fill_valid_form(&mut state);
            state.begin_submit();
            state.apply_outcome(SubmitOutcome::Failed(SUBMIT_FAILED_MSG.into()));
            let action = state.handle_key(press(KeyCode::Enter));
            assert!(matches!(action, Action::Submit(_)));
            assert_eq!(state.form_error(), None);
        }

        #[test]
        fn invalid_outcome_applies_field_errors() {
            let mut state = RegistrationState::new();
            state.begin_submit();
            let errors = validate(&RegistrationInput::default());
            state.apply_outcome(SubmitOutcome::Invalid(errors));
            assert!(state.form().fields()[NAME].error.is_some());
            assert_eq!(state.gender_error(), Some("Gender is required"));
        }
    }

    mod modal {
        use super::*;

        fn succeeded_state() -> RegistrationState {
            let mut state = RegistrationState::new();
            fill_valid_form(&mut state);
            state.begin_submit();
            state.apply_outcome(SubmitOutcome::Succeeded);
            state
        }

        #[test]
        fn enter_dismisses_resets_and_navigates_home() {
            let mut state = succeeded_state();
            let action = state.handle_key(press(KeyCode::Enter));
            assert_eq!(action, Action::Navigate(Screen::Home));
            assert!(!state.modal_shown());
            assert_eq!(state.form().value(NAME), "");
            assert_eq!(state.gender(), None);
            assert_eq!(state.outcome(), &SubmissionOutcome::Idle);
        }

        #[test]
        fn esc_dismisses_too() {
            let mut state = succeeded_state();
            let action = state.handle_key(press(KeyCode::Esc));
            assert_eq!(action, Action::Navigate(Screen::Home));
        }

        #[test]
        fn typing_while_modal_shown_is_ignored() {
            let mut state = succeeded_state();
            let action = state.handle_key(press(KeyCode::Char('x')));
            assert_eq!(action, Action::None);
            assert!(state.modal_shown());
            assert_eq!(state.form().value(NAME), "Amelie Moreau");
        }
    }

    mod rendering {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        use super::*;

        fn render(state: &RegistrationState, width: u16, height: u16) -> String {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| draw_registration(state, frame, frame.area()))
                .unwrap();
            let buf = terminal.backend().buffer();
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                s.push('\n');
            }
            s
        }

        #[test]
        fn renders_title_and_fields() {
            let state = RegistrationState::new();
            let output = render(&state, 70, 24);
            assert!(output.contains("French Learning Registration"));
            assert!(output.contains("Name"));
            assert!(output.contains("E-Mail"));
            assert!(output.contains("Mobile Number"));
            assert!(output.contains("Current City"));
            assert!(output.contains("Gender:"));
            assert!(output.contains("Male"));
            assert!(output.contains("Female"));
        }

        #[test]
        fn renders_typed_values() {
            let mut state = RegistrationState::new();
            fill_valid_form(&mut state);
            let output = render(&state, 70, 24);
            assert!(output.contains("Amelie Moreau"));
            assert!(output.contains("1234567890"));
        }

        #[test]
        fn renders_field_errors() {
            let mut state = RegistrationState::new();
            state.handle_key(press(KeyCode::Enter));
            let output = render(&state, 80, 24);
            assert!(output.contains("Invalid email format"));
            assert!(output.contains("Gender is required"));
        }

        #[test]
        fn renders_form_level_error() {
            let mut state = RegistrationState::new();
            state.apply_outcome(SubmitOutcome::Failed(SUBMIT_FAILED_MSG.into()));
            let output = render(&state, 70, 24);
            assert!(output.contains("Failed to submit registration."));
        }

        #[test]
        fn renders_submitting_indicator() {
            let mut state = RegistrationState::new();
            state.begin_submit();
            let output = render(&state, 70, 24);
            assert!(output.contains("Submitting..."));
        }

        #[test]
        fn renders_confirmation_modal_on_success() {
            let mut state = RegistrationState::new();
            state.apply_outcome(SubmitOutcome::Succeeded);
            let output = render(&state, 70, 24);
            assert!(output.contains("Submission Confirmation"));
            assert!(output.contains("Thank you for the registration"));
        }
    }
}
