//! Home screen — the landing page users return to after registering.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::action::Action;
use crate::tui::app::Screen;

/// State for the home screen.
#[derive(Debug, Clone, Default)]
pub struct HomeState;

impl HomeState {
    /// Creates the home screen state.
    pub fn new() -> Self {
        Self
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('r') | KeyCode::Enter => Action::Navigate(Screen::Registration),
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Renders the home screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_home(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Kshitiksha Educare ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        Line::from(""),
        Line::from("Welcome to Kshitiksha Educare"),
        Line::from(""),
        Line::from("r/Enter: register for the French course    q: quit    F1: help"),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);

    let [centered] = Layout::vertical([Constraint::Min(0)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(paragraph, centered);
}
