//! Help screen — keybinding reference.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::action::Action;
use crate::tui::app::Screen;

static HOME_KEYS: &[(&str, &str)] = &[
    ("r / Enter", "open the registration form"),
    ("q / Esc", "quit"),
    ("F1", "help"),
];

static REGISTRATION_KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "next / prev field"),
    ("Alt+g / Shift+Alt+G", "cycle gender selection"),
    ("Enter", "submit registration; with modal open: close"),
    ("Esc", "back to home"),
    ("F1", "help"),
];

static HELP_KEYS: &[(&str, &str)] = &[("↑/↓", "scroll"), ("q / Esc", "back")];

/// State for the help screen.
#[derive(Debug, Clone)]
pub struct HelpState {
    scroll: u16,
    origin: Screen,
}

impl Default for HelpState {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpState {
    /// Creates a new help state scrolled to the top, returning to [`Screen::Home`].
    pub fn new() -> Self {
        Self {
            scroll: 0,
            origin: Screen::Home,
        }
    }

    /// Records which screen help was opened from.
    pub fn set_origin(&mut self, origin: Screen) {
        self.origin = origin;
        self.scroll = 0;
    }

    /// Returns the current scroll offset.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                Action::None
            }
            KeyCode::Char('q') | KeyCode::Esc => Action::Navigate(self.origin),
            _ => Action::None,
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn section(title: &str, keys: &[(&str, &str)], lines: &mut Vec<Line<'static>>) {
    lines.push(Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    for (key, desc) in keys {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<22}"), Style::default().fg(Color::Yellow)),
            Span::raw(desc.to_string()),
        ]));
    }
    lines.push(Line::from(""));
}

/// Renders the help screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_help(state: &HelpState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = Vec::new();
    section("Home", HOME_KEYS, &mut lines);
    section("Registration", REGISTRATION_KEYS, &mut lines);
    section("Help", HELP_KEYS, &mut lines);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((state.scroll(), 0));
    frame.render_widget(paragraph, area);
}
