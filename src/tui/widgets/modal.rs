//! Centered confirmation modal overlay.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// Fixed confirmation message shown after a successful submission.
pub const CONFIRMATION_MESSAGE: &str =
    "Thank you for the registration, you will be contacted by our team for further information";

/// Renders a centered modal with a title, wrapped message and dismiss hint.
///
/// The area under the modal is cleared so it reads as an overlay.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_modal(title: &str, message: &str, frame: &mut Frame, area: Rect) {
    let [modal_area] = Layout::horizontal([Constraint::Length(44)])
        .flex(Flex::Center)
        .areas(area);
    let [modal_area] = Layout::vertical([Constraint::Length(8)])
        .flex(Flex::Center)
        .areas(modal_area);

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let [message_area, footer_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    let body = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(body, message_area);

    let footer = Paragraph::new(Line::from("Enter/Esc: close"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
