//! UI rendering components

pub mod chat_panel;
pub mod examples;
pub mod page;
pub mod quiz_panel;
pub mod radio_panel;
pub mod status_bar;

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Style,
    widgets::Paragraph,
};

use crate::app::state::AppState;
use crate::config::Config;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &mut AppState, config: &Config) {
    let theme = config.active_theme();
    let area = frame.area();

    // Fill background
    frame.render_widget(Paragraph::new("").style(Style::default().bg(theme.bg_primary)), area);

    let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(area);

    page::draw(frame, chunks[0], state, &theme);
    status_bar::draw(frame, chunks[1], state, config.color_theme(), &theme);

    // The radio panel overlays the page when open
    radio_panel::draw(frame, area, state, &theme);
}
