//! Lofi radio overlay panel

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::state::AppState;
use crate::player::{PlayerState, TRACKS};
use crate::theme::Theme;

const VOLUME_WIDTH: usize = 20;

/// Draw the radio panel as a centered overlay when it is open
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    if !state.radio.panel_open {
        return;
    }

    let overlay_area = centered_rect(44, 10, area);

    // Clear the background area
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Лофи-радио ")
        .title_bottom(Line::from(" [Space] play  [n] next  [−/+] volume  [Esc] close ").centered())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));

    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let radio = &state.radio;
    let state_icon = match radio.state() {
        PlayerState::Playing => "⏸",
        PlayerState::Paused | PlayerState::Idle => "▶",
    };

    let volume = radio.volume() as usize;
    let filled = volume * VOLUME_WIDTH / 100;

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {state_icon}  "), Style::default().fg(theme.accent_primary)),
            Span::styled(
                radio.current_track().title,
                Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({}/{})", radio.track_index() + 1, TRACKS.len()),
                Style::default().fg(theme.fg_muted),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  🔊 ", Style::default().fg(theme.fg_muted)),
            Span::styled("█".repeat(filled), Style::default().fg(theme.accent_secondary)),
            Span::styled(
                "░".repeat(VOLUME_WIDTH - filled),
                Style::default().fg(theme.bg_tertiary),
            ),
            Span::styled(format!(" {volume}"), Style::default().fg(theme.fg_muted)),
        ]),
    ];

    let para = Paragraph::new(lines).style(Style::default().fg(theme.fg_primary));
    frame.render_widget(para, inner);
}

/// Create a centered rectangle with a fixed width/height, clamped to the area
fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);

    let vertical = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(r);

    Layout::horizontal([Constraint::Fill(1), Constraint::Length(width), Constraint::Fill(1)])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_inside_the_area() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(44, 10, area);
        assert_eq!(rect.width, 44);
        assert_eq!(rect.height, 10);
        assert!(rect.x >= area.x && rect.right() <= area.right());
        assert!(rect.y >= area.y && rect.bottom() <= area.bottom());
    }

    #[test]
    fn centered_rect_clamps_to_small_areas() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect(44, 10, area);
        assert!(rect.width <= area.width);
        assert!(rect.height <= area.height);
    }
}
