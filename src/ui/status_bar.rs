//! Bottom status bar: key help, chat status, active theme icon

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::state::{AppState, Focus};
use crate::theme::{ColorTheme, Theme};

/// One-line help text for the current focus
fn help_text(state: &AppState) -> &'static str {
    if state.radio.panel_open {
        return "[Space] play/pause  [n] next  [Esc] close";
    }
    match state.focus {
        Focus::Page => "[j/k] scroll  [a] start  [l] lab  [1-4] examples  [i] chat  [e] quiz  [r] radio  [m] mode  [t] theme  [q] quit",
        Focus::Chat => "[Enter] ask  [F1-F4] hints  [Esc] back",
        Focus::Quiz => "[1-3] answer  [j/k] question  [Enter] grade  [Esc] back",
    }
}

/// Draw the status bar
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    color_theme: ColorTheme,
    theme: &Theme,
) {
    let line = Line::from(vec![
        Span::styled(format!(" {} ", help_text(state)), Style::default().fg(theme.fg_muted)),
        Span::styled("│ ", Style::default().fg(theme.border)),
        Span::styled(state.chat.status().to_string(), Style::default().fg(theme.fg_muted)),
        Span::styled(format!(" {}", color_theme.icon()), Style::default()),
    ]);

    let para = Paragraph::new(line).style(Style::default().bg(theme.bg_secondary));
    frame.render_widget(para, area);
}
