//! The scrollable page of sections
//!
//! Rendering is also the layout pass: it records each section's line range
//! and the viewport height, which the reveal check reads after the frame.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::state::{AppState, Focus, SectionSpan};
use crate::content::{SECTIONS, SectionKind};
use crate::theme::Theme;

use super::{chat_panel, examples, quiz_panel};

/// Blank lines between sections
const SECTION_GAP: usize = 2;

/// Draw the page and record its layout into the state
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState, theme: &Theme) {
    let width = area.width.saturating_sub(4) as usize;
    let (lines, spans) = build_lines(state, theme, width.max(20));

    state.scroll.total_lines = lines.len();
    state.scroll.visible_height = area.height as usize;
    state.scroll.clamp();
    state.spans = spans;

    let para = Paragraph::new(lines)
        .style(Style::default().fg(theme.fg_primary).bg(theme.bg_primary))
        .scroll((state.scroll.offset as u16, 0));
    frame.render_widget(para, area);
}

/// Build every line of the page plus the section spans
fn build_lines(
    state: &AppState,
    theme: &Theme,
    width: usize,
) -> (Vec<Line<'static>>, Vec<SectionSpan>) {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut spans: Vec<SectionSpan> = Vec::new();

    for (index, section) in SECTIONS.iter().enumerate() {
        let revealed = state.reveal.is_revealed(index);
        let start = lines.len();

        lines.push(title_line(section.title, revealed, theme));
        lines.push(rule_line(width, revealed, theme));
        lines.push(Line::from(""));

        if revealed {
            match section.kind {
                SectionKind::Text(body) => {
                    for wrapped in textwrap::wrap(body, width) {
                        lines.push(Line::from(Span::styled(
                            wrapped.into_owned(),
                            Style::default().fg(theme.fg_primary),
                        )));
                    }
                }
                SectionKind::Examples => {
                    lines.extend(examples::lines(&state.tabs, theme, width));
                }
                SectionKind::Chat => {
                    lines.extend(chat_panel::lines(
                        &state.chat,
                        &state.chat_input,
                        state.focus == Focus::Chat,
                        theme,
                        width,
                    ));
                }
                SectionKind::Quiz => {
                    lines.extend(quiz_panel::lines(
                        &state.quiz,
                        state.focus == Focus::Quiz,
                        theme,
                    ));
                }
            }
        } else {
            // Content appears once the section scrolls into view
            lines.push(Line::from(Span::styled(
                "· · ·".to_string(),
                Style::default().fg(theme.fg_muted),
            )));
        }

        let end = lines.len();
        spans.push(SectionSpan { id: section.id, start, end });

        for _ in 0..SECTION_GAP {
            lines.push(Line::from(""));
        }
    }

    (lines, spans)
}

fn title_line(title: &'static str, revealed: bool, theme: &Theme) -> Line<'static> {
    let style = if revealed {
        Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg_muted)
    };
    Line::from(Span::styled(title, style))
}

fn rule_line(width: usize, revealed: bool, theme: &Theme) -> Line<'static> {
    let color = if revealed { theme.border_focused } else { theme.border };
    Line::from(Span::styled("─".repeat(width.min(48)), Style::default().fg(color)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SectionId;
    use crate::player::{Radio, SilentPlayback};

    fn test_state() -> AppState {
        AppState::new(Radio::new(Box::new(SilentPlayback)))
    }

    #[test]
    fn layout_produces_one_span_per_section() {
        let state = test_state();
        let theme = Theme::default();
        let (lines, spans) = build_lines(&state, &theme, 60);

        assert_eq!(spans.len(), SECTIONS.len());
        assert!(!lines.is_empty());

        // Spans are ordered and non-overlapping
        for pair in spans.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
        assert_eq!(spans[0].start, 0);
        assert!(spans.last().unwrap().end <= lines.len());
    }

    #[test]
    fn unrevealed_sections_collapse_to_placeholder() {
        let state = test_state();
        let theme = Theme::default();
        let (_, hidden_spans) = build_lines(&state, &theme, 60);

        let mut revealed = test_state();
        revealed.reveal.observe(&hidden_spans, 0, usize::MAX / 2);
        let (_, revealed_spans) = build_lines(&revealed, &theme, 60);

        let lab = |spans: &[SectionSpan]| {
            spans.iter().find(|s| s.id == SectionId::Lab).map(|s| s.len()).unwrap()
        };
        assert!(lab(&hidden_spans) < lab(&revealed_spans));
    }
}
