//! Chat lab rendering: transcript, thinking indicator, status and input line

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::state::ChatInput;
use crate::chat::{Chat, HINTS, Role};
use crate::theme::Theme;

/// Lines for the chat section
pub fn lines(
    chat: &Chat,
    input: &ChatInput,
    focused: bool,
    theme: &Theme,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // Transcript
    for message in chat.transcript() {
        let (prefix, color) = match message.role {
            Role::User => ("Ты  ", theme.accent_secondary),
            Role::Assistant => ("ИИ  ", theme.accent_primary),
        };
        // Column width, not byte length: the prefixes are Cyrillic
        let prefix_width = prefix.chars().count();
        let body_width = width.saturating_sub(prefix_width).max(10);

        for (i, wrapped) in textwrap::wrap(&message.text, body_width).iter().enumerate() {
            let lead = if i == 0 {
                Span::styled(prefix, Style::default().fg(color).add_modifier(Modifier::BOLD))
            } else {
                Span::raw(" ".repeat(prefix_width))
            };
            lines.push(Line::from(vec![
                lead,
                Span::styled(wrapped.to_string(), Style::default().fg(theme.fg_primary)),
            ]));
        }
    }

    // Thinking indicator
    if chat.thinking() {
        lines.push(Line::from(Span::styled(
            "ИИ  …".to_string(),
            Style::default().fg(theme.fg_muted).add_modifier(Modifier::ITALIC),
        )));
    }

    lines.push(Line::from(""));

    // Input line with cursor
    let prompt_color = if focused { theme.border_focused } else { theme.fg_muted };
    let (before, after) = input.split_at_cursor();
    let mut after_chars = after.chars();
    let at_cursor = after_chars.next().map(|c| c.to_string()).unwrap_or_else(|| " ".to_string());
    let rest: String = after_chars.collect();

    let mut input_spans = vec![
        Span::styled("> ", Style::default().fg(prompt_color).add_modifier(Modifier::BOLD)),
        Span::styled(before.to_string(), Style::default().fg(theme.fg_secondary)),
    ];
    if focused {
        input_spans.push(Span::styled(
            at_cursor,
            Style::default().fg(theme.bg_primary).bg(theme.fg_secondary),
        ));
        input_spans.push(Span::styled(rest, Style::default().fg(theme.fg_secondary)));
    } else {
        input_spans.push(Span::styled(
            format!("{at_cursor}{rest}"),
            Style::default().fg(theme.fg_secondary),
        ));
    }
    lines.push(Line::from(input_spans));

    // Status line
    lines.push(Line::from(Span::styled(
        chat.status().to_string(),
        Style::default().fg(theme.fg_muted),
    )));

    // Hint questions
    let hints = HINTS
        .iter()
        .enumerate()
        .map(|(i, hint)| format!("F{} {}", i + 1, hint))
        .collect::<Vec<_>>()
        .join("  ·  ");
    for wrapped in textwrap::wrap(&format!("Примеры: {hints}"), width) {
        lines.push(Line::from(Span::styled(
            wrapped.into_owned(),
            Style::default().fg(theme.fg_muted),
        )));
    }

    lines
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::chat::{GREETING, STATUS_THINKING};

    fn rendered_text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|line| {
                line.spans.iter().map(|span| span.content.as_ref()).collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn greeting_and_status_are_rendered() {
        let chat = Chat::new();
        let input = ChatInput::default();
        let theme = Theme::default();

        let text = rendered_text(&lines(&chat, &input, false, &theme, 80));
        assert!(text.contains(GREETING));
        assert!(text.contains("> "));
    }

    #[test]
    fn thinking_indicator_appears_while_a_reply_is_pending() {
        let mut chat = Chat::new();
        chat.ask("Что такое ИИ?", Instant::now());
        let input = ChatInput::default();
        let theme = Theme::default();

        let text = rendered_text(&lines(&chat, &input, true, &theme, 80));
        assert!(text.contains("Что такое ИИ?"));
        assert!(text.contains(STATUS_THINKING));
        assert!(text.contains("ИИ  …"));
    }

    #[test]
    fn long_messages_wrap_to_width() {
        let mut chat = Chat::new();
        chat.ask("вопрос", Instant::now());
        let input = ChatInput::default();
        let theme = Theme::default();

        for line in lines(&chat, &input, false, &theme, 40) {
            assert!(line.width() <= 46, "line too wide: {}", line.width());
        }
    }
}
