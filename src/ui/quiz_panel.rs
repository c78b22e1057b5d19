//! Quiz rendering: progress bar, questions and the grading result

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::quiz::{GradeOutcome, Quiz, Verdict};
use crate::theme::Theme;

const PROGRESS_WIDTH: usize = 30;

/// Lines for the quiz section
pub fn lines(quiz: &Quiz, focused: bool, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    lines.push(progress_line(quiz, theme));
    lines.push(Line::from(""));

    for (index, question) in quiz.questions().iter().enumerate() {
        let under_cursor = focused && index == quiz.cursor;
        let marker = if under_cursor { "▸ " } else { "  " };

        let prompt_color = match question.verdict() {
            Some(Verdict::Correct) => theme.success,
            Some(Verdict::Wrong) => theme.error,
            None => theme.fg_secondary,
        };

        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), Style::default().fg(theme.accent_primary)),
            Span::styled(
                format!("{}. {}", index + 1, question.prompt),
                Style::default().fg(prompt_color).add_modifier(Modifier::BOLD),
            ),
        ]));

        for (opt_index, option) in question.options.iter().enumerate() {
            let chosen = question.selected() == Some(opt_index);
            let bullet = if chosen { "●" } else { "○" };
            let style = if chosen {
                Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg_primary)
            };
            lines.push(Line::from(Span::styled(
                format!("    {} {}) {}", bullet, opt_index + 1, option),
                style,
            )));
        }
        lines.push(Line::from(""));
    }

    match quiz.last_outcome() {
        Some(outcome) => {
            let style = match outcome {
                GradeOutcome::Incomplete => Style::default().fg(theme.warning),
                GradeOutcome::Scored { correct, total, .. } if correct == total => {
                    Style::default().fg(theme.success).add_modifier(Modifier::BOLD)
                }
                GradeOutcome::Scored { .. } => Style::default().fg(theme.fg_secondary),
            };
            lines.push(Line::from(Span::styled(outcome.message(), style)));
        }
        None => {
            let hint = if focused {
                "[1-3] выбрать ответ    [j/k] вопрос    [Enter] проверить"
            } else {
                "[e] перейти к тесту"
            };
            lines.push(Line::from(Span::styled(
                hint.to_string(),
                Style::default().fg(theme.fg_muted),
            )));
        }
    }

    lines
}

/// Answered/total as a proportional fill bar
fn progress_line(quiz: &Quiz, theme: &Theme) -> Line<'static> {
    let percent = quiz.progress_percent() as usize;
    let filled = percent * PROGRESS_WIDTH / 100;

    Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(theme.accent_primary)),
        Span::styled(
            "░".repeat(PROGRESS_WIDTH - filled),
            Style::default().fg(theme.bg_tertiary),
        ),
        Span::styled(format!(" {percent}%"), Style::default().fg(theme.fg_muted)),
    ])
}
