//! Example tab switcher rendering

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::content::{EXAMPLES, ExampleTabs};
use crate::theme::Theme;

/// Lines for the examples section: tab row, descriptive text, code sample
pub fn lines(tabs: &ExampleTabs, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // Tab row
    let mut tab_spans: Vec<Span<'static>> = Vec::new();
    for (index, example) in EXAMPLES.iter().enumerate() {
        let active = index == tabs.active_index();
        let style = if active {
            Style::default()
                .fg(theme.accent_primary)
                .bg(theme.selection)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_muted)
        };
        tab_spans.push(Span::styled(format!(" [{}] {} ", index + 1, example.label), style));
        tab_spans.push(Span::raw(" "));
    }
    lines.push(Line::from(tab_spans));
    lines.push(Line::from(""));

    // Descriptive text, verbatim
    let example = tabs.active();
    for wrapped in textwrap::wrap(example.text, width) {
        lines.push(Line::from(Span::styled(
            wrapped.into_owned(),
            Style::default().fg(theme.fg_primary),
        )));
    }
    lines.push(Line::from(""));

    // Code sample, verbatim, no formatting transformation
    for code_line in example.code.lines() {
        lines.push(Line::from(Span::styled(
            format!("  {code_line}"),
            Style::default().fg(theme.code).bg(theme.bg_secondary),
        )));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn active_example_content_is_shown_verbatim() {
        let mut tabs = ExampleTabs::new();
        tabs.select("vision");
        let theme = Theme::default();

        let text = rendered_text(&lines(&tabs, &theme, 80));
        assert!(text.contains("Компьютерное зрение"));
        assert!(text.contains("img -> preprocess -> model.predict -> decode_objects"));
    }

    #[test]
    fn every_tab_label_is_listed() {
        let tabs = ExampleTabs::new();
        let theme = Theme::default();
        let text = rendered_text(&lines(&tabs, &theme, 80));
        for example in EXAMPLES {
            assert!(text.contains(example.label));
        }
    }
}
