//! Key-to-action mapping, one table per focus

use crossterm::event::{KeyCode, KeyModifiers};

use super::state::JumpKind;
use crate::content::SectionId;

/// Actions that can be taken in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Page scrolling
    Up,
    Down,
    PageUp,
    PageDown,
    HalfPageUp,
    HalfPageDown,
    Top,
    Bottom,

    // Navigation buttons and anchors
    Jump(SectionId, JumpKind),

    // Example tabs; `scroll` marks the pill-link variant that also scrolls
    // to the examples section
    SelectExample { index: usize, scroll: bool },

    // Preferences
    ToggleMode,
    CycleTheme,

    // Radio
    ToggleRadio,
    CloseRadio,
    PlayPause,
    NextTrack,
    VolumeUp,
    VolumeDown,

    // Focus changes
    FocusChat,
    FocusQuiz,
    Back,

    // Chat
    AskHint(usize),
    InsertChar(char),
    Backspace,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorStart,
    CursorEnd,
    SubmitChat,

    // Quiz
    QuizUp,
    QuizDown,
    QuizChoose(usize),
    Grade,

    Quit,
}

/// Key mapping while the page has focus
pub fn page_key_to_action(key: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match key {
            KeyCode::Char('d') => Some(Action::HalfPageDown),
            KeyCode::Char('u') => Some(Action::HalfPageUp),
            KeyCode::Char('f') => Some(Action::PageDown),
            KeyCode::Char('b') => Some(Action::PageUp),
            _ => None,
        };
    }

    if modifiers.contains(KeyModifiers::ALT) {
        // Alt-digit is the pill-link variant: select and scroll to examples
        return match key {
            KeyCode::Char(c @ '1'..='4') => Some(Action::SelectExample {
                index: c as usize - '1' as usize,
                scroll: true,
            }),
            _ => None,
        };
    }

    match key {
        KeyCode::Char('j') | KeyCode::Down => Some(Action::Down),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::Up),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::Top),
        KeyCode::Char('G') | KeyCode::End => Some(Action::Bottom),

        // "Start learning" and "to the lab" buttons; SHIFT keeps the
        // browser-default behavior of an instant jump
        KeyCode::Char('a') => Some(Action::Jump(SectionId::About, JumpKind::Smooth)),
        KeyCode::Char('A') => Some(Action::Jump(SectionId::About, JumpKind::Instant)),
        KeyCode::Char('l') => Some(Action::Jump(SectionId::Lab, JumpKind::Smooth)),
        KeyCode::Char('L') => Some(Action::Jump(SectionId::Lab, JumpKind::Instant)),
        KeyCode::Char('x') => Some(Action::Jump(SectionId::Examples, JumpKind::Smooth)),
        KeyCode::Char('X') => Some(Action::Jump(SectionId::Examples, JumpKind::Instant)),

        KeyCode::Char(c @ '1'..='4') => Some(Action::SelectExample {
            index: c as usize - '1' as usize,
            scroll: false,
        }),

        KeyCode::Char('m') => Some(Action::ToggleMode),
        KeyCode::Char('t') => Some(Action::CycleTheme),

        KeyCode::Char('r') => Some(Action::ToggleRadio),

        KeyCode::Char('i') | KeyCode::Char('/') => Some(Action::FocusChat),
        KeyCode::Char('e') => Some(Action::FocusQuiz),
        KeyCode::F(n @ 1..=4) => Some(Action::AskHint(n as usize - 1)),

        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

/// Key mapping while the radio panel is open; unhandled keys fall through to
/// the focused widget
pub fn radio_key_to_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char(' ') => Some(Action::PlayPause),
        KeyCode::Char('n') => Some(Action::NextTrack),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => Some(Action::VolumeUp),
        KeyCode::Char('-') | KeyCode::Left => Some(Action::VolumeDown),
        KeyCode::Esc => Some(Action::CloseRadio),
        _ => None,
    }
}

/// Key mapping while the chat input line has focus
pub fn chat_key_to_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Enter => Some(Action::SubmitChat),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Delete => Some(Action::DeleteForward),
        KeyCode::Left => Some(Action::CursorLeft),
        KeyCode::Right => Some(Action::CursorRight),
        KeyCode::Home => Some(Action::CursorStart),
        KeyCode::End => Some(Action::CursorEnd),
        KeyCode::F(n @ 1..=4) => Some(Action::AskHint(n as usize - 1)),
        KeyCode::Char(c) => Some(Action::InsertChar(c)),
        _ => None,
    }
}

/// Key mapping while the quiz has focus
pub fn quiz_key_to_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::QuizDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::QuizUp),
        KeyCode::Char(c @ '1'..='9') => Some(Action::QuizChoose(c as usize - '1' as usize)),
        KeyCode::Enter => Some(Action::Grade),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vim_j_scrolls_down() {
        assert_eq!(page_key_to_action(KeyCode::Char('j'), KeyModifiers::NONE), Some(Action::Down));
        assert_eq!(page_key_to_action(KeyCode::Down, KeyModifiers::NONE), Some(Action::Down));
    }

    #[test]
    fn unknown_key_returns_none() {
        assert_eq!(page_key_to_action(KeyCode::Char('z'), KeyModifiers::NONE), None);
    }

    #[test]
    fn nav_keys_scroll_smoothly() {
        assert_eq!(
            page_key_to_action(KeyCode::Char('a'), KeyModifiers::NONE),
            Some(Action::Jump(SectionId::About, JumpKind::Smooth))
        );
        assert_eq!(
            page_key_to_action(KeyCode::Char('l'), KeyModifiers::NONE),
            Some(Action::Jump(SectionId::Lab, JumpKind::Smooth))
        );
    }

    #[test]
    fn shifted_nav_keys_jump_instantly() {
        assert_eq!(
            page_key_to_action(KeyCode::Char('A'), KeyModifiers::SHIFT),
            Some(Action::Jump(SectionId::About, JumpKind::Instant))
        );
        assert_eq!(
            page_key_to_action(KeyCode::Char('L'), KeyModifiers::SHIFT),
            Some(Action::Jump(SectionId::Lab, JumpKind::Instant))
        );
    }

    #[test]
    fn digits_select_example_tabs() {
        assert_eq!(
            page_key_to_action(KeyCode::Char('1'), KeyModifiers::NONE),
            Some(Action::SelectExample { index: 0, scroll: false })
        );
        assert_eq!(
            page_key_to_action(KeyCode::Char('4'), KeyModifiers::NONE),
            Some(Action::SelectExample { index: 3, scroll: false })
        );
        assert_eq!(page_key_to_action(KeyCode::Char('5'), KeyModifiers::NONE), None);
    }

    #[test]
    fn alt_digit_is_the_pill_variant() {
        assert_eq!(
            page_key_to_action(KeyCode::Char('2'), KeyModifiers::ALT),
            Some(Action::SelectExample { index: 1, scroll: true })
        );
    }

    #[test]
    fn ctrl_d_half_page_down() {
        assert_eq!(
            page_key_to_action(KeyCode::Char('d'), KeyModifiers::CONTROL),
            Some(Action::HalfPageDown)
        );
    }

    #[test]
    fn radio_keys_only_apply_when_panel_open() {
        assert_eq!(radio_key_to_action(KeyCode::Char(' ')), Some(Action::PlayPause));
        assert_eq!(radio_key_to_action(KeyCode::Char('n')), Some(Action::NextTrack));
        assert_eq!(radio_key_to_action(KeyCode::Char('j')), None);
    }

    #[test]
    fn chat_focus_inserts_plain_characters() {
        assert_eq!(chat_key_to_action(KeyCode::Char('q')), Some(Action::InsertChar('q')));
        assert_eq!(chat_key_to_action(KeyCode::Enter), Some(Action::SubmitChat));
        assert_eq!(chat_key_to_action(KeyCode::Esc), Some(Action::Back));
    }

    #[test]
    fn hint_keys_work_in_page_and_chat_focus() {
        assert_eq!(page_key_to_action(KeyCode::F(1), KeyModifiers::NONE), Some(Action::AskHint(0)));
        assert_eq!(chat_key_to_action(KeyCode::F(4)), Some(Action::AskHint(3)));
        assert_eq!(page_key_to_action(KeyCode::F(5), KeyModifiers::NONE), None);
    }

    #[test]
    fn quiz_focus_chooses_options_by_digit() {
        assert_eq!(quiz_key_to_action(KeyCode::Char('1')), Some(Action::QuizChoose(0)));
        assert_eq!(quiz_key_to_action(KeyCode::Char('3')), Some(Action::QuizChoose(2)));
        assert_eq!(quiz_key_to_action(KeyCode::Enter), Some(Action::Grade));
    }
}
