//! Application state definitions

use crate::chat::Chat;
use crate::content::{self, SectionId};
use crate::player::Radio;
use crate::quiz::Quiz;

/// Which widget receives key input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Page,
    Chat,
    Quiz,
}

/// How a navigation jump moves the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    /// Eased, tick-driven scroll
    Smooth,
    /// Immediate jump, the browser-default analog
    Instant,
}

/// State for the page scroll position
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Current scroll position (lines from top)
    pub offset: usize,
    /// Animation target, if a smooth scroll is in flight
    pub target: Option<usize>,
    /// Total rendered lines (updated on render)
    pub total_lines: usize,
    /// Visible height in lines (updated on render)
    pub visible_height: usize,
}

impl ScrollState {
    /// Get the maximum allowed scroll offset
    pub fn max_scroll(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_height)
    }

    /// Clamp scroll offset to valid range
    pub fn clamp(&mut self) {
        let max = self.max_scroll();
        if self.offset > max {
            self.offset = max;
        }
    }

    /// Manual scroll; cancels any in-flight animation
    pub fn scroll_by(&mut self, delta: isize) {
        self.target = None;
        self.offset = self.offset.saturating_add_signed(delta).min(self.max_scroll());
    }

    /// Jump to a line, animated or instant
    pub fn jump(&mut self, line: usize, kind: JumpKind) {
        let line = line.min(self.max_scroll());
        match kind {
            JumpKind::Smooth => self.target = Some(line),
            JumpKind::Instant => {
                self.target = None;
                self.offset = line;
            }
        }
    }

    /// Advance the animation one frame: ease out by closing a quarter of the
    /// remaining distance, at least one line
    pub fn tick(&mut self) {
        let Some(target) = self.target else { return };
        if self.offset == target {
            self.target = None;
            return;
        }
        let distance = target.abs_diff(self.offset);
        let step = (distance / 4).max(1);
        if self.offset < target {
            self.offset += step;
        } else {
            self.offset -= step;
        }
        if self.offset == target {
            self.target = None;
        }
    }
}

/// Line range a section occupies in the rendered page (updated on render)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub id: SectionId,
    pub start: usize,
    pub end: usize,
}

impl SectionSpan {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Minimum visible share of a section, in percent, to trigger its reveal
pub const REVEAL_THRESHOLD_PERCENT: usize = 15;

/// One-shot reveal flags, one per section. A revealed section stays revealed
/// regardless of later scrolling.
#[derive(Debug, Clone)]
pub struct RevealState {
    revealed: Vec<bool>,
}

impl RevealState {
    pub fn new(count: usize) -> Self {
        Self { revealed: vec![false; count] }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Check every not-yet-revealed section against the viewport and flag the
    /// ones that cross the visibility threshold. Already revealed sections
    /// are never re-checked.
    pub fn observe(&mut self, spans: &[SectionSpan], viewport_top: usize, viewport_height: usize) {
        let viewport_bottom = viewport_top + viewport_height;
        for (index, span) in spans.iter().enumerate() {
            if self.is_revealed(index) {
                continue;
            }
            let overlap_start = span.start.max(viewport_top);
            let overlap_end = span.end.min(viewport_bottom);
            let overlap = overlap_end.saturating_sub(overlap_start);
            if span.is_empty() || overlap * 100 >= span.len() * REVEAL_THRESHOLD_PERCENT {
                if let Some(flag) = self.revealed.get_mut(index) {
                    *flag = true;
                }
            }
        }
    }
}

/// State for the chat input line
#[derive(Debug, Clone, Default)]
pub struct ChatInput {
    /// Input buffer
    pub input: String,
    /// Cursor position in input, as a character index
    pub cursor: usize,
}

impl ChatInput {
    /// Convert character index to byte index
    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.input.char_indices().nth(char_idx).map(|(i, _)| i).unwrap_or(self.input.len())
    }

    /// Get the number of characters in input
    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Insert a character at cursor
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.char_to_byte_index(self.cursor);
        self.input.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.input.remove(byte_idx);
        }
    }

    /// Delete character at cursor
    pub fn delete_char_forward(&mut self) {
        if self.cursor < self.char_count() {
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.input.remove(byte_idx);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// The input split at the cursor, for rendering
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.input.split_at(self.char_to_byte_index(self.cursor))
    }

    /// Take the buffer for submission, clearing the input line
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.input)
    }
}

/// Full application state
#[derive(Debug)]
pub struct AppState {
    /// Which widget receives key input
    pub focus: Focus,

    /// Page scroll position
    pub scroll: ScrollState,

    /// Section line ranges from the last render
    pub spans: Vec<SectionSpan>,

    /// One-shot reveal flags
    pub reveal: RevealState,

    /// Example tab switcher
    pub tabs: content::ExampleTabs,

    /// Chat lab
    pub chat: Chat,

    /// Chat input line
    pub chat_input: ChatInput,

    /// Quiz
    pub quiz: Quiz,

    /// Lofi radio
    pub radio: Radio,
}

impl AppState {
    pub fn new(radio: Radio) -> Self {
        Self {
            focus: Focus::default(),
            scroll: ScrollState::default(),
            spans: Vec::new(),
            reveal: RevealState::new(content::SECTIONS.len()),
            tabs: content::ExampleTabs::new(),
            chat: Chat::new(),
            chat_input: ChatInput::default(),
            quiz: Quiz::new(),
            radio,
        }
    }

    /// First line of a section in the rendered page, if it has been laid out
    pub fn section_start(&self, id: SectionId) -> Option<usize> {
        self.spans.iter().find(|span| span.id == id).map(|span| span.start)
    }

    /// Flag sections crossing the visibility threshold as revealed
    pub fn observe_reveals(&mut self) {
        self.reveal.observe(&self.spans, self.scroll.offset, self.scroll.visible_height);
    }
}
