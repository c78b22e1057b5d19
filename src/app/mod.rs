//! Application loop and event handling

pub mod input;
pub mod state;

use std::io::{self, Stdout};
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::chat;
use crate::config::Config;
use crate::player::{Playback, Radio};
use crate::ui;
use input::Action;
use state::{AppState, Focus};

/// The main application
pub struct App {
    /// Application configuration
    config: Config,

    /// Current application state
    state: AppState,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config, playback: Box<dyn Playback>) -> Result<Self> {
        let terminal = Self::setup_terminal()?;

        Ok(Self { config, state: AppState::new(Radio::new(playback)), terminal })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        loop {
            // Draw UI; rendering also records the page layout the reveal
            // check needs
            let config = &self.config;
            let state = &mut self.state;
            self.terminal.draw(|frame| {
                ui::draw(frame, state, config);
            })?;

            // Handle events
            if event::poll(std::time::Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press
                        && self.handle_key(key.code, key.modifiers)?
                    {
                        break;
                    }
                }
            }

            self.tick();
        }

        self.restore_terminal()?;
        Ok(())
    }

    /// Advance time-driven state one frame
    fn tick(&mut self) {
        let now = Instant::now();
        self.state.scroll.tick();
        self.state.chat.poll(now);
        self.state.radio.tick();
        self.state.observe_reveals();
    }

    /// Handle a key press, returns true if should exit
    fn handle_key(
        &mut self,
        key: crossterm::event::KeyCode,
        modifiers: crossterm::event::KeyModifiers,
    ) -> Result<bool> {
        // The radio panel overlays everything; its keys win while it is open
        if self.state.radio.panel_open {
            if let Some(action) = input::radio_key_to_action(key) {
                return Ok(self.apply(action));
            }
        }

        let action = match self.state.focus {
            Focus::Page => input::page_key_to_action(key, modifiers),
            Focus::Chat => input::chat_key_to_action(key),
            Focus::Quiz => input::quiz_key_to_action(key),
        };

        match action {
            Some(action) => Ok(self.apply(action)),
            None => Ok(false),
        }
    }

    /// Apply an action to the state, returns true if should exit
    fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,

            Action::Up => self.state.scroll.scroll_by(-1),
            Action::Down => self.state.scroll.scroll_by(1),
            Action::PageUp => {
                let page = self.state.scroll.visible_height as isize;
                self.state.scroll.scroll_by(-page);
            }
            Action::PageDown => {
                let page = self.state.scroll.visible_height as isize;
                self.state.scroll.scroll_by(page);
            }
            Action::HalfPageUp => {
                let half = (self.state.scroll.visible_height / 2) as isize;
                self.state.scroll.scroll_by(-half);
            }
            Action::HalfPageDown => {
                let half = (self.state.scroll.visible_height / 2) as isize;
                self.state.scroll.scroll_by(half);
            }
            Action::Top => self.state.scroll.jump(0, state::JumpKind::Instant),
            Action::Bottom => {
                let bottom = self.state.scroll.max_scroll();
                self.state.scroll.jump(bottom, state::JumpKind::Instant);
            }

            Action::Jump(section, kind) => {
                // A target that resolves to no section is a no-op
                if let Some(line) = self.state.section_start(section) {
                    self.state.scroll.jump(line, kind);
                }
            }

            Action::SelectExample { index, scroll } => {
                if self.state.tabs.select_index(index) && scroll {
                    self.apply(Action::Jump(
                        crate::content::SectionId::Examples,
                        state::JumpKind::Smooth,
                    ));
                }
            }

            Action::ToggleMode => {
                let mode = self.config.display_mode().toggled();
                if let Err(e) = self.config.set_display_mode(mode) {
                    tracing::debug!("could not persist display mode: {e:#}");
                }
            }
            Action::CycleTheme => {
                let theme = self.config.color_theme().next();
                if let Err(e) = self.config.set_color_theme(theme) {
                    tracing::debug!("could not persist color theme: {e:#}");
                }
            }

            Action::ToggleRadio => self.state.radio.toggle_panel(),
            Action::CloseRadio => self.state.radio.close_panel(),
            Action::PlayPause => self.state.radio.play_pause(),
            Action::NextTrack => self.state.radio.next(),
            Action::VolumeUp => self.state.radio.volume_up(),
            Action::VolumeDown => self.state.radio.volume_down(),

            Action::FocusChat => self.state.focus = Focus::Chat,
            Action::FocusQuiz => self.state.focus = Focus::Quiz,
            Action::Back => self.state.focus = Focus::Page,

            Action::AskHint(index) => {
                if let Some(hint) = chat::HINTS.get(index) {
                    self.state.chat.ask(hint, Instant::now());
                }
            }
            Action::InsertChar(c) => self.state.chat_input.insert_char(c),
            Action::Backspace => self.state.chat_input.delete_char(),
            Action::DeleteForward => self.state.chat_input.delete_char_forward(),
            Action::CursorLeft => self.state.chat_input.move_left(),
            Action::CursorRight => self.state.chat_input.move_right(),
            Action::CursorStart => self.state.chat_input.move_start(),
            Action::CursorEnd => self.state.chat_input.move_end(),
            Action::SubmitChat => {
                let question = self.state.chat_input.take();
                self.state.chat.ask(&question, Instant::now());
            }

            Action::QuizUp => self.state.quiz.cursor_up(),
            Action::QuizDown => self.state.quiz.cursor_down(),
            Action::QuizChoose(option) => self.state.quiz.choose(option),
            Action::Grade => {
                self.state.quiz.grade();
            }
        }
        false
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}
