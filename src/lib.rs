//! Ailab - an interactive terminal page for learning the basics of AI
//!
//! Ailab renders a single scrollable "page" of sections about AI concepts:
//! sections reveal as they scroll into view, a tabbed example viewer, a
//! canned-answer chat lab, a self-graded quiz, and a lofi radio widget.

pub mod app;
pub mod chat;
pub mod config;
pub mod content;
pub mod player;
pub mod quiz;
pub mod theme;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use theme::Theme;
