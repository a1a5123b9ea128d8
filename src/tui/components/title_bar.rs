//! # TitleBar Component
//!
//! Top status bar showing where the navigator is and what it is doing.
//!
//! ## Conditional Formatting
//!
//! The title text grows with what is going on:
//!
//! 1. **Transition running**: `"rootnav | main | fade 300ms #2 (1 queued)"`
//! 2. **Deep link stored**: `"rootnav | main | link: {"route":"inbox"}"`
//! 3. **Default**: `"rootnav | splash"`
//!
//! Segments are appended in that order so the state is always visible,
//! even on narrow terminals.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::state::ScreenState;
use crate::tui::component::Component;

/// Top status bar. All fields are props supplied by the event loop.
pub struct TitleBar {
    pub state: ScreenState,
    /// Description of the running transition, e.g. "fade 300ms #2".
    pub transition: Option<String>,
    pub queued: usize,
    pub deeplink: Option<String>,
}

impl TitleBar {
    pub fn text(&self) -> String {
        let mut text = format!("rootnav | {}", self.state);
        if let Some(transition) = &self.transition {
            text.push_str(&format!(" | {transition}"));
            if self.queued > 0 {
                text.push_str(&format!(" ({} queued)", self.queued));
            }
        }
        if let Some(link) = &self.deeplink {
            text.push_str(&format!(" | link: {link}"));
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let line =
            Line::from(Span::styled(self.text(), style)).style(Style::default().bg(Color::Yellow));
        frame.render_widget(line, area);
    }
}
