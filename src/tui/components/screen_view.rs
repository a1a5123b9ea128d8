//! # ScreenView Component
//!
//! Draws one `ScreenCard`: a bordered panel titled with the screen kind and
//! instance, a short description, and the keys that move away from it.
//!
//! The card itself is opaque to the navigator, so everything shown here is
//! derived from `ScreenKind` alone.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::core::state::ScreenKind;
use crate::tui::component::Component;
use crate::tui::host::ScreenCard;

pub struct ScreenView {
    pub card: ScreenCard,
    /// Mid-transition rendering.
    pub dimmed: bool,
}

impl ScreenView {
    pub fn new(card: ScreenCard, dimmed: bool) -> Self {
        Self { card, dimmed }
    }

    fn accent(kind: ScreenKind) -> Color {
        match kind {
            ScreenKind::Splash => Color::Yellow,
            ScreenKind::Login => Color::Cyan,
            ScreenKind::Onboarding => Color::Magenta,
            ScreenKind::Main => Color::Green,
            ScreenKind::Logout => Color::Red,
        }
    }

    fn description(kind: ScreenKind) -> &'static str {
        match kind {
            ScreenKind::Splash => "Starting up",
            ScreenKind::Login => "Sign in to continue",
            ScreenKind::Onboarding => "A quick tour before you begin. Press m when done",
            ScreenKind::Main => "You are in. Deep links land here",
            ScreenKind::Logout => "Signed out",
        }
    }
}

impl Component for ScreenView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let accent = Self::accent(self.card.kind);
        let mut style = Style::default().fg(accent);
        if self.dimmed {
            style = style.add_modifier(Modifier::DIM);
        }

        let block = Block::bordered()
            .title(format!(" {} #{} ", self.card.kind.label(), self.card.instance))
            .border_style(style)
            .title_style(style.add_modifier(Modifier::BOLD));
        let inner = block.inner(area);

        // Layers overlap during slides; clear what is underneath first
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(Span::styled(
                self.card.kind.label().to_uppercase(),
                style.add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                Self::description(self.card.kind),
                Style::default().fg(Color::Gray),
            )),
        ];
        let [body] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(inner);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
    }
}
