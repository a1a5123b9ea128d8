//! # EventLog Component
//!
//! A bounded, timestamped record of what the navigator did: commands issued
//! from the keyboard, diagnostics it reported, and deep links it dispatched.
//! `EventLog` is the state; `EventLogView` renders the newest entries that
//! fit, oldest at the top.

use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use std::collections::VecDeque;

use crate::tui::component::Component;

pub const MAX_ENTRIES: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Command,
    Diagnostic,
    Deeplink,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub at: DateTime<Local>,
    pub kind: EntryKind,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct EventLog {
    entries: VecDeque<LogEntry>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: EntryKind, text: impl Into<String>) {
        if self.entries.len() == MAX_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            at: Local::now(),
            kind,
            text: text.into(),
        });
    }

    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &LogEntry> + ExactSizeIterator {
        self.entries.iter()
    }
}

pub struct EventLogView<'a> {
    pub log: &'a EventLog,
}

impl Component for EventLogView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Events ")
            .border_style(Style::default().fg(Color::DarkGray));
        let visible = block.inner(area).height as usize;

        let mut lines: Vec<Line> = self
            .log
            .entries()
            .rev()
            .take(visible)
            .map(|entry| {
                let color = match entry.kind {
                    EntryKind::Command => Color::White,
                    EntryKind::Diagnostic => Color::Yellow,
                    EntryKind::Deeplink => Color::Cyan,
                };
                Line::from(vec![
                    Span::styled(
                        entry.at.format("%H:%M:%S ").to_string(),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(entry.text.clone(), Style::default().fg(color)),
                ])
            })
            .collect();
        lines.reverse();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
