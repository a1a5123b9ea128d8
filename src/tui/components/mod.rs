//! # TUI Components
//!
//! All UI components for the terminal demo host.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: navigator state, running transition, stored deep link
//! - `ScreenView`: one screen card, optionally dimmed mid-transition
//!
//! ### Stateful Components
//!
//! - `EventLog` / `EventLogView`: bounded record of commands, diagnostics
//!   and deep-link dispatches, shared with the navigator's callbacks
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── screen_view.rs   (One screen card)
//! └── event_log.rs     (Event record + view)
//! ```

pub mod event_log;
pub mod screen_view;
pub mod title_bar;

pub use event_log::{EntryKind, EventLog, EventLogView};
pub use screen_view::ScreenView;
pub use title_bar::TitleBar;
