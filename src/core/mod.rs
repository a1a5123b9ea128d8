//! # Navigation Core
//!
//! The screen navigation state machine. It knows nothing about any
//! specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Navigator (states)   │
//!                    │  • TransitionEngine     │
//!                    │  • ScreenProvider       │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │ HostContainer
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   Tests    │      │  Your UI   │
//!     │  Adapter   │      │ (recording │      │  toolkit   │
//!     │ (ratatui)  │      │   fake)    │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `ScreenState` and `ScreenKind`
//! - [`screen`]: the `ScreenProvider` contract and the closure-built `ScreenSet`
//! - [`host`]: the `HostContainer` contract the core drives
//! - [`transition`]: styles, policy, and the mount/unmount engine
//! - [`navigator`]: the `Navigator` state machine and deep-link slot
//! - [`diagnostic`]: non-fatal conditions reported by the navigator
//! - [`config`]: config file and override resolution

pub mod config;
pub mod diagnostic;
pub mod host;
pub mod navigator;
pub mod screen;
pub mod state;
pub mod transition;

// Re-export commonly used types for convenience
pub use diagnostic::Diagnostic;
pub use host::{Animation, Bounds, Effect, HostContainer, TransitionId};
pub use navigator::{ActiveScreen, Navigator, NavigatorOptions, SimpleNavigator};
pub use screen::{ScreenError, ScreenProvider, ScreenSet};
pub use state::{ScreenKind, ScreenState};
pub use transition::{SlideEdge, TransitionPolicy, TransitionStyle};
