//! # Screen State
//!
//! The top-level states the navigator moves between, plus the kinds of screen
//! units a provider can be asked for.
//!
//! ```text
//!            ┌──────────┐
//!  none ───▶ │  splash  │  (initial mount, no animation)
//!            └────┬─────┘
//!                 │ any command
//!       ┌─────────┼──────────┬─────────────┐
//!       ▼         ▼          ▼             ▼
//!    login    onboarding    main         logout
//! ```
//!
//! `None` only exists before the first unit is mounted. Once a `Navigator`
//! has been constructed it never reports `None` again.

use std::fmt;

/// The current top-level state of the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenState {
    Splash,
    Login,
    Logout,
    Main,
    Onboarding,
    /// Pre-initialization only.
    #[default]
    None,
}

impl ScreenState {
    pub fn is_initialized(&self) -> bool {
        !matches!(self, ScreenState::None)
    }
}

impl fmt::Display for ScreenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScreenState::Splash => "splash",
            ScreenState::Login => "login",
            ScreenState::Logout => "logout",
            ScreenState::Main => "main",
            ScreenState::Onboarding => "onboarding",
            ScreenState::None => "none",
        };
        f.write_str(name)
    }
}

/// A kind of screen unit a `ScreenProvider` supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    Splash,
    Login,
    Logout,
    Main,
    Onboarding,
}

impl ScreenKind {
    pub fn label(&self) -> &'static str {
        match self {
            ScreenKind::Splash => "Splash",
            ScreenKind::Login => "Login",
            ScreenKind::Logout => "Logout",
            ScreenKind::Main => "Main",
            ScreenKind::Onboarding => "Onboarding",
        }
    }
}

impl From<ScreenKind> for ScreenState {
    fn from(kind: ScreenKind) -> Self {
        match kind {
            ScreenKind::Splash => ScreenState::Splash,
            ScreenKind::Login => ScreenState::Login,
            ScreenKind::Logout => ScreenState::Logout,
            ScreenKind::Main => ScreenState::Main,
            ScreenKind::Onboarding => ScreenState::Onboarding,
        }
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&ScreenState::from(*self), f)
    }
}
