//! rootnav library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// How the demo wires up onboarding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingMode {
    /// Onboarding exists and is shown before main.
    #[default]
    Before,
    /// Onboarding exists but main does not wait for it.
    Skip,
    /// No onboarding screen at all.
    Unavailable,
}
