//! # Diagnostics
//!
//! Non-fatal conditions the navigator reports instead of failing. Every
//! diagnostic goes to the `log` facade, and to an injected sink if one was
//! given, so tests and hosts can observe redundant caller invocations.

use log::{debug, warn};
use std::fmt;

use crate::core::host::TransitionId;
use crate::core::state::ScreenState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A transition to the already-current state was requested.
    RedundantTransition { state: ScreenState },
    /// Onboarding was requested but the provider has no onboarding unit.
    MissingOnboardingUnit,
    /// A swap was accepted while another was animating and now waits its turn.
    TransitionQueued { target: ScreenState, pending: usize },
    /// The host reported completion for a transition that is not running.
    StaleCompletion { id: TransitionId },
}

impl Diagnostic {
    pub(crate) fn log(&self) {
        match self {
            Diagnostic::RedundantTransition { .. } | Diagnostic::StaleCompletion { .. } => {
                warn!("{self}")
            }
            Diagnostic::MissingOnboardingUnit | Diagnostic::TransitionQueued { .. } => {
                debug!("{self}")
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::RedundantTransition { state } => {
                write!(f, "already showing {state}, transition ignored")
            }
            Diagnostic::MissingOnboardingUnit => {
                f.write_str("no onboarding screen, skipping onboarding")
            }
            Diagnostic::TransitionQueued { target, pending } => {
                write!(f, "transition to {target} queued ({pending} pending)")
            }
            Diagnostic::StaleCompletion { id } => {
                write!(f, "completion for transition {id} ignored, not in flight")
            }
        }
    }
}

/// Receives every diagnostic the navigator reports.
pub type DiagnosticSink = Box<dyn FnMut(&Diagnostic)>;
