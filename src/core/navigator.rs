//! # Navigator
//!
//! The single-screen state machine. Owns the current state, the mounted unit
//! (through the `TransitionEngine`), the optional deep-link payload, and the
//! host container everything is drawn into.
//!
//! ```text
//! command ──▶ guard (already there?) ──▶ state := target ──▶ engine.swap(style)
//!                    │                                            │
//!                    └─▶ Diagnostic::RedundantTransition          ▼
//!                                                   host animates, then calls
//!                                                   complete_transition(id)
//!                                                                 │
//!                                        main only: deliver deep link ◀┘
//! ```
//!
//! ## Threading
//!
//! Everything runs on one UI thread. Commands return before an animated swap
//! finishes; the host reports completion later through
//! [`Navigator::complete_transition`]. Commands issued while a swap is
//! animating are accepted (state changes immediately) and their swaps queue
//! behind the running one.
//!
//! ## Deep links
//!
//! [`Navigator::set_deeplink`] dispatches immediately, whatever the state.
//! Main settling on screen dispatches the stored payload a second time unless
//! [`NavigatorOptions::redeliver_deeplink_on_main`] is turned off, or another
//! swap is already queued to replace it.
//!
//! Handlers receive the settled unit together with the state it was mounted
//! for, which lags [`Navigator::state`] while a swap is animating.

use log::{debug, info, warn};

use crate::core::diagnostic::{Diagnostic, DiagnosticSink};
use crate::core::host::{HostContainer, TransitionId};
use crate::core::screen::ScreenProvider;
use crate::core::state::ScreenState;
use crate::core::transition::{
    SwapOutcome, TransitionEngine, TransitionPolicy, TransitionRequest, TransitionStyle,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorOptions {
    pub transitions: TransitionPolicy,
    /// Dispatch the stored deep link again when main finishes appearing.
    pub redeliver_deeplink_on_main: bool,
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self {
            transitions: TransitionPolicy::default(),
            redeliver_deeplink_on_main: true,
        }
    }
}

/// The screen a deep link is delivered to.
#[derive(Debug)]
pub struct ActiveScreen<'a, U> {
    pub state: ScreenState,
    pub unit: &'a U,
}

pub type DeeplinkHandler<D, U> = Box<dyn FnMut(&D, ActiveScreen<'_, U>)>;

/// Handed back by the engine once a swap has settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Arrival {
    state: ScreenState,
    deliver_deeplink: bool,
}

pub struct Navigator<S: ScreenProvider, H, D> {
    screens: S,
    host: H,
    engine: TransitionEngine<S::Unit, Arrival>,
    state: ScreenState,
    /// The state of the settled unit.
    settled: ScreenState,
    options: NavigatorOptions,
    deeplink: Option<D>,
    deeplink_handler: Option<DeeplinkHandler<D, S::Unit>>,
    diagnostics: Option<DiagnosticSink>,
}

/// A navigator that never carries a deep link.
pub type SimpleNavigator<S, H> = Navigator<S, H, std::convert::Infallible>;

impl<S, H, D> Navigator<S, H, D>
where
    S: ScreenProvider,
    H: HostContainer<S::Unit>,
{
    /// Mount the provider's initial unit directly (no animation).
    pub fn new(screens: S, mut host: H, options: NavigatorOptions) -> Self {
        let engine = TransitionEngine::mount(&mut host, screens.initial_unit());
        let mut state = screens.initial_state();
        if !state.is_initialized() {
            warn!("Initial state cannot be none, using splash");
            state = ScreenState::Splash;
        }
        info!("Mounted initial screen ({state})");

        Self {
            screens,
            host,
            engine,
            state,
            settled: state,
            options,
            deeplink: None,
            deeplink_handler: None,
            diagnostics: None,
        }
    }

    pub fn with_deeplink_handler(
        mut self,
        handler: impl FnMut(&D, ActiveScreen<'_, S::Unit>) + 'static,
    ) -> Self {
        self.deeplink_handler = Some(Box::new(handler));
        self
    }

    pub fn with_diagnostics(mut self, sink: impl FnMut(&Diagnostic) + 'static) -> Self {
        self.diagnostics = Some(Box::new(sink));
        self
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    /// The state whose unit is settled on screen.
    pub fn settled_state(&self) -> ScreenState {
        self.settled
    }

    /// The settled unit. While a swap animates this is still the outgoing one.
    pub fn current_unit(&self) -> &S::Unit {
        self.engine.current()
    }

    pub fn incoming_unit(&self) -> Option<&S::Unit> {
        self.engine.incoming()
    }

    pub fn in_flight(&self) -> Option<TransitionId> {
        self.engine.in_flight()
    }

    pub fn is_transitioning(&self) -> bool {
        !self.engine.is_idle()
    }

    pub fn pending_transitions(&self) -> usize {
        self.engine.pending()
    }

    pub fn screens(&self) -> &S {
        &self.screens
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn options(&self) -> &NavigatorOptions {
        &self.options
    }

    pub fn deeplink(&self) -> Option<&D> {
        self.deeplink.as_ref()
    }

    pub fn show_login(&mut self) {
        if self.is_redundant(ScreenState::Login) {
            return;
        }
        let unit = self.screens.login_unit();
        self.navigate(ScreenState::Login, unit, self.options.transitions.login, false);
    }

    /// Returns `false`, without touching anything, when there is no
    /// onboarding unit or onboarding is already showing.
    pub fn show_onboarding(&mut self) -> bool {
        self.enter_onboarding(true)
    }

    pub fn switch_to_logout(&mut self) {
        if self.is_redundant(ScreenState::Logout) {
            return;
        }
        let unit = self.screens.logout_unit();
        self.navigate(ScreenState::Logout, unit, self.options.transitions.logout, false);
    }

    /// Onboarding pre-empts main whenever the provider asks for it and can
    /// supply it; the onboarding flow calls this again to finish the trip.
    pub fn switch_to_main(&mut self) {
        if self.is_redundant(ScreenState::Main) {
            return;
        }
        if self.screens.should_show_onboarding_before_main() && self.enter_onboarding(false) {
            debug!("Onboarding shown before main");
            return;
        }
        let unit = self.screens.main_unit();
        self.navigate(ScreenState::Main, unit, self.options.transitions.main, true);
    }

    /// Called by the host when animation `id` has finished. Returns `false`
    /// if `id` is not the transition in flight.
    ///
    /// Queued swaps start afterwards, one at a time, each arriving before the
    /// next begins. Draining stops at the first animated one.
    pub fn complete_transition(&mut self, id: TransitionId) -> bool {
        let Some(arrival) = self.engine.finish(&mut self.host, id) else {
            self.report(Diagnostic::StaleCompletion { id });
            return false;
        };
        debug!("Transition {id} complete");
        self.arrive(arrival);

        while let Some(outcome) = self.engine.start_next(&mut self.host) {
            match outcome {
                SwapOutcome::Completed(arrival) => self.arrive(arrival),
                SwapOutcome::Started(started) => {
                    debug!("Started queued transition {started}");
                    break;
                }
                SwapOutcome::Queued { .. } => break,
            }
        }
        true
    }

    /// Store `payload` and dispatch it right away.
    pub fn set_deeplink(&mut self, payload: D) {
        self.deeplink = Some(payload);
        self.dispatch_deeplink();
    }

    pub fn clear_deeplink(&mut self) -> Option<D> {
        self.deeplink.take()
    }

    /// Detach every mounted unit and give the host back.
    pub fn dismantle(self) -> H {
        let Navigator {
            mut host, engine, state, ..
        } = self;
        info!("Dismantling navigator in state {state}");
        engine.teardown(&mut host);
        host
    }

    fn enter_onboarding(&mut self, report_redundant: bool) -> bool {
        let Some(unit) = self.screens.onboarding_unit() else {
            self.report(Diagnostic::MissingOnboardingUnit);
            return false;
        };
        if self.state == ScreenState::Onboarding {
            if report_redundant {
                self.report(Diagnostic::RedundantTransition {
                    state: ScreenState::Onboarding,
                });
            }
            return false;
        }
        self.navigate(
            ScreenState::Onboarding,
            unit,
            self.options.transitions.onboarding,
            false,
        );
        true
    }

    fn is_redundant(&mut self, target: ScreenState) -> bool {
        if self.state == target {
            self.report(Diagnostic::RedundantTransition { state: target });
            return true;
        }
        false
    }

    fn navigate(
        &mut self,
        target: ScreenState,
        unit: S::Unit,
        style: TransitionStyle,
        deliver_deeplink: bool,
    ) {
        info!("Navigating {} -> {} ({})", self.state, target, style);
        self.state = target;
        let request = TransitionRequest {
            target: unit,
            style,
            completion: Arrival {
                state: target,
                deliver_deeplink,
            },
        };
        match self.engine.swap(&mut self.host, request) {
            SwapOutcome::Completed(arrival) => self.arrive(arrival),
            SwapOutcome::Started(_) => {}
            SwapOutcome::Queued { pending } => {
                self.report(Diagnostic::TransitionQueued { target, pending })
            }
        }
    }

    fn arrive(&mut self, arrival: Arrival) {
        self.settled = arrival.state;
        if !arrival.deliver_deeplink || !self.options.redeliver_deeplink_on_main {
            return;
        }
        if self.engine.pending() > 0 {
            debug!("Main is about to be replaced, deep link not redelivered");
            return;
        }
        self.dispatch_deeplink();
    }

    fn dispatch_deeplink(&mut self) {
        let Some(payload) = self.deeplink.as_ref() else {
            return;
        };
        let Some(handler) = self.deeplink_handler.as_mut() else {
            debug!("Deep link set but no handler installed");
            return;
        };
        debug!("Dispatching deep link to settled {}", self.settled);
        handler(
            payload,
            ActiveScreen {
                state: self.settled,
                unit: self.engine.current(),
            },
        );
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        diagnostic.log();
        if let Some(sink) = self.diagnostics.as_mut() {
            sink(&diagnostic);
        }
    }
}
