//! # Transition Engine
//!
//! Performs the mount/unmount sequence for a screen swap and owns the
//! currently mounted unit.
//!
//! Every style follows the same lifecycle order against the host:
//!
//! ```text
//! will_detach(old) → attach_child(new) → set_bounds(new, ..)
//!     → [animate(..) ... complete_transition(id)]     (fade, slide only)
//!     → did_attach(new) → detach_child(old) → completion
//! ```
//!
//! Only one transition is in flight at a time. Requests arriving while one
//! is running are queued and started, in order, once it completes.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

use crate::core::host::{Animation, Bounds, Effect, HostContainer, TransitionId};

pub const DEFAULT_TRANSITION_DURATION: Duration = Duration::from_millis(300);

/// Which side a sliding unit enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideEdge {
    Left,
    Right,
}

/// The visual effect accompanying a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStyle {
    Instant,
    Fade { duration: Duration },
    Slide { edge: SlideEdge, duration: Duration },
}

impl TransitionStyle {
    pub fn fade() -> Self {
        TransitionStyle::Fade {
            duration: DEFAULT_TRANSITION_DURATION,
        }
    }

    pub fn slide_from_left() -> Self {
        TransitionStyle::Slide {
            edge: SlideEdge::Left,
            duration: DEFAULT_TRANSITION_DURATION,
        }
    }
}

impl fmt::Display for TransitionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionStyle::Instant => f.write_str("instant"),
            TransitionStyle::Fade { duration } => write!(f, "fade {}ms", duration.as_millis()),
            TransitionStyle::Slide { edge, duration } => {
                let side = match edge {
                    SlideEdge::Left => "left",
                    SlideEdge::Right => "right",
                };
                write!(f, "slide from {side} {}ms", duration.as_millis())
            }
        }
    }
}

/// Which style each navigation command uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionPolicy {
    pub login: TransitionStyle,
    pub onboarding: TransitionStyle,
    pub logout: TransitionStyle,
    pub main: TransitionStyle,
}

impl Default for TransitionPolicy {
    fn default() -> Self {
        Self {
            login: TransitionStyle::Instant,
            onboarding: TransitionStyle::Instant,
            logout: TransitionStyle::slide_from_left(),
            main: TransitionStyle::fade(),
        }
    }
}

/// One swap: the unit to show, how to show it, and what to hand back when done.
pub struct TransitionRequest<U, C> {
    pub target: U,
    pub style: TransitionStyle,
    pub completion: C,
}

/// What happened to a request passed to [`TransitionEngine::swap`].
#[derive(Debug, PartialEq, Eq)]
pub enum SwapOutcome<C> {
    /// Settled synchronously; the completion is handed back.
    Completed(C),
    /// Animation running; the host will report this id.
    Started(TransitionId),
    /// Another transition is in flight; `pending` requests are now waiting.
    Queued { pending: usize },
}

struct InFlight<U, C> {
    id: TransitionId,
    incoming: U,
    completion: C,
}

pub struct TransitionEngine<U, C> {
    current: U,
    in_flight: Option<InFlight<U, C>>,
    pending: VecDeque<TransitionRequest<U, C>>,
    next_id: u64,
}

impl<U, C> TransitionEngine<U, C> {
    /// Directly attach the first unit. No animation, no completion.
    pub fn mount<H: HostContainer<U>>(host: &mut H, unit: U) -> Self {
        let bounds = host.bounds();
        host.attach_child(&unit);
        host.set_bounds(&unit, bounds);
        host.did_attach(&unit);
        Self {
            current: unit,
            in_flight: None,
            pending: VecDeque::new(),
            next_id: 0,
        }
    }

    /// The settled unit. During an animation this is still the outgoing one.
    pub fn current(&self) -> &U {
        &self.current
    }

    /// The unit being animated in, if any.
    pub fn incoming(&self) -> Option<&U> {
        self.in_flight.as_ref().map(|f| &f.incoming)
    }

    pub fn in_flight(&self) -> Option<TransitionId> {
        self.in_flight.as_ref().map(|f| f.id)
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.in_flight.is_none()
    }

    pub fn swap<H: HostContainer<U>>(
        &mut self,
        host: &mut H,
        request: TransitionRequest<U, C>,
    ) -> SwapOutcome<C> {
        if self.in_flight.is_some() {
            self.pending.push_back(request);
            return SwapOutcome::Queued {
                pending: self.pending.len(),
            };
        }
        self.begin(host, request)
    }

    /// Settle the in-flight transition `id` into the container's bounds as
    /// they are now. Returns its completion, or `None` if `id` is not the
    /// running transition. Queued requests stay queued until
    /// [`TransitionEngine::start_next`].
    pub fn finish<H: HostContainer<U>>(&mut self, host: &mut H, id: TransitionId) -> Option<C> {
        match &self.in_flight {
            Some(flight) if flight.id == id => {}
            _ => return None,
        }
        let flight = self.in_flight.take()?;
        let full = host.bounds();
        host.set_bounds(&flight.incoming, full);
        Some(self.settle(host, flight.incoming, flight.completion))
    }

    /// Begin the oldest queued request. `None` while a transition is still
    /// running or when nothing is queued.
    pub fn start_next<H: HostContainer<U>>(&mut self, host: &mut H) -> Option<SwapOutcome<C>> {
        if self.in_flight.is_some() {
            return None;
        }
        let next = self.pending.pop_front()?;
        Some(self.begin(host, next))
    }

    /// Detach every mounted unit, including one still animating in.
    pub fn teardown<H: HostContainer<U>>(self, host: &mut H) {
        if let Some(flight) = self.in_flight {
            host.will_detach(&flight.incoming);
            host.detach_child(&flight.incoming);
        }
        host.will_detach(&self.current);
        host.detach_child(&self.current);
    }

    fn begin<H: HostContainer<U>>(
        &mut self,
        host: &mut H,
        request: TransitionRequest<U, C>,
    ) -> SwapOutcome<C> {
        let TransitionRequest {
            target,
            style,
            completion,
        } = request;
        let container = host.bounds();

        host.will_detach(&self.current);
        host.attach_child(&target);

        let (effect, duration) = match style {
            TransitionStyle::Instant => {
                host.set_bounds(&target, container);
                return SwapOutcome::Completed(self.settle(host, target, completion));
            }
            TransitionStyle::Fade { duration } => {
                host.set_bounds(&target, container);
                (Effect::CrossDissolve, duration)
            }
            TransitionStyle::Slide { edge, duration } => {
                let offscreen = match edge {
                    SlideEdge::Left => container.offset_x(-container.width),
                    SlideEdge::Right => container.offset_x(container.width),
                };
                host.set_bounds(&target, offscreen);
                (
                    Effect::Slide {
                        from: offscreen,
                        to: container,
                    },
                    duration,
                )
            }
        };

        let id = TransitionId(self.next_id);
        self.next_id += 1;
        host.animate(Animation {
            id,
            from: &self.current,
            to: &target,
            effect,
            duration,
        });
        self.in_flight = Some(InFlight {
            id,
            incoming: target,
            completion,
        });
        SwapOutcome::Started(id)
    }

    fn settle<H: HostContainer<U>>(&mut self, host: &mut H, incoming: U, completion: C) -> C {
        host.did_attach(&incoming);
        let old = std::mem::replace(&mut self.current, incoming);
        host.detach_child(&old);
        completion
    }
}
