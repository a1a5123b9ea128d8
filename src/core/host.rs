//! # Host Container
//!
//! The seam between the navigator and whatever actually draws screens.
//! A host owns the visual tree; the navigator owns the units. Every side
//! effect the core has on the outside world goes through this trait, which
//! is what lets tests swap in a recording fake.

use std::fmt;
use std::time::Duration;

/// A rectangle in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// The same rectangle shifted horizontally by `dx`.
    pub fn offset_x(&self, dx: f32) -> Self {
        Self { x: self.x + dx, ..*self }
    }

    /// Linear interpolation towards `to`, with `t` clamped to `0.0..=1.0`.
    pub fn lerp(&self, to: &Bounds, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
            width: self.width + (to.width - self.width) * t,
            height: self.height + (to.height - self.height) * t,
        }
    }
}

/// Identifies one animated transition so the host can report its completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionId(pub(crate) u64);

impl fmt::Display for TransitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The visual effect the host should run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    CrossDissolve,
    /// Move the incoming unit from `from` to `to`.
    Slide { from: Bounds, to: Bounds },
}

/// An animation request. Both units are co-mounted while it runs.
#[derive(Debug)]
pub struct Animation<'a, U> {
    pub id: TransitionId,
    pub from: &'a U,
    pub to: &'a U,
    pub effect: Effect,
    pub duration: Duration,
}

/// A container able to host screen units.
///
/// All calls arrive on the single UI thread. When an animation started by
/// [`HostContainer::animate`] finishes, the host must call
/// `Navigator::complete_transition` with the animation's id from that same
/// thread.
pub trait HostContainer<U> {
    /// The container's own bounds; a settled unit fills them.
    fn bounds(&self) -> Bounds;

    /// Make `unit` a child of the container. It is not final-visible yet.
    fn attach_child(&mut self, unit: &U);

    fn set_bounds(&mut self, unit: &U, bounds: Bounds);

    /// `unit` is about to be detached.
    fn will_detach(&mut self, unit: &U);

    /// `unit` has reached final visibility.
    fn did_attach(&mut self, unit: &U);

    /// Remove `unit` from the visual tree and from the parent relationship.
    fn detach_child(&mut self, unit: &U);

    fn animate(&mut self, animation: Animation<'_, U>);
}
