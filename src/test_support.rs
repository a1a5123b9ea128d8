//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::Cell;
use std::time::Duration;

use crate::core::host::{Animation, Bounds, Effect, HostContainer, TransitionId};
use crate::core::navigator::{Navigator, NavigatorOptions};
use crate::core::screen::ScreenProvider;
use crate::core::state::ScreenKind;

/// An opaque unit that remembers which access produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestUnit {
    pub kind: ScreenKind,
    pub serial: u32,
}

/// Every call a `RecordingHost` received, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Attach(TestUnit),
    SetBounds(TestUnit, Bounds),
    WillDetach(TestUnit),
    DidAttach(TestUnit),
    Detach(TestUnit),
    Animate {
        id: TransitionId,
        from: TestUnit,
        to: TestUnit,
        effect: Effect,
        duration: Duration,
    },
}

/// A fake container that records calls and tracks its children.
pub struct RecordingHost {
    pub events: Vec<HostEvent>,
    pub children: Vec<TestUnit>,
    pub bounds: Bounds,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            children: Vec::new(),
            bounds: Bounds::new(0.0, 0.0, 390.0, 844.0),
        }
    }
}

impl HostContainer<TestUnit> for RecordingHost {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn attach_child(&mut self, unit: &TestUnit) {
        self.children.push(*unit);
        self.events.push(HostEvent::Attach(*unit));
    }

    fn set_bounds(&mut self, unit: &TestUnit, bounds: Bounds) {
        self.events.push(HostEvent::SetBounds(*unit, bounds));
    }

    fn will_detach(&mut self, unit: &TestUnit) {
        self.events.push(HostEvent::WillDetach(*unit));
    }

    fn did_attach(&mut self, unit: &TestUnit) {
        self.events.push(HostEvent::DidAttach(*unit));
    }

    fn detach_child(&mut self, unit: &TestUnit) {
        self.children.retain(|child| child != unit);
        self.events.push(HostEvent::Detach(*unit));
    }

    fn animate(&mut self, animation: Animation<'_, TestUnit>) {
        self.events.push(HostEvent::Animate {
            id: animation.id,
            from: *animation.from,
            to: *animation.to,
            effect: animation.effect,
            duration: animation.duration,
        });
    }
}

/// A provider minting a new serial on every access. Policy and onboarding
/// availability can be flipped mid-test through the cells.
pub struct TestScreens {
    serial: Cell<u32>,
    pub onboarding_available: Cell<bool>,
    pub onboarding_before_main: Cell<bool>,
}

impl TestScreens {
    pub fn new() -> Self {
        Self {
            serial: Cell::new(0),
            onboarding_available: Cell::new(true),
            onboarding_before_main: Cell::new(true),
        }
    }

    pub fn without_onboarding() -> Self {
        let screens = Self::new();
        screens.onboarding_available.set(false);
        screens
    }

    fn mint(&self, kind: ScreenKind) -> TestUnit {
        let serial = self.serial.get();
        self.serial.set(serial + 1);
        TestUnit { kind, serial }
    }
}

impl ScreenProvider for TestScreens {
    type Unit = TestUnit;

    fn splash_unit(&self) -> TestUnit {
        self.mint(ScreenKind::Splash)
    }

    fn login_unit(&self) -> TestUnit {
        self.mint(ScreenKind::Login)
    }

    fn logout_unit(&self) -> TestUnit {
        self.mint(ScreenKind::Logout)
    }

    fn main_unit(&self) -> TestUnit {
        self.mint(ScreenKind::Main)
    }

    fn onboarding_unit(&self) -> Option<TestUnit> {
        self.onboarding_available
            .get()
            .then(|| self.mint(ScreenKind::Onboarding))
    }

    fn should_show_onboarding_before_main(&self) -> bool {
        self.onboarding_before_main.get()
    }
}

/// Creates a navigator on a fresh `RecordingHost` with default options.
pub fn test_navigator(screens: TestScreens) -> Navigator<TestScreens, RecordingHost, String> {
    Navigator::new(screens, RecordingHost::new(), NavigatorOptions::default())
}

/// Completes the transition in flight, if any, as the host would.
pub fn finish_animation<D>(nav: &mut Navigator<TestScreens, RecordingHost, D>) {
    if let Some(id) = nav.in_flight() {
        nav.complete_transition(id);
    }
}
