//! # Screen Providers
//!
//! A `ScreenProvider` hands out opaque screen units on demand. Units are
//! fresh on every access as far as the navigator is concerned: nothing is
//! cached and no identity is assumed.
//!
//! Implementing the trait directly makes the required screens a compile-time
//! obligation. `ScreenSet` is the runtime-assembled alternative, built from
//! factory closures, and checks the same obligation when it is built.

use log::debug;
use std::fmt;

use crate::core::state::{ScreenKind, ScreenState};

/// Supplies the units the navigator mounts.
pub trait ScreenProvider {
    type Unit;

    fn splash_unit(&self) -> Self::Unit;
    fn login_unit(&self) -> Self::Unit;
    fn logout_unit(&self) -> Self::Unit;
    fn main_unit(&self) -> Self::Unit;

    /// `None` skips onboarding entirely.
    fn onboarding_unit(&self) -> Option<Self::Unit> {
        None
    }

    /// The unit mounted at construction.
    fn initial_unit(&self) -> Self::Unit {
        self.splash_unit()
    }

    /// The state reported after the initial mount.
    fn initial_state(&self) -> ScreenState {
        ScreenState::Splash
    }

    fn should_show_onboarding_before_main(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenError {
    /// A required screen has no factory. The navigator cannot render without it.
    UnimplementedRequiredScreen(ScreenKind),
}

impl fmt::Display for ScreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenError::UnimplementedRequiredScreen(kind) => {
                write!(f, "required screen not implemented: {kind}")
            }
        }
    }
}

impl std::error::Error for ScreenError {}

type Factory<U> = Box<dyn Fn() -> U>;

/// A provider assembled from factory closures.
pub struct ScreenSet<U> {
    splash: Factory<U>,
    login: Factory<U>,
    logout: Factory<U>,
    main: Factory<U>,
    onboarding: Option<Factory<U>>,
    initial: Option<(Factory<U>, ScreenState)>,
    onboarding_before_main: bool,
}

impl<U> ScreenSet<U> {
    pub fn builder() -> ScreenSetBuilder<U> {
        ScreenSetBuilder::default()
    }

    pub fn has_onboarding(&self) -> bool {
        self.onboarding.is_some()
    }
}

impl<U> ScreenProvider for ScreenSet<U> {
    type Unit = U;

    fn splash_unit(&self) -> U {
        (self.splash)()
    }

    fn login_unit(&self) -> U {
        (self.login)()
    }

    fn logout_unit(&self) -> U {
        (self.logout)()
    }

    fn main_unit(&self) -> U {
        (self.main)()
    }

    fn onboarding_unit(&self) -> Option<U> {
        self.onboarding.as_ref().map(|make| make())
    }

    fn initial_unit(&self) -> U {
        match &self.initial {
            Some((make, _)) => make(),
            None => self.splash_unit(),
        }
    }

    fn initial_state(&self) -> ScreenState {
        self.initial
            .as_ref()
            .map_or(ScreenState::Splash, |(_, state)| *state)
    }

    fn should_show_onboarding_before_main(&self) -> bool {
        self.onboarding_before_main
    }
}

pub struct ScreenSetBuilder<U> {
    splash: Option<Factory<U>>,
    login: Option<Factory<U>>,
    logout: Option<Factory<U>>,
    main: Option<Factory<U>>,
    onboarding: Option<Factory<U>>,
    initial: Option<(Factory<U>, ScreenState)>,
    onboarding_before_main: bool,
}

impl<U> Default for ScreenSetBuilder<U> {
    fn default() -> Self {
        Self {
            splash: None,
            login: None,
            logout: None,
            main: None,
            onboarding: None,
            initial: None,
            onboarding_before_main: true,
        }
    }
}

impl<U> ScreenSetBuilder<U> {
    pub fn splash(mut self, make: impl Fn() -> U + 'static) -> Self {
        self.splash = Some(Box::new(make));
        self
    }

    pub fn login(mut self, make: impl Fn() -> U + 'static) -> Self {
        self.login = Some(Box::new(make));
        self
    }

    pub fn logout(mut self, make: impl Fn() -> U + 'static) -> Self {
        self.logout = Some(Box::new(make));
        self
    }

    pub fn main(mut self, make: impl Fn() -> U + 'static) -> Self {
        self.main = Some(Box::new(make));
        self
    }

    pub fn onboarding(mut self, make: impl Fn() -> U + 'static) -> Self {
        self.onboarding = Some(Box::new(make));
        self
    }

    /// Replace the splash unit as the first mount and report `state` for it.
    pub fn initial(mut self, state: ScreenState, make: impl Fn() -> U + 'static) -> Self {
        self.initial = Some((Box::new(make), state));
        self
    }

    pub fn onboarding_before_main(mut self, enabled: bool) -> Self {
        self.onboarding_before_main = enabled;
        self
    }

    /// Fails on the first required screen that has no factory.
    pub fn build(self) -> Result<ScreenSet<U>, ScreenError> {
        let missing = ScreenError::UnimplementedRequiredScreen;
        let screens = ScreenSet {
            splash: self.splash.ok_or(missing(ScreenKind::Splash))?,
            login: self.login.ok_or(missing(ScreenKind::Login))?,
            logout: self.logout.ok_or(missing(ScreenKind::Logout))?,
            main: self.main.ok_or(missing(ScreenKind::Main))?,
            onboarding: self.onboarding,
            initial: self.initial,
            onboarding_before_main: self.onboarding_before_main,
        };
        debug!(
            "Built screen set (onboarding: {}, before main: {})",
            screens.has_onboarding(),
            screens.onboarding_before_main
        );
        Ok(screens)
    }
}
