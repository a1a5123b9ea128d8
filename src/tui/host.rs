//! # Terminal Host
//!
//! A `HostContainer` for the terminal. Keeps an ordered stack of layers
//! (bottom first) and at most one running animation, timed against the wall
//! clock. The event loop polls [`TerminalHost::finished`] and reports the
//! completion back to the navigator.

use std::time::{Duration, Instant};

use crate::core::host::{Animation, Bounds, Effect, HostContainer, TransitionId};
use crate::core::state::ScreenKind;

/// The demo's opaque screen unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenCard {
    pub kind: ScreenKind,
    /// Distinguishes repeated accesses of the same kind.
    pub instance: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerPhase {
    /// Child of the container, not yet final-visible.
    Attached,
    Visible,
    Detaching,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub card: ScreenCard,
    pub bounds: Bounds,
    pub phase: LayerPhase,
}

#[derive(Debug, Clone)]
pub struct RunningAnimation {
    pub id: TransitionId,
    pub from: ScreenCard,
    pub to: ScreenCard,
    pub effect: Effect,
    pub started: Instant,
    pub duration: Duration,
}

impl RunningAnimation {
    /// Fraction complete, `0.0..=1.0`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

/// How a layer should be drawn right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    pub bounds: Bounds,
    pub dimmed: bool,
}

pub struct TerminalHost {
    bounds: Bounds,
    layers: Vec<Layer>,
    animation: Option<RunningAnimation>,
}

impl TerminalHost {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            bounds: Bounds::new(0.0, 0.0, width as f32, height as f32),
            layers: Vec::new(),
            animation: None,
        }
    }

    /// Track a new container size. Settled layers follow it.
    pub fn resize(&mut self, width: u16, height: u16) {
        let bounds = Bounds::new(0.0, 0.0, width as f32, height as f32);
        if bounds == self.bounds {
            return;
        }
        self.bounds = bounds;
        for layer in &mut self.layers {
            if layer.phase == LayerPhase::Visible {
                layer.bounds = bounds;
            }
        }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn animation(&self) -> Option<&RunningAnimation> {
        self.animation.as_ref()
    }

    /// The id of the running animation once its time is up.
    pub fn finished(&self, now: Instant) -> Option<TransitionId> {
        self.animation
            .as_ref()
            .filter(|anim| anim.progress(now) >= 1.0)
            .map(|anim| anim.id)
    }

    /// `None` means the layer is not drawn this frame.
    pub fn presentation(&self, layer: &Layer, now: Instant) -> Option<Presentation> {
        let settled = Presentation {
            bounds: layer.bounds,
            dimmed: false,
        };
        let Some(anim) = &self.animation else {
            return (layer.phase != LayerPhase::Attached).then_some(settled);
        };
        let progress = anim.progress(now);

        if layer.card == anim.to {
            return match anim.effect {
                // Cross-dissolve in two halves: old fades out, new fades in
                Effect::CrossDissolve => (progress >= 0.5).then_some(Presentation {
                    bounds: layer.bounds,
                    dimmed: progress < 1.0,
                }),
                Effect::Slide { from, to } => Some(Presentation {
                    bounds: from.lerp(&to, progress),
                    dimmed: false,
                }),
            };
        }
        if layer.card == anim.from {
            return match anim.effect {
                Effect::CrossDissolve => (progress < 0.5).then_some(Presentation {
                    bounds: layer.bounds,
                    dimmed: progress > 0.0,
                }),
                Effect::Slide { .. } => Some(Presentation {
                    bounds: layer.bounds,
                    dimmed: true,
                }),
            };
        }
        (layer.phase != LayerPhase::Attached).then_some(settled)
    }

    fn layer_mut(&mut self, card: &ScreenCard) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|layer| layer.card == *card)
    }
}

impl HostContainer<ScreenCard> for TerminalHost {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn attach_child(&mut self, unit: &ScreenCard) {
        self.layers.push(Layer {
            card: *unit,
            bounds: self.bounds,
            phase: LayerPhase::Attached,
        });
    }

    fn set_bounds(&mut self, unit: &ScreenCard, bounds: Bounds) {
        if let Some(layer) = self.layer_mut(unit) {
            layer.bounds = bounds;
        }
    }

    fn will_detach(&mut self, unit: &ScreenCard) {
        if let Some(layer) = self.layer_mut(unit) {
            layer.phase = LayerPhase::Detaching;
        }
    }

    fn did_attach(&mut self, unit: &ScreenCard) {
        if let Some(layer) = self.layer_mut(unit) {
            layer.phase = LayerPhase::Visible;
        }
        if self.animation.as_ref().is_some_and(|anim| anim.to == *unit) {
            self.animation = None;
        }
    }

    fn detach_child(&mut self, unit: &ScreenCard) {
        self.layers.retain(|layer| layer.card != *unit);
    }

    fn animate(&mut self, animation: Animation<'_, ScreenCard>) {
        self.animation = Some(RunningAnimation {
            id: animation.id,
            from: *animation.from,
            to: *animation.to,
            effect: animation.effect,
            started: Instant::now(),
            duration: animation.duration,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigator::{Navigator, NavigatorOptions};
    use crate::core::screen::ScreenSet;
    use std::cell::Cell;
    use std::rc::Rc;

    fn card(kind: ScreenKind, instance: u64) -> ScreenCard {
        ScreenCard { kind, instance }
    }

    fn demo_screens() -> ScreenSet<ScreenCard> {
        let counter = Rc::new(Cell::new(0));
        let mint = |kind: ScreenKind| {
            let counter = Rc::clone(&counter);
            move || {
                counter.set(counter.get() + 1);
                card(kind, counter.get())
            }
        };
        ScreenSet::builder()
            .splash(mint(ScreenKind::Splash))
            .login(mint(ScreenKind::Login))
            .logout(mint(ScreenKind::Logout))
            .main(mint(ScreenKind::Main))
            .build()
            .unwrap()
    }

    #[test]
    fn test_navigator_drives_layers() {
        let mut nav: Navigator<_, _, ()> =
            Navigator::new(demo_screens(), TerminalHost::new(80, 20), NavigatorOptions::default());
        assert_eq!(nav.host().layers().len(), 1);
        assert_eq!(nav.host().layers()[0].phase, LayerPhase::Visible);

        nav.switch_to_main();
        let layers = nav.host().layers();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].phase, LayerPhase::Detaching);
        assert_eq!(layers[1].phase, LayerPhase::Attached);
        let id = nav.host().animation().map(|a| a.id).unwrap();

        assert!(nav.complete_transition(id));
        let layers = nav.host().layers();
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].card.kind, ScreenKind::Main);
        assert_eq!(layers[0].phase, LayerPhase::Visible);
        assert!(nav.host().animation().is_none());
    }

    #[test]
    fn test_resize_during_fade_settles_to_new_size() {
        let mut nav: Navigator<_, _, ()> =
            Navigator::new(demo_screens(), TerminalHost::new(80, 20), NavigatorOptions::default());
        nav.switch_to_main();
        let id = nav.in_flight().unwrap();

        nav.host_mut().resize(120, 30);
        assert!(nav.complete_transition(id));

        let layers = nav.host().layers();
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].bounds, nav.host().bounds());
        assert_eq!(layers[0].bounds, Bounds::new(0.0, 0.0, 120.0, 30.0));
    }

    #[test]
    fn test_finished_waits_for_duration() {
        let mut host = TerminalHost::new(80, 20);
        let from = card(ScreenKind::Splash, 1);
        let to = card(ScreenKind::Main, 2);
        host.animate(Animation {
            id: TransitionId(7),
            from: &from,
            to: &to,
            effect: Effect::CrossDissolve,
            duration: Duration::from_millis(300),
        });
        let started = host.animation().unwrap().started;

        assert_eq!(host.finished(started), None);
        assert_eq!(host.finished(started + Duration::from_millis(300)), Some(TransitionId(7)));
    }

    #[test]
    fn test_cross_dissolve_swaps_at_half_way() {
        let mut host = TerminalHost::new(80, 20);
        let from = card(ScreenKind::Login, 1);
        let to = card(ScreenKind::Main, 2);
        host.attach_child(&from);
        host.did_attach(&from);
        host.will_detach(&from);
        host.attach_child(&to);
        host.animate(Animation {
            id: TransitionId(0),
            from: &from,
            to: &to,
            effect: Effect::CrossDissolve,
            duration: Duration::from_millis(300),
        });
        let t0 = host.animation().unwrap().started;
        let (old, new) = (host.layers()[0].clone(), host.layers()[1].clone());

        assert!(host.presentation(&old, t0).is_some());
        assert!(host.presentation(&new, t0).is_none());

        let late = t0 + Duration::from_millis(200);
        assert!(host.presentation(&old, late).is_none());
        assert_eq!(host.presentation(&new, late).map(|p| p.dimmed), Some(true));
    }

    #[test]
    fn test_slide_interpolates_position() {
        let mut host = TerminalHost::new(80, 20);
        let from = card(ScreenKind::Main, 1);
        let to = card(ScreenKind::Logout, 2);
        let full = host.bounds();
        let offscreen = full.offset_x(-80.0);
        host.attach_child(&from);
        host.did_attach(&from);
        host.attach_child(&to);
        host.set_bounds(&to, offscreen);
        host.animate(Animation {
            id: TransitionId(0),
            from: &from,
            to: &to,
            effect: Effect::Slide {
                from: offscreen,
                to: full,
            },
            duration: Duration::from_millis(400),
        });
        let t0 = host.animation().unwrap().started;
        let incoming = host.layers()[1].clone();

        let mid = host
            .presentation(&incoming, t0 + Duration::from_millis(200))
            .unwrap();
        assert!((mid.bounds.x + 40.0).abs() < 0.01);
    }

    #[test]
    fn test_resize_moves_settled_layers_only() {
        let mut host = TerminalHost::new(80, 20);
        let settled = card(ScreenKind::Splash, 1);
        let arriving = card(ScreenKind::Logout, 2);
        host.attach_child(&settled);
        host.did_attach(&settled);
        host.attach_child(&arriving);
        host.set_bounds(&arriving, Bounds::new(-80.0, 0.0, 80.0, 20.0));

        host.resize(100, 30);
        assert_eq!(host.layers()[0].bounds, Bounds::new(0.0, 0.0, 100.0, 30.0));
        assert_eq!(host.layers()[1].bounds, Bounds::new(-80.0, 0.0, 80.0, 20.0));
    }
}
