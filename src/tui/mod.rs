//! # TUI Adapter
//!
//! The ratatui-specific layer: a terminal `HostContainer`, a demo screen set,
//! and the event loop that turns key presses into navigator commands.
//!
//! This is the only module that knows about ratatui and crossterm. The core
//! is driven entirely through `HostContainer`, so a different UI toolkit
//! would replace this module and nothing else.
//!
//! ## Redraw Strategy
//!
//! - **Animating**: draws every ~16ms and completes the transition once the
//!   host reports its time is up.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.

mod component;
mod components;
mod event;
pub mod host;
mod ui;

use log::info;
use serde_json::{Value, json};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::OnboardingMode;
use crate::core::config::ResolvedConfig;
use crate::core::navigator::Navigator;
use crate::core::screen::{ScreenError, ScreenSet};
use crate::core::state::ScreenKind;
use crate::tui::components::{EntryKind, EventLog};
use crate::tui::event::{TuiEvent, poll_event_timeout};
use crate::tui::host::{ScreenCard, TerminalHost};

/// The navigator as wired up by the terminal demo.
pub type DemoNavigator = Navigator<ScreenSet<ScreenCard>, TerminalHost, Value>;

/// Build the demo screen set. Every access mints a new card instance.
pub fn build_screens(mode: OnboardingMode) -> Result<ScreenSet<ScreenCard>, ScreenError> {
    let counter = Rc::new(Cell::new(0u64));
    let mint = |kind: ScreenKind| {
        let counter = Rc::clone(&counter);
        move || {
            counter.set(counter.get() + 1);
            ScreenCard {
                kind,
                instance: counter.get(),
            }
        }
    };

    let mut builder = ScreenSet::builder()
        .splash(mint(ScreenKind::Splash))
        .login(mint(ScreenKind::Login))
        .logout(mint(ScreenKind::Logout))
        .main(mint(ScreenKind::Main))
        .onboarding_before_main(mode == OnboardingMode::Before);
    if mode != OnboardingMode::Unavailable {
        builder = builder.onboarding(mint(ScreenKind::Onboarding));
    }
    builder.build()
}

/// Deep links given on the command line are JSON if they parse, plain strings otherwise.
pub fn parse_deeplink(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Wire the navigator's callbacks into the shared event log.
fn build_navigator(
    config: &ResolvedConfig,
    screens: ScreenSet<ScreenCard>,
    host: TerminalHost,
    event_log: &Rc<RefCell<EventLog>>,
) -> DemoNavigator {
    let diagnostics = Rc::clone(event_log);
    let deeplinks = Rc::clone(event_log);
    Navigator::new(screens, host, config.options)
        .with_diagnostics(move |d| {
            diagnostics
                .borrow_mut()
                .push(EntryKind::Diagnostic, d.to_string())
        })
        .with_deeplink_handler(move |payload, active| {
            deeplinks.borrow_mut().push(
                EntryKind::Deeplink,
                format!(
                    "deep link {payload} delivered to {} #{}",
                    active.state, active.unit.instance
                ),
            );
        })
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let screens = build_screens(config.onboarding).map_err(std::io::Error::other)?;
    let event_log = Rc::new(RefCell::new(EventLog::new()));

    let mut terminal = ratatui::init();
    let frame_area = terminal.get_frame().area();
    let screens_area = ui::regions(frame_area).screens;
    let host = TerminalHost::new(screens_area.width, screens_area.height);
    let mut navigator = build_navigator(&config, screens, host, &event_log);

    if let Some(raw) = &config.deeplink {
        navigator.set_deeplink(parse_deeplink(raw));
    }

    let result = event_loop(&mut terminal, &mut navigator, &event_log);
    ratatui::restore();
    info!("Exiting in state {}", navigator.state());
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    navigator: &mut DemoNavigator,
    event_log: &Rc<RefCell<EventLog>>,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame
    let mut deeplink_seq: u64 = 0;

    loop {
        // Keep the container in step with the terminal
        let screens_area = ui::regions(terminal.get_frame().area()).screens;
        navigator
            .host_mut()
            .resize(screens_area.width, screens_area.height);

        if let Some(id) = navigator.host().finished(Instant::now()) {
            navigator.complete_transition(id);
            needs_redraw = true;
        }

        let animating = navigator.is_transitioning();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let log = event_log.borrow();
            terminal.draw(|f| ui::draw_ui(f, navigator, &log, Instant::now()))?;
            needs_redraw = false;
        }

        // Short timeout while animating, long when idle
        let timeout = if animating {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(500)
        };
        let Some(event) = poll_event_timeout(timeout)? else {
            continue;
        };
        needs_redraw = true;

        match event {
            TuiEvent::Quit => return Ok(()),
            TuiEvent::Resize => continue,
            TuiEvent::ShowLogin => navigator.show_login(),
            TuiEvent::ShowOnboarding => {
                if !navigator.show_onboarding() {
                    event_log
                        .borrow_mut()
                        .push(EntryKind::Command, "onboarding not shown");
                }
            }
            TuiEvent::SwitchToMain => navigator.switch_to_main(),
            TuiEvent::SwitchToLogout => navigator.switch_to_logout(),
            TuiEvent::SetDeeplink => {
                deeplink_seq += 1;
                navigator.set_deeplink(json!({ "route": "inbox", "seq": deeplink_seq }));
            }
            TuiEvent::ClearDeeplink => {
                navigator.clear_deeplink();
            }
        }
        event_log.borrow_mut().push(
            EntryKind::Command,
            format!("{} → {}", event.label(), navigator.state()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{CliOverrides, RootnavConfig, resolve};
    use crate::core::screen::ScreenProvider;
    use crate::core::state::ScreenState;

    fn config() -> ResolvedConfig {
        resolve(&RootnavConfig::default(), &CliOverrides::default())
    }

    #[test]
    fn test_build_screens_modes() {
        let before = build_screens(OnboardingMode::Before).unwrap();
        assert!(before.has_onboarding());
        assert!(before.should_show_onboarding_before_main());

        let skip = build_screens(OnboardingMode::Skip).unwrap();
        assert!(skip.has_onboarding());
        assert!(!skip.should_show_onboarding_before_main());

        let none = build_screens(OnboardingMode::Unavailable).unwrap();
        assert!(none.onboarding_unit().is_none());
    }

    #[test]
    fn test_cards_are_fresh_per_access() {
        let screens = build_screens(OnboardingMode::Before).unwrap();
        let a = screens.main_unit();
        let b = screens.main_unit();
        assert_eq!(a.kind, ScreenKind::Main);
        assert_ne!(a, b);
    }

    #[test]
    fn test_parse_deeplink() {
        assert_eq!(parse_deeplink(r#"{"route":"inbox"}"#), json!({"route": "inbox"}));
        assert_eq!(parse_deeplink("inbox/42"), Value::String("inbox/42".to_string()));
    }

    #[test]
    fn test_callbacks_feed_event_log() {
        let log = Rc::new(RefCell::new(EventLog::new()));
        let screens = build_screens(OnboardingMode::Before).unwrap();
        let mut nav = build_navigator(&config(), screens, TerminalHost::new(80, 14), &log);

        nav.set_deeplink(json!("inbox"));
        nav.show_login();
        nav.show_login();

        assert_eq!(nav.state(), ScreenState::Login);
        let log = log.borrow();
        let kinds: Vec<EntryKind> = log.entries().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EntryKind::Deeplink, EntryKind::Diagnostic]);
        assert!(log.entries().any(|e| e.text.contains("delivered to splash")));
    }
}
