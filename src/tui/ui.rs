use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::core::host::{Bounds, Effect};
use crate::tui::DemoNavigator;
use crate::tui::component::Component;
use crate::tui::components::{EventLog, EventLogView, ScreenView, TitleBar};
use crate::tui::host::RunningAnimation;

pub const EVENT_LOG_HEIGHT: u16 = 8;

const KEY_HINTS: &str = "l login  o onboarding  m main  x logout  d deep link  c clear  q quit";

pub struct Regions {
    pub title: Rect,
    pub screens: Rect,
    pub hints: Rect,
    pub log: Rect,
}

/// Split the terminal; the screens region is what the host container fills.
pub fn regions(area: Rect) -> Regions {
    use Constraint::{Length, Min};
    let [title, screens, hints, log] =
        Layout::vertical([Length(1), Min(0), Length(1), Length(EVENT_LOG_HEIGHT)]).areas(area);
    Regions {
        title,
        screens,
        hints,
        log,
    }
}

pub fn draw_ui(frame: &mut Frame, nav: &DemoNavigator, log: &EventLog, now: Instant) {
    let regions = regions(frame.area());

    let host = nav.host();
    let transition = host
        .animation()
        .zip(nav.in_flight())
        .map(|(anim, id)| format!("{} {}", describe_effect(anim), id));
    let mut title_bar = TitleBar {
        state: nav.state(),
        transition,
        queued: nav.pending_transitions(),
        deeplink: nav.deeplink().map(|link| link.to_string()),
    };
    title_bar.render(frame, regions.title);

    // Bottom layer first so the incoming unit ends up on top
    for layer in host.layers() {
        let Some(presentation) = host.presentation(layer, now) else {
            continue;
        };
        let Some(area) = to_cells(presentation.bounds, regions.screens) else {
            continue;
        };
        ScreenView::new(layer.card, presentation.dimmed).render(frame, area);
    }

    frame.render_widget(
        Line::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)),
        regions.hints,
    );
    EventLogView { log }.render(frame, regions.log);
}

fn describe_effect(anim: &RunningAnimation) -> String {
    let kind = match anim.effect {
        Effect::CrossDissolve => "fade",
        Effect::Slide { .. } => "slide",
    };
    format!("{kind} {}ms", anim.duration.as_millis())
}

/// Map host bounds onto terminal cells inside `container`, clipping
/// whatever lies outside. `None` if nothing is left.
pub fn to_cells(bounds: Bounds, container: Rect) -> Option<Rect> {
    let left = bounds.x.round().max(0.0);
    let top = bounds.y.round().max(0.0);
    let right = (bounds.x + bounds.width).round().min(container.width as f32);
    let bottom = (bounds.y + bounds.height).round().min(container.height as f32);
    if right <= left || bottom <= top {
        return None;
    }
    Some(Rect::new(
        container.x + left as u16,
        container.y + top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}
