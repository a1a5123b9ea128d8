use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive their data as props (struct fields) and render into a
/// `Frame` within a given `Rect`. Screens, the title bar and the event log
/// all go through this trait so `ui::draw_ui` can lay them out uniformly.
///
/// # Mutability
///
/// `render` takes `&mut self` so a component may update presentation state
/// (e.g. a cached line count) during the render pass, in the spirit of
/// Ratatui's `StatefulWidget`.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
