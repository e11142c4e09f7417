use ratatui::layout::Rect;
use ratatui::Frame;

/// A reusable UI component.
///
/// Components receive their data as props (struct fields), may borrow
/// persistent state owned by `TuiState`, and render into a `Rect`.
///
/// `render` takes `&mut self` so stateful components can update cached
/// measurements (viewport height, rendered text) during the draw pass,
/// in the spirit of Ratatui's `StatefulWidget`.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
