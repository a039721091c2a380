//! Visualization collaborator and the context threaded through the solver.
//!
//! The solver never stores a view. Callers hand a `ViewCtx` down the recursion;
//! calls on it are fire-and-forget and nothing they do feeds back into the
//! computation. `ViewCtx::none()` draws nothing.

use std::time::Duration;

use super::cfg::PAUSE;
use super::types::{Color, Segment};

/// Receiver of drawing calls (lines, erasures, status text).
pub trait HullView {
    fn add_lines(&mut self, segments: &[Segment], color: Color);
    fn clear_lines(&mut self, segments: &[Segment]);
    fn display_status_text(&mut self, message: &str);
}

/// View that ignores every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoView;

impl HullView for NoView {
    fn add_lines(&mut self, _segments: &[Segment], _color: Color) {}
    fn clear_lines(&mut self, _segments: &[Segment]) {}
    fn display_status_text(&mut self, _message: &str) {}
}

/// One recorded call on a `RecordingView`.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewEvent {
    AddLines { segments: Vec<Segment>, color: Color },
    ClearLines { segments: Vec<Segment> },
    Status(String),
}

/// View that keeps every call, in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingView {
    pub events: Vec<ViewEvent>,
}

impl RecordingView {
    /// Number of `add_lines` calls with the given color.
    pub fn count_added(&self, color: Color) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ViewEvent::AddLines { color: c, .. } if *c == color))
            .count()
    }
}

impl HullView for RecordingView {
    fn add_lines(&mut self, segments: &[Segment], color: Color) {
        self.events.push(ViewEvent::AddLines {
            segments: segments.to_vec(),
            color,
        });
    }
    fn clear_lines(&mut self, segments: &[Segment]) {
        self.events.push(ViewEvent::ClearLines {
            segments: segments.to_vec(),
        });
    }
    fn display_status_text(&mut self, message: &str) {
        self.events.push(ViewEvent::Status(message.to_string()));
    }
}

/// Optional view plus animation settings for one solve.
pub struct ViewCtx<'a> {
    view: Option<&'a mut dyn HullView>,
    animate: bool,
    pause: Duration,
}

impl<'a> ViewCtx<'a> {
    /// Context that draws nothing.
    pub fn none() -> Self {
        Self {
            view: None,
            animate: false,
            pause: PAUSE,
        }
    }

    pub fn new(view: &'a mut dyn HullView) -> Self {
        Self {
            view: Some(view),
            animate: false,
            pause: PAUSE,
        }
    }

    /// Sleep `pause` after each drawing call when `on`.
    pub fn animate(mut self, on: bool) -> Self {
        self.animate = on;
        self
    }

    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.view.is_some()
    }

    pub fn show(&mut self, segments: &[Segment], color: Color) {
        if let Some(view) = self.view.as_deref_mut() {
            view.add_lines(segments, color);
            if self.animate {
                std::thread::sleep(self.pause);
            }
        }
    }

    pub fn erase(&mut self, segments: &[Segment]) {
        if let Some(view) = self.view.as_deref_mut() {
            view.clear_lines(segments);
        }
    }

    /// Show then erase.
    pub fn blink(&mut self, segments: &[Segment], color: Color) {
        self.show(segments, color);
        self.erase(segments);
    }

    pub fn status(&mut self, message: &str) {
        if let Some(view) = self.view.as_deref_mut() {
            view.display_status_text(message);
        }
    }
}

impl Default for ViewCtx<'_> {
    fn default() -> Self {
        Self::none()
    }
}
