//! `HullView` backed by tracing, optionally recording every call for `--trace`.

use dchull::hull2::{Color, HullView, RecordingView, Segment, ViewEvent};
use serde_json::{json, Value};

#[derive(Default)]
pub struct LogView {
    record: Option<RecordingView>,
}

impl LogView {
    pub fn recording() -> Self {
        Self {
            record: Some(RecordingView::default()),
        }
    }

    pub fn events(&self) -> &[ViewEvent] {
        match &self.record {
            Some(r) => r.events.as_slice(),
            None => &[],
        }
    }
}

impl HullView for LogView {
    fn add_lines(&mut self, segments: &[Segment], color: Color) {
        tracing::debug!(color = ?color, segments = segments.len(), "add_lines");
        if let Some(r) = self.record.as_mut() {
            r.add_lines(segments, color);
        }
    }

    fn clear_lines(&mut self, segments: &[Segment]) {
        tracing::debug!(segments = segments.len(), "clear_lines");
        if let Some(r) = self.record.as_mut() {
            r.clear_lines(segments);
        }
    }

    fn display_status_text(&mut self, message: &str) {
        tracing::info!(text = message, "status");
        if let Some(r) = self.record.as_mut() {
            r.display_status_text(message);
        }
    }
}

fn segments_json(segments: &[Segment]) -> Value {
    segments
        .iter()
        .map(|s| json!([[s.a.x, s.a.y], [s.b.x, s.b.y]]))
        .collect()
}

/// JSON form of one view event, as written by `run --trace`.
pub fn event_json(event: &ViewEvent) -> Value {
    match event {
        ViewEvent::AddLines { segments, color } => json!({
            "op": "add_lines",
            "color": format!("{color:?}").to_lowercase(),
            "rgb": color.rgb(),
            "segments": segments_json(segments),
        }),
        ViewEvent::ClearLines { segments } => json!({
            "op": "clear_lines",
            "segments": segments_json(segments),
        }),
        ViewEvent::Status(message) => json!({ "op": "status", "message": message }),
    }
}
