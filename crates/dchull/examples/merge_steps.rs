//! Print every drawing call the solver makes on a small cloud.
//!
//! Purpose
//! - Show the merge sequence (tangents in blue, merged boundary in green,
//!   final hull in red) without a window, one line per event.
//!
//! Usage: `cargo run -p dchull --example merge_steps -- [count] [seed]`

use dchull::hull2::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use dchull::hull2::{compute_hull_with_view, RecordingView, Segment, ViewCtx, ViewEvent};

fn fmt_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| format!("({:.2},{:.2})->({:.2},{:.2})", s.a.x, s.a.y, s.b.x, s.b.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() {
    let mut args = std::env::args().skip(1);
    let count = args.next().and_then(|s| s.parse().ok()).unwrap_or(12);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);

    let pts = draw_cloud(
        CloudCfg {
            count,
            shape: CloudShape::Grid { half: 5 },
            scale: 1.0,
        },
        ReplayToken { seed, index: 0 },
    );
    let mut rec = RecordingView::default();
    let hull = compute_hull_with_view(&pts, &mut ViewCtx::new(&mut rec)).expect("non-empty cloud");

    for (i, event) in rec.events.iter().enumerate() {
        match event {
            ViewEvent::AddLines { segments, color } => {
                println!("{i:>4} add   {color:?} {}", fmt_segments(segments))
            }
            ViewEvent::ClearLines { segments } => {
                println!("{i:>4} clear       {}", fmt_segments(segments))
            }
            ViewEvent::Status(msg) => println!("{i:>4} status {msg}"),
        }
    }
    println!("hull vertices={} input={}", hull.len(), pts.len());
}
