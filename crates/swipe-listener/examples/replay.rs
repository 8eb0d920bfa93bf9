//! Swipe Listener Replay Example
//!
//! Replays a recorded pointer trace through a listener and logs every swipe
//! event it emits.
//!
//! Run with: cargo run -p swipe-listener --example replay [trace.json] [config.toml]
//!
//! A trace is a JSON array of pointer signals:
//!
//! ```json
//! [
//!   { "kind": "mouse", "phase": "pressed", "x": 0, "y": 0 },
//!   { "kind": "mouse", "phase": "moved", "x": 0, "y": 0, "target": 3 },
//!   { "kind": "mouse", "phase": "released", "x": 40, "y": 2 }
//! ]
//! ```

use std::sync::Arc;

use serde::Deserialize;
use swipe_listener::{
    PointerEvent, PointerKind, PointerPhase, SignalSurface, SwipeConfig, SwipeListener, TargetId,
};

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Kind {
    Touch,
    Mouse,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Phase {
    Pressed,
    Moved,
    Released,
}

/// One recorded pointer signal.
#[derive(Debug, Deserialize)]
struct TraceEntry {
    kind: Kind,
    phase: Phase,
    x: f32,
    y: f32,
    #[serde(default)]
    target: u64,
}

impl TraceEntry {
    fn to_event(&self) -> PointerEvent {
        let kind = match self.kind {
            Kind::Touch => PointerKind::Touch,
            Kind::Mouse => PointerKind::Mouse,
        };
        let phase = match self.phase {
            Phase::Pressed => PointerPhase::Pressed,
            Phase::Moved => PointerPhase::Moved,
            Phase::Released => PointerPhase::Released,
        };
        PointerEvent::new(kind, phase, (self.x, self.y).into(), TargetId(self.target))
    }
}

/// A right swipe, a wandering drag that gets cancelled, and a short tap.
const BUILTIN_TRACE: &str = r#"[
    { "kind": "touch", "phase": "pressed",  "x": 0,  "y": 0 },
    { "kind": "touch", "phase": "moved",    "x": 0,  "y": 0 },
    { "kind": "touch", "phase": "moved",    "x": 5,  "y": 0 },
    { "kind": "touch", "phase": "moved",    "x": 12, "y": 1 },
    { "kind": "touch", "phase": "released", "x": 12, "y": 1 },
    { "kind": "mouse", "phase": "pressed",  "x": 0,  "y": 0 },
    { "kind": "mouse", "phase": "moved",    "x": 0,  "y": 0 },
    { "kind": "mouse", "phase": "moved",    "x": 40, "y": 0 },
    { "kind": "mouse", "phase": "moved",    "x": 20, "y": 0 },
    { "kind": "mouse", "phase": "released", "x": 20, "y": 0 },
    { "kind": "touch", "phase": "moved",    "x": 7,  "y": 7 },
    { "kind": "touch", "phase": "released", "x": 7,  "y": 7 }
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut args = std::env::args().skip(1);
    let trace = match args.next() {
        Some(path) => std::fs::read_to_string(path)?,
        None => BUILTIN_TRACE.to_string(),
    };
    let config = match args.next() {
        Some(path) => SwipeConfig::load(path)?,
        None => SwipeConfig::default(),
    };
    let entries: Vec<TraceEntry> = serde_json::from_str(&trace)?;

    let surface = Arc::new(SignalSurface::new());
    surface.any().connect(|event| {
        let detail = event.detail();
        match event.directions() {
            Some(directions) => {
                let names: Vec<String> = directions.iter().map(|d| d.to_string()).collect();
                tracing::info!(
                    "{} [{}] from={:?} to={:?} touch={}",
                    event.name(),
                    names.join(","),
                    detail.start(),
                    detail.end(),
                    detail.touch
                );
            }
            None => tracing::info!(
                "{} from={:?} to={:?} touch={}",
                event.name(),
                detail.start(),
                detail.end(),
                detail.touch
            ),
        }
    });

    let Some(mut listener) = SwipeListener::register(Some(surface), config) else {
        return Ok(());
    };

    let mut prevented = 0usize;
    for entry in &entries {
        let mut event = entry.to_event();
        listener.handle(&mut event);
        if event.is_default_prevented() {
            prevented += 1;
        }
    }
    listener.off();

    println!(
        "Replayed {} pointer signals ({} with scrolling suppressed)",
        entries.len(),
        prevented
    );
    Ok(())
}
