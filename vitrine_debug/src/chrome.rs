// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][spec] JSON to the given writer.
//!
//! Only input events carry a timestamp. Every other event is stamped with
//! the most recent input time, so the state changes an input caused line
//! up under it.
//!
//! [spec]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use vitrine_core::time::Timebase;

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
///
/// Timestamps are converted to microseconds using the provided [`Timebase`].
pub fn export(bytes: &[u8], timebase: Timebase, writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();
    let mut ts = 0.0;
    let mut phase_open = false;

    for recorded in decode(bytes) {
        match recorded {
            RecordedEvent::Input(e) => {
                ts = ticks_to_us(e.at.ticks(), timebase);
                let args = json!({ "kind": format!("{:?}", e.kind) });
                events.push(instant("Input", "Input", ts, args));
            }
            RecordedEvent::Advance(e) => {
                events.push(instant(
                    "Advance",
                    "Carousel",
                    ts,
                    json!({
                        "direction": format!("{:?}", e.direction),
                        "from": e.from,
                        "to": e.to,
                    }),
                ));
                if !phase_open {
                    events.push(span("B", ts));
                    phase_open = true;
                }
            }
            RecordedEvent::Ignored(e) => {
                events.push(instant(
                    "Ignored",
                    "Carousel",
                    ts,
                    json!({
                        "direction": format!("{:?}", e.direction),
                        "position": e.position,
                    }),
                ));
            }
            RecordedEvent::Rewind(e) => {
                events.push(instant(
                    "Rewind",
                    "Carousel",
                    ts,
                    json!({
                        "from": e.from,
                        "to": e.to,
                        "seam": format!("{:?}", e.seam),
                    }),
                ));
            }
            RecordedEvent::Settle(e) => {
                if phase_open {
                    events.push(span("E", ts));
                    phase_open = false;
                }
                let args = json!({ "position": e.position });
                events.push(instant("Settle", "Carousel", ts, args));
            }
            RecordedEvent::Reset(e) => {
                if phase_open {
                    events.push(span("E", ts));
                    phase_open = false;
                }
                events.push(instant(
                    "Reset",
                    "Carousel",
                    ts,
                    json!({
                        "from": e.from,
                        "was_locked": e.was_locked,
                    }),
                ));
            }
            RecordedEvent::Offset(e) => {
                events.push(json!({
                    "ph": "C",
                    "name": "offset_x",
                    "cat": "Transport",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "args": {
                        "px": e.offset_x,
                    }
                }));
            }
            RecordedEvent::Inert(reason) => {
                let args = json!({ "reason": reason.to_string() });
                events.push(instant("Inert", "Carousel", ts, args));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn instant(name: &str, cat: &str, ts: f64, args: Value) -> Value {
    json!({
        "ph": "i",
        "name": name,
        "cat": cat,
        "ts": ts,
        "pid": 0,
        "tid": 0,
        "s": "t",
        "args": args,
    })
}

/// Begin/end of the `Transitioning` phase.
fn span(ph: &str, ts: f64) -> Value {
    json!({
        "ph": ph,
        "name": "Transitioning",
        "cat": "Carousel",
        "ts": ts,
        "pid": 0,
        "tid": 0,
    })
}

fn ticks_to_us(ticks: u64, timebase: Timebase) -> f64 {
    timebase.ticks_to_nanos(ticks) as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use vitrine_core::carousel::Direction;
    use vitrine_core::time::HostTime;
    use vitrine_core::trace::{AdvanceEvent, InputEvent, InputKind, SettleEvent, TraceSink};

    #[test]
    fn export_produces_valid_json() {
        let mut rec = RecorderSink::new();
        rec.on_input(&InputEvent {
            kind: InputKind::Next,
            at: HostTime(1_000_000),
        });
        rec.on_advance(&AdvanceEvent {
            direction: Direction::Forward,
            from: 0,
            to: 1,
        });
        rec.on_input(&InputEvent {
            kind: InputKind::TransitionEnd,
            at: HostTime(1_500_000),
        });
        rec.on_settle(&SettleEvent { position: 1 });

        let mut out = Vec::new();
        export(rec.as_bytes(), Timebase::MICROS, &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        let names: Vec<&str> = parsed.iter().filter_map(|e| e["name"].as_str()).collect();
        assert_eq!(
            names,
            ["Input", "Advance", "Transitioning", "Input", "Transitioning", "Settle"]
        );

        // The movement span runs from the click to the transition end.
        assert_eq!(parsed[2]["ph"], "B");
        assert_eq!(parsed[2]["ts"], 1_000_000.0);
        assert_eq!(parsed[4]["ph"], "E");
        assert_eq!(parsed[4]["ts"], 1_500_000.0);
        assert_eq!(parsed[5]["args"]["position"], 1);
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], Timebase::NANOS, &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert!(parsed.is_empty());
    }
}
