// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Input
//! timestamps are converted to milliseconds using a [`Timebase`].

use std::io::Write;

use vitrine_core::carousel::{Direction, Inert};
use vitrine_core::time::{HostTime, Timebase};
use vitrine_core::trace::{
    AdvanceEvent, IgnoredEvent, InputEvent, InputKind, OffsetEvent, ResetEvent, RewindEvent,
    Seam, SettleEvent, TraceSink,
};
use vitrine_core::transport::Motion;

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    timebase: Timebase,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("timebase", &self.timebase)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr(timebase: Timebase) -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
            timebase,
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>, timebase: Timebase) -> Self {
        Self { writer, timebase }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W, timebase: Timebase) -> Self {
        Self { writer, timebase }
    }

    /// Consumes the sink and returns its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn host_ms(&self, t: HostTime) -> f64 {
        self.timebase.ticks_to_nanos(t.ticks()) as f64 / 1_000_000.0
    }
}

fn input_name(kind: InputKind) -> &'static str {
    match kind {
        InputKind::Next => "next",
        InputKind::Previous => "prev",
        InputKind::Resize => "resize",
        InputKind::Settle => "settle",
        InputKind::TransitionEnd => "transitionend",
    }
}

fn arrow(direction: Direction) -> &'static str {
    match direction {
        Direction::Forward => "→",
        Direction::Backward => "←",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_input(&mut self, e: &InputEvent) {
        let _ = writeln!(
            self.writer,
            "[input] {} at {:.1}ms",
            input_name(e.kind),
            self.host_ms(e.at),
        );
    }

    fn on_advance(&mut self, e: &AdvanceEvent) {
        let _ = writeln!(
            self.writer,
            "[advance] {} {} -> {}",
            arrow(e.direction),
            e.from,
            e.to,
        );
    }

    fn on_ignored(&mut self, e: &IgnoredEvent) {
        let _ = writeln!(
            self.writer,
            "[ignored] {} at {} (locked)",
            arrow(e.direction),
            e.position,
        );
    }

    fn on_rewind(&mut self, e: &RewindEvent) {
        let seam = match e.seam {
            Seam::Head => "head",
            Seam::Tail => "tail",
        };
        let _ = writeln!(self.writer, "[rewind:{seam}] {} -> {}", e.from, e.to);
    }

    fn on_settle(&mut self, e: &SettleEvent) {
        let _ = writeln!(self.writer, "[settle] at {}", e.position);
    }

    fn on_reset(&mut self, e: &ResetEvent) {
        let locked = if e.was_locked { " (was moving)" } else { "" };
        let _ = writeln!(self.writer, "[reset] {} -> 0{locked}", e.from);
    }

    fn on_offset(&mut self, e: &OffsetEvent) {
        let motion = match e.motion {
            Motion::Animated => "animated",
            Motion::Instant => "instant",
        };
        let _ = writeln!(
            self.writer,
            "[offset] pos={} x={}px {motion}",
            e.position, e.offset_x,
        );
    }

    fn on_inert(&mut self, reason: Inert) {
        let _ = writeln!(self.writer, "[inert] {reason}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_print_input() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new(), Timebase::MICROS);
        sink.on_input(&InputEvent {
            kind: InputKind::Next,
            at: HostTime(2_500),
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "[input] next at 2.5ms\n");
    }

    #[test]
    fn pretty_print_rewind_and_offset() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new(), Timebase::NANOS);
        sink.on_rewind(&RewindEvent {
            from: 6,
            to: 0,
            seam: Seam::Tail,
        });
        sink.on_offset(&OffsetEvent {
            position: 0,
            offset_x: 0.0,
            motion: Motion::Instant,
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(output.contains("[rewind:tail] 6 -> 0"), "got: {output}");
        assert!(output.contains("x=0px instant"), "got: {output}");
    }
}
