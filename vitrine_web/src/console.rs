// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console trace output.

use vitrine_core::carousel::Inert;
use vitrine_core::time::Timebase;
use vitrine_core::trace::{
    AdvanceEvent, IgnoredEvent, InputEvent, OffsetEvent, ResetEvent, RewindEvent, SettleEvent,
    TraceSink,
};
use wasm_bindgen::JsValue;

/// Writes one `console.log` line per carousel event.
///
/// Only receives events when `vitrine_web` is built with the `trace` feature.
#[derive(Clone, Copy, Debug)]
pub struct ConsoleSink {
    prefix: &'static str,
    timebase: Timebase,
}

impl ConsoleSink {
    /// Creates a sink whose lines start with `prefix`.
    #[must_use]
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            timebase: crate::timebase(),
        }
    }

    fn log(&self, line: &str) {
        web_sys::console::log_1(&JsValue::from_str(&format!("{} {line}", self.prefix)));
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new("[carousel]")
    }
}

impl TraceSink for ConsoleSink {
    fn on_input(&mut self, e: &InputEvent) {
        self.log(&input_line(e, self.timebase));
    }

    fn on_advance(&mut self, e: &AdvanceEvent) {
        self.log(&format!("advance {:?} {} -> {}", e.direction, e.from, e.to));
    }

    fn on_ignored(&mut self, e: &IgnoredEvent) {
        self.log(&format!(
            "ignored {:?} at {} (moving)",
            e.direction, e.position
        ));
    }

    fn on_rewind(&mut self, e: &RewindEvent) {
        self.log(&format!("rewind {:?} {} -> {}", e.seam, e.from, e.to));
    }

    fn on_settle(&mut self, e: &SettleEvent) {
        self.log(&format!("settle at {}", e.position));
    }

    fn on_reset(&mut self, e: &ResetEvent) {
        self.log(&format!("reset from {} locked={}", e.from, e.was_locked));
    }

    fn on_offset(&mut self, e: &OffsetEvent) {
        self.log(&format!(
            "offset {} = {}px {:?}",
            e.position, e.offset_x, e.motion
        ));
    }

    fn on_inert(&mut self, reason: Inert) {
        self.log(&format!("inert: {reason}"));
    }
}

fn input_line(e: &InputEvent, timebase: Timebase) -> String {
    let ms = timebase.ticks_to_nanos(e.at.ticks()) / 1_000_000;
    format!("input {:?} at {ms}ms", e.kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::time::HostTime;
    use vitrine_core::trace::InputKind;

    #[test]
    fn input_line_shows_milliseconds() {
        let e = InputEvent {
            kind: InputKind::Next,
            at: HostTime(1_250_000),
        };
        assert_eq!(input_line(&e, Timebase::MICROS), "input Next at 1250ms");
    }
}
