// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and Chrome trace export for vitrine carousel
//! diagnostics.
//!
//! This crate provides [`TraceSink`](vitrine_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: compact binary recording with
//!   [`recorder::decode`] for playback.
//! - [`chrome::export`]: writes Chrome Trace Event Format JSON from recorded
//!   bytes.
//! - [`Tee`]: fans events out to two sinks.

pub mod chrome;
pub mod pretty;
pub mod recorder;

use vitrine_core::carousel::Inert;
use vitrine_core::trace::{
    AdvanceEvent, IgnoredEvent, InputEvent, OffsetEvent, ResetEvent, RewindEvent, SettleEvent,
    TraceSink,
};

/// Forwards every event to both inner sinks, `A` first.
#[derive(Debug, Default)]
pub struct Tee<A, B> {
    /// First receiver.
    pub a: A,
    /// Second receiver.
    pub b: B,
}

impl<A: TraceSink, B: TraceSink> TraceSink for Tee<A, B> {
    fn on_input(&mut self, e: &InputEvent) {
        self.a.on_input(e);
        self.b.on_input(e);
    }

    fn on_advance(&mut self, e: &AdvanceEvent) {
        self.a.on_advance(e);
        self.b.on_advance(e);
    }

    fn on_ignored(&mut self, e: &IgnoredEvent) {
        self.a.on_ignored(e);
        self.b.on_ignored(e);
    }

    fn on_rewind(&mut self, e: &RewindEvent) {
        self.a.on_rewind(e);
        self.b.on_rewind(e);
    }

    fn on_settle(&mut self, e: &SettleEvent) {
        self.a.on_settle(e);
        self.b.on_settle(e);
    }

    fn on_reset(&mut self, e: &ResetEvent) {
        self.a.on_reset(e);
        self.b.on_reset(e);
    }

    fn on_offset(&mut self, e: &OffsetEvent) {
        self.a.on_offset(e);
        self.b.on_offset(e);
    }

    fn on_inert(&mut self, reason: Inert) {
        self.a.on_inert(reason);
        self.b.on_inert(reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::{RecorderSink, decode};

    #[test]
    fn tee_feeds_both_sinks() {
        let mut tee = Tee {
            a: RecorderSink::new(),
            b: RecorderSink::new(),
        };
        tee.on_settle(&SettleEvent { position: 3 });
        tee.on_inert(Inert::NoCards);
        assert_eq!(decode(tee.a.as_bytes()).count(), 2);
        assert_eq!(tee.a.as_bytes(), tee.b.as_bytes());
    }
}
