// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`RecordedEvent`].

use vitrine_core::carousel::{Direction, Inert};
use vitrine_core::time::HostTime;
use vitrine_core::trace::{
    AdvanceEvent, IgnoredEvent, InputEvent, InputKind, OffsetEvent, ResetEvent, RewindEvent,
    Seam, SettleEvent, TraceSink,
};
use vitrine_core::transport::Motion;

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_INPUT: u8 = 1;
const TAG_ADVANCE: u8 = 2;
const TAG_IGNORED: u8 = 3;
const TAG_REWIND: u8 = 4;
const TAG_SETTLE: u8 = 5;
const TAG_RESET: u8 = 6;
const TAG_OFFSET: u8 = 7;
const TAG_INERT: u8 = 8;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_position(&mut self, v: usize) {
        self.write_u64(v as u64);
    }

    fn write_direction(&mut self, d: Direction) {
        self.write_u8(match d {
            Direction::Forward => 0,
            Direction::Backward => 1,
        });
    }

    fn write_motion(&mut self, m: Motion) {
        self.write_u8(match m {
            Motion::Animated => 0,
            Motion::Instant => 1,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_input(&mut self, e: &InputEvent) {
        self.write_u8(TAG_INPUT);
        self.write_u8(match e.kind {
            InputKind::Next => 0,
            InputKind::Previous => 1,
            InputKind::Resize => 2,
            InputKind::Settle => 3,
            InputKind::TransitionEnd => 4,
        });
        self.write_u64(e.at.ticks());
    }

    fn on_advance(&mut self, e: &AdvanceEvent) {
        self.write_u8(TAG_ADVANCE);
        self.write_direction(e.direction);
        self.write_position(e.from);
        self.write_position(e.to);
    }

    fn on_ignored(&mut self, e: &IgnoredEvent) {
        self.write_u8(TAG_IGNORED);
        self.write_direction(e.direction);
        self.write_position(e.position);
    }

    fn on_rewind(&mut self, e: &RewindEvent) {
        self.write_u8(TAG_REWIND);
        self.write_position(e.from);
        self.write_position(e.to);
        self.write_u8(match e.seam {
            Seam::Head => 0,
            Seam::Tail => 1,
        });
    }

    fn on_settle(&mut self, e: &SettleEvent) {
        self.write_u8(TAG_SETTLE);
        self.write_position(e.position);
    }

    fn on_reset(&mut self, e: &ResetEvent) {
        self.write_u8(TAG_RESET);
        self.write_position(e.from);
        self.write_u8(u8::from(e.was_locked));
    }

    fn on_offset(&mut self, e: &OffsetEvent) {
        self.write_u8(TAG_OFFSET);
        self.write_position(e.position);
        self.write_u64(e.offset_x.to_bits());
        self.write_motion(e.motion);
    }

    fn on_inert(&mut self, reason: Inert) {
        self.write_u8(TAG_INERT);
        self.write_u8(match reason {
            Inert::NoCards => 0,
            Inert::FitsViewport => 1,
        });
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecordedEvent {
    /// An [`InputEvent`].
    Input(InputEvent),
    /// An [`AdvanceEvent`].
    Advance(AdvanceEvent),
    /// An [`IgnoredEvent`].
    Ignored(IgnoredEvent),
    /// A [`RewindEvent`].
    Rewind(RewindEvent),
    /// A [`SettleEvent`].
    Settle(SettleEvent),
    /// A [`ResetEvent`].
    Reset(ResetEvent),
    /// An [`OffsetEvent`].
    Offset(OffsetEvent),
    /// Activation found the carousel inert.
    Inert(Inert),
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn read_u8(&mut self) -> Option<u8> {
        if self.remaining() < 1 {
            return None;
        }
        let v = self.data[self.pos];
        self.pos += 1;
        Some(v)
    }

    fn read_u64(&mut self) -> Option<u64> {
        if self.remaining() < 8 {
            return None;
        }
        let v = u64::from_le_bytes(self.data[self.pos..self.pos + 8].try_into().ok()?);
        self.pos += 8;
        Some(v)
    }

    fn read_position(&mut self) -> Option<usize> {
        usize::try_from(self.read_u64()?).ok()
    }

    fn read_direction(&mut self) -> Option<Direction> {
        Some(match self.read_u8()? {
            0 => Direction::Forward,
            _ => Direction::Backward,
        })
    }

    fn read_motion(&mut self) -> Option<Motion> {
        Some(match self.read_u8()? {
            0 => Motion::Animated,
            _ => Motion::Instant,
        })
    }

    fn decode_input(&mut self) -> Option<RecordedEvent> {
        let kind = match self.read_u8()? {
            0 => InputKind::Next,
            1 => InputKind::Previous,
            2 => InputKind::Resize,
            3 => InputKind::Settle,
            4 => InputKind::TransitionEnd,
            _ => return None,
        };
        Some(RecordedEvent::Input(InputEvent {
            kind,
            at: HostTime(self.read_u64()?),
        }))
    }

    fn decode_advance(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Advance(AdvanceEvent {
            direction: self.read_direction()?,
            from: self.read_position()?,
            to: self.read_position()?,
        }))
    }

    fn decode_ignored(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Ignored(IgnoredEvent {
            direction: self.read_direction()?,
            position: self.read_position()?,
        }))
    }

    fn decode_rewind(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Rewind(RewindEvent {
            from: self.read_position()?,
            to: self.read_position()?,
            seam: match self.read_u8()? {
                0 => Seam::Head,
                _ => Seam::Tail,
            },
        }))
    }

    fn decode_settle(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Settle(SettleEvent {
            position: self.read_position()?,
        }))
    }

    fn decode_reset(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Reset(ResetEvent {
            from: self.read_position()?,
            was_locked: self.read_u8()? != 0,
        }))
    }

    fn decode_offset(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Offset(OffsetEvent {
            position: self.read_position()?,
            offset_x: f64::from_bits(self.read_u64()?),
            motion: self.read_motion()?,
        }))
    }

    fn decode_inert(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Inert(match self.read_u8()? {
            0 => Inert::NoCards,
            _ => Inert::FitsViewport,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_INPUT => self.decode_input(),
            TAG_ADVANCE => self.decode_advance(),
            TAG_IGNORED => self.decode_ignored(),
            TAG_REWIND => self.decode_rewind(),
            TAG_SETTLE => self.decode_settle(),
            TAG_RESET => self.decode_reset(),
            TAG_OFFSET => self.decode_offset(),
            TAG_INERT => self.decode_inert(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_a_backward_wrap_in_order() {
        let mut rec = RecorderSink::new();
        rec.on_input(&InputEvent {
            kind: InputKind::Previous,
            at: HostTime(1_500),
        });
        rec.on_rewind(&RewindEvent {
            from: 0,
            to: 6,
            seam: Seam::Head,
        });
        rec.on_offset(&OffsetEvent {
            position: 6,
            offset_x: -1320.0,
            motion: Motion::Instant,
        });
        rec.on_advance(&AdvanceEvent {
            direction: Direction::Backward,
            from: 0,
            to: 5,
        });
        rec.on_offset(&OffsetEvent {
            position: 5,
            offset_x: -1100.0,
            motion: Motion::Animated,
        });

        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(events.len(), 5);
        match &events[0] {
            RecordedEvent::Input(e) => {
                assert_eq!(e.kind, InputKind::Previous);
                assert_eq!(e.at, HostTime(1_500));
            }
            other => panic!("expected Input, got {other:?}"),
        }
        match &events[1] {
            RecordedEvent::Rewind(e) => {
                assert_eq!((e.from, e.to), (0, 6));
                assert_eq!(e.seam, Seam::Head);
            }
            other => panic!("expected Rewind, got {other:?}"),
        }
        match &events[4] {
            RecordedEvent::Offset(e) => {
                assert_eq!(e.position, 5);
                assert_eq!(e.offset_x, -1100.0);
                assert_eq!(e.motion, Motion::Animated);
            }
            other => panic!("expected Offset, got {other:?}"),
        }
    }

    #[test]
    fn reset_and_inert_survive_recording() {
        let mut rec = RecorderSink::new();
        rec.on_reset(&ResetEvent {
            from: 4,
            was_locked: true,
        });
        rec.on_inert(Inert::FitsViewport);
        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(
            events,
            [
                RecordedEvent::Reset(ResetEvent {
                    from: 4,
                    was_locked: true,
                }),
                RecordedEvent::Inert(Inert::FitsViewport),
            ]
        );
    }

    #[test]
    fn truncated_record_stops_iteration() {
        let mut rec = RecorderSink::new();
        rec.on_settle(&SettleEvent { position: 2 });
        rec.on_settle(&SettleEvent { position: 3 });
        let bytes = rec.into_bytes();
        let events: Vec<_> = decode(&bytes[..bytes.len() - 1]).collect();
        assert_eq!(events, [RecordedEvent::Settle(SettleEvent { position: 2 })]);
    }

    #[test]
    fn unknown_tag_stops_iteration() {
        let events: Vec<_> = decode(&[0xFF, 1, 2, 3]).collect();
        assert!(events.is_empty());
    }
}
