// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the carousel.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! state machine and input controller call at each step. All method bodies
//! default to no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::carousel::{Direction, Inert};
use crate::time::HostTime;
use crate::transport::Motion;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which input reached the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// "Next" control activated.
    Next,
    /// "Previous" control activated.
    Previous,
    /// Viewport resized (before settling).
    Resize,
    /// The resize settle timer fired.
    Settle,
    /// The backend reported the end of an animated movement.
    TransitionEnd,
}

/// Which side of the clone seam a silent rewind crossed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Seam {
    /// Backward from the head: position 0 jumps to N.
    Head,
    /// Forward into the clone tail: position N (or beyond) jumps back by N.
    Tail,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when an input reaches the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputEvent {
    /// Which input.
    pub kind: InputKind,
    /// Host time of delivery.
    pub at: HostTime,
}

/// Emitted when an advance starts an animated movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdvanceEvent {
    /// Requested direction.
    pub direction: Direction,
    /// Position before the request (before any head rewind).
    pub from: usize,
    /// Position the animation moves to.
    pub to: usize,
}

/// Emitted when an advance is dropped because a movement is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IgnoredEvent {
    /// Requested direction.
    pub direction: Direction,
    /// Position at the time of the request.
    pub position: usize,
}

/// Emitted when the position jumps across the seam without animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewindEvent {
    /// Position before the jump.
    pub from: usize,
    /// Position after the jump.
    pub to: usize,
    /// Which side of the seam.
    pub seam: Seam,
}

/// Emitted when a movement completes and the carousel returns to idle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettleEvent {
    /// Position the movement ended on (before any tail rewind).
    pub position: usize,
}

/// Emitted when a resize forces the carousel back to position 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetEvent {
    /// Position before the reset.
    pub from: usize,
    /// Whether a movement was in flight when the reset happened.
    pub was_locked: bool,
}

/// Emitted whenever an offset is handed to the transport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetEvent {
    /// Logical position rendered.
    pub position: usize,
    /// Horizontal translation in pixels (non-positive).
    pub offset_x: f64,
    /// Whether the move was animated.
    pub motion: Motion,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the carousel.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when an input reaches the controller.
    fn on_input(&mut self, e: &InputEvent) {
        _ = e;
    }

    /// Called when an advance starts a movement.
    fn on_advance(&mut self, e: &AdvanceEvent) {
        _ = e;
    }

    /// Called when an advance is dropped while locked.
    fn on_ignored(&mut self, e: &IgnoredEvent) {
        _ = e;
    }

    /// Called on a silent rewind across the seam.
    fn on_rewind(&mut self, e: &RewindEvent) {
        _ = e;
    }

    /// Called when a movement completes.
    fn on_settle(&mut self, e: &SettleEvent) {
        _ = e;
    }

    /// Called when a resize resets the carousel.
    fn on_reset(&mut self, e: &ResetEvent) {
        _ = e;
    }

    /// Called for every offset handed to the transport.
    fn on_offset(&mut self, e: &OffsetEvent) {
        _ = e;
    }

    /// Called when activation finds the carousel inert.
    fn on_inert(&mut self, reason: Inert) {
        _ = reason;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits an [`InputEvent`].
    #[inline]
    pub fn input(&mut self, e: &InputEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_input(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`AdvanceEvent`].
    #[inline]
    pub fn advance(&mut self, e: &AdvanceEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_advance(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`IgnoredEvent`].
    #[inline]
    pub fn ignored(&mut self, e: &IgnoredEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_ignored(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RewindEvent`].
    #[inline]
    pub fn rewind(&mut self, e: &RewindEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_rewind(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SettleEvent`].
    #[inline]
    pub fn settle(&mut self, e: &SettleEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_settle(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ResetEvent`].
    #[inline]
    pub fn reset(&mut self, e: &ResetEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_reset(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`OffsetEvent`].
    #[inline]
    pub fn offset(&mut self, e: &OffsetEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_offset(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Reports an inert activation.
    #[inline]
    pub fn inert(&mut self, reason: Inert) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_inert(reason);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = reason;
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
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_input(&InputEvent {
            kind: InputKind::Next,
            at: HostTime(0),
        });
        sink.on_rewind(&RewindEvent {
            from: 6,
            to: 0,
            seam: Seam::Tail,
        });
        sink.on_inert(Inert::NoCards);
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.advance(&AdvanceEvent {
            direction: Direction::Forward,
            from: 0,
            to: 1,
        });
        tracer.settle(&SettleEvent { position: 1 });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            rewinds: Vec<(usize, usize)>,
        }
        impl TraceSink for RecordingSink {
            fn on_rewind(&mut self, e: &RewindEvent) {
                self.rewinds.push((e.from, e.to));
            }
        }

        let mut sink = RecordingSink {
            rewinds: Vec::new(),
        };
        let mut tracer = Tracer::new(&mut sink);
        tracer.rewind(&RewindEvent {
            from: 0,
            to: 6,
            seam: Seam::Head,
        });
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.rewinds, &[(0, 6)]);
    }
}
