// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transport contract for moving the visual strip.
//!
//! Vitrine splits platform work into backend crates. For the carousel, a
//! backend provides:
//!
//! - **Transport**: Implements [`Transport`] to translate the strip, either
//!   with a movement animation or instantly.
//!
//! - **Completion**: Reports the end of each animated movement back to
//!   [`Carousel::transition_complete`](crate::carousel::Carousel::transition_complete).
//!   The notification must fire exactly once per animated movement and never
//!   for an instant one; backends gate their platform event through a
//!   [`CompletionLatch`] to guarantee this.
//!
//! - **Geometry**: Implements [`Geometry`](crate::geometry::Geometry).

use alloc::vec::Vec;

use kurbo::Vec2;

/// Whether a strip movement is animated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Motion {
    /// Move with the configured transition; completion will be reported.
    Animated,
    /// Jump without a transition; no completion is reported.
    Instant,
}

/// Applies strip offsets to a rendering surface.
///
/// Both the DOM track and in-memory test doubles implement this trait, so the
/// state machine can be exercised without a browser.
pub trait Transport {
    /// Translates the strip to `offset`, animated or not.
    ///
    /// Offsets are negative along x: the strip slides left as the position
    /// grows.
    fn apply(&mut self, offset: Vec2, motion: Motion);

    /// Forces pending style changes to be committed.
    ///
    /// Called between an instant jump and an animated move in the same input
    /// so the jump is not folded into the animation.
    fn flush(&mut self);
}

/// One-shot guard for movement-completion notifications.
///
/// [`arm`](Self::arm) on every animated apply, [`disarm`](Self::disarm) on
/// every instant one, and pass each platform completion event through
/// [`fire`](Self::fire): it returns `true` at most once per arming.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompletionLatch {
    armed: bool,
}

impl CompletionLatch {
    /// Creates a disarmed latch.
    #[must_use]
    pub const fn new() -> Self {
        Self { armed: false }
    }

    /// Expects one completion.
    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// Drops any pending expectation.
    pub fn disarm(&mut self) {
        self.armed = false;
    }

    /// Updates the latch for a movement of the given kind.
    pub fn track(&mut self, motion: Motion) {
        match motion {
            Motion::Animated => self.arm(),
            Motion::Instant => self.disarm(),
        }
    }

    /// Consumes the pending expectation, returning whether there was one.
    pub fn fire(&mut self) -> bool {
        core::mem::replace(&mut self.armed, false)
    }

    /// Whether a completion is currently expected.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed
    }
}

/// A single call made on a [`RecordingTransport`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransportOp {
    /// An [`apply`](Transport::apply) call.
    Apply {
        /// Offset applied.
        offset: Vec2,
        /// Whether it was animated.
        motion: Motion,
    },
    /// A [`flush`](Transport::flush) call.
    Flush,
}

/// An in-memory [`Transport`] that records every operation.
///
/// Also tracks a [`CompletionLatch`] the way a real backend would, so tests
/// can deliver completions with [`finish_animation`](Self::finish_animation).
#[derive(Clone, Debug, Default)]
pub struct RecordingTransport {
    ops: Vec<TransportOp>,
    latch: CompletionLatch,
}

impl RecordingTransport {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All operations so far, oldest first.
    #[must_use]
    pub fn ops(&self) -> &[TransportOp] {
        &self.ops
    }

    /// Clears the recorded operations (the latch is kept).
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// The most recently applied offset and motion.
    #[must_use]
    pub fn last_apply(&self) -> Option<(Vec2, Motion)> {
        self.ops.iter().rev().find_map(|op| match *op {
            TransportOp::Apply { offset, motion } => Some((offset, motion)),
            TransportOp::Flush => None,
        })
    }

    /// Simulates the end of the in-flight animation.
    ///
    /// Returns `true` if a completion notification should be delivered.
    pub fn finish_animation(&mut self) -> bool {
        self.latch.fire()
    }

    /// Whether an animated movement is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.latch.is_armed()
    }
}

impl Transport for RecordingTransport {
    fn apply(&mut self, offset: Vec2, motion: Motion) {
        self.latch.track(motion);
        self.ops.push(TransportOp::Apply { offset, motion });
    }

    fn flush(&mut self) {
        self.ops.push(TransportOp::Flush);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_once_per_arming() {
        let mut latch = CompletionLatch::new();
        assert!(!latch.fire(), "disarmed latch never fires");
        latch.arm();
        assert!(latch.fire());
        assert!(!latch.fire(), "second event for the same movement is dropped");
    }

    #[test]
    fn instant_motion_disarms() {
        let mut latch = CompletionLatch::new();
        latch.track(Motion::Animated);
        latch.track(Motion::Instant);
        assert!(!latch.fire(), "instant jump cancels the pending completion");
    }

    #[test]
    fn recording_transport_tracks_animation() {
        let mut t = RecordingTransport::new();
        t.apply(Vec2::new(-220.0, 0.0), Motion::Animated);
        assert!(t.is_animating());
        assert_eq!(
            t.last_apply(),
            Some((Vec2::new(-220.0, 0.0), Motion::Animated))
        );
        assert!(t.finish_animation());
        assert!(!t.finish_animation(), "one notification per movement");

        t.apply(Vec2::ZERO, Motion::Instant);
        t.flush();
        assert!(!t.finish_animation(), "instant moves never notify");
        assert_eq!(t.ops().len(), 3);
        assert_eq!(t.ops()[2], TransportOp::Flush);
    }
}
