// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The infinite carousel state machine.
//!
//! The strip shows a [`CardSet`](crate::cards::CardSet) display sequence of
//! 2N cards. The logical position is the index of the leading (leftmost
//! visible) display card. Movements are animated one card at a time, and at
//! most one movement is ever in flight:
//!
//! ```text
//!            advance (moves, animated)
//!   ┌──────┐ ──────────────────────────► ┌───────────────┐
//!   │ Idle │                             │ Transitioning │ ── advance: ignored
//!   └──────┘ ◄────────────────────────── └───────────────┘
//!      │      transition_complete
//!      │      (rewinds silently if position >= N)
//!      └── transition_complete: ignored
//! ```
//!
//! # Silent rewinds
//!
//! Position `i` and `i + N` render the same card, so the carousel can jump
//! between them with [`Motion::Instant`] without a visible change:
//!
//! - **Forward**: after the movement onto position N completes, the position
//!   drops back by N.
//! - **Backward at 0**: the position first jumps to N, the transport is
//!   flushed so the jump is committed, and then the animated step to N − 1
//!   starts.
//!
//! Geometry is read on every render, never cached.

use core::fmt;

use kurbo::Vec2;

use crate::geometry::Geometry;
use crate::trace::{
    AdvanceEvent, IgnoredEvent, OffsetEvent, ResetEvent, RewindEvent, Seam, SettleEvent, Tracer,
};
use crate::transport::{Motion, Transport};

/// Navigation direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward higher positions (the "next" control).
    Forward,
    /// Toward lower positions (the "previous" control).
    Backward,
}

/// Whether a movement is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No movement in flight; advances are accepted.
    #[default]
    Idle,
    /// An animated movement is in flight; advances are dropped.
    Transitioning,
}

/// Why a carousel did not activate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Inert {
    /// There are no cards, or the cards have no measurable width.
    NoCards,
    /// The un-duplicated strip fits inside the viewport.
    FitsViewport,
}

impl fmt::Display for Inert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCards => f.write_str("carousel has no measurable cards"),
            Self::FitsViewport => f.write_str("carousel content fits the viewport"),
        }
    }
}

/// Outcome of an [`advance`](Carousel::advance) request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Advance {
    /// An animated movement started.
    Moved {
        /// Position before the request.
        from: usize,
        /// Position being animated to.
        to: usize,
    },
    /// A movement was already in flight; nothing changed.
    Ignored,
}

/// Outcome of a [`transition_complete`](Carousel::transition_complete)
/// notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Completion {
    /// No movement was in flight; nothing changed.
    Ignored,
    /// The movement ended inside the original cards.
    Settled {
        /// Final position.
        position: usize,
    },
    /// The movement ended on the clone tail and was silently rewound.
    Rewound {
        /// Position the movement ended on.
        from: usize,
        /// Equivalent position among the originals.
        to: usize,
    },
}

/// Infinite-loop carousel over a duplicated card strip.
///
/// The geometry provider and transport are injected, so the state machine
/// runs identically against the DOM and against test doubles.
#[derive(Debug)]
pub struct Carousel<G, T> {
    geometry: G,
    transport: T,
    original_count: usize,
    position: usize,
    phase: Phase,
}

impl<G: Geometry, T: Transport> Carousel<G, T> {
    /// Activates a carousel over `original_count` cards.
    ///
    /// Fails with an [`Inert`] reason when there is nothing to navigate. An
    /// inert carousel never changes state; the caller should hide its
    /// controls. Activation does not render: callers reset once layout has
    /// settled.
    pub fn activate(
        original_count: usize,
        geometry: G,
        transport: T,
        tracer: &mut Tracer<'_>,
    ) -> Result<Self, Inert> {
        let distance = geometry.move_distance();
        let reason = if original_count == 0 || distance.is_nan() || distance <= 0.0 {
            Some(Inert::NoCards)
        } else if !geometry.overflows() {
            Some(Inert::FitsViewport)
        } else {
            None
        };
        if let Some(reason) = reason {
            tracer.inert(reason);
            return Err(reason);
        }
        Ok(Self {
            geometry,
            transport,
            original_count,
            position: 0,
            phase: Phase::Idle,
        })
    }

    /// Requests a one-card movement in `direction`.
    ///
    /// Dropped (not queued) while a movement is in flight.
    pub fn advance(&mut self, direction: Direction, tracer: &mut Tracer<'_>) -> Advance {
        match self.phase {
            Phase::Transitioning => {
                tracer.ignored(&IgnoredEvent {
                    direction,
                    position: self.position,
                });
                Advance::Ignored
            }
            Phase::Idle => {
                let from = self.position;
                match direction {
                    Direction::Forward => self.position += 1,
                    Direction::Backward => {
                        if self.position == 0 {
                            self.position = self.original_count;
                            tracer.rewind(&RewindEvent {
                                from: 0,
                                to: self.position,
                                seam: Seam::Head,
                            });
                            self.render(Motion::Instant, tracer);
                            self.transport.flush();
                        }
                        self.position -= 1;
                    }
                }
                debug_assert!(
                    self.position < self.display_len(),
                    "position stays inside the display sequence"
                );
                self.phase = Phase::Transitioning;
                self.render(Motion::Animated, tracer);
                tracer.advance(&AdvanceEvent {
                    direction,
                    from,
                    to: self.position,
                });
                Advance::Moved {
                    from,
                    to: self.position,
                }
            }
        }
    }

    /// Shorthand for `advance(Direction::Forward, ..)`.
    pub fn next(&mut self, tracer: &mut Tracer<'_>) -> Advance {
        self.advance(Direction::Forward, tracer)
    }

    /// Shorthand for `advance(Direction::Backward, ..)`.
    pub fn previous(&mut self, tracer: &mut Tracer<'_>) -> Advance {
        self.advance(Direction::Backward, tracer)
    }

    /// Handles the end of the in-flight movement.
    ///
    /// Returns to [`Phase::Idle`]; if the movement ended on the clone tail the
    /// position is rewound by N with [`Motion::Instant`]. Ignored when idle.
    pub fn transition_complete(&mut self, tracer: &mut Tracer<'_>) -> Completion {
        match self.phase {
            Phase::Idle => Completion::Ignored,
            Phase::Transitioning => {
                self.phase = Phase::Idle;
                let from = self.position;
                tracer.settle(&SettleEvent { position: from });
                if from >= self.original_count {
                    self.position = from - self.original_count;
                    tracer.rewind(&RewindEvent {
                        from,
                        to: self.position,
                        seam: Seam::Tail,
                    });
                    self.render(Motion::Instant, tracer);
                    Completion::Rewound {
                        from,
                        to: self.position,
                    }
                } else {
                    Completion::Settled { position: from }
                }
            }
        }
    }

    /// Forces position 0 without animation and returns to [`Phase::Idle`].
    ///
    /// Used after the viewport settles from a resize. Any in-flight movement
    /// is abandoned; its completion, if it still arrives, is ignored.
    pub fn reset(&mut self, tracer: &mut Tracer<'_>) {
        let from = self.position;
        let was_locked = self.phase == Phase::Transitioning;
        self.position = 0;
        self.phase = Phase::Idle;
        self.render(Motion::Instant, tracer);
        tracer.reset(&ResetEvent { from, was_locked });
    }

    /// Translation of the strip for `position` under the current layout.
    #[must_use]
    pub fn offset_for(&self, position: usize) -> Vec2 {
        Vec2::new(-(position as f64) * self.geometry.move_distance(), 0.0)
    }

    /// Translation of the strip for the current position.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset_for(self.position)
    }

    fn render(&mut self, motion: Motion, tracer: &mut Tracer<'_>) {
        let offset = self.offset();
        self.transport.apply(offset, motion);
        tracer.offset(&OffsetEvent {
            position: self.position,
            offset_x: offset.x,
            motion,
        });
    }
}

impl<G, T> Carousel<G, T> {
    /// Index of the leading display card.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current phase.
    #[inline]
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a movement is in flight.
    #[inline]
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.phase == Phase::Transitioning
    }

    /// Number of original cards, N.
    #[inline]
    #[must_use]
    pub fn original_count(&self) -> usize {
        self.original_count
    }

    /// Length of the display sequence, 2N.
    #[inline]
    #[must_use]
    pub fn display_len(&self) -> usize {
        self.original_count * 2
    }

    /// The injected geometry provider.
    #[must_use]
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// The injected transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutable access to the injected transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::FixedGeometry;
    use crate::transport::{RecordingTransport, TransportOp};
    use alloc::vec::Vec;

    type TestCarousel = Carousel<FixedGeometry, RecordingTransport>;

    fn six_cards() -> TestCarousel {
        Carousel::activate(
            6,
            FixedGeometry::strip(6, 220.0, 900.0),
            RecordingTransport::new(),
            &mut Tracer::none(),
        )
        .unwrap()
    }

    /// Delivers the completion the transport would report, if any.
    fn finish(c: &mut TestCarousel) -> Completion {
        assert!(
            c.transport_mut().finish_animation(),
            "an animated movement must be in flight"
        );
        c.transition_complete(&mut Tracer::none())
    }

    #[test]
    fn forward_wraps_after_n_steps() {
        let mut c = six_cards();
        let mut seen = Vec::new();
        for step in 1..=6 {
            let moved = c.next(&mut Tracer::none());
            assert_eq!(moved, Advance::Moved { from: step - 1, to: step });
            seen.push(c.position());
            let done = finish(&mut c);
            if step < 6 {
                assert_eq!(done, Completion::Settled { position: step });
            } else {
                assert_eq!(done, Completion::Rewound { from: 6, to: 0 });
            }
        }
        assert_eq!(seen, &[1, 2, 3, 4, 5, 6]);
        assert_eq!(c.position(), 0);
        assert_eq!(
            c.transport().last_apply(),
            Some((Vec2::new(0.0, 0.0), Motion::Instant)),
            "tail rewind is silent"
        );
        assert!(!c.transport().is_animating(), "no notification for the rewind");
    }

    #[test]
    fn exactly_one_rewind_per_lap() {
        let mut c = six_cards();
        let mut rewinds = 0;
        for _ in 0..18 {
            c.next(&mut Tracer::none());
            if matches!(finish(&mut c), Completion::Rewound { .. }) {
                rewinds += 1;
            }
        }
        assert_eq!(rewinds, 3, "one rewind every N advances");
        assert_eq!(c.position(), 0);
    }

    #[test]
    fn backward_at_zero_jumps_then_animates() {
        let mut c = six_cards();
        let moved = c.previous(&mut Tracer::none());
        assert_eq!(moved, Advance::Moved { from: 0, to: 5 });
        assert_eq!(c.position(), 5);
        assert!(c.is_locked());
        assert_eq!(
            c.transport().ops(),
            &[
                TransportOp::Apply {
                    offset: Vec2::new(-1320.0, 0.0),
                    motion: Motion::Instant,
                },
                TransportOp::Flush,
                TransportOp::Apply {
                    offset: Vec2::new(-1100.0, 0.0),
                    motion: Motion::Animated,
                },
            ],
            "silent jump to N is committed before the animated step"
        );
        assert_eq!(finish(&mut c), Completion::Settled { position: 5 });
    }

    #[test]
    fn backward_from_inside_just_decrements() {
        let mut c = six_cards();
        c.next(&mut Tracer::none());
        finish(&mut c);
        c.transport_mut().clear();
        assert_eq!(
            c.previous(&mut Tracer::none()),
            Advance::Moved { from: 1, to: 0 }
        );
        assert_eq!(c.transport().ops().len(), 1, "no rewind away from the head");
    }

    #[test]
    fn advance_while_locked_is_a_no_op() {
        let mut c = six_cards();
        c.next(&mut Tracer::none());
        c.transport_mut().clear();
        for _ in 0..5 {
            assert_eq!(c.next(&mut Tracer::none()), Advance::Ignored);
            assert_eq!(c.previous(&mut Tracer::none()), Advance::Ignored);
        }
        assert_eq!(c.position(), 1);
        assert_eq!(c.phase(), Phase::Transitioning);
        assert!(c.transport().ops().is_empty(), "nothing rendered while locked");
    }

    #[test]
    fn completion_while_idle_is_a_no_op() {
        let mut c = six_cards();
        assert_eq!(c.transition_complete(&mut Tracer::none()), Completion::Ignored);
        assert_eq!(c.position(), 0);
        assert_eq!(c.phase(), Phase::Idle);
        assert!(c.transport().ops().is_empty());
    }

    #[test]
    fn reset_returns_to_zero_from_anywhere() {
        let mut c = six_cards();
        for _ in 0..3 {
            c.next(&mut Tracer::none());
            finish(&mut c);
        }
        c.next(&mut Tracer::none());
        assert!(c.is_locked());

        c.reset(&mut Tracer::none());
        assert_eq!(c.position(), 0);
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(
            c.transport().last_apply(),
            Some((Vec2::new(0.0, 0.0), Motion::Instant))
        );
        assert!(
            !c.transport_mut().finish_animation(),
            "abandoned movement reports nothing"
        );
        assert_eq!(c.transition_complete(&mut Tracer::none()), Completion::Ignored);
    }

    #[test]
    fn offsets_follow_live_geometry() {
        let c = six_cards();
        assert_eq!(c.offset_for(3), Vec2::new(-660.0, 0.0));
        assert_eq!(c.display_len(), 12);
    }

    #[test]
    fn inert_without_cards() {
        let r = Carousel::activate(
            0,
            FixedGeometry::strip(0, 0.0, 900.0),
            RecordingTransport::new(),
            &mut Tracer::none(),
        );
        assert_eq!(r.err(), Some(Inert::NoCards));
    }

    #[test]
    fn inert_when_strip_fits() {
        let r = Carousel::activate(
            3,
            FixedGeometry::strip(3, 220.0, 900.0),
            RecordingTransport::new(),
            &mut Tracer::none(),
        );
        assert_eq!(r.err(), Some(Inert::FitsViewport));
    }

    #[test]
    fn single_card_still_loops() {
        let mut c = Carousel::activate(
            1,
            FixedGeometry {
                move_distance: 320.0,
                content_width: 320.0,
                viewport_width: 300.0,
            },
            RecordingTransport::new(),
            &mut Tracer::none(),
        )
        .unwrap();
        c.next(&mut Tracer::none());
        assert_eq!(finish(&mut c), Completion::Rewound { from: 1, to: 0 });
        assert_eq!(c.previous(&mut Tracer::none()), Advance::Moved { from: 0, to: 0 });
    }
}
