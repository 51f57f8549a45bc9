// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input controller: maps user and viewport signals onto the carousel.
//!
//! "Next" and "previous" map directly to advances. Resizes are debounced: a
//! resize only schedules a settle deadline, and the hard reset to position 0
//! happens when the backend's timer calls [`Controller::settle`] after the
//! burst has ended.

use alloc::format;
use alloc::string::String;

use crate::carousel::{Advance, Carousel, Completion, Direction};
use crate::debounce::Debounce;
use crate::geometry::{DEFAULT_GAP, Geometry};
use crate::time::{Duration, HostTime, Timebase};
use crate::trace::{InputEvent, InputKind, Tracer};
use crate::transport::Transport;

/// Configuration for a carousel and its controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Length of one animated movement, in milliseconds.
    pub transition_ms: u32,
    /// CSS easing function for animated movements.
    pub easing: &'static str,
    /// Gap substituted when the track's computed gap is not a number.
    pub default_gap: f64,
    /// Quiet period after the last resize before the carousel resets, in
    /// milliseconds.
    pub settle_ms: u32,
}

impl CarouselConfig {
    /// The portfolio's certificate carousel: half-second eased slides, a
    /// 20px fallback gap, and a 100ms resize settle.
    #[must_use]
    pub const fn portfolio() -> Self {
        Self {
            transition_ms: 500,
            easing: "ease-in-out",
            default_gap: DEFAULT_GAP,
            settle_ms: 100,
        }
    }

    /// CSS `transition` value for animated movements, e.g.
    /// `"transform 0.5s ease-in-out"`.
    #[must_use]
    pub fn transition_css(&self) -> String {
        let secs = f64::from(self.transition_ms) / 1000.0;
        format!("transform {secs}s {}", self.easing)
    }

    /// The settle delay in ticks of `timebase`.
    #[must_use]
    pub const fn settle_delay(&self, timebase: Timebase) -> Duration {
        Duration::from_millis(self.settle_ms, timebase)
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::portfolio()
    }
}

/// A discrete input to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Input {
    /// The "next" control was activated.
    Next,
    /// The "previous" control was activated.
    Previous,
    /// The viewport was resized.
    Resize,
}

/// What the controller did with an [`Input`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Response {
    /// The input was forwarded to the state machine.
    Advanced(Advance),
    /// A resize was recorded; call [`Controller::settle`] at this time.
    SettleAt(HostTime),
}

/// Owns a [`Carousel`] and routes inputs to it.
#[derive(Debug)]
pub struct Controller<G, T> {
    carousel: Carousel<G, T>,
    resize: Debounce,
}

impl<G: Geometry, T: Transport> Controller<G, T> {
    /// Wraps an active carousel, debouncing resizes by `settle_delay`.
    #[must_use]
    pub fn new(carousel: Carousel<G, T>, settle_delay: Duration) -> Self {
        Self {
            carousel,
            resize: Debounce::new(settle_delay),
        }
    }

    /// Routes one input.
    pub fn handle(&mut self, input: Input, now: HostTime, tracer: &mut Tracer<'_>) -> Response {
        let kind = match input {
            Input::Next => InputKind::Next,
            Input::Previous => InputKind::Previous,
            Input::Resize => InputKind::Resize,
        };
        tracer.input(&InputEvent { kind, at: now });
        match input {
            Input::Next => Response::Advanced(self.carousel.advance(Direction::Forward, tracer)),
            Input::Previous => {
                Response::Advanced(self.carousel.advance(Direction::Backward, tracer))
            }
            Input::Resize => Response::SettleAt(self.resize.trigger(now)),
        }
    }

    /// Forwards a movement-completion notification.
    pub fn transition_end(&mut self, now: HostTime, tracer: &mut Tracer<'_>) -> Completion {
        tracer.input(&InputEvent {
            kind: InputKind::TransitionEnd,
            at: now,
        });
        self.carousel.transition_complete(tracer)
    }

    /// Called when a settle timer fires; resets the carousel if the latest
    /// resize has settled.
    ///
    /// Returns whether the reset happened.
    pub fn settle(&mut self, now: HostTime, tracer: &mut Tracer<'_>) -> bool {
        tracer.input(&InputEvent {
            kind: InputKind::Settle,
            at: now,
        });
        if self.resize.poll(now) {
            self.carousel.reset(tracer);
            true
        } else {
            false
        }
    }

    /// Schedules a settle without a resize event, returning its deadline.
    ///
    /// Used once after mounting so the first layout is applied after fonts
    /// and images have had a moment to load.
    pub fn schedule_settle(&mut self, now: HostTime) -> HostTime {
        self.resize.trigger(now)
    }
}

impl<G, T> Controller<G, T> {
    /// The wrapped carousel.
    #[must_use]
    pub fn carousel(&self) -> &Carousel<G, T> {
        &self.carousel
    }

    /// Mutable access to the wrapped carousel.
    pub fn carousel_mut(&mut self) -> &mut Carousel<G, T> {
        &mut self.carousel
    }

    /// The resize settle delay.
    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        self.resize.delay()
    }

    /// The pending settle deadline, if a resize has not settled yet.
    ///
    /// Timers can fire slightly early; backends re-arm until this passes.
    #[must_use]
    pub fn settle_deadline(&self) -> Option<HostTime> {
        self.resize.deadline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::Phase;
    use crate::geometry::FixedGeometry;
    use crate::transport::RecordingTransport;

    fn controller() -> Controller<FixedGeometry, RecordingTransport> {
        let carousel = Carousel::activate(
            6,
            FixedGeometry::strip(6, 220.0, 900.0),
            RecordingTransport::new(),
            &mut Tracer::none(),
        )
        .unwrap();
        Controller::new(carousel, Duration(100))
    }

    #[test]
    fn config_renders_css_transition() {
        let config = CarouselConfig::portfolio();
        assert_eq!(config.transition_css(), "transform 0.5s ease-in-out");
        assert_eq!(config.settle_delay(Timebase::MICROS), Duration(100_000));
    }

    #[test]
    fn next_and_previous_map_to_advances() {
        let mut c = controller();
        let r = c.handle(Input::Next, HostTime(0), &mut Tracer::none());
        assert_eq!(r, Response::Advanced(Advance::Moved { from: 0, to: 1 }));
        let r = c.handle(Input::Previous, HostTime(1), &mut Tracer::none());
        assert_eq!(r, Response::Advanced(Advance::Ignored), "locked");

        c.carousel_mut().transport_mut().finish_animation();
        c.transition_end(HostTime(500), &mut Tracer::none());
        let r = c.handle(Input::Previous, HostTime(600), &mut Tracer::none());
        assert_eq!(r, Response::Advanced(Advance::Moved { from: 1, to: 0 }));
    }

    #[test]
    fn resize_resets_only_after_settling() {
        let mut c = controller();
        c.handle(Input::Next, HostTime(0), &mut Tracer::none());
        c.carousel_mut().transport_mut().finish_animation();
        c.transition_end(HostTime(500), &mut Tracer::none());
        c.handle(Input::Next, HostTime(600), &mut Tracer::none());
        assert_eq!(c.carousel().position(), 2);

        let r = c.handle(Input::Resize, HostTime(1_000), &mut Tracer::none());
        assert_eq!(r, Response::SettleAt(HostTime(1_100)));
        c.handle(Input::Resize, HostTime(1_050), &mut Tracer::none());
        assert!(!c.settle(HostTime(1_100), &mut Tracer::none()), "burst not over");
        assert_eq!(c.carousel().position(), 2);

        assert!(c.settle(HostTime(1_150), &mut Tracer::none()));
        assert_eq!(c.carousel().position(), 0);
        assert_eq!(c.carousel().phase(), Phase::Idle, "reset clears the lock");
    }

    #[test]
    fn initial_settle_renders_position_zero() {
        let mut c = controller();
        let at = c.schedule_settle(HostTime(0));
        assert!(c.settle(at, &mut Tracer::none()));
        assert_eq!(c.carousel().transport().ops().len(), 1);
    }
}
