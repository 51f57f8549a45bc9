// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel track presentation.
//!
//! Translates [`Transport`] calls into inline styles on the track element:
//! `transform: translateX(..)` for the offset, and `transition` set to the
//! configured movement or to `none` for silent jumps.
//!
//! [`Transport`]: vitrine_core::transport::Transport

use kurbo::Vec2;
use vitrine_core::transport::{CompletionLatch, Motion, Transport};
use web_sys::{EventTarget, HtmlElement};

/// [`Transport`] over a DOM track element.
///
/// Owns the [`CompletionLatch`] for the track's `transitionend` events:
/// only the first matching event after an animated move is accepted by
/// [`accept_transition_end`](Self::accept_transition_end).
pub struct DomTrack {
    track: HtmlElement,
    transition: String,
    latch: CompletionLatch,
}

impl core::fmt::Debug for DomTrack {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomTrack")
            .field("track", &"HtmlElement")
            .field("transition", &self.transition)
            .field("latch", &self.latch)
            .finish()
    }
}

impl DomTrack {
    /// Creates a transport for `track` animating with the CSS `transition`
    /// value (e.g. `"transform 0.5s ease-in-out"`).
    #[must_use]
    pub fn new(track: HtmlElement, transition: String) -> Self {
        Self {
            track,
            transition,
            latch: CompletionLatch::new(),
        }
    }

    /// Returns a reference to the track element.
    #[must_use]
    pub fn element(&self) -> &HtmlElement {
        &self.track
    }

    /// Whether `target` is the track itself.
    ///
    /// `transitionend` bubbles, so card hover transitions also reach the
    /// track's listener.
    fn is_track(&self, target: Option<&EventTarget>) -> bool {
        target.is_some_and(|t| AsRef::<EventTarget>::as_ref(&self.track) == t)
    }

    /// Whether a `transitionend` seen by the track's listener ends the
    /// pending move, consuming it if so.
    ///
    /// `target` and `property` are the event's `target` and `propertyName`.
    pub fn accept_transition_end(&mut self, target: Option<&EventTarget>, property: &str) -> bool {
        let on_track = self.is_track(target);
        completes_move(&mut self.latch, on_track, property)
    }
}

/// The transitioned property that carries a move.
const MOVED_PROPERTY: &str = "transform";

/// Only the track's own `transform` transition ends a move, once per
/// animated apply. Rejected events leave the latch armed.
fn completes_move(latch: &mut CompletionLatch, on_track: bool, property: &str) -> bool {
    on_track && property == MOVED_PROPERTY && latch.fire()
}

impl Transport for DomTrack {
    fn apply(&mut self, offset: Vec2, motion: Motion) {
        let s = self.track.style();
        match motion {
            Motion::Animated => {
                let _ = s.set_property("transition", &self.transition);
            }
            Motion::Instant => {
                let _ = s.set_property("transition", "none");
            }
        }
        let _ = s.set_property("transform", &format_translate(offset));
        self.latch.track(motion);
    }

    fn flush(&mut self) {
        // Reading a layout property forces style recalc, committing the
        // `transition: none` jump before the next write.
        let _ = self.track.offset_height();
    }
}

/// CSS `translateX()` value for a strip offset.
fn format_translate(offset: Vec2) -> String {
    format!("translateX({}px)", offset.x)
}

#[cfg(test)]
mod tests {
    use super::{completes_move, format_translate};
    use kurbo::Vec2;
    use vitrine_core::transport::{CompletionLatch, Motion};

    fn after(motion: Motion) -> CompletionLatch {
        let mut latch = CompletionLatch::new();
        latch.track(motion);
        latch
    }

    #[test]
    fn translate_uses_pixels() {
        assert_eq!(format_translate(Vec2::new(-660.0, 0.0)), "translateX(-660px)");
        assert_eq!(format_translate(Vec2::new(-110.5, 0.0)), "translateX(-110.5px)");
    }

    #[test]
    fn bubbled_card_event_is_rejected() {
        let mut latch = after(Motion::Animated);
        assert!(!completes_move(&mut latch, false, "transform"), "card transition");
        assert!(latch.is_armed(), "move still pending");
        assert!(completes_move(&mut latch, true, "transform"), "track transition");
    }

    #[test]
    fn second_event_for_same_move_is_rejected() {
        let mut latch = after(Motion::Animated);
        assert!(completes_move(&mut latch, true, "transform"), "first event");
        assert!(!completes_move(&mut latch, true, "transform"), "duplicate event");
    }

    #[test]
    fn event_after_instant_apply_is_rejected() {
        // A resize mid-flight resets with an instant jump.
        let mut latch = after(Motion::Animated);
        latch.track(Motion::Instant);
        assert!(!completes_move(&mut latch, true, "transform"), "late event");
    }

    #[test]
    fn other_track_property_is_rejected() {
        let mut latch = after(Motion::Animated);
        assert!(!completes_move(&mut latch, true, "opacity"), "not the move");
        assert!(completes_move(&mut latch, true, "transform"), "the move itself");
    }
}
