// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM backend for vitrine.
//!
//! This crate binds the platform-independent logic in `vitrine_core` to
//! browser APIs:
//!
//! - [`DomGeometry`]: card width, computed gap, and viewport measurements
//! - [`DomTrack`]: `transform`/`transition` writes on the carousel track
//! - [`Timeout`]: `setTimeout` one-shot timers
//! - [`mount_carousel`], [`mount_typewriter`], [`mount_scroll_spy`],
//!   [`mount_contact_form`], [`mount_reveal`], [`mount_particles`]: wire each
//!   page behavior to its elements
//! - [`ConsoleSink`]: a [`TraceSink`] that logs to the browser console
//!
//! Every `mount_*` function degrades to a no-op when its elements (or, for
//! the particle background, its script) are missing; the error says why,
//! but nothing is shown to the visitor.
//!
//! [`TraceSink`]: vitrine_core::trace::TraceSink

mod carousel;
mod console;
mod contact;
mod error;
mod geometry;
mod particles;
mod reveal;
mod scroll_spy;
mod timer;
mod track;
mod typewriter;

pub use carousel::{CarouselHandle, CarouselSelectors, mount_carousel};
pub use console::ConsoleSink;
pub use contact::{ContactSelectors, mount_contact_form};
pub use error::MountError;
pub use geometry::DomGeometry;
pub use particles::{ParticlesConfig, mount_particles};
pub use reveal::{RevealSelectors, mount_reveal};
pub use scroll_spy::{ScrollSpySelectors, mount_scroll_spy};
pub use timer::Timeout;
pub use track::DomTrack;
pub use typewriter::{TypewriterSelectors, mount_typewriter};
pub use vitrine_core::transport::Transport;

use vitrine_core::time::{HostTime, Timebase};
use wasm_bindgen::JsCast as _;
use web_sys::{Document, Element, HtmlElement};

/// Returns the current host time from `performance.now()`.
///
/// The returned [`HostTime`] is in microsecond ticks. Use [`timebase`] to
/// convert to nanoseconds.
#[must_use]
pub fn now() -> HostTime {
    let ms = timer::performance_now();
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "performance.now() returns small positive f64; µs fits in u64"
    )]
    let us = (ms * 1000.0) as u64;
    HostTime(us)
}

/// Returns the web [`Timebase`]: 1 tick = 1 µs = 1000 ns.
#[must_use]
pub fn timebase() -> Timebase {
    Timebase::MICROS
}

/// First document element matching `selector`.
fn query(document: &Document, selector: &'static str) -> Result<HtmlElement, MountError> {
    html(document.query_selector(selector)?, selector)
}

/// First descendant of `root` matching `selector`.
fn query_in(root: &Element, selector: &'static str) -> Result<HtmlElement, MountError> {
    html(root.query_selector(selector)?, selector)
}

/// Document element with the given `id`.
fn by_id(document: &Document, id: &'static str) -> Result<HtmlElement, MountError> {
    html(document.get_element_by_id(id), id)
}

fn html(found: Option<Element>, what: &'static str) -> Result<HtmlElement, MountError> {
    found
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or(MountError::MissingElement(what))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::input::CarouselConfig;
    use vitrine_core::time::Duration;

    #[test]
    fn timebase_is_microsecond() {
        let tb = timebase();
        // 1 tick = 1 µs = 1000 ns
        assert_eq!(tb.ticks_to_nanos(1), 1000);
        assert_eq!(tb.ticks_to_nanos(1_000_000), 1_000_000_000);
    }

    #[test]
    fn settle_delay_in_web_ticks() {
        let delay = CarouselConfig::portfolio().settle_delay(timebase());
        assert_eq!(delay, Duration(100_000), "100 ms in µs ticks");
    }
}
