// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout measurement of the carousel track.

use vitrine_core::geometry::{CardMetrics, Geometry};
use wasm_bindgen::JsCast as _;
use web_sys::HtmlElement;

/// Reads carousel geometry from live DOM layout.
///
/// The card pitch is re-measured on every call (first card `offsetWidth`
/// plus the track's computed `gap`). The content width is captured once at
/// construction, before the clone set is appended, so it always describes
/// the un-duplicated strip.
pub struct DomGeometry {
    viewport: HtmlElement,
    track: HtmlElement,
    content_width: f64,
    default_gap: f64,
}

impl core::fmt::Debug for DomGeometry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomGeometry")
            .field("viewport", &"HtmlElement")
            .field("track", &"HtmlElement")
            .field("content_width", &self.content_width)
            .field("default_gap", &self.default_gap)
            .finish()
    }
}

impl DomGeometry {
    /// Measures `track` inside `viewport`.
    ///
    /// Call before duplicating the cards.
    #[must_use]
    pub fn new(viewport: HtmlElement, track: HtmlElement, default_gap: f64) -> Self {
        let content_width = f64::from(track.scroll_width());
        Self {
            viewport,
            track,
            content_width,
            default_gap,
        }
    }

    /// Raw measurements of the first card and the track gap.
    #[must_use]
    pub fn card_metrics(&self) -> CardMetrics {
        let card_width = self
            .track
            .first_element_child()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|card| f64::from(card.offset_width()));
        let gap = web_sys::window()
            .and_then(|w| w.get_computed_style(&self.track).ok().flatten())
            .and_then(|style| style.get_property_value("gap").ok())
            .unwrap_or_default();
        CardMetrics::from_css(card_width, &gap)
    }
}

impl Geometry for DomGeometry {
    fn move_distance(&self) -> f64 {
        self.card_metrics().move_distance(self.default_gap)
    }

    fn content_width(&self) -> f64 {
        self.content_width
    }

    fn viewport_width(&self) -> f64 {
        f64::from(self.viewport.client_width())
    }
}
