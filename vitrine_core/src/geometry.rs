// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout measurements the carousel depends on.
//!
//! The carousel never caches geometry: layout can change at any time (resize,
//! late font load), so [`Geometry::move_distance`] is read on every render.

/// Gap between cards used when the track's computed gap is not a number.
pub const DEFAULT_GAP: f64 = 20.0;

/// Reads the current layout of a carousel track.
///
/// Implementations are pure reads with no side effects. The DOM backend reads
/// element metrics; tests use [`FixedGeometry`].
pub trait Geometry {
    /// Distance the strip moves for one card: card width plus gap.
    ///
    /// Returns `0.0` when there are no cards, in which case the carousel is
    /// inert.
    fn move_distance(&self) -> f64;

    /// Total width of the un-duplicated card strip.
    fn content_width(&self) -> f64;

    /// Width of the visible window onto the strip.
    fn viewport_width(&self) -> f64;

    /// Whether the strip is wider than the viewport.
    ///
    /// A strip that fits entirely needs no navigation.
    fn overflows(&self) -> bool {
        self.content_width() > self.viewport_width()
    }
}

impl<G: Geometry + ?Sized> Geometry for &G {
    fn move_distance(&self) -> f64 {
        (**self).move_distance()
    }

    fn content_width(&self) -> f64 {
        (**self).content_width()
    }

    fn viewport_width(&self) -> f64 {
        (**self).viewport_width()
    }
}

/// Raw per-card measurements, before gap fallback.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CardMetrics {
    /// Rendered width of the first card, or `None` if there is no card.
    pub card_width: Option<f64>,
    /// Parsed track gap, or `None` if the computed value is not a number.
    pub gap: Option<f64>,
}

impl CardMetrics {
    /// Builds metrics from a card width and a computed CSS `gap` string.
    #[must_use]
    pub fn from_css(card_width: Option<f64>, gap: &str) -> Self {
        Self {
            card_width,
            gap: parse_css_gap(gap),
        }
    }

    /// Card width plus gap, with `default_gap` substituted for a missing or
    /// zero gap. Returns `0.0` without a card.
    #[must_use]
    pub fn move_distance(&self, default_gap: f64) -> f64 {
        let Some(width) = self.card_width else {
            return 0.0;
        };
        let gap = match self.gap {
            Some(g) if g != 0.0 => g,
            _ => default_gap,
        };
        width + gap
    }
}

/// Parses the leading integer of a computed CSS length such as `"24px"`.
///
/// Accepts leading whitespace and an optional sign, then reads decimal
/// digits up to the first non-digit, so `"12.5px"` yields `12`. Values like
/// `"normal"` or `""` are not numbers and return `None`.
#[must_use]
pub fn parse_css_gap(value: &str) -> Option<f64> {
    let s = value.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let mut n = 0.0_f64;
    for b in digits[..end].bytes() {
        n = n * 10.0 + f64::from(b - b'0');
    }
    Some(if negative { -n } else { n })
}

/// A [`Geometry`] with fixed values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedGeometry {
    /// Card width plus gap.
    pub move_distance: f64,
    /// Width of the un-duplicated strip.
    pub content_width: f64,
    /// Width of the visible window.
    pub viewport_width: f64,
}

impl FixedGeometry {
    /// A strip of `cards` cards with the given pitch, shown through a
    /// viewport of `viewport_width`.
    #[must_use]
    pub fn strip(cards: usize, move_distance: f64, viewport_width: f64) -> Self {
        let content_width = cards as f64 * move_distance;
        Self {
            move_distance,
            content_width,
            viewport_width,
        }
    }
}

impl Geometry for FixedGeometry {
    fn move_distance(&self) -> f64 {
        self.move_distance
    }

    fn content_width(&self) -> f64 {
        self.content_width
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pixel_gap() {
        assert_eq!(parse_css_gap("24px"), Some(24.0));
        assert_eq!(parse_css_gap("  8px"), Some(8.0));
        assert_eq!(parse_css_gap("12.5px"), Some(12.0), "integer prefix only");
        assert_eq!(parse_css_gap("-4px"), Some(-4.0));
    }

    #[test]
    fn non_numeric_gap_is_none() {
        assert_eq!(parse_css_gap("normal"), None);
        assert_eq!(parse_css_gap(""), None);
        assert_eq!(parse_css_gap("px"), None);
        assert_eq!(parse_css_gap("-"), None);
    }

    #[test]
    fn move_distance_adds_gap() {
        let m = CardMetrics::from_css(Some(200.0), "16px");
        assert_eq!(m.move_distance(DEFAULT_GAP), 216.0);
    }

    #[test]
    fn invalid_or_zero_gap_falls_back_to_default() {
        let m = CardMetrics::from_css(Some(200.0), "normal");
        assert_eq!(m.move_distance(DEFAULT_GAP), 220.0);
        let m = CardMetrics::from_css(Some(200.0), "0px");
        assert_eq!(m.move_distance(DEFAULT_GAP), 220.0, "zero gap is falsy");
    }

    #[test]
    fn no_card_means_zero_distance() {
        let m = CardMetrics::from_css(None, "16px");
        assert_eq!(m.move_distance(DEFAULT_GAP), 0.0);
    }

    #[test]
    fn overflow_compares_content_to_viewport() {
        assert!(FixedGeometry::strip(6, 220.0, 900.0).overflows());
        assert!(!FixedGeometry::strip(4, 220.0, 880.0).overflows(), "exact fit");
    }
}
