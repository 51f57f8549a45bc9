// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-linked entrance of content sections.
//!
//! A section fades in and rises into place while it scrolls from the bottom
//! edge of the viewport to the middle of it. Progress is 0 when the
//! section's top meets the viewport's bottom, and 1 when the section's center
//! meets the viewport's center. Scrolling back reverses the effect.

/// Visual parameters of the entrance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    /// Opacity before the section enters.
    pub hidden_opacity: f64,
    /// Vertical offset in px before the section enters; it rises to 0.
    pub rise_px: f64,
}

impl RevealConfig {
    /// The portfolio's entrance: fade from transparent, rise 50px.
    #[must_use]
    pub const fn portfolio() -> Self {
        Self {
            hidden_opacity: 0.0,
            rise_px: 50.0,
        }
    }

    /// Style for a given entrance progress in `[0, 1]`.
    #[must_use]
    pub fn frame(&self, progress: f64) -> RevealFrame {
        let p = progress.clamp(0.0, 1.0);
        RevealFrame {
            opacity: self.hidden_opacity + (1.0 - self.hidden_opacity) * p,
            translate_y: self.rise_px * (1.0 - p),
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self::portfolio()
    }
}

/// Inline style values for one section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealFrame {
    /// CSS `opacity`.
    pub opacity: f64,
    /// `translateY` offset in px.
    pub translate_y: f64,
}

/// Entrance progress of a section, clamped to `[0, 1]`.
///
/// `top` is the section's top relative to the viewport (as reported by
/// `getBoundingClientRect`), `height` its height, and `viewport_height` the
/// visible height. A degenerate span (no viewport) counts as fully revealed.
#[must_use]
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    // Top at the viewport bottom, through center at the viewport center.
    let span = (viewport_height + height) / 2.0;
    if span <= 0.0 {
        return 1.0;
    }
    ((viewport_height - top) / span).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;
    const SECTION: f64 = 600.0;

    #[test]
    fn below_the_fold_is_hidden() {
        assert_eq!(scroll_progress(VIEWPORT, SECTION, VIEWPORT), 0.0);
        assert_eq!(scroll_progress(2.0 * VIEWPORT, SECTION, VIEWPORT), 0.0);
    }

    #[test]
    fn centered_section_is_revealed() {
        // Center at 400: top = 400 - 300.
        assert_eq!(scroll_progress(100.0, SECTION, VIEWPORT), 1.0);
        assert_eq!(scroll_progress(-500.0, SECTION, VIEWPORT), 1.0);
    }

    #[test]
    fn progress_is_linear_in_between() {
        // Halfway: top travelled 350 of 700.
        let p = scroll_progress(450.0, SECTION, VIEWPORT);
        assert!((p - 0.5).abs() < 1e-9, "got {p}");
    }

    #[test]
    fn frames_interpolate_opacity_and_rise() {
        let config = RevealConfig::portfolio();
        assert_eq!(
            config.frame(0.0),
            RevealFrame {
                opacity: 0.0,
                translate_y: 50.0
            }
        );
        assert_eq!(
            config.frame(1.0),
            RevealFrame {
                opacity: 1.0,
                translate_y: 0.0
            }
        );
        assert_eq!(config.frame(0.5).translate_y, 25.0);
        assert_eq!(config.frame(3.0), config.frame(1.0), "clamped");
    }

    #[test]
    fn no_viewport_means_revealed() {
        assert_eq!(scroll_progress(0.0, 0.0, 0.0), 1.0);
    }
}
