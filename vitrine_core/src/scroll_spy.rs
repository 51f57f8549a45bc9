// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-section navigation indicator.
//!
//! Sections are identified by element id (`sobre-mim`); navigation links
//! point at anchors named after them (`#sobre_mim_a`). [`ScrollSpy`] keeps
//! track of which link is active as sections cross the activation line and
//! as links are clicked. Backends observe intersections and toggle classes.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// Intersection settings for the activation line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSpyConfig {
    /// Root margin shrinking the viewport to a line 40% from the top.
    pub root_margin: &'static str,
    /// Intersection ratio that counts as visible.
    pub threshold: f64,
    /// Anchor of the link that starts active.
    pub initial_anchor: &'static str,
    /// Class marking the active link.
    pub active_class: &'static str,
}

impl ScrollSpyConfig {
    /// The portfolio's side navigation.
    #[must_use]
    pub const fn portfolio() -> Self {
        Self {
            root_margin: "-40% 0px -60% 0px",
            threshold: 0.0,
            initial_anchor: "home_a",
            active_class: "botoes-laterais__link--active",
        }
    }
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        Self::portfolio()
    }
}

/// Anchor name of the link for a section id: hyphens become underscores and
/// `_a` is appended.
#[must_use]
pub fn anchor_for_section(section_id: &str) -> String {
    format!("{}_a", section_id.replace('-', "_"))
}

/// Tracks the active navigation link.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollSpy {
    hrefs: Vec<String>,
    active: Option<usize>,
}

impl ScrollSpy {
    /// Creates a spy over links with the given `href` values, in document
    /// order. No link starts active.
    #[must_use]
    pub fn new(hrefs: impl IntoIterator<Item = String>) -> Self {
        Self {
            hrefs: hrefs.into_iter().collect(),
            active: None,
        }
    }

    /// Index of the link whose href is `#anchor`.
    #[must_use]
    pub fn link_for_anchor(&self, anchor: &str) -> Option<usize> {
        self.hrefs
            .iter()
            .position(|href| href.strip_prefix('#') == Some(anchor))
    }

    /// Activates the link for `anchor`, returning its index.
    pub fn activate_anchor(&mut self, anchor: &str) -> Option<usize> {
        self.active = self.link_for_anchor(anchor);
        self.active
    }

    /// A section crossed the activation line.
    ///
    /// Every link is deactivated; the link for the section, if one exists,
    /// becomes active.
    pub fn section_visible(&mut self, section_id: &str) -> Option<usize> {
        self.activate_anchor(&anchor_for_section(section_id))
    }

    /// A link was clicked; it becomes active immediately.
    pub fn link_clicked(&mut self, index: usize) -> Option<usize> {
        if index < self.hrefs.len() {
            self.active = Some(index);
        }
        self.active
    }

    /// Index of the active link.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Number of tracked links.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hrefs.len()
    }

    /// Whether there are no links.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hrefs.is_empty()
    }
}
