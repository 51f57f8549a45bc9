// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-linked entrance of content sections.

use std::rc::Rc;

use vitrine_core::reveal::{RevealConfig, scroll_progress};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, HtmlElement, NodeList, Window};

use crate::error::MountError;

/// CSS selector of the sections that fade in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealSelectors {
    /// Sections animated on scroll.
    pub sections: &'static str,
}

impl RevealSelectors {
    /// Every content section except the landing one.
    #[must_use]
    pub const fn portfolio() -> Self {
        Self {
            sections: ".secao-conteudo:not(#home)",
        }
    }
}

impl Default for RevealSelectors {
    fn default() -> Self {
        Self::portfolio()
    }
}

/// Ties the opacity and vertical offset of each section to its position in
/// the viewport, repainting on every `scroll` and `resize`.
pub fn mount_reveal(
    document: &Document,
    selectors: &RevealSelectors,
    config: RevealConfig,
) -> Result<(), MountError> {
    let window = web_sys::window().ok_or(MountError::MissingGlobal("window"))?;
    let sections = html_elements(&document.query_selector_all(selectors.sections)?);
    if sections.is_empty() {
        return Err(MountError::NoContent(selectors.sections));
    }
    let sections: Rc<[HtmlElement]> = sections.into();
    paint(&window, &sections, &config);

    for event in ["scroll", "resize"] {
        let paint_window = window.clone();
        let paint_sections = Rc::clone(&sections);
        let paint_cb = Closure::wrap(Box::new(move |_event: Event| {
            paint(&paint_window, &paint_sections, &config);
        }) as Box<dyn FnMut(_)>);
        window.add_event_listener_with_callback(event, paint_cb.as_ref().unchecked_ref())?;
        paint_cb.forget();
    }
    Ok(())
}

fn html_elements(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn paint(window: &Window, sections: &[HtmlElement], config: &RevealConfig) {
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    for section in sections {
        let rect = section.get_bounding_client_rect();
        let frame = config.frame(scroll_progress(rect.top(), rect.height(), viewport_height));
        let style = section.style();
        let _ = style.set_property("opacity", &frame.opacity.to_string());
        let _ = style.set_property("transform", &format_rise(frame.translate_y));
    }
}

/// CSS `translateY()` value for the remaining rise.
fn format_rise(offset_y: f64) -> String {
    format!("translateY({offset_y}px)")
}

#[cfg(test)]
mod tests {
    use super::format_rise;

    #[test]
    fn rise_uses_pixels() {
        assert_eq!(format_rise(50.0), "translateY(50px)");
        assert_eq!(format_rise(12.5), "translateY(12.5px)");
    }

    #[test]
    fn portfolio_skips_the_landing_section() {
        let selectors = super::RevealSelectors::portfolio();
        assert!(selectors.sections.contains(":not(#home)"), "home stays put");
    }
}
