// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Side-navigation highlight following the visible section.

use std::cell::RefCell;
use std::rc::Rc;

use vitrine_core::scroll_spy::{ScrollSpy, ScrollSpyConfig};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList,
};

use crate::error::MountError;

/// CSS selectors for the observed sections and the navigation links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollSpySelectors {
    /// Sections whose visibility drives the highlight.
    pub sections: &'static str,
    /// Navigation links, each with an `href="#<anchor>"`.
    pub links: &'static str,
}

impl ScrollSpySelectors {
    /// The portfolio's sections and side buttons.
    #[must_use]
    pub const fn portfolio() -> Self {
        Self {
            sections: "#home, .secao-conteudo",
            links: ".botoes-laterais__link",
        }
    }
}

impl Default for ScrollSpySelectors {
    fn default() -> Self {
        Self::portfolio()
    }
}

struct SpyState {
    spy: ScrollSpy,
    links: Vec<Element>,
    active_class: &'static str,
}

impl SpyState {
    /// Mirrors the spy's active link onto the link classes.
    fn paint(&self) {
        for link in &self.links {
            let _ = link.class_list().remove_1(self.active_class);
        }
        if let Some(link) = self.spy.active().and_then(|i| self.links.get(i)) {
            let _ = link.class_list().add_1(self.active_class);
        }
    }
}

/// Highlights the navigation link of the section crossing the activation
/// line, and the clicked link immediately on click.
pub fn mount_scroll_spy(
    document: &Document,
    selectors: &ScrollSpySelectors,
    config: ScrollSpyConfig,
) -> Result<(), MountError> {
    let links = elements(&document.query_selector_all(selectors.links)?);
    if links.is_empty() {
        return Err(MountError::NoContent(selectors.links));
    }
    let hrefs = links
        .iter()
        .map(|link| link.get_attribute("href").unwrap_or_default());
    let mut spy = ScrollSpy::new(hrefs);
    spy.activate_anchor(config.initial_anchor);

    let state = Rc::new(RefCell::new(SpyState {
        spy,
        links,
        active_class: config.active_class,
    }));
    state.borrow().paint();

    bind_clicks(&state)?;
    observe_sections(document, selectors, config, &state)?;
    Ok(())
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn bind_clicks(state: &Rc<RefCell<SpyState>>) -> Result<(), JsValue> {
    let links = state.borrow().links.clone();
    for (index, link) in links.iter().enumerate() {
        let click_state = Rc::clone(state);
        let click_cb = Closure::wrap(Box::new(move |_event: Event| {
            let mut s = click_state.borrow_mut();
            s.spy.link_clicked(index);
            s.paint();
        }) as Box<dyn FnMut(_)>);
        link.add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref())?;
        click_cb.forget();
    }
    Ok(())
}

fn observe_sections(
    document: &Document,
    selectors: &ScrollSpySelectors,
    config: ScrollSpyConfig,
    state: &Rc<RefCell<SpyState>>,
) -> Result<(), JsValue> {
    let observer_state = Rc::clone(state);
    let observer_cb = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        let mut s = observer_state.borrow_mut();
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                s.spy.section_visible(&entry.target().id());
                s.paint();
            }
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(config.root_margin);
    options.set_threshold(&JsValue::from_f64(config.threshold));
    let observer =
        IntersectionObserver::new_with_options(observer_cb.as_ref().unchecked_ref(), &options)?;
    observer_cb.forget();

    for section in elements(&document.query_selector_all(selectors.sections)?) {
        observer.observe(&section);
    }
    // Observes for the page's lifetime.
    core::mem::forget(observer);
    Ok(())
}
