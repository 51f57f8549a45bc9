// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mounting the certificate carousel on a page.

use std::cell::RefCell;
use std::rc::Rc;

use vitrine_core::cards::CardSet;
use vitrine_core::carousel::Carousel;
use vitrine_core::input::{CarouselConfig, Controller, Input, Response};
use vitrine_core::time::HostTime;
use vitrine_core::trace::{TraceSink, Tracer};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, TransitionEvent};

use crate::error::MountError;
use crate::geometry::DomGeometry;
use crate::timer::Timeout;
use crate::track::DomTrack;

/// CSS selectors locating the carousel's elements.
///
/// `track`, `next` and `prev` are looked up inside `root`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselSelectors {
    /// The viewport element whose width bounds the visible cards.
    pub root: &'static str,
    /// The strip holding the cards.
    pub track: &'static str,
    /// The "next" control.
    pub next: &'static str,
    /// The "previous" control.
    pub prev: &'static str,
}

impl CarouselSelectors {
    /// Selectors of the portfolio page's certificate section.
    #[must_use]
    pub const fn portfolio() -> Self {
        Self {
            root: ".certificados-carousel",
            track: ".certificados-track",
            next: ".next",
            prev: ".prev",
        }
    }
}

impl Default for CarouselSelectors {
    fn default() -> Self {
        Self::portfolio()
    }
}

struct CarouselState {
    controller: Controller<DomGeometry, DomTrack>,
    sink: Option<Box<dyn TraceSink>>,
    settle_timer: Option<Timeout>,
}

impl CarouselState {
    fn traced<R>(
        &mut self,
        f: impl FnOnce(&mut Controller<DomGeometry, DomTrack>, &mut Tracer<'_>) -> R,
    ) -> R {
        match self.sink.as_deref_mut() {
            Some(sink) => f(&mut self.controller, &mut Tracer::new(sink)),
            None => f(&mut self.controller, &mut Tracer::none()),
        }
    }
}

/// A mounted carousel.
///
/// The page listeners keep the carousel alive; dropping the handle does not
/// unmount it.
#[derive(Clone)]
pub struct CarouselHandle {
    state: Rc<RefCell<CarouselState>>,
}

impl core::fmt::Debug for CarouselHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = self.state.borrow();
        let carousel = s.controller.carousel();
        f.debug_struct("CarouselHandle")
            .field("position", &carousel.position())
            .field("phase", &carousel.phase())
            .field("original_count", &carousel.original_count())
            .finish_non_exhaustive()
    }
}

impl CarouselHandle {
    /// Current logical position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.state.borrow().controller.carousel().position()
    }

    /// Whether a movement is in flight.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.state.borrow().controller.carousel().is_locked()
    }

    /// Same as clicking the "next" control.
    pub fn next(&self) {
        dispatch(&self.state, Input::Next);
    }

    /// Same as clicking the "previous" control.
    pub fn previous(&self) {
        dispatch(&self.state, Input::Previous);
    }
}

/// Mounts the infinite carousel described by `selectors`.
///
/// Measures the track, appends a deep clone of every card, then binds the
/// controls, the track's `transitionend` and the window `resize`. The first
/// layout is applied by a settle shortly after mounting.
///
/// When the cards fit the viewport (or there are none) the controls are
/// hidden and [`MountError::Inert`] is returned.
pub fn mount_carousel(
    document: &Document,
    selectors: &CarouselSelectors,
    config: CarouselConfig,
    mut sink: Option<Box<dyn TraceSink>>,
) -> Result<CarouselHandle, MountError> {
    let root = crate::query(document, selectors.root)?;
    let track = crate::query_in(&root, selectors.track)?;
    let next = crate::query_in(&root, selectors.next)?;
    let prev = crate::query_in(&root, selectors.prev)?;

    let children = track.children();
    let originals: Vec<Element> = (0..children.length())
        .filter_map(|i| children.item(i))
        .collect();

    let geometry = DomGeometry::new(root, track.clone(), config.default_gap);
    let transport = DomTrack::new(track.clone(), config.transition_css());
    let activated = match sink.as_deref_mut() {
        Some(sink) => Carousel::activate(
            originals.len(),
            geometry,
            transport,
            &mut Tracer::new(sink),
        ),
        None => Carousel::activate(originals.len(), geometry, transport, &mut Tracer::none()),
    };
    let carousel = match activated {
        Ok(carousel) => carousel,
        Err(reason) => {
            hide(&next);
            hide(&prev);
            return Err(reason.into());
        }
    };

    let cards = CardSet::try_duplicate_with(originals, |card| {
        card.clone_node_with_deep(true)?
            .dyn_into::<Element>()
            .map_err(JsValue::from)
    })?;
    for clone in cards.clones() {
        clone.set_attribute("aria-hidden", "true")?;
        track.append_child(clone)?;
    }

    let settle_delay = config.settle_delay(crate::timebase());
    let state = Rc::new(RefCell::new(CarouselState {
        controller: Controller::new(carousel, settle_delay),
        sink,
        settle_timer: None,
    }));

    bind_control(&next, &state, Input::Next)?;
    bind_control(&prev, &state, Input::Previous)?;
    bind_transition_end(&track, &state)?;
    bind_resize(&state)?;

    let deadline = state.borrow_mut().controller.schedule_settle(crate::now());
    arm_settle(&state, deadline);

    Ok(CarouselHandle { state })
}

fn hide(control: &HtmlElement) {
    let _ = control.style().set_property("display", "none");
}

fn dispatch(state: &Rc<RefCell<CarouselState>>, input: Input) {
    let now = crate::now();
    let response = state.borrow_mut().traced(|c, t| c.handle(input, now, t));
    if let Response::SettleAt(deadline) = response {
        arm_settle(state, deadline);
    }
}

fn bind_control(
    control: &HtmlElement,
    state: &Rc<RefCell<CarouselState>>,
    input: Input,
) -> Result<(), JsValue> {
    let click_state = Rc::clone(state);
    let click_cb = Closure::wrap(Box::new(move |_event: Event| {
        dispatch(&click_state, input);
    }) as Box<dyn FnMut(_)>);
    control.add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref())?;
    click_cb.forget();
    Ok(())
}

fn bind_transition_end(
    track: &HtmlElement,
    state: &Rc<RefCell<CarouselState>>,
) -> Result<(), JsValue> {
    let end_state = Rc::clone(state);
    let end_cb = Closure::wrap(Box::new(move |event: TransitionEvent| {
        let mut s = end_state.borrow_mut();
        let target = event.target();
        let property = event.property_name();
        let transport = s.controller.carousel_mut().transport_mut();
        if !transport.accept_transition_end(target.as_ref(), &property) {
            return;
        }
        let now = crate::now();
        s.traced(|c, t| c.transition_end(now, t));
    }) as Box<dyn FnMut(_)>);
    track.add_event_listener_with_callback("transitionend", end_cb.as_ref().unchecked_ref())?;
    end_cb.forget();
    Ok(())
}

fn bind_resize(state: &Rc<RefCell<CarouselState>>) -> Result<(), JsValue> {
    let Some(window) = web_sys::window() else {
        return Ok(());
    };
    let resize_state = Rc::clone(state);
    let resize_cb = Closure::wrap(Box::new(move |_event: Event| {
        dispatch(&resize_state, Input::Resize);
    }) as Box<dyn FnMut(_)>);
    window.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())?;
    resize_cb.forget();
    Ok(())
}

/// Replaces the pending settle timer with one firing at `deadline`.
fn arm_settle(state: &Rc<RefCell<CarouselState>>, deadline: HostTime) {
    let remaining = deadline.saturating_duration_since(crate::now());
    let delay_ms = u32::try_from(remaining.to_millis(crate::timebase())).unwrap_or(u32::MAX);
    let timer_state = Rc::clone(state);
    let timer = Timeout::schedule(delay_ms, move || on_settle_timer(&timer_state));
    if let Some(previous) = state.borrow_mut().settle_timer.replace(timer) {
        previous.cancel();
    }
}

fn on_settle_timer(state: &Rc<RefCell<CarouselState>>) {
    let pending = {
        let mut s = state.borrow_mut();
        s.settle_timer = None;
        let now = crate::now();
        s.traced(|c, t| c.settle(now, t));
        s.controller.settle_deadline()
    };
    // Fired early; wait out the remainder.
    if let Some(deadline) = pending {
        arm_settle(state, deadline);
    }
}
