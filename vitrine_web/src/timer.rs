// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `setTimeout` one-shot timers.
//!
//! Every deferred step on the page (resize settle, typewriter characters,
//! toast dismissal) runs through this module. A [`Timeout`] owns its JS
//! closure and releases it when cancelled or dropped; [`Timeout::spawn`] is
//! for timers that are never cancelled, whose closure frees itself after
//! running.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

// Direct global bindings instead of `web_sys::Window` methods; timers are
// scheduled from callbacks that have no window handle at hand.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    pub(crate) fn performance_now() -> f64;

    #[wasm_bindgen(js_name = "setTimeout")]
    fn set_timeout(handler: &JsValue, timeout: i32) -> i32;

    #[wasm_bindgen(js_name = "clearTimeout")]
    fn clear_timeout(id: i32);
}

/// The user callback, taken out when it runs or is cancelled.
type Pending = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;

type TimeoutClosure = Closure<dyn FnMut()>;

/// A scheduled one-shot callback.
///
/// Dropping a `Timeout` cancels it and frees the JS closure, together with
/// everything the callback captured.
pub struct Timeout {
    id: i32,
    pending: Pending,
    /// The JS closure registered with `setTimeout`.
    closure: Option<TimeoutClosure>,
}

impl core::fmt::Debug for Timeout {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Timeout")
            .field("id", &self.id)
            .field("pending", &self.is_pending())
            .finish_non_exhaustive()
    }
}

impl Timeout {
    /// Runs `callback` once after `delay_ms` milliseconds, unless the
    /// returned `Timeout` is cancelled or dropped first.
    pub fn schedule(delay_ms: u32, callback: impl FnOnce() + 'static) -> Self {
        let pending = armed(Box::new(callback));
        let slot = Rc::clone(&pending);
        let closure = Closure::wrap(Box::new(move || run(&slot)) as Box<dyn FnMut()>);
        let id = set_timeout(closure.as_ref(), clamp(delay_ms));
        Self {
            id,
            pending,
            closure: Some(closure),
        }
    }

    /// Runs `callback` once after `delay_ms` milliseconds.
    ///
    /// The timer cannot be cancelled; its closure is freed after it runs.
    pub fn spawn(delay_ms: u32, callback: impl FnOnce() + 'static) {
        let handler = Closure::once_into_js(callback);
        set_timeout(&handler, clamp(delay_ms));
    }

    /// Cancels the callback if it has not run yet.
    pub fn cancel(mut self) {
        self.release();
    }

    /// Whether the callback has neither run nor been cancelled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }

    /// The browser's timer id.
    #[must_use]
    pub fn id(&self) -> i32 {
        self.id
    }

    fn release(&mut self) {
        if disarm(&self.pending) {
            clear_timeout(self.id);
        }
        // Drop the JS closure so it doesn't leak. A closure dropped while it
        // runs is freed by wasm-bindgen once the call returns.
        self.closure.take();
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.release();
    }
}

fn armed(callback: Box<dyn FnOnce()>) -> Pending {
    Rc::new(RefCell::new(Some(callback)))
}

fn clamp(delay_ms: u32) -> i32 {
    i32::try_from(delay_ms).unwrap_or(i32::MAX)
}

/// Runs the pending callback, at most once.
fn run(pending: &Pending) {
    let callback = pending.borrow_mut().take();
    if let Some(callback) = callback {
        callback();
    }
}

/// Drops the pending callback, returning whether there was one.
fn disarm(pending: &Pending) -> bool {
    let callback = pending.borrow_mut().take();
    callback.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn disarm_releases_captured_state() {
        let state = Rc::new(Cell::new(0_u32));
        let captured = Rc::clone(&state);
        let slot = armed(Box::new(move || captured.set(captured.get() + 1)));
        assert_eq!(Rc::strong_count(&state), 2, "callback holds a clone");

        assert!(disarm(&slot), "callback was pending");
        assert_eq!(Rc::strong_count(&state), 1, "cancel frees the clone");

        run(&slot);
        assert_eq!(state.get(), 0, "cancelled callback never runs");
        assert!(!disarm(&slot), "nothing left to cancel");
    }

    #[test]
    fn callback_runs_once() {
        let state = Rc::new(Cell::new(0_u32));
        let captured = Rc::clone(&state);
        let slot = armed(Box::new(move || captured.set(captured.get() + 1)));

        run(&slot);
        run(&slot);
        assert_eq!(state.get(), 1, "one-shot");
        assert_eq!(Rc::strong_count(&state), 1, "running consumes the callback");
    }

    #[test]
    fn long_delays_saturate() {
        assert_eq!(clamp(250), 250, "small delays pass through");
        assert_eq!(clamp(u32::MAX), i32::MAX, "browser timer limit");
    }
}
