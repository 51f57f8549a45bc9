// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Portfolio page demo.
//!
//! Mounts every page behavior on the markup in `index.html`: the infinite
//! certificate carousel, the typing headline, the side-navigation scroll spy,
//! the section entrance on scroll, the particle background, and the contact
//! form.
//!
//! Build with: `wasm-pack build --target web demos/portfolio_site`
//! Then serve `demos/portfolio_site/` and open `index.html`.
//! Add `-- --features trace` to log carousel events to the console.

#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

use vitrine_core::contact::ContactConfig;
use vitrine_core::input::CarouselConfig;
use vitrine_core::reveal::RevealConfig;
use vitrine_core::scroll_spy::ScrollSpyConfig;
use vitrine_core::trace::TraceSink;
use vitrine_core::typewriter::TypewriterConfig;
use vitrine_web::{
    CarouselSelectors, ContactSelectors, MountError, ParticlesConfig, RevealSelectors,
    ScrollSpySelectors, TypewriterSelectors,
};
use wasm_bindgen::prelude::*;

/// Entry point for the portfolio demo.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    report(
        "typewriter",
        vitrine_web::mount_typewriter(
            &document,
            &TypewriterSelectors::portfolio(),
            TypewriterConfig::portfolio(),
        ),
    );
    report(
        "scroll spy",
        vitrine_web::mount_scroll_spy(
            &document,
            &ScrollSpySelectors::portfolio(),
            ScrollSpyConfig::portfolio(),
        ),
    );
    report(
        "reveal",
        vitrine_web::mount_reveal(
            &document,
            &RevealSelectors::portfolio(),
            RevealConfig::portfolio(),
        ),
    );
    report(
        "particles",
        vitrine_web::mount_particles(&document, &ParticlesConfig::portfolio()),
    );
    report(
        "carousel",
        vitrine_web::mount_carousel(
            &document,
            &CarouselSelectors::portfolio(),
            CarouselConfig::portfolio(),
            trace_sink(),
        ),
    );
    report(
        "contact form",
        vitrine_web::mount_contact_form(
            &document,
            &ContactSelectors::portfolio(),
            ContactConfig::portfolio(),
        ),
    );
    Ok(())
}

fn trace_sink() -> Option<Box<dyn TraceSink>> {
    if cfg!(feature = "trace") {
        Some(Box::new(vitrine_web::ConsoleSink::default()))
    } else {
        None
    }
}

/// A behavior that fails to mount stays off; the rest of the page still works.
fn report<T>(what: &str, mounted: Result<T, MountError>) {
    if let Err(err) = mounted {
        web_sys::console::warn_1(&JsValue::from_str(&format!("{what}: {err}")));
    }
}
