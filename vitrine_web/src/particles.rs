// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive particle background rendered by the page's `tsParticles`
//! script.
//!
//! The library is loaded by the page, not bundled: when the `tsParticles`
//! global is absent the background is simply skipped.

use serde_json::{Value, json};
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::error::MountError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = tsParticles, js_name = "load", catch)]
    fn ts_particles_load(id: &str, options: &JsValue) -> Result<JsValue, JsValue>;
}

/// Name of the library's global object.
const GLOBAL: &str = "tsParticles";

/// Particle field parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticlesConfig {
    /// Id of the element that hosts the canvas.
    pub container: &'static str,
    /// Particles per `density_area`.
    pub count: u32,
    /// Area (in CSS px², divided by 1000) over which `count` is spread.
    pub density_area: u32,
    /// Particle fill color.
    pub color: &'static str,
    /// Particle opacity.
    pub opacity: f64,
    /// Color of the links between nearby particles.
    pub link_color: &'static str,
    /// Maximum distance in px at which particles are linked.
    pub link_distance: f64,
    /// Opacity of particle links.
    pub link_opacity: f64,
    /// Color of the links drawn to the pointer on hover.
    pub grab_color: &'static str,
    /// Pointer link reach in px.
    pub grab_distance: f64,
    /// Opacity of pointer links.
    pub grab_opacity: f64,
    /// Particles added per click.
    pub push_quantity: u32,
    /// Drift speed.
    pub speed: f64,
    /// Particle radius range in px.
    pub size: (f64, f64),
    /// Frame rate cap.
    pub fps_limit: u32,
}

impl ParticlesConfig {
    /// The portfolio's background: slow white particles with subtle links,
    /// green pointer links, and four more particles per click.
    #[must_use]
    pub const fn portfolio() -> Self {
        Self {
            container: "tsparticles",
            count: 80,
            density_area: 800,
            color: "#f6f6f6",
            opacity: 0.4,
            link_color: "#252d40",
            link_distance: 150.0,
            link_opacity: 0.2,
            grab_color: "#62ff00",
            grab_distance: 200.0,
            grab_opacity: 0.8,
            push_quantity: 4,
            speed: 1.0,
            size: (1.0, 3.0),
            fps_limit: 120,
        }
    }

    /// The `tsParticles.load` options object.
    #[must_use]
    pub fn options(&self) -> Value {
        json!({
            "fpsLimit": self.fps_limit,
            "interactivity": {
                "events": {
                    "onHover": { "enable": true, "mode": "grab" },
                    "onClick": { "enable": true, "mode": "push" },
                    "resize": true,
                },
                "modes": {
                    "grab": {
                        "distance": self.grab_distance,
                        "links": { "opacity": self.grab_opacity, "color": self.grab_color },
                    },
                    "push": { "quantity": self.push_quantity },
                },
            },
            "particles": {
                "color": { "value": self.color },
                "links": {
                    "color": self.link_color,
                    "distance": self.link_distance,
                    "enable": true,
                    "opacity": self.link_opacity,
                    "width": 1,
                },
                "move": {
                    "direction": "none",
                    "enable": true,
                    "outModes": { "default": "bounce" },
                    "random": false,
                    "speed": self.speed,
                    "straight": false,
                },
                "number": {
                    "density": { "enable": true, "area": self.density_area },
                    "value": self.count,
                },
                "opacity": { "value": self.opacity },
                "shape": { "type": "circle" },
                "size": { "value": { "min": self.size.0, "max": self.size.1 } },
            },
            "detectRetina": true,
        })
    }
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self::portfolio()
    }
}

/// Starts the particle background in the `config.container` element.
///
/// Returns [`MountError::MissingGlobal`] without touching the page when the
/// `tsParticles` script is not loaded.
pub fn mount_particles(document: &Document, config: &ParticlesConfig) -> Result<(), MountError> {
    let library = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(GLOBAL))?;
    if library.is_undefined() || library.is_null() {
        return Err(MountError::MissingGlobal(GLOBAL));
    }
    crate::by_id(document, config.container)?;

    let options = js_sys::JSON::parse(&config.options().to_string())?;
    // The returned promise resolves once the canvas is running; nothing
    // waits on it.
    ts_particles_load(config.container, &options)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_carry_the_portfolio_look() {
        let options = ParticlesConfig::portfolio().options();
        assert_eq!(options["fpsLimit"], 120);
        assert_eq!(options["particles"]["number"]["value"], 80);
        assert_eq!(options["particles"]["number"]["density"]["area"], 800);
        assert_eq!(options["particles"]["links"]["distance"], 150.0);
        assert_eq!(options["particles"]["size"]["value"]["max"], 3.0);
        assert_eq!(options["interactivity"]["modes"]["grab"]["links"]["color"], "#62ff00");
        assert_eq!(options["interactivity"]["modes"]["push"]["quantity"], 4);
        assert_eq!(options["interactivity"]["events"]["onClick"]["mode"], "push");
    }

    #[test]
    fn options_follow_the_config() {
        let config = ParticlesConfig {
            count: 20,
            speed: 2.5,
            ..ParticlesConfig::portfolio()
        };
        let options = config.options();
        assert_eq!(options["particles"]["number"]["value"], 20);
        assert_eq!(options["particles"]["move"]["speed"], 2.5);
    }
}
