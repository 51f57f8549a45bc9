// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated carousel session that exercises the tracing and diagnostics
//! pipeline.
//!
//! Drives six 220px certificate cards through a full forward lap, a wrap
//! backward from the head, a click dropped mid-movement, and a resize that
//! lands during a movement. Events go to both a
//! [`PrettyPrintSink`](vitrine_debug::pretty::PrettyPrintSink) and a
//! [`RecorderSink`](vitrine_debug::recorder::RecorderSink), and the recording
//! is exported as a Chrome trace JSON file.

use std::fs::File;
use std::io::BufWriter;

use vitrine_core::carousel::Carousel;
use vitrine_core::geometry::FixedGeometry;
use vitrine_core::input::{CarouselConfig, Controller, Input, Response};
use vitrine_core::time::{Duration, HostTime, Timebase};
use vitrine_core::trace::Tracer;
use vitrine_core::transport::RecordingTransport;

use vitrine_debug::Tee;
use vitrine_debug::pretty::PrettyPrintSink;
use vitrine_debug::recorder::RecorderSink;

const CARDS: usize = 6;
const CARD_PITCH: f64 = 220.0;
const VIEWPORT_WIDTH: f64 = 900.0;

type Session = Controller<FixedGeometry, RecordingTransport>;

fn main() {
    let timebase = Timebase::MICROS;
    let config = CarouselConfig::portfolio();
    let transition = Duration::from_millis(config.transition_ms, timebase);

    // -- sinks -------------------------------------------------------------
    let mut sink = Tee {
        a: PrettyPrintSink::new(Box::new(std::io::stdout()), timebase),
        b: RecorderSink::new(),
    };
    let mut tracer = Tracer::new(&mut sink);

    // -- carousel ----------------------------------------------------------
    let geometry = FixedGeometry::strip(CARDS, CARD_PITCH, VIEWPORT_WIDTH);
    let carousel = Carousel::activate(CARDS, geometry, RecordingTransport::new(), &mut tracer)
        .expect("six 220px cards overflow a 900px viewport");
    let mut session = Controller::new(carousel, config.settle_delay(timebase));

    // -- simulated session -------------------------------------------------
    let mut now = HostTime(1_000_000); // start at 1s

    // First layout once the page has settled.
    let deadline = session.schedule_settle(now);
    now = deadline;
    session.settle(now, &mut tracer);

    // A full lap forward; the sixth completion rewinds to 0.
    for _ in 0..CARDS {
        now = click(&mut session, Input::Next, now, &mut tracer);
        now = finish(&mut session, now + transition, &mut tracer);
    }
    println!("after lap: position {}", session.carousel().position());

    // Backward from the head jumps to the clone seam first.
    now = click(&mut session, Input::Previous, now, &mut tracer);
    // A second click while moving is dropped.
    let midway = now + Duration(transition.ticks() / 2);
    click(&mut session, Input::Previous, midway, &mut tracer);
    now = finish(&mut session, now + transition, &mut tracer);
    println!("after wrap: position {}", session.carousel().position());

    // A resize during a movement resets once it settles.
    let started = click(&mut session, Input::Next, now, &mut tracer);
    let midway = started + Duration(transition.ticks() / 2);
    if let Response::SettleAt(deadline) = session.handle(Input::Resize, midway, &mut tracer) {
        session.settle(deadline, &mut tracer);
    }
    // The cancelled movement never reports completion.
    let late = session.carousel_mut().transport_mut().finish_animation();
    println!(
        "after resize: position {} (late completion: {late})",
        session.carousel().position()
    );

    // -- export Chrome trace -----------------------------------------------
    let path = "trace.json";
    let file = File::create(path).expect("failed to create trace.json");
    let mut writer = BufWriter::new(file);
    vitrine_debug::chrome::export(sink.b.as_bytes(), timebase, &mut writer)
        .expect("failed to write Chrome trace");

    println!("Wrote {path}");
}

/// Delivers a control click and returns the time it happened.
fn click(session: &mut Session, input: Input, at: HostTime, tracer: &mut Tracer<'_>) -> HostTime {
    session.handle(input, at, tracer);
    at
}

/// Ends the in-flight movement at `at`, if the transport reports one.
fn finish(session: &mut Session, at: HostTime, tracer: &mut Tracer<'_>) -> HostTime {
    if session.carousel_mut().transport_mut().finish_animation() {
        session.transition_end(at, tracer);
    }
    at
}
