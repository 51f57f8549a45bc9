// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform-independent interaction logic for a single-page portfolio.
//!
//! `vitrine_core` holds everything that does not need a rendering surface:
//! the infinite carousel state machine and its geometry and transport
//! contracts, plus the smaller page behaviors (typing headline, scroll-spy
//! navigation, contact-form outcome, section entrance). It is `no_std`
//! compatible (with `alloc`), so it can be tested natively and shipped to
//! `wasm32` unchanged.
//!
//! # Architecture
//!
//! The carousel is composed of four pieces wired by dependency injection:
//!
//! ```text
//!   Input (next / previous / resize)
//!       │
//!       ▼
//!   Controller::handle() ──► Carousel::advance() ──► Transport::apply()
//!                                 │                        │
//!                        Geometry::move_distance()         │ (animation ends)
//!                                                          ▼
//!   Controller::transition_end() ──► Carousel::transition_complete()
//! ```
//!
//! **[`cards`]**: The duplicated display sequence (originals + one clone set).
//!
//! **[`geometry`]**: The [`Geometry`](geometry::Geometry) contract: card
//! pitch, content width, and viewport width, plus CSS gap parsing.
//!
//! **[`carousel`]**: The two-phase state machine that moves, locks, and
//! silently rewinds across the clone seam.
//!
//! **[`transport`]**: The [`Transport`](transport::Transport) contract that
//! backends implement to translate the strip, and the one-shot
//! [`CompletionLatch`](transport::CompletionLatch).
//!
//! **[`input`]**: Maps next/previous/resize inputs onto the state machine,
//! debouncing resizes through [`debounce`].
//!
//! **[`typewriter`]**, **[`scroll_spy`]**, **[`contact`]**, **[`reveal`]**:
//! The remaining page behaviors, each a small state holder or pure function
//! driven by a backend.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types,
//! with a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod cards;
pub mod carousel;
pub mod contact;
pub mod debounce;
pub mod geometry;
pub mod input;
pub mod reveal;
pub mod scroll_spy;
pub mod time;
pub mod trace;
pub mod transport;
pub mod typewriter;
