// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lamina Controls: the control surface for a comparison overlay.
//!
//! A comparison overlay sits above a base visualization; a user adjusts its
//! opacity, its blend strategy (normal, spyglass, or swipe), and — in swipe
//! mode — the divider position. This crate captures that intent and turns
//! it into notifications for an independently-owned renderer. It draws
//! nothing and knows nothing about widgets; it is the seam between raw
//! input and the [`lamina_events`] wire vocabulary:
//!
//! - **Normalization** ([`normalize`]): Pure, total functions that turn
//!   raw, potentially malformed input into valid in-range values.
//! - **State** ([`ControlState`]): The session-local aggregate of the
//!   user's current choices.
//! - **Controls** ([`CompareControls`]): The normalize → mutate → publish
//!   state machine, generic over the embedder's identity type.
//! - **Diagnostics** ([`ControlsTrace`], [`NoopTrace`]): An injected hook
//!   for activation events, defaulting to silence.
//!
//! ## Quick Start
//!
//! ```rust
//! use lamina_controls::CompareControls;
//! use lamina_events::{Change, CompareBus, Notification, VisualizationMode};
//!
//! let mut controls = CompareControls::new("map1");
//! let mut bus = CompareBus::new();
//!
//! // Raw slider/radio input, exactly as the widgets hand it over.
//! controls.set_opacity("0.2", &mut bus);
//! controls.set_swipe("75", &mut bus);
//! controls.set_mode("swipe", &mut bus);
//!
//! // Out-of-range and malformed input never reaches state or the wire.
//! controls.set_opacity("17", &mut bus);
//! assert_eq!(controls.state().opacity, 1.0);
//! controls.set_mode("bogus", &mut bus);
//! assert_eq!(controls.state().mode, VisualizationMode::Swipe);
//! ```
//!
//! Each mutation publishes exactly one notification through the sink it is
//! handed, synchronously, before returning. Because the control surface
//! never stores the sink, it holds no reference to the renderer side; the
//! two coordinate only through [`lamina_events::Notification`] values
//! correlated by source identity.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and does not itself allocate. It does not depend
//! on `std`.

#![no_std]

mod controls;
pub mod normalize;
mod state;
mod trace;

pub use controls::CompareControls;
pub use state::ControlState;
pub use trace::{ControlsTrace, NoopTrace};
