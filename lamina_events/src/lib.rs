// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lamina Events: typed notifications and in-process broadcast for overlay
//! comparison.
//!
//! A comparison overlay is adjusted from a control surface but drawn by an
//! independently-owned renderer. The two never hold a reference to each
//! other; they coordinate purely through the one-way, fire-and-forget
//! messages defined here:
//!
//! - **Kinds** ([`NotificationKind`], [`KindSet`]): Addressing for the three
//!   adjustable attributes (opacity, swipe position, visualization mode),
//!   so uninterested consumers can filter cheaply.
//! - **Payloads** ([`Change`], [`VisualizationMode`]): One changed attribute
//!   with its new, already-validated value.
//! - **Envelope** ([`Notification`]): A payload stamped with the opaque
//!   identity of the emitting control instance, the only correlation
//!   mechanism between a control surface and its paired renderer.
//! - **Sinks** ([`NotificationSink`], [`RecordingSink`]): The outbound seam
//!   a control surface publishes through, and a recorder for tests.
//! - **Bus** ([`CompareBus`]): Synchronous, registration-ordered broadcast
//!   to kind-filtered handlers.
//!
//! ## Quick Start
//!
//! ```rust
//! # extern crate alloc;
//! use alloc::rc::Rc;
//! use core::cell::RefCell;
//! use lamina_events::{Change, CompareBus, Notification, NotificationKind, VisualizationMode};
//!
//! let mut bus = CompareBus::new();
//! let divider = Rc::new(RefCell::new(0.0_f64));
//!
//! // The renderer side: follow the swipe divider, ignore everything else.
//! let position = Rc::clone(&divider);
//! bus.subscribe(NotificationKind::Swipe, move |n| {
//!     if let Change::Swipe(percent) = n.change {
//!         *position.borrow_mut() = percent;
//!     }
//! });
//!
//! // The control side publishes without knowing who listens.
//! bus.publish(&Notification::new("map1", Change::Swipe(75.0)));
//! bus.publish(&Notification::new(
//!     "map1",
//!     Change::Visualization(VisualizationMode::Swipe),
//! ));
//!
//! assert_eq!(*divider.borrow(), 75.0);
//! ```
//!
//! There is no inbound channel back to the publisher: no acknowledgment, no
//! delivery guarantee, no receiver discovery. Within one publisher,
//! notifications arrive in emission order because dispatch is synchronous.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod bus;
mod kind;
mod notification;
mod sink;

pub use bus::{CompareBus, SubscriberId};
pub use kind::{KindSet, KindSetIter, NotificationKind};
pub use notification::{Change, Notification, VisualizationMode};
pub use sink::{NotificationSink, RecordingSink};
