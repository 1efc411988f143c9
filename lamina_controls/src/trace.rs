// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Injected diagnostics for control surface lifecycle.
//!
//! The core never writes to any ambient output. Embedders that want a
//! record of a control surface becoming active inject a [`ControlsTrace`]
//! implementation; everyone else passes [`NoopTrace`].

/// A callback sink for control surface lifecycle diagnostics.
///
/// Implement this to route activation events into whatever logging or
/// inspection facility the embedding application uses.
pub trait ControlsTrace<I> {
    /// Called once when a control surface becomes active.
    fn activated(&mut self, identity: &I);
}

/// A trace sink that discards everything. The production default.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopTrace;

impl<I> ControlsTrace<I> for NoopTrace {
    fn activated(&mut self, _identity: &I) {}
}
