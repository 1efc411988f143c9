// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The control surface's session-local state aggregate.

use lamina_events::VisualizationMode;

/// Current user-chosen overlay settings.
///
/// This is the single source of truth for what the user has selected; it
/// fully determines what the next notification will carry. It is mutated
/// only through [`CompareControls`](crate::CompareControls), which couples
/// every mutation to a publish, and it is discarded with the control
/// surface — nothing persists across instantiations.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ControlState {
    /// Overlay alpha in `[0.0, 1.0]`.
    pub opacity: f64,
    /// Swipe divider position as a percent of viewport width, in
    /// `[0.0, 100.0]`.
    pub swipe: f64,
    /// Active blend strategy.
    pub mode: VisualizationMode,
}

impl Default for ControlState {
    /// A fully opaque overlay in normal mode, with the swipe divider at
    /// 100 (overlay fully revealed).
    ///
    /// The swipe default of 100 rather than a centered 50 is deliberate: it
    /// matches the behavior embedders already rely on, even though 50 would
    /// read as a more natural "comparison" starting point.
    fn default() -> Self {
        Self {
            opacity: 1.0,
            swipe: 100.0,
            mode: VisualizationMode::Normal,
        }
    }
}
