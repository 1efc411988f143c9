// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The control surface state machine: normalize → mutate → publish.
//!
//! ## Usage
//!
//! 1) Create a [`CompareControls`] with the identity its notifications will
//!    be stamped with.
//! 2) Feed raw widget input to [`CompareControls::set_opacity`],
//!    [`CompareControls::set_swipe`], and [`CompareControls::set_mode`],
//!    passing the sink (usually a
//!    [`CompareBus`](lamina_events::CompareBus)) to publish through.
//! 3) Read [`CompareControls::state`] to render the widgets themselves.
//!
//! ## Minimal example
//!
//! ```
//! use lamina_controls::CompareControls;
//! use lamina_events::{Change, RecordingSink, VisualizationMode};
//!
//! let mut controls = CompareControls::new("map1");
//! let mut sink = RecordingSink::new();
//!
//! controls.set_opacity("0.2", &mut sink);
//! controls.set_mode("swipe", &mut sink);
//!
//! assert_eq!(controls.state().opacity, 0.2);
//! assert_eq!(controls.state().mode, VisualizationMode::Swipe);
//! assert_eq!(sink.notifications()[0].change, Change::Opacity(0.2));
//! assert_eq!(sink.notifications()[0].source, "map1");
//! ```

use lamina_events::{Change, Notification, NotificationSink, VisualizationMode};

use crate::normalize::{normalize_opacity, normalize_swipe};
use crate::state::ControlState;
use crate::trace::ControlsTrace;

/// A control surface for one comparison overlay.
///
/// Owns the current [`ControlState`] and publishes exactly one notification
/// per mutation, stamped with this instance's identity. Data flow is
/// strictly one-way: raw input → normalization → state update → publish.
/// There is no inbound channel; this type offers no way to receive or react
/// to notifications.
///
/// The sink is an argument to each mutation rather than a stored field, so
/// the control surface holds no reference to the renderer side and can be
/// exercised in tests with a [`RecordingSink`](lamina_events::RecordingSink).
#[derive(Clone, Debug)]
pub struct CompareControls<I> {
    identity: I,
    state: ControlState,
}

impl<I: Clone> CompareControls<I> {
    /// Creates a control surface with default state.
    ///
    /// `identity` is stamped on every notification this instance emits; it
    /// is the only correlation mechanism with the paired renderer and is
    /// immutable for the life of the instance.
    #[must_use]
    pub fn new(identity: I) -> Self {
        Self {
            identity,
            state: ControlState::default(),
        }
    }

    /// Returns the identity stamped on this instance's notifications.
    #[must_use]
    pub fn identity(&self) -> &I {
        &self.identity
    }

    /// Returns the current state, for rendering the input widgets.
    #[must_use]
    pub fn state(&self) -> ControlState {
        self.state
    }

    /// Reports this control surface as active to an injected trace sink.
    ///
    /// Call once when the surface is wired into its host. Production
    /// embedders that want no diagnostics pass
    /// [`NoopTrace`](crate::NoopTrace).
    pub fn activate(&self, trace: &mut impl ControlsTrace<I>) {
        trace.activated(&self.identity);
    }

    /// Applies a raw opacity input: normalize, commit, publish.
    ///
    /// Always emits exactly one [`Change::Opacity`] notification, even when
    /// the normalized value equals the current one — duplicate user input
    /// is re-announced, never suppressed.
    pub fn set_opacity(&mut self, raw: &str, sink: &mut impl NotificationSink<I>) {
        let opacity = normalize_opacity(raw);
        self.state.opacity = opacity;
        self.publish(Change::Opacity(opacity), sink);
    }

    /// Applies a raw swipe-percent input: normalize, commit, publish.
    ///
    /// The committed value is always numeric and in `[0.0, 100.0]`,
    /// whatever the raw text contained. Emits exactly one
    /// [`Change::Swipe`] notification.
    pub fn set_swipe(&mut self, raw: &str, sink: &mut impl NotificationSink<I>) {
        let swipe = normalize_swipe(raw);
        self.state.swipe = swipe;
        self.publish(Change::Swipe(swipe), sink);
    }

    /// Applies a visualization mode token: membership-check, commit,
    /// publish.
    ///
    /// An unrecognized token is rejected outright — no state change, no
    /// notification — and `false` is returned. Rejection is silent by
    /// design; the return value exists only so an embedder can reflect a
    /// refused selection in its widgets, and may be ignored.
    pub fn set_mode(&mut self, token: &str, sink: &mut impl NotificationSink<I>) -> bool {
        let Some(mode) = VisualizationMode::from_token(token) else {
            return false;
        };
        self.state.mode = mode;
        self.publish(Change::Visualization(mode), sink);
        true
    }

    // Mutation and publish form one unit: callers never observe a state
    // change without its notification having been issued.
    fn publish(&self, change: Change, sink: &mut impl NotificationSink<I>) {
        sink.notify(&Notification::new(self.identity.clone(), change));
    }
}
