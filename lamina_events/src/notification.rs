// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notification payloads and the source-stamped envelope.

use crate::kind::NotificationKind;

/// The blend strategy used to composite the overlay over the base layer.
///
/// Exactly one mode is active at any time; the initial mode is
/// [`VisualizationMode::Normal`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum VisualizationMode {
    /// Plain alpha-blended compositing of the overlay over the base.
    #[default]
    Normal,
    /// The overlay is revealed only within a cursor-following region.
    Spyglass,
    /// A draggable divider reveals the overlay on one side of the viewport.
    Swipe,
}

impl VisualizationMode {
    /// Parses a wire token into a mode.
    ///
    /// The tokens are the ones a mode selector submits: `"normal"`,
    /// `"spyglass"`, and `"swipe"`. Anything else is rejected with `None`;
    /// there is deliberately no fallback mode for unrecognized tokens.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "normal" => Some(Self::Normal),
            "spyglass" => Some(Self::Spyglass),
            "swipe" => Some(Self::Swipe),
            _ => None,
        }
    }

    /// Returns the wire token for this mode.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Spyglass => "spyglass",
            Self::Swipe => "swipe",
        }
    }
}

/// One changed control attribute, carrying its new value.
///
/// Variants correspond one-to-one with [`NotificationKind`]; the payload
/// type is fixed by the variant, so a consumer matching on kind always
/// receives the value shape it expects.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Change {
    /// New overlay alpha in `[0.0, 1.0]`.
    Opacity(f64),
    /// New swipe divider position as a percent of viewport width, in
    /// `[0.0, 100.0]`.
    Swipe(f64),
    /// New blend strategy.
    Visualization(VisualizationMode),
}

impl Change {
    /// Returns the kind this change is addressed by.
    #[must_use]
    pub const fn kind(&self) -> NotificationKind {
        match self {
            Self::Opacity(_) => NotificationKind::Opacity,
            Self::Swipe(_) => NotificationKind::Swipe,
            Self::Visualization(_) => NotificationKind::Visualization,
        }
    }
}

/// A one-way, fire-and-forget message describing one state transition of a
/// control surface.
///
/// `source` is the opaque identity of the emitting control instance. It is
/// the only correlation mechanism between a control surface and its paired
/// renderer: a consumer serving several control/renderer pairs routes on it,
/// and a consumer serving a single pair may ignore it.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Notification<I> {
    /// Identity of the control instance that emitted this notification.
    pub source: I,
    /// The changed attribute and its new value.
    pub change: Change,
}

impl<I> Notification<I> {
    /// Creates a notification stamped with the given source identity.
    #[must_use]
    pub const fn new(source: I, change: Change) -> Self {
        Self { source, change }
    }

    /// Returns the kind of the carried change.
    #[must_use]
    pub const fn kind(&self) -> NotificationKind {
        self.change.kind()
    }
}
