// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The outbound notification seam and a recording test observer.

use alloc::vec::Vec;

use crate::notification::Notification;

/// A fire-and-forget destination for notifications.
///
/// This is the seam a control surface publishes through: it has no return
/// value, no error path, and makes no delivery guarantee. A sink does not
/// know whether anyone is listening, and the publisher never finds out.
///
/// [`CompareBus`](crate::CompareBus) is the usual production sink;
/// [`RecordingSink`] is the usual test sink.
pub trait NotificationSink<I> {
    /// Accepts one notification.
    fn notify(&mut self, notification: &Notification<I>);
}

/// A sink that appends every notification to a `Vec`, in arrival order.
///
/// Useful for asserting on emission sequences without wiring up a bus.
///
/// # Example
///
/// ```
/// use lamina_events::{Change, Notification, NotificationSink, RecordingSink};
///
/// let mut sink = RecordingSink::new();
/// sink.notify(&Notification::new("map1", Change::Opacity(0.2)));
/// sink.notify(&Notification::new("map1", Change::Swipe(75.0)));
///
/// assert_eq!(sink.notifications().len(), 2);
/// assert_eq!(sink.notifications()[1].change, Change::Swipe(75.0));
/// ```
#[derive(Clone, Debug)]
pub struct RecordingSink<I> {
    notifications: Vec<Notification<I>>,
}

impl<I> RecordingSink<I> {
    /// Creates an empty recorder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            notifications: Vec::new(),
        }
    }

    /// Returns the recorded notifications in arrival order.
    #[must_use]
    pub fn notifications(&self) -> &[Notification<I>] {
        &self.notifications
    }

    /// Removes and returns all recorded notifications.
    pub fn take(&mut self) -> Vec<Notification<I>> {
        core::mem::take(&mut self.notifications)
    }

    /// Clears the recorder.
    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}

impl<I> Default for RecordingSink<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Clone> NotificationSink<I> for RecordingSink<I> {
    fn notify(&mut self, notification: &Notification<I>) {
        self.notifications.push(notification.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::Change;

    #[test]
    fn records_in_arrival_order() {
        let mut sink = RecordingSink::new();
        sink.notify(&Notification::new("a", Change::Opacity(0.1)));
        sink.notify(&Notification::new("a", Change::Swipe(30.0)));
        sink.notify(&Notification::new("a", Change::Opacity(0.9)));

        let changes: Vec<_> = sink.notifications().iter().map(|n| n.change).collect();
        assert_eq!(
            changes,
            [
                Change::Opacity(0.1),
                Change::Swipe(30.0),
                Change::Opacity(0.9)
            ]
        );
    }

    #[test]
    fn take_drains_the_recorder() {
        let mut sink = RecordingSink::new();
        sink.notify(&Notification::new("a", Change::Swipe(10.0)));

        let taken = sink.take();
        assert_eq!(taken.len(), 1);
        assert!(sink.notifications().is_empty());
    }

    #[test]
    fn clear_empties_the_recorder() {
        let mut sink = RecordingSink::new();
        sink.notify(&Notification::new("a", Change::Opacity(1.0)));
        sink.clear();
        assert!(sink.notifications().is_empty());
    }
}
