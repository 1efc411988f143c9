// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-process broadcast dispatch of notifications to kind-filtered handlers.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::kind::KindSet;
use crate::notification::Notification;
use crate::sink::NotificationSink;

/// Handle identifying one subscription on a [`CompareBus`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct SubscriberId(u64);

type Handler<I> = Box<dyn FnMut(&Notification<I>)>;

struct Subscriber<I> {
    id: SubscriberId,
    filter: KindSet,
    handler: Handler<I>,
}

/// A typed publish/subscribe channel between control surfaces and renderers.
///
/// Publishing walks the subscribers in registration order and synchronously
/// invokes every handler whose filter contains the notification's kind.
/// Dispatch is fire-and-forget: there is no acknowledgment, no delivery
/// guarantee beyond the synchronous call, and publishing with zero matching
/// subscribers is a no-op. Multiple control surfaces may publish through one
/// bus; consumers disambiguate on [`Notification::source`].
///
/// The bus requires `&mut self` for both subscription and publishing, so it
/// is single-threaded by construction and needs no locking.
///
/// # Example
///
/// ```
/// # extern crate alloc;
/// use alloc::rc::Rc;
/// use core::cell::RefCell;
/// use lamina_events::{Change, CompareBus, Notification, NotificationKind};
///
/// let mut bus = CompareBus::new();
/// let seen = Rc::new(RefCell::new(Vec::new()));
///
/// // A renderer interested only in opacity changes.
/// let sink = Rc::clone(&seen);
/// bus.subscribe(NotificationKind::Opacity, move |n| {
///     sink.borrow_mut().push(n.change);
/// });
///
/// bus.publish(&Notification::new("map1", Change::Opacity(0.2)));
/// bus.publish(&Notification::new("map1", Change::Swipe(75.0)));
///
/// // Only the opacity notification reached the handler.
/// assert_eq!(&*seen.borrow(), &[Change::Opacity(0.2)]);
/// ```
pub struct CompareBus<I> {
    subscribers: Vec<Subscriber<I>>,
    next_id: u64,
}

impl<I> CompareBus<I> {
    /// Creates a bus with no subscribers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Registers a handler for the given kinds.
    ///
    /// `filter` accepts a single [`NotificationKind`](crate::NotificationKind)
    /// or a [`KindSet`]. Handlers are invoked in registration order. A
    /// handler registered with an empty filter is never invoked but still
    /// occupies a slot until unsubscribed.
    pub fn subscribe(
        &mut self,
        filter: impl Into<KindSet>,
        handler: impl FnMut(&Notification<I>) + 'static,
    ) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push(Subscriber {
            id,
            filter: filter.into(),
            handler: Box::new(handler),
        });
        id
    }

    /// Registers a handler for every notification kind.
    pub fn subscribe_all(
        &mut self,
        handler: impl FnMut(&Notification<I>) + 'static,
    ) -> SubscriberId {
        self.subscribe(KindSet::ALL, handler)
    }

    /// Removes a subscription, returning `true` if it existed.
    ///
    /// Unknown or already-removed ids are a no-op.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        self.subscribers.len() != before
    }

    /// Broadcasts a notification to every subscriber whose filter contains
    /// its kind, in registration order.
    pub fn publish(&mut self, notification: &Notification<I>) {
        let kind = notification.kind();
        for subscriber in &mut self.subscribers {
            if subscriber.filter.contains(kind) {
                (subscriber.handler)(notification);
            }
        }
    }

    /// Returns the number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<I> Default for CompareBus<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> NotificationSink<I> for CompareBus<I> {
    fn notify(&mut self, notification: &Notification<I>) {
        self.publish(notification);
    }
}

impl<I> fmt::Debug for CompareBus<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompareBus")
            .field("subscriber_count", &self.subscribers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::NotificationKind;
    use crate::notification::{Change, VisualizationMode};
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    fn shared_log() -> Rc<RefCell<Vec<Change>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[test]
    fn publish_with_no_subscribers_is_a_no_op() {
        let mut bus = CompareBus::new();
        bus.publish(&Notification::new("a", Change::Opacity(0.5)));
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn kind_filter_selects_handlers() {
        let mut bus = CompareBus::new();
        let opacity_log = shared_log();
        let swipe_log = shared_log();

        let log = Rc::clone(&opacity_log);
        bus.subscribe(NotificationKind::Opacity, move |n| {
            log.borrow_mut().push(n.change);
        });
        let log = Rc::clone(&swipe_log);
        bus.subscribe(NotificationKind::Swipe, move |n| {
            log.borrow_mut().push(n.change);
        });

        bus.publish(&Notification::new("a", Change::Opacity(0.2)));
        bus.publish(&Notification::new("a", Change::Swipe(75.0)));
        bus.publish(&Notification::new(
            "a",
            Change::Visualization(VisualizationMode::Swipe),
        ));

        assert_eq!(&*opacity_log.borrow(), &[Change::Opacity(0.2)]);
        assert_eq!(&*swipe_log.borrow(), &[Change::Swipe(75.0)]);
    }

    #[test]
    fn dispatch_follows_registration_order() {
        let mut bus = CompareBus::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for tag in 0_u32..3 {
            let order = Rc::clone(&order);
            bus.subscribe_all(move |_| order.borrow_mut().push(tag));
        }

        bus.publish(&Notification::new("a", Change::Swipe(10.0)));
        assert_eq!(&*order.borrow(), &[0, 1, 2]);
    }

    #[test]
    fn unsubscribe_removes_only_the_target() {
        let mut bus = CompareBus::new();
        let log = shared_log();

        let sink = Rc::clone(&log);
        let first = bus.subscribe_all(move |n| sink.borrow_mut().push(n.change));
        let sink = Rc::clone(&log);
        bus.subscribe_all(move |n| sink.borrow_mut().push(n.change));

        assert!(bus.unsubscribe(first));
        assert_eq!(bus.subscriber_count(), 1);

        bus.publish(&Notification::new("a", Change::Opacity(1.0)));
        assert_eq!(log.borrow().len(), 1);

        // Second removal of the same id is a no-op.
        assert!(!bus.unsubscribe(first));
    }

    #[test]
    fn empty_filter_never_fires() {
        let mut bus = CompareBus::new();
        let log = shared_log();

        let sink = Rc::clone(&log);
        bus.subscribe(KindSet::empty(), move |n| sink.borrow_mut().push(n.change));

        bus.publish(&Notification::new("a", Change::Opacity(0.3)));
        bus.publish(&Notification::new("a", Change::Swipe(30.0)));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn sink_impl_forwards_to_publish() {
        let mut bus = CompareBus::new();
        let log = shared_log();

        let sink = Rc::clone(&log);
        bus.subscribe_all(move |n| sink.borrow_mut().push(n.change));

        NotificationSink::notify(&mut bus, &Notification::new("a", Change::Swipe(40.0)));
        assert_eq!(&*log.borrow(), &[Change::Swipe(40.0)]);
    }

    #[test]
    fn sources_pass_through_untouched() {
        let mut bus = CompareBus::new();
        let sources = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&sources);
        bus.subscribe_all(move |n: &Notification<&str>| sink.borrow_mut().push(n.source));

        bus.publish(&Notification::new("a", Change::Opacity(0.1)));
        bus.publish(&Notification::new("b", Change::Opacity(0.2)));
        assert_eq!(&*sources.borrow(), &["a", "b"]);
    }
}
