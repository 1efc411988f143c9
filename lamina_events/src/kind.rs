// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notification kinds and kind sets for subscription filtering.

use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// Identifies which control attribute a notification describes.
///
/// Notifications are addressed by kind so that a consumer interested in only
/// one attribute (say, the swipe divider) can ignore the rest cheaply,
/// without inspecting payloads.
///
/// # See Also
///
/// - [`KindSet`]: A compact set of kinds, used as a subscription filter.
/// - [`Change`](crate::Change): The payload enum whose variants correspond
///   one-to-one with these kinds.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum NotificationKind {
    /// The overlay layer's alpha changed.
    Opacity,
    /// The swipe divider position changed.
    Swipe,
    /// The blend strategy changed.
    Visualization,
}

impl NotificationKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 3] = [Self::Opacity, Self::Swipe, Self::Visualization];

    /// Returns the bit index of this kind.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Opacity => 0,
            Self::Swipe => 1,
            Self::Visualization => 2,
        }
    }

    /// Converts this kind into a single-element [`KindSet`].
    #[must_use]
    pub const fn into_set(self) -> KindSet {
        KindSet(1_u8 << self.index())
    }

    const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Opacity),
            1 => Some(Self::Swipe),
            2 => Some(Self::Visualization),
            _ => None,
        }
    }
}

/// A compact bitfield representing a set of [`NotificationKind`]s.
///
/// `KindSet` is the filter attached to each bus subscription: a handler is
/// invoked only for notifications whose kind is contained in its set.
///
/// # Example
///
/// ```
/// use lamina_events::{KindSet, NotificationKind};
///
/// let mut set = KindSet::empty();
/// set.insert(NotificationKind::Opacity);
/// set.insert(NotificationKind::Swipe);
///
/// assert!(set.contains(NotificationKind::Opacity));
/// assert!(!set.contains(NotificationKind::Visualization));
///
/// // Combine sets with bitwise OR
/// let combined = NotificationKind::Opacity.into_set() | NotificationKind::Visualization.into_set();
/// assert_eq!(combined.len(), 2);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct KindSet(u8);

impl KindSet {
    /// An empty kind set.
    pub const EMPTY: Self = Self(0);

    /// A kind set containing every notification kind.
    pub const ALL: Self = Self(0b111);

    /// Creates an empty kind set.
    #[must_use]
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Creates a kind set containing every notification kind.
    #[must_use]
    pub const fn all() -> Self {
        Self::ALL
    }

    /// Returns `true` if this set contains no kinds.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if this set contains the given kind.
    #[must_use]
    pub const fn contains(self, kind: NotificationKind) -> bool {
        (self.0 & (1_u8 << kind.index())) != 0
    }

    /// Inserts a kind into the set.
    pub fn insert(&mut self, kind: NotificationKind) {
        self.0 |= 1_u8 << kind.index();
    }

    /// Removes a kind from the set.
    pub fn remove(&mut self, kind: NotificationKind) {
        self.0 &= !(1_u8 << kind.index());
    }

    /// Returns the number of kinds in the set.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns an iterator over the kinds in this set.
    #[must_use]
    pub const fn iter(self) -> KindSetIter {
        KindSetIter { bits: self.0 }
    }
}

impl fmt::Debug for KindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitOr for KindSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for KindSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for KindSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for KindSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for KindSet {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(!self.0 & Self::ALL.0)
    }
}

impl From<NotificationKind> for KindSet {
    fn from(kind: NotificationKind) -> Self {
        kind.into_set()
    }
}

impl IntoIterator for KindSet {
    type Item = NotificationKind;
    type IntoIter = KindSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the kinds in a [`KindSet`].
#[derive(Clone, Debug)]
pub struct KindSetIter {
    bits: u8,
}

impl Iterator for KindSetIter {
    type Item = NotificationKind;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation, reason = "trailing_zeros <= 7")]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1; // Clear the lowest set bit
        NotificationKind::from_index(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.bits.count_ones() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for KindSetIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn kind_indices_are_distinct() {
        let mut seen = KindSet::empty();
        for kind in NotificationKind::ALL {
            assert!(!seen.contains(kind));
            seen.insert(kind);
        }
        assert_eq!(seen, KindSet::ALL);
    }

    #[test]
    fn kind_set_operations() {
        let mut set = KindSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);

        set.insert(NotificationKind::Opacity);
        assert!(!set.is_empty());
        assert!(set.contains(NotificationKind::Opacity));
        assert!(!set.contains(NotificationKind::Swipe));
        assert_eq!(set.len(), 1);

        set.insert(NotificationKind::Swipe);
        assert!(set.contains(NotificationKind::Swipe));
        assert_eq!(set.len(), 2);

        set.remove(NotificationKind::Opacity);
        assert!(!set.contains(NotificationKind::Opacity));
        assert!(set.contains(NotificationKind::Swipe));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn kind_set_bitwise() {
        let a = NotificationKind::Opacity.into_set();
        let b = NotificationKind::Swipe.into_set();
        let c = a | b;

        assert!(c.contains(NotificationKind::Opacity));
        assert!(c.contains(NotificationKind::Swipe));
        assert!(!c.contains(NotificationKind::Visualization));

        let d = c & a;
        assert!(d.contains(NotificationKind::Opacity));
        assert!(!d.contains(NotificationKind::Swipe));

        let e = !a;
        assert!(!e.contains(NotificationKind::Opacity));
        assert!(e.contains(NotificationKind::Swipe));
        assert!(e.contains(NotificationKind::Visualization));
    }

    #[test]
    fn not_stays_within_defined_kinds() {
        // Complement never produces bits outside the three defined kinds.
        assert_eq!(!KindSet::EMPTY, KindSet::ALL);
        assert_eq!(!KindSet::ALL, KindSet::EMPTY);
    }

    #[test]
    fn kind_set_iter() {
        let set = NotificationKind::Opacity.into_set() | NotificationKind::Visualization.into_set();
        let kinds: Vec<_> = set.iter().collect();

        assert_eq!(kinds.len(), 2);
        assert!(kinds.contains(&NotificationKind::Opacity));
        assert!(kinds.contains(&NotificationKind::Visualization));
    }

    #[test]
    fn kind_set_iter_exact_size() {
        let iter = KindSet::ALL.iter();
        assert_eq!(iter.len(), 3);
    }
}
