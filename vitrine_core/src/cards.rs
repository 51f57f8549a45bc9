// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The duplicated display sequence behind the infinite carousel.
//!
//! A [`CardSet`] holds the N original cards followed by one clone of each,
//! in the same order. The strip is literally twice as long as the content:
//! when the carousel scrolls onto the clone tail, it can jump back by N
//! positions without any visible change, because position `i` and `i + N`
//! render the same card.

use alloc::vec::Vec;
use core::convert::Infallible;

/// Original cards followed by a full clone set.
///
/// The display length is always exactly twice the original count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardSet<T> {
    display: Vec<T>,
    original_count: usize,
}

impl<T: Clone> CardSet<T> {
    /// Builds the display sequence by cloning every original once.
    #[must_use]
    pub fn from_originals(originals: Vec<T>) -> Self {
        Self::duplicate_with(originals, T::clone)
    }
}

impl<T> CardSet<T> {
    /// Builds the display sequence using `duplicate` to produce each clone.
    ///
    /// Backends whose cards are handles to live nodes pass a deep-copy
    /// function here; a plain `Clone` would alias the original node.
    #[must_use]
    pub fn duplicate_with(originals: Vec<T>, mut duplicate: impl FnMut(&T) -> T) -> Self {
        match Self::try_duplicate_with(originals, |card| Ok::<T, Infallible>(duplicate(card))) {
            Ok(set) => set,
            Err(never) => match never {},
        }
    }

    /// Like [`duplicate_with`](Self::duplicate_with), but stops at the first
    /// copy that fails.
    pub fn try_duplicate_with<E>(
        mut originals: Vec<T>,
        mut duplicate: impl FnMut(&T) -> Result<T, E>,
    ) -> Result<Self, E> {
        let original_count = originals.len();
        originals.reserve_exact(original_count);
        for i in 0..original_count {
            let copy = duplicate(&originals[i])?;
            originals.push(copy);
        }
        Ok(Self {
            display: originals,
            original_count,
        })
    }

    /// Number of original (non-clone) cards, N.
    #[inline]
    #[must_use]
    pub fn original_count(&self) -> usize {
        self.original_count
    }

    /// Length of the display sequence, 2N.
    #[inline]
    #[must_use]
    pub fn display_len(&self) -> usize {
        self.display.len()
    }

    /// Returns `true` if there are no cards at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.original_count == 0
    }

    /// The full display sequence, originals first.
    #[must_use]
    pub fn display(&self) -> &[T] {
        &self.display
    }

    /// The original cards.
    #[must_use]
    pub fn originals(&self) -> &[T] {
        &self.display[..self.original_count]
    }

    /// The clone tail.
    #[must_use]
    pub fn clones(&self) -> &[T] {
        &self.display[self.original_count..]
    }

    /// Returns the display card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.display.get(index)
    }

    /// Returns the index of the visually identical card across the seam.
    ///
    /// Returns `None` when `index` is outside the display sequence.
    #[must_use]
    pub fn seam_partner(&self, index: usize) -> Option<usize> {
        let n = self.original_count;
        if index >= self.display.len() {
            None
        } else if index < n {
            Some(index + n)
        } else {
            Some(index - n)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn display_is_twice_the_originals() {
        for n in 1..=8 {
            let originals: Vec<u32> = (0..n).collect();
            let set = CardSet::from_originals(originals);
            assert_eq!(set.original_count(), n as usize);
            assert_eq!(set.display_len(), 2 * n as usize, "N = {n}");
        }
    }

    #[test]
    fn clones_follow_originals_in_order() {
        let set = CardSet::from_originals(vec!['a', 'b', 'c']);
        assert_eq!(set.display(), &['a', 'b', 'c', 'a', 'b', 'c']);
        assert_eq!(set.originals(), set.clones());
    }

    #[test]
    fn duplicate_with_uses_the_given_copier() {
        let set = CardSet::duplicate_with(vec![1, 2], |c| c + 100);
        assert_eq!(set.display(), &[1, 2, 101, 102]);
    }

    #[test]
    fn failed_copy_aborts_duplication() {
        let r = CardSet::try_duplicate_with(vec![1, 2, 3], |&c| {
            if c == 2 { Err(c) } else { Ok(c) }
        });
        assert_eq!(r, Err(2));
    }

    #[test]
    fn empty_set_is_empty() {
        let set: CardSet<u8> = CardSet::from_originals(Vec::new());
        assert!(set.is_empty());
        assert_eq!(set.display_len(), 0);
        assert_eq!(set.seam_partner(0), None);
    }

    #[test]
    fn seam_partner_crosses_the_seam() {
        let set = CardSet::from_originals(vec![0; 6]);
        assert_eq!(set.seam_partner(0), Some(6));
        assert_eq!(set.seam_partner(6), Some(0));
        assert_eq!(set.seam_partner(11), Some(5));
        assert_eq!(set.seam_partner(12), None);
    }
}
