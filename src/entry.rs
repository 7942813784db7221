//! Multiset entries and the entry set view

use crate::multiset::{EntryIter, OwnerRef, SortedMultisetRef};
use derive_more::{Constructor, From, Into};
use std::{fmt, num::NonZeroUsize};

/// A distinct element of a multiset, along with its number of occurences
///
/// The count is never zero: an element whose last occurence has been removed
/// has no entry at all.
///
/// # Examples
///
/// ```
/// use sorted_multiset_views::Entry;
/// use std::num::NonZeroUsize;
///
/// let nonzero = |x| NonZeroUsize::new(x).unwrap();
/// let entry = Entry::new('a', nonzero(3));
/// assert_eq!(entry.to_string(), "a x 3");
/// assert_eq!(Entry::new('b', nonzero(1)).to_string(), "b");
///
/// let (element, count): (char, NonZeroUsize) = entry.into();
/// assert_eq!((element, count.get()), ('a', 3));
/// ```
#[derive(Clone, Constructor, Copy, Debug, Eq, From, Hash, Into, PartialEq)]
pub struct Entry<E> {
    /// Distinct element
    pub element: E,

    /// Number of occurences of `element`
    pub count: NonZeroUsize,
}

impl<E: fmt::Display> fmt::Display for Entry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count.get() == 1 {
            write!(f, "{}", self.element)
        } else {
            write!(f, "{} x {}", self.element, self.count)
        }
    }
}

/// Live view of the entries of a sorted multiset
///
/// Obtained via [`SortedMultiset::entry_set()`](crate::SortedMultiset::entry_set).
/// Iteration follows the order of the multiset that the entry set was derived
/// from, so the entry set of a descending view iterates in descending order.
pub struct EntrySet<E: Clone + 'static> {
    multiset: OwnerRef<E>,
}
//
impl<E: Clone + 'static> EntrySet<E> {
    pub(crate) fn new(multiset: OwnerRef<E>) -> Self {
        log::trace!("Building an entry set view");
        Self { multiset }
    }

    /// Multiset whose entries this set presents
    #[must_use = "Only effect is to produce a result"]
    pub fn multiset(&self) -> SortedMultisetRef<E> {
        self.multiset.get()
    }

    /// Iterate over the entries, in the order of the underlying multiset
    #[must_use = "Only effect is to produce a result"]
    pub fn iter(&self) -> EntryIter<E> {
        self.multiset().entry_iter()
    }

    /// Number of entries, i.e. number of distinct elements
    #[must_use = "Only effect is to produce a result"]
    pub fn len(&self) -> usize {
        self.multiset().distinct_len()
    }

    /// Truth that there are no entries
    #[must_use = "Only effect is to produce a result"]
    pub fn is_empty(&self) -> bool {
        self.multiset().is_empty()
    }

    /// Truth that the multiset holds exactly `entry.count` occurences of
    /// `entry.element`
    #[must_use = "Only effect is to produce a result"]
    pub fn contains(&self, entry: &Entry<E>) -> bool {
        self.multiset().count(&entry.element) == entry.count.get()
    }
}

impl<E: Clone + fmt::Debug + 'static> fmt::Debug for EntrySet<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<E: Clone + fmt::Display + 'static> fmt::Display for EntrySet<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, entry) in self.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{entry}")?;
        }
        write!(f, "]")
    }
}

impl<E: Clone + 'static> IntoIterator for &EntrySet<E> {
    type Item = Entry<E>;
    type IntoIter = EntryIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
