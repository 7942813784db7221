//! Ordered sets of the distinct elements of a sorted multiset
//!
//! Element sets hold no data of their own. Every query is answered by asking
//! the multiset for an entry (usually the first or last entry of a range view)
//! and keeping only its element.

use crate::{
    bound::BoundType,
    comparator::Comparator,
    descending::DescendingMultiset,
    entry::Entry,
    error::ViewError,
    multiset::{OwnerRef, SortedMultiset, SortedMultisetRef},
};
use std::fmt;

/// Ordered set operations, derived from the range and extremal queries of a
/// sorted multiset
///
/// Range queries follow the usual half-open convention of ordered sets: the
/// lower endpoint is included and the upper endpoint is excluded. The sets
/// that they return keep their range of the multiset alive.
pub trait SortedElementSet<E: Clone + 'static> {
    /// Multiset whose distinct elements this set presents
    fn multiset(&self) -> SortedMultisetRef<E>;

    /// Order of the elements
    fn comparator(&self) -> Comparator<E> {
        self.multiset().comparator()
    }

    /// Smallest element
    ///
    /// # Errors
    ///
    /// Fails with [`ViewError::NoSuchElement`] if the set is empty.
    fn first(&self) -> Result<E, ViewError> {
        element_or_error(self.multiset().first_entry())
    }

    /// Largest element
    ///
    /// # Errors
    ///
    /// Fails with [`ViewError::NoSuchElement`] if the set is empty.
    fn last(&self) -> Result<E, ViewError> {
        element_or_error(self.multiset().last_entry())
    }

    /// Elements from `from` (inclusive) to `to` (exclusive)
    ///
    /// # Errors
    ///
    /// Fails with [`ViewError::InvalidRange`] if `from` is ordered after `to`.
    fn sub_set(&self, from: E, to: E) -> Result<ElementSet<E>, ViewError> {
        let range = self
            .multiset()
            .sub_multiset(from, BoundType::Inclusive, to, BoundType::Exclusive)?;
        Ok(ElementSet::over(range))
    }

    /// Elements ordered before `to`
    fn head_set(&self, to: E) -> ElementSet<E> {
        ElementSet::over(self.multiset().head_multiset(to, BoundType::Exclusive))
    }

    /// Elements ordered after `from`, or equal to it
    fn tail_set(&self, from: E) -> ElementSet<E> {
        ElementSet::over(self.multiset().tail_multiset(from, BoundType::Inclusive))
    }

    /// Truth that `element` belongs to the set
    fn contains(&self, element: &E) -> bool {
        self.multiset().contains(element)
    }

    /// Number of elements
    fn len(&self) -> usize {
        self.multiset().distinct_len()
    }

    /// Truth that the set has no element
    fn is_empty(&self) -> bool {
        self.multiset().is_empty()
    }

    /// Iterate over the elements, in order
    fn iter(&self) -> Box<dyn Iterator<Item = E>> {
        Box::new(self.multiset().entry_iter().map(|entry| entry.element))
    }
}

/// Navigation, polling and inclusive-flag range queries on top of
/// [`SortedElementSet`]
///
/// Navigation queries return `None` when there is no matching element.
pub trait NavigableElementSet<E: Clone + 'static>: SortedElementSet<E> {
    /// Greatest element strictly ordered before `element`
    fn lower(&self, element: E) -> Option<E> {
        element_of(
            self.multiset()
                .head_multiset(element, BoundType::Exclusive)
                .last_entry(),
        )
    }

    /// Greatest element ordered before `element`, or equal to it
    fn floor(&self, element: E) -> Option<E> {
        element_of(
            self.multiset()
                .head_multiset(element, BoundType::Inclusive)
                .last_entry(),
        )
    }

    /// Smallest element ordered after `element`, or equal to it
    fn ceiling(&self, element: E) -> Option<E> {
        element_of(
            self.multiset()
                .tail_multiset(element, BoundType::Inclusive)
                .first_entry(),
        )
    }

    /// Smallest element strictly ordered after `element`
    fn higher(&self, element: E) -> Option<E> {
        element_of(
            self.multiset()
                .tail_multiset(element, BoundType::Exclusive)
                .first_entry(),
        )
    }

    /// Remove the smallest element, with all of its occurences in the
    /// multiset
    fn poll_first(&self) -> Option<E> {
        element_of(self.multiset().poll_first_entry())
    }

    /// Remove the largest element, with all of its occurences in the multiset
    fn poll_last(&self) -> Option<E> {
        element_of(self.multiset().poll_last_entry())
    }

    /// Remove `element`, with all of its occurences in the multiset, telling
    /// whether it was present
    fn remove(&self, element: &E) -> bool {
        self.multiset().take_entry(element).is_some()
    }

    /// The same elements, in reverse order
    fn descending_set(&self) -> ElementSet<E> {
        ElementSet::over(DescendingMultiset::new(OwnerRef::Strong(self.multiset())))
    }

    /// Iterate over the elements in reverse order
    fn descending_iter(&self) -> Box<dyn Iterator<Item = E>> {
        self.descending_set().iter()
    }

    /// Elements between `from` and `to`, with explicit endpoint inclusion
    ///
    /// # Errors
    ///
    /// Fails with [`ViewError::InvalidRange`] if `from` is ordered after `to`.
    fn sub_set_with(
        &self,
        from: E,
        from_inclusive: bool,
        to: E,
        to_inclusive: bool,
    ) -> Result<ElementSet<E>, ViewError> {
        let range = self.multiset().sub_multiset(
            from,
            BoundType::from_inclusive(from_inclusive),
            to,
            BoundType::from_inclusive(to_inclusive),
        )?;
        Ok(ElementSet::over(range))
    }

    /// Elements ordered before `to`, or equal to it if `inclusive`
    fn head_set_with(&self, to: E, inclusive: bool) -> ElementSet<E> {
        let range = self
            .multiset()
            .head_multiset(to, BoundType::from_inclusive(inclusive));
        ElementSet::over(range)
    }

    /// Elements ordered after `from`, or equal to it if `inclusive`
    fn tail_set_with(&self, from: E, inclusive: bool) -> ElementSet<E> {
        let range = self
            .multiset()
            .tail_multiset(from, BoundType::from_inclusive(inclusive));
        ElementSet::over(range)
    }
}

fn element_of<E>(entry: Option<Entry<E>>) -> Option<E> {
    entry.map(|entry| entry.element)
}

fn element_or_error<E>(entry: Option<Entry<E>>) -> Result<E, ViewError> {
    element_of(entry).ok_or(ViewError::NoSuchElement)
}

/// Live ordered set of the distinct elements of a sorted multiset
///
/// Obtained via [`SortedMultiset::element_set()`], in which case the set
/// belongs to the multiset, or from the range and reversal queries of another
/// element set, in which case the set keeps its multiset alive. An element is
/// in the set exactly when the multiset holds at least one occurence of it.
///
/// # Examples
///
/// ```
/// use sorted_multiset_views::{
///     BTreeMultiset, NavigableElementSet, SortedElementSet, SortedMultiset, ViewError,
/// };
///
/// let set = BTreeMultiset::from_elements([1, 1, 3, 5, 5, 5]);
/// let elements = set.element_set();
/// assert!(elements.iter().eq([1, 3, 5]));
///
/// assert_eq!(elements.floor(4), Some(3));
/// assert_eq!(elements.higher(5), None);
/// assert!(elements.descending_iter().eq([5, 3, 1]));
///
/// assert_eq!(elements.poll_first(), Some(1));
/// assert!(set.iter().eq([3, 5, 5, 5]));
///
/// elements.head_set(4).remove(&3);
/// assert_eq!(set.element_set().first(), Ok(5));
/// assert_eq!(elements.head_set(4).first(), Err(ViewError::NoSuchElement));
/// ```
pub struct ElementSet<E: Clone + 'static> {
    multiset: OwnerRef<E>,
}
//
impl<E: Clone + 'static> ElementSet<E> {
    pub(crate) fn new(multiset: OwnerRef<E>) -> Self {
        log::trace!("Building an element set view");
        Self { multiset }
    }

    /// Element set which keeps `multiset` alive
    fn over(multiset: SortedMultisetRef<E>) -> Self {
        Self::new(OwnerRef::Strong(multiset))
    }
}

impl<E: Clone + 'static> SortedElementSet<E> for ElementSet<E> {
    fn multiset(&self) -> SortedMultisetRef<E> {
        self.multiset.get()
    }
}

impl<E: Clone + 'static> NavigableElementSet<E> for ElementSet<E> {}

impl<E: Clone + fmt::Debug + 'static> fmt::Debug for ElementSet<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
