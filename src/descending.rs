//! Order-reversed view of a sorted multiset
//!
//! Every operation of the descending view is rewritten in terms of the forward
//! multiset. The rules to keep in mind are that a head in descending order is
//! a tail in ascending order (and vice versa), and that when the endpoints of
//! a sub-range swap roles, each endpoint keeps its own bound type.

use crate::{
    bound::{BoundType, GeneralRange},
    comparator::Comparator,
    entry::Entry,
    error::ViewError,
    multiset::{EntryIter, OwnerRef, SortedMultiset, SortedMultisetRef, ViewCache},
};
use std::{
    cell::OnceCell,
    rc::{Rc, Weak},
};

/// View of a sorted multiset in reverse order
///
/// Obtained via [`SortedMultiset::descending_multiset()`]. No data is copied:
/// the view queries the forward multiset on every call, and mutations through
/// either side are visible on the other side.
///
/// The descending view of a multiset is owned by that multiset. Range views
/// of a descending view are descending views of forward range views, which
/// they keep alive.
///
/// # Examples
///
/// ```
/// use sorted_multiset_views::{BTreeMultiset, BoundType, SortedMultiset};
/// use std::rc::Rc;
///
/// let set = BTreeMultiset::from_elements([1, 1, 3, 5, 5, 5]);
/// let descending = set.descending_multiset();
///
/// // In descending order, elements "before" 3 are the larger ones
/// let head = descending.head_multiset(3, BoundType::Exclusive);
/// assert!(head.iter().eq([5, 5, 5]));
///
/// // Reversing twice gets back the very same multiset
/// let forward = descending.descending_multiset();
/// assert!(Rc::ptr_eq(&forward, &set.views().handle()));
/// ```
pub struct DescendingMultiset<E: Clone + 'static> {
    /// Multiset being viewed in reverse
    forward: OwnerRef<E>,

    /// Reversed comparator of `forward`, computed on first use
    comparator: OnceCell<Comparator<E>>,

    /// Derived views of this descending view
    views: ViewCache<E>,
}
//
impl<E: Clone + 'static> DescendingMultiset<E> {
    pub(crate) fn new(forward: OwnerRef<E>) -> SortedMultisetRef<E> {
        log::trace!("Building a descending view");
        Rc::new_cyclic(|this: &Weak<Self>| Self {
            forward,
            comparator: OnceCell::new(),
            views: ViewCache::new(this.clone()),
        })
    }

    fn forward(&self) -> SortedMultisetRef<E> {
        self.forward.get()
    }

    /// Descending view of a range view of the forward multiset
    fn reversed_range(range: SortedMultisetRef<E>) -> SortedMultisetRef<E> {
        Self::new(OwnerRef::Strong(range))
    }
}

impl<E: Clone + 'static> SortedMultiset<E> for DescendingMultiset<E> {
    fn views(&self) -> &ViewCache<E> {
        &self.views
    }

    fn comparator(&self) -> Comparator<E> {
        self.comparator
            .get_or_init(|| self.forward().comparator().reversed())
            .clone()
    }

    fn entry_iter(&self) -> EntryIter<E> {
        self.forward().descending_entry_iter()
    }

    fn take_entry(&self, element: &E) -> Option<Entry<E>> {
        self.forward().take_entry(element)
    }

    fn descending_entry_iter(&self) -> EntryIter<E> {
        self.forward().entry_iter()
    }

    fn entries_in(&self, range: &GeneralRange<E>) -> EntryIter<E> {
        self.forward().entries_in_rev(&range.clone().reverse())
    }

    fn entries_in_rev(&self, range: &GeneralRange<E>) -> EntryIter<E> {
        self.forward().entries_in(&range.clone().reverse())
    }

    fn first_entry(&self) -> Option<Entry<E>> {
        self.forward().last_entry()
    }

    fn last_entry(&self) -> Option<Entry<E>> {
        self.forward().first_entry()
    }

    fn poll_first_entry(&self) -> Option<Entry<E>> {
        self.forward().poll_last_entry()
    }

    fn poll_last_entry(&self) -> Option<Entry<E>> {
        self.forward().poll_first_entry()
    }

    fn head_multiset(&self, upper: E, bound_type: BoundType) -> SortedMultisetRef<E> {
        Self::reversed_range(self.forward().tail_multiset(upper, bound_type))
    }

    fn tail_multiset(&self, lower: E, bound_type: BoundType) -> SortedMultisetRef<E> {
        Self::reversed_range(self.forward().head_multiset(lower, bound_type))
    }

    fn sub_multiset(
        &self,
        lower: E,
        lower_type: BoundType,
        upper: E,
        upper_type: BoundType,
    ) -> Result<SortedMultisetRef<E>, ViewError> {
        let range = self
            .forward()
            .sub_multiset(upper, upper_type, lower, lower_type)?;
        Ok(Self::reversed_range(range))
    }

    fn descending_multiset(&self) -> SortedMultisetRef<E> {
        self.forward()
    }

    fn count(&self, element: &E) -> usize {
        self.forward().count(element)
    }

    fn len(&self) -> usize {
        self.forward().len()
    }

    fn distinct_len(&self) -> usize {
        self.forward().distinct_len()
    }

    fn is_empty(&self) -> bool {
        self.forward().is_empty()
    }
}

#[cfg(test)]
mod test {
    use crate::{BTreeMultiset, BoundType, Entry, SortedMultiset, SortedMultisetRef, ViewError};
    use std::{cmp::Ordering, num::NonZeroUsize, rc::Rc};

    fn entries(view: &SortedMultisetRef<i32>) -> Vec<(i32, usize)> {
        view.entry_iter()
            .map(|entry| (entry.element, entry.count.get()))
            .collect()
    }

    fn example() -> Rc<BTreeMultiset<i32>> {
        BTreeMultiset::from_elements([1, 1, 3, 5, 5, 5])
    }

    #[test]
    fn reversed_iteration() {
        let set = example();
        let descending = set.descending_multiset();
        assert_eq!(entries(&descending), [(5, 3), (3, 1), (1, 2)]);
        assert!(descending.iter().eq([5, 5, 5, 3, 1, 1]));
        assert!(descending.descending_entry_iter().eq(set.entry_iter()));
        assert_eq!(descending.len(), 6);
        assert_eq!(descending.distinct_len(), 3);
        assert_eq!(descending.count(&5), 3);
        assert_eq!(descending.count(&4), 0);
        assert_eq!(format!("{descending:?}"), format!("{:?}", descending.entry_set()));
    }

    #[test]
    fn reversed_comparator() {
        let set = example();
        let descending = set.descending_multiset();
        let comparator = descending.comparator();
        assert_eq!(comparator.compare(&1, &5), Ordering::Greater);
        assert_eq!(comparator, set.comparator().reversed());
        assert_eq!(descending.comparator(), comparator);
    }

    #[test]
    fn double_reversal() {
        let set = example();
        let handle = set.views().handle();
        let descending = set.descending_multiset();
        assert!(Rc::ptr_eq(&descending.descending_multiset(), &handle));
        assert!(Rc::ptr_eq(&set.descending_multiset(), &descending));
        assert_eq!(descending.descending_multiset().comparator(), set.comparator());

        // Same for range views
        let head = set.head_multiset(4, BoundType::Inclusive);
        let reversed_head = head.descending_multiset();
        assert!(Rc::ptr_eq(&reversed_head.descending_multiset(), &head));
        assert_eq!(entries(&reversed_head), [(3, 1), (1, 2)]);
    }

    #[test]
    fn swapped_extrema() {
        let set = example();
        let descending = set.descending_multiset();
        let nonzero = |x| NonZeroUsize::new(x).unwrap();
        assert_eq!(descending.first_entry(), Some(Entry::new(5, nonzero(3))));
        assert_eq!(descending.last_entry(), Some(Entry::new(1, nonzero(2))));

        assert_eq!(descending.poll_first_entry(), Some(Entry::new(5, nonzero(3))));
        assert!(set.iter().eq([1, 1, 3]));
        assert_eq!(descending.poll_last_entry(), Some(Entry::new(1, nonzero(2))));
        assert!(set.iter().eq([3]));
        assert_eq!(descending.poll_last_entry(), Some(Entry::new(3, nonzero(1))));

        assert!(descending.is_empty());
        assert_eq!(descending.first_entry(), None);
        assert_eq!(descending.last_entry(), None);
        assert_eq!(descending.poll_first_entry(), None);
        assert_eq!(descending.poll_last_entry(), None);
    }

    #[test]
    fn swapped_ranges() {
        let set = example();
        let descending = set.descending_multiset();

        assert_eq!(entries(&descending.tail_multiset(3, BoundType::Exclusive)), [(1, 2)]);
        assert_eq!(
            entries(&descending.tail_multiset(3, BoundType::Inclusive)),
            [(3, 1), (1, 2)]
        );
        assert_eq!(entries(&descending.head_multiset(3, BoundType::Exclusive)), [(5, 3)]);
        assert_eq!(
            entries(&descending.head_multiset(3, BoundType::Inclusive)),
            [(5, 3), (3, 1)]
        );

        // Endpoints are given in descending order
        let middle = descending
            .sub_multiset(5, BoundType::Exclusive, 1, BoundType::Inclusive)
            .unwrap();
        assert_eq!(entries(&middle), [(3, 1), (1, 2)]);
        assert_eq!(
            descending
                .sub_multiset(1, BoundType::Inclusive, 5, BoundType::Inclusive)
                .err(),
            Some(ViewError::InvalidRange)
        );

        // Ranges of reversed ranges, which keep their forward range alive
        let inner = middle.head_multiset(1, BoundType::Exclusive);
        drop(middle);
        assert_eq!(entries(&inner), [(3, 1)]);
        let forward = inner.descending_multiset();
        assert_eq!(entries(&forward), [(3, 1)]);
        assert!(Rc::ptr_eq(&inner.descending_multiset(), &forward));
    }

    #[test]
    #[should_panic]
    fn cached_view_outliving_its_multiset() {
        let descending = example().descending_multiset();
        let _ = descending.len();
    }

    #[test]
    fn empty() {
        let set = BTreeMultiset::<i32>::new();
        let descending = set.descending_multiset();
        assert!(descending.is_empty());
        assert_eq!(descending.entry_iter().next(), None);
        assert_eq!(descending.first_entry(), None);
        assert_eq!(descending.poll_last_entry(), None);

        set.insert(2);
        assert_eq!(entries(&descending), [(2, 1)]);
    }
}
