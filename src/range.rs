//! Range views derived from any sorted multiset

use crate::{
    bound::{BoundType, GeneralRange},
    comparator::Comparator,
    entry::Entry,
    error::ViewError,
    multiset::{EntryIter, SortedMultiset, SortedMultisetRef, ViewCache},
};
use std::rc::{Rc, Weak};

/// View of the entries of a sorted multiset that lie within a range
///
/// Produced by the default [`head_multiset()`](SortedMultiset::head_multiset),
/// [`tail_multiset()`](SortedMultiset::tail_multiset) and
/// [`sub_multiset()`](SortedMultiset::sub_multiset) implementations. Range
/// views of a range view narrow down the range and keep querying the original
/// multiset, so that nesting range views does not stack up indirections.
pub struct RangeMultiset<E: Clone + 'static> {
    /// Multiset that the range applies to
    owner: SortedMultisetRef<E>,

    /// Range of elements that are visible through this view, in the order of
    /// `owner`'s comparator
    range: GeneralRange<E>,

    /// Derived views of this range
    views: ViewCache<E>,
}
//
impl<E: Clone + 'static> RangeMultiset<E> {
    pub(crate) fn new(owner: SortedMultisetRef<E>, range: GeneralRange<E>) -> SortedMultisetRef<E> {
        log::trace!("Building a range view");
        Rc::new_cyclic(|this: &Weak<Self>| Self {
            owner,
            range,
            views: ViewCache::new(this.clone()),
        })
    }

    /// Range view of the owner, restricted to both `self.range` and `range`
    fn restrict(&self, range: &GeneralRange<E>) -> SortedMultisetRef<E> {
        let range = self.range.intersect(range, &self.owner.comparator());
        Self::new(self.owner.clone(), range)
    }
}

impl<E: Clone + 'static> SortedMultiset<E> for RangeMultiset<E> {
    fn views(&self) -> &ViewCache<E> {
        &self.views
    }

    fn comparator(&self) -> Comparator<E> {
        self.owner.comparator()
    }

    fn entry_iter(&self) -> EntryIter<E> {
        self.owner.entries_in(&self.range)
    }

    fn take_entry(&self, element: &E) -> Option<Entry<E>> {
        if self.range.contains(element, &self.owner.comparator()) {
            self.owner.take_entry(element)
        } else {
            None
        }
    }

    fn descending_entry_iter(&self) -> EntryIter<E> {
        self.owner.entries_in_rev(&self.range)
    }

    fn entries_in(&self, range: &GeneralRange<E>) -> EntryIter<E> {
        let range = self.range.intersect(range, &self.owner.comparator());
        self.owner.entries_in(&range)
    }

    fn entries_in_rev(&self, range: &GeneralRange<E>) -> EntryIter<E> {
        let range = self.range.intersect(range, &self.owner.comparator());
        self.owner.entries_in_rev(&range)
    }

    fn head_multiset(&self, upper: E, bound_type: BoundType) -> SortedMultisetRef<E> {
        self.restrict(&GeneralRange::up_to(upper, bound_type))
    }

    fn tail_multiset(&self, lower: E, bound_type: BoundType) -> SortedMultisetRef<E> {
        self.restrict(&GeneralRange::down_to(lower, bound_type))
    }

    fn sub_multiset(
        &self,
        lower: E,
        lower_type: BoundType,
        upper: E,
        upper_type: BoundType,
    ) -> Result<SortedMultisetRef<E>, ViewError> {
        let range =
            GeneralRange::range(lower, lower_type, upper, upper_type, &self.owner.comparator())?;
        Ok(self.restrict(&range))
    }

    fn count(&self, element: &E) -> usize {
        if self.range.contains(element, &self.owner.comparator()) {
            self.owner.count(element)
        } else {
            0
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{BTreeMultiset, BoundType, SortedMultiset, ViewError};

    #[test]
    fn head_and_tail() {
        let set = BTreeMultiset::from_elements([1, 1, 3, 5, 5, 5]);
        let values = |view: &crate::SortedMultisetRef<i32>| view.iter().collect::<Vec<_>>();

        assert_eq!(values(&set.head_multiset(3, BoundType::Exclusive)), [1, 1]);
        assert_eq!(values(&set.head_multiset(3, BoundType::Inclusive)), [1, 1, 3]);
        assert_eq!(values(&set.tail_multiset(3, BoundType::Exclusive)), [5, 5, 5]);
        assert_eq!(values(&set.tail_multiset(3, BoundType::Inclusive)), [3, 5, 5, 5]);
        assert_eq!(values(&set.head_multiset(0, BoundType::Inclusive)), [] as [i32; 0]);
        assert_eq!(values(&set.tail_multiset(6, BoundType::Exclusive)), [] as [i32; 0]);
    }

    #[test]
    fn nested_ranges() {
        let set = BTreeMultiset::from_elements(0..10);
        let middle = set
            .sub_multiset(2, BoundType::Inclusive, 8, BoundType::Exclusive)
            .unwrap();
        assert!(middle.iter().eq(2..8));

        let narrower = middle.tail_multiset(4, BoundType::Exclusive);
        assert!(narrower.iter().eq(5..8));
        let wider = middle.head_multiset(9, BoundType::Inclusive);
        assert!(wider.iter().eq(2..8));

        // Disjoint nested ranges are empty, not invalid
        let disjoint = middle.tail_multiset(9, BoundType::Inclusive);
        assert!(disjoint.is_empty());
        assert_eq!(disjoint.first_entry(), None);
        assert_eq!(disjoint.last_entry(), None);
        assert_eq!(disjoint.poll_first_entry(), None);

        assert_eq!(
            middle
                .sub_multiset(7, BoundType::Inclusive, 3, BoundType::Inclusive)
                .err(),
            Some(ViewError::InvalidRange)
        );
        assert!(
            middle
                .sub_multiset(3, BoundType::Exclusive, 3, BoundType::Exclusive)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn mutation_through_range() {
        let set = BTreeMultiset::from_elements([1, 2, 2, 3, 4]);
        let middle = set
            .sub_multiset(2, BoundType::Inclusive, 3, BoundType::Inclusive)
            .unwrap();

        // Elements outside of the range are invisible, even for removal
        assert_eq!(middle.take_entry(&1), None);
        assert_eq!(middle.count(&1), 0);
        assert_eq!(set.count(&1), 1);

        let polled = middle.poll_first_entry().unwrap();
        assert_eq!((polled.element, polled.count.get()), (2, 2));
        assert!(set.iter().eq([1, 3, 4]));
        assert_eq!(middle.poll_last_entry().map(|entry| entry.element), Some(3));
        assert!(middle.is_empty());
        assert!(set.iter().eq([1, 4]));

        set.insert(2);
        assert_eq!(middle.len(), 1);
        assert!(middle.contains(&2));
    }
}
