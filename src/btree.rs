//! Reference sorted multiset, based on a sparse histogram stored in a
//! [`BTreeMap`]

use crate::{
    bound::GeneralRange,
    comparator::Comparator,
    entry::Entry,
    multiset::{EntryIter, SortedMultiset, ViewCache},
};
use std::{
    cell::RefCell,
    collections::btree_map::{BTreeMap, Entry as MapEntry},
    fmt,
    iter::FusedIterator,
    num::NonZeroUsize,
    ops::{Bound, RangeBounds},
    rc::{Rc, Weak},
};

/// Sorted multiset of elements ordered by their [`Ord`] implementation
///
/// Elements are stored as a sparse histogram, i.e. a mapping from distinct
/// values to their multiplicities, which makes order-based queries like
/// getting the minimal element or iterating over a range of values cheap.
///
/// In all the following documentation, we will use the following terminology:
///
/// - "values" refers to a unique value as defined by equality of the
///   [`Eq`] implementation of type `E`
/// - "elements" refers to possibly duplicate occurences of a value within the
///   multiset.
/// - "multiplicity" refers to the number of occurences of a value within the
///   multiset, i.e. the number of elements that are equal to this value.
///
/// A `BTreeMultiset` lives in an [`Rc`], so that the views derived from it via
/// the [`SortedMultiset`] trait can share it. For the same reason, it is
/// modified through shared references. As with [`BTreeMap`], it is a logic
/// error to modify the order of values stored inside of the multiset using
/// internal mutability tricks.
///
/// # Examples
///
/// ```
/// use sorted_multiset_views::{BTreeMultiset, SortedMultiset};
/// use std::num::NonZeroUsize;
///
/// let set = BTreeMultiset::new();
///
/// // Inserting values that do not exist yet is handled much like a standard
/// // library set type, except we return an Option instead of a boolean...
/// assert!(set.insert(123).is_none());
/// assert!(set.insert(456).is_none());
///
/// // ...which allows us to report the number of pre-existing elements, if any
/// assert_eq!(set.insert(123), NonZeroUsize::new(1));
///
/// // Minimal and maximal entries are cheap to query
/// let first = set.first_entry().unwrap();
/// assert_eq!((first.element, first.count.get()), (123, 2));
///
/// for entry in set.entry_iter() {
///     println!("{entry}");
/// }
/// ```
pub struct BTreeMultiset<E: Clone + 'static> {
    /// Storage, shared with the entry iterators
    histogram: Rc<RefCell<Histogram<E>>>,

    /// Natural order of `E`
    comparator: Comparator<E>,

    /// Derived views
    views: ViewCache<E>,
}
//
impl<E: Clone + Ord + 'static> BTreeMultiset<E> {
    /// Makes a new, empty `BTreeMultiset`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_multiset_views::{BTreeMultiset, SortedMultiset};
    ///
    /// let set = BTreeMultiset::<i32>::new();
    /// assert!(set.is_empty());
    /// ```
    #[must_use = "Only effect is to produce a result"]
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|this: &Weak<Self>| Self {
            histogram: Rc::new(RefCell::new(Histogram::default())),
            comparator: Comparator::natural(),
            views: ViewCache::new(this.clone()),
        })
    }

    /// Makes a multiset holding every element of `elements`
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_multiset_views::{BTreeMultiset, SortedMultiset};
    ///
    /// let set = BTreeMultiset::from_elements([3, 1, 2, 2]);
    /// assert!(set.iter().eq([1, 2, 2, 3]));
    /// ```
    #[must_use = "Only effect is to produce a result"]
    pub fn from_elements(elements: impl IntoIterator<Item = E>) -> Rc<Self> {
        let result = Self::new();
        result.extend(elements);
        result
    }

    /// Makes a multiset from entries, or `(value, multiplicity)` pairs
    ///
    /// Multiplicities of repeated values add up.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_multiset_views::{BTreeMultiset, SortedMultiset};
    /// use std::num::NonZeroUsize;
    ///
    /// let nonzero = |x| NonZeroUsize::new(x).unwrap();
    /// let set = BTreeMultiset::from_entries([(2, nonzero(1)), (1, nonzero(2)), (2, nonzero(2))]);
    /// assert!(set.iter().eq([1, 1, 2, 2, 2]));
    /// ```
    #[must_use = "Only effect is to produce a result"]
    pub fn from_entries<I>(entries: I) -> Rc<Self>
    where
        I: IntoIterator,
        I::Item: Into<Entry<E>>,
    {
        let result = Self::new();
        for entry in entries {
            let Entry { element, count } = entry.into();
            result.insert_multiple(element, count);
        }
        result
    }

    /// Insert an element into the multiset, tell how many identical elements
    /// were already present in the multiset before insertion.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_multiset_views::{BTreeMultiset, SortedMultiset};
    /// use std::num::NonZeroUsize;
    ///
    /// let set = BTreeMultiset::new();
    ///
    /// let nonzero = |x| NonZeroUsize::new(x).unwrap();
    /// assert_eq!(set.insert(1), None);
    /// assert_eq!(set.insert(1), Some(nonzero(1)));
    /// assert_eq!(set.insert(1), Some(nonzero(2)));
    /// assert_eq!(set.insert(2), None);
    ///
    /// assert_eq!(set.len(), 4);
    /// assert_eq!(set.distinct_len(), 2);
    /// ```
    #[inline]
    pub fn insert(&self, value: E) -> Option<NonZeroUsize> {
        self.insert_multiple(value, NonZeroUsize::MIN)
    }

    /// Insert multiple copies of a value, tell how many identical elements were
    /// already present in the multiset.
    ///
    /// # Panics
    ///
    /// Panics if the multiplicity of `value` overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_multiset_views::{BTreeMultiset, SortedMultiset};
    /// use std::num::NonZeroUsize;
    ///
    /// let set = BTreeMultiset::new();
    ///
    /// let nonzero = |x| NonZeroUsize::new(x).unwrap();
    /// assert_eq!(set.insert_multiple(1, nonzero(2)), None);
    /// assert_eq!(set.insert_multiple(1, nonzero(3)), Some(nonzero(2)));
    /// assert_eq!(set.insert_multiple(2, nonzero(2)), None);
    ///
    /// assert_eq!(set.len(), 7);
    /// assert_eq!(set.distinct_len(), 2);
    /// ```
    #[inline]
    pub fn insert_multiple(&self, value: E, count: NonZeroUsize) -> Option<NonZeroUsize> {
        self.histogram.borrow_mut().insert_multiple(value, count)
    }

    /// Insert every element of `elements`
    ///
    /// `elements` may iterate over a view of this multiset: storage is only
    /// borrowed while each element is inserted.
    pub fn extend(&self, elements: impl IntoIterator<Item = E>) {
        for element in elements {
            self.insert(element);
        }
    }

    /// Attempt to remove one element from the multiset, on success tell how
    /// many identical elements were previously present in the multiset.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_multiset_views::BTreeMultiset;
    /// use std::num::NonZeroUsize;
    ///
    /// let set = BTreeMultiset::from_elements([1, 1, 2]);
    ///
    /// let nonzero = |x| NonZeroUsize::new(x).unwrap();
    /// assert_eq!(set.remove(&1), Some(nonzero(2)));
    /// assert_eq!(set.remove(&1), Some(nonzero(1)));
    /// assert_eq!(set.remove(&1), None);
    /// assert_eq!(set.remove(&2), Some(nonzero(1)));
    /// assert_eq!(set.remove(&2), None);
    /// ```
    #[inline]
    #[must_use = "Invalid removal should be handled"]
    pub fn remove(&self, value: &E) -> Option<NonZeroUsize> {
        self.histogram.borrow_mut().remove(value)
    }

    /// Attempt to remove all occurences of a value from the multiset, on
    /// success tell how many elements were removed from the multiset.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_multiset_views::BTreeMultiset;
    /// use std::num::NonZeroUsize;
    ///
    /// let set = BTreeMultiset::from_elements([1, 1, 2]);
    ///
    /// let nonzero = |x| NonZeroUsize::new(x).unwrap();
    /// assert_eq!(set.remove_all(&1), Some(nonzero(2)));
    /// assert_eq!(set.remove_all(&1), None);
    /// assert_eq!(set.remove_all(&2), Some(nonzero(1)));
    /// assert_eq!(set.remove_all(&2), None);
    /// ```
    #[inline]
    #[must_use = "Invalid removal should be handled"]
    pub fn remove_all(&self, value: &E) -> Option<NonZeroUsize> {
        self.histogram
            .borrow_mut()
            .remove_entry(value)
            .map(|(_value, count)| count)
    }

    /// Clears the multiset, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_multiset_views::{BTreeMultiset, SortedMultiset};
    ///
    /// let set = BTreeMultiset::from_elements([1, 2, 3]);
    /// let tail = set.descending_multiset();
    /// set.clear();
    /// assert!(set.is_empty());
    /// assert!(tail.is_empty());
    /// ```
    pub fn clear(&self) {
        let mut histogram = self.histogram.borrow_mut();
        histogram.value_to_multiplicity.clear();
        histogram.len = 0;
    }

    /// Lazy traversal of the entries within `range`
    fn cursor(&self, range: &GeneralRange<E>, direction: Direction) -> EntryIter<E> {
        Box::new(Cursor {
            histogram: self.histogram.clone(),
            done: range.is_empty(&self.comparator),
            range: range.clone(),
            position: None,
            direction,
        })
    }
}

impl<E: Clone + Ord + 'static> SortedMultiset<E> for BTreeMultiset<E> {
    fn views(&self) -> &ViewCache<E> {
        &self.views
    }

    fn comparator(&self) -> Comparator<E> {
        self.comparator.clone()
    }

    fn entry_iter(&self) -> EntryIter<E> {
        self.cursor(&GeneralRange::all(), Direction::Ascending)
    }

    fn take_entry(&self, element: &E) -> Option<Entry<E>> {
        self.histogram
            .borrow_mut()
            .remove_entry(element)
            .map(Entry::from)
    }

    fn descending_entry_iter(&self) -> EntryIter<E> {
        self.cursor(&GeneralRange::all(), Direction::Descending)
    }

    fn entries_in(&self, range: &GeneralRange<E>) -> EntryIter<E> {
        self.cursor(range, Direction::Ascending)
    }

    fn entries_in_rev(&self, range: &GeneralRange<E>) -> EntryIter<E> {
        self.cursor(range, Direction::Descending)
    }

    fn first_entry(&self) -> Option<Entry<E>> {
        self.histogram
            .borrow()
            .value_to_multiplicity
            .first_key_value()
            .map(|(value, &count)| Entry::new(value.clone(), count))
    }

    fn last_entry(&self) -> Option<Entry<E>> {
        self.histogram
            .borrow()
            .value_to_multiplicity
            .last_key_value()
            .map(|(value, &count)| Entry::new(value.clone(), count))
    }

    fn poll_first_entry(&self) -> Option<Entry<E>> {
        let mut histogram = self.histogram.borrow_mut();
        let (value, count) = histogram.value_to_multiplicity.pop_first()?;
        histogram.len -= count.get();
        Some(Entry::new(value, count))
    }

    fn poll_last_entry(&self) -> Option<Entry<E>> {
        let mut histogram = self.histogram.borrow_mut();
        let (value, count) = histogram.value_to_multiplicity.pop_last()?;
        histogram.len -= count.get();
        Some(Entry::new(value, count))
    }

    fn count(&self, element: &E) -> usize {
        self.histogram
            .borrow()
            .value_to_multiplicity
            .get(element)
            .map_or(0, |count| count.get())
    }

    fn contains(&self, element: &E) -> bool {
        self.histogram
            .borrow()
            .value_to_multiplicity
            .contains_key(element)
    }

    fn len(&self) -> usize {
        self.histogram.borrow().len
    }

    fn distinct_len(&self) -> usize {
        self.histogram.borrow().value_to_multiplicity.len()
    }

    fn is_empty(&self) -> bool {
        self.histogram.borrow().len == 0
    }
}

impl<E: Clone + fmt::Debug + Ord + 'static> fmt::Debug for BTreeMultiset<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entry_iter()).finish()
    }
}

/// Sparse histogram of values
#[derive(Debug)]
struct Histogram<E> {
    /// Mapping from distinct values to their multiplicities
    value_to_multiplicity: BTreeMap<E, NonZeroUsize>,

    /// Number of elements = sum of all multiplicities
    len: usize,
}
//
impl<E> Default for Histogram<E> {
    fn default() -> Self {
        Self {
            value_to_multiplicity: BTreeMap::new(),
            len: 0,
        }
    }
}
//
impl<E: Ord> Histogram<E> {
    fn insert_multiple(&mut self, value: E, count: NonZeroUsize) -> Option<NonZeroUsize> {
        let result = match self.value_to_multiplicity.entry(value) {
            MapEntry::Vacant(v) => {
                v.insert(count);
                None
            }
            MapEntry::Occupied(mut o) => {
                let old_count = *o.get();
                *o.get_mut() = old_count
                    .checked_add(count.get())
                    .expect("Multiplicity counter has overflown");
                Some(old_count)
            }
        };
        self.len += count.get();
        result
    }

    fn remove(&mut self, value: &E) -> Option<NonZeroUsize> {
        let multiplicity = self.value_to_multiplicity.get_mut(value)?;
        let old_multiplicity = *multiplicity;
        self.len -= 1;
        match NonZeroUsize::new(old_multiplicity.get() - 1) {
            Some(new_multiplicity) => *multiplicity = new_multiplicity,
            None => {
                self.value_to_multiplicity.remove(value);
            }
        }
        Some(old_multiplicity)
    }

    fn remove_entry(&mut self, value: &E) -> Option<(E, NonZeroUsize)> {
        let result = self.value_to_multiplicity.remove_entry(value);
        self.len -= result.as_ref().map_or(0, |(_value, count)| count.get());
        result
    }
}

/// Traversal direction of a [`Cursor`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Direction {
    Ascending,
    Descending,
}

/// Iterator over the entries of a [`BTreeMultiset`] within a range
///
/// The cursor only remembers the last value that it yielded, and looks up the
/// next one in the histogram on every call to `next()`. This lets the
/// multiset be modified while the cursor is alive, at the cost of a
/// logarithmic lookup per entry.
struct Cursor<E> {
    histogram: Rc<RefCell<Histogram<E>>>,
    range: GeneralRange<E>,
    position: Option<E>,
    direction: Direction,
    done: bool,
}
//
impl<E: Clone + Ord> Iterator for Cursor<E> {
    type Item = Entry<E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let histogram = self.histogram.borrow();
        let (start, end) = match (&self.position, self.direction) {
            (None, _) => (self.range.start_bound(), self.range.end_bound()),
            (Some(last), Direction::Ascending) => (Bound::Excluded(last), self.range.end_bound()),
            (Some(last), Direction::Descending) => {
                (self.range.start_bound(), Bound::Excluded(last))
            }
        };
        let mut values = histogram.value_to_multiplicity.range::<E, _>((start, end));
        let next = match self.direction {
            Direction::Ascending => values.next(),
            Direction::Descending => values.next_back(),
        }
        .map(|(value, &count)| Entry::new(value.clone(), count));
        drop(histogram);

        match &next {
            Some(entry) => self.position = Some(entry.element.clone()),
            None => self.done = true,
        }
        next
    }
}
//
impl<E: Clone + Ord> FusedIterator for Cursor<E> {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{BoundType, SortedElementSet};
    use proptest::prelude::*;
    use std::fmt::Debug;

    fn check_equal_iterable<V, It1, It2>(it1: It1, it2: It2)
    where
        It1: IntoIterator<Item = V>,
        It2: IntoIterator<Item = V>,
        V: Debug + PartialEq,
    {
        assert_eq!(
            it1.into_iter().collect::<Vec<_>>(),
            it2.into_iter().collect::<Vec<_>>(),
        );
    }

    fn histogram_of(contents: &[i32]) -> BTreeMap<i32, usize> {
        let mut contents_histogram = BTreeMap::<i32, usize>::new();
        for &value in contents {
            *contents_histogram.entry(value).or_default() += 1;
        }
        contents_histogram
    }

    fn check_any_set(set: &Rc<BTreeMultiset<i32>>, contents: &[i32]) {
        let contents_histogram = histogram_of(contents);

        check_equal_iterable(
            set.entry_iter()
                .map(|entry| (entry.element, entry.count.get())),
            contents_histogram.iter().map(|(&k, &v)| (k, v)),
        );
        check_equal_iterable(
            set.descending_entry_iter()
                .map(|entry| (entry.element, entry.count.get())),
            contents_histogram.iter().rev().map(|(&k, &v)| (k, v)),
        );
        check_equal_iterable(set.entries_in(&GeneralRange::all()), set.entry_iter());
        check_equal_iterable(set.element_set().iter(), contents_histogram.keys().copied());

        assert_eq!(set.len(), contents.len());
        assert_eq!(set.distinct_len(), contents_histogram.len());
        assert_eq!(set.is_empty(), contents.is_empty());

        for (&val, &mul) in &contents_histogram {
            assert!(set.contains(&val));
            assert_eq!(set.count(&val), mul);
        }

        assert_eq!(
            set.first_entry()
                .map(|entry| (entry.element, entry.count.get())),
            contents_histogram.first_key_value().map(|(&k, &v)| (k, v)),
        );
        assert_eq!(
            set.last_entry()
                .map(|entry| (entry.element, entry.count.get())),
            contents_histogram.last_key_value().map(|(&k, &v)| (k, v)),
        );

        let mutable = BTreeMultiset::from_entries(set.entry_iter());
        if let Some(first) = set.first_entry() {
            // Poll all first elements...
            assert_eq!(mutable.poll_first_entry(), Some(first));
            assert_eq!(mutable.len(), set.len() - first.count.get());
            assert_eq!(mutable.distinct_len(), set.distinct_len() - 1);
            assert!(!mutable.contains(&first.element));
            assert_eq!(mutable.count(&first.element), 0);

            // ...then insert them back
            assert_eq!(mutable.insert_multiple(first.element, first.count), None);
            check_equal_iterable(mutable.entry_iter(), set.entry_iter());

            // Same with a single element
            assert_eq!(mutable.remove(&first.element), Some(first.count));
            assert_eq!(mutable.len(), set.len() - 1);
            let new_first_mul = NonZeroUsize::new(first.count.get() - 1);
            assert_eq!(mutable.contains(&first.element), new_first_mul.is_some());
            assert_eq!(mutable.insert(first.element), new_first_mul);
            check_equal_iterable(mutable.entry_iter(), set.entry_iter());

            // If there is a first element, there is a last element, and
            // everything we checked for the first element should also apply
            let last = set.last_entry().unwrap();
            assert_eq!(mutable.poll_last_entry(), Some(last));
            assert_eq!(mutable.len(), set.len() - last.count.get());
            assert_eq!(mutable.distinct_len(), set.distinct_len() - 1);
            assert!(!mutable.contains(&last.element));
            assert_eq!(mutable.insert_multiple(last.element, last.count), None);
            check_equal_iterable(mutable.entry_iter(), set.entry_iter());

            assert_eq!(mutable.remove_all(&last.element), Some(last.count));
            assert_eq!(mutable.len(), set.len() - last.count.get());
            assert_eq!(mutable.take_entry(&last.element), None);
        } else {
            assert!(set.is_empty());
            assert_eq!(mutable.poll_first_entry(), None);
            assert_eq!(mutable.poll_last_entry(), None);
            assert!(mutable.is_empty());
        }

        mutable.clear();
        assert!(mutable.is_empty());
        assert_eq!(mutable.len(), 0);
        assert_eq!(mutable.entry_iter().next(), None);
    }

    #[test]
    fn empty() {
        let set = BTreeMultiset::<i32>::new();
        check_any_set(&set, &[]);
        assert_eq!(set.first_entry(), None);
        assert_eq!(set.last_entry(), None);
        assert_eq!(set.descending_entry_iter().next(), None);
        assert_eq!(format!("{set:?}"), "[]");
    }

    #[test]
    fn mutation_during_iteration() {
        let set = BTreeMultiset::from_elements([1, 2, 3, 4]);
        let mut iter = set.entry_iter();
        assert_eq!(iter.next().map(|entry| entry.element), Some(1));
        assert!(set.remove_all(&2).is_some());
        set.insert(0);
        set.insert(5);
        assert!(iter.map(|entry| entry.element).eq([3, 4, 5]));

        let mut rev = set.descending_entry_iter();
        assert_eq!(rev.next().map(|entry| entry.element), Some(5));
        assert_eq!(set.poll_last_entry().map(|entry| entry.element), Some(5));
        assert_eq!(set.poll_last_entry().map(|entry| entry.element), Some(4));
        assert!(rev.map(|entry| entry.element).eq([3, 1, 0]));
    }

    #[test]
    fn extend_from_own_views() {
        let set = BTreeMultiset::from_elements([1, 2]);
        set.extend(set.descending_multiset().iter());
        assert!(set.iter().eq([1, 1, 2, 2]));

        set.extend(set.head_multiset(2, BoundType::Exclusive).iter());
        check_equal_iterable(
            set.entry_iter().map(|entry| (entry.element, entry.count.get())),
            [(1, 4), (2, 2)],
        );
    }

    #[test]
    fn overflow_free_removal() {
        let set = BTreeMultiset::from_elements([7]);
        assert_eq!(set.remove(&7), NonZeroUsize::new(1));
        assert_eq!(set.remove(&7), None);
        assert!(set.is_empty());
        assert!(!set.element_set().contains(&7));
    }

    proptest! {
        #[test]
        fn single(contents in any::<Vec<i32>>()) {
            let set = BTreeMultiset::from_elements(contents.iter().copied());
            check_any_set(&set, &contents);
        }
    }

    fn bound_type() -> impl Strategy<Value = BoundType> {
        any::<bool>().prop_map(BoundType::from_inclusive)
    }

    fn contents_and_bounds() -> impl Strategy<Value = (Vec<i8>, i8, BoundType, i8, BoundType)> {
        (
            any::<Vec<i8>>(),
            any::<i8>(),
            bound_type(),
            any::<i8>(),
            bound_type(),
        )
    }

    fn std_bound(value: i8, bound_type: BoundType) -> Bound<i8> {
        if bound_type.is_inclusive() {
            Bound::Included(value)
        } else {
            Bound::Excluded(value)
        }
    }

    proptest! {
        #[test]
        fn ranges((contents, lo, lo_type, hi, hi_type) in contents_and_bounds()) {
            let set = BTreeMultiset::from_elements(contents.iter().copied());
            let mut model = BTreeMap::<i8, usize>::new();
            for &value in &contents {
                *model.entry(value).or_default() += 1;
            }
            let as_pairs = |entries: EntryIter<i8>| {
                entries
                    .map(|entry| (entry.element, entry.count.get()))
                    .collect::<Vec<_>>()
            };
            let model_range = |start: Bound<i8>, end: Bound<i8>| {
                model
                    .range((start, end))
                    .map(|(&k, &v)| (k, v))
                    .collect::<Vec<_>>()
            };

            let head = set.head_multiset(hi, hi_type);
            assert_eq!(as_pairs(head.entry_iter()), model_range(Bound::Unbounded, std_bound(hi, hi_type)));
            let tail = set.tail_multiset(lo, lo_type);
            assert_eq!(as_pairs(tail.entry_iter()), model_range(std_bound(lo, lo_type), Bound::Unbounded));

            match set.sub_multiset(lo, lo_type, hi, hi_type) {
                Ok(sub) => {
                    assert!(lo <= hi);
                    let expected = if lo == hi
                        && (lo_type == BoundType::Exclusive || hi_type == BoundType::Exclusive)
                    {
                        Vec::new()
                    } else {
                        model_range(std_bound(lo, lo_type), std_bound(hi, hi_type))
                    };
                    assert_eq!(as_pairs(sub.entry_iter()), expected);
                    let mut reversed = expected.clone();
                    reversed.reverse();
                    assert_eq!(as_pairs(sub.descending_entry_iter()), reversed);
                    assert_eq!(
                        sub.first_entry().map(|entry| (entry.element, entry.count.get())),
                        expected.first().copied()
                    );
                    assert_eq!(
                        sub.last_entry().map(|entry| (entry.element, entry.count.get())),
                        expected.last().copied()
                    );
                    assert_eq!(sub.distinct_len(), expected.len());

                    // Nesting a head in a tail is the same as a sub-range
                    let nested = tail.head_multiset(hi, hi_type);
                    assert_eq!(as_pairs(nested.entry_iter()), expected);
                }
                Err(_) => assert!(lo > hi),
            }
        }
    }
}
