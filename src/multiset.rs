//! The sorted multiset contract, and the defaults which derive every view from
//! a handful of primitives

use crate::{
    bound::{BoundType, GeneralRange},
    comparator::Comparator,
    descending::DescendingMultiset,
    element_set::ElementSet,
    entry::{Entry, EntrySet},
    error::ViewError,
    range::RangeMultiset,
};
use std::{
    cell::OnceCell,
    fmt,
    rc::{Rc, Weak},
};

/// Shared handle to a sorted multiset or to one of its views
pub type SortedMultisetRef<E> = Rc<dyn SortedMultiset<E>>;

/// Lazy traversal over the entries of a sorted multiset
///
/// Entry iterators do not borrow the multiset they traverse, so the multiset
/// may be modified while they are alive.
pub type EntryIter<E> = Box<dyn Iterator<Item = Entry<E>>>;

/// A multiset whose distinct elements are totally ordered by a [`Comparator`]
///
/// Implementors only need to provide the following primitives...
///
/// - [`comparator()`](Self::comparator), the order of the elements
/// - [`entry_iter()`](Self::entry_iter), a traversal of the entries in that
///   order
/// - [`take_entry()`](Self::take_entry), the removal hook from which entry
///   polling is derived
/// - [`views()`](Self::views), the storage for the derived views
///
/// ...and get navigation, range views, reversal and element/entry set views
/// for free. Backends that can do better than a linear scan should also
/// override [`entries_in()`](Self::entries_in) and
/// [`entries_in_rev()`](Self::entries_in_rev), from which extremal queries
/// and range views get their entries. With the default implementations,
/// every reverse traversal buffers the entries of its range first, so that
/// [`last_entry()`](Self::last_entry), the `floor()`/`lower()` queries of
/// element sets and the [`first_entry()`](Self::first_entry) of a descending
/// view all take time proportional to the number of entries in range.
///
/// Multisets are always manipulated through an [`Rc`], and operations take
/// `&self` even when they mutate: every view derived from a multiset aliases
/// its storage and observes its current state. Range views keep the multiset
/// they were derived from alive. The views that a multiset caches (its
/// descending view, element set and entry set) are owned by the multiset
/// instead, and must not be used after it is dropped.
///
/// # Examples
///
/// ```
/// use sorted_multiset_views::{BTreeMultiset, BoundType, SortedMultiset};
///
/// let set = BTreeMultiset::from_elements([1, 1, 3, 5, 5, 5]);
///
/// let descending = set.descending_multiset();
/// assert!(descending.iter().eq([5, 5, 5, 3, 1, 1]));
///
/// let head = set.head_multiset(3, BoundType::Exclusive);
/// assert!(head.iter().eq([1, 1]));
///
/// // Views track the multiset they were derived from
/// set.insert(0);
/// assert!(head.iter().eq([0, 1, 1]));
/// assert_eq!(descending.last_entry().map(|entry| entry.element), Some(0));
/// ```
pub trait SortedMultiset<E: Clone + 'static> {
    /// Storage for this multiset's self-handle and cached views
    fn views(&self) -> &ViewCache<E>;

    /// Order of the elements, stable over the lifetime of the multiset
    fn comparator(&self) -> Comparator<E>;

    /// Traverse the entries in the order of [`comparator()`](Self::comparator)
    ///
    /// Every call starts a fresh traversal of the multiset's current state.
    fn entry_iter(&self) -> EntryIter<E>;

    /// Remove every occurence of `element`, returning the removed entry if
    /// `element` was present
    fn take_entry(&self, element: &E) -> Option<Entry<E>>;

    /// Traverse the entries in reverse order
    ///
    /// The default implementation buffers the entries, see
    /// [`entries_in_rev()`](Self::entries_in_rev).
    fn descending_entry_iter(&self) -> EntryIter<E> {
        self.entries_in_rev(&GeneralRange::all())
    }

    /// Traverse the entries that lie within `range`, in order
    ///
    /// The default implementation filters [`entry_iter()`](Self::entry_iter).
    fn entries_in(&self, range: &GeneralRange<E>) -> EntryIter<E> {
        let comparator = self.comparator();
        let low_range = range.clone();
        let low_comparator = comparator.clone();
        let high_range = range.clone();
        Box::new(
            self.entry_iter()
                .skip_while(move |entry| low_range.too_low(&entry.element, &low_comparator))
                .take_while(move |entry| !high_range.too_high(&entry.element, &comparator)),
        )
    }

    /// Traverse the entries that lie within `range`, in reverse order
    ///
    /// The default implementation collects the output of
    /// [`entries_in()`](Self::entries_in) before reversing it.
    fn entries_in_rev(&self, range: &GeneralRange<E>) -> EntryIter<E> {
        let entries = self.entries_in(range).collect::<Vec<_>>();
        Box::new(entries.into_iter().rev())
    }

    /// Smallest entry, if any
    fn first_entry(&self) -> Option<Entry<E>> {
        self.entry_iter().next()
    }

    /// Largest entry, if any
    fn last_entry(&self) -> Option<Entry<E>> {
        self.descending_entry_iter().next()
    }

    /// Remove and return the smallest entry (all occurences of the smallest
    /// element), if any
    fn poll_first_entry(&self) -> Option<Entry<E>> {
        let first = self.first_entry()?;
        self.take_entry(&first.element)
    }

    /// Remove and return the largest entry (all occurences of the largest
    /// element), if any
    fn poll_last_entry(&self) -> Option<Entry<E>> {
        let last = self.last_entry()?;
        self.take_entry(&last.element)
    }

    /// View of the entries ordered before `upper`, or equal to it if
    /// `bound_type` is [`Inclusive`](BoundType::Inclusive)
    fn head_multiset(&self, upper: E, bound_type: BoundType) -> SortedMultisetRef<E> {
        RangeMultiset::new(self.views().handle(), GeneralRange::up_to(upper, bound_type))
    }

    /// View of the entries ordered after `lower`, or equal to it if
    /// `bound_type` is [`Inclusive`](BoundType::Inclusive)
    fn tail_multiset(&self, lower: E, bound_type: BoundType) -> SortedMultisetRef<E> {
        RangeMultiset::new(self.views().handle(), GeneralRange::down_to(lower, bound_type))
    }

    /// View of the entries between `lower` and `upper`
    ///
    /// # Errors
    ///
    /// Fails with [`ViewError::InvalidRange`] if `lower` is ordered after
    /// `upper` by this multiset's comparator.
    fn sub_multiset(
        &self,
        lower: E,
        lower_type: BoundType,
        upper: E,
        upper_type: BoundType,
    ) -> Result<SortedMultisetRef<E>, ViewError> {
        let range = GeneralRange::range(lower, lower_type, upper, upper_type, &self.comparator())?;
        Ok(RangeMultiset::new(self.views().handle(), range))
    }

    /// View of this multiset in reverse order
    ///
    /// The view is built on first request, and every later request returns
    /// that same view. The descending view of a descending view is the
    /// multiset it was derived from.
    ///
    /// # Panics
    ///
    /// The view is owned by this multiset: using it after every handle to
    /// this multiset has been dropped panics.
    fn descending_multiset(&self) -> SortedMultisetRef<E> {
        let views = self.views();
        views
            .descending
            .get_or_init(|| DescendingMultiset::new(views.back_ref()))
            .clone()
    }

    /// Ordered set of the distinct elements, built on first request like
    /// [`descending_multiset()`](Self::descending_multiset)
    fn element_set(&self) -> &ElementSet<E> {
        let views = self.views();
        views
            .element_set
            .get_or_init(|| ElementSet::new(views.back_ref()))
    }

    /// Set of the entries, built on first request like
    /// [`descending_multiset()`](Self::descending_multiset)
    fn entry_set(&self) -> &EntrySet<E> {
        let views = self.views();
        views
            .entry_set
            .get_or_init(|| EntrySet::new(views.back_ref()))
    }

    /// Number of occurences of `element`
    fn count(&self, element: &E) -> usize {
        let comparator = self.comparator();
        self.tail_multiset(element.clone(), BoundType::Inclusive)
            .first_entry()
            .filter(|entry| comparator.compare(&entry.element, element).is_eq())
            .map_or(0, |entry| entry.count.get())
    }

    /// Truth that `element` occurs at least once
    fn contains(&self, element: &E) -> bool {
        self.count(element) > 0
    }

    /// Number of elements, counting every occurence
    fn len(&self) -> usize {
        self.entry_iter().map(|entry| entry.count.get()).sum()
    }

    /// Number of distinct elements
    fn distinct_len(&self) -> usize {
        self.entry_iter().count()
    }

    /// Truth that the multiset holds no element
    fn is_empty(&self) -> bool {
        self.first_entry().is_none()
    }

    /// Iterate over elements in order, yielding each element as many times as
    /// it occurs
    fn iter(&self) -> Box<dyn Iterator<Item = E>> {
        Box::new(
            self.entry_iter()
                .flat_map(|entry| std::iter::repeat_n(entry.element, entry.count.get())),
        )
    }
}

impl<E: Clone + fmt::Debug + 'static> fmt::Debug for dyn SortedMultiset<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entry_iter()).finish()
    }
}

/// Per-multiset storage for the self-handle and the lazily built views
///
/// Every [`SortedMultiset`] implementation owns one of these, built from the
/// weak self-reference provided by [`Rc::new_cyclic()`]:
///
/// ```
/// # use sorted_multiset_views::{
/// #     Comparator, Entry, EntryIter, SortedElementSet, SortedMultiset, ViewCache,
/// # };
/// # use std::rc::{Rc, Weak};
/// struct Nothing {
///     views: ViewCache<u8>,
/// }
///
/// impl Nothing {
///     fn new() -> Rc<Self> {
///         Rc::new_cyclic(|this: &Weak<Self>| Self {
///             views: ViewCache::new(this.clone()),
///         })
///     }
/// }
///
/// impl SortedMultiset<u8> for Nothing {
///     fn views(&self) -> &ViewCache<u8> {
///         &self.views
///     }
///
///     fn comparator(&self) -> Comparator<u8> {
///         Comparator::natural()
///     }
///
///     fn entry_iter(&self) -> EntryIter<u8> {
///         Box::new(std::iter::empty())
///     }
///
///     fn take_entry(&self, _element: &u8) -> Option<Entry<u8>> {
///         None
///     }
/// }
///
/// let nothing = Nothing::new();
/// assert!(nothing.descending_multiset().is_empty());
/// assert!(nothing.element_set().first().is_err());
/// ```
///
/// Each view is built at most once per multiset. The cache owns the views,
/// which only hold a weak back-reference to the multiset, so that no
/// reference cycle is formed.
pub struct ViewCache<E: Clone + 'static> {
    /// Weak reference to the multiset owning this cache
    this: Weak<dyn SortedMultiset<E>>,

    /// Cached descending view
    descending: OnceCell<SortedMultisetRef<E>>,

    /// Cached element set
    element_set: OnceCell<ElementSet<E>>,

    /// Cached entry set
    entry_set: OnceCell<EntrySet<E>>,
}
//
impl<E: Clone + 'static> ViewCache<E> {
    /// Set up the view storage of the multiset that `this` points to
    pub fn new(this: Weak<dyn SortedMultiset<E>>) -> Self {
        Self {
            this,
            descending: OnceCell::new(),
            element_set: OnceCell::new(),
            entry_set: OnceCell::new(),
        }
    }

    /// Strong handle to the multiset owning this cache
    ///
    /// # Panics
    ///
    /// Panics if the owning multiset is not managed by the [`Rc`] that was
    /// used to build this cache, which can only happen if the cache was
    /// handed over to another multiset.
    #[must_use = "Only effect is to produce a result"]
    pub fn handle(&self) -> SortedMultisetRef<E> {
        self.this
            .upgrade()
            .expect("Multisets can only be reached through their Rc")
    }

    /// Non-owning reference to the multiset owning this cache, for the views
    /// that the cache holds
    pub(crate) fn back_ref(&self) -> OwnerRef<E> {
        OwnerRef::Back(self.this.clone())
    }
}

/// Reference from a view to the multiset it was derived from
pub(crate) enum OwnerRef<E: Clone + 'static> {
    /// The view keeps its owner alive
    Strong(SortedMultisetRef<E>),

    /// The view is cached by its owner, which it must not outlive
    Back(Weak<dyn SortedMultiset<E>>),
}
//
impl<E: Clone + 'static> OwnerRef<E> {
    /// Access the owner
    ///
    /// # Panics
    ///
    /// Panics if this is a back-reference and the owner has been dropped.
    pub(crate) fn get(&self) -> SortedMultisetRef<E> {
        match self {
            Self::Strong(owner) => owner.clone(),
            Self::Back(owner) => owner
                .upgrade()
                .expect("Cached views cannot be used after their multiset is dropped"),
        }
    }
}
