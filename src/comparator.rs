//! Shared, reversible total orders over multiset elements

use std::{cmp::Ordering, fmt, rc::Rc};

/// Total order over elements of type `E`, which need not be `E`'s natural
/// order
///
/// A comparator is a cheaply cloneable handle to an ordering function, plus a
/// flag telling whether that function's verdicts are reversed. Two
/// comparators are equal when they share the same ordering function and
/// direction, which makes reversal an involution: `c.reversed().reversed()`
/// is equal to `c` itself, not merely equivalent to it.
///
/// # Examples
///
/// ```
/// use sorted_multiset_views::Comparator;
/// use std::cmp::Ordering;
///
/// let natural = Comparator::<i32>::natural();
/// assert_eq!(natural.compare(&1, &2), Ordering::Less);
///
/// let reversed = natural.reversed();
/// assert_eq!(reversed.compare(&1, &2), Ordering::Greater);
/// assert_eq!(reversed.reversed(), natural);
/// ```
pub struct Comparator<E> {
    order: Rc<dyn Fn(&E, &E) -> Ordering>,
    reversed: bool,
}
//
impl<E> Comparator<E> {
    /// Comparator based on an arbitrary ordering function
    ///
    /// `order` must implement a total order, in the sense of the [`Ord`]
    /// documentation. It is a logic error for its verdicts to change over the
    /// lifetime of the multisets that use it.
    pub fn from_fn(order: impl Fn(&E, &E) -> Ordering + 'static) -> Self {
        Self {
            order: Rc::new(order),
            reversed: false,
        }
    }

    /// Comparator based on `E`'s [`Ord`] implementation
    ///
    /// Every call creates a distinct ordering function, so two natural
    /// comparators do not compare equal unless one is a clone of the other.
    #[must_use = "Only effect is to produce a result"]
    pub fn natural() -> Self
    where
        E: Ord + 'static,
    {
        Self::from_fn(E::cmp)
    }

    /// Compare two elements
    #[inline]
    #[must_use = "Only effect is to produce a result"]
    pub fn compare(&self, left: &E, right: &E) -> Ordering {
        let ordering = (self.order)(left, right);
        if self.reversed {
            ordering.reverse()
        } else {
            ordering
        }
    }

    /// Comparator which orders elements the other way around
    #[must_use = "Only effect is to produce a result"]
    pub fn reversed(&self) -> Self {
        Self {
            order: self.order.clone(),
            reversed: !self.reversed,
        }
    }
}

impl<E> Clone for Comparator<E> {
    fn clone(&self) -> Self {
        Self {
            order: self.order.clone(),
            reversed: self.reversed,
        }
    }
}

impl<E> fmt::Debug for Comparator<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator")
            .field("reversed", &self.reversed)
            .finish_non_exhaustive()
    }
}

impl<E> Eq for Comparator<E> {}

impl<E> PartialEq for Comparator<E> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.order, &other.order) && self.reversed == other.reversed
    }
}
