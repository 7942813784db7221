//! Range endpoints and the range algebra that derived views are built upon

use crate::{comparator::Comparator, error::ViewError};
use std::{
    cmp::Ordering,
    ops::{Bound, RangeBounds},
};

/// Whether a range endpoint includes the boundary element itself
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BoundType {
    /// The boundary element belongs to the range (closed endpoint)
    Inclusive,

    /// The boundary element does not belong to the range (open endpoint)
    Exclusive,
}
//
impl BoundType {
    /// Translate the boolean inclusion flag used by ordered-set style APIs
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_multiset_views::BoundType;
    ///
    /// assert_eq!(BoundType::from_inclusive(true), BoundType::Inclusive);
    /// assert_eq!(BoundType::from_inclusive(false), BoundType::Exclusive);
    /// ```
    #[must_use = "Only effect is to produce a result"]
    pub fn from_inclusive(inclusive: bool) -> Self {
        if inclusive {
            Self::Inclusive
        } else {
            Self::Exclusive
        }
    }

    /// Truth that the boundary element is part of the range
    #[must_use = "Only effect is to produce a result"]
    pub fn is_inclusive(self) -> bool {
        self == Self::Inclusive
    }
}

/// One side of a [`GeneralRange`]
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Endpoint<E> {
    /// Boundary element
    pub element: E,

    /// Whether `element` itself is inside of the range
    pub bound_type: BoundType,
}
//
impl<E> Endpoint<E> {
    fn as_bound(&self) -> Bound<&E> {
        match self.bound_type {
            BoundType::Inclusive => Bound::Included(&self.element),
            BoundType::Exclusive => Bound::Excluded(&self.element),
        }
    }
}

/// A possibly unbounded interval of elements
///
/// A `GeneralRange` does not know the order of the elements it bounds: every
/// query which needs to compare elements takes the [`Comparator`] of the
/// multiset which the range applies to. Under a reversed comparator, the
/// "lower" endpoint is the one that holds the largest element in natural
/// order, see [`reverse()`](Self::reverse).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct GeneralRange<E> {
    lower: Option<Endpoint<E>>,
    upper: Option<Endpoint<E>>,
}
//
impl<E> GeneralRange<E> {
    /// Range that contains every element
    #[must_use = "Only effect is to produce a result"]
    pub fn all() -> Self {
        Self {
            lower: None,
            upper: None,
        }
    }

    /// Range of elements ordered before `element`, or equal to it if
    /// `bound_type` is [`Inclusive`](BoundType::Inclusive)
    #[must_use = "Only effect is to produce a result"]
    pub fn up_to(element: E, bound_type: BoundType) -> Self {
        Self {
            lower: None,
            upper: Some(Endpoint {
                element,
                bound_type,
            }),
        }
    }

    /// Range of elements ordered after `element`, or equal to it if
    /// `bound_type` is [`Inclusive`](BoundType::Inclusive)
    #[must_use = "Only effect is to produce a result"]
    pub fn down_to(element: E, bound_type: BoundType) -> Self {
        Self {
            lower: Some(Endpoint {
                element,
                bound_type,
            }),
            upper: None,
        }
    }

    /// Range bounded on both sides
    ///
    /// # Errors
    ///
    /// Fails with [`ViewError::InvalidRange`] if `lower` is ordered after
    /// `upper` by `comparator`. Equal endpoints are accepted, even when one of
    /// them is exclusive, and produce an empty range.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_multiset_views::{BoundType, Comparator, GeneralRange, ViewError};
    ///
    /// let natural = Comparator::<i32>::natural();
    /// let range = GeneralRange::range(1, BoundType::Inclusive, 4, BoundType::Exclusive, &natural)
    ///     .unwrap();
    /// assert!(range.contains(&1, &natural));
    /// assert!(!range.contains(&4, &natural));
    ///
    /// assert_eq!(
    ///     GeneralRange::range(4, BoundType::Inclusive, 1, BoundType::Inclusive, &natural),
    ///     Err(ViewError::InvalidRange)
    /// );
    /// ```
    pub fn range(
        lower: E,
        lower_type: BoundType,
        upper: E,
        upper_type: BoundType,
        comparator: &Comparator<E>,
    ) -> Result<Self, ViewError> {
        if comparator.compare(&lower, &upper) == Ordering::Greater {
            log::debug!("Rejected a range whose lower bound is ordered after its upper bound");
            return Err(ViewError::InvalidRange);
        }
        Ok(Self {
            lower: Some(Endpoint {
                element: lower,
                bound_type: lower_type,
            }),
            upper: Some(Endpoint {
                element: upper,
                bound_type: upper_type,
            }),
        })
    }

    /// Lower endpoint, if any
    #[must_use = "Only effect is to produce a result"]
    pub fn lower(&self) -> Option<&Endpoint<E>> {
        self.lower.as_ref()
    }

    /// Upper endpoint, if any
    #[must_use = "Only effect is to produce a result"]
    pub fn upper(&self) -> Option<&Endpoint<E>> {
        self.upper.as_ref()
    }

    /// The same range expressed for the reverse comparator
    ///
    /// Each endpoint keeps its own bound type, only the roles of the lower and
    /// upper endpoint are exchanged.
    #[must_use = "Only effect is to produce a result"]
    pub fn reverse(self) -> Self {
        Self {
            lower: self.upper,
            upper: self.lower,
        }
    }

    /// Truth that `element` is ordered before the lower endpoint
    #[must_use = "Only effect is to produce a result"]
    pub fn too_low(&self, element: &E, comparator: &Comparator<E>) -> bool {
        let Some(lower) = &self.lower else {
            return false;
        };
        match comparator.compare(element, &lower.element) {
            Ordering::Less => true,
            Ordering::Equal => lower.bound_type == BoundType::Exclusive,
            Ordering::Greater => false,
        }
    }

    /// Truth that `element` is ordered after the upper endpoint
    #[must_use = "Only effect is to produce a result"]
    pub fn too_high(&self, element: &E, comparator: &Comparator<E>) -> bool {
        let Some(upper) = &self.upper else {
            return false;
        };
        match comparator.compare(element, &upper.element) {
            Ordering::Less => false,
            Ordering::Equal => upper.bound_type == BoundType::Exclusive,
            Ordering::Greater => true,
        }
    }

    /// Truth that `element` lies within the range
    #[must_use = "Only effect is to produce a result"]
    pub fn contains(&self, element: &E, comparator: &Comparator<E>) -> bool {
        !self.too_low(element, comparator) && !self.too_high(element, comparator)
    }

    /// Truth that no element can lie within the range
    ///
    /// Ranges built with [`range()`](Self::range) can only be empty when their
    /// endpoints are equal and one of them is exclusive, but intersections of
    /// ranges may also end up with crossed endpoints.
    #[must_use = "Only effect is to produce a result"]
    pub fn is_empty(&self, comparator: &Comparator<E>) -> bool {
        let (Some(lower), Some(upper)) = (&self.lower, &self.upper) else {
            return false;
        };
        match comparator.compare(&lower.element, &upper.element) {
            Ordering::Less => false,
            Ordering::Equal => {
                lower.bound_type == BoundType::Exclusive || upper.bound_type == BoundType::Exclusive
            }
            Ordering::Greater => true,
        }
    }
}

impl<E: Clone> GeneralRange<E> {
    /// Range of elements that lie both within `self` and `other`
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_multiset_views::{BoundType, Comparator, GeneralRange};
    ///
    /// let natural = Comparator::<i32>::natural();
    /// let head = GeneralRange::up_to(5, BoundType::Exclusive);
    /// let tail = GeneralRange::down_to(2, BoundType::Inclusive);
    /// let both = head.intersect(&tail, &natural);
    /// assert!(both.contains(&2, &natural));
    /// assert!(both.contains(&4, &natural));
    /// assert!(!both.contains(&5, &natural));
    /// ```
    #[must_use = "Only effect is to produce a result"]
    pub fn intersect(&self, other: &Self, comparator: &Comparator<E>) -> Self {
        let lower = tighter(&self.lower, &other.lower, |a, b| {
            comparator.compare(&a.element, &b.element)
        });
        let upper = tighter(&self.upper, &other.upper, |a, b| {
            comparator.compare(&b.element, &a.element)
        });
        Self { lower, upper }
    }
}

/// Pick the most restrictive of two optional endpoints, where `order` ranks the
/// most restrictive endpoint as the greatest one
fn tighter<E: Clone>(
    a: &Option<Endpoint<E>>,
    b: &Option<Endpoint<E>>,
    order: impl FnOnce(&Endpoint<E>, &Endpoint<E>) -> Ordering,
) -> Option<Endpoint<E>> {
    match (a, b) {
        (None, None) => None,
        (Some(only), None) | (None, Some(only)) => Some(only.clone()),
        (Some(a), Some(b)) => match order(a, b) {
            Ordering::Greater => Some(a.clone()),
            Ordering::Less => Some(b.clone()),
            // At the same boundary element, an open endpoint excludes more
            Ordering::Equal => {
                if a.bound_type == BoundType::Exclusive {
                    Some(a.clone())
                } else {
                    Some(b.clone())
                }
            }
        },
    }
}

/// Standard library view of the range, which is only meaningful when the range
/// applies to a multiset ordered by `E`'s [`Ord`] implementation.
impl<E> RangeBounds<E> for GeneralRange<E> {
    fn start_bound(&self) -> Bound<&E> {
        self.lower.as_ref().map_or(Bound::Unbounded, Endpoint::as_bound)
    }

    fn end_bound(&self) -> Bound<&E> {
        self.upper.as_ref().map_or(Bound::Unbounded, Endpoint::as_bound)
    }
}
