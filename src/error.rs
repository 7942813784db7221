//! Failures reported by multiset views

use derive_more::{Display, Error};

/// Hard failures of view operations
///
/// Expected absences, like asking for the first entry of an empty multiset,
/// are reported as `None` instead.
#[derive(Clone, Copy, Debug, Display, Eq, Error, Hash, PartialEq)]
pub enum ViewError {
    /// A sub-range was requested whose lower bound is ordered after its upper
    /// bound by the comparator of the multiset receiving the request
    #[display("range lower bound is ordered after its upper bound")]
    InvalidRange,

    /// An element set was asked for its first or last element while empty
    #[display("no such element")]
    NoSuchElement,
}
