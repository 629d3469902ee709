use crate::graph::types::LocationId;

/// Min-heap entry (wrap in `std::cmp::Reverse`), ordered by cost then location.
///
/// The location tiebreak only keeps `Ord` total; callers must not rely on
/// which of several equal-cost entries pops first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HeapEntry {
    pub cost: u64,
    pub location: LocationId,
}

impl HeapEntry {
    pub fn new(cost: u64, location: LocationId) -> Self {
        Self { cost, location }
    }
}
