use std::cmp::Ordering;

/// Heap priority that is either a finite value or infinity
///
/// `Infinite` compares greater than every `Finite` value and equal to itself, so
/// an unreached vertex can never be confused with a large real distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority<W> {
    Finite(W),
    Infinite,
}

impl<W> Priority<W> {
    /// Returns the finite value, or `None` for infinity
    pub fn finite(self) -> Option<W> {
        match self {
            Priority::Finite(value) => Some(value),
            Priority::Infinite => None,
        }
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Priority::Infinite)
    }
}

impl<W: Ord> PartialOrd for Priority<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Ord> Ord for Priority<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Priority::Finite(a), Priority::Finite(b)) => a.cmp(b),
            (Priority::Finite(_), Priority::Infinite) => Ordering::Less,
            (Priority::Infinite, Priority::Finite(_)) => Ordering::Greater,
            (Priority::Infinite, Priority::Infinite) => Ordering::Equal,
        }
    }
}
