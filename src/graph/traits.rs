use std::fmt::Debug;
use num_traits::Zero;
use ordered_float::OrderedFloat;

/// Numeric edge weight usable as a heap priority
///
/// Weights must be totally ordered so that heap comparisons are well defined.
/// Floating point weights go through `OrderedFloat`.
pub trait Weight: Copy + Ord + Debug + Zero {
    /// Adds two weights, returning `None` if the sum is not representable
    fn checked_sum(self, other: Self) -> Option<Self>;

    /// Subtracts `other`, returning `None` if the difference is not representable
    fn checked_difference(self, other: Self) -> Option<Self>;
}

macro_rules! impl_weight_for_int {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }

                fn checked_difference(self, other: Self) -> Option<Self> {
                    self.checked_sub(other)
                }
            }
        )*
    };
}

impl_weight_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_weight_for_float {
    ($($t:ty),*) => {
        $(
            impl Weight for OrderedFloat<$t> {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    if sum.0.is_finite() {
                        Some(sum)
                    } else {
                        None
                    }
                }

                fn checked_difference(self, other: Self) -> Option<Self> {
                    let difference = self - other;
                    if difference.0.is_finite() {
                        Some(difference)
                    } else {
                        None
                    }
                }
            }
        )*
    };
}

impl_weight_for_float!(f32, f64);

/// Read-only query contract of a weighted undirected graph
///
/// Vertices are identified by the dense range `0..vertex_count()`. The neighbour
/// sequence of a vertex must not change while an algorithm runs over the graph.
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns an iterator over `(neighbor, weight)` pairs of a vertex
    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true iff `0 <= vertex < vertex_count()`
    fn is_valid_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }
}

/// Trait for building a graph before handing it to an algorithm
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Adds an undirected edge between two vertices with the given weight.
    /// Returns false if either endpoint is invalid.
    fn add_edge(&mut self, u: usize, v: usize, weight: W) -> bool;

    /// Removes every edge between two vertices
    fn remove_edge(&mut self, u: usize, v: usize) -> bool;
}
