pub mod indexed_min_heap;
pub mod priority;

pub use indexed_min_heap::{HeapEntry, IndexedMinHeap};
pub use priority::Priority;
