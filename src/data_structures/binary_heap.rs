use std::fmt::Debug;

use crate::{Error, Result};

/// Initial capacity used by [`BinaryHeap::new`]
pub const DEFAULT_CAPACITY: usize = 100;

/// A binary minimum-heap that allows duplicate items.
///
/// Positions are addressed as a 1-indexed complete binary tree: the children of
/// position `i` are `2i` and `2i + 1`, and every parent compares less than or
/// equal to both children. Position `i` lives at `items[i - 1]`.
#[derive(Debug, Clone)]
pub struct BinaryHeap<T>
where
    T: Ord + Debug,
{
    items: Vec<T>,
}

impl<T> BinaryHeap<T>
where
    T: Ord + Debug,
{
    /// Creates a new empty heap with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a new empty heap able to hold `capacity` items before growing
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryHeap {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Builds a heap from an arbitrary collection in linear time
    pub fn from_vec(items: Vec<T>) -> Self {
        let mut heap = BinaryHeap { items };
        heap.build_heap();
        heap
    }

    /// Returns true if the heap holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items in the heap
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of items the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Inserts an item, allowing duplicates
    pub fn insert(&mut self, item: T) {
        // Vec doubles its backing storage when full
        self.items.push(item);

        // Percolate up
        let mut hole = self.items.len();
        while hole > 1 && self.items[hole - 1] < self.items[hole / 2 - 1] {
            self.items.swap(hole - 1, hole / 2 - 1);
            hole /= 2;
        }
    }

    /// Returns the smallest item, or `Error::Underflow` if the heap is empty
    pub fn find_min(&self) -> Result<&T> {
        self.items.first().ok_or(Error::Underflow)
    }

    /// Removes and returns the smallest item, or `Error::Underflow` if the heap is empty
    pub fn delete_min(&mut self) -> Result<T> {
        self.pop().ok_or(Error::Underflow)
    }

    /// Removes and returns the smallest item, if any
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }

        // Move the last item into the root and sink it
        let min = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.percolate_down(1);
        }
        Some(min)
    }

    /// Removes all items, keeping the allocated storage
    pub fn make_empty(&mut self) {
        self.items.clear();
    }

    /// Consumes the heap and returns its items in non-decreasing order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Establishes heap order from an arbitrary arrangement of items
    fn build_heap(&mut self) {
        for hole in (1..=self.items.len() / 2).rev() {
            self.percolate_down(hole);
        }
    }

    fn percolate_down(&mut self, mut hole: usize) {
        let size = self.items.len();

        while hole * 2 <= size {
            let mut child = hole * 2;
            if child != size && self.items[child] < self.items[child - 1] {
                child += 1;
            }

            if self.items[child - 1] < self.items[hole - 1] {
                self.items.swap(hole - 1, child - 1);
                hole = child;
            } else {
                break;
            }
        }
    }

    #[cfg(test)]
    fn satisfies_heap_order(&self) -> bool {
        (2..=self.items.len()).all(|i| self.items[i / 2 - 1] <= self.items[i - 1])
    }
}

impl<T> Default for BinaryHeap<T>
where
    T: Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_empty_heap_underflows() {
        let mut heap: BinaryHeap<i32> = BinaryHeap::new();
        assert!(heap.is_empty());
        assert!(matches!(heap.find_min(), Err(Error::Underflow)));
        assert!(matches!(heap.delete_min(), Err(Error::Underflow)));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_heap_order_holds_after_every_operation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut heap = BinaryHeap::with_capacity(4);

        for _ in 0..200 {
            heap.insert(rng.gen_range(0..50));
            assert!(heap.satisfies_heap_order());
        }
        while heap.pop().is_some() {
            assert!(heap.satisfies_heap_order());
        }
    }

    #[test]
    fn test_build_heap() {
        let heap = BinaryHeap::from_vec(vec![9, 4, 7, 1, 8, 2, 2, 6, 3, 5]);
        assert!(heap.satisfies_heap_order());
        assert_eq!(heap.find_min().ok(), Some(&1));
        assert_eq!(heap.into_sorted_vec(), vec![1, 2, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_grows_past_initial_capacity() {
        let mut heap = BinaryHeap::with_capacity(1);
        for value in (0..10).rev() {
            heap.insert(value);
        }
        assert_eq!(heap.len(), 10);
        assert!(heap.capacity() >= 10);
        assert_eq!(heap.find_min().ok(), Some(&0));
    }

    #[test]
    fn test_make_empty() {
        let mut heap = BinaryHeap::from_vec(vec![3, 1, 2]);
        heap.make_empty();
        assert!(heap.is_empty());
        heap.insert(5);
        assert_eq!(heap.delete_min().ok(), Some(5));
    }
}
