use crate::{Error, Result};

/// Disjoint sets with union by height and path compression.
///
/// Elements are numbered from 0.
#[derive(Debug, Clone)]
pub struct DisjointSets {
    /// Parent of each element; roots point at themselves
    parent: Vec<usize>,

    /// Upper bound on the height of each root's tree
    rank: Vec<u32>,

    /// Number of disjoint sets remaining
    set_count: usize,
}

impl DisjointSets {
    /// Creates `elements` singleton sets
    pub fn new(elements: usize) -> Self {
        DisjointSets {
            parent: (0..elements).collect(),
            rank: vec![0; elements],
            set_count: elements,
        }
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if there are no elements
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets remaining
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// Returns the root of the set containing `x`, compressing the path to it
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.check(x)?;

        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        Ok(root)
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns false if they were already in the same set.
    pub fn union(&mut self, a: usize, b: usize) -> Result<bool> {
        let root1 = self.find(a)?;
        let root2 = self.find(b)?;

        if root1 == root2 {
            return Ok(false);
        }

        if self.rank[root2] > self.rank[root1] {
            self.parent[root1] = root2;
        } else {
            if self.rank[root1] == self.rank[root2] {
                self.rank[root1] += 1;
            }
            self.parent[root2] = root1;
        }

        self.set_count -= 1;
        Ok(true)
    }

    fn check(&self, id: usize) -> Result<()> {
        if id >= self.parent.len() {
            return Err(Error::InvalidSet {
                id,
                set_count: self.parent.len(),
            });
        }
        Ok(())
    }
}
