//! Utility containers shared by the storage engines and the algorithm
//! strategies: an ordered map/set (re-exported from `indexmap`, which keeps
//! insertion order, so iterating a graph's vertices or edges always visits
//! them in the order they were added), a min/max-scored wrapper for use with
//! `BinaryHeap`, and a union–find (disjoint-set) structure for Kruskal/Borůvka
//! and connected-components.

use std::cmp::Ordering;

/// Insertion-ordered map. Re-exported so the rest of the crate has one name
/// for "the ordered map" regardless of which crate backs it.
pub type OrderedMap<K, V> = indexmap::IndexMap<K, V>;

/// Insertion-ordered set.
pub type OrderedSet<K> = indexmap::IndexSet<K>;

/// Wraps a score and a value for use with `std::collections::BinaryHeap`,
/// which is a max-heap; `MinScored` reverses the comparison so the heap
/// pops the *smallest* score first. Used by Dijkstra/A*/Prim, whose
/// frontiers are priority queues ordered by ascending tentative cost.
///
/// `NaN` scores sort as greater than everything (including other `NaN`s),
/// so they end up at the back of the heap instead of causing a panic.
#[derive(Copy, Clone, Debug)]
pub struct MinScored<K, T>(pub K, pub T);

impl<K: PartialEq, T> PartialEq for MinScored<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<K: PartialEq, T> Eq for MinScored<K, T> {}

impl<K: PartialOrd, T> PartialOrd for MinScored<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: PartialOrd, T> Ord for MinScored<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        let a = &self.0;
        let b = &other.0;
        if a == b {
            Ordering::Equal
        } else if a < b {
            Ordering::Greater
        } else if a > b {
            Ordering::Less
        } else if a != a && b != b {
            // Both NaN.
            Ordering::Equal
        } else if a != a {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

/// Reverse of `MinScored`: a `BinaryHeap<MaxScored<K, T>>` pops the
/// *largest* score first. Used by the DSatur coloring strategy, whose
/// frontier is ordered by descending saturation degree.
#[derive(Copy, Clone, Debug)]
pub struct MaxScored<K, T>(pub K, pub T);

impl<K: PartialEq, T> PartialEq for MaxScored<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<K: PartialEq, T> Eq for MaxScored<K, T> {}

impl<K: PartialOrd, T> PartialOrd for MaxScored<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: PartialOrd, T> Ord for MaxScored<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        MinScored(other.0, ()).cmp(&MinScored(self.0, ())).reverse()
    }
}

/// A disjoint-set ("union–find") structure over the dense integer universe
/// `0..n`. Used by Kruskal's MST and by connected-components.
///
/// Union by rank with path compression: both `find` and `union` are
/// amortized nearly-O(1) (inverse-Ackermann).
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<u32>,
    rank: Vec<u8>,
}

impl UnionFind {
    /// Create a new `UnionFind` of `n` elements, each its own singleton set.
    pub fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n as u32).collect(),
            rank: vec![0; n],
        }
    }

    /// Return the representative of the set containing `x`, compressing the
    /// path from `x` to the root as it goes.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] as usize != root {
            root = self.parent[root] as usize;
        }
        let mut cur = x;
        while self.parent[cur] as usize != root {
            let next = self.parent[cur] as usize;
            self.parent[cur] = root as u32;
            cur = next;
        }
        root
    }

    /// Return `true` if `x` and `y` are already in the same set.
    pub fn equiv(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Merge the sets containing `x` and `y`. Returns `false` (a no-op) if
    /// they were already in the same set, `true` if a merge happened.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let xr = self.find(x);
        let yr = self.find(y);
        if xr == yr {
            return false;
        }
        match self.rank[xr].cmp(&self.rank[yr]) {
            Ordering::Less => self.parent[xr] = yr as u32,
            Ordering::Greater => self.parent[yr] = xr as u32,
            Ordering::Equal => {
                self.parent[yr] = xr as u32;
                self.rank[xr] += 1;
            }
        }
        true
    }

    /// Number of distinct sets remaining.
    pub fn num_sets(&mut self) -> usize {
        let n = self.parent.len();
        let mut seen = vec![false; n];
        let mut count = 0;
        for i in 0..n {
            let root = self.find(i);
            if !seen[root] {
                seen[root] = true;
                count += 1;
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn min_scored_heap_pops_smallest_first() {
        let mut heap = BinaryHeap::new();
        heap.push(MinScored(5, "five"));
        heap.push(MinScored(1, "one"));
        heap.push(MinScored(3, "three"));
        assert_eq!(heap.pop().unwrap().1, "one");
        assert_eq!(heap.pop().unwrap().1, "three");
        assert_eq!(heap.pop().unwrap().1, "five");
    }

    #[test]
    fn max_scored_heap_pops_largest_first() {
        let mut heap = BinaryHeap::new();
        heap.push(MaxScored(5, "five"));
        heap.push(MaxScored(1, "one"));
        heap.push(MaxScored(3, "three"));
        assert_eq!(heap.pop().unwrap().1, "five");
        assert_eq!(heap.pop().unwrap().1, "three");
        assert_eq!(heap.pop().unwrap().1, "one");
    }

    #[test]
    fn union_find_merges_and_separates() {
        let mut uf = UnionFind::new(5);
        assert!(!uf.equiv(0, 1));
        uf.union(0, 1);
        uf.union(1, 2);
        assert!(uf.equiv(0, 2));
        assert!(!uf.equiv(0, 3));
        assert_eq!(uf.num_sets(), 3);
    }
}
