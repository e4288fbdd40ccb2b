use crate::ClusterError;

/// Disjoint set forest over the elements `0..n`, with union by rank and path compression.
///
/// A fresh instance is created for every pass that needs connectivity information and is
/// dropped once that pass is finished.
///
/// # Examples
/// ```
///use mstcluster::DisjointSet;
///
///let mut set = DisjointSet::new(4);
///assert!(set.union(0, 1).unwrap());
///assert!(!set.union(1, 0).unwrap());
///assert!(set.connected(0, 1).unwrap());
///assert!(!set.connected(0, 2).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSet {
    pub fn new(n_elements: usize) -> Self {
        DisjointSet { parent: (0..n_elements).collect(), rank: vec![0; n_elements] }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of the set containing `n`. Every node visited on the way to
    /// the root is re-pointed directly at the root.
    pub fn find(&mut self, mut n: usize) -> Result<usize, ClusterError> {
        self.check_index(n)?;
        let mut root = n;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[n] != root {
            let next = self.parent[n];
            self.parent[n] = root;
            n = next;
        }
        Ok(root)
    }

    /// Merges the sets containing `m` and `n`. Returns false if they were already one set.
    pub fn union(&mut self, m: usize, n: usize) -> Result<bool, ClusterError> {
        let root_m = self.find(m)?;
        let root_n = self.find(n)?;
        if root_m == root_n {
            return Ok(false);
        }
        if self.rank[root_m] < self.rank[root_n] {
            self.parent[root_m] = root_n;
        } else if self.rank[root_m] > self.rank[root_n] {
            self.parent[root_n] = root_m;
        } else {
            self.parent[root_n] = root_m;
            self.rank[root_m] += 1;
        }
        Ok(true)
    }

    pub fn connected(&mut self, m: usize, n: usize) -> Result<bool, ClusterError> {
        Ok(self.find(m)? == self.find(n)?)
    }

    fn check_index(&self, n: usize) -> Result<(), ClusterError> {
        if n >= self.parent.len() {
            return Err(ClusterError::IndexOutOfBounds(format!(
                "element {n} is outside a disjoint set of {} elements",
                self.parent.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_singletons() {
        let mut set = DisjointSet::new(5);
        for n in 0..5 {
            assert_eq!(n, set.find(n).unwrap());
        }
    }

    #[test]
    fn tied_ranks_attach_second_root_under_first() {
        let mut set = DisjointSet::new(4);
        assert!(set.union(2, 3).unwrap());
        assert_eq!(2, set.find(3).unwrap());
        assert_eq!(1, set.rank[2]);
        // Lower rank root goes under the higher rank one, whichever argument it was
        assert!(set.union(0, 3).unwrap());
        assert_eq!(2, set.find(0).unwrap());
        assert_eq!(1, set.rank[2]);
    }

    #[test]
    fn find_compresses_paths() {
        let mut set = DisjointSet::new(6);
        set.union(0, 1).unwrap();
        set.union(2, 3).unwrap();
        set.union(0, 2).unwrap();
        set.union(4, 5).unwrap();
        set.union(0, 4).unwrap();
        let root = set.find(5).unwrap();
        assert_eq!(root, set.parent[5]);
        assert_eq!(root, set.parent[4]);
    }

    #[test]
    fn union_twice_is_a_no_op() {
        let mut once = DisjointSet::new(4);
        once.union(0, 3).unwrap();
        let mut twice = DisjointSet::new(4);
        twice.union(0, 3).unwrap();
        assert!(!twice.union(0, 3).unwrap());
        for m in 0..4 {
            for n in 0..4 {
                assert_eq!(once.connected(m, n).unwrap(), twice.connected(m, n).unwrap());
            }
        }
    }

    #[test]
    fn out_of_range_index() {
        let mut set = DisjointSet::new(3);
        assert!(matches!(set.find(3), Err(ClusterError::IndexOutOfBounds(..))));
        assert!(matches!(set.union(0, 7), Err(ClusterError::IndexOutOfBounds(..))));
        let mut empty = DisjointSet::new(0);
        assert!(empty.is_empty());
        assert!(matches!(empty.find(0), Err(ClusterError::IndexOutOfBounds(..))));
    }
}
