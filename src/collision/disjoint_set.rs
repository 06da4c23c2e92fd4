/// Union-find over the indices `0..len` with path compression and union by size.
#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
        }
    }

    /// Resets to `len` singleton sets, reusing the existing allocation.
    pub fn reset(&mut self, len: usize) {
        self.parent.clear();
        self.parent.extend(0..len);
        self.size.clear();
        self.size.resize(len, 1);
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of the set containing `index`.
    pub fn find(&mut self, index: usize) -> usize {
        let mut root = index;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = index;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Joins the sets containing `a` and `b`. Returns `false` if they were
    /// already joined.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let mut root_a = self.find(a);
        let mut root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        if self.size[root_a] < self.size[root_b] {
            std::mem::swap(&mut root_a, &mut root_b);
        }
        self.parent[root_b] = root_a;
        self.size[root_a] += self.size[root_b];
        true
    }

    pub fn set_size(&mut self, index: usize) -> usize {
        let root = self.find(index);
        self.size[root]
    }

    /// Every set with at least `min_size` members, ordered by lowest member
    /// index. Members within a set are in ascending order.
    pub fn groups(&mut self, min_size: usize) -> Vec<Vec<usize>> {
        let mut slot_of_root: Vec<Option<usize>> = vec![None; self.len()];
        let mut groups: Vec<Vec<usize>> = Vec::new();

        for index in 0..self.len() {
            let root = self.find(index);
            if self.size[root] < min_size {
                continue;
            }
            let slot = *slot_of_root[root].get_or_insert_with(|| {
                groups.push(Vec::with_capacity(self.size[root]));
                groups.len() - 1
            });
            groups[slot].push(index);
        }

        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_start_disjoint() {
        let mut sets = DisjointSet::new(4);
        assert_eq!(sets.len(), 4);
        for i in 0..4 {
            assert_eq!(sets.find(i), i);
            assert_eq!(sets.set_size(i), 1);
        }
        assert!(sets.groups(2).is_empty());
    }

    #[test]
    fn union_is_transitive() {
        let mut sets = DisjointSet::new(6);
        assert!(sets.union(0, 3));
        assert!(sets.union(4, 5));
        assert!(sets.union(3, 5));
        assert!(!sets.union(0, 4));

        assert_eq!(sets.find(0), sets.find(5));
        assert_eq!(sets.set_size(4), 4);
        assert_eq!(sets.groups(2), vec![vec![0, 3, 4, 5]]);
    }

    #[test]
    fn groups_are_ordered_by_lowest_member() {
        let mut sets = DisjointSet::new(7);
        sets.union(5, 6);
        sets.union(1, 4);
        sets.union(2, 6);

        assert_eq!(sets.groups(2), vec![vec![1, 4], vec![2, 5, 6]]);
        assert_eq!(sets.groups(1).len(), 4);
    }

    #[test]
    fn reset_clears_previous_unions() {
        let mut sets = DisjointSet::new(3);
        sets.union(0, 1);
        sets.reset(5);
        assert_eq!(sets.len(), 5);
        assert!(sets.groups(2).is_empty());
    }
}
