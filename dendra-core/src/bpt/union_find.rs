//! Union-find (disjoint set union) arena used during BPT construction.
//!
//! The builder processes edges in non-decreasing weight order and merges
//! components, registering a fresh id for every internal tree node it
//! creates. Ids are dense small integers, so the structure is a flat array
//! arena rather than a pointer graph.

#[derive(Clone, Debug)]
pub(super) struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates a forest with singleton classes `0..n` and room for the
    /// internal node ids a full build will register.
    pub(super) fn new(n: usize) -> Self {
        let capacity = n.saturating_mul(2).saturating_sub(1);
        let mut parent = Vec::with_capacity(capacity);
        parent.extend(0..n);
        let mut rank = Vec::with_capacity(capacity);
        rank.resize(n, 0);
        Self { parent, rank }
    }

    /// Registers a new singleton class and returns its id.
    pub(super) fn make_set(&mut self) -> usize {
        let id = self.parent.len();
        self.parent.push(id);
        self.rank.push(0);
        id
    }

    /// Returns the canonical representative of `node`'s class, compressing
    /// the visited path. Calling this with an unregistered id is a
    /// programming error and panics.
    pub(super) fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the classes containing `left` and `right` by rank and returns
    /// the representative of the merged class.
    pub(super) fn union(&mut self, left: usize, right: usize) -> usize {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return left;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        left
    }
}
