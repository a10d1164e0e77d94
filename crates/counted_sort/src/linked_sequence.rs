use crate::Stats;

/// Absent relation: the `prev` of the head and the `next` of the tail.
pub const NONE: usize = usize::MAX;

/// Doubly linked chain of `i32` nodes stored in an index arena.
///
/// Nodes are addressed by the `usize` handle returned from [`append`]. A handle
/// stays valid for the lifetime of the sequence; relocation rewires relations
/// and never moves or copies a node's value.
///
/// [`append`]: LinkedSequence::append
#[derive(Clone, Debug)]
pub struct LinkedSequence {
    pub(crate) value: Vec<i32>,
    pub(crate) next: Vec<usize>,
    pub(crate) prev: Vec<usize>,
    pub(crate) head: usize,
    pub(crate) tail: usize,
}

impl Default for LinkedSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkedSequence {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            value: Vec::with_capacity(capacity),
            next: Vec::with_capacity(capacity),
            prev: Vec::with_capacity(capacity),
            head: NONE,
            tail: NONE,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.value.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Handle of the first node, or [`NONE`].
    #[inline]
    pub fn head(&self) -> usize {
        self.head
    }

    /// Handle of the last node, or [`NONE`].
    #[inline]
    pub fn tail(&self) -> usize {
        self.tail
    }

    #[inline]
    pub fn next(&self, node: usize) -> usize {
        self.next[node]
    }

    #[inline]
    pub fn prev(&self, node: usize) -> usize {
        self.prev[node]
    }

    #[inline]
    pub fn value(&self, node: usize) -> i32 {
        self.value[node]
    }

    pub fn append(&mut self, value: i32) -> usize {
        let node = self.value.len();
        self.value.push(value);
        self.next.push(NONE);
        self.prev.push(self.tail);
        if self.tail == NONE {
            self.head = node;
        } else {
            self.next[self.tail] = node;
        }
        self.tail = node;
        node
    }

    /// Appends every element of `data` in order, one move per element.
    pub fn load_from(&mut self, data: &[i32], stats: &mut Stats) {
        self.value.reserve(data.len());
        self.next.reserve(data.len());
        self.prev.reserve(data.len());
        for &x in data {
            self.append(x);
            stats.moves += 1;
        }
    }

    /// Replaces the contents of `out` with the chain's values, head to tail,
    /// one move per element.
    pub fn drain_to(&self, out: &mut Vec<i32>, stats: &mut Stats) {
        out.clear();
        out.reserve(self.len());
        let mut node = self.head;
        while node != NONE {
            out.push(self.value[node]);
            stats.moves += 1;
            node = self.next[node];
        }
        debug_assert_eq!(out.len(), self.len());
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            node: self.head,
        }
    }

    /// Exchanges the chain positions of `a` and `b`.
    ///
    /// Only relations are rewired; head and tail follow the nodes that end up
    /// at the boundaries. Does not count anything.
    pub fn relocate(&mut self, a: usize, b: usize) {
        assert!(
            a < self.len() && b < self.len(),
            "relocate: handle out of range (a={a}, b={b}, len={})",
            self.len()
        );
        if a == b {
            return;
        }
        if self.next[a] == b {
            self.relocate_adjacent(a, b);
            return;
        }
        if self.next[b] == a {
            self.relocate_adjacent(b, a);
            return;
        }

        let a_prev = self.prev[a];
        let a_next = self.next[a];
        let b_prev = self.prev[b];
        let b_next = self.next[b];

        if a_prev == NONE {
            self.head = b;
        } else {
            self.next[a_prev] = b;
        }
        self.prev[b] = a_prev;
        self.next[b] = a_next;
        if a_next != NONE {
            self.prev[a_next] = b;
        }

        if b_prev == NONE {
            self.head = a;
        } else {
            self.next[b_prev] = a;
        }
        self.prev[a] = b_prev;
        self.next[a] = b_next;
        if b_next != NONE {
            self.prev[b_next] = a;
        }

        if self.tail == a {
            self.tail = b;
        } else if self.tail == b {
            self.tail = a;
        }
    }

    // `a` immediately precedes `b`.
    fn relocate_adjacent(&mut self, a: usize, b: usize) {
        let before = self.prev[a];
        let after = self.next[b];

        self.next[a] = after;
        if after != NONE {
            self.prev[after] = a;
        }
        self.prev[b] = before;
        if before == NONE {
            self.head = b;
        } else {
            self.next[before] = b;
        }
        self.next[b] = a;
        self.prev[a] = b;

        if self.tail == b {
            self.tail = a;
        }
    }

    /// Checks the chain invariants: boundary relations are absent, forward
    /// traversal visits every node exactly once ending at the tail, and each
    /// `prev` mirrors the corresponding `next`.
    pub fn check_links(&self) -> bool {
        if self.is_empty() {
            return self.head == NONE && self.tail == NONE;
        }
        if self.head == NONE || self.tail == NONE {
            return false;
        }
        if self.prev[self.head] != NONE || self.next[self.tail] != NONE {
            return false;
        }

        let mut seen = 0usize;
        let mut last = NONE;
        let mut node = self.head;
        while node != NONE {
            if node >= self.len() || seen == self.len() || self.prev[node] != last {
                return false;
            }
            seen += 1;
            last = node;
            node = self.next[node];
        }
        seen == self.len() && last == self.tail
    }
}

pub struct Iter<'a> {
    list: &'a LinkedSequence,
    node: usize,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.node == NONE {
            return None;
        }
        let value = self.list.value[self.node];
        self.node = self.list.next[self.node];
        Some(value)
    }
}
