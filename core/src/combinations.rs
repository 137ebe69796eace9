//! Lazy enumeration of the k-element subsets of a slice.

/// Iterator over every `k`-element subset of a slice, in lexicographic
/// order of the selected indices (the combinatorial "next combination"
/// order). Each subset is yielded as a `Vec` of references preserving
/// the source order of its elements.
///
/// The order is fixed so that tie-breaking among equally scored subsets
/// downstream is deterministic; restarting simply means constructing a
/// fresh iterator. Yields exactly `C(n, k)` subsets: a single empty
/// subset when `k == 0`, and nothing when `k > n`.
#[derive(Clone, Debug)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl<'a, T> Combinations<'a, T> {
    pub fn new(items: &'a [T], k: usize) -> Self {
        Self {
            done: k > items.len(),
            indices: (0..k).collect(),
            started: false,
            items,
        }
    }

    fn snapshot(&self) -> Vec<&'a T> {
        self.indices.iter().map(|&i| &self.items[i]).collect()
    }

    /// Advance `indices` to the next combination; false once exhausted.
    fn advance(&mut self) -> bool {
        let n = self.items.len();
        let k = self.indices.len();
        // Rightmost index that has not yet reached its final position.
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] != i + n - k) else {
            return false;
        };
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}

impl<'a, T> Iterator for Combinations<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.snapshot());
        }
        if self.advance() {
            Some(self.snapshot())
        } else {
            self.done = true;
            None
        }
    }
}
