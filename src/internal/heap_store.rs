use std::cmp::Ordering;

/// A binary max-heap over a `Vec`.
///
/// The store does not own a comparator. Every operation that moves elements
/// takes it as an argument so the queue can share one comparator between
/// several stores. Callers must pass the same comparator on every call.
#[derive(Clone)]
pub struct HeapStore<T> {
    elements: Vec<T>,
}

impl<T> HeapStore<T> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Builds the heap bottom-up in O(n).
    pub fn from_vec<C>(elements: Vec<T>, compare: &C) -> Self
    where
        C: Fn(&T, &T) -> Ordering,
    {
        let mut store = Self { elements };
        let len = store.elements.len();
        for indx in (0..len / 2).rev() {
            store.sift_down(indx, len, compare);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    pub fn push<C>(&mut self, elem: T, compare: &C)
    where
        C: Fn(&T, &T) -> Ordering,
    {
        self.elements.push(elem);
        self.sift_up(self.elements.len() - 1, compare);
    }

    pub fn pop<C>(&mut self, compare: &C) -> Option<T>
    where
        C: Fn(&T, &T) -> Ordering,
    {
        let last = self.elements.len().checked_sub(1)?;
        self.elements.swap(0, last);
        let top = self.elements.pop();
        if !self.elements.is_empty() {
            self.sift_down(0, self.elements.len(), compare);
        }
        top
    }

    /// Moves the element at `indx` towards the root while it does not rank below its parent.
    fn sift_up<C>(&mut self, mut indx: usize, compare: &C)
    where
        C: Fn(&T, &T) -> Ordering,
    {
        while indx > 0 {
            let parent = (indx - 1) / 2;
            if compare(&self.elements[indx], &self.elements[parent]) == Ordering::Less {
                break;
            }
            self.elements.swap(parent, indx);
            indx = parent;
        }
    }

    /// Moves the element at `indx` down until it is the largest of its subtree.
    /// Only the first `size` elements are treated as part of the heap.
    fn sift_down<C>(&mut self, mut indx: usize, size: usize, compare: &C)
    where
        C: Fn(&T, &T) -> Ordering,
    {
        loop {
            let mut largest = indx;
            let left = 2 * indx + 1;
            let right = 2 * indx + 2;

            if left < size && compare(&self.elements[left], &self.elements[largest]) == Ordering::Greater {
                largest = left;
            }
            if right < size && compare(&self.elements[right], &self.elements[largest]) == Ordering::Greater {
                largest = right;
            }
            if largest == indx {
                break;
            }

            self.elements.swap(largest, indx);
            indx = largest;
        }
    }

    /// Checks the max-heap invariant for every parent/child pair.
    #[cfg(test)]
    pub fn is_heap<C>(&self, compare: &C) -> bool
    where
        C: Fn(&T, &T) -> Ordering,
    {
        (1..self.elements.len())
            .all(|child| compare(&self.elements[(child - 1) / 2], &self.elements[child]) != Ordering::Less)
    }
}
