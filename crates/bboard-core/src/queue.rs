//! Fixed-capacity circular queue.
//!
//! [`FixedQueue`] backs both the bomb and the flame lifecycle. Storage is an
//! inline array, so the queue is `Copy` whenever its elements are and a
//! board state can be duplicated with a plain memcpy.

use std::fmt;
use std::ops::{Index, IndexMut};

/// A fixed-capacity ring buffer with O(1) push / pop-front and O(n)
/// removal at an arbitrary logical index.
///
/// Logical index 0 is the front (oldest element). Elements keep their
/// insertion order; nothing else about them is assumed.
///
/// Pushing into a full queue and removing past the end are caller bugs.
/// They trip a debug assertion and are ignored in release builds.
#[derive(Clone, Copy)]
pub struct FixedQueue<T, const N: usize> {
    queue: [T; N],
    index: usize,
    count: usize,
}

impl<T: Copy + Default, const N: usize> FixedQueue<T, N> {
    /// Create an empty queue.
    pub fn new() -> Self {
        const { assert!(N > 0, "FixedQueue capacity must be non-zero") };
        Self {
            queue: [T::default(); N],
            index: 0,
            count: 0,
        }
    }

    /// Append an element at the back.
    ///
    /// Precondition: the queue is not full.
    #[inline]
    pub fn push(&mut self, elem: T) {
        debug_assert!(self.count < N, "FixedQueue overflow (capacity {N})");
        if self.count == N {
            return;
        }
        self.queue[(self.index + self.count) % N] = elem;
        self.count += 1;
    }

    /// Remove and return the front element, or `None` if empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        let elem = self.queue[self.index];
        self.index = (self.index + 1) % N;
        self.count -= 1;
        Some(elem)
    }

    /// Remove the element at logical index `at`, shifting every later
    /// element one slot towards the front.
    ///
    /// Precondition: `at < len()`. Costs O(len - at).
    pub fn remove_at(&mut self, at: usize) {
        debug_assert!(at < self.count, "remove_at({at}) on queue of length {}", self.count);
        if at >= self.count {
            return;
        }
        if at == 0 {
            self.index = (self.index + 1) % N;
            self.count -= 1;
            return;
        }
        for i in at + 1..self.count {
            let src = (self.index + i) % N;
            let dst = (self.index + i - 1) % N;
            self.queue[dst] = self.queue[src];
        }
        self.count -= 1;
    }

    /// Remove every element.
    #[inline]
    pub fn clear(&mut self) {
        self.index = 0;
        self.count = 0;
    }
}

impl<T, const N: usize> FixedQueue<T, N> {
    /// Number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether the queue is at capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == N
    }

    /// The fixed capacity `N`.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Free slots left.
    #[inline]
    pub fn remaining_capacity(&self) -> usize {
        N - self.count
    }

    /// The element at logical index `i`, if any.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        (i < self.count).then(|| &self.queue[(self.index + i) % N])
    }

    /// Mutable access to the element at logical index `i`, if any.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        if i < self.count {
            Some(&mut self.queue[(self.index + i) % N])
        } else {
            None
        }
    }

    /// The front element, if any.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Iterate from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.count).map(move |i| &self.queue[(self.index + i) % N])
    }
}

impl<T: Copy + Default, const N: usize> Default for FixedQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Index<usize> for FixedQueue<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        debug_assert!(i < self.count, "index {i} out of range for length {}", self.count);
        &self.queue[(self.index + i) % N]
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedQueue<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        debug_assert!(i < self.count, "index {i} out of range for length {}", self.count);
        &mut self.queue[(self.index + i) % N]
    }
}

// Two queues are equal when they hold the same elements in the same
// logical order, regardless of where the ring currently starts.
impl<T: PartialEq, const N: usize> PartialEq for FixedQueue<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq, const N: usize> Eq for FixedQueue<T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedQueue<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
