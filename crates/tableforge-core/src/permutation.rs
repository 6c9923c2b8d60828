//! Lazy permutation generators.
//!
//! [`Permutations`] walks every ordering of a finite sequence by advancing a
//! cursor of positions in lexicographic order, which is the same order as
//! "pick each remaining element as the head, then permute the rest".
//! [`CircularPermutations`] pins the first element so that rotations of the
//! same circular table are produced only once.
//!
//! # Example
//!
//! ```
//! use tableforge_core::permutation::{circular_permutations, permutations};
//!
//! assert_eq!(permutations(vec![1, 2, 3]).count(), 6);
//!
//! let tables: Vec<Vec<char>> = circular_permutations(vec!['a', 'b', 'c', 'd']).collect();
//! assert_eq!(tables.len(), 6);
//! assert!(tables.iter().all(|t| t[0] == 'a'));
//! ```

use std::iter::FusedIterator;

/// Returns `n!`, or `None` if it does not fit in a `usize`.
pub fn factorial(n: usize) -> Option<usize> {
    (1..=n).try_fold(1usize, |acc, k| acc.checked_mul(k))
}

/// Creates an iterator over every ordering of `items`.
///
/// An empty input yields exactly one empty ordering.
pub fn permutations<T: Clone>(items: impl IntoIterator<Item = T>) -> Permutations<T> {
    Permutations::new(items.into_iter().collect())
}

/// Creates an iterator over every circular ordering of `items`.
///
/// The first element of `items` is the first element of every ordering; the
/// remaining elements are permuted. An empty input yields nothing.
pub fn circular_permutations<T: Clone>(
    items: impl IntoIterator<Item = T>,
) -> CircularPermutations<T> {
    let mut items = items.into_iter();
    let head = items.next();
    CircularPermutations {
        head,
        rest: permutations(items),
    }
}

/// Iterator over all `N!` orderings of a sequence.
///
/// Produced by [`permutations`].
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    items: Vec<T>,
    cursor: Vec<usize>,
    remaining: Option<usize>,
    exhausted: bool,
}

impl<T> Permutations<T> {
    fn new(items: Vec<T>) -> Self {
        let cursor = (0..items.len()).collect();
        let remaining = factorial(items.len());
        Self {
            items,
            cursor,
            remaining,
            exhausted: false,
        }
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let ordering = self
            .cursor
            .iter()
            .map(|&position| self.items[position].clone())
            .collect();

        self.exhausted = !advance(&mut self.cursor);
        self.remaining = self.remaining.map(|r| r.saturating_sub(1));
        Some(ordering)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        match self.remaining {
            Some(r) => (r, Some(r)),
            None => (usize::MAX, None),
        }
    }
}

impl<T: Clone> FusedIterator for Permutations<T> {}

/// Iterator over the `(N-1)!` circular orderings of a sequence.
///
/// Produced by [`circular_permutations`].
#[derive(Debug, Clone)]
pub struct CircularPermutations<T> {
    head: Option<T>,
    rest: Permutations<T>,
}

impl<T: Clone> Iterator for CircularPermutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let head = self.head.as_ref()?;
        let tail = self.rest.next()?;

        let mut ordering = Vec::with_capacity(tail.len() + 1);
        ordering.push(head.clone());
        ordering.extend(tail);
        Some(ordering)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.head.is_none() {
            return (0, Some(0));
        }
        self.rest.size_hint()
    }
}

impl<T: Clone> FusedIterator for CircularPermutations<T> {}

/// Moves the cursor to the next lexicographic arrangement of positions.
///
/// Returns `false` once the cursor holds the last arrangement.
fn advance(cursor: &mut [usize]) -> bool {
    let len = cursor.len();
    if len < 2 {
        return false;
    }

    // Longest non-increasing suffix starts at `pivot`.
    let mut pivot = len - 1;
    while pivot > 0 && cursor[pivot - 1] >= cursor[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        return false;
    }

    let mut successor = len - 1;
    while cursor[successor] <= cursor[pivot - 1] {
        successor -= 1;
    }
    cursor.swap(pivot - 1, successor);
    cursor[pivot..].reverse();
    true
}
