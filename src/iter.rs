//! Lazy sequence abstraction for vertex and edge listings
//!
//! Graph queries expose their results as an [`Iteration`]: a single-pass,
//! lazily produced sequence wrapping an arbitrary iterator. Callers get plain
//! `Iterator` semantics without the store materializing a container per
//! query. Sequences are finite and restartable in the sense that re-querying
//! the graph yields a fresh `Iteration` reflecting current state; an
//! individual `Iteration` is not snapshot-isolated against later mutation
//! because it borrows the graph for its lifetime.

/// A lazy, single-pass sequence of graph query results
pub struct Iteration<'a, T> {
    inner: Box<dyn Iterator<Item = T> + 'a>,
}

impl<'a, T: 'a> Iteration<'a, T> {
    /// Wrap an iterator in an `Iteration`
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterator<Item = T> + 'a,
    {
        Iteration {
            inner: Box::new(iter),
        }
    }

    /// An empty sequence, used for queries on absent vertices
    pub fn empty() -> Self {
        Iteration {
            inner: Box::new(std::iter::empty()),
        }
    }
}

impl<T> Iterator for Iteration<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that an Iteration yields its source items in order
    #[test]
    fn test_iteration_yields_in_order() {
        let items = vec![3u32, 1, 4, 1, 5];
        let seq = Iteration::new(items.iter().copied());
        assert_eq!(seq.collect::<Vec<_>>(), items);
    }

    /// Test that the empty Iteration yields nothing
    #[test]
    fn test_iteration_empty() {
        let mut seq = Iteration::<u32>::empty();
        assert_eq!(seq.next(), None);
    }

    /// Test that an Iteration is lazy: items are produced on demand
    #[test]
    fn test_iteration_is_lazy() {
        let mut produced = 0u32;
        let counter = std::iter::from_fn(|| {
            produced += 1;
            Some(produced)
        });
        let mut seq = Iteration::new(counter.take(10));
        assert_eq!(seq.next(), Some(1));
        assert_eq!(seq.next(), Some(2));
        drop(seq);
        // Remaining items were never produced
        assert_eq!(produced, 2);
    }
}
