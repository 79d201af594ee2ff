// ============================================================
// Layer 4 — Shuffle Buffer and Batch Grouping
// ============================================================
// Two lazy iterator adapters that sit between the dataset and
// the tensor batcher:
//
//   dataset.iter()
//       │
//       ▼
//   ShuffleBuffer   → windowed shuffle (holds at most N items)
//       │
//       ▼
//   Batches         → groups of `batch_size`, last one may be short
//
// Why a windowed shuffle instead of shuffling the whole Vec?
//   It keeps the stream lazy: only `buffer_size` reviews are
//   held at once. The trade-off is that an item can only move
//   forward by roughly the buffer size, so the order is
//   randomised locally rather than globally. With the aclImdb
//   interleave (pos, neg, pos, neg, ...) a 1000-item window
//   is plenty to mix labels inside every batch.
//
// Reference: Rust Book §13 (Iterators)
//            rand crate documentation

use rand::Rng;

/// Windowed shuffle over any iterator.
///
/// Fills a buffer with up to `buffer_size` items, then repeatedly
/// emits a uniformly chosen buffered item and refills from the
/// source. Every source item is emitted exactly once.
pub struct ShuffleBuffer<I: Iterator, R> {
    source:   I,
    buffer:   Vec<I::Item>,
    capacity: usize,
    rng:      R,
}

impl<I: Iterator, R: Rng> ShuffleBuffer<I, R> {
    /// A `buffer_size` of 0 or 1 passes items through unchanged.
    pub fn new(source: I, buffer_size: usize, rng: R) -> Self {
        let capacity = buffer_size.max(1);
        Self {
            source,
            buffer: Vec::with_capacity(capacity),
            capacity,
            rng,
        }
    }
}

impl<I: Iterator, R: Rng> Iterator for ShuffleBuffer<I, R> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while self.buffer.len() < self.capacity {
            match self.source.next() {
                Some(item) => self.buffer.push(item),
                None => break,
            }
        }

        if self.buffer.is_empty() {
            return None;
        }

        let index = self.rng.gen_range(0..self.buffer.len());
        Some(self.buffer.swap_remove(index))
    }
}

/// Groups a stream into `Vec`s of `batch_size` items.
pub struct Batches<I> {
    source:     I,
    batch_size: usize,
}

impl<I: Iterator> Batches<I> {
    /// # Panics
    /// Panics if `batch_size` is 0, which would yield no batches at all.
    pub fn new(source: I, batch_size: usize) -> Self {
        assert!(batch_size > 0, "batch_size must be at least 1");
        Self { source, batch_size }
    }
}

impl<I: Iterator> Iterator for Batches<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let batch: Vec<I::Item> = self.source.by_ref().take(self.batch_size).collect();
        if batch.is_empty() {
            None
        } else {
            Some(batch)
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_every_item_emitted_once() {
        let rng         = StdRng::seed_from_u64(7);
        let mut out: Vec<usize> = ShuffleBuffer::new(0..500, 64, rng).collect();
        out.sort_unstable();
        assert_eq!(out, (0..500).collect::<Vec<_>>());
    }

    #[test]
    fn test_buffer_of_one_preserves_order() {
        let rng = StdRng::seed_from_u64(7);
        let out: Vec<usize> = ShuffleBuffer::new(0..20, 1, rng).collect();
        assert_eq!(out, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_is_windowed() {
        // With a window of 10, the first emitted item must come from
        // the first 10 source items.
        for seed in 0..20 {
            let rng   = StdRng::seed_from_u64(seed);
            let first = ShuffleBuffer::new(0..1000, 10, rng).next();
            assert!(matches!(first, Some(x) if x < 10));
        }
    }

    #[test]
    fn test_same_seed_same_order() {
        let a: Vec<usize> = ShuffleBuffer::new(0..100, 32, StdRng::seed_from_u64(3)).collect();
        let b: Vec<usize> = ShuffleBuffer::new(0..100, 32, StdRng::seed_from_u64(3)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_source() {
        let rng = StdRng::seed_from_u64(1);
        assert_eq!(ShuffleBuffer::new(0..0, 8, rng).count(), 0);
    }

    #[test]
    fn test_batch_sizes() {
        let sizes: Vec<usize> = Batches::new(0..100, 38).map(|b| b.len()).collect();
        assert_eq!(sizes, vec![38, 38, 24]);
    }

    #[test]
    fn test_batches_keep_order() {
        let batches: Vec<Vec<u32>> = Batches::new(0..5u32, 2).collect();
        assert_eq!(batches, vec![vec![0, 1], vec![2, 3], vec![4]]);
    }

    #[test]
    #[should_panic]
    fn test_zero_batch_size_panics() {
        let _ = Batches::new(0..5, 0);
    }

    proptest::proptest! {
        #[test]
        fn shuffled_stream_is_a_permutation(len in 0usize..300, window in 0usize..64, seed: u64) {
            let mut out: Vec<usize> =
                ShuffleBuffer::new(0..len, window, StdRng::seed_from_u64(seed)).collect();
            out.sort_unstable();
            proptest::prop_assert_eq!(out, (0..len).collect::<Vec<_>>());
        }
    }
}
