use std::{num::NonZeroUsize, ops::Range};

use crate::{KernelErr, MAX_LEN, Result, worker::WorkerTask};

/// A half-open `[start, end)` index range owned by exactly one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    pub start: usize,
    pub end: usize,
}

impl Partition {
    /// Returns the indices covered by this partition.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the amount of indices in this partition.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether this partition covers no indices at all.
    ///
    /// Empty partitions are legal, they show up whenever there are more threads than elements.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Splits a vector into contiguous, disjoint and covering partitions, one per worker.
///
/// Every partition but the last has `len / threads` elements, the last one absorbs the
/// remainder of the integer division.
#[derive(Debug, Clone)]
pub struct PartitionPlan {
    len: usize,
    parts: Box<[Partition]>,
}

impl PartitionPlan {
    /// Creates a new `PartitionPlan`.
    ///
    /// # Arguments
    /// * `len` - The length of the vector to partition.
    /// * `threads` - The amount of partitions to create.
    ///
    /// # Returns
    /// An `InvalidVectorLength` error if `len` is `0` or exceeds `MAX_LEN`.
    pub fn new(len: usize, threads: NonZeroUsize) -> Result<Self> {
        check_len(len)?;

        let n = threads.get();
        let base = len / n;

        let parts = (0..n)
            .map(|t| Partition {
                start: base * t,
                end: if t == n - 1 { len } else { base * (t + 1) },
            })
            .collect();

        Ok(Self { len, parts })
    }

    /// Returns the length of the partitioned vector.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the planned partitions in index order.
    pub fn partitions(&self) -> &[Partition] {
        &self.parts
    }

    /// Hands out one `WorkerTask` per partition, each one owning a disjoint slice of `y`.
    ///
    /// # Arguments
    /// * `y` - The mutable vector to split.
    ///
    /// # Returns
    /// A `SizeMismatch` error if `y` doesn't have the planned length.
    pub fn split_mut<'a>(&self, y: &'a mut [f64]) -> Result<Vec<WorkerTask<'a>>> {
        if y.len() != self.len {
            return Err(KernelErr::SizeMismatch {
                what: "Y",
                got: y.len(),
                expected: self.len,
            });
        }

        let mut rest = y;
        let tasks = self
            .parts
            .iter()
            .enumerate()
            .map(|(id, &partition)| {
                let (head, tail) = std::mem::take(&mut rest).split_at_mut(partition.len());
                rest = tail;
                WorkerTask::new(id, partition, head)
            })
            .collect();

        Ok(tasks)
    }
}

/// Checks that `len` is a usable vector length.
pub(crate) fn check_len(len: usize) -> Result<()> {
    if len == 0 || len > MAX_LEN {
        return Err(KernelErr::InvalidVectorLength { len });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn plan(len: usize, threads: usize) -> PartitionPlan {
        PartitionPlan::new(len, NonZeroUsize::new(threads).unwrap()).unwrap()
    }

    #[test]
    fn test_even_split() {
        let plan = plan(8, 4);
        let ranges: Vec<_> = plan.partitions().iter().map(Partition::range).collect();
        assert_eq!(ranges, [0..2, 2..4, 4..6, 6..8]);
    }

    #[test]
    fn test_last_partition_absorbs_remainder() {
        let plan = plan(10, 3);
        let ranges: Vec<_> = plan.partitions().iter().map(Partition::range).collect();
        assert_eq!(ranges, [0..3, 3..6, 6..10]);
    }

    #[test]
    fn test_more_threads_than_elements() {
        let plan = plan(3, 8);
        let parts = plan.partitions();

        assert_eq!(parts.len(), 8);
        assert!(parts[..7].iter().all(Partition::is_empty));
        assert_eq!(parts[7].range(), 0..3);
    }

    #[test]
    fn test_single_thread_owns_everything() {
        let plan = plan(5, 1);
        assert_eq!(plan.partitions(), [Partition { start: 0, end: 5 }]);
    }

    #[test]
    fn test_rejects_invalid_lengths() {
        let one = NonZeroUsize::new(1).unwrap();

        assert!(matches!(
            PartitionPlan::new(0, one),
            Err(KernelErr::InvalidVectorLength { len: 0 })
        ));
        assert!(matches!(
            PartitionPlan::new(MAX_LEN + 1, one),
            Err(KernelErr::InvalidVectorLength { .. })
        ));
    }

    #[test]
    fn test_split_mut_hands_out_disjoint_slices() {
        let plan = plan(7, 3);
        let mut y: Vec<f64> = (0..7).map(f64::from).collect();

        let tasks = plan.split_mut(&mut y).unwrap();
        let lens: Vec<_> = tasks.iter().map(|task| task.partition().len()).collect();
        assert_eq!(lens, [2, 2, 3]);
        assert_eq!(tasks[2].y(), [4., 5., 6.]);
    }

    #[test]
    fn test_split_mut_size_mismatch() {
        let plan = plan(4, 2);
        let mut y = [0.; 3];

        assert!(matches!(
            plan.split_mut(&mut y),
            Err(KernelErr::SizeMismatch {
                what: "Y",
                got: 3,
                expected: 4
            })
        ));
    }

    proptest! {
        #[test]
        fn prop_partitions_are_disjoint_and_cover(len in 1usize..5_000, threads in 1usize..64) {
            let plan = plan(len, threads);
            let parts = plan.partitions();

            prop_assert_eq!(parts.len(), threads);
            prop_assert_eq!(parts[0].start, 0);
            prop_assert_eq!(parts[threads - 1].end, len);

            for pair in parts.windows(2) {
                prop_assert_eq!(pair[0].end, pair[1].start);
            }

            for part in parts {
                prop_assert!(part.start <= part.end);
            }

            let covered: usize = parts.iter().map(Partition::len).sum();
            prop_assert_eq!(covered, len);
        }
    }
}
