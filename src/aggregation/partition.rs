use std::ops::Range;

/// A half-open index range `[start, end)` over the payment sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    /// Position of this range among its siblings.
    pub index: usize,
    pub start: usize,
    pub end: usize,
}

impl Partition {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Splits `len` items into `workers` contiguous ranges.
///
/// Every range but the last holds `len / workers` items; the last one takes
/// the remainder. A worker count of 0 is treated as 1. With more workers than
/// items, all ranges except the last are empty.
pub fn partition(len: usize, workers: usize) -> Vec<Partition> {
    let workers = workers.max(1);
    let size = len / workers;

    (0..workers)
        .map(|index| {
            let start = index * size;
            let end = if index + 1 == workers {
                len
            } else {
                start + size
            };
            Partition { index, start, end }
        })
        .collect()
}
