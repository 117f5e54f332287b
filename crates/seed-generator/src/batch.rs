//! Splitting an entity's total row count into bounded batches.

use std::ops::RangeInclusive;

/// One batch of an entity pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch {
    /// 1-based batch number.
    pub number: u64,
    /// Rows generated before this batch.
    pub offset: u64,
    /// Rows in this batch.
    pub size: usize,
}

impl Batch {
    /// Global 1-based sequential indices of the rows in this batch.
    pub fn indices(&self) -> RangeInclusive<u64> {
        (self.offset + 1)..=(self.offset + self.size as u64)
    }

    /// Rows generated once this batch is done.
    pub fn end(&self) -> u64 {
        self.offset + self.size as u64
    }
}

/// Iterator over the batches needed to generate `total` rows.
///
/// Every batch holds `batch_size` rows except the last one, which holds the
/// remainder. A zero total yields no batches. A zero batch size is treated
/// as one.
#[derive(Debug, Clone)]
pub struct BatchPlan {
    total: u64,
    batch_size: u64,
    offset: u64,
    number: u64,
}

impl BatchPlan {
    pub fn new(total: u64, batch_size: usize) -> Self {
        Self {
            total,
            batch_size: batch_size.max(1) as u64,
            offset: 0,
            number: 0,
        }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of batches the plan produces in total.
    pub fn batch_count(&self) -> u64 {
        self.total.div_ceil(self.batch_size)
    }
}

impl Iterator for BatchPlan {
    type Item = Batch;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.total {
            return None;
        }

        let size = std::cmp::min(self.batch_size, self.total - self.offset);
        self.number += 1;
        let batch = Batch {
            number: self.number,
            offset: self.offset,
            size: size as usize,
        };
        self.offset += size;

        Some(batch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.batch_count() - self.number) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BatchPlan {}
