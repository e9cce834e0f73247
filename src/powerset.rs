//! Subsets of a pool of positions, grouped by size and cycling forever.
use crate::{
    counting::binomial,
    protocol::{EnumerationError, Enumerable, Restartable},
    range::Range,
    view::{SequenceView, resolve},
};

///Index subsets of `[0, pool_size)` with at most `max_size` elements.
///
///One cycle yields the empty subset, then every subset of size one, then of size two and so
///on up to `max_size`, each size in lexicographic order. The cycle then starts again from the
///empty subset, so the sequence never ends: [`Enumerable::exhausted`] is only true directly
///after the advance that wrapped around, which lets a `while !exhausted()` loop visit
///exactly one cycle.
///
///```
///# use combinate::{Enumerable, PowerSet};
///let mut p = PowerSet::new(3, 2)?;
///let mut seen = vec![];
///while !p.exhausted() {
///    seen.push(p.current()?.to_vec());
///    p.advance();
///}
///assert_eq!(seen.len(), 7);
///assert_eq!(seen[4], vec![0, 1]);
///# Ok::<(), anyhow::Error>(())
///```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PowerSet {
    pool_size: usize,
    max_size: usize,
    indices: Vec<usize>,
    cursor: Option<usize>,
    wrapped: bool,
}

impl PowerSet {
    ///Starts on the empty subset.
    ///
    ///# Errors
    ///[`EnumerationError::SizeExceedsPool`] if `max_size > pool_size`.
    pub fn new(pool_size: usize, max_size: usize) -> Result<Self, EnumerationError> {
        if max_size > pool_size {
            return Err(EnumerationError::SizeExceedsPool {
                k: max_size,
                pool_size,
            });
        }
        log::debug!("Power set of {pool_size} positions up to size {max_size}");
        Ok(PowerSet {
            pool_size,
            max_size,
            indices: Vec::with_capacity(max_size),
            cursor: None,
            wrapped: false,
        })
    }

    ///Size of the current subset.
    #[must_use]
    pub fn subset_size(&self) -> usize {
        self.indices.len()
    }

    ///Number of selectable positions.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    ///Largest subset size visited before wrapping.
    #[must_use]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    ///Number of subsets in one cycle, if it fits in a `u64`.
    #[must_use]
    pub fn cycle_len(&self) -> Option<u64> {
        (0..=self.max_size).try_fold(0u64, |acc, size| {
            acc.checked_add(binomial(self.pool_size, size)?)
        })
    }

    ///The values of `view` at the current subset's positions.
    ///
    ///# Errors
    ///[`EnumerationError::IndexOutOfBounds`] if `view` is shorter than the pool.
    pub fn resolve<'v, V>(&self, view: &'v V) -> Result<Vec<&'v V::Item>, EnumerationError>
    where
        V: SequenceView + ?Sized,
    {
        resolve(view, &self.indices)
    }

    //Moves on to the first subset of the next size, or wraps to the empty subset.
    fn grow(&mut self) {
        let size = self.indices.len() + 1;
        self.indices.clear();
        if size > self.max_size {
            self.cursor = None;
            self.wrapped = true;
            log::trace!("Power set wrapped around");
        } else {
            self.indices.extend(Range::from(0..size));
            self.cursor = Some(size - 1);
            log::trace!("Power set moved on to subsets of size {size}");
        }
    }
}

impl Enumerable for PowerSet {
    type Value<'a>
        = &'a [usize]
    where
        Self: 'a;

    ///Never fails: the power set has no end, only cycles.
    fn current(&self) -> Result<&[usize], EnumerationError> {
        Ok(&self.indices)
    }

    fn advance(&mut self) {
        self.wrapped = false;
        let size = self.indices.len();

        let mut cursor = self.cursor;
        while let Some(c) = cursor {
            if self.indices[c] + (size - c) != self.pool_size {
                break;
            }
            cursor = c.checked_sub(1);
        }

        match cursor {
            Some(c) => {
                let first = self.indices[c] + 1;
                for (slot, i) in self.indices[c..]
                    .iter_mut()
                    .zip(Range::from(first..self.pool_size))
                {
                    *slot = i;
                }
                self.cursor = size.checked_sub(1);
            }
            None => self.grow(),
        }
    }

    fn exhausted(&self) -> bool {
        self.wrapped
    }
}

impl Restartable for PowerSet {
    fn reset(&mut self) {
        self.indices.clear();
        self.cursor = None;
        self.wrapped = false;
    }
}

impl Iterator for PowerSet {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let x = self.indices.clone();
        self.advance();
        Some(x)
    }
}
