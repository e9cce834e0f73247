//! Runtime sized combinations over owned values.
//!
//! Every value lives in exactly one of two buffers: the pool of unselected values, keyed by
//! original position, or the result buffer holding the current selection. Advancing only moves
//! values between the two; nothing is cloned and the result buffer never grows past `k`.
use crate::{
    counting::binomial,
    protocol::{EnumerationError, Enumerable},
    range::Range,
    view::SequenceView,
};

///All size `k` selections of a sequence of values, in lexicographic order of their positions.
///
///Values are consumed on construction. Once exhausted the generator cannot be restarted;
///build a new one (or recover the values with [`Combinations::into_values`]).
///
///```
///# use combinate::{Combinations, Enumerable};
///let mut c = Combinations::new(vec!["a".to_string(), "b".into(), "c".into()], 2)?;
///let mut seen = vec![];
///while !c.exhausted() {
///    seen.push(c.current()?.join(""));
///    c.advance();
///}
///assert_eq!(seen, vec!["ab", "ac", "bc"]);
///# Ok::<(), anyhow::Error>(())
///```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combinations<T> {
    pool: Vec<Option<T>>,
    indices: Vec<usize>,
    result: Option<Vec<T>>,
    cursor: Option<usize>,
}

impl<T> Combinations<T> {
    ///Takes ownership of `source` and starts on its first `k` values.
    ///
    ///# Errors
    ///[`EnumerationError::SizeExceedsPool`] if `source` has fewer than `k` values.
    pub fn new<I>(source: I, k: usize) -> Result<Self, EnumerationError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut source = source.into_iter();
        let mut result = Vec::with_capacity(k);
        result.extend(source.by_ref().take(k));

        let mut pool = Vec::with_capacity(result.len() + source.size_hint().0);
        pool.resize_with(result.len(), || None);
        pool.extend(source.map(Some));

        if result.len() < k {
            return Err(EnumerationError::SizeExceedsPool {
                k,
                pool_size: pool.len(),
            });
        }
        log::debug!("Choosing {k} of {} values", pool.len());

        Ok(Combinations {
            pool,
            indices: Range::from(0..k).collect(),
            result: Some(result),
            cursor: k.checked_sub(1),
        })
    }

    ///Number of selectable positions.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    ///Number of values selected at once.
    #[must_use]
    pub fn k(&self) -> usize {
        self.indices.len()
    }

    ///Original positions of the current selection.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    ///Total number of selections in one pass, if it fits in a `u64`.
    #[must_use]
    pub fn len(&self) -> Option<u64> {
        binomial(self.pool_size(), self.k())
    }

    ///Never true: choosing `k <= pool_size` values always has a selection.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    ///Gives back every value, in its original order.
    #[must_use]
    pub fn into_values(mut self) -> Vec<T> {
        self.release_from(0);
        self.pool.into_iter().flatten().collect()
    }

    //Moves the selected values from slot `from` onward back into the pool.
    fn release_from(&mut self, from: usize) {
        let Some(result) = self.result.as_mut() else {
            return;
        };
        for (&i, value) in self.indices[from..].iter().zip(result.drain(from..)) {
            self.pool[i] = Some(value);
        }
    }
}

impl<T: Clone> Combinations<T> {
    ///Clones every value of `view` and chooses `k` of them.
    ///
    ///# Errors
    ///[`EnumerationError::SizeExceedsPool`] if `view` has fewer than `k` values.
    pub fn from_view<V>(view: &V, k: usize) -> Result<Self, EnumerationError>
    where
        V: SequenceView<Item = T> + ?Sized,
    {
        Combinations::new(Range::from(0..view.len()).filter_map(|i| view.get(i).cloned()), k)
    }
}

impl<T> Enumerable for Combinations<T> {
    type Value<'a>
        = &'a [T]
    where
        Self: 'a;

    fn current(&self) -> Result<&[T], EnumerationError> {
        self.result.as_deref().ok_or(EnumerationError::Exhausted)
    }

    fn advance(&mut self) {
        if self.result.is_none() {
            return;
        }
        let k = self.indices.len();
        let pool_size = self.pool.len();

        let mut cursor = self.cursor;
        while let Some(c) = cursor {
            if self.indices[c] + (k - c) != pool_size {
                break;
            }
            cursor = c.checked_sub(1);
        }

        let Some(c) = cursor else {
            self.release_from(0);
            self.result = None;
            self.cursor = None;
            log::trace!("Exhausted all {k}-combinations of {pool_size} values");
            return;
        };

        self.release_from(c);
        if let Some(result) = self.result.as_mut() {
            let first = self.indices[c] + 1;
            for (slot, i) in self.indices[c..].iter_mut().zip(Range::from(first..pool_size)) {
                *slot = i;
                let value = self.pool[i].take();
                debug_assert!(value.is_some(), "position {i} selected twice");
                result.extend(value);
            }
        }
        self.cursor = k.checked_sub(1);
    }

    fn exhausted(&self) -> bool {
        self.result.is_none()
    }
}

impl<T: Clone> Iterator for Combinations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let x = self.current().ok()?.to_vec();
        self.advance();
        Some(x)
    }
}
