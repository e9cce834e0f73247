//! Stack resident combinations whose size and bounds are known at compile time.
use std::ops::Index;

use crate::{
    counting::binomial,
    protocol::{EnumerationError, Enumerable, Restartable},
    range::Range,
};

///All increasing `SIZE`-tuples drawn from `[START, STOP)`, in lexicographic order.
///
///Bounds which admit no combination at all (`START > STOP` or `SIZE > STOP - START`) are
///rejected when the type is instantiated.
///
///```
///# use combinate::{Enumerable, FixedCombinations};
///let mut c = FixedCombinations::<2, 0, 3>::new();
///let mut seen = vec![];
///while !c.exhausted() {
///    seen.push(*c.current()?);
///    c.advance();
///}
///assert_eq!(seen, vec![[0, 1], [0, 2], [1, 2]]);
///# Ok::<(), anyhow::Error>(())
///```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedCombinations<const SIZE: usize, const START: usize, const STOP: usize> {
    indices: [usize; SIZE],
    exhausted: bool,
}

impl<const SIZE: usize, const START: usize, const STOP: usize>
    FixedCombinations<SIZE, START, STOP>
{
    const BOUNDS: () = assert!(
        START <= STOP && SIZE <= STOP - START,
        "a fixed combination must fit between its bounds"
    );

    ///Starts on `{START, START + 1, ..., START + SIZE - 1}`.
    #[must_use]
    pub fn new() -> Self {
        let () = Self::BOUNDS;
        let mut c = FixedCombinations {
            indices: [START; SIZE],
            exhausted: false,
        };
        c.reset();
        c
    }

    ///The current indices.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    ///Total number of combinations in one pass.
    #[must_use]
    pub fn len(&self) -> Option<u64> {
        binomial(STOP - START, SIZE)
    }

    ///Never true: there is always at least one combination.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    //Highest value slot i may hold given how many slots follow it.
    const fn ceiling(i: usize) -> usize {
        STOP - (SIZE - i)
    }
}

impl<const SIZE: usize, const START: usize, const STOP: usize> Default
    for FixedCombinations<SIZE, START, STOP>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<const SIZE: usize, const START: usize, const STOP: usize> Enumerable
    for FixedCombinations<SIZE, START, STOP>
{
    type Value<'a>
        = &'a [usize; SIZE]
    where
        Self: 'a;

    fn current(&self) -> Result<&[usize; SIZE], EnumerationError> {
        if self.exhausted {
            Err(EnumerationError::Exhausted)
        } else {
            Ok(&self.indices)
        }
    }

    fn advance(&mut self) {
        if self.exhausted {
            return;
        }
        let growable = (0..SIZE)
            .rev()
            .find(|&i| self.indices[i] != Self::ceiling(i));

        match growable {
            Some(i) => {
                let first = self.indices[i] + 1;
                for (slot, x) in self.indices[i..].iter_mut().zip(Range::from(first..STOP)) {
                    *slot = x;
                }
            }
            None => self.exhausted = true,
        }
    }

    fn exhausted(&self) -> bool {
        self.exhausted
    }
}

impl<const SIZE: usize, const START: usize, const STOP: usize> Restartable
    for FixedCombinations<SIZE, START, STOP>
{
    fn reset(&mut self) {
        for (slot, x) in self.indices.iter_mut().zip(Range::from(START..STOP)) {
            *slot = x;
        }
        self.exhausted = false;
    }
}

impl<const SIZE: usize, const START: usize, const STOP: usize> Index<usize>
    for FixedCombinations<SIZE, START, STOP>
{
    type Output = usize;

    fn index(&self, index: usize) -> &usize {
        &self.indices[index]
    }
}

impl<const SIZE: usize, const START: usize, const STOP: usize> Iterator
    for FixedCombinations<SIZE, START, STOP>
{
    type Item = [usize; SIZE];

    fn next(&mut self) -> Option<Self::Item> {
        let x = *self.current().ok()?;
        self.advance();
        Some(x)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn two_of_four() -> anyhow::Result<()> {
        let mut c = FixedCombinations::<2, 0, 4>::new();
        let mut seen = vec![];
        while !c.exhausted() {
            seen.push([c[0], c[1]]);
            c.advance();
        }
        assert_eq!(
            seen,
            vec![[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]]
        );
        assert_eq!(c.current(), Err(EnumerationError::Exhausted));

        c.reset();
        assert!(!c.exhausted());
        assert_eq!(c.current()?, &[0, 1]);
        Ok(())
    }

    #[test]
    fn offset_domain() {
        let c = FixedCombinations::<3, 5, 9>::new();
        assert_eq!(c.len(), Some(4));
        assert_eq!(
            c.collect::<Vec<_>>(),
            vec![[5, 6, 7], [5, 6, 8], [5, 7, 8], [6, 7, 8]]
        );
    }

    #[test]
    fn boundaries() {
        assert_eq!(
            FixedCombinations::<0, 2, 5>::new().collect::<Vec<_>>(),
            vec![[0usize; 0]]
        );
        assert_eq!(
            FixedCombinations::<3, 2, 5>::new().collect::<Vec<_>>(),
            vec![[2, 3, 4]]
        );
        assert_eq!(
            FixedCombinations::<0, 3, 3>::new().collect::<Vec<_>>(),
            vec![[0usize; 0]]
        );
    }

    #[test]
    fn count_and_order() {
        let all = FixedCombinations::<4, 0, 10>::new().collect::<Vec<_>>();
        assert_eq!(all.len() as u64, binomial(10, 4).unwrap());
        assert!(all.windows(2).all(|w| w[0] < w[1]));
        assert!(all.iter().all(|c| c.windows(2).all(|w| w[0] < w[1])));
        assert_eq!(all.last(), Some(&[6, 7, 8, 9]));
    }
}
