//! Cartesian products of two generators.
use crate::protocol::{EnumerationError, Enumerable, Restartable};

///Pairs every element of `inner` with every element of `outer`.
///
///`inner` is the fast axis: it runs through all of its elements, is rewound from a copy of
///its starting state, and only then does `outer` take one step. An empty `inner` makes the
///whole product empty.
///
///```
///# use combinate::{Enumerable, Product, Range};
///let mut p = Product::new(Range::new(0, 2)?, Range::new(0, 2)?);
///let mut seen = vec![];
///while !p.exhausted() {
///    seen.push(p.current()?);
///    p.advance();
///}
///assert_eq!(seen, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
///# Ok::<(), anyhow::Error>(())
///```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product<I, O> {
    inner: I,
    outer: O,
    inner_start: I,
}

impl<I: Enumerable + Clone, O: Enumerable> Product<I, O> {
    ///Remembers where `inner` starts so it can be rewound.
    pub fn new(inner: I, outer: O) -> Self {
        Product {
            inner_start: inner.clone(),
            inner,
            outer,
        }
    }

    ///The fast axis.
    pub fn inner(&self) -> &I {
        &self.inner
    }

    ///The slow axis.
    pub fn outer(&self) -> &O {
        &self.outer
    }
}

impl<I, O> Enumerable for Product<I, O>
where
    I: Enumerable + Clone,
    O: Enumerable,
{
    type Value<'a>
        = (I::Value<'a>, O::Value<'a>)
    where
        Self: 'a;

    fn current(&self) -> Result<Self::Value<'_>, EnumerationError> {
        if self.exhausted() {
            return Err(EnumerationError::Exhausted);
        }
        Ok((self.inner.current()?, self.outer.current()?))
    }

    fn advance(&mut self) {
        if self.exhausted() {
            return;
        }
        if !self.inner.exhausted() {
            self.inner.advance();
        }
        if self.inner.exhausted() {
            self.inner.clone_from(&self.inner_start);
            self.outer.advance();
        }
    }

    fn exhausted(&self) -> bool {
        self.outer.exhausted() || self.inner_start.exhausted()
    }
}

impl<I, O> Restartable for Product<I, O>
where
    I: Enumerable + Clone,
    O: Restartable,
{
    fn reset(&mut self) {
        self.inner.clone_from(&self.inner_start);
        self.outer.reset();
    }
}
