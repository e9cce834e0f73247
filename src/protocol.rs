//! The shared contract every generator in this crate implements.
use thiserror::Error;

///Errors raised when a generator is built with bad bounds or read at the wrong time.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum EnumerationError {
    ///Asked for subsets larger than the pool they are drawn from.
    #[error("Cannot select {k} elements from a pool of {pool_size}")]
    SizeExceedsPool {
        ///The requested selection size.
        k: usize,
        ///The number of selectable positions.
        pool_size: usize,
    },

    ///The start of a range lies past its end.
    #[error("The start of a range must not lie past its end")]
    InvertedBounds,

    ///The bounds are too large in magnitude for a unit step to be taken exactly.
    #[error("A unit step cannot be taken exactly between these bounds")]
    InexactStep,

    ///`current` was called on a generator which has run out.
    #[error("Tried to read the current value of an exhausted generator")]
    Exhausted,

    ///An index tuple pointed outside of the sequence it was resolved against.
    #[error("Index {index} is out of bounds for a sequence of length {len}")]
    IndexOutOfBounds {
        ///The offending index.
        index: usize,
        ///The length of the sequence.
        len: usize,
    },

    ///A count or step did not fit in the integer type used to hold it.
    #[error("Arithmetic overflow while enumerating")]
    Overflow,
}

///A pull-based generator.
///
///Callers check [`Enumerable::exhausted`], read [`Enumerable::current`] and then
///[`Enumerable::advance`]:
///```
///# use combinate::{Enumerable, Range};
///let mut r = Range::new(0u8, 3)?;
///let mut seen = vec![];
///while !r.exhausted() {
///    seen.push(r.current()?);
///    r.advance();
///}
///assert_eq!(seen, vec![0, 1, 2]);
///# Ok::<(), anyhow::Error>(())
///```
pub trait Enumerable {
    ///A view of the currently selected value(s).
    type Value<'a>
    where
        Self: 'a;

    ///Returns the current element, or [`EnumerationError::Exhausted`] if there is none.
    fn current(&self) -> Result<Self::Value<'_>, EnumerationError>;

    ///Moves to the next element. Does nothing once exhausted.
    fn advance(&mut self);

    ///True once [`Enumerable::advance`] has run past the last element.
    fn exhausted(&self) -> bool;
}

///A generator which can be put back on its first element.
pub trait Restartable: Enumerable {
    ///Restores the initial element.
    fn reset(&mut self);
}
