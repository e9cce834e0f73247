//! Read-only positional access to the values a caller enumerates over.
use std::collections::VecDeque;

use crate::protocol::EnumerationError;

///A read-only sequence with a known length and out-of-order positional reads.
pub trait SequenceView {
    ///The element type.
    type Item;

    ///Number of elements.
    fn len(&self) -> usize;

    ///The element at `index`, if there is one.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    ///True if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> SequenceView for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T, const N: usize> SequenceView for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> SequenceView for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> SequenceView for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}

///Looks up every index of `indices` in `view`, in order.
///
///# Errors
///[`EnumerationError::IndexOutOfBounds`] for the first index past the end of `view`.
///
///```
///# use combinate::view::resolve;
///let words = ["x", "y", "z"];
///assert_eq!(resolve(&words, &[0, 2])?, vec![&"x", &"z"]);
///# Ok::<(), anyhow::Error>(())
///```
pub fn resolve<'v, V>(view: &'v V, indices: &[usize]) -> Result<Vec<&'v V::Item>, EnumerationError>
where
    V: SequenceView + ?Sized,
{
    indices
        .iter()
        .map(|&index| {
            view.get(index).ok_or(EnumerationError::IndexOutOfBounds {
                index,
                len: view.len(),
            })
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn views_agree() -> anyhow::Result<()> {
        let v = vec![10, 20, 30];
        let d: VecDeque<_> = v.iter().copied().collect();
        let a = [10, 20, 30];
        assert_eq!(resolve(&v, &[2, 0])?, vec![&30, &10]);
        assert_eq!(resolve(&d, &[2, 0])?, vec![&30, &10]);
        assert_eq!(resolve(&a, &[2, 0])?, vec![&30, &10]);
        assert_eq!(resolve(v.as_slice(), &[1])?, vec![&20]);
        assert!(!SequenceView::is_empty(&d));
        Ok(())
    }

    #[test]
    fn out_of_bounds() {
        let v = vec!['a'];
        assert_eq!(
            resolve(&v, &[0, 3]),
            Err(EnumerationError::IndexOutOfBounds { index: 3, len: 1 })
        );
    }
}
