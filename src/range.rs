//! Monotonic progressions over ordered scalar domains.
use std::{
    cmp::Ordering,
    fmt::Debug,
    ops::{AddAssign, SubAssign},
};

use crate::protocol::{EnumerationError, Enumerable, Restartable};

///A scalar which can be moved by one unit.
pub trait Step: Copy + PartialOrd + Debug {
    ///One unit up.
    #[must_use]
    fn forward(self) -> Self;
    ///One unit down.
    #[must_use]
    fn backward(self) -> Self;
}

///A [`Step`] over an integral domain, which also allows jumping by `n` units.
pub trait Integral: Step {
    ///The additive identity.
    const ZERO: Self;

    ///`self + n`, or `None` on overflow.
    fn checked_forward_by(self, n: Self) -> Option<Self>;
    ///`self - n`, or `None` on overflow.
    fn checked_backward_by(self, n: Self) -> Option<Self>;
}

macro_rules! integral_step {
    ($($t:ty),*) => {$(
        impl Step for $t {
            fn forward(self) -> Self {
                self + 1
            }
            fn backward(self) -> Self {
                self - 1
            }
        }

        impl Integral for $t {
            const ZERO: Self = 0;

            fn checked_forward_by(self, n: Self) -> Option<Self> {
                self.checked_add(n)
            }
            fn checked_backward_by(self, n: Self) -> Option<Self> {
                self.checked_sub(n)
            }
        }
    )*};
}

integral_step!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Step for f32 {
    fn forward(self) -> Self {
        self + 1.0
    }
    fn backward(self) -> Self {
        self - 1.0
    }
}

impl Step for f64 {
    fn forward(self) -> Self {
        self + 1.0
    }
    fn backward(self) -> Self {
        self - 1.0
    }
}

//True if stepping away from x moves it and stepping back lands on x again.
fn exact_step<T: Step>(x: T, away: fn(T) -> T, back: fn(T) -> T) -> bool {
    let y = away(x);
    y != x && back(y) == x
}

///The half-open progression `[current, terminal)`.
///
///For non-integral domains only single steps are available, and the range counts as
///exhausted as soon as `current` is no longer below `terminal`. Float bounds must be small
///enough in magnitude that adding one unit is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<T: Step> {
    start: T,
    current: T,
    terminal: T,
}

impl<T: Step> Range<T> {
    ///Creates the range `[start, stop)`.
    ///
    ///# Errors
    ///[`EnumerationError::InvertedBounds`] if `start` lies past `stop` (or they are
    ///incomparable), [`EnumerationError::InexactStep`] if a unit step cannot be taken exactly
    ///at the bounds' magnitude.
    pub fn new(start: T, stop: T) -> Result<Self, EnumerationError> {
        match start.partial_cmp(&stop) {
            Some(Ordering::Less)
                if !exact_step(start, T::forward, T::backward)
                    || !exact_step(stop, T::backward, T::forward) =>
            {
                Err(EnumerationError::InexactStep)
            }
            Some(Ordering::Less | Ordering::Equal) => Ok(Range {
                start,
                current: start,
                terminal: stop,
            }),
            Some(Ordering::Greater) | None => Err(EnumerationError::InvertedBounds),
        }
    }

    ///The exclusive end of the range.
    pub fn terminal(&self) -> T {
        self.terminal
    }

    ///Steps back by one unit, never past the start.
    pub fn retreat(&mut self) {
        if self.start < self.current {
            self.current = self.current.backward();
        }
    }
}

impl<T: Integral> Range<T> {
    ///Jumps forward by `n` units (back, for negative `n`), staying within `[start, terminal]`.
    pub fn advance_by(&mut self, n: T) {
        let upward = n >= T::ZERO;
        self.current = self.clamp(self.current.checked_forward_by(n), upward);
    }

    ///Jumps back by `n` units (forward, for negative `n`), staying within `[start, terminal]`.
    pub fn retreat_by(&mut self, n: T) {
        let upward = n < T::ZERO;
        self.current = self.clamp(self.current.checked_backward_by(n), upward);
    }

    //An overflowed jump lands on whichever end it was heading for.
    fn clamp(&self, x: Option<T>, upward: bool) -> T {
        match x {
            Some(x) if x < self.start => self.start,
            Some(x) if x > self.terminal => self.terminal,
            Some(x) => x,
            None if upward => self.terminal,
            None => self.start,
        }
    }
}

impl<T: Integral> AddAssign<T> for Range<T> {
    fn add_assign(&mut self, rhs: T) {
        self.advance_by(rhs);
    }
}

impl<T: Integral> SubAssign<T> for Range<T> {
    fn sub_assign(&mut self, rhs: T) {
        self.retreat_by(rhs);
    }
}

///Builds a range from std's range syntax. Like std, an inverted range is empty.
impl<T: Step> From<std::ops::Range<T>> for Range<T> {
    fn from(value: std::ops::Range<T>) -> Self {
        let terminal = if value.start < value.end {
            value.end
        } else {
            value.start
        };
        Range {
            start: value.start,
            current: value.start,
            terminal,
        }
    }
}

impl<T: Step> Enumerable for Range<T> {
    type Value<'a>
        = T
    where
        Self: 'a;

    fn current(&self) -> Result<T, EnumerationError> {
        if self.exhausted() {
            Err(EnumerationError::Exhausted)
        } else {
            Ok(self.current)
        }
    }

    fn advance(&mut self) {
        if !self.exhausted() {
            self.current = self.current.forward();
        }
    }

    fn exhausted(&self) -> bool {
        !(self.current < self.terminal)
    }
}

impl<T: Step> Restartable for Range<T> {
    fn reset(&mut self) {
        self.current = self.start;
    }
}

impl<T: Step> Iterator for Range<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let x = self.current().ok()?;
        self.advance();
        Some(x)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn single_steps() -> anyhow::Result<()> {
        let mut r = Range::new(3i32, 6)?;
        assert_eq!(r.current()?, 3);
        r.advance();
        r.advance();
        assert_eq!(r.current()?, 5);
        r.advance();
        assert!(r.exhausted());
        assert_eq!(r.current(), Err(EnumerationError::Exhausted));
        r.advance();
        assert!(r.exhausted());
        r.retreat();
        assert_eq!(r.current()?, 5);
        Ok(())
    }

    #[test]
    fn jumps_are_clamped() -> anyhow::Result<()> {
        let mut r = Range::new(0usize, 10)?;
        r += 4;
        assert_eq!(r.current()?, 4);
        r -= 1;
        assert_eq!(r.current()?, 3);
        r -= 100;
        assert_eq!(r.current()?, 0);
        r += usize::MAX;
        assert!(r.exhausted());
        assert_eq!(r.terminal(), 10);
        r.reset();
        assert_eq!(r.current()?, 0);
        Ok(())
    }

    #[test]
    fn signed_jumps_stay_in_bounds() -> anyhow::Result<()> {
        let mut r = Range::new(0i32, 10)?;
        r += -5;
        assert_eq!(r.current()?, 0);

        r -= -50;
        assert!(r.exhausted());
        r.retreat();
        assert_eq!(r.current()?, 9);

        r += -3;
        assert_eq!(r.current()?, 6);
        r -= -2;
        assert_eq!(r.current()?, 8);

        let mut r = Range::new(-5i8, 5)?;
        r -= i8::MIN;
        assert!(r.exhausted());
        r += i8::MIN;
        assert_eq!(r.current()?, -5);
        r += i8::MAX;
        assert!(r.exhausted());
        Ok(())
    }

    #[test]
    fn imprecise_floats_are_rejected() {
        assert_eq!(
            Range::new(1e16f64, 2e16),
            Err(EnumerationError::InexactStep)
        );
        assert_eq!(Range::new(0.0f32, 1e8), Err(EnumerationError::InexactStep));
        assert!(Range::new(-1e6f64, 1e6).is_ok());
    }

    #[test]
    fn empty_and_inverted() {
        let r = Range::new(5u8, 5).unwrap();
        assert!(r.exhausted());
        assert_eq!(Range::new(6u8, 5), Err(EnumerationError::InvertedBounds));
        assert_eq!(Range::new(0.0, f64::NAN), Err(EnumerationError::InvertedBounds));
        assert_eq!(Range::from(4usize..2).count(), 0);
    }

    #[test]
    fn floats_terminate() -> anyhow::Result<()> {
        let r = Range::new(0.5f64, 3.0)?;
        assert_eq!(r.collect::<Vec<_>>(), vec![0.5, 1.5, 2.5]);
        Ok(())
    }

    #[test]
    fn iterator_matches_std() {
        assert_eq!(
            Range::from(-2i64..3).collect::<Vec<_>>(),
            (-2i64..3).collect::<Vec<_>>()
        );
    }
}
