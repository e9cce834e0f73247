//! Lazy, restartable generators over combinatorial structures.
//!
//! Every generator implements [`Enumerable`]: check [`Enumerable::exhausted`], read
//! [`Enumerable::current`], then [`Enumerable::advance`]. Nothing is materialised up front;
//! each generator holds only the state of the element it is on.
//!
//! - [`Range`]: half-open progressions over integers (with jumps) or floats.
//! - [`FixedCombinations`]: index combinations whose size and bounds are const generics.
//! - [`Combinations`]: combinations of owned values, moved between a pool and a result buffer.
//! - [`PowerSet`]: index subsets grouped by size, cycling forever.
//! - [`Product`]: Cartesian products of any two generators.
//!
//! [`GeneratorSpec`] describes any of these at runtime, as text or JSON.
//!
//!```
//!use combinate::{Combinations, Enumerable, Product, Range};
//!
//!let terms = ["x", "y", "z"];
//!let mut pairs = Product::new(Combinations::from_view(&terms, 2)?, Range::new(1, 3)?);
//!let mut expansions = vec![];
//!while !pairs.exhausted() {
//!    let (chosen, power) = pairs.current()?;
//!    expansions.push(format!("({})^{power}", chosen.join("*")));
//!    pairs.advance();
//!}
//!assert_eq!(expansions[0], "(x*y)^1");
//!assert_eq!(expansions.len(), 6);
//!# Ok::<(), anyhow::Error>(())
//!```
pub mod combinations;
pub mod counting;
pub mod fixed;
pub mod generator;
pub mod powerset;
pub mod product;
pub mod protocol;
pub mod range;
#[cfg(feature = "sampling")]
pub mod sampling;
pub mod view;

pub use combinations::Combinations;
pub use fixed::FixedCombinations;
pub use generator::{Generator, GeneratorSpec, Selection, SpecError};
pub use powerset::PowerSet;
pub use product::Product;
pub use protocol::{EnumerationError, Enumerable, Restartable};
pub use range::Range;
pub use view::SequenceView;
