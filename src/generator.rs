//! Generators described at runtime, either as text or as JSON.
//!
//! A [`GeneratorSpec`] names one of the index generators of this crate together with its
//! bounds. It can be parsed from a small call-like grammar,
//!
//!```text
//!spec := range(start, stop) | choose(pool_size, k) | powerset(pool_size, max_size)
//!      | product(inner_spec, outer_spec)
//!```
//!
//! or read from JSON, and is built into a [`Generator`].
use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    combinations::Combinations,
    counting::binomial,
    powerset::PowerSet,
    product::Product,
    protocol::{EnumerationError, Enumerable},
    range::Range,
};

mod parser;

///Failure to read or build a [`GeneratorSpec`].
#[derive(Debug, Error)]
pub enum SpecError {
    ///The text did not follow the generator grammar.
    #[error("ParseError({0})")]
    Parse(String),

    ///The JSON was malformed or did not describe a generator.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    ///The bounds were rejected by the generator.
    #[error("{0}")]
    Enumeration(#[from] EnumerationError),
}

///A description of an index generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeneratorSpec {
    ///Every index in `[start, stop)`.
    Range {
        ///First index.
        start: usize,
        ///One past the last index.
        stop: usize,
    },
    ///Every increasing `k`-tuple over `[0, pool_size)`.
    Choose {
        ///Number of selectable positions.
        pool_size: usize,
        ///Tuple size.
        k: usize,
    },
    ///One cycle of subsets of `[0, pool_size)` of size at most `max_size`.
    PowerSet {
        ///Number of selectable positions.
        pool_size: usize,
        ///Largest subset size.
        max_size: usize,
    },
    ///`inner` as the fast axis, `outer` as the slow one.
    Product {
        ///Fast axis.
        inner: Box<GeneratorSpec>,
        ///Slow axis.
        outer: Box<GeneratorSpec>,
    },
}

impl GeneratorSpec {
    ///Parses the text form.
    ///
    ///```
    ///# use combinate::GeneratorSpec;
    ///let spec = GeneratorSpec::parse("product(range(0, 2), choose(4, 2))")?;
    ///assert_eq!(spec.len(), Some(12));
    ///# Ok::<(), anyhow::Error>(())
    ///```
    ///
    ///# Errors
    ///[`SpecError::Parse`] if `s` does not follow the grammar.
    pub fn parse(s: &str) -> Result<Self, SpecError> {
        parser::parse_spec(s)
    }

    ///Reads a spec from JSON such as `{"kind": "choose", "pool_size": 4, "k": 2}`.
    ///
    ///# Errors
    ///[`SpecError::Json`] if `s` is not a valid description.
    pub fn from_json(s: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(s)?)
    }

    ///Writes the spec as JSON.
    ///
    ///# Errors
    ///[`SpecError::Json`] if serialisation fails.
    pub fn to_json(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string(self)?)
    }

    ///Number of elements in one pass, if the bounds are valid and the count fits in a `u64`.
    #[must_use]
    pub fn len(&self) -> Option<u64> {
        match self {
            GeneratorSpec::Range { start, stop } => u64::try_from(stop.checked_sub(*start)?).ok(),
            GeneratorSpec::Choose { pool_size, k } => binomial(*pool_size, *k),
            GeneratorSpec::PowerSet {
                pool_size,
                max_size,
            } => PowerSet::new(*pool_size, *max_size).ok()?.cycle_len(),
            GeneratorSpec::Product { inner, outer } => inner.len()?.checked_mul(outer.len()?),
        }
    }

    ///True if one pass has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    ///Builds the generator this spec describes.
    ///
    ///# Errors
    ///The [`EnumerationError`] of whichever generator rejected its bounds.
    pub fn build(&self) -> Result<Generator, EnumerationError> {
        Ok(match self {
            GeneratorSpec::Range { start, stop } => Generator::Range(Range::new(*start, *stop)?),
            GeneratorSpec::Choose { pool_size, k } => {
                Generator::Choose(Combinations::new(0..*pool_size, *k)?)
            }
            GeneratorSpec::PowerSet {
                pool_size,
                max_size,
            } => Generator::PowerSet(PowerSet::new(*pool_size, *max_size)?),
            GeneratorSpec::Product { inner, outer } => {
                Generator::Product(Box::new(Product::new(inner.build()?, outer.build()?)))
            }
        })
    }
}

impl Display for GeneratorSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorSpec::Range { start, stop } => write!(f, "range({start}, {stop})"),
            GeneratorSpec::Choose { pool_size, k } => write!(f, "choose({pool_size}, {k})"),
            GeneratorSpec::PowerSet {
                pool_size,
                max_size,
            } => write!(f, "powerset({pool_size}, {max_size})"),
            GeneratorSpec::Product { inner, outer } => write!(f, "product({inner}, {outer})"),
        }
    }
}

impl FromStr for GeneratorSpec {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeneratorSpec::parse(s)
    }
}

///One element of a [`Generator`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selection<'a> {
    ///A single index, from a range.
    Scalar(usize),
    ///An index tuple, from a combination or power set.
    Indices(&'a [usize]),
    ///An `(inner, outer)` element of a product.
    Pair(Box<Selection<'a>>, Box<Selection<'a>>),
}

impl Selection<'_> {
    ///All indices of the selection, left to right.
    #[must_use]
    pub fn flatten(&self) -> Vec<usize> {
        let mut out = vec![];
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(&self, out: &mut Vec<usize>) {
        match self {
            Selection::Scalar(x) => out.push(*x),
            Selection::Indices(x) => out.extend_from_slice(x),
            Selection::Pair(a, b) => {
                a.flatten_into(out);
                b.flatten_into(out);
            }
        }
    }
}

impl Display for Selection<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::Scalar(x) => write!(f, "{x}"),
            Selection::Indices(x) => write!(
                f,
                "{{{}}}",
                x.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Selection::Pair(a, b) => write!(f, "({a}, {b})"),
        }
    }
}

///Any index generator of this crate, chosen at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generator {
    ///See [`Range`].
    Range(Range<usize>),
    ///See [`Combinations`].
    Choose(Combinations<usize>),
    ///See [`PowerSet`].
    PowerSet(PowerSet),
    ///See [`Product`].
    Product(Box<Product<Generator, Generator>>),
}

impl Enumerable for Generator {
    type Value<'a>
        = Selection<'a>
    where
        Self: 'a;

    fn current(&self) -> Result<Selection<'_>, EnumerationError> {
        match self {
            Generator::Range(r) => r.current().map(Selection::Scalar),
            Generator::Choose(c) => c.current().map(Selection::Indices),
            Generator::PowerSet(p) => p.current().map(Selection::Indices),
            Generator::Product(p) => {
                let (inner, outer) = p.current()?;
                Ok(Selection::Pair(Box::new(inner), Box::new(outer)))
            }
        }
    }

    fn advance(&mut self) {
        match self {
            Generator::Range(r) => r.advance(),
            Generator::Choose(c) => c.advance(),
            Generator::PowerSet(p) => p.advance(),
            Generator::Product(p) => p.advance(),
        }
    }

    fn exhausted(&self) -> bool {
        match self {
            Generator::Range(r) => r.exhausted(),
            Generator::Choose(c) => c.exhausted(),
            Generator::PowerSet(p) => p.exhausted(),
            Generator::Product(p) => p.exhausted(),
        }
    }
}

///Yields flattened selections until the generator is exhausted. A power set stops after one
///cycle.
impl Iterator for Generator {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            return None;
        }
        let x = self.current().ok()?.flatten();
        self.advance();
        Some(x)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_round_trips() -> anyhow::Result<()> {
        for s in [
            "range(0, 4)",
            "choose(5, 2)",
            "powerset(3, 2)",
            "product(range(0, 2), product(choose(4, 2), powerset(2, 1)))",
        ] {
            let spec = GeneratorSpec::parse(s)?;
            assert_eq!(spec.to_string(), s);
            assert_eq!(s.parse::<GeneratorSpec>()?, spec);
        }
        Ok(())
    }

    #[test]
    fn json() -> anyhow::Result<()> {
        let spec = GeneratorSpec::from_json(r#"{"kind": "choose", "pool_size": 4, "k": 2}"#)?;
        assert_eq!(spec, GeneratorSpec::Choose { pool_size: 4, k: 2 });

        let nested = GeneratorSpec::parse("product(range(1, 3), powerset(3, 1))")?;
        let json = nested.to_json()?;
        assert!(json.contains(r#""kind":"power_set""#));
        assert_eq!(GeneratorSpec::from_json(&json)?, nested);

        assert!(matches!(
            GeneratorSpec::from_json(r#"{"kind": "shuffle"}"#),
            Err(SpecError::Json(_))
        ));
        Ok(())
    }

    #[test]
    fn lengths() -> anyhow::Result<()> {
        assert_eq!(GeneratorSpec::parse("range(3, 7)")?.len(), Some(4));
        assert_eq!(GeneratorSpec::parse("choose(6, 3)")?.len(), Some(20));
        assert_eq!(GeneratorSpec::parse("powerset(3, 2)")?.len(), Some(7));
        assert_eq!(GeneratorSpec::parse("range(7, 3)")?.len(), None);
        assert_eq!(GeneratorSpec::parse("powerset(2, 3)")?.len(), None);
        assert!(GeneratorSpec::parse("range(2, 2)")?.is_empty());
        Ok(())
    }

    #[test]
    fn built_generators_match_their_length() -> anyhow::Result<()> {
        for s in [
            "range(2, 9)",
            "choose(6, 0)",
            "choose(6, 6)",
            "choose(7, 3)",
            "powerset(4, 4)",
            "product(choose(4, 2), range(0, 3))",
            "product(powerset(3, 1), powerset(2, 2))",
        ] {
            let spec = GeneratorSpec::parse(s)?;
            let generator = spec.build()?;
            assert_eq!(Some(generator.count() as u64), spec.len(), "{s}");
        }
        Ok(())
    }

    #[test]
    fn power_set_generator_stops_after_one_cycle() -> anyhow::Result<()> {
        let g = GeneratorSpec::parse("powerset(3, 2)")?.build()?;
        let cycle = g.take(50).collect::<Vec<_>>();
        assert_eq!(cycle.len(), 7);
        assert_eq!(cycle[0], Vec::<usize>::new());
        assert_eq!(cycle[6], vec![1, 2]);

        let mut g = GeneratorSpec::parse("powerset(2, 0)")?.build()?;
        assert_eq!(g.next(), Some(vec![]));
        assert_eq!(g.next(), None);
        assert_eq!(g.next(), None);
        Ok(())
    }

    #[test]
    fn selections() -> anyhow::Result<()> {
        let mut g = GeneratorSpec::parse("product(choose(3, 2), range(5, 7))")?.build()?;
        let first = g.current()?;
        assert_eq!(first.to_string(), "({0, 1}, 5)");
        assert_eq!(first.flatten(), vec![0, 1, 5]);
        for _ in 0..5 {
            g.advance();
        }
        assert_eq!(g.current()?.to_string(), "({1, 2}, 6)");
        g.advance();
        assert!(g.exhausted());
        assert_eq!(g.current(), Err(EnumerationError::Exhausted));
        Ok(())
    }

    #[test]
    fn bad_bounds_are_rejected() -> anyhow::Result<()> {
        assert_eq!(
            GeneratorSpec::parse("choose(2, 3)")?.build(),
            Err(EnumerationError::SizeExceedsPool { k: 3, pool_size: 2 })
        );
        assert_eq!(
            GeneratorSpec::parse("product(range(0, 1), range(4, 1))")?.build(),
            Err(EnumerationError::InvertedBounds)
        );
        Ok(())
    }
}
