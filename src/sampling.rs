//! Uniform random combinations, drawn by unranking a random position in lexicographic order.
use ahash::HashSet;
use rand::Rng;

use crate::{
    counting::{binomial, unrank},
    protocol::EnumerationError,
};

fn total(pool_size: usize, k: usize) -> Result<u64, EnumerationError> {
    if k > pool_size {
        return Err(EnumerationError::SizeExceedsPool { k, pool_size });
    }
    binomial(pool_size, k).ok_or(EnumerationError::Overflow)
}

///A uniformly random increasing `k`-tuple over `[0, pool_size)`.
///
///# Errors
///[`EnumerationError::SizeExceedsPool`] if `k > pool_size`, or [`EnumerationError::Overflow`]
///if there are more than `u64::MAX` combinations.
pub fn random_combination(
    pool_size: usize,
    k: usize,
    rng: &mut impl Rng,
) -> Result<Vec<usize>, EnumerationError> {
    let total = total(pool_size, k)?;
    unrank(rng.random_range(0..total), pool_size, k).ok_or(EnumerationError::Overflow)
}

///Up to `count` distinct random `k`-tuples over `[0, pool_size)`, in the order they were drawn.
///
///Asking for more tuples than exist returns all of them.
///
///# Errors
///As [`random_combination`].
pub fn sample_distinct(
    pool_size: usize,
    k: usize,
    count: usize,
    rng: &mut impl Rng,
) -> Result<Vec<Vec<usize>>, EnumerationError> {
    let total = total(pool_size, k)?;
    let count = usize::try_from(total).map_or(count, |total| count.min(total));
    log::debug!("Sampling {count} of {total} {k}-combinations");

    let mut seen: HashSet<u64> = HashSet::default();
    let mut samples = Vec::with_capacity(count);
    while samples.len() < count {
        let rank = rng.random_range(0..total);
        if seen.insert(rank) {
            samples.push(unrank(rank, pool_size, k).ok_or(EnumerationError::Overflow)?);
        }
    }
    Ok(samples)
}
