//! Counting, ranking and unranking of combinations in lexicographic order.

///The binomial coefficient `C(n, k)`, or `None` if it does not fit in a `u64`.
///
///```
///# use combinate::counting::binomial;
///assert_eq!(binomial(4, 2), Some(6));
///assert_eq!(binomial(2, 4), Some(0));
///```
#[must_use]
pub fn binomial(n: usize, k: usize) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc * (n - i) is always divisible by i + 1 here.
        acc = acc.checked_mul((n - i) as u128)? / (i as u128 + 1);
    }
    u64::try_from(acc).ok()
}

///Position of a strictly increasing index tuple among all `C(pool_size, k)` tuples,
///counted in lexicographic order.
///
///Returns `None` if the tuple is not strictly increasing, leaves `[0, pool_size)`, or the
///rank overflows.
#[must_use]
pub fn rank(indices: &[usize], pool_size: usize) -> Option<u64> {
    let k = indices.len();
    let mut rank: u64 = 0;
    let mut next = 0;
    for (i, &x) in indices.iter().enumerate() {
        if x < next || x >= pool_size {
            return None;
        }
        for skipped in next..x {
            rank = rank.checked_add(binomial(pool_size - skipped - 1, k - i - 1)?)?;
        }
        next = x + 1;
    }
    Some(rank)
}

///Inverse of [`rank`]: the `rank`-th size `k` tuple over `[0, pool_size)`.
#[must_use]
pub fn unrank(mut rank: u64, pool_size: usize, k: usize) -> Option<Vec<usize>> {
    if rank >= binomial(pool_size, k)? {
        return None;
    }
    let mut indices = Vec::with_capacity(k);
    let mut x = 0;
    for i in 0..k {
        loop {
            let below = binomial(pool_size - x - 1, k - i - 1)?;
            if rank < below {
                indices.push(x);
                x += 1;
                break;
            }
            rank -= below;
            x += 1;
        }
    }
    Some(indices)
}
