//! Assorted utilities and helpers.

/// Compute an integer square root-style block size for T layers.
///
/// This is a heuristic used by [`crate::engine::RollingEngine::new`]
/// to space checkpoints evenly.
#[inline]
pub fn default_block_size(num_layers: usize) -> usize {
    if num_layers <= 1 {
        1
    } else {
        (num_layers as f64).sqrt().ceil() as usize
    }
}

/// Exact binomial coefficient `C(n, k)`.
///
/// Returns `None` when the result does not fit in `u128`. After step `i` the
/// accumulator equals `C(n-k+i, i)`, and the common factor with the divisor
/// is cancelled before multiplying, so no intermediate exceeds the result.
pub fn binomial(n: u64, k: u64) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 1..=u128::from(k) {
        let g = gcd(acc, i);
        let reduced = acc / g;
        let factor = (u128::from(n - k) + i) / (i / g);
        acc = reduced.checked_mul(factor)?;
    }
    Some(acc)
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
