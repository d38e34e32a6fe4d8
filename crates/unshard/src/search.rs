//! exhaustive best-fit scan over threshold-sized share subsets
//!
//! every k-subset is interpolated at zero; subsets whose secret is not an
//! integer are discarded. the rest are scored by how many of the shares
//! (all of them, not just the subset) match the subset's polynomial at
//! their own x. the first subset in enumeration order to reach the highest
//! agreement count wins.

use num_bigint::BigInt;

use crate::combinations::Combinations;
use crate::interpolate::lagrange_at;
use crate::report::{BadShares, Report};
use crate::share::InputSet;
use crate::Result;

/// best candidate seen so far
struct Best {
    secret: BigInt,
    mask: Vec<bool>,
    agree: usize,
    /// enumeration ordinal of the winning subset, the tie-break key for
    /// the parallel scan
    ord: usize,
}

/// recover the secret and flag disagreeing shares
///
/// cost is `O(C(n, k) * n * k)` exact-rational operations, exponential in
/// `min(k, n - k)`. thresholds are small in practice; a caller that needs a
/// bound must impose an external deadline.
///
/// an all-shares-inconsistent bundle yields an undetermined report, not an
/// error. duplicate x coordinates fail with `Error::DivisionByZero`.
pub fn recover(set: &InputSet) -> Result<Report> {
    let n = set.shares().len();
    let k = set.threshold();
    let best = scan(set, n, k)?;
    Ok(match best {
        None => Report::undetermined(n),
        Some(best) => {
            let bad: Vec<i64> = set
                .shares()
                .iter()
                .zip(&best.mask)
                .filter(|(_, ok)| !**ok)
                .map(|(s, _)| s.x)
                .collect();
            Report {
                secret: Some(best.secret),
                bad_shares: BadShares::Xs(bad),
                agree: best.agree,
                total: n,
            }
        }
    })
}

/// interpolate one subset and score it against every share
fn score(set: &InputSet, subset: &[usize], ord: usize) -> Result<Option<Best>> {
    let shares = set.shares();
    let points: Vec<(i64, BigInt)> = subset
        .iter()
        .map(|&i| (shares[i].x, shares[i].y.clone()))
        .collect();

    let at_zero = lagrange_at(&points, 0)?;
    let secret = match at_zero.as_integer() {
        Some(secret) => secret.clone(),
        // non-integral secret: not a fault, just not a valid candidate
        None => return Ok(None),
    };

    let mut mask = vec![false; shares.len()];
    let mut agree = 0;
    for (t, share) in shares.iter().enumerate() {
        let predicted = lagrange_at(&points, share.x)?;
        if predicted.as_integer() == Some(&share.y) {
            mask[t] = true;
            agree += 1;
        }
    }

    Ok(Some(Best {
        secret,
        mask,
        agree,
        ord,
    }))
}

// a strictly higher agreement count wins; on equal counts the earlier
// subset in enumeration order is kept. this is exactly the winner the
// sequential strict-greater fold retains.
fn better(a: Best, b: Best) -> Best {
    if b.agree > a.agree || (b.agree == a.agree && b.ord < a.ord) {
        b
    } else {
        a
    }
}

fn merge(a: Option<Best>, b: Option<Best>) -> Option<Best> {
    match (a, b) {
        (Some(a), Some(b)) => Some(better(a, b)),
        (a, None) => a,
        (None, b) => b,
    }
}

#[cfg(not(feature = "parallel"))]
fn scan(set: &InputSet, n: usize, k: usize) -> Result<Option<Best>> {
    let mut best: Option<Best> = None;
    for (ord, subset) in Combinations::new(n, k).enumerate() {
        let candidate = score(set, &subset, ord)?;
        best = merge(best, candidate);
    }
    Ok(best)
}

#[cfg(feature = "parallel")]
fn scan(set: &InputSet, n: usize, k: usize) -> Result<Option<Best>> {
    use rayon::iter::{ParallelBridge, ParallelIterator};

    Combinations::new(n, k)
        .enumerate()
        .par_bridge()
        .map(|(ord, subset)| score(set, &subset, ord))
        .try_reduce(|| None, |a, b| Ok(merge(a, b)))
}
