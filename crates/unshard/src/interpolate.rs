//! lagrange interpolation in exact rational arithmetic
//!
//! `f(xq) = sum_i y_i * prod_{j != i} (xq - x_j) / (x_i - x_j)`
//!
//! evaluated at xq = 0 this recovers the secret; evaluated at a share's own
//! x it predicts what that share should have revealed.

use num_bigint::BigInt;
use num_traits::Zero;

use crate::fraction::Fraction;
use crate::Result;

/// evaluate the unique degree-(len-1) polynomial through `points` at `xq`
///
/// x coordinates must be pairwise distinct; a duplicate zeroes a basis
/// denominator and fails with `Error::DivisionByZero`.
pub fn lagrange_at(points: &[(i64, BigInt)], xq: i64) -> Result<Fraction> {
    let mut sum = Fraction::from_integer(BigInt::zero());
    for (i, (xi, yi)) in points.iter().enumerate() {
        let mut term = Fraction::from_integer(yi.clone());
        for (j, (xj, _)) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let basis = Fraction::new(
                BigInt::from(xq) - BigInt::from(*xj),
                BigInt::from(*xi) - BigInt::from(*xj),
            )?;
            term = term.mul(&basis);
        }
        sum = sum.add(&term);
    }
    Ok(sum)
}
