//! exact arbitrary-precision rationals
//!
//! every value is kept reduced with a strictly positive denominator, so
//! equality is structural and integrality is a denominator check. floating
//! point never enters: a candidate secret of 41.9999 must not be mistaken
//! for 42.

use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::{Error, Result};

/// reduced rational with `den > 0` and `gcd(|num|, den) = 1`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fraction {
    num: BigInt,
    den: BigInt,
}

impl Fraction {
    /// build `num / den`, normalizing sign and common factors
    pub fn new(num: BigInt, den: BigInt) -> Result<Self> {
        if den.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::reduced(num, den))
    }

    /// whole number `n / 1`
    pub fn from_integer(n: BigInt) -> Self {
        Self {
            num: n,
            den: BigInt::one(),
        }
    }

    // den must be non-zero; sign moves into num, common factors cancel
    fn reduced(mut num: BigInt, mut den: BigInt) -> Self {
        debug_assert!(!den.is_zero());
        if den.is_negative() {
            num = -num;
            den = -den;
        }
        let g = num.gcd(&den);
        if !g.is_one() {
            num /= &g;
            den /= &g;
        }
        Self { num, den }
    }

    pub fn numer(&self) -> &BigInt {
        &self.num
    }

    pub fn denom(&self) -> &BigInt {
        &self.den
    }

    pub fn add(&self, other: &Self) -> Self {
        Self::reduced(
            &self.num * &other.den + &other.num * &self.den,
            &self.den * &other.den,
        )
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self::reduced(
            &self.num * &other.den - &other.num * &self.den,
            &self.den * &other.den,
        )
    }

    pub fn mul(&self, other: &Self) -> Self {
        Self::reduced(&self.num * &other.num, &self.den * &other.den)
    }

    /// fails when `other` is zero
    pub fn div(&self, other: &Self) -> Result<Self> {
        if other.num.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::reduced(&self.num * &other.den, &self.den * &other.num))
    }

    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// non-failing integrality probe; the search loop hits the `None` side
    /// on most candidates, so it is ordinary control flow, not an error
    pub fn as_integer(&self) -> Option<&BigInt> {
        self.is_integer().then_some(&self.num)
    }

    /// numerator of an integral value; call only where integrality is a
    /// precondition
    pub fn to_integer_exact(&self) -> Result<BigInt> {
        self.as_integer()
            .cloned()
            .ok_or_else(|| Error::NotIntegral(self.to_string()))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}
