//! share and input-set types

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// one revealed point (x, f(x)) of the sharing polynomial
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    /// identifying coordinate, distinct per share
    pub x: i64,
    /// revealed polynomial value
    pub y: BigInt,
}

impl Share {
    pub fn new(x: i64, y: BigInt) -> Self {
        Self { x, y }
    }
}

/// validated share bundle the search runs over
///
/// shares are ordered by x ascending so the subset enumeration, and with it
/// the tie-break, is deterministic for a given bundle.
#[derive(Debug, Clone)]
pub struct InputSet {
    declared_n: usize,
    threshold: usize,
    shares: Vec<Share>,
}

impl InputSet {
    /// sort by x and check that at least `threshold` shares survived parsing
    pub fn new(declared_n: usize, threshold: usize, mut shares: Vec<Share>) -> Result<Self> {
        if shares.len() < threshold {
            return Err(Error::InsufficientShares {
                have: shares.len(),
                need: threshold,
            });
        }
        shares.sort_by_key(|s| s.x);
        Ok(Self {
            declared_n,
            threshold,
            shares,
        })
    }

    /// share count the dealer declared; may exceed what actually decoded
    pub fn declared_n(&self) -> usize {
        self.declared_n
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn shares(&self) -> &[Share] {
        &self.shares
    }
}
