//! terminal result of a recovery run
//!
//! consumed by the CLI formatter; `Display` renders the three-line report
//! the tool prints.

use std::fmt;

use num_bigint::BigInt;
use serde::Serialize;

/// shares the winning polynomial rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BadShares {
    /// no subset produced an integral secret; every share is suspect
    All,
    /// x coordinates disagreeing with the best-fit polynomial (may be empty)
    Xs(Vec<i64>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// `None` means undetermined
    pub secret: Option<BigInt>,
    pub bad_shares: BadShares,
    /// shares agreeing with the winner
    pub agree: usize,
    /// shares considered
    pub total: usize,
}

impl Report {
    pub fn undetermined(total: usize) -> Self {
        Self {
            secret: None,
            bad_shares: BadShares::All,
            agree: 0,
            total,
        }
    }

    pub fn accuracy_percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            100.0 * self.agree as f64 / self.total as f64
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.secret {
            Some(secret) => writeln!(f, "secret: {secret}")?,
            None => writeln!(f, "secret: UNDETERMINED")?,
        }
        match &self.bad_shares {
            BadShares::All => writeln!(f, "bad_shares: ALL")?,
            BadShares::Xs(xs) => {
                let rendered: Vec<String> = xs.iter().map(|x| x.to_string()).collect();
                writeln!(f, "bad_shares: [{}]", rendered.join(", "))?;
            }
        }
        write!(
            f,
            "accuracy: {} / {} ({:.2}%)",
            self.agree,
            self.total,
            self.accuracy_percent()
        )
    }
}
