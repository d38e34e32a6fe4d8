//! # unshard
//!
//! recover the secret of a shamir-style sharing (degree k-1 integer
//! polynomial, secret = f(0)) from n shares when some of them may be
//! corrupted, without knowing in advance which.
//!
//! ## pipeline
//!
//! ```text
//! ┌──────────┐   k-subsets    ┌────────────┐  f(0), f(x_t)  ┌──────────┐
//! │ InputSet ├───────────────►│   search   ├───────────────►│ lagrange │
//! │ (n, k,   │  lexicographic │ best-fit   │ exact Fraction │  basis   │
//! │  shares) │     order      │  voting    │   arithmetic   │ products │
//! └──────────┘                └─────┬──────┘                └──────────┘
//!                                   │ strict-greater agreement,
//!                                   │ first subset wins ties
//!                                   ▼
//!                             ┌──────────┐
//!                             │  Report  │  secret / UNDETERMINED,
//!                             └──────────┘  bad shares, accuracy
//! ```
//!
//! every candidate subset is interpolated with loss-free rationals: a
//! secret that comes out as 503/12 is rejected as non-integral rather than
//! rounded. agreement is counted over all n shares, so a corrupted share
//! is exactly one the winning polynomial fails to predict.
//!
//! ## usage
//!
//! ```rust
//! use num_bigint::BigInt;
//! use unshard::{recover, InputSet, Share};
//!
//! // f(x) = 42 + 7x + 3x^2, share 4 corrupted
//! let shares = vec![
//!     Share::new(1, BigInt::from(52)),
//!     Share::new(2, BigInt::from(68)),
//!     Share::new(3, BigInt::from(90)),
//!     Share::new(4, BigInt::from(999)),
//! ];
//! let set = InputSet::new(4, 3, shares)?;
//! let report = recover(&set)?;
//! assert_eq!(report.secret, Some(BigInt::from(42)));
//! # Ok::<(), unshard::Error>(())
//! ```

pub mod combinations;
pub mod error;
pub mod fraction;
pub mod interpolate;
pub mod report;
pub mod search;
pub mod share;

pub use combinations::Combinations;
pub use error::{Error, Result};
pub use fraction::Fraction;
pub use interpolate::lagrange_at;
pub use report::{BadShares, Report};
pub use search::recover;
pub use share::{InputSet, Share};
