//! json share-bundle parsing
//!
//! expected shape, with `n`/`k` either top-level or under a `keys` object:
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "52" },
//!   "2": { "base": "2",  "value": "1000100" }
//! }
//! ```
//!
//! each value decodes under its stated radix into a big integer. shares
//! that fail to decode are skipped with a diagnostic and do not count
//! toward threshold sufficiency.

use num_bigint::BigInt;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;
use unshard::{InputSet, Share};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("input is not valid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing required key: {0}")]
    MissingKey(&'static str),

    #[error(transparent)]
    Core(#[from] unshard::Error),
}

/// parse a bundle into a validated input set
pub fn parse_bundle(input: &str) -> Result<InputSet, ParseError> {
    let root: Value = serde_json::from_str(input)?;
    let n = count_field(&root, "n")?;
    let k = count_field(&root, "k")?;

    let mut shares = Vec::new();
    let mut skipped = 0usize;
    if let Value::Object(map) = &root {
        for (key, entry) in map {
            let Ok(x) = key.parse::<i64>() else { continue };
            match decode_share(x, entry) {
                Some(share) => shares.push(share),
                None => {
                    skipped += 1;
                    warn!("skipping invalid share: x={x} entry={entry}");
                }
            }
        }
    }
    if skipped > 0 {
        warn!("total skipped invalid shares: {skipped}");
    }

    Ok(InputSet::new(n, k, shares)?)
}

// n and k are configuration; absence or a malformed value is fatal
fn count_field(root: &Value, key: &'static str) -> Result<usize, ParseError> {
    root.get(key)
        .or_else(|| root.get("keys").and_then(|keys| keys.get(key)))
        .and_then(value_as_count)
        .ok_or(ParseError::MissingKey(key))
}

fn value_as_count(v: &Value) -> Option<usize> {
    match v {
        Value::Number(n) => n.as_u64().map(|n| n as usize),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn decode_share(x: i64, entry: &Value) -> Option<Share> {
    let radix = match entry.get("base")? {
        Value::Number(n) => n.as_u64()?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    // parse_bytes panics outside this range
    if !(2..=36).contains(&radix) {
        return None;
    }
    let digits = entry.get("value")?.as_str()?.trim().to_lowercase();
    let y = BigInt::parse_bytes(digits.as_bytes(), radix as u32)?;
    Some(Share::new(x, y))
}
