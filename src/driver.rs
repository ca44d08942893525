//! Reads `(key, value)` pairs, loads them into a treap and reports the resulting height.

use crate::treap::Treap;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Read};
use std::result;
use thiserror::Error;

/// Errors raised while loading input into a treap.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("token {index} is not an integer: {token:?}")]
    Parse { index: usize, token: String },
    #[error("sanity check failed for key {key}")]
    SanityCheck { key: i64 },
    #[error("sanity check failed: holds {actual} keys, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },
}

pub type Result<T> = result::Result<T, Error>;

/// Options of a single driver run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Load the pairs into an ordered map instead of a treap.
    pub baseline: bool,
    /// Verify membership of every loaded key and of the gaps between them.
    pub sanity_check: bool,
    /// Seed for node priorities. The system clock is used when absent.
    pub seed: Option<u64>,
}

/// The outcome of a driver run.
#[derive(Clone, Debug, PartialEq)]
pub enum Report {
    Treap { height: usize, pairs: usize },
    Baseline { pairs: usize },
}

/// Returns the height bound of a red-black tree with `pairs` keys, `2 * ln(pairs)`.
pub fn red_black_height(pairs: usize) -> f64 {
    if pairs == 0 {
        0.0
    } else {
        2.0 * (pairs as f64).ln()
    }
}

/// Formats `value` with at most `digits` significant digits and no trailing zeros, without
/// switching to exponent notation.
fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }
    let exponent = value.abs().log10().floor() as i32;
    let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
    let formatted = format!("{:.*}", decimals, value);
    if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        formatted
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Report::Treap { height, pairs } => write!(
                f,
                "Height is {} for RB it is {}",
                height,
                format_significant(red_black_height(pairs), 6),
            ),
            Report::Baseline { .. } => write!(f, "Height not supported :("),
        }
    }
}

/// Parses whitespace separated integers into `(key, value)` pairs. A trailing unpaired token is
/// dropped.
///
/// # Examples
///
/// ```
/// use treap_height::driver;
///
/// let pairs = driver::parse_pairs("1 2\n3 4").unwrap();
/// assert_eq!(pairs, vec![(1, 2), (3, 4)]);
/// assert!(driver::parse_pairs("1 x").is_err());
/// ```
pub fn parse_pairs(input: &str) -> Result<Vec<(i64, i64)>> {
    let mut values = Vec::new();
    for (index, token) in input.split_whitespace().enumerate() {
        let value = token.parse::<i64>().map_err(|_| Error::Parse {
            index,
            token: token.to_string(),
        })?;
        values.push(value);
    }

    if values.len() % 2 == 1 {
        warn!("ignoring unpaired trailing token {}", values[values.len() - 1]);
    }

    Ok(values
        .chunks(2)
        .filter(|chunk| chunk.len() == 2)
        .map(|chunk| (chunk[0], chunk[1]))
        .collect())
}

fn sanity_check<F>(len: usize, contains: F, pairs: &[(i64, i64)]) -> Result<()>
where
    F: Fn(&i64) -> bool,
{
    let mut keys: Vec<i64> = pairs.iter().map(|&(key, _)| key).collect();
    keys.sort();
    keys.dedup();

    if len != keys.len() {
        return Err(Error::SizeMismatch {
            expected: keys.len(),
            actual: len,
        });
    }

    for (index, &key) in keys.iter().enumerate() {
        if !contains(&key) {
            return Err(Error::SanityCheck { key });
        }
        if let Some(absent) = key.checked_add(1) {
            let is_gap = keys.get(index + 1).map_or(true, |&next| next > absent);
            if is_gap && contains(&absent) {
                return Err(Error::SanityCheck { key: absent });
            }
        }
    }
    debug!("sanity check passed for {} keys", keys.len());
    Ok(())
}

/// Loads `pairs` into a treap, or into an ordered map in baseline mode, and reports the result.
pub fn load(config: &Config, pairs: &[(i64, i64)]) -> Result<Report> {
    if config.baseline {
        let mut map = BTreeMap::new();
        for &(key, value) in pairs {
            map.insert(key, value);
        }
        debug!("loaded {} pairs into baseline map of {} keys", pairs.len(), map.len());
        if config.sanity_check {
            sanity_check(map.len(), |key| map.contains_key(key), pairs)?;
        }
        return Ok(Report::Baseline { pairs: pairs.len() });
    }

    let mut treap = match config.seed {
        Some(seed) => Treap::with_seed(seed),
        None => Treap::new(),
    };
    for &(key, value) in pairs {
        treap.insert(key, value);
    }
    debug!("loaded {} pairs into treap of {} keys", pairs.len(), treap.len());

    if config.sanity_check {
        sanity_check(treap.len(), |key| treap.contains(key), pairs)?;
    }

    Ok(Report::Treap {
        height: treap.height(),
        pairs: pairs.len(),
    })
}

/// Reads all of `reader` and runs [`load`] over the parsed pairs.
pub fn run<R: Read>(config: &Config, mut reader: R) -> Result<Report> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    let pairs = parse_pairs(&input)?;
    debug!("read {} pairs", pairs.len());
    load(config, &pairs)
}
