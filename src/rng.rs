//! Construction of the generators that draw treap priorities.

use rand::{SeedableRng, XorShiftRng};
use std::time::{SystemTime, UNIX_EPOCH};

// Mixed into the seed so that no `u64` maps to the all-zero state, which `XorShiftRng` rejects.
const SEED_MASK: [u32; 2] = [0x9783_0e05, 0x113b_a7bb];

fn seed_words(seed: u64) -> [u32; 4] {
    let low = seed as u32;
    let high = (seed >> 32) as u32;
    [low, high, low ^ SEED_MASK[0], high ^ SEED_MASK[1]]
}

/// Returns a generator whose output is fully determined by `seed`.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use treap_height::rng;
///
/// assert_eq!(rng::from_seed(7).next_u32(), rng::from_seed(7).next_u32());
/// ```
pub fn from_seed(seed: u64) -> XorShiftRng {
    XorShiftRng::from_seed(seed_words(seed))
}

/// Returns a generator seeded from the system clock.
pub fn time_seeded() -> XorShiftRng {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs() ^ u64::from(duration.subsec_nanos()).rotate_left(32))
        .unwrap_or(0);
    from_seed(seed)
}
