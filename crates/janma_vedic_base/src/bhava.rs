//! Whole-sign bhava (house) mapping.
//!
//! The lagna's rashi is bhava 1 and each following rashi is the next
//! bhava, independent of degree within the sign:
//!
//! `bhava = ((body_rashi − lagna_rashi + 12) mod 12) + 1`
//!
//! Every caller (chart output, layouts, grouping) goes through
//! [`whole_sign_bhava`].

use crate::rashi::{ALL_RASHIS, Rashi};

/// Number of bhavas in a chart.
pub const BHAVA_COUNT: u8 = 12;

/// Bhava (1-12) of a body in `body` counted from the lagna rashi.
pub const fn whole_sign_bhava(body: Rashi, lagna: Rashi) -> u8 {
    (body.index() + BHAVA_COUNT - lagna.index()) % BHAVA_COUNT + 1
}

/// Index form of [`whole_sign_bhava`]; None if either index is not 0-11.
pub fn bhava_from_indices(body_rashi_index: u8, lagna_rashi_index: u8) -> Option<u8> {
    let body = Rashi::from_index(body_rashi_index)?;
    let lagna = Rashi::from_index(lagna_rashi_index)?;
    Some(whole_sign_bhava(body, lagna))
}

/// Rashi occupying a bhava (1-12) for a given lagna rashi.
///
/// Returns None if `bhava` is not in 1..=12.
pub fn rashi_for_bhava(bhava: u8, lagna: Rashi) -> Option<Rashi> {
    if !(1..=BHAVA_COUNT).contains(&bhava) {
        return None;
    }
    let idx = (lagna.index() + bhava - 1) % BHAVA_COUNT;
    Some(ALL_RASHIS[idx as usize])
}

/// Group placements into bhavas. Slot 0 holds bhava 1.
///
/// Order within a bhava follows input order.
pub fn group_by_bhava<T, I>(placements: I, lagna: Rashi) -> [Vec<T>; 12]
where
    I: IntoIterator<Item = (T, Rashi)>,
{
    let mut houses: [Vec<T>; 12] = std::array::from_fn(|_| Vec::new());
    for (item, rashi) in placements {
        let bhava = whole_sign_bhava(rashi, lagna);
        houses[(bhava - 1) as usize].push(item);
    }
    houses
}
