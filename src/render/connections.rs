//! Proximity connections between entity pairs
//!
//! Every unordered pair `(i, j)` with `i < j` is evaluated once per frame:
//! `n * (n - 1) / 2` candidates, no self pairs, no repeats. At the entity
//! counts used here (under ~80) the quadratic pass is cheaper than
//! maintaining a spatial index.

use crate::models::Entity;

/// A pair close enough to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
    pub opacity: f64,
}

/// All unordered index pairs `(i, j)` with `i < j < n`
pub fn candidate_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

/// Number of pairs [`candidate_pairs`] yields for `n` entities
pub const fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Linear falloff: `base` at distance 0, reaching 0 at `threshold`
///
/// Returns `None` at or beyond the threshold (and for NaN distances), so
/// callers draw nothing for those pairs.
pub fn connection_opacity(distance: f64, threshold: f64, base: f64) -> Option<f64> {
    (distance >= 0.0 && distance < threshold).then(|| base * (1.0 - distance / threshold))
}

/// Evaluate a single pair
pub fn evaluate_pair(
    entities: &[Entity],
    a: usize,
    b: usize,
    threshold: f64,
    base: f64,
) -> Option<Connection> {
    let first = entities.get(a)?;
    let second = entities.get(b)?;
    let distance = first.position.distance(&second.position);
    connection_opacity(distance, threshold, base).map(|opacity| Connection {
        a,
        b,
        distance,
        opacity,
    })
}

/// Every drawable connection among `entities`
pub fn connections(
    entities: &[Entity],
    threshold: f64,
    base: f64,
) -> impl Iterator<Item = Connection> + '_ {
    candidate_pairs(entities.len())
        .filter_map(move |(a, b)| evaluate_pair(entities, a, b, threshold, base))
}
