//! Small helpers shared by the agents

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

/// Seeded generator when `seed` is given, otherwise one seeded from the
/// thread-local generator.
pub fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Every item whose score equals the maximum, in input order.
///
/// # Examples
///
/// ```
/// use pacai::utils::best_scored;
///
/// let best = best_scored(vec![('a', 1.0), ('b', 3.0), ('c', 3.0)]);
/// assert_eq!(best, vec!['b', 'c']);
/// assert!(best_scored(Vec::<(char, f64)>::new()).is_empty());
/// ```
pub fn best_scored<A>(scored: impl IntoIterator<Item = (A, f64)>) -> Vec<A> {
    let mut best = Vec::new();
    let mut top = f64::NEG_INFINITY;
    for (item, score) in scored {
        if score > top || best.is_empty() {
            top = score;
            best.clear();
            best.push(item);
        } else if score == top {
            best.push(item);
        }
    }
    best
}

/// Uniformly random item among those with the maximum score.
pub fn choose_best<A: Clone, R: Rng + ?Sized>(
    scored: impl IntoIterator<Item = (A, f64)>,
    rng: &mut R,
) -> Option<A> {
    best_scored(scored).choose(rng).cloned()
}
