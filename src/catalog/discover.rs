use super::search::CombinationSummary;
use super::Catalog;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Samples up to `count` distinct combinations with harmony of at least
/// `min_harmony`. A seed makes the draw reproducible.
pub fn random_combinations(
    catalog: &Catalog,
    count: usize,
    min_harmony: i32,
    seed: Option<u64>,
) -> Vec<CombinationSummary> {
    match seed {
        Some(seed) => sample(catalog, count, min_harmony, &mut StdRng::seed_from_u64(seed)),
        None => sample(catalog, count, min_harmony, &mut rand::thread_rng()),
    }
}

fn sample<R: Rng + ?Sized>(
    catalog: &Catalog,
    count: usize,
    min_harmony: i32,
    rng: &mut R,
) -> Vec<CombinationSummary> {
    let eligible = catalog
        .combinations
        .iter()
        .filter(|combo| combo.harmony() >= min_harmony)
        .collect::<Vec<_>>();
    tracing::debug!(eligible = eligible.len(), count, "sampling combinations");
    eligible
        .choose_multiple(rng, count.min(eligible.len()))
        .map(|combo| CombinationSummary::from(*combo))
        .collect()
}
