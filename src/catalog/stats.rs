use super::Catalog;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibraryStats {
    pub library_size: LibrarySize,
    pub average_scores: AverageScores,
    pub high_quality_combinations: HighQualityCounts,
    pub temporal_distribution: BTreeMap<String, usize>,
    pub cache_location: String,
    pub catalog_digest: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibrarySize {
    pub total_magazines: usize,
    pub total_photography_styles: usize,
    pub total_combinations: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AverageScores {
    pub harmony: f64,
    pub technical: f64,
    pub aesthetic: f64,
    pub creative_tension: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighQualityCounts {
    pub harmony_8_plus: usize,
    pub harmony_9_plus: usize,
    pub tension_7_plus: usize,
    pub tension_8_plus: usize,
}

fn average(values: impl Iterator<Item = i32>) -> f64 {
    let (sum, count) = values.fold((0i64, 0usize), |(sum, count), value| {
        (sum + i64::from(value), count + 1)
    });
    if count == 0 {
        return 0.0;
    }
    let mean = sum as f64 / count as f64;
    (mean * 100.0).round() / 100.0
}

pub fn library_stats(catalog: &Catalog) -> LibraryStats {
    let combos = &catalog.combinations;
    let count_where = |predicate: &dyn Fn(i32, i32) -> bool| {
        combos
            .iter()
            .filter(|combo| predicate(combo.harmony(), combo.tension()))
            .count()
    };

    let mut temporal_distribution = BTreeMap::new();
    for combo in combos {
        *temporal_distribution
            .entry(combo.compatibility.temporal_alignment.to_string())
            .or_insert(0) += 1;
    }

    LibraryStats {
        library_size: LibrarySize {
            total_magazines: catalog.magazines.len(),
            total_photography_styles: catalog.photography.len(),
            total_combinations: combos.len(),
        },
        average_scores: AverageScores {
            harmony: average(combos.iter().map(|combo| combo.harmony())),
            technical: average(combos.iter().map(|combo| combo.compatibility.technical_score)),
            aesthetic: average(combos.iter().map(|combo| combo.compatibility.aesthetic_score)),
            creative_tension: average(combos.iter().map(|combo| combo.tension())),
        },
        high_quality_combinations: HighQualityCounts {
            harmony_8_plus: count_where(&|harmony, _| harmony >= 8),
            harmony_9_plus: count_where(&|harmony, _| harmony >= 9),
            tension_7_plus: count_where(&|_, tension| tension >= 7),
            tension_8_plus: count_where(&|_, tension| tension >= 8),
        },
        temporal_distribution,
        cache_location: catalog.cache_dir.display().to_string(),
        catalog_digest: catalog.digest.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;
    use tempfile::TempDir;

    #[test]
    fn stats_summarise_fixture_catalog() {
        let dir = TempDir::new().expect("temp dir should be created");
        fixtures::write_cache(dir.path());
        let catalog = Catalog::load(dir.path()).expect("catalog should load");

        let stats = library_stats(&catalog);
        assert_eq!(stats.library_size.total_magazines, 2);
        assert_eq!(stats.library_size.total_photography_styles, 2);
        assert_eq!(stats.library_size.total_combinations, 3);

        // harmony 9, 6, 8 -> 7.67
        assert_eq!(stats.average_scores.harmony, 7.67);
        assert_eq!(stats.average_scores.technical, 7.0);
        assert_eq!(stats.average_scores.creative_tension, 6.0);

        assert_eq!(stats.high_quality_combinations.harmony_8_plus, 2);
        assert_eq!(stats.high_quality_combinations.harmony_9_plus, 1);
        assert_eq!(stats.high_quality_combinations.tension_7_plus, 2);
        assert_eq!(stats.high_quality_combinations.tension_8_plus, 1);

        assert_eq!(stats.temporal_distribution.get("era_matched"), Some(&1));
        assert_eq!(
            stats.temporal_distribution.get("creative_anachronism"),
            Some(&1)
        );
        assert_eq!(stats.temporal_distribution.get("temporal_clash"), Some(&1));
        assert_eq!(stats.catalog_digest, catalog.digest);
    }

    #[test]
    fn average_of_nothing_is_zero() {
        assert_eq!(average(std::iter::empty()), 0.0);
        assert_eq!(average([1, 2].into_iter()), 1.5);
    }
}
