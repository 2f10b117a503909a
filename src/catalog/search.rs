use super::{format_id, Catalog};
use crate::types::record::Combination;
use crate::types::taxonomy::TemporalAlignment;
use serde::Serialize;

#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub text: Option<String>,
    pub min_harmony: Option<i32>,
    pub max_harmony: Option<i32>,
    pub min_tension: Option<i32>,
    pub magazine: Option<String>,
    pub photography: Option<String>,
    pub temporal_alignment: Option<TemporalAlignment>,
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinationSummary {
    pub combination_id: String,
    pub name: String,
    pub tagline: String,
    pub magazine: String,
    pub photography: String,
    pub harmony: i32,
    pub tension: i32,
    pub temporal_alignment: TemporalAlignment,
}

impl From<&Combination> for CombinationSummary {
    fn from(combo: &Combination) -> Self {
        Self {
            combination_id: combo.id.clone(),
            name: combo.description.name.clone(),
            tagline: combo.description.tagline.clone(),
            magazine: format_id(&combo.magazine_id),
            photography: format_id(&combo.photography_id),
            harmony: combo.harmony(),
            tension: combo.tension(),
            temporal_alignment: combo.compatibility.temporal_alignment,
        }
    }
}

fn matches_text(combo: &Combination, needle: &str) -> bool {
    combo.description.name.to_lowercase().contains(needle)
        || combo
            .description
            .full_description
            .to_lowercase()
            .contains(needle)
        || combo.prompt_keywords.join(" ").to_lowercase().contains(needle)
        || combo
            .suggested_subjects
            .join(" ")
            .to_lowercase()
            .contains(needle)
}

impl SearchQuery {
    fn accepts(&self, combo: &Combination) -> bool {
        if let Some(text) = &self.text {
            if !matches_text(combo, &text.to_lowercase()) {
                return false;
            }
        }
        if self.min_harmony.is_some_and(|min| combo.harmony() < min) {
            return false;
        }
        if self.max_harmony.is_some_and(|max| combo.harmony() > max) {
            return false;
        }
        if self.min_tension.is_some_and(|min| combo.tension() < min) {
            return false;
        }
        if let Some(magazine) = &self.magazine {
            if !combo
                .magazine_id
                .to_lowercase()
                .contains(&magazine.to_lowercase())
            {
                return false;
            }
        }
        if let Some(photography) = &self.photography {
            if !combo
                .photography_id
                .to_lowercase()
                .contains(&photography.to_lowercase())
            {
                return false;
            }
        }
        self.temporal_alignment
            .map_or(true, |alignment| combo.compatibility.temporal_alignment == alignment)
    }
}

/// Empty filters are treated as absent. Results keep catalog order.
pub fn search(catalog: &Catalog, query: &SearchQuery) -> Vec<CombinationSummary> {
    let query = SearchQuery {
        text: query.text.clone().filter(|text| !text.is_empty()),
        magazine: query.magazine.clone().filter(|value| !value.is_empty()),
        photography: query.photography.clone().filter(|value| !value.is_empty()),
        ..query.clone()
    };
    let results = catalog
        .combinations
        .iter()
        .filter(|combo| query.accepts(combo))
        .take(query.limit)
        .map(CombinationSummary::from)
        .collect::<Vec<_>>();
    tracing::debug!(matches = results.len(), limit = query.limit, "search complete");
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;
    use tempfile::TempDir;

    fn catalog() -> Catalog {
        let dir = TempDir::new().expect("temp dir should be created");
        fixtures::write_cache(dir.path());
        Catalog::load(dir.path()).expect("catalog should load")
    }

    fn query() -> SearchQuery {
        SearchQuery {
            limit: 20,
            ..SearchQuery::default()
        }
    }

    fn ids(results: &[CombinationSummary]) -> Vec<&str> {
        results
            .iter()
            .map(|result| result.combination_id.as_str())
            .collect()
    }

    #[test]
    fn text_query_searches_descriptions_keywords_and_subjects() {
        let catalog = catalog();
        let by_description = search(
            &catalog,
            &SearchQuery {
                text: Some("VINTAGE".to_string()),
                ..query()
            },
        );
        assert_eq!(
            ids(&by_description),
            vec![
                "life_1960s__documentary_photography",
                "wired_2010s__documentary_photography"
            ]
        );

        let by_subject = search(
            &catalog,
            &SearchQuery {
                text: Some("server rooms".to_string()),
                ..query()
            },
        );
        assert_eq!(ids(&by_subject), vec!["wired_2010s__documentary_photography"]);

        let by_keyword = search(
            &catalog,
            &SearchQuery {
                text: Some("brutalist".to_string()),
                ..query()
            },
        );
        assert_eq!(
            ids(&by_keyword),
            vec!["life_1960s__architectural_photography"]
        );
    }

    #[test]
    fn harmony_and_tension_bounds_are_inclusive() {
        let catalog = catalog();
        let results = search(
            &catalog,
            &SearchQuery {
                min_harmony: Some(8),
                max_harmony: Some(8),
                ..query()
            },
        );
        assert_eq!(ids(&results), vec!["wired_2010s__documentary_photography"]);

        let tense = search(
            &catalog,
            &SearchQuery {
                min_tension: Some(7),
                ..query()
            },
        );
        assert_eq!(tense.len(), 2);
    }

    #[test]
    fn id_filters_are_case_insensitive_substrings() {
        let catalog = catalog();
        let results = search(
            &catalog,
            &SearchQuery {
                magazine: Some("LIFE".to_string()),
                photography: Some("documentary".to_string()),
                ..query()
            },
        );
        assert_eq!(ids(&results), vec!["life_1960s__documentary_photography"]);
        assert_eq!(results[0].magazine, "Life 1960s");
        assert_eq!(results[0].photography, "Documentary Photography");
    }

    #[test]
    fn temporal_filter_and_limit() {
        let catalog = catalog();
        let clashes = search(
            &catalog,
            &SearchQuery {
                temporal_alignment: Some(TemporalAlignment::TemporalClash),
                ..query()
            },
        );
        assert_eq!(ids(&clashes), vec!["wired_2010s__documentary_photography"]);

        let limited = search(
            &catalog,
            &SearchQuery {
                limit: 1,
                ..query()
            },
        );
        assert_eq!(ids(&limited), vec!["life_1960s__documentary_photography"]);
    }

    #[test]
    fn empty_text_filters_match_everything() {
        let catalog = catalog();
        let results = search(
            &catalog,
            &SearchQuery {
                text: Some(String::new()),
                magazine: Some(String::new()),
                ..query()
            },
        );
        assert_eq!(results.len(), 3);
    }
}
