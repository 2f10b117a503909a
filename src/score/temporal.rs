use crate::types::taxonomy::TemporalAlignment;

struct EraAssociation {
    era_markers: &'static [&'static str],
    style_markers: &'static [&'static str],
}

// Checked top to bottom; the first era whose marker appears in the label
// decides the outcome even when none of its style markers match.
const ERA_ASSOCIATIONS: &[EraAssociation] = &[
    EraAssociation {
        era_markers: &["1960", "1970"],
        style_markers: &["documentary", "street", "studio", "fashion"],
    },
    EraAssociation {
        era_markers: &["contemporary", "2000", "2010"],
        style_markers: &["cinematic", "drone"],
    },
];

/// Era markers match the label verbatim; style markers ignore case.
pub fn temporal_alignment(era_label: &str, style_name: &str) -> TemporalAlignment {
    let style = style_name.to_lowercase();
    let Some(association) = ERA_ASSOCIATIONS.iter().find(|association| {
        association
            .era_markers
            .iter()
            .any(|marker| era_label.contains(marker))
    }) else {
        return TemporalAlignment::CreativeAnachronism;
    };

    if association
        .style_markers
        .iter()
        .any(|marker| style.contains(marker))
    {
        TemporalAlignment::EraMatched
    } else {
        TemporalAlignment::CreativeAnachronism
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixties_documentary_is_era_matched() {
        assert_eq!(
            temporal_alignment("1960s", "Documentary Photography"),
            TemporalAlignment::EraMatched
        );
        assert_eq!(
            temporal_alignment("1960s", "DOCUMENTARY"),
            TemporalAlignment::EraMatched
        );
        assert_eq!(
            temporal_alignment("Late 1970s", "Studio Fashion"),
            TemporalAlignment::EraMatched
        );
    }

    #[test]
    fn sixties_with_unrelated_style_is_anachronism() {
        assert_eq!(
            temporal_alignment("1960s", "Drone Photography"),
            TemporalAlignment::CreativeAnachronism
        );
    }

    #[test]
    fn contemporary_eras_match_cinematic_and_drone() {
        assert_eq!(
            temporal_alignment("2010s", "Cinematic Photography"),
            TemporalAlignment::EraMatched
        );
        assert_eq!(
            temporal_alignment("contemporary", "Drone Photography"),
            TemporalAlignment::EraMatched
        );
        assert_eq!(
            temporal_alignment("2000s", "Street Photography"),
            TemporalAlignment::CreativeAnachronism
        );
    }

    #[test]
    fn era_markers_are_case_sensitive() {
        assert_eq!(
            temporal_alignment("Contemporary", "Drone Photography"),
            TemporalAlignment::CreativeAnachronism
        );
    }

    #[test]
    fn empty_context_strings_fall_to_default() {
        assert_eq!(temporal_alignment("", ""), TemporalAlignment::CreativeAnachronism);
        assert_eq!(
            temporal_alignment("1980s", "Documentary"),
            TemporalAlignment::CreativeAnachronism
        );
        assert_eq!(
            temporal_alignment("", "Documentary"),
            TemporalAlignment::CreativeAnachronism
        );
    }
}
