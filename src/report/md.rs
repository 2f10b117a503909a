use crate::catalog::search::CombinationSummary;
use crate::catalog::stats::LibraryStats;
use crate::catalog::{format_id, MagazineSummary, StyleSummary};
use crate::report::{ExportSummary, NamedProfile, PairScore, PromptView};
use crate::types::profile::{PhotographyTechnicalProfile, VisualTreatmentProfile};
use crate::types::record::Combination;

pub trait Markdown {
    fn to_markdown(&self) -> String;
}

fn bullet_list(output: &mut String, items: &[String]) {
    if items.is_empty() {
        output.push_str("- none\n");
    } else {
        for item in items {
            output.push_str(&format!("- {item}\n"));
        }
    }
}

fn or_dash(text: &str) -> &str {
    if text.is_empty() {
        "-"
    } else {
        text
    }
}

impl Markdown for NamedProfile<'_, VisualTreatmentProfile> {
    fn to_markdown(&self) -> String {
        let profile = self.profile;
        let mut output = format!("# {}\n\n## Visual Treatment\n\n", self.name);
        output.push_str("| Field | Category | Source |\n|---|---|---|\n");
        for (field, category, source) in [
            ("color", profile.color_category.as_str(), &profile.color_palette),
            ("lighting", profile.lighting_approach.as_str(), &profile.lighting),
            ("contrast", profile.contrast_profile.as_str(), &profile.contrast),
            ("texture", profile.texture_emphasis.as_str(), &profile.texture),
        ] {
            output.push_str(&format!("| {field} | {category} | {} |\n", or_dash(source)));
        }
        output
    }
}

impl Markdown for NamedProfile<'_, PhotographyTechnicalProfile> {
    fn to_markdown(&self) -> String {
        let profile = self.profile;
        let mut output = format!("# {}\n\n## Technical Profile\n\n", self.name);
        output.push_str(&format!(
            "- composition: {}\n- focal length: {}\n- subject: {}\n- depth of field: {}\n- aperture: {}\n- framing: {}\n",
            profile.composition_strategy,
            profile.focal_length_category,
            profile.subject_context,
            profile.depth_of_field,
            profile.typical_aperture_range,
            or_dash(&profile.framing_description)
        ));
        output
    }
}

impl Markdown for PairScore<'_> {
    fn to_markdown(&self) -> String {
        let score = self.score;
        let mut output = format!("# {} x {}\n\n", self.magazine, self.photography);
        output.push_str(&format!(
            "- harmony: {}/10\n- technical: {}/10\n- aesthetic: {}/10\n- creative tension: {}/10\n- temporal alignment: {}\n\n",
            score.overall_harmony,
            score.technical_score,
            score.aesthetic_score,
            score.creative_tension,
            score.temporal_alignment
        ));
        output.push_str(&score.rationale);
        output.push('\n');
        output
    }
}

impl Markdown for [MagazineSummary] {
    fn to_markdown(&self) -> String {
        let mut output = format!("# Magazines ({})\n\n", self.len());
        for magazine in self {
            output.push_str(&format!(
                "- **{}** ({}) era {}: {}; {}\n",
                magazine.display_name,
                magazine.name,
                or_dash(&magazine.era),
                or_dash(&magazine.color_palette),
                or_dash(&magazine.lighting)
            ));
        }
        output
    }
}

impl Markdown for [StyleSummary] {
    fn to_markdown(&self) -> String {
        let mut output = format!("# Photography Styles ({})\n\n", self.len());
        for style in self {
            output.push_str(&format!(
                "- **{}**: {}, {} (uses: {})\n",
                style.name,
                or_dash(&style.focal_length),
                or_dash(&style.composition),
                or_dash(&style.typical_uses.join(", "))
            ));
        }
        output
    }
}

impl Markdown for [CombinationSummary] {
    fn to_markdown(&self) -> String {
        let mut output = format!("# Combinations ({})\n\n", self.len());
        if self.is_empty() {
            output.push_str("- none\n");
            return output;
        }
        output.push_str("| Id | Name | Harmony | Tension | Temporal |\n|---|---|---|---|---|\n");
        for combo in self {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                combo.combination_id,
                combo.name,
                combo.harmony,
                combo.tension,
                combo.temporal_alignment
            ));
        }
        output
    }
}

impl Markdown for Combination {
    fn to_markdown(&self) -> String {
        let compat = &self.compatibility;
        let mut output = format!("# {}\n\n", self.description.name);
        if !self.description.tagline.is_empty() {
            output.push_str(&format!("_{}_\n\n", self.description.tagline));
        }
        output.push_str(&format!(
            "{} x {} (`{}`)\n\n",
            format_id(&self.magazine_id),
            format_id(&self.photography_id),
            self.id
        ));
        if !self.description.full_description.is_empty() {
            output.push_str(&self.description.full_description);
            output.push_str("\n\n");
        }

        output.push_str("## Compatibility\n\n");
        output.push_str(&format!(
            "- harmony: {}/10\n- technical: {}/10\n- aesthetic: {}/10\n- creative tension: {}/10\n- temporal alignment: {}\n",
            compat.overall_harmony,
            compat.technical_score,
            compat.aesthetic_score,
            compat.creative_tension,
            compat.temporal_alignment
        ));
        if !compat.rationale.is_empty() {
            output.push_str(&format!("- rationale: {}\n", compat.rationale));
        }

        output.push_str("\n## Suggested Subjects\n\n");
        bullet_list(&mut output, &self.suggested_subjects);
        output.push_str("\n## Prompt Keywords\n\n");
        bullet_list(&mut output, &self.prompt_keywords);
        output
    }
}

impl Markdown for LibraryStats {
    fn to_markdown(&self) -> String {
        let mut output = String::from("# Library Statistics\n\n");
        output.push_str(&format!(
            "- magazines: {}\n- photography styles: {}\n- combinations: {}\n\n",
            self.library_size.total_magazines,
            self.library_size.total_photography_styles,
            self.library_size.total_combinations
        ));
        output.push_str("## Average Scores\n\n");
        output.push_str(&format!(
            "- harmony: {:.2}\n- technical: {:.2}\n- aesthetic: {:.2}\n- creative tension: {:.2}\n\n",
            self.average_scores.harmony,
            self.average_scores.technical,
            self.average_scores.aesthetic,
            self.average_scores.creative_tension
        ));
        output.push_str("## High Quality\n\n");
        output.push_str(&format!(
            "- harmony >= 8: {}\n- harmony >= 9: {}\n- tension >= 7: {}\n- tension >= 8: {}\n\n",
            self.high_quality_combinations.harmony_8_plus,
            self.high_quality_combinations.harmony_9_plus,
            self.high_quality_combinations.tension_7_plus,
            self.high_quality_combinations.tension_8_plus
        ));
        output.push_str("## Temporal Alignment\n\n");
        for (alignment, count) in &self.temporal_distribution {
            output.push_str(&format!("- {alignment}: {count}\n"));
        }
        output.push_str(&format!(
            "\nCache: {}\nDigest: {}\n",
            self.cache_location, self.catalog_digest
        ));
        output
    }
}

impl Markdown for PromptView<'_> {
    fn to_markdown(&self) -> String {
        format!("{}\n", self.prompt)
    }
}

impl Markdown for ExportSummary<'_> {
    fn to_markdown(&self) -> String {
        format!(
            "export: {} ({} entries, {} skipped)\n",
            self.path.display(),
            self.entries,
            self.skipped
        )
    }
}
