#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MAGAZINES: &str = r#"[
  {
    "name": "Life (1960s)",
    "display_name": "LIFE",
    "era": { "label": "1960s" },
    "visual_treatment": {
      "color_palette": "Muted earth tones, desaturated greens",
      "lighting": "Soft available light",
      "contrast": "Medium",
      "texture": "Visible film grain"
    },
    "cultural_context": { "values": ["witness"] }
  },
  {
    "name": "Wired (2010s)",
    "era": { "label": "2010s" },
    "visual_treatment": {
      "color_palette": "High saturation digital colors, neon accents",
      "lighting": "Hard directional strobes",
      "contrast": "High",
      "texture": "Crisp, clinical"
    }
  }
]"#;

const PHOTOGRAPHY: &str = r#"[
  {
    "name": "Documentary Photography",
    "technical": { "focal_length": "35mm", "typical_aperture_range": "f/5.6-f/8" },
    "aesthetic": { "composition": "Subject in environment" },
    "context": { "typical_uses": ["Photojournalism", "Events"], "key_characteristics": ["honest"] }
  },
  {
    "name": "Architectural Photography",
    "technical": { "focal_length": "Ultra wide 14-24mm" },
    "aesthetic": { "composition": "Geometric symmetry" },
    "context": { "typical_uses": ["Architecture"] }
  }
]"#;

const COMBINATIONS: &str = r#"[
  {
    "id": "life_1960s__documentary_photography",
    "magazine_id": "life_1960s",
    "photography_id": "documentary_photography",
    "description": {
      "name": "Witness Grain",
      "tagline": "Mid-century truth-telling",
      "full_description": "Vintage photojournalism with muted tones"
    },
    "compatibility": {
      "overall_harmony": 9,
      "technical_score": 8,
      "aesthetic_score": 9,
      "creative_tension": 3,
      "temporal_alignment": "era_matched"
    },
    "suggested_subjects": ["protest march"],
    "prompt_keywords": ["film grain", "kodak tri-x", "candid", "1960s"],
    "magazine_color_palette": "muted earth tones"
  },
  {
    "id": "wired_2010s__documentary_photography",
    "magazine_id": "wired_2010s",
    "photography_id": "documentary_photography",
    "description": {
      "name": "Signal Noise",
      "tagline": "Neon reportage",
      "full_description": "Hyper-saturated reportage"
    },
    "compatibility": {
      "overall_harmony": 6,
      "technical_score": 6,
      "aesthetic_score": 7,
      "creative_tension": 8,
      "temporal_alignment": "temporal_clash"
    },
    "suggested_subjects": ["server rooms"],
    "prompt_keywords": ["neon"]
  }
]"#;

fn workspace() -> TempDir {
    let root = TempDir::new().expect("temp dir should be created");
    let cache = root.path().join("cache");
    fs::create_dir_all(&cache).expect("cache dir should be created");
    fs::write(cache.join("magazines.json"), MAGAZINES).expect("magazines should write");
    fs::write(cache.join("photography.json"), PHOTOGRAPHY).expect("photography should write");
    fs::write(cache.join("combinations.json"), COMBINATIONS).expect("combinations should write");
    root
}

fn magphoto(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("magphoto").expect("binary should compile");
    cmd.current_dir(root)
        .env("HOME", root)
        .env_remove("MAGAZINE_CACHE_DIR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn version_flag_reports_package_version() {
    let root = workspace();
    magphoto(root.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn classify_magazine_reports_categories() {
    let root = workspace();
    magphoto(root.path())
        .args(["classify-magazine", "Wired (2010s)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| color | vibrant |"))
        .stdout(predicate::str::contains("| lighting | hard_directional |"))
        .stdout(predicate::str::contains("| texture | sharp |"));
}

#[test]
fn classify_photography_as_json() {
    let root = workspace();
    magphoto(root.path())
        .args(["--format", "json", "classify-photography", "Architectural Photography"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"composition_strategy\": \"geometric\""))
        .stdout(predicate::str::contains("\"focal_length_category\": \"ultra_wide\""))
        .stdout(predicate::str::contains("\"typical_aperture_range\": \"f/2.8-f/5.6\""));
}

#[test]
fn classify_reads_ad_hoc_record_file() {
    let root = workspace();
    let record = root.path().join("record.json");
    fs::write(
        &record,
        r#"{ "name": "Nameless", "visual_treatment": { "color_palette": "Cool blue cast" } }"#,
    )
    .expect("record should write");

    magphoto(root.path())
        .args(["classify", "record.json", "--kind", "magazine"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| color | cool |"))
        .stdout(predicate::str::contains("| lighting | dramatic |"));
}

#[test]
fn classify_rejects_record_without_container() {
    let root = workspace();
    fs::write(root.path().join("hollow.json"), r#"{ "name": "Hollow" }"#)
        .expect("record should write");

    magphoto(root.path())
        .args(["classify", "hollow.json", "--kind", "magazine"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("visual_treatment"));
}

#[test]
fn score_pair_is_deterministic() {
    let root = workspace();
    let expected = "Magazine: muted colors, soft_diffused lighting. \
                    Photography: environmental composition, wide focal length. \
                    Temporal: era_matched.";
    for _ in 0..2 {
        magphoto(root.path())
            .args(["score", "Life (1960s)", "Documentary Photography"])
            .assert()
            .success()
            .stdout(predicate::str::contains("- harmony: 6/10"))
            .stdout(predicate::str::contains("- creative tension: 5/10"))
            .stdout(predicate::str::contains(expected));
    }
}

#[test]
fn score_anachronism_raises_tension() {
    let root = workspace();
    magphoto(root.path())
        .args([
            "--format",
            "json",
            "score",
            "Wired (2010s)",
            "Architectural Photography",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"aesthetic_score\": 8"))
        .stdout(predicate::str::contains("\"creative_tension\": 7"))
        .stdout(predicate::str::contains("\"overall_harmony\": 6"))
        .stdout(predicate::str::contains("\"temporal_alignment\": \"creative_anachronism\""));
}

#[test]
fn unknown_magazine_exits_not_found_with_suggestions() {
    let root = workspace();
    magphoto(root.path())
        .args(["score", "Vogue (1990s)", "Documentary Photography"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Vogue (1990s)"))
        .stderr(predicate::str::contains("Life (1960s)"));
}

#[test]
fn missing_cache_is_runtime_failure() {
    let root = TempDir::new().expect("temp dir should be created");
    magphoto(root.path())
        .arg("stats")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("cache directory not found"));
}

#[test]
fn cache_dir_flag_and_env_override_default() {
    let root = workspace();
    let elsewhere = TempDir::new().expect("temp dir should be created");
    fs::rename(root.path().join("cache"), elsewhere.path().join("data"))
        .expect("cache should move");

    magphoto(root.path())
        .arg("--cache-dir")
        .arg(elsewhere.path().join("data"))
        .arg("list-magazines")
        .assert()
        .success()
        .stdout(predicate::str::contains("**LIFE** (Life (1960s))"));

    magphoto(root.path())
        .env("MAGAZINE_CACHE_DIR", elsewhere.path().join("data"))
        .arg("list-styles")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Photography Styles (2)"));
}

#[test]
fn project_config_sets_cache_dir() {
    let root = workspace();
    fs::rename(root.path().join("cache"), root.path().join("library"))
        .expect("cache should move");
    fs::write(
        root.path().join("magphoto.toml"),
        "[catalog]\ncache_dir = \"library\"\n",
    )
    .expect("config should write");

    magphoto(root.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("- combinations: 2"));
}

#[test]
fn get_shows_precomputed_combination() {
    let root = workspace();
    magphoto(root.path())
        .args(["get", "Life (1960s)", "Documentary Photography"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Witness Grain"))
        .stdout(predicate::str::contains("- harmony: 9/10"));

    magphoto(root.path())
        .args(["get", "Life (1960s)", "Architectural Photography"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "life_1960s__architectural_photography",
        ));
}

#[test]
fn search_filters_and_empty_result_exit_code() {
    let root = workspace();
    magphoto(root.path())
        .args(["search", "--min-tension", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wired_2010s__documentary_photography"))
        .stdout(predicate::str::contains("life_1960s__documentary_photography").not());

    magphoto(root.path())
        .args(["search", "--query", "underwater"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("- none"));
}

#[test]
fn stats_as_json() {
    let root = workspace();
    magphoto(root.path())
        .args(["--format", "json", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"harmony\": 7.5"))
        .stdout(predicate::str::contains("\"harmony_9_plus\": 1"))
        .stdout(predicate::str::contains("\"temporal_clash\": 1"));
}

#[test]
fn random_with_seed_is_reproducible() {
    let root = workspace();
    let run = || {
        magphoto(root.path())
            .args(["--format", "json", "random", "--count", "2", "--min-harmony", "0", "--seed", "7"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    assert_eq!(run(), run());

    magphoto(root.path())
        .args(["random", "--min-harmony", "10"])
        .assert()
        .code(1);
}

#[test]
fn zero_count_and_limit_are_invalid_input() {
    let root = workspace();
    magphoto(root.path())
        .args(["random", "--count", "0", "--min-harmony", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--count"));

    magphoto(root.path())
        .args(["search", "--limit", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--limit"));
}

#[test]
fn prompt_accepts_display_labels() {
    let root = workspace();
    magphoto(root.path())
        .args([
            "prompt",
            "life_1960s__documentary_photography",
            "--distance",
            "Extreme Close-up",
            "--angle",
            "Dutch Tilt",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "extreme close-up framing, dutch tilt perspective",
        ));
}

#[test]
fn prompt_builds_from_combination() {
    let root = workspace();
    magphoto(root.path())
        .args([
            "prompt",
            "life_1960s__documentary_photography",
            "--distance",
            "close-up",
            "--angle",
            "eye-level",
            "--color-intensity",
            "0.8",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Witness Grain aesthetic, featuring protest march, close-up framing, eye-level perspective, \
             highly saturated, vivid muted earth tones, bold color emphasis",
        ));
}

#[test]
fn prompt_rejects_out_of_range_intensity() {
    let root = workspace();
    magphoto(root.path())
        .args([
            "prompt",
            "life_1960s__documentary_photography",
            "--distance",
            "wide",
            "--angle",
            "overhead",
            "--detail-sharpness",
            "2",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("detail sharpness"));
}

#[test]
fn export_writes_scores_for_every_pair() {
    let root = workspace();
    let output = root.path().join("scores.json");
    magphoto(root.path())
        .args(["export", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("4 entries"));

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).expect("export should read"))
            .expect("export should be json");
    assert_eq!(written["entries"].as_array().map(Vec::len), Some(4));
    assert_eq!(written["catalog_digest"].as_str().map(str::len), Some(64));
}
