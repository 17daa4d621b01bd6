//! Content pack configuration — sections, phrase pools, verdict bands.
//!
//! Pools and bands are ordered Vecs, not maps. Pool iteration order
//! decides the draw order during assembly, and band order decides
//! verdict selection, so both are part of the determinism contract.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowConfig {
    pub row_id: String,
    pub template: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionConfig {
    pub section_id: String,
    pub title: String,
    pub rows: Vec<RowConfig>,
}

/// A named phrase pool. During assembly the pool feeds two template
/// variables: `{<pool_id>}` (one pick) and `{<pool_id>_list}` (three
/// distinct picks, comma-joined).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolConfig {
    pub pool_id: String,
    pub phrases: Vec<String>,
}

/// Scores at or above `min_score` earn this verdict. Bands are listed
/// highest floor first; the first match wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictBand {
    pub min_score: u8,
    pub template: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    pub sections: Vec<SectionConfig>,
    pub pools: Vec<PoolConfig>,
    pub verdict_bands: Vec<VerdictBand>,
    /// Items per category visible to unpaid callers.
    pub unlock_per_category: usize,
}

impl ContentConfig {
    /// Load a content pack from a JSON file.
    /// In tests, use ContentConfig::default_pack().
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: ContentConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// The embedded pack. Tests pin their fixtures against this, and
    /// the CLI falls back to it when no pack file is given.
    pub fn default_pack() -> Self {
        let sections = vec![
            SectionConfig {
                section_id: "core_reading".into(),
                title: "Core Reading".into(),
                rows: vec![
                    RowConfig {
                        row_id: "essence".into(),
                        template: "Your essence burns at {intensity_pct} percent intensity.".into(),
                    },
                    RowConfig {
                        row_id: "openness".into(),
                        template: "You meet the unknown with {openness_pct} percent openness.".into(),
                    },
                    RowConfig {
                        row_id: "control".into(),
                        template: "Your grip on the wheel holds at {control_pct} percent.".into(),
                    },
                    RowConfig {
                        row_id: "chaos".into(),
                        template: "Chaos claims {chaos_pct} percent of your days.".into(),
                    },
                    RowConfig {
                        row_id: "name_weight".into(),
                        template: "The name {name} carries a weight of {name_weight_pct} percent.".into(),
                    },
                ],
            },
            SectionConfig {
                section_id: "born_under".into(),
                title: "Born Under".into(),
                rows: vec![
                    RowConfig {
                        row_id: "weekday".into(),
                        template: "You arrived on a {weekday}.".into(),
                    },
                    RowConfig {
                        row_id: "day_of_year".into(),
                        template: "Day {day_of_year} of the year marked your beginning.".into(),
                    },
                    RowConfig {
                        row_id: "year_kind".into(),
                        template: "The year that received you was {year_kind}.".into(),
                    },
                    RowConfig {
                        row_id: "days_alive".into(),
                        template: "You have walked this earth for {days_alive} days.".into(),
                    },
                ],
            },
            SectionConfig {
                section_id: "affinities".into(),
                title: "Affinities".into(),
                rows: vec![
                    RowConfig {
                        row_id: "element".into(),
                        template: "Your element is {element}.".into(),
                    },
                    RowConfig {
                        row_id: "color".into(),
                        template: "Your colour is {color}.".into(),
                    },
                    RowConfig {
                        row_id: "totem".into(),
                        template: "The {totem} walks beside you.".into(),
                    },
                    RowConfig {
                        row_id: "focus".into(),
                        template: "This season asks you to tend to {focus_list}.".into(),
                    },
                ],
            },
            SectionConfig {
                section_id: "lucky_signs".into(),
                title: "Lucky Signs".into(),
                rows: vec![
                    RowConfig {
                        row_id: "numbers".into(),
                        template: "Your numbers: {lucky_numbers}.".into(),
                    },
                    RowConfig {
                        row_id: "letters".into(),
                        template: "Your letters: {lucky_letters}.".into(),
                    },
                ],
            },
        ];

        let pools = vec![
            PoolConfig {
                pool_id: "element".into(),
                phrases: vec![
                    "Fire".into(),
                    "Water".into(),
                    "Earth".into(),
                    "Air".into(),
                    "Ash".into(),
                    "Mist".into(),
                ],
            },
            PoolConfig {
                pool_id: "color".into(),
                phrases: vec![
                    "crimson".into(),
                    "indigo".into(),
                    "ochre".into(),
                    "silver".into(),
                    "verdigris".into(),
                    "umber".into(),
                ],
            },
            PoolConfig {
                pool_id: "totem".into(),
                phrases: vec![
                    "Owl".into(),
                    "Fox".into(),
                    "Heron".into(),
                    "Stag".into(),
                    "Moth".into(),
                    "Otter".into(),
                ],
            },
            PoolConfig {
                pool_id: "focus".into(),
                phrases: vec![
                    "patience".into(),
                    "risk".into(),
                    "kinship".into(),
                    "silence".into(),
                    "craft".into(),
                    "memory".into(),
                ],
            },
        ];

        let verdict_bands = vec![
            VerdictBand {
                min_score: 85,
                template: "A rare alignment, {name} — the currents bend around you.".into(),
            },
            VerdictBand {
                min_score: 70,
                template: "The signs favour you, {name}, more often than not.".into(),
            },
            VerdictBand {
                min_score: 40,
                template: "A balanced path, {name} — neither storm nor stillness.".into(),
            },
            VerdictBand {
                min_score: 0,
                template: "The quiet seasons shape you, {name} — watch for slow turns.".into(),
            },
        ];

        Self {
            sections,
            pools,
            verdict_bands,
            unlock_per_category: 2,
        }
    }
}
