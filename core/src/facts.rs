//! Fact block assembly — turns (name, birth date, subject) into the
//! finished report.
//!
//! DRAW ORDER (fixed, documented, never reordered):
//!   1. Profile derivation        (9 draws)
//!   2. Phrase pools, config order (4 draws per pool of more than 3)
//!   3. Lucky numbers             (9 draws)
//!   4. Lucky letters shuffle     (name-length dependent, always last)
//!
//! Inserting a draw anywhere above the last step shifts every value
//! after it and breaks the historical baseline.

use crate::calendar;
use crate::content::ContentConfig;
use crate::error::{EngineError, EngineResult};
use crate::profile::Profile;
use crate::rng::ReportRng;
use crate::sample::format_thousands;
use crate::template;
use crate::types::SubjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// One rendered line of a report section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactRow {
    pub row_id: String,
    pub text: String,
}

/// A titled group of rendered rows. Fully materialized, stable order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactSection {
    pub section_id: String,
    pub title: String,
    pub rows: Vec<FactRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMeta {
    pub engine_version: String,
    pub computed_at: DateTime<Utc>,
}

/// The finished, immutable generation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub subject: SubjectId,
    pub score: u8,
    pub verdict: String,
    pub facts: Vec<FactSection>,
    pub meta: ReportMeta,
}

/// Assemble a report. Pure given (name, birth_date, subject) and a fixed
/// `now`; the timestamp and days-alive figure are the only fields that
/// move with the clock.
pub fn build_report(
    config: &ContentConfig,
    now: DateTime<Utc>,
    name: &str,
    birth_date: &str,
    subject: &str,
) -> EngineResult<Report> {
    let birth = calendar::parse_birth_date(birth_date);
    let days_alive = birth.map(|d| calendar::days_alive(d, now)).unwrap_or(1);

    let mut rng = ReportRng::from_key(subject);
    let profile = Profile::derive(&mut rng, name, birth_date);

    let mut vars: HashMap<String, String> = HashMap::new();
    vars.insert("name".into(), name.trim().to_string());
    vars.insert("subject".into(), subject.to_string());
    vars.insert("days_alive".into(), format_thousands(days_alive));

    // Calendar placeholders only exist when the date parses; on the
    // fallback path they render empty rather than lying.
    if let Some(date) = birth {
        vars.insert("weekday".into(), calendar::weekday_name(date).to_string());
        vars.insert(
            "day_of_year".into(),
            calendar::day_of_year(date).to_string(),
        );
        let year_kind = if calendar::is_leap_year(date) {
            "a leap year"
        } else {
            "a common year"
        };
        vars.insert("year_kind".into(), year_kind.to_string());
    }

    vars.insert("intensity_pct".into(), pct(profile.intensity));
    vars.insert("openness_pct".into(), pct(profile.openness));
    vars.insert("control_pct".into(), pct(profile.control));
    vars.insert("chaos_pct".into(), pct(profile.chaos));
    vars.insert("name_weight_pct".into(), pct(profile.name_weight));

    for pool in &config.pools {
        let single = rng.pick_one(&pool.phrases)?.clone();
        let list = rng.pick_many_unique(&pool.phrases, 3).join(", ");
        vars.insert(pool.pool_id.clone(), single);
        vars.insert(format!("{}_list", pool.pool_id), list);
    }

    let lucky_numbers: Vec<String> = (0..3)
        .map(|_| rng.mid_biased_int(1, 49).to_string())
        .collect();
    vars.insert("lucky_numbers".into(), lucky_numbers.join(", "));

    let letters: Vec<char> = name
        .trim()
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(|c| c.to_uppercase())
        .collect();
    let lucky_letters: Vec<String> = rng
        .shuffle(&letters)
        .into_iter()
        .take(2)
        .map(String::from)
        .collect();
    vars.insert("lucky_letters".into(), lucky_letters.join(", "));

    let score = score_from(&profile);
    vars.insert("score".into(), score.to_string());

    let band = config
        .verdict_bands
        .iter()
        .find(|b| score >= b.min_score)
        .ok_or_else(|| EngineError::ContentMisconfigured {
            reason: format!("no verdict band covers score {score}"),
        })?;
    let verdict = template::render(&band.template, &vars);

    let facts = config
        .sections
        .iter()
        .map(|section| FactSection {
            section_id: section.section_id.clone(),
            title: section.title.clone(),
            rows: section
                .rows
                .iter()
                .map(|row| FactRow {
                    row_id: row.row_id.clone(),
                    text: template::render(&row.template, &vars),
                })
                .collect(),
        })
        .collect();

    log::debug!("report subject={subject} score={score} days_alive={days_alive}");

    Ok(Report {
        subject: subject.to_string(),
        score,
        verdict,
        facts,
        meta: ReportMeta {
            engine_version: ENGINE_VERSION.to_string(),
            computed_at: now,
        },
    })
}

/// Overall score in [0, 100] as an affine blend of the traits.
/// Control counts for, chaos against; the weights are flavor constants.
fn score_from(p: &Profile) -> u8 {
    let weighted = 0.30 * p.intensity
        + 0.25 * p.openness
        + 0.20 * p.control
        + 0.15 * (1.0 - p.chaos)
        + 0.10 * p.name_weight;
    (100.0 * weighted).round().clamp(0.0, 100.0) as u8
}

fn pct(v: f64) -> String {
    ((v * 100.0).round() as i64).to_string()
}
