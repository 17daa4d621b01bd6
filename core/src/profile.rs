//! Profile derivation — the five normalized traits behind a report.
//!
//! The weights below are flavor constants, not a validated psychological
//! model. They may be retuned, but three properties are contractual:
//! the derivation is a pure function of (stream position, name, date),
//! every trait stays in [0, 1], and a higher vowel ratio pushes
//! `openness` and `name_weight` up and `control` down.

use crate::calendar;
use crate::rng::ReportRng;
use serde::{Deserialize, Serialize};

/// Vowels counted for the name signal, including the accented Slovak
/// and Czech forms the product's audience actually types.
const VOWELS: &str = "aáäeéěiíoóôuúůyý";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub intensity: f64,
    pub openness: f64,
    pub control: f64,
    pub chaos: f64,
    pub name_weight: f64,
}

impl Profile {
    /// Derive the trait vector. Consumes exactly nine draws (three
    /// mid-biased floats) from the stream regardless of inputs, so the
    /// draw positions seen by downstream consumers never shift.
    pub fn derive(rng: &mut ReportRng, name: &str, iso_date: &str) -> Self {
        let vr = vowel_ratio(name);
        let (month, day) = calendar::month_day_or_default(iso_date);
        let mn = f64::from(month) / 12.0;
        let dn = f64::from(day) / 31.0;

        let a = rng.mid_biased_f64();
        let b = rng.mid_biased_f64();
        let c = rng.mid_biased_f64();

        Self {
            intensity: clamp01(0.20 + 0.45 * a + 0.35 * dn),
            openness: clamp01(0.10 + 0.50 * vr + 0.40 * b),
            control: clamp01(0.80 - 0.45 * vr + 0.25 * c + 0.15 * mn),
            chaos: clamp01(0.15 + 0.40 * (1.0 - c) + 0.30 * a),
            name_weight: clamp01(0.25 + 0.55 * vr + 0.20 * b),
        }
    }
}

/// Vowel characters over total characters of the trimmed, lowercased
/// name. The denominator floors at 1, so the empty name yields 0.0.
pub fn vowel_ratio(name: &str) -> f64 {
    let lowered = name.trim().to_lowercase();
    let total = lowered.chars().count().max(1);
    let vowels = lowered.chars().filter(|c| VOWELS.contains(*c)).count();
    vowels as f64 / total as f64
}

fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}
