//! Regression oracle for the deterministic number source.
//!
//! The recorded sequences below pin the engine to its historical
//! baseline. Any reimplementation of the hash or the generator must
//! reproduce them bit-for-bit — a mismatch here means every stored
//! report in the wild silently changes. Do not update these constants
//! to make a refactor pass.

use orakul_core::rng::{hash_to_seed, ReportRng};

#[test]
fn mulberry_seed_42_matches_recorded_sequence() {
    let mut rng = ReportRng::new(42);
    let draws: Vec<f64> = (0..5).map(|_| rng.next_f64()).collect();
    assert_eq!(
        draws,
        vec![
            0.6011037519201636,
            0.44829055899754167,
            0.8524657934904099,
            0.6697340414393693,
            0.17481389874592423,
        ],
        "mulberry32 stream diverged from the recorded baseline"
    );
}

#[test]
fn fnv_hashes_match_recorded_values() {
    assert_eq!(hash_to_seed(""), 2_166_136_261);
    assert_eq!(hash_to_seed("a"), 3_826_002_220);
    assert_eq!(hash_to_seed("Piti"), 2_239_881_249);
    assert_eq!(hash_to_seed("nevedel"), 2_020_380_326);
}

#[test]
fn streams_from_different_seeds_diverge() {
    let mut a = ReportRng::new(1);
    let mut b = ReportRng::new(2);
    let first: Vec<u32> = (0..10).map(|_| a.next_u32()).collect();
    let second: Vec<u32> = (0..10).map(|_| b.next_u32()).collect();
    assert_ne!(first, second, "seed is not reaching the stream");
}

#[test]
fn key_seeded_stream_equals_manual_seeding() {
    let mut by_key = ReportRng::from_key("nevedel");
    let mut by_seed = ReportRng::new(hash_to_seed("nevedel"));
    for _ in 0..20 {
        assert_eq!(by_key.next_u32(), by_seed.next_u32());
    }
}
