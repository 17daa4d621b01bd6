//! Teaser gating tests — the security-relevant invariant lives here.
//! An unpaid caller must see exactly the quota, a paid caller must see
//! everything, and the caller's pack must come back untouched.

use orakul_core::unlock::apply_unlock;
use serde_json::{json, Value};

fn pack_with(counts: &[usize]) -> Value {
    let categories: Vec<Value> = counts
        .iter()
        .map(|n| {
            let items: Vec<Value> = (0..*n).map(|i| json!({ "text": format!("item-{i}") })).collect();
            json!({ "items": items })
        })
        .collect();
    json!({ "categories": categories })
}

fn locked_flags(pack: &Value, category: usize) -> Vec<bool> {
    pack["categories"][category]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["locked"].as_bool().expect("locked flag missing"))
        .collect()
}

#[test]
fn five_items_quota_two_unpaid() {
    // The canonical scenario: indexes 0 and 1 open, 2..4 locked.
    let out = apply_unlock(&pack_with(&[5]), 2, false);
    assert_eq!(
        locked_flags(&out, 0),
        vec![false, false, true, true, true]
    );
}

#[test]
fn unpaid_unlocks_exactly_min_of_quota_and_size() {
    for n in 0..6usize {
        for quota in 0..8usize {
            let out = apply_unlock(&pack_with(&[n]), quota, false);
            let unlocked = locked_flags(&out, 0).iter().filter(|l| !**l).count();
            assert_eq!(
                unlocked,
                quota.min(n),
                "n={n} quota={quota}: wrong unlock count"
            );
        }
    }
}

#[test]
fn paid_unlocks_everything_regardless_of_quota() {
    let out = apply_unlock(&pack_with(&[4, 7]), 0, true);
    for category in 0..2 {
        assert!(
            locked_flags(&out, category).iter().all(|l| !*l),
            "paid caller saw a locked item"
        );
    }
}

#[test]
fn quota_applies_per_category_not_globally() {
    let out = apply_unlock(&pack_with(&[3, 3]), 2, false);
    assert_eq!(locked_flags(&out, 0), vec![false, false, true]);
    assert_eq!(locked_flags(&out, 1), vec![false, false, true]);
}

#[test]
fn source_pack_survives_both_renders() {
    // Callers reuse one pack for the paid and the unpaid view.
    let pack = pack_with(&[5]);
    let before = pack.clone();
    let unpaid = apply_unlock(&pack, 2, false);
    let paid = apply_unlock(&pack, 2, true);
    assert_eq!(pack, before, "apply_unlock mutated the source pack");
    assert_ne!(unpaid, paid);
}

#[test]
fn unrecognized_structure_passes_through() {
    let flat = json!({ "note": "no categories here" });
    assert_eq!(apply_unlock(&flat, 2, false), flat);

    let bare_category = json!({ "categories": [{ "title": "itemless" }] });
    assert_eq!(apply_unlock(&bare_category, 2, false), bare_category);
}

#[test]
fn extra_item_fields_are_preserved() {
    let pack = json!({
        "categories": [{ "items": [{ "text": "keep", "weight": 3, "tags": ["x"] }] }]
    });
    let out = apply_unlock(&pack, 0, false);
    let item = &out["categories"][0]["items"][0];
    assert_eq!(item["text"], "keep");
    assert_eq!(item["weight"], 3);
    assert_eq!(item["tags"], json!(["x"]));
    assert_eq!(item["locked"], Value::Bool(true));
}
