//! Tests for the decision engine: dataset loading, question ranking, and
//! the filter engine, including the worked fish/old example.

use omnom::{balance_score, filter, matching_count, rank_attributes, Attribute, Dataset, Record};
use std::io::Write as _;

fn record(name: &str, fish: bool, old: bool) -> Record {
    Record {
        name: name.to_string(),
        is_fine_dining: false,
        is_old: old,
        is_fish: fish,
        is_asian: false,
        is_experimental: false,
        is_cheesy: false,
    }
}

/// 4 records: `is_fish` splits 2/2 and `is_old` splits 1/3.
fn fish_and_old() -> Dataset {
    Dataset::new(vec![
        record("A", true, true),
        record("B", true, false),
        record("C", false, false),
        record("D", false, false),
    ])
    .unwrap()
}

// =============================================================================
// Question Ranker
// =============================================================================

#[test]
fn test_even_split_is_ranked_before_skewed_split() {
    let dataset = fish_and_old();
    assert_eq!(balance_score(&dataset, Attribute::IsFish), 2);
    assert_eq!(balance_score(&dataset, Attribute::IsOld), 3);

    let order = rank_attributes(&dataset);
    let fish = order.position(Attribute::IsFish).unwrap();
    let old = order.position(Attribute::IsOld).unwrap();
    assert!(fish < old, "is_fish must be asked before is_old");
}

#[test]
fn test_ranking_is_a_permutation_of_all_attributes() {
    let order = rank_attributes(&fish_and_old());
    let mut seen = order.as_slice().to_vec();
    seen.sort_by_key(|a| *a as usize);
    let mut all = Attribute::all();
    all.sort_by_key(|a| *a as usize);
    assert_eq!(seen, all);
}

#[test]
fn test_ranking_of_embedded_dataset_is_cached_shape() {
    let dataset = Dataset::embedded().unwrap();
    let order = rank_attributes(&dataset);
    assert_eq!(order.len(), Attribute::COUNT);
    // Scores must be non-decreasing along the order.
    let scores: Vec<usize> = order
        .as_slice()
        .iter()
        .map(|&a| balance_score(&dataset, a))
        .collect();
    assert!(scores.windows(2).all(|w| w[0] <= w[1]), "scores: {scores:?}");
}

// =============================================================================
// Filter Engine
// =============================================================================

#[test]
fn test_filter_matches_example_narrowing() {
    let dataset = fish_and_old();
    let fishy = filter(&dataset, &[(Attribute::IsFish, true)]);
    assert_eq!(fishy.len(), 2);
    assert_eq!(fishy[0].name, "A");
    assert_eq!(fishy[1].name, "B");

    let fishy_and_old = filter(
        &dataset,
        &[(Attribute::IsFish, true), (Attribute::IsOld, true)],
    );
    assert_eq!(fishy_and_old.len(), 1);
    assert_eq!(fishy_and_old[0].name, "A");
}

#[test]
fn test_filter_with_no_conditions_is_identity() {
    let dataset = fish_and_old();
    let all = filter(&dataset, &[]);
    assert_eq!(all.len(), dataset.len());
    let names: Vec<&str> = all.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C", "D"]);
}

#[test]
fn test_matching_count_agrees_with_filter() {
    let dataset = Dataset::embedded().unwrap();
    for value in [true, false] {
        let conditions = [(Attribute::IsAsian, value)];
        assert_eq!(
            matching_count(&dataset, &conditions),
            filter(&dataset, &conditions).len()
        );
    }
}

// =============================================================================
// Dataset loading
// =============================================================================

#[test]
fn test_load_dataset_from_file() {
    let json = serde_json::to_string(fish_and_old().records()).unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let loaded = Dataset::load_from_file(file.path()).unwrap();
    assert_eq!(loaded, fish_and_old());
}

#[test]
fn test_load_rejects_empty_file_dataset() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[]").unwrap();
    assert!(Dataset::load_from_file(file.path()).is_err());
}

#[test]
fn test_load_rejects_missing_file() {
    assert!(Dataset::load_from_file(std::path::Path::new("/nonexistent/data.json")).is_err());
}
