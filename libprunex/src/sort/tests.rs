use super::*;

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_extract_number_basic() {
    assert_eq!(extract_number("build-42"), 42);
    assert_eq!(extract_number("42"), 42);
    assert_eq!(extract_number("v7-rc"), 7);
}

#[test]
fn test_extract_number_takes_first_run_only() {
    assert_eq!(extract_number("v10.3.1"), 10);
    assert_eq!(extract_number("release-2-hotfix-9"), 2);
}

#[test]
fn test_extract_number_no_digits_is_zero() {
    assert_eq!(extract_number("latest"), 0);
    assert_eq!(extract_number(""), 0);
    assert_eq!(extract_number("stable"), 0);
}

#[test]
fn test_extract_number_oversized_run_saturates() {
    assert_eq!(extract_number("build-99999999999999999999999999"), u64::MAX);
}

#[test]
fn test_default_comparator_matches_extracted_numbers() {
    let cmp = SortStrategy::Default.comparator();
    for (a, b) in [("v1", "v2"), ("build-3", "build-30"), ("latest", "v1")] {
        assert_eq!(
            cmp(a, b),
            extract_number(a).cmp(&extract_number(b)),
            "comparator disagrees with extract_number for ({a}, {b})"
        );
    }
}

#[test]
fn test_strategy_from_str_silent_fallback() {
    assert_eq!(SortStrategy::from("semver"), SortStrategy::Semver);
    assert_eq!(SortStrategy::from("default"), SortStrategy::Default);
    // Anything unrecognized becomes the default, without complaint.
    assert_eq!(SortStrategy::from("Semver"), SortStrategy::Default);
    assert_eq!(SortStrategy::from("newest"), SortStrategy::Default);
    assert_eq!(SortStrategy::from(""), SortStrategy::Default);
}

#[test]
fn test_default_sort_numeric_not_lexical() {
    let mut t = tags(&["v10", "v9", "v100", "v2"]);
    sort_tags(&mut t, SortStrategy::Default);
    assert_eq!(t, tags(&["v2", "v9", "v10", "v100"]));
}

#[test]
fn test_default_sort_does_not_special_case_latest() {
    // "latest" extracts to 0 and therefore sorts first under the default
    // strategy; only the semver strategy pins it last.
    let mut t = tags(&["v1", "v2", "latest", "v10"]);
    sort_tags(&mut t, SortStrategy::Default);
    assert_eq!(t, tags(&["latest", "v1", "v2", "v10"]));
}

#[test]
fn test_semver_sort_pins_latest_greatest() {
    let mut t = tags(&["v1.0.0", "v2.0.0", "latest", "v10.0.0"]);
    sort_tags(&mut t, SortStrategy::Semver);
    assert_eq!(t, tags(&["v1.0.0", "v2.0.0", "v10.0.0", "latest"]));
}

#[test]
fn test_semver_latest_never_precedes_anything() {
    let cmp = SortStrategy::Semver.comparator();
    for other in ["0.0.0", "999.0.0", "garbage", ""] {
        assert_ne!(cmp("latest", other), std::cmp::Ordering::Less);
        assert_eq!(cmp(other, "latest"), std::cmp::Ordering::Less);
    }
    assert_eq!(cmp("latest", "latest"), std::cmp::Ordering::Equal);
}

#[test]
fn test_semver_prerelease_ranks_below_release() {
    let cmp = SortStrategy::Semver.comparator();
    assert_eq!(cmp("1.2.0-rc.1", "1.2.0"), std::cmp::Ordering::Less);
}

#[test]
fn test_semver_malformed_ranks_as_zero_without_aborting() {
    let mut t = tags(&["2.0.0", "not-a-version", "1.0.0"]);
    sort_tags(&mut t, SortStrategy::Semver);
    // The malformed tag ranks as 0.0.0 and sorts first.
    assert_eq!(t, tags(&["not-a-version", "1.0.0", "2.0.0"]));
}

#[test]
fn test_semver_accepts_v_prefix() {
    let cmp = SortStrategy::Semver.comparator();
    assert_eq!(cmp("v1.2.3", "1.2.4"), std::cmp::Ordering::Less);
    assert_eq!(cmp("V2.0.0", "1.9.9"), std::cmp::Ordering::Greater);
}

#[test]
fn test_sort_is_deterministic() {
    let input = tags(&["3.1.0", "bad", "also-bad", "latest", "0.9.0", "3.1.0"]);

    let mut first = input.clone();
    sort_tags(&mut first, SortStrategy::Semver);
    let mut second = input.clone();
    sort_tags(&mut second, SortStrategy::Semver);

    assert_eq!(first, second);

    let mut third = input.clone();
    sort_tags(&mut third, SortStrategy::Default);
    let mut fourth = input;
    sort_tags(&mut fourth, SortStrategy::Default);

    assert_eq!(third, fourth);
}

#[test]
fn test_sort_empty_and_single() {
    let mut empty: Vec<String> = vec![];
    sort_tags(&mut empty, SortStrategy::Semver);
    assert!(empty.is_empty());

    let mut single = tags(&["1.0.0"]);
    sort_tags(&mut single, SortStrategy::Semver);
    assert_eq!(single, tags(&["1.0.0"]));
}
