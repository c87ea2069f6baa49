use super::MoveSpec;
use std::collections::BTreeSet;

#[test]
fn test_single_row_spec() {
    let spec: MoveSpec = "2:3".parse().unwrap();

    assert_eq!(spec.from, BTreeSet::from([2]));
    assert_eq!(spec.to, 3);
}

#[test]
fn test_multi_row_spec_dedups_and_sorts() {
    let spec: MoveSpec = "5, 0,5:4".parse().unwrap();

    assert_eq!(spec.from, BTreeSet::from([0, 5]));
    assert_eq!(spec.to_string(), "0,5:4");
}

#[test]
fn test_empty_source_list_is_identity() {
    let spec: MoveSpec = ":0".parse().unwrap();

    assert!(spec.from.is_empty());
    assert_eq!(spec.to, 0);
}

#[test]
fn test_malformed_specs() {
    assert!("3".parse::<MoveSpec>().is_err());
    assert!("a:1".parse::<MoveSpec>().is_err());
    assert!("1:-2".parse::<MoveSpec>().is_err());
}
