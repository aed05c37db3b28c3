#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_options() {
    let opts = RevealOptions::default();
    assert_eq!(opts.threshold, 0.1);
    assert_eq!(opts.root_margin, "0px 0px -50px 0px");
}

#[test]
fn options_partial_json_keeps_other_defaults() {
    let opts: RevealOptions = serde_json::from_str(r#"{"threshold": 0.5}"#).unwrap();
    assert_eq!(opts.threshold, 0.5);
    assert_eq!(opts.root_margin, REVEAL_ROOT_MARGIN);
}

#[test]
fn intersecting_targets_reveal() {
    let mut tracker = RevealTracker::new(3);
    let newly = tracker.on_entries([(0, true), (1, false), (2, true)]);
    assert_eq!(newly, vec![0, 2]);
    assert!(tracker.is_revealed(0));
    assert!(!tracker.is_revealed(1));
    assert_eq!(tracker.pending(), 1);
}

#[test]
fn each_target_reveals_once() {
    let mut tracker = RevealTracker::new(2);
    assert_eq!(tracker.on_entries([(1, true)]), vec![1]);
    assert!(tracker.on_entries([(1, true)]).is_empty());
    assert!(tracker.on_entries([(1, false), (1, true)]).is_empty());
}

#[test]
fn duplicate_entries_in_one_batch_reveal_once() {
    let mut tracker = RevealTracker::new(1);
    assert_eq!(tracker.on_entries([(0, true), (0, true)]), vec![0]);
}

#[test]
fn unknown_index_is_ignored() {
    let mut tracker = RevealTracker::new(1);
    assert!(tracker.on_entries([(5, true)]).is_empty());
    assert!(!tracker.is_revealed(5));
    assert_eq!(tracker.pending(), 1);
}
