#![allow(missing_docs)]
//! Grouping one row's arrivals.

use subway_sign::config::{GroupDefinition, LayoutConfig, RowLayout};
use subway_sign::groups::{DisplayGroup, build_groups, build_row_groups};
use subway_sign::snapshot::{Arrival, RowKey};

fn arrivals(records: &[(&str, i32)]) -> Vec<Arrival> {
    records
        .iter()
        .map(|(route, minutes)| Arrival::new(*route, *minutes))
        .collect()
}

fn summary(groups: &[DisplayGroup]) -> Vec<(&str, Vec<i32>)> {
    groups
        .iter()
        .map(|group| (group.label.as_str(), group.times.clone()))
        .collect()
}

fn grouped(definitions: Vec<GroupDefinition>) -> RowLayout {
    RowLayout {
        label: None,
        groups: definitions,
    }
}

#[test]
fn default_grouping_is_per_route_in_first_seen_order() {
    let groups = build_groups(&arrivals(&[("A", 3), ("C", 5), ("A", 1)]), None);
    assert_eq!(summary(&groups), [("A", vec![1, 3]), ("C", vec![5])]);
}

#[test]
fn empty_definitions_behave_like_no_layout() {
    let input = arrivals(&[("F", 4), ("M", 2)]);
    let layout = grouped(Vec::new());
    assert_eq!(build_groups(&input, Some(&layout)), build_groups(&input, None));
}

#[test]
fn definitions_merge_and_sort() {
    let layout = grouped(vec![GroupDefinition::new("ACE", ["A", "C", "E"])]);
    let groups = build_groups(&arrivals(&[("C", 7), ("A", 9), ("E", 2), ("A", 4)]), Some(&layout));
    assert_eq!(summary(&groups), [("A", vec![2, 4, 7, 9])]);
    assert_eq!(groups[0].visible_times(), [2, 4]);
}

#[test]
fn label_is_first_member_even_when_absent() {
    let layout = grouped(vec![GroupDefinition::new("ACE", ["A", "C", "E"])]);
    let groups = build_groups(&arrivals(&[("E", 6)]), Some(&layout));
    assert_eq!(summary(&groups), [("A", vec![6])]);
}

#[test]
fn empty_merge_is_omitted() {
    let layout = grouped(vec![
        GroupDefinition::new("BDFM", ["B", "D", "F", "M"]),
        GroupDefinition::new("NQRW", ["N", "Q", "R", "W"]),
    ]);
    let groups = build_groups(&arrivals(&[("Q", 3)]), Some(&layout));
    assert_eq!(summary(&groups), [("N", vec![3])]);
}

#[test]
fn unlisted_routes_are_dropped() {
    let layout = grouped(vec![GroupDefinition::new("1", ["1"])]);
    let groups = build_groups(&arrivals(&[("1", 8), ("2", 1)]), Some(&layout));
    assert_eq!(summary(&groups), [("1", vec![8])]);
}

#[test]
fn overlapping_membership_appears_in_each_group() {
    let layout = grouped(vec![
        GroupDefinition::new("AC", ["A", "C"]),
        GroupDefinition::new("CE", ["C", "E"]),
    ]);
    let groups = build_groups(&arrivals(&[("C", 5), ("A", 2)]), Some(&layout));
    assert_eq!(summary(&groups), [("A", vec![2, 5]), ("C", vec![5])]);
}

#[test]
fn row_groups_use_that_rows_layout() {
    let layout = LayoutConfig::from_rows([(
        RowKey::Row2,
        grouped(vec![GroupDefinition::new("ACE", ["A", "C", "E"])]),
    )]);
    let input = arrivals(&[("A", 3), ("C", 1)]);
    assert_eq!(
        summary(&build_row_groups(RowKey::Row1, &input, &layout)),
        [("A", vec![3]), ("C", vec![1])]
    );
    assert_eq!(
        summary(&build_row_groups(RowKey::Row2, &input, &layout)),
        [("A", vec![1, 3])]
    );
}

#[test]
fn visible_times_never_exceed_two() {
    let group = DisplayGroup::new("6", vec![9, 1, 5]);
    assert_eq!(group.times, [1, 5, 9]);
    assert_eq!(group.visible_times(), [1, 5]);
    assert_eq!(DisplayGroup::new("6", vec![4]).visible_times(), [4]);
}
