//! Merge one row's arrivals into the groups the row draws.
//!
//! Without a layout, every route gets its own group in first-seen order. With a layout,
//! each [`GroupDefinition`] pulls the arrivals of its member routes into one sorted list
//! under the first member's bullet. Routes that no definition names are left out, and a
//! route named by two definitions shows up in both.

use log::debug;

use crate::config::{GroupDefinition, LayoutConfig, RowLayout};
use crate::snapshot::{Arrival, RowKey};

/// Times shown per group; the rest stay in [`DisplayGroup::times`] but are not drawn.
pub const VISIBLE_TIMES_PER_GROUP: usize = 2;

/// One bullet and its arrival times.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisplayGroup {
    /// Route whose bullet and color represent the group.
    pub label: String,
    /// Minutes until each arrival, ascending.
    pub times: Vec<i32>,
}

impl DisplayGroup {
    /// Create a group, sorting `times`.
    #[must_use]
    pub fn new(label: impl Into<String>, mut times: Vec<i32>) -> Self {
        times.sort_unstable();
        Self {
            label: label.into(),
            times,
        }
    }

    /// The times that get drawn.
    #[must_use]
    pub fn visible_times(&self) -> &[i32] {
        let visible_len = self.times.len().min(VISIBLE_TIMES_PER_GROUP);
        self.times.get(..visible_len).unwrap_or_default()
    }
}

/// Groups for `row`, using its entry in `layout` if it has one.
#[must_use]
pub fn build_row_groups(
    row: RowKey,
    arrivals: &[Arrival],
    layout: &LayoutConfig,
) -> Vec<DisplayGroup> {
    build_groups(arrivals, layout.row(row))
}

/// Groups for one row's arrivals.
///
/// A layout with no group definitions behaves like no layout.
#[must_use]
pub fn build_groups(arrivals: &[Arrival], layout: Option<&RowLayout>) -> Vec<DisplayGroup> {
    let by_route = times_by_route(arrivals);
    match layout.map(|layout| layout.groups.as_slice()) {
        Some(definitions) if !definitions.is_empty() => merge_groups(&by_route, definitions),
        _ => by_route
            .into_iter()
            .map(|(route, times)| DisplayGroup {
                label: route.to_owned(),
                times,
            })
            .collect(),
    }
}

/// Per-route sorted times, routes in first-seen order.
fn times_by_route(arrivals: &[Arrival]) -> Vec<(&str, Vec<i32>)> {
    let mut by_route: Vec<(&str, Vec<i32>)> = Vec::new();
    for arrival in arrivals {
        let route = arrival.route.as_str();
        match by_route.iter_mut().find(|(seen, _)| *seen == route) {
            Some((_, times)) => times.push(arrival.minutes_until),
            None => by_route.push((route, vec![arrival.minutes_until])),
        }
    }
    for (_, times) in &mut by_route {
        times.sort_unstable();
    }
    by_route
}

fn merge_groups(
    by_route: &[(&str, Vec<i32>)],
    definitions: &[GroupDefinition],
) -> Vec<DisplayGroup> {
    let groups: Vec<DisplayGroup> = definitions
        .iter()
        .filter_map(|definition| {
            let label = definition.member_routes.first()?;
            let merged: Vec<i32> = definition
                .member_routes
                .iter()
                .filter_map(|member| {
                    by_route
                        .iter()
                        .find(|(route, _)| *route == member.as_str())
                        .map(|(_, times)| times)
                })
                .flatten()
                .copied()
                .collect();
            (!merged.is_empty()).then(|| DisplayGroup::new(label.clone(), merged))
        })
        .collect();

    for (route, times) in by_route {
        let grouped = definitions.iter().any(|definition| {
            definition
                .member_routes
                .iter()
                .any(|member| member.as_str() == *route)
        });
        if !grouped {
            debug!(
                "build_groups: route {} not in any group, dropping {} arrivals",
                route,
                times.len()
            );
        }
    }

    groups
}
