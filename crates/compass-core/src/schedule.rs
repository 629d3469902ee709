//! Schedule-domain queries built on the graph engine
//!
//! The engine knows nothing about students; everything here reduces to
//! `shortest_path`, `shortest_path_with_route` and `mst_cost` calls between
//! a student's residence and class locations.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{CompassError, Result};
use crate::graph::{CampusGraph, LocationId};
use crate::student::{ClassInfo, Student, StudentRegistry};

/// Travel time from a student's residence to one class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassDistance {
    pub code: String,
    /// `None` when the class location cannot be reached over open edges
    pub time: Option<u64>,
}

/// One hop between consecutive classes in a day's schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub from: String,
    pub to: String,
    pub travel: Option<u64>,
    /// Minutes between the end of `from` and the start of `to`
    pub gap: i64,
    pub feasible: bool,
}

fn enrolled_classes<'a>(registry: &'a StudentRegistry, student: &Student) -> Vec<&'a ClassInfo> {
    student
        .classes
        .iter()
        .filter_map(|code| registry.class_info(code))
        .collect()
}

/// Shortest travel time from the residence to each class, alphabetically by code
pub fn shortest_edges(
    graph: &CampusGraph,
    registry: &StudentRegistry,
    student: &Student,
) -> Vec<ClassDistance> {
    enrolled_classes(registry, student)
        .into_iter()
        .map(|class| ClassDistance {
            code: class.code.clone(),
            time: graph.shortest_path(student.residence, class.location),
        })
        .collect()
}

/// Locations on a shortest route from the residence to any reachable class
pub fn zone_locations(
    graph: &CampusGraph,
    registry: &StudentRegistry,
    student: &Student,
) -> BTreeSet<LocationId> {
    let mut zone = BTreeSet::from([student.residence]);
    for class in enrolled_classes(registry, student) {
        if let Some(route) = graph.shortest_path_with_route(student.residence, class.location) {
            zone.extend(route.stops);
        }
    }
    zone
}

/// Cost of the cheapest tree joining every location in the student's zone
pub fn student_zone(
    graph: &CampusGraph,
    registry: &StudentRegistry,
    student: &Student,
) -> Option<u64> {
    let zone = zone_locations(graph, registry, student);
    tracing::debug!(id = %student.id, locations = zone.len(), "student_zone");
    graph.mst_cost(zone)
}

/// Check whether each consecutive pair of classes (ordered by start time)
/// leaves enough time to walk between them.
///
/// Fails for students with fewer than two classes, since there is nothing
/// to check.
pub fn verify_schedule(
    graph: &CampusGraph,
    registry: &StudentRegistry,
    student: &Student,
) -> Result<Vec<Transition>> {
    let mut classes = enrolled_classes(registry, student);
    if classes.len() < 2 {
        return Err(CompassError::Rejected(format!(
            "student {} has fewer than two classes",
            student.id
        )));
    }
    classes.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.code.cmp(&b.code)));

    Ok(classes
        .windows(2)
        .map(|pair| {
            let (from, to) = (pair[0], pair[1]);
            let travel = graph.shortest_path(from.location, to.location);
            let gap = i64::from(to.start) - i64::from(from.end);
            Transition {
                from: from.code.clone(),
                to: to.code.clone(),
                travel,
                gap,
                feasible: travel.is_some_and(|minutes| i64::try_from(minutes).is_ok_and(|m| m <= gap)),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Residence 1; classes at 2, 3 and an isolated 9
    fn fixture() -> (CampusGraph, StudentRegistry) {
        let mut g = CampusGraph::new();
        for (id, name) in [(1, "Dorm"), (2, "Hall"), (3, "Lab"), (4, "Library"), (9, "Annex")] {
            g.add_location(id, name);
        }
        g.add_edge(1, 4, 3);
        g.add_edge(4, 2, 4);
        g.add_edge(1, 2, 10);
        g.add_edge(2, 3, 6);

        let mut sm = StudentRegistry::new();
        sm.add_class("AAA1000", 2, 600, 650);
        sm.add_class("BBB2000", 3, 655, 705);
        sm.add_class("CCC3000", 3, 720, 770);
        sm.add_class("ZZZ9000", 9, 800, 850);
        (g, sm)
    }

    #[test]
    fn test_shortest_edges_alphabetical_with_unreachable() {
        let (g, mut sm) = fixture();
        sm.insert_student("Ann", "11111111", 1, &["ZZZ9000", "BBB2000", "AAA1000"])
            .unwrap();
        let student = sm.student("11111111").unwrap();

        let edges = shortest_edges(&g, &sm, student);
        let summary: Vec<(&str, Option<u64>)> =
            edges.iter().map(|d| (d.code.as_str(), d.time)).collect();
        assert_eq!(
            summary,
            vec![("AAA1000", Some(7)), ("BBB2000", Some(13)), ("ZZZ9000", None)]
        );
    }

    #[test]
    fn test_student_zone_spans_route_locations() {
        let (g, mut sm) = fixture();
        sm.insert_student("Ann", "11111111", 1, &["BBB2000", "ZZZ9000"])
            .unwrap();
        let student = sm.student("11111111").unwrap();

        // route 1-4-2-3; the unreachable annex is left out
        assert_eq!(
            zone_locations(&g, &sm, student),
            BTreeSet::from([1, 2, 3, 4])
        );
        assert_eq!(student_zone(&g, &sm, student), Some(13));
    }

    #[test]
    fn test_student_zone_follows_closures() {
        let (mut g, mut sm) = fixture();
        sm.insert_student("Ann", "11111111", 1, &["AAA1000"]).unwrap();
        g.toggle_edge(1, 4);

        let student = sm.student("11111111").unwrap();
        assert_eq!(zone_locations(&g, &sm, student), BTreeSet::from([1, 2]));
        assert_eq!(student_zone(&g, &sm, student), Some(10));
    }

    #[test]
    fn test_verify_schedule_gaps() {
        let (g, mut sm) = fixture();
        sm.insert_student("Ann", "11111111", 1, &["CCC3000", "AAA1000", "BBB2000"])
            .unwrap();
        let student = sm.student("11111111").unwrap();

        let checks = verify_schedule(&g, &sm, student).unwrap();
        assert_eq!(checks.len(), 2);

        // 2 -> 3 takes 6 minutes, only 5 available
        assert_eq!(checks[0].from, "AAA1000");
        assert_eq!(checks[0].to, "BBB2000");
        assert_eq!(checks[0].gap, 5);
        assert!(!checks[0].feasible);

        // same building, 15 minutes available
        assert_eq!(checks[1].travel, Some(0));
        assert!(checks[1].feasible);
    }

    #[test]
    fn test_verify_schedule_needs_two_classes() {
        let (g, mut sm) = fixture();
        sm.insert_student("Ann", "11111111", 1, &["AAA1000"]).unwrap();
        let student = sm.student("11111111").unwrap();

        assert!(verify_schedule(&g, &sm, student).is_err());
    }
}
