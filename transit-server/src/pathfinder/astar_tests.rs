//! Scenario and property tests for the A* search.

use std::f64::consts::SQRT_2;

use proptest::prelude::*;

use super::*;
use crate::grid::{CellState, Endpoint, EndpointError, Grid, Position};

const EPS: f64 = 1e-9;

fn pos(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

fn grid(rows: &[&str]) -> Grid {
    // '#' is an obstacle, anything else walkable
    let raw = rows
        .iter()
        .map(|row| row.chars().map(|c| u32::from(c != '#')).collect())
        .collect();
    Grid::from_rows(raw).unwrap()
}

fn open_grid(width: usize, height: usize) -> Grid {
    Grid::filled(width, height, CellState::Walkable)
}

fn route(grid: &Grid, start: Position, end: Position) -> Route {
    find_path(grid, start, end)
        .unwrap()
        .into_route()
        .expect("expected a route")
}

fn step_cost(a: Position, b: Position) -> f64 {
    if a.x != b.x && a.y != b.y { SQRT_2 } else { 1.0 }
}

#[test]
fn open_grid_diagonal() {
    let grid = open_grid(5, 5);
    let r = route(&grid, pos(0, 0), pos(4, 4));

    assert!((r.total_cost - 4.0 * SQRT_2).abs() < EPS);
    assert_eq!(
        r.path,
        vec![pos(0, 0), pos(1, 1), pos(2, 2), pos(3, 3), pos(4, 4)]
    );
    assert_eq!(r.grid.count(CellState::SolutionPath), 5);
}

#[test]
fn wall_forces_detour_through_bottom_row() {
    // Column 2 blocked on rows 0-3, row 4 open.
    let grid = grid(&[
        "..#..", //
        "..#..",
        "..#..",
        "..#..",
        ".....",
    ]);
    let r = route(&grid, pos(0, 0), pos(4, 4));

    // (0,0) -> (2,4) is 2 diagonal + 2 straight, then 2 straight to (4,4).
    let expected = 4.0 + 2.0 * SQRT_2;
    assert!(
        (r.total_cost - expected).abs() < EPS,
        "cost {} != {}",
        r.total_cost,
        expected
    );
    assert!(r.path.contains(&pos(2, 4)));
    assert_eq!(r.grid.count(CellState::Obstacle), 4);
}

#[test]
fn four_connected_uses_manhattan_steps() {
    let grid = open_grid(5, 5);
    let config = SearchConfig::new(Connectivity::Four);
    let r = find_path_with(&grid, pos(0, 0), pos(4, 4), &config)
        .unwrap()
        .into_route()
        .unwrap();

    assert_eq!(r.total_cost, 8.0);
    assert_eq!(r.path.len(), 9);
    for pair in r.path.windows(2) {
        let d = (pair[0].x - pair[1].x).abs() + (pair[0].y - pair[1].y).abs();
        assert_eq!(d, 1);
    }
}

#[test]
fn start_equals_end() {
    let grid = grid(&["...", ".#.", "..."]);
    let r = route(&grid, pos(2, 2), pos(2, 2));

    assert_eq!(r.total_cost, 0.0);
    assert_eq!(r.path, vec![pos(2, 2)]);
    assert_eq!(r.grid.count(CellState::SolutionPath), 1);
    assert_eq!(r.grid.get(pos(2, 2)), Some(CellState::SolutionPath));
}

#[test]
fn disconnected_islands_not_found() {
    let grid = grid(&[
        "..#..", //
        "..#..",
        "..#..",
    ]);
    let result = find_path(&grid, pos(0, 0), pos(4, 2)).unwrap();
    assert!(matches!(result, PathResult::NotFound));
    assert!(!result.is_found());
}

#[test]
fn diagonal_may_slip_between_corner_obstacles() {
    let grid = grid(&[".#", "#."]);
    let r = route(&grid, pos(0, 0), pos(1, 1));
    assert!((r.total_cost - SQRT_2).abs() < EPS);

    // Without diagonals the same cells are disconnected.
    let config = SearchConfig::new(Connectivity::Four);
    let result = find_path_with(&grid, pos(0, 0), pos(1, 1), &config).unwrap();
    assert!(matches!(result, PathResult::NotFound));
}

#[test]
fn endpoint_errors_all_combinations() {
    let grid = grid(&["...", ".#.", "..."]);
    let ok = pos(0, 0);
    let outside = pos(3, 0);
    let wall = pos(1, 1);

    let cases = [
        (outside, ok, Endpoint::Start, true),
        (ok, outside, Endpoint::End, true),
        (wall, ok, Endpoint::Start, false),
        (ok, wall, Endpoint::End, false),
    ];

    for (start, end, endpoint, out_of_bounds) in cases {
        let err = find_path(&grid, start, end).unwrap_err();
        assert_eq!(err.endpoint(), endpoint);
        match err {
            EndpointError::OutOfBounds { .. } => assert!(out_of_bounds, "{err}"),
            EndpointError::BlockedEndpoint { .. } => assert!(!out_of_bounds, "{err}"),
        }
    }
}

#[test]
fn input_grid_is_not_mutated() {
    let grid = grid(&["....", ".##.", "...."]);
    let before = grid.clone();
    let _ = route(&grid, pos(0, 0), pos(3, 2));
    assert_eq!(grid, before);
}

#[test]
fn annotations_are_consistent() {
    let grid = grid(&[
        "........", //
        ".######.",
        "......#.",
        "######..",
        "........",
    ]);
    let r = route(&grid, pos(0, 0), pos(0, 4));

    // Obstacles never change.
    assert_eq!(r.grid.count(CellState::Obstacle), grid.count(CellState::Obstacle));

    // Every route cell is marked and nothing else is.
    assert_eq!(r.grid.count(CellState::SolutionPath), r.path.len());
    for p in &r.path {
        assert_eq!(r.grid.get(*p), Some(CellState::SolutionPath));
    }

    // Expanded nodes off the route are visited; the route itself is
    // removed from the visited count.
    let visited = r.grid.count(CellState::Visited);
    assert!(visited > 0);
    assert!(visited <= r.expanded);
}

#[test]
fn border_cells_were_never_expanded() {
    let grid = open_grid(7, 7);
    let r = route(&grid, pos(0, 3), pos(6, 3));

    // A straight corridor with an admissible heuristic expands only the
    // row itself; its vertical neighbours stay on the border.
    assert_eq!(r.grid.count(CellState::Visited), 0);
    assert!(r.grid.count(CellState::Border) > 0);
    assert_eq!(r.expanded, 6);
}

#[test]
fn cost_matches_backpointer_chain() {
    let grid = grid(&[
        "..........", //
        "..####....",
        ".....#..#.",
        "..#..#..#.",
        "..#.....#.",
    ]);
    let r = route(&grid, pos(0, 4), pos(9, 0));

    let summed: f64 = r.path.windows(2).map(|w| step_cost(w[0], w[1])).sum();
    assert!((summed - r.total_cost).abs() < EPS);
    for pair in r.path.windows(2) {
        assert!(pair[0].is_adjacent(pair[1]));
        assert!(grid.is_walkable(pair[1]));
    }
}

#[test]
fn deterministic_for_fixed_input() {
    let grid = grid(&[
        "......", //
        ".#..#.",
        "......",
        ".#..#.",
        "......",
    ]);
    let a = route(&grid, pos(0, 0), pos(5, 4));
    let b = route(&grid, pos(0, 0), pos(5, 4));
    assert_eq!(a.path, b.path);
    assert_eq!(a.grid, b.grid);
    assert_eq!(a.expanded, b.expanded);
}

#[test]
fn equal_cost_ties_prefer_cells_nearer_the_goal() {
    // Every monotone route costs 4 here, so every frontier node has f = 4.
    // Lower h wins, then insertion order.
    let grid = open_grid(3, 3);
    let config = SearchConfig::new(Connectivity::Four);
    let r = find_path_with(&grid, pos(0, 0), pos(2, 2), &config)
        .unwrap()
        .into_route()
        .unwrap();

    assert_eq!(r.total_cost, 4.0);
    assert_eq!(
        r.path,
        vec![pos(0, 0), pos(1, 0), pos(2, 0), pos(2, 1), pos(2, 2)]
    );
    assert_eq!(r.expanded, 4);
    // (0,1) and (1,1) were discovered but never expanded.
    assert_eq!(r.grid.get(pos(0, 1)), Some(CellState::Border));
    assert_eq!(r.grid.get(pos(1, 1)), Some(CellState::Border));
}

/// Exhaustive Dijkstra used as an optimality oracle on small grids.
fn reference_cost(grid: &Grid, start: Position, end: Position, connectivity: Connectivity) -> Option<f64> {
    let n = grid.len();
    let mut dist = vec![f64::INFINITY; n];
    let mut done = vec![false; n];
    dist[grid.index(start)?] = 0.0;

    loop {
        let current = (0..n)
            .filter(|&i| !done[i] && dist[i].is_finite())
            .min_by(|&a, &b| dist[a].total_cmp(&dist[b]));
        let Some(current) = current else {
            break;
        };
        done[current] = true;

        let p = grid.position(current);
        for &(dx, dy, cost) in connectivity.steps() {
            let np = p.offset(dx, dy);
            if !grid.is_walkable(np) {
                continue;
            }
            let ni = grid.index(np)?;
            if dist[current] + cost < dist[ni] {
                dist[ni] = dist[current] + cost;
            }
        }
    }

    let d = dist[grid.index(end)?];
    d.is_finite().then_some(d)
}

fn small_grid_case() -> impl Strategy<Value = (Grid, Position, Position, Connectivity)> {
    (1usize..=6, 1usize..=6)
        .prop_flat_map(|(w, h)| {
            (
                prop::collection::vec(prop::bool::weighted(0.7), w * h),
                0..w,
                0..h,
                0..w,
                0..h,
                prop_oneof![Just(Connectivity::Four), Just(Connectivity::Eight)],
                Just(w),
            )
        })
        .prop_map(|(open, sx, sy, ex, ey, connectivity, w)| {
            let mut open = open;
            open[sy * w + sx] = true;
            open[ey * w + ex] = true;
            let rows = open
                .chunks(w)
                .map(|row| row.iter().map(|&o| u32::from(o)).collect())
                .collect();
            let grid = Grid::from_rows(rows).unwrap();
            (
                grid,
                pos(sx as i32, sy as i32),
                pos(ex as i32, ey as i32),
                connectivity,
            )
        })
}

proptest! {
    #[test]
    fn matches_exhaustive_search((grid, start, end, connectivity) in small_grid_case()) {
        let config = SearchConfig::new(connectivity);
        let result = find_path_with(&grid, start, end, &config).unwrap();
        let expected = reference_cost(&grid, start, end, connectivity);

        match (result, expected) {
            (PathResult::Found(r), Some(best)) => {
                prop_assert!(
                    (r.total_cost - best).abs() < EPS,
                    "A* cost {} vs exhaustive {}",
                    r.total_cost,
                    best
                );
            }
            (PathResult::NotFound, None) => {}
            (other, best) => prop_assert!(false, "mismatch: {:?} vs {:?}", other.is_found(), best),
        }
    }

    #[test]
    fn routes_are_walkable_adjacent_and_costed((grid, start, end, connectivity) in small_grid_case()) {
        let config = SearchConfig::new(connectivity);
        let Some(r) = find_path_with(&grid, start, end, &config).unwrap().into_route() else {
            return Ok(());
        };

        prop_assert_eq!(r.path.first().copied(), Some(start));
        prop_assert_eq!(r.path.last().copied(), Some(end));

        let mut summed = 0.0;
        for pair in r.path.windows(2) {
            prop_assert!(pair[0].is_adjacent(pair[1]));
            if connectivity == Connectivity::Four {
                prop_assert!(pair[0].x == pair[1].x || pair[0].y == pair[1].y);
            }
            summed += step_cost(pair[0], pair[1]);
        }
        prop_assert!((summed - r.total_cost).abs() < EPS);

        for p in &r.path {
            prop_assert!(grid.is_walkable(*p));
        }
        prop_assert_eq!(r.grid.count(CellState::SolutionPath), r.path.len());
        prop_assert_eq!(r.grid.count(CellState::Obstacle), grid.count(CellState::Obstacle));
    }

    #[test]
    fn same_start_and_end_costs_nothing((grid, start, _end, connectivity) in small_grid_case()) {
        let config = SearchConfig::new(connectivity);
        let r = find_path_with(&grid, start, start, &config).unwrap().into_route();
        prop_assert!(r.is_some());
        let r = r.unwrap();
        prop_assert_eq!(r.total_cost, 0.0);
        prop_assert_eq!(r.grid.count(CellState::SolutionPath), 1);
    }
}
