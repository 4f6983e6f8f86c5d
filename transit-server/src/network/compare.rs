//! Slow versus fast network comparison.

use std::fmt;

use tracing::{debug, info, warn};

use crate::grid::{EndpointError, Grid, Position};
use crate::pathfinder::{PathResult, Route, find_path_with};

use super::config::{NetworkProfile, TravelConfig};
use super::error::CompareError;
use super::overlap::Overlap;
use super::pair::NetworkPair;
use super::report::{NetworkEntry, NetworkReport};
use super::units::{Leg, TravelTime};

/// Which side of a network pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkKind {
    Slow,
    Fast,
}

/// Why the fast network could not be used for an endpoint pair.
#[derive(Debug, Clone, PartialEq)]
pub enum Unusable {
    /// The endpoints are not connected on the fast network.
    NotFound,

    /// An endpoint is not on the fast network at all.
    Endpoint(EndpointError),
}

impl fmt::Display for Unusable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unusable::NotFound => f.write_str("endpoints are not connected"),
            Unusable::Endpoint(e) => write!(f, "{e}"),
        }
    }
}

/// The slow network's route, priced with the fast-network overlap.
#[derive(Debug, Clone)]
pub struct SlowRoute {
    pub route: Route,
    pub overlap: Overlap,

    /// The part of the route on fast-network cells, at fast speed.
    pub fast_leg: Leg,

    /// The remainder, at slow speed.
    pub slow_leg: Leg,
}

impl SlowRoute {
    pub fn total(&self) -> Leg {
        self.fast_leg + self.slow_leg
    }
}

/// Outcome on the fast network.
#[derive(Debug, Clone)]
pub enum FastRoute {
    Usable { route: Route, leg: Leg },
    Unusable(Unusable),
}

impl FastRoute {
    pub fn leg(&self) -> Option<Leg> {
        match self {
            FastRoute::Usable { leg, .. } => Some(*leg),
            FastRoute::Unusable(_) => None,
        }
    }
}

/// Result of comparing one network pair between two endpoints.
#[derive(Debug, Clone)]
pub struct ComparisonResult {
    /// The network with the shorter travel time.
    pub winner: NetworkKind,

    /// Label of the winning network.
    pub label: String,

    /// Real distance of the winning route, whole kilometres.
    pub distance_km: i64,

    /// Travel time of the winning route.
    pub time: TravelTime,

    pub slow_label: String,
    pub slow: SlowRoute,

    pub fast_label: String,
    pub fast: FastRoute,

    /// Both networks' formatted distance and time.
    pub report: NetworkReport,
}

impl ComparisonResult {
    /// Annotated grid of the winning route.
    pub fn grid(&self) -> &Grid {
        match (&self.winner, &self.fast) {
            (NetworkKind::Fast, FastRoute::Usable { route, .. }) => &route.grid,
            _ => &self.slow.route.grid,
        }
    }
}

/// Decide whether the slow or the fast network of `pair` reaches `end`
/// from `start` sooner.
///
/// The fast network is searched on its own. The slow network's route is
/// priced in two portions: the share of its cells lying on the fast
/// network's footprint travels at fast speed, the rest at slow speed.
/// Ties go to the fast network.
///
/// An unusable fast network (no connection, or an endpoint off the network)
/// leaves the slow network as the answer. The slow network failing to
/// connect valid endpoints is an error, as it is the fallback for every
/// endpoint pair.
///
/// The two profiles must have distinct labels; the report is keyed by label.
pub fn compare_networks(
    pair: &NetworkPair,
    start: Position,
    end: Position,
    slow: &NetworkProfile,
    fast: &NetworkProfile,
    config: &TravelConfig,
) -> Result<ComparisonResult, CompareError> {
    if slow.label == fast.label {
        return Err(CompareError::SharedLabel {
            label: slow.label.clone(),
        });
    }

    pair.slow()
        .validate_endpoints(start, end)
        .map_err(|source| CompareError::Endpoint {
            label: slow.label.clone(),
            source,
        })?;

    let fast_route = search_fast(pair.fast(), start, end, fast, config)?;

    let route = match find_path_with(pair.slow(), start, end, &config.search) {
        Ok(PathResult::Found(route)) => route,
        Ok(PathResult::NotFound) => {
            return Err(CompareError::SlowNetworkUnreachable {
                label: slow.label.clone(),
                start,
                end,
            });
        }
        Ok(PathResult::AllocationFailure) => {
            return Err(CompareError::AllocationFailure {
                label: slow.label.clone(),
            });
        }
        Err(source) => {
            return Err(CompareError::Endpoint {
                label: slow.label.clone(),
                source,
            });
        }
    };

    let overlap = Overlap::measure(&route.grid, pair.fast());
    let (fast_portion, slow_portion) =
        overlap
            .split(route.total_cost)
            .ok_or_else(|| CompareError::DegenerateOverlap {
                label: slow.label.clone(),
            })?;

    let scale = config.distance_scale;
    let slow_route = SlowRoute {
        fast_leg: Leg::from_grid_distance(fast_portion, fast.speed_kmh, scale),
        slow_leg: Leg::from_grid_distance(slow_portion, slow.speed_kmh, scale),
        overlap,
        route,
    };
    let slow_total = slow_route.total();

    debug!(
        label = %slow.label,
        cost = slow_route.route.total_cost,
        route_cells = overlap.total_cells,
        overlapping = overlap.overlapping_cells,
        minutes = slow_total.time.total_minutes(),
        "priced slow network route"
    );

    let mut report = NetworkReport::default();
    report
        .networks
        .insert(slow.label.clone(), NetworkEntry::route(&slow_total));
    report.networks.insert(
        fast.label.clone(),
        match fast_route.leg() {
            Some(leg) => NetworkEntry::route(&leg),
            None => NetworkEntry::no_route(),
        },
    );

    let (winner, profile, leg) = match fast_route.leg() {
        Some(leg) if leg.time <= slow_total.time => (NetworkKind::Fast, fast, leg),
        _ => (NetworkKind::Slow, slow, slow_total),
    };
    report.time_efficient.push(profile.label.clone());

    info!(
        winner = %profile.label,
        distance_km = leg.distance_km,
        time = %leg.time,
        "network comparison complete"
    );

    Ok(ComparisonResult {
        winner,
        label: profile.label.clone(),
        distance_km: leg.distance_km,
        time: leg.time,
        slow_label: slow.label.clone(),
        slow: slow_route,
        fast_label: fast.label.clone(),
        fast: fast_route,
        report,
    })
}

fn search_fast(
    grid: &Grid,
    start: Position,
    end: Position,
    profile: &NetworkProfile,
    config: &TravelConfig,
) -> Result<FastRoute, CompareError> {
    match find_path_with(grid, start, end, &config.search) {
        Ok(PathResult::Found(route)) => {
            let leg =
                Leg::from_grid_distance(route.total_cost, profile.speed_kmh, config.distance_scale);
            Ok(FastRoute::Usable { route, leg })
        }
        Ok(PathResult::NotFound) => {
            info!(label = %profile.label, start = %start, end = %end, "no route on fast network");
            Ok(FastRoute::Unusable(Unusable::NotFound))
        }
        Ok(PathResult::AllocationFailure) => Err(CompareError::AllocationFailure {
            label: profile.label.clone(),
        }),
        Err(e) => {
            warn!(label = %profile.label, error = %e, "fast network unusable for these endpoints");
            Ok(FastRoute::Unusable(Unusable::Endpoint(e)))
        }
    }
}
