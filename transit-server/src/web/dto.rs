//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::cities::City;
use crate::grid::{CellState, Position};
use crate::modes::{CategoryOutcome, CostEstimate, ModeSelection, VehicleClass};
use crate::network::{ComparisonResult, FastRoute, Leg, NetworkKind, NetworkReport, TravelTime};
use crate::pathfinder::{Connectivity, Route};

/// Request to solve a single maze.
#[derive(Debug, Deserialize)]
pub struct SolveMazeRequest {
    /// Cell codes, one row per inner list (0 obstacle, anything else walkable)
    pub grid: Vec<Vec<u32>>,

    pub start: Position,

    pub end: Position,

    /// Neighbourhood to search (defaults to eight-connected)
    #[serde(default)]
    pub connectivity: Connectivity,
}

/// Result of solving a maze.
#[derive(Debug, Serialize)]
pub struct SolveMazeResponse {
    /// Whether the endpoints are connected
    pub found: bool,

    /// Grid distance of the route
    pub total_cost: Option<f64>,

    /// Route cells from start to end
    pub path: Vec<Position>,

    /// Number of expanded cells
    pub expanded: usize,

    /// Annotated grid as state codes (10 walkable, 20 border, 30 visited, 40 route)
    pub grid: Option<Vec<Vec<u8>>>,
}

impl SolveMazeResponse {
    pub fn found(route: &Route) -> Self {
        Self {
            found: true,
            total_cost: Some(route.total_cost),
            path: route.path.clone(),
            expanded: route.expanded,
            grid: Some(route.grid.to_codes()),
        }
    }

    pub fn not_found() -> Self {
        Self {
            found: false,
            total_cost: None,
            path: Vec::new(),
            expanded: 0,
            grid: None,
        }
    }
}

/// Query for a mode comparison between two cities.
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    /// Departure city name
    pub from: String,

    /// Arrival city name
    pub to: String,
}

/// Distance and time of one route.
#[derive(Debug, Serialize)]
pub struct LegView {
    pub distance_km: i64,

    /// Minutes
    pub minutes: TravelTime,

    /// Formatted as "2h 9min"
    pub time: String,
}

impl From<Leg> for LegView {
    fn from(leg: Leg) -> Self {
        Self {
            distance_km: leg.distance_km,
            minutes: leg.time,
            time: leg.time.to_string(),
        }
    }
}

/// One network of a compared pair.
#[derive(Debug, Serialize)]
pub struct NetworkView {
    pub label: String,

    /// Travel figures, if the network could be used
    pub leg: Option<LegView>,

    /// Why the network could not be used
    pub unusable: Option<String>,

    /// Annotated grid cells
    pub route_cells: usize,
    pub visited_cells: usize,
}

impl NetworkView {
    fn from_route(label: &str, route: &Route, leg: Leg) -> Self {
        Self {
            label: label.to_string(),
            leg: Some(leg.into()),
            unusable: None,
            route_cells: route.grid.count(CellState::SolutionPath),
            visited_cells: route.grid.count(CellState::Visited),
        }
    }
}

/// One category's comparison.
#[derive(Debug, Serialize)]
pub struct CategoryView {
    pub label: &'static str,
    pub description: &'static str,
    pub vehicle: VehicleClass,

    /// Label of the faster network of the pair
    pub winner: Option<String>,

    pub slow: Option<NetworkView>,
    pub fast: Option<NetworkView>,

    /// Share of the slow route lying on the fast network
    pub overlap_ratio: Option<f64>,

    /// Winning network's annotated grid as state codes
    pub grid: Option<Vec<Vec<u8>>>,

    /// Why the comparison failed
    pub error: Option<String>,
}

impl CategoryView {
    pub fn from_outcome(outcome: &CategoryOutcome) -> Self {
        let category = &outcome.category;
        let mut view = Self {
            label: category.label,
            description: category.description,
            vehicle: category.vehicle,
            winner: None,
            slow: None,
            fast: None,
            overlap_ratio: None,
            grid: None,
            error: None,
        };

        match &outcome.result {
            Ok(result) => view.fill(result),
            Err(e) => view.error = Some(e.to_string()),
        }
        view
    }

    fn fill(&mut self, result: &ComparisonResult) {
        self.winner = Some(result.label.clone());
        self.slow = Some(NetworkView::from_route(
            &result.slow_label,
            &result.slow.route,
            result.slow.total(),
        ));
        self.overlap_ratio = result.slow.overlap.ratio();
        self.grid = Some(result.grid().to_codes());
        self.fast = Some(match &result.fast {
            FastRoute::Usable { route, leg } => {
                NetworkView::from_route(&result.fast_label, route, *leg)
            }
            FastRoute::Unusable(reason) => NetworkView {
                label: result.fast_label.clone(),
                leg: None,
                unusable: Some(reason.to_string()),
                route_cells: 0,
                visited_cells: 0,
            },
        });
    }
}

/// The overall fastest mode.
#[derive(Debug, Serialize)]
pub struct FastestView {
    pub category: &'static str,
    pub network: String,

    /// True when the winning network is the fast one of its pair
    pub fast_network: bool,

    pub leg: LegView,
}

/// Response for a mode comparison.
#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub start: String,
    pub end: String,
    pub fastest: Option<FastestView>,
    pub categories: Vec<CategoryView>,

    /// Per-network distance/time strings and the winners of each category
    pub report: NetworkReport,

    /// Per-vehicle totals over each category's winning distance
    pub estimates: Vec<CostEstimate>,
}

impl CompareResponse {
    pub fn new(
        start: &str,
        end: &str,
        selection: &ModeSelection,
        estimates: Vec<CostEstimate>,
    ) -> Self {
        let fastest = selection.winner().map(|(category, result)| FastestView {
            category: category.label,
            network: result.label.clone(),
            fast_network: result.winner == NetworkKind::Fast,
            leg: Leg {
                distance_km: result.distance_km,
                time: result.time,
            }
            .into(),
        });

        let categories = selection
            .outcomes
            .iter()
            .map(CategoryView::from_outcome)
            .collect();

        Self {
            start: start.to_string(),
            end: end.to_string(),
            fastest,
            categories,
            report: selection.report.clone(),
            estimates,
        }
    }
}

/// Registered cities.
#[derive(Debug, Serialize)]
pub struct CitiesResponse {
    pub cities: Vec<City>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

