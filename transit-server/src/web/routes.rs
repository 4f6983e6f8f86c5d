//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{error, warn};

use crate::cache::SelectError;
use crate::cities::CityError;
use crate::grid::{EndpointError, Grid, GridLoadError};
use crate::modes::{RatesError, estimate_costs};
use crate::network::CompareError;
use crate::pathfinder::{PathResult, SearchConfig, find_path_with};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/cities", get(list_cities))
        .route("/maze/solve", post(solve_maze))
        .route("/compare", get(compare))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List registered cities in file order.
async fn list_cities(State(state): State<AppState>) -> Json<CitiesResponse> {
    let cities = state.dataset().cities.iter().cloned().collect();
    Json(CitiesResponse { cities })
}

/// Solve a caller-supplied maze.
async fn solve_maze(Json(req): Json<SolveMazeRequest>) -> Result<Json<SolveMazeResponse>, AppError> {
    let grid = Grid::from_rows(req.grid)?;
    let config = SearchConfig::new(req.connectivity);
    let (start, end) = (req.start, req.end);

    // Search is CPU-bound; keep it off the async workers.
    let result = tokio::task::spawn_blocking(move || find_path_with(&grid, start, end, &config))
        .await
        .map_err(|e| AppError::Internal {
            message: format!("search worker failed: {e}"),
        })??;

    match result {
        PathResult::Found(route) => Ok(Json(SolveMazeResponse::found(&route))),
        PathResult::NotFound => Ok(Json(SolveMazeResponse::not_found())),
        PathResult::AllocationFailure => Err(AppError::Internal {
            message: "not enough memory to search this grid".to_string(),
        }),
    }
}

/// Compare every transport mode between two cities.
async fn compare(
    State(state): State<AppState>,
    Query(req): Query<CompareRequest>,
) -> Result<Json<CompareResponse>, AppError> {
    let selection = state.selector.select(&req.from, &req.to).await?;

    if let Some(e) = selection.failure() {
        return Err(e.clone().into());
    }

    let estimates = estimate_costs(&state.dataset().rates, &selection)?;

    Ok(Json(CompareResponse::new(
        &req.from,
        &req.to,
        &selection,
        estimates,
    )))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<GridLoadError> for AppError {
    fn from(e: GridLoadError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<EndpointError> for AppError {
    fn from(e: EndpointError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<CompareError> for AppError {
    fn from(e: CompareError) -> Self {
        match e {
            CompareError::Endpoint { .. } => AppError::BadRequest {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<SelectError> for AppError {
    fn from(e: SelectError) -> Self {
        match e {
            SelectError::City(CityError::UnknownCity { .. }) => AppError::NotFound {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<RatesError> for AppError {
    fn from(e: RatesError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
