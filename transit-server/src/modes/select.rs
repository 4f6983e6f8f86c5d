//! Cross-category selection.

use tracing::{info, warn};

use crate::grid::Position;
use crate::network::{CompareError, ComparisonResult, NetworkReport, TravelConfig};

use super::category::{CATEGORIES, Category, TransportNetworks};

/// One category's comparison, successful or not.
#[derive(Debug, Clone)]
pub struct CategoryOutcome {
    pub category: Category,
    pub result: Result<ComparisonResult, CompareError>,
}

/// Outcome of running every category.
#[derive(Debug, Clone)]
pub struct ModeSelection {
    /// One outcome per category, in table order.
    pub outcomes: Vec<CategoryOutcome>,

    /// Index into `outcomes` of the fastest successful category.
    pub fastest: Option<usize>,

    /// Merged report of every successful category.
    pub report: NetworkReport,
}

impl ModeSelection {
    /// Combine per-category outcomes. Ties go to the earlier outcome.
    pub fn from_outcomes(outcomes: Vec<CategoryOutcome>) -> Self {
        let mut fastest: Option<(usize, &ComparisonResult)> = None;
        let mut report = NetworkReport::default();

        for (idx, outcome) in outcomes.iter().enumerate() {
            let result = match &outcome.result {
                Ok(result) => result,
                Err(e) => {
                    warn!(category = outcome.category.label, error = %e, "category comparison failed");
                    continue;
                }
            };
            report.merge(result.report.clone());
            if fastest.is_none_or(|(_, best)| result.time < best.time) {
                fastest = Some((idx, result));
            }
        }

        let fastest = fastest.map(|(idx, _)| idx);
        Self {
            outcomes,
            fastest,
            report,
        }
    }

    /// The fastest successful category and its comparison.
    pub fn winner(&self) -> Option<(&Category, &ComparisonResult)> {
        let outcome = &self.outcomes[self.fastest?];
        outcome.result.as_ref().ok().map(|r| (&outcome.category, r))
    }

    /// The first category error, if no category succeeded.
    pub fn failure(&self) -> Option<&CompareError> {
        if self.fastest.is_some() {
            return None;
        }
        self.outcomes.iter().find_map(|o| o.result.as_ref().err())
    }
}

/// Run every category's comparison in table order and pick the fastest.
///
/// A failing category does not stop the others; its error is kept in its
/// outcome.
pub fn select_mode(
    networks: &TransportNetworks,
    start: Position,
    end: Position,
    config: &TravelConfig,
) -> ModeSelection {
    let outcomes = CATEGORIES
        .iter()
        .map(|category| CategoryOutcome {
            category: *category,
            result: category.run(networks, start, end, config),
        })
        .collect();

    let selection = ModeSelection::from_outcomes(outcomes);
    if let Some((category, result)) = selection.winner() {
        info!(
            category = category.label,
            network = %result.label,
            time = %result.time,
            "fastest mode selected"
        );
    }
    selection
}
