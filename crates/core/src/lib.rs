//! Filters a reconstruction scene's view graph down to a whitelisted set of
//! views and renumbers the surviving neighbor edges.
//!
//! The pipeline is a fixed sequence of passes over the view arena: select
//! the surviving views ([`select_views`]), rebuild their neighbor lists
//! under the new numbering ([`rewrite_neighbors`]), then check that every
//! remaining edge resolves ([`validate_references`]). The whole transform is
//! deterministic and in-memory; nothing here is retryable.

mod rewrite;
mod select;
mod validate;
mod whitelist;

pub use rewrite::rewrite_neighbors;
pub use select::{select_views, Selection};
pub use validate::validate_references;
pub use whitelist::{FilterSet, WhitelistLoadError};

use std::time::Instant;
use thiserror::Error;
use tracing::{debug, trace};
use viewfilter_scene::{Scene, View, ViewId};

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("no views left after filtering")]
    EmptyResult,

    #[error("neighbor of view {view} targets index {target}, outside the {bound} retained views")]
    ReferenceIntegrity {
        view: String,
        target: ViewId,
        bound: usize,
    },
}

/// Diagnostic counters from one filter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterReport {
    /// View count before filtering.
    pub total: usize,
    /// View count after filtering.
    pub retained: usize,
    /// Edges dropped per retained view, in output order.
    pub dropped_edges: Vec<usize>,
}

impl FilterReport {
    pub fn total_dropped_edges(&self) -> usize {
        self.dropped_edges.iter().sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    pub views: Vec<View>,
    pub report: FilterReport,
}

/// Runs the full selection, rewrite and validation pipeline over a view
/// list, leaving the input untouched.
///
/// Fails with [`FilterError::EmptyResult`] when nothing survives, before
/// any rewrite work is done.
pub fn filter_views(views: &[View], filter: &FilterSet) -> Result<FilterOutcome, FilterError> {
    let start = Instant::now();

    let selection = select_views(views, filter);
    trace!("selected {} of {} views", selection.retained.len(), views.len());
    if selection.retained.is_empty() {
        return Err(FilterError::EmptyResult);
    }

    let (filtered, dropped_edges) = rewrite_neighbors(views, &selection);
    validate_references(&filtered)?;

    let report = FilterReport {
        total: views.len(),
        retained: filtered.len(),
        dropped_edges,
    };
    debug!(
        "filtered {} views down to {} in {:?}",
        report.total,
        report.retained,
        start.elapsed()
    );
    Ok(FilterOutcome {
        views: filtered,
        report,
    })
}

/// Filters a scene's views in place. The mesh is untouched. On error the
/// scene is left exactly as it was.
pub fn filter_scene(scene: &mut Scene, filter: &FilterSet) -> Result<FilterReport, FilterError> {
    let outcome = filter_views(&scene.views, filter)?;
    scene.views = outcome.views;
    Ok(outcome.report)
}
