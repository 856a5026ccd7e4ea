use crate::select::Selection;
use smallvec::SmallVec;
use tracing::debug;
use viewfilter_scene::View;

/// Builds the filtered view list from the original one. For every retained
/// view the neighbor list is rebuilt in a single pass: edges whose target
/// was removed are dropped, surviving edges get their target rewritten
/// through the index map. Scores and relative edge order are untouched.
///
/// The original lists are never mutated mid-traversal; each filtered list
/// is assembled fresh, so edge indices are always either all-old (input) or
/// all-new (output), never a mix.
///
/// Returns the filtered views plus, aligned with them, the number of edges
/// dropped from each view.
pub fn rewrite_neighbors(views: &[View], selection: &Selection) -> (Vec<View>, Vec<usize>) {
    let mut filtered = Vec::with_capacity(selection.retained.len());
    let mut dropped = Vec::with_capacity(selection.retained.len());

    for &old_idx in &selection.retained {
        let view = &views[old_idx as usize];
        let neighbors: SmallVec<_> = view
            .neighbors
            .iter()
            .filter_map(|neighbor| {
                selection.index_map.get(&neighbor.view).map(|&new_idx| {
                    let mut neighbor = *neighbor;
                    neighbor.view = new_idx;
                    neighbor
                })
            })
            .collect();

        let num_dropped = view.neighbors.len() - neighbors.len();
        if num_dropped > 0 {
            debug!("removed {} stale neighbors of view {}", num_dropped, view.name);
        }
        dropped.push(num_dropped);
        filtered.push(View {
            name: view.name.clone(),
            neighbors,
        });
    }

    (filtered, dropped)
}
