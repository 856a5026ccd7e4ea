use crate::FilterSet;
use rustc_hash::FxHashMap;
use viewfilter_scene::{View, ViewId};

/// The outcome of the selection pass: which views survive and where each
/// one lands in the renumbered scene.
#[derive(Debug, Default)]
pub struct Selection {
    /// Original indices of the retained views, in scene order.
    pub retained: Vec<ViewId>,
    /// Original index to new index, defined only for retained views.
    ///
    /// Keyed by index rather than by name so that two views sharing a name
    /// each keep their own slot in the renumbered scene.
    pub index_map: FxHashMap<ViewId, ViewId>,
}

/// Scans the view list once and keeps every view whose name is in the
/// filter set. Survivors are numbered sequentially in the order they are
/// encountered, so their relative order is preserved.
pub fn select_views(views: &[View], filter: &FilterSet) -> Selection {
    let mut selection = Selection::default();
    for (idx, view) in views.iter().enumerate() {
        if !filter.contains(&view.name) {
            continue;
        }
        let old = idx as ViewId;
        let new = selection.retained.len() as ViewId;
        selection.retained.push(old);
        selection.index_map.insert(old, new);
    }
    selection
}

#[cfg(test)]
mod tests {
    use super::*;

    fn views(names: &[&str]) -> Vec<View> {
        names.iter().map(|&name| View::new(name)).collect()
    }

    #[test]
    fn survivors_keep_their_relative_order() {
        let views = views(&["a", "b", "c", "d", "e"]);
        let filter: FilterSet = ["e", "a", "c"].into_iter().collect();
        let selection = select_views(&views, &filter);
        assert_eq!(selection.retained, vec![0, 2, 4]);
    }

    #[test]
    fn index_map_is_a_bijection_onto_new_range() {
        let views = views(&["a", "b", "c", "d"]);
        let filter: FilterSet = ["b", "d"].into_iter().collect();
        let selection = select_views(&views, &filter);
        assert_eq!(selection.index_map.len(), selection.retained.len());
        let mut new_indices: Vec<ViewId> = selection.index_map.values().copied().collect();
        new_indices.sort_unstable();
        assert_eq!(new_indices, vec![0, 1]);
        assert_eq!(selection.index_map[&1], 0);
        assert_eq!(selection.index_map[&3], 1);
    }

    #[test]
    fn nothing_matching_selects_nothing() {
        let views = views(&["a", "b"]);
        let filter: FilterSet = ["z"].into_iter().collect();
        let selection = select_views(&views, &filter);
        assert!(selection.retained.is_empty());
        assert!(selection.index_map.is_empty());
    }

    #[test]
    fn duplicate_names_each_get_their_own_index() {
        let views = views(&["x", "y", "x"]);
        let filter: FilterSet = ["x"].into_iter().collect();
        let selection = select_views(&views, &filter);
        assert_eq!(selection.retained, vec![0, 2]);
        assert_eq!(selection.index_map[&0], 0);
        assert_eq!(selection.index_map[&2], 1);
    }
}
