use crate::FilterError;
use viewfilter_scene::View;

/// Post-filter consistency check: every neighbor edge must resolve to an
/// index inside the renumbered view list. A violation means the selection
/// or rewrite pass is defective and the scene must not be persisted.
///
/// Always enabled, never a debug assertion.
pub fn validate_references(views: &[View]) -> Result<(), FilterError> {
    let bound = views.len();
    for view in views {
        for neighbor in &view.neighbors {
            if neighbor.view as usize >= bound {
                return Err(FilterError::ReferenceIntegrity {
                    view: view.name.clone(),
                    target: neighbor.view,
                    bound,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;
    use viewfilter_scene::Neighbor;

    #[test]
    fn accepts_in_bounds_edges() {
        let views = vec![
            View {
                name: "a".to_string(),
                neighbors: smallvec![Neighbor { view: 1, score: 0.5 }],
            },
            View {
                name: "b".to_string(),
                neighbors: smallvec![Neighbor { view: 0, score: 0.5 }],
            },
        ];
        assert!(validate_references(&views).is_ok());
    }

    #[test]
    fn reports_out_of_bounds_edge() {
        let views = vec![View {
            name: "a".to_string(),
            neighbors: smallvec![Neighbor { view: 7, score: 0.5 }],
        }];
        let err = validate_references(&views).unwrap_err();
        assert!(matches!(
            err,
            FilterError::ReferenceIntegrity { target: 7, bound: 1, .. }
        ));
    }
}
