//! SQL form of [`Viewer::can_view`].
//!
//! Queries embed [`VisibilityFilter::clause`] in their `WHERE` and bind
//! [`VisibilityFilter::is_admin`] and [`VisibilityFilter::viewer_id`] at the
//! positions it names, so rows the caller may not see are never loaded.

use vidcat_core::types::DbId;
use vidcat_core::visibility::Viewer;

/// Bind values for the visibility predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityFilter {
    pub is_admin: bool,
    /// `None` for anonymous callers; `owner_id = NULL` never matches.
    pub viewer_id: Option<DbId>,
}

impl VisibilityFilter {
    /// Predicate over the `videos` table aliased as `alias`, using bind
    /// parameters `$first_param` (is_admin) and `$first_param + 1` (viewer id).
    pub fn clause(alias: &str, first_param: usize) -> String {
        let second = first_param + 1;
        format!("(${first_param} OR {alias}.is_published OR {alias}.owner_id = ${second})")
    }
}

impl From<&Viewer> for VisibilityFilter {
    fn from(viewer: &Viewer) -> Self {
        Self {
            is_admin: viewer.is_admin(),
            viewer_id: viewer.user_id(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clause_numbers_parameters() {
        assert_eq!(
            VisibilityFilter::clause("v", 2),
            "($2 OR v.is_published OR v.owner_id = $3)"
        );
    }

    #[test]
    fn filter_from_viewer() {
        assert_eq!(
            VisibilityFilter::from(&Viewer::Anonymous),
            VisibilityFilter {
                is_admin: false,
                viewer_id: None
            }
        );
        assert_eq!(
            VisibilityFilter::from(&Viewer::User(4)),
            VisibilityFilter {
                is_admin: false,
                viewer_id: Some(4)
            }
        );
        assert_eq!(
            VisibilityFilter::from(&Viewer::Admin(1)),
            VisibilityFilter {
                is_admin: true,
                viewer_id: Some(1)
            }
        );
    }
}
