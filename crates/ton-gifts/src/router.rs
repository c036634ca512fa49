//! Path-to-screen routing.
//!
//! | Path         | Route              |
//! |--------------|--------------------|
//! | `/`          | `Catalog`          |
//! | `/gift/{id}` | `Detail(id)`       |
//! | `/upload`    | `Submission`       |
//!
//! Static segments match case-insensitively and a single trailing slash is
//! ignored. Query strings and fragments are not part of the match. The gift id
//! is taken verbatim from its segment. Any other path matches no route.

use tracing::debug;

use crate::types::GiftId;

/// Path of the catalog screen.
pub const CATALOG_PATH: &str = "/";
/// Path of the submission screen.
pub const SUBMISSION_PATH: &str = "/upload";
/// Prefix segment of detail paths.
const DETAIL_SEGMENT: &str = "gift";

/// One of the three screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Catalog,
    Detail(GiftId),
    Submission,
}

impl Route {
    /// Match a path against the route table.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let rest = path.strip_prefix('/')?;
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        if rest.is_empty() {
            return Some(Route::Catalog);
        }

        let segments: Vec<&str> = rest.split('/').collect();
        match segments.as_slice() {
            [page] if page.eq_ignore_ascii_case("upload") => Some(Route::Submission),
            [prefix, id] if prefix.eq_ignore_ascii_case(DETAIL_SEGMENT) && !id.is_empty() => {
                Some(Route::Detail(GiftId::from(*id)))
            }
            _ => None,
        }
    }

    /// Canonical path of this route.
    pub fn path(&self) -> String {
        match self {
            Route::Catalog => CATALOG_PATH.to_string(),
            Route::Detail(id) => format!("/{}/{}", DETAIL_SEGMENT, id),
            Route::Submission => SUBMISSION_PATH.to_string(),
        }
    }

    /// Same screen, ignoring the gift id.
    pub fn same_screen(&self, other: &Route) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// Holds the active path and the route it matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    active_path: String,
    route: Option<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Start on the catalog.
    pub fn new() -> Self {
        Self {
            active_path: CATALOG_PATH.to_string(),
            route: Some(Route::Catalog),
        }
    }

    /// Move to `path`; returns the matched route, if any.
    pub fn navigate(&mut self, path: &str) -> Option<&Route> {
        let route = Route::parse(path);
        debug!("Navigating to {} -> {:?}", path, route);
        self.active_path = path.to_string();
        self.route = route;
        self.route.as_ref()
    }

    pub fn active_path(&self) -> &str {
        &self.active_path
    }

    /// Active route; `None` on an unmatched path.
    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }
}
