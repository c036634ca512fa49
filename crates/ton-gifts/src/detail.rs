//! Item detail resolution for the detail screen.

use tracing::debug;

use crate::types::{GiftDetail, GiftId};

/// Description given to every resolved gift.
pub const PLACEHOLDER_DESCRIPTION: &str = "Описание из TON";

/// Turns an identifier into a detail record.
///
/// There is no backing catalog, so every identifier resolves.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetailResolver;

impl DetailResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, id: &GiftId) -> GiftDetail {
        GiftDetail::new(
            id.clone(),
            format!("Gift #{}", id),
            PLACEHOLDER_DESCRIPTION,
        )
    }
}

/// State of a mounted detail screen.
///
/// Holds the active route parameter and the detail resolved for it. A detail
/// is only ever exposed when its id equals the route parameter.
#[derive(Debug, Clone)]
pub struct DetailView {
    route_id: GiftId,
    detail: Option<GiftDetail>,
    resolver: DetailResolver,
}

impl DetailView {
    /// Mount the screen for `id`; nothing is resolved until [`Self::activate`].
    pub fn mount(id: GiftId) -> Self {
        Self {
            route_id: id,
            detail: None,
            resolver: DetailResolver::new(),
        }
    }

    /// Resolve the detail for the current route parameter.
    pub fn activate(&mut self) {
        debug!("Resolving gift {}", self.route_id);
        self.detail = Some(self.resolver.resolve(&self.route_id));
    }

    /// Follow a change of route parameter, re-resolving if it differs.
    ///
    /// Returns `true` when the parameter changed.
    pub fn set_route_id(&mut self, id: GiftId) -> bool {
        if id == self.route_id {
            return false;
        }
        self.route_id = id;
        self.detail = None;
        self.activate();
        true
    }

    pub fn route_id(&self) -> &GiftId {
        &self.route_id
    }

    /// Resolved detail, `None` while loading.
    pub fn detail(&self) -> Option<&GiftDetail> {
        self.detail
            .as_ref()
            .filter(|detail| detail.id() == &self.route_id)
    }

    pub fn is_loading(&self) -> bool {
        self.detail().is_none()
    }
}
