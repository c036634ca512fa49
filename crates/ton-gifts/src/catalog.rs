//! Item catalog store for the landing screen.

use tracing::debug;

use crate::router::Route;
use crate::types::GiftSummary;

/// Placeholder catalog contents, in display order.
pub const PLACEHOLDER_GIFTS: [(&str, &str); 2] = [("1", "Gift #1"), ("2", "Gift #2")];

/// Gift summaries backing the catalog screen.
///
/// Populated synchronously on activation and dropped with the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStore {
    gifts: Vec<GiftSummary>,
}

impl CatalogStore {
    /// Populate the store for a freshly entered catalog screen.
    pub fn activate() -> Self {
        let gifts: Vec<GiftSummary> = PLACEHOLDER_GIFTS
            .iter()
            .map(|(id, name)| GiftSummary::new(*id, *name))
            .collect();
        debug!("Catalog activated with {} gifts", gifts.len());
        Self { gifts }
    }

    /// Create a store over arbitrary entries, keeping their order.
    pub fn from_gifts(gifts: Vec<GiftSummary>) -> Self {
        Self { gifts }
    }

    /// All summaries in display order.
    pub fn get_all(&self) -> &[GiftSummary] {
        &self.gifts
    }

    /// Target path of each entry's link, in display order.
    pub fn links(&self) -> impl Iterator<Item = (&GiftSummary, String)> {
        self.gifts
            .iter()
            .map(|gift| (gift, Route::Detail(gift.id().clone()).path()))
    }

    pub fn len(&self) -> usize {
        self.gifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gifts.is_empty()
    }
}
