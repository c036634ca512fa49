//! Core gift types.

use std::fmt;

/// Opaque gift identifier.
///
/// Taken verbatim from routes; never validated or normalised.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GiftId(String);

impl GiftId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for GiftId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for GiftId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for GiftId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for GiftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Catalog entry shown on the landing screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiftSummary {
    id: GiftId,
    name: String,
}

impl GiftSummary {
    pub fn new(id: impl Into<GiftId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> &GiftId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Detail record shown on a gift's own screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiftDetail {
    id: GiftId,
    name: String,
    description: String,
}

impl GiftDetail {
    pub fn new(
        id: impl Into<GiftId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn id(&self) -> &GiftId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
