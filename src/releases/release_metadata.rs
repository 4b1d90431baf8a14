use serde::{Deserialize, Serialize};

/// Metadata describing a single release of a package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReleaseMetadata {
    pub version: String,
}

impl ReleaseMetadata {
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self { version: version.into() }
    }
}
