//! Subsets of the PyPI JSON API documents that the index reads.

use crate::releases::{FileDescriptor, ReleaseMetadata};
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde::de::IgnoredAny;
use std::collections::BTreeMap;

/// `GET {base}/{name}/json`
#[derive(Debug, Deserialize)]
pub(super) struct ProjectDocument {
    pub info: ProjectInfo,

    #[serde(default)]
    pub releases: BTreeMap<String, IgnoredAny>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ProjectInfo {
    pub name: String,
}

/// `GET {base}/{name}/{version}/json`
#[derive(Debug, Deserialize)]
pub(super) struct ReleaseDocument {
    pub info: ReleaseInfo,

    #[serde(default)]
    pub urls: Vec<DistributionFile>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ReleaseInfo {
    pub version: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct DistributionFile {
    pub filename: String,

    /// -1 when the counter is unavailable
    #[serde(default)]
    pub downloads: i64,

    pub upload_time: NaiveDateTime,
}

impl From<DistributionFile> for FileDescriptor {
    fn from(file: DistributionFile) -> Self {
        Self::new(file.filename, u64::try_from(file.downloads).unwrap_or(0), file.upload_time.date())
    }
}

impl From<ReleaseInfo> for ReleaseMetadata {
    fn from(info: ReleaseInfo) -> Self {
        Self::new(info.version)
    }
}
