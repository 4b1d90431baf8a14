use super::TallyError;
use crate::releases::FileDescriptor;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// A single file that contributed to a download count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileTally {
    pub version: String,
    pub filename: String,
    pub upload_time: NaiveDate,
    pub downloads: u64,
}

/// The outcome of a download count, with the files that contributed to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadReport {
    package: String,
    total: u64,
    files: Vec<FileTally>,
}

impl DownloadReport {
    #[must_use]
    pub(crate) const fn new(package: String) -> Self {
        Self {
            package,
            total: 0,
            files: Vec::new(),
        }
    }

    /// Adds `file` to the report.
    ///
    /// Fails without changing the report if the total would no longer fit in a `u64`.
    pub(crate) fn record(&mut self, version: &str, file: &FileDescriptor) -> Result<(), TallyError> {
        self.total = self
            .total
            .checked_add(file.downloads)
            .ok_or_else(|| TallyError::CountOverflow {
                package: self.package.clone(),
            })?;

        self.files.push(FileTally {
            version: version.to_string(),
            filename: file.filename.clone(),
            upload_time: file.upload_time,
            downloads: file.downloads,
        });

        Ok(())
    }

    /// The canonical name of the package that was counted
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// The counted files, in the order the index reported them
    #[must_use]
    pub fn files(&self) -> &[FileTally] {
        &self.files
    }

    /// Download subtotals per release version
    ///
    /// Each subtotal is bounded by [`total`](Self::total), so none of them can overflow.
    #[must_use]
    pub fn by_version(&self) -> BTreeMap<&str, u64> {
        let mut totals = BTreeMap::new();
        for file in &self.files {
            let subtotal = totals.entry(file.version.as_str()).or_insert(0_u64);
            *subtotal = subtotal.saturating_add(file.downloads);
        }

        totals
    }
}
