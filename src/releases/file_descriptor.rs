use chrono::NaiveDate;
use core::fmt::{Display, Formatter, Result as FmtResult};
use serde::{Deserialize, Serialize};

/// One distribution file belonging to a release.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub filename: String,
    pub downloads: u64,
    pub upload_time: NaiveDate,
}

impl FileDescriptor {
    #[must_use]
    pub fn new(filename: impl Into<String>, downloads: u64, upload_time: NaiveDate) -> Self {
        Self {
            filename: filename.into(),
            downloads,
            upload_time,
        }
    }
}

impl Display for FileDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} ({}): {} downloads", self.filename, self.upload_time, self.downloads)
    }
}
