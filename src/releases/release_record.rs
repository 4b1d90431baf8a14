use super::{FileDescriptor, ReleaseMetadata};

/// A released version of a package together with its distribution files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRecord {
    files: Vec<FileDescriptor>,
    metadata: ReleaseMetadata,
}

impl ReleaseRecord {
    #[must_use]
    pub const fn new(files: Vec<FileDescriptor>, metadata: ReleaseMetadata) -> Self {
        Self { files, metadata }
    }

    #[must_use]
    pub fn files(&self) -> &[FileDescriptor] {
        &self.files
    }

    #[must_use]
    pub const fn metadata(&self) -> &ReleaseMetadata {
        &self.metadata
    }

    /// Shorthand for `self.metadata().version`
    #[must_use]
    pub fn version(&self) -> &str {
        &self.metadata.version
    }

    #[must_use]
    pub fn into_parts(self) -> (Vec<FileDescriptor>, ReleaseMetadata) {
        (self.files, self.metadata)
    }
}
