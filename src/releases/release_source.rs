use super::ReleaseRecord;
use crate::Result;

/// A lazy sequence of release records.
///
/// Pulling an item may perform I/O, so each item carries its own error.
pub type Releases<'a> = Box<dyn Iterator<Item = Result<ReleaseRecord>> + 'a>;

/// A package index that can list the releases of a package.
pub trait ReleaseSource {
    /// Lists every release of `package`, one record per version.
    ///
    /// `package` is the canonical package name. A package that doesn't exist, or has no
    /// releases, yields an empty sequence.
    fn release_info(&self, package: &str) -> Result<Releases<'_>>;
}

impl<T: ReleaseSource + ?Sized> ReleaseSource for &T {
    fn release_info(&self, package: &str) -> Result<Releases<'_>> {
        (**self).release_info(package)
    }
}
