//! Download counts for packages on a package index
//!
//! [`count_downloads`] sums the download counters of every distribution file a package has
//! published, optionally narrowed to one release version or to file names matching a regular
//! expression. The index is reached through two small traits, [`NameRegistry`] for the
//! registered spelling of a package name and [`ReleaseSource`] for the release listing, so the
//! aggregation runs the same against [`PypiIndex`] or an in-memory index.
//!
//! ```no_run
//! use release_tally::{CountOptions, IndexConfig, LogDiagnostics, PypiIndex, count_downloads};
//!
//! # fn main() -> release_tally::Result<()> {
//! let index = PypiIndex::new(&IndexConfig::default())?;
//! let options = CountOptions::default().with_version("1.0");
//! let total = count_downloads(&index, Some("django"), &options, &LogDiagnostics)?;
//! println!("{total}");
//! # Ok(())
//! # }
//! ```

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod names;
pub mod pairs;
pub mod pypi;
pub mod releases;
pub mod tally;

pub use names::{InvalidNameError, KnownNames, NameRegistry, normalize};
pub use pairs::by_two;
pub use pypi::{IndexConfig, PypiIndex};
pub use releases::{FileDescriptor, ReleaseMetadata, ReleaseRecord, ReleaseSource, Releases};
pub use tally::{CountOptions, Diagnostics, DownloadReport, LogDiagnostics, TallyError, count_downloads, tally_downloads};
