//! Download aggregation
//!
//! [`count_downloads`] canonicalizes a package name, walks every release the index reports
//! for it, and sums the download counters of the distribution files that survive the
//! optional version and filename filters. [`tally_downloads`] performs the same walk and
//! keeps the per-file breakdown in a [`DownloadReport`].
//!
//! The index is injected as any type implementing both
//! [`NameRegistry`](crate::names::NameRegistry) and
//! [`ReleaseSource`](crate::releases::ReleaseSource), and per-file diagnostics go to an
//! injected [`Diagnostics`] sink, so both can be replaced with deterministic doubles.

mod aggregator;
mod count_options;
mod diagnostics;
mod download_report;
mod tally_error;

pub use aggregator::{count_downloads, tally_downloads};
pub use count_options::CountOptions;
pub use diagnostics::{Diagnostics, LogDiagnostics};
pub use download_report::{DownloadReport, FileTally};
pub use tally_error::TallyError;
