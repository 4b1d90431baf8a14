//! Release records as reported by a package index
//!
//! A package index describes each released version of a package as a [`ReleaseRecord`]: the
//! distribution files that make up the release, plus the release's own metadata. Indexes
//! hand these out through the [`ReleaseSource`] trait as a lazy sequence, one record per
//! version, in no particular order.

mod file_descriptor;
mod release_metadata;
mod release_record;
mod release_source;

pub use file_descriptor::FileDescriptor;
pub use release_metadata::ReleaseMetadata;
pub use release_record::ReleaseRecord;
pub use release_source::{ReleaseSource, Releases};
