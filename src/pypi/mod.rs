//! Release listings from the PyPI JSON API
//!
//! [`PypiIndex`] implements both [`NameRegistry`](crate::names::NameRegistry) and
//! [`ReleaseSource`](crate::releases::ReleaseSource), so it can be handed straight to
//! [`count_downloads`](crate::tally::count_downloads).

mod index_config;
mod pypi_index;
mod wire;

pub use index_config::{DEFAULT_INDEX_TOML, IndexConfig};
pub use pypi_index::PypiIndex;
