//! Package name validation and canonicalization
//!
//! Package indexes accept names in any case, but report them in the casing the author
//! registered. [`normalize`] validates a user-supplied name and asks a [`NameRegistry`]
//! for the registered spelling. [`KnownNames`] is an in-memory registry, useful offline
//! and in tests; the PyPI index implements the same trait against the live service.

mod invalid_name_error;
mod known_names;
mod name_registry;
mod normalize;

pub use invalid_name_error::InvalidNameError;
pub use known_names::{KnownNames, index_key};
pub use name_registry::NameRegistry;
pub use normalize::{NO_PACKAGE, normalize};
