use thiserror::Error;

/// A package name that doesn't follow the index's naming rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{name}' is not a valid package name")]
pub struct InvalidNameError {
    name: String,
}

impl InvalidNameError {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The rejected name, exactly as it was supplied
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
