/// Filters and output settings for a download count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountOptions {
    /// Only count files of the release whose version string equals this one.
    pub version: Option<String>,

    /// Only count files whose name contains a match for this regular expression.
    pub pattern: Option<String>,

    /// Emit one diagnostic line per counted file.
    pub verbose: bool,
}

impl Default for CountOptions {
    fn default() -> Self {
        Self {
            version: None,
            pattern: None,
            verbose: true,
        }
    }
}

impl CountOptions {
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
