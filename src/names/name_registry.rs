/// A source of registered package-name spellings.
pub trait NameRegistry {
    /// Returns the registered spelling of `name`, or `None` if the registry doesn't know it.
    ///
    /// `name` is always passed in lower case.
    fn canonical_name(&self, name: &str) -> Option<String>;
}

impl<T: NameRegistry + ?Sized> NameRegistry for &T {
    fn canonical_name(&self, name: &str) -> Option<String> {
        (**self).canonical_name(name)
    }
}
