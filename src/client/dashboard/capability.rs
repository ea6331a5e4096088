/// An optional hook or behaviour a configuration may or may not provide.
///
/// Used instead of a bare `Option` so call sites read as "is this supported"
/// rather than "is this set".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability<T> {
    Supported(T),
    Unsupported,
}

impl<T> Capability<T> {
    pub fn is_supported(&self) -> bool {
        matches!(self, Capability::Supported(_))
    }
}

impl<T> Default for Capability<T> {
    fn default() -> Self {
        Capability::Unsupported
    }
}
