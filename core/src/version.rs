//! `VersionProvider`: source of the current asset version.

/// Supplies the asset version compared against `X-Inertia-Version`.
///
/// Consulted once per render call; implementations may return a different
/// value after a deploy without rebuilding the renderer.
///
/// Closures work directly:
///
/// ```
/// use inertia::VersionProvider;
///
/// let provider = || Some("abc123".to_string());
/// assert_eq!(provider.version().as_deref(), Some("abc123"));
/// ```
pub trait VersionProvider: Send + Sync {
    /// Current version, or `None` when assets are unversioned.
    fn version(&self) -> Option<String>;
}

impl<F> VersionProvider for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn version(&self) -> Option<String> {
        self()
    }
}

/// A version fixed at construction time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticVersion(Option<String>);

impl StaticVersion {
    /// A fixed version string.
    pub fn new(version: impl Into<String>) -> Self {
        Self(Some(version.into()))
    }

    /// No version; every `X-Inertia-Version` header on a GET is a conflict.
    #[must_use]
    pub fn none() -> Self {
        Self(None)
    }
}

impl From<Option<String>> for StaticVersion {
    fn from(version: Option<String>) -> Self {
        Self(version)
    }
}

impl VersionProvider for StaticVersion {
    fn version(&self) -> Option<String> {
        self.0.clone()
    }
}
