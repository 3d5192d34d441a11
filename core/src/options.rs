//! `RenderOptions`: per-call inputs to [`Renderer::render`](crate::Renderer::render).

use crate::page::Props;

/// What to render for one request.
///
/// History flags live here rather than on the renderer: every call carries
/// its own values, so one renderer can serve concurrent requests.
///
/// ```
/// use inertia::RenderOptions;
///
/// let options = RenderOptions {
///     encrypt_history: true,
///     ..RenderOptions::new("Users/Index", "/users")
/// };
/// assert_eq!(options.component, "Users/Index");
/// assert!(options.props.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOptions {
    /// Client-side component to mount.
    pub component: String,

    /// Component props; `None` serializes as `null`.
    pub props: Option<Props>,

    /// URL echoed back in the page object and used for version-conflict reloads.
    pub url: String,

    /// Encrypt this page's history entry.
    pub encrypt_history: bool,

    /// Clear previously encrypted history.
    pub clear_history: bool,
}

impl RenderOptions {
    /// Options for `component` at `url` with no props and both history flags off.
    #[must_use]
    pub fn new(component: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    /// Replace the props (builder pattern).
    #[must_use]
    pub fn with_props(mut self, props: Props) -> Self {
        self.props = Some(props);
        self
    }

    /// A copy targeting `component` instead, as requested by a partial reload.
    ///
    /// Props, url and history flags carry over unchanged.
    #[must_use]
    pub fn with_partial_component(&self, component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            ..self.clone()
        }
    }
}
