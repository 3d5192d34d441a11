//! Renderer — the response-shaping decision engine.
//!
//! One call, one response:
//!
//! ```text
//! version check ──conflict──▶ 409 + X-Inertia-Location
//!       │
//!       ▼
//! partial reload (component override, prop filter)
//!       │
//!       ▼
//! PageObject ──serialize──▶ X-Inertia: true ? JSON : HTML template
//! ```

use std::fmt;
use std::path::PathBuf;

use crate::{
    headers, redirect, AttributeEscaping, HttpResponse, InertiaError, InertiaRequest, PageObject,
    PageObjectSerializer, PartialReload, RenderOptions, SerializationError,
    SimpleTemplateRenderer, StaticVersion, TemplateRenderer, VersionProvider,
    DEFAULT_TEMPLATE_PATH,
};

/// Turns requests plus [`RenderOptions`] into Inertia protocol responses.
///
/// Holds only its three capabilities (serializer, template renderer, version
/// provider) and no per-request state, so a single instance can be shared
/// behind an `Arc` by every request handler.
///
/// # Example
///
/// ```
/// use inertia::{InertiaRequest, RenderOptions, Renderer};
///
/// struct Get;
///
/// impl InertiaRequest for Get {
///     fn method(&self) -> &str { "GET" }
///     fn header(&self, name: &str) -> Option<&str> {
///         name.eq_ignore_ascii_case("x-inertia").then_some("true")
///     }
/// }
///
/// let renderer = Renderer::builder()
///     .template_renderer(|json: &str| format!("<div data-page='{json}'></div>"))
///     .version("1")
///     .build()
///     .unwrap();
///
/// let response = renderer.render(&Get, &RenderOptions::new("Home", "/")).unwrap();
/// assert_eq!(response.status(), 200);
/// assert_eq!(response.header("X-Inertia"), Some("true"));
/// ```
pub struct Renderer {
    serializer: Box<dyn PageObjectSerializer>,
    template_renderer: Box<dyn TemplateRenderer>,
    version_provider: Box<dyn VersionProvider>,
}

impl Renderer {
    /// Start configuring a renderer.
    #[must_use]
    pub fn builder() -> RendererBuilder {
        RendererBuilder::default()
    }

    /// Renderer from explicit capabilities.
    pub fn new(
        serializer: impl PageObjectSerializer + 'static,
        template_renderer: impl TemplateRenderer + 'static,
        version_provider: impl VersionProvider + 'static,
    ) -> Self {
        Self {
            serializer: Box::new(serializer),
            template_renderer: Box::new(template_renderer),
            version_provider: Box::new(version_provider),
        }
    }

    /// Current asset version, as reported by the version provider.
    #[must_use]
    pub fn version(&self) -> Option<String> {
        self.version_provider.version()
    }

    /// Render `options` for `request`.
    ///
    /// - `GET` whose `X-Inertia-Version` differs from the current version →
    ///   `409` with `X-Inertia-Location: options.url`, no body. Nothing is serialized.
    /// - `X-Inertia: true` → `200`, `application/json`, the page object as body.
    /// - Otherwise → `200`, `text/html`, the template rendered around the page object.
    ///
    /// # Errors
    ///
    /// Returns [`SerializationError`] if the page object cannot be serialized.
    /// No response is produced in that case.
    pub fn render<R: InertiaRequest + ?Sized>(
        &self,
        request: &R,
        options: &RenderOptions,
    ) -> Result<HttpResponse, SerializationError> {
        let version = self.version_provider.version();

        if is_version_conflict(request, version.as_deref()) {
            tracing::debug!(
                client_version = request.header(headers::X_INERTIA_VERSION),
                server_version = version.as_deref(),
                url = %options.url,
                "inertia asset version conflict"
            );
            return Ok(HttpResponse::new(409).with_header(headers::X_INERTIA_LOCATION, &options.url));
        }

        let partial = PartialReload::from_request(request);
        let page = page_object(&partial, options, version);

        let json = self
            .serializer
            .serialize(&page, partial.only.as_deref())
            .inspect_err(|err| {
                tracing::warn!(component = %page.component, error = %err, "page object serialization failed");
            })?;

        if request.is_inertia() {
            tracing::debug!(
                component = %page.component,
                partial = partial.is_partial(),
                "inertia json response"
            );
            Ok(HttpResponse::new(200)
                .with_header(headers::CONTENT_TYPE, "application/json")
                .with_header(headers::X_INERTIA, "true")
                .with_body(json))
        } else {
            tracing::debug!(component = %page.component, "inertia html response");
            Ok(HttpResponse::new(200)
                .with_header(headers::CONTENT_TYPE, "text/html")
                .with_body(self.template_renderer.render(&json)))
        }
    }

    /// See [`redirect`](crate::redirect()).
    pub fn redirect<R: InertiaRequest + ?Sized>(&self, request: &R, location: &str) -> HttpResponse {
        redirect::redirect(request, location)
    }

    /// See [`location`](crate::location()).
    #[must_use]
    pub fn location(&self, url: &str) -> HttpResponse {
        redirect::location(url)
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer").finish_non_exhaustive()
    }
}

/// Conflict only for `GET` requests carrying a version header that differs
/// from `current`. A missing current version differs from every header value.
fn is_version_conflict<R: InertiaRequest + ?Sized>(request: &R, current: Option<&str>) -> bool {
    if !request.is_get() {
        return false;
    }
    request
        .header(headers::X_INERTIA_VERSION)
        .is_some_and(|client| Some(client) != current)
}

fn page_object(partial: &PartialReload, options: &RenderOptions, version: Option<String>) -> PageObject {
    let substituted;
    let options = match &partial.component {
        Some(component) => {
            substituted = options.with_partial_component(component);
            &substituted
        }
        None => options,
    };

    PageObject {
        component: options.component.clone(),
        props: options.props.clone(),
        url: options.url.clone(),
        version,
        encrypt_history: options.encrypt_history,
        clear_history: options.clear_history,
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Builder
// ═══════════════════════════════════════════════════════════════════════════════

enum TemplateSource {
    Renderer(Box<dyn TemplateRenderer>),
    Path(PathBuf),
}

/// Builder for [`Renderer`].
///
/// Defaults: [`JsonPageObjectSerializer`](crate::JsonPageObjectSerializer)
/// (feature `json`), a [`SimpleTemplateRenderer`] loaded from
/// [`DEFAULT_TEMPLATE_PATH`], and no asset version.
#[derive(Default)]
pub struct RendererBuilder {
    serializer: Option<Box<dyn PageObjectSerializer>>,
    template: Option<TemplateSource>,
    escaping: AttributeEscaping,
    version_provider: Option<Box<dyn VersionProvider>>,
}

impl RendererBuilder {
    /// Use a custom serializer.
    #[must_use]
    pub fn serializer(mut self, serializer: impl PageObjectSerializer + 'static) -> Self {
        self.serializer = Some(Box::new(serializer));
        self
    }

    /// Use a custom template renderer. Overrides [`template_path`](Self::template_path).
    #[must_use]
    pub fn template_renderer(mut self, renderer: impl TemplateRenderer + 'static) -> Self {
        self.template = Some(TemplateSource::Renderer(Box::new(renderer)));
        self
    }

    /// Load a [`SimpleTemplateRenderer`] from `path` at build time.
    #[must_use]
    pub fn template_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.template = Some(TemplateSource::Path(path.into()));
        self
    }

    /// Escaping for a template loaded via [`template_path`](Self::template_path).
    #[must_use]
    pub fn escaping(mut self, escaping: AttributeEscaping) -> Self {
        self.escaping = escaping;
        self
    }

    /// Use a custom version provider.
    #[must_use]
    pub fn version_provider(mut self, provider: impl VersionProvider + 'static) -> Self {
        self.version_provider = Some(Box::new(provider));
        self
    }

    /// Use a fixed asset version.
    #[must_use]
    pub fn version(self, version: impl Into<String>) -> Self {
        self.version_provider(StaticVersion::new(version))
    }

    /// Build the renderer, loading the template now rather than on first request.
    ///
    /// # Errors
    ///
    /// - [`InertiaError::Template`] if the template file cannot be read.
    /// - [`InertiaError::MissingDependency`] if no serializer was supplied and
    ///   the `json` feature is disabled.
    pub fn build(self) -> Result<Renderer, InertiaError> {
        let serializer = resolve_serializer(self.serializer, default_serializer())?;

        let template_renderer: Box<dyn TemplateRenderer> = match self.template {
            Some(TemplateSource::Renderer(renderer)) => renderer,
            Some(TemplateSource::Path(path)) => {
                Box::new(SimpleTemplateRenderer::from_path(path)?.with_escaping(self.escaping))
            }
            None => Box::new(
                SimpleTemplateRenderer::from_path(DEFAULT_TEMPLATE_PATH)?
                    .with_escaping(self.escaping),
            ),
        };

        let version_provider = self
            .version_provider
            .unwrap_or_else(|| Box::new(StaticVersion::none()));

        Ok(Renderer {
            serializer,
            template_renderer,
            version_provider,
        })
    }
}

impl fmt::Debug for RendererBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererBuilder")
            .field("serializer", &self.serializer.is_some())
            .field("escaping", &self.escaping)
            .field("version_provider", &self.version_provider.is_some())
            .finish_non_exhaustive()
    }
}

/// A supplied serializer wins over the feature-provided default.
fn resolve_serializer(
    supplied: Option<Box<dyn PageObjectSerializer>>,
    fallback: Option<Box<dyn PageObjectSerializer>>,
) -> Result<Box<dyn PageObjectSerializer>, InertiaError> {
    supplied.or(fallback).ok_or_else(|| {
        InertiaError::MissingDependency(
            "no page object serializer configured and the `json` feature is disabled; \
             enable it or call `RendererBuilder::serializer`"
                .into(),
        )
    })
}

#[cfg(feature = "json")]
fn default_serializer() -> Option<Box<dyn PageObjectSerializer>> {
    Some(Box::new(crate::JsonPageObjectSerializer))
}

#[cfg(not(feature = "json"))]
fn default_serializer() -> Option<Box<dyn PageObjectSerializer>> {
    None
}
