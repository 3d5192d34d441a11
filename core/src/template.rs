//! `TemplateRenderer` — wraps the serialized page in the HTML shell for first loads.

use crate::TemplateError;
use std::path::Path;

/// Placeholder replaced by the page JSON in [`SimpleTemplateRenderer`] templates.
///
/// Typically the value of a `data-page` attribute on the SPA root element:
///
/// ```html
/// <div id="app" data-page='@PageObject@'></div>
/// ```
///
/// With a double-quoted attribute, enable [`AttributeEscaping::Html`]:
///
/// ```html
/// <div id="app" data-page="@PageObject@"></div>
/// ```
pub const PAGE_OBJECT_PLACEHOLDER: &str = "@PageObject@";

/// Produces the full HTML document for non-Inertia requests.
///
/// Receives the serialized page object exactly as the serializer produced it.
/// Any escaping required by the template's context is the renderer's job.
pub trait TemplateRenderer: Send + Sync {
    /// Render the document around `page_json`.
    fn render(&self, page_json: &str) -> String;
}

impl<F> TemplateRenderer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn render(&self, page_json: &str) -> String {
        self(page_json)
    }
}

/// How [`SimpleTemplateRenderer`] inserts the page JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AttributeEscaping {
    /// Insert the JSON unchanged.
    #[default]
    Verbatim,
    /// Escape `&`, `"`, `'`, `<` and `>` so the JSON is safe inside a quoted HTML attribute.
    Html,
}

/// Placeholder-substitution renderer over a template held in memory.
///
/// Every occurrence of [`PAGE_OBJECT_PLACEHOLDER`] is replaced. The page JSON
/// is inserted literally; `$` and `\` carry no special meaning.
#[derive(Debug, Clone)]
pub struct SimpleTemplateRenderer {
    template: String,
    escaping: AttributeEscaping,
}

impl SimpleTemplateRenderer {
    /// Renderer over the given template text.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            escaping: AttributeEscaping::Verbatim,
        }
    }

    /// Load the template from disk once, up front.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Read`] if the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        let template = std::fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        if !template.contains(PAGE_OBJECT_PLACEHOLDER) {
            tracing::warn!(
                path = %path.display(),
                "template has no {PAGE_OBJECT_PLACEHOLDER} placeholder; page data will not reach the client"
            );
        }
        tracing::info!(path = %path.display(), bytes = template.len(), "loaded inertia template");

        Ok(Self::new(template))
    }

    /// Set the escaping mode (builder pattern).
    #[must_use]
    pub fn with_escaping(mut self, escaping: AttributeEscaping) -> Self {
        self.escaping = escaping;
        self
    }

    /// The raw template text.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }
}

impl TemplateRenderer for SimpleTemplateRenderer {
    fn render(&self, page_json: &str) -> String {
        match self.escaping {
            AttributeEscaping::Verbatim => self.template.replace(PAGE_OBJECT_PLACEHOLDER, page_json),
            AttributeEscaping::Html => self
                .template
                .replace(PAGE_OBJECT_PLACEHOLDER, &escape_attribute(page_json)),
        }
    }
}

fn escape_attribute(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len() + raw.len() / 4);
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}
