//! Serde-deserializable renderer settings.
//!
//! Loaded from YAML or JSON (picked by file extension):
//!
//! ```yaml
//! template-path: templates/app.html
//! encrypt-history: true
//! version: "8f2c1a"
//! escape-attribute: false
//! ```
//!
//! Every key is optional.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{
    AttributeEscaping, InertiaError, RenderOptions, Renderer, DEFAULT_TEMPLATE_PATH,
};

/// Settings for a [`Renderer`] built via [`Renderer::from_config`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct InertiaConfig {
    /// HTML template containing the `@PageObject@` placeholder.
    pub template_path: PathBuf,

    /// Default for [`RenderOptions::encrypt_history`] in [`options`](Self::options).
    pub encrypt_history: bool,

    /// Fixed asset version. `None` means no version.
    pub version: Option<String>,

    /// HTML-escape the page JSON on substitution.
    pub escape_attribute: bool,
}

impl Default for InertiaConfig {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            encrypt_history: false,
            version: None,
            escape_attribute: false,
        }
    }
}

impl InertiaConfig {
    /// Read settings from a `.json`, `.yaml` or `.yml` file.
    ///
    /// Any extension other than `json` is parsed as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`InertiaError::Config`] if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InertiaError> {
        let path = path.as_ref();
        let config_err = |reason: String| InertiaError::Config {
            path: path.to_path_buf(),
            reason,
        };

        let content = std::fs::read_to_string(path).map_err(|e| config_err(e.to_string()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config: Self = if is_json {
            serde_json::from_str(&content).map_err(|e| config_err(e.to_string()))?
        } else {
            serde_yaml::from_str(&content).map_err(|e| config_err(e.to_string()))?
        };

        tracing::debug!(path = %path.display(), ?config, "loaded inertia config");
        Ok(config)
    }

    /// Render options for `component` at `url`, with this config's history default.
    #[must_use]
    pub fn options(&self, component: impl Into<String>, url: impl Into<String>) -> RenderOptions {
        RenderOptions {
            encrypt_history: self.encrypt_history,
            ..RenderOptions::new(component, url)
        }
    }

    fn escaping(&self) -> AttributeEscaping {
        if self.escape_attribute {
            AttributeEscaping::Html
        } else {
            AttributeEscaping::Verbatim
        }
    }
}

impl Renderer {
    /// Build a renderer with the default serializer from `config`.
    ///
    /// # Errors
    ///
    /// Same as [`RendererBuilder::build`](crate::RendererBuilder::build).
    pub fn from_config(config: &InertiaConfig) -> Result<Self, InertiaError> {
        let mut builder = Renderer::builder()
            .template_path(config.template_path.clone())
            .escaping(config.escaping());

        if let Some(version) = &config.version {
            builder = builder.version(version.clone());
        }
        builder.build()
    }
}
