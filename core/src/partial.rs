//! Partial reloads — `X-Inertia-Partial-Component` and `X-Inertia-Partial-Data`.
//!
//! The two headers are independent: a component override never implies a
//! prop filter, and a prop filter applies whether or not the component header
//! is present.

use crate::{headers, InertiaRequest};

/// Partial-reload instructions read from a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialReload {
    /// Component replacing the one in the render options, for this response only.
    pub component: Option<String>,

    /// Prop keys to keep. `None` keeps every prop.
    pub only: Option<Vec<String>>,
}

impl PartialReload {
    /// Read both partial-reload headers from `request`.
    #[must_use]
    pub fn from_request<R: InertiaRequest + ?Sized>(request: &R) -> Self {
        Self {
            component: request
                .header(headers::X_INERTIA_PARTIAL_COMPONENT)
                .map(str::to_owned),
            only: request
                .header(headers::X_INERTIA_PARTIAL_DATA)
                .map(parse_partial_data),
        }
    }

    /// Whether either header was present.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.component.is_some() || self.only.is_some()
    }
}

/// Split an `X-Inertia-Partial-Data` value into prop keys.
///
/// Entries are trimmed; empty entries are dropped.
///
/// ```
/// use inertia::parse_partial_data;
///
/// assert_eq!(parse_partial_data(" user, status ,,"), vec!["user", "status"]);
/// ```
#[must_use]
pub fn parse_partial_data(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_owned)
        .collect()
}
