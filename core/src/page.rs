//! `PageObject` — the payload sent to the client on every non-conflict response.
//!
//! See <https://inertiajs.com/the-protocol#the-page-object>.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Page props: string keys to arbitrary JSON-compatible data.
///
/// A `BTreeMap` keeps serialized key order lexicographic, so the same props
/// always encode to the same bytes.
pub type Props = BTreeMap<String, Value>;

/// The canonical description of one page, sent to the client either embedded
/// in the HTML template or as the JSON body of an Inertia visit.
///
/// All six fields are always serialized, in declaration order. Missing props
/// serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageObject {
    /// Client-side component to mount.
    pub component: String,

    /// Data handed to the component.
    pub props: Option<Props>,

    /// Logical URL of the page, echoed back to the client.
    pub url: String,

    /// Current asset version.
    pub version: Option<String>,

    /// Encrypt this page's entry in browser history storage.
    pub encrypt_history: bool,

    /// Purge previously encrypted history state.
    pub clear_history: bool,
}

impl PageObject {
    /// Props restricted to `only`, borrowing from this page.
    ///
    /// Keys in `only` that are not present in the props are ignored. The page
    /// itself is left untouched.
    #[must_use]
    pub fn partial_props<'a>(
        &'a self,
        only: &[String],
    ) -> Option<BTreeMap<&'a str, &'a Value>> {
        self.props.as_ref().map(|props| {
            props
                .iter()
                .filter(|(key, _)| only.iter().any(|wanted| wanted == *key))
                .map(|(key, value)| (key.as_str(), value))
                .collect()
        })
    }
}
