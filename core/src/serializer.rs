//! `PageObjectSerializer` — turns a [`PageObject`] into the string sent to the client.
//!
//! The renderer only needs one operation: encode a page, optionally keeping a
//! subset of its props. [`JsonPageObjectSerializer`] (feature `json`, on by
//! default) is the stock implementation; anything else can be plugged in at
//! construction via [`RendererBuilder::serializer`](crate::RendererBuilder::serializer).

use crate::{PageObject, SerializationError};

/// Encodes page objects.
///
/// # Contract
///
/// - `only = None`: all props are encoded.
/// - `only = Some(keys)`: the encoded `props` holds the intersection of the
///   page's keys and `keys`; unknown keys are ignored. An empty slice keeps no props.
/// - The page is borrowed immutably and never modified.
/// - Output is deterministic for equal input.
pub trait PageObjectSerializer: Send + Sync {
    /// Encode `page`, restricted to the `only` props when given.
    ///
    /// # Errors
    ///
    /// Returns [`SerializationError`] when the page cannot be encoded.
    fn serialize(
        &self,
        page: &PageObject,
        only: Option<&[String]>,
    ) -> Result<String, SerializationError>;
}

impl<F> PageObjectSerializer for F
where
    F: Fn(&PageObject, Option<&[String]>) -> Result<String, SerializationError> + Send + Sync,
{
    fn serialize(
        &self,
        page: &PageObject,
        only: Option<&[String]>,
    ) -> Result<String, SerializationError> {
        self(page, only)
    }
}

#[cfg(feature = "json")]
pub use json::JsonPageObjectSerializer;

#[cfg(feature = "json")]
mod json {
    use super::PageObjectSerializer;
    use crate::{PageObject, SerializationError};
    use serde::Serialize;
    use serde_json::Value;
    use std::collections::BTreeMap;

    /// `serde_json`-backed serializer producing compact JSON with sorted prop keys.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct JsonPageObjectSerializer;

    /// Borrowed page with filtered props, so partial encoding never clones or
    /// mutates the source page.
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct PartialPage<'a> {
        component: &'a str,
        props: Option<BTreeMap<&'a str, &'a Value>>,
        url: &'a str,
        version: Option<&'a str>,
        encrypt_history: bool,
        clear_history: bool,
    }

    impl PageObjectSerializer for JsonPageObjectSerializer {
        fn serialize(
            &self,
            page: &PageObject,
            only: Option<&[String]>,
        ) -> Result<String, SerializationError> {
            let encoded = match only {
                None => serde_json::to_string(page),
                Some(only) => serde_json::to_string(&PartialPage {
                    component: &page.component,
                    props: page.partial_props(only),
                    url: &page.url,
                    version: page.version.as_deref(),
                    encrypt_history: page.encrypt_history,
                    clear_history: page.clear_history,
                }),
            };
            encoded.map_err(SerializationError::new)
        }
    }
}
