//! `InertiaRequest` — the read-only view of an incoming request.
//!
//! The renderer never touches a framework request type directly. Adapters
//! (see `inertia-http`) wrap their native request and expose the method and a
//! header lookup; that is all the protocol needs.

use crate::headers;

/// Read access to the parts of an HTTP request the Inertia protocol consults.
///
/// # Thread Safety
///
/// Requests are borrowed for the duration of one render call only, so no
/// `Send`/`Sync` bound is required.
///
/// # Example
///
/// ```
/// use inertia::InertiaRequest;
/// use std::collections::HashMap;
///
/// struct Request {
///     method: String,
///     headers: HashMap<String, String>,
/// }
///
/// impl InertiaRequest for Request {
///     fn method(&self) -> &str {
///         &self.method
///     }
///
///     fn header(&self, name: &str) -> Option<&str> {
///         self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `InertiaRequest`",
    label = "the renderer cannot read method and headers from this type",
    note = "wrap framework requests in an adapter such as `inertia_http::HttpMessage`"
)]
pub trait InertiaRequest {
    /// The HTTP method, as sent (`"GET"`, `"post"`, ...).
    fn method(&self) -> &str;

    /// A header value by name. Lookup must be case-insensitive.
    fn header(&self, name: &str) -> Option<&str>;

    /// Whether the client asked for a JSON page (`X-Inertia: true`).
    fn is_inertia(&self) -> bool {
        self.header(headers::X_INERTIA)
            .is_some_and(|value| value.eq_ignore_ascii_case("true"))
    }

    /// Whether the method is `GET`, ignoring case.
    fn is_get(&self) -> bool {
        self.method().eq_ignore_ascii_case("GET")
    }

    /// Whether the method is `PUT`, `PATCH` or `DELETE`, ignoring case.
    fn is_put_patch_delete(&self) -> bool {
        let method = self.method();
        ["PUT", "PATCH", "DELETE"]
            .iter()
            .any(|candidate| method.eq_ignore_ascii_case(candidate))
    }
}

impl<R: InertiaRequest + ?Sized> InertiaRequest for &R {
    fn method(&self) -> &str {
        (**self).method()
    }

    fn header(&self, name: &str) -> Option<&str> {
        (**self).header(name)
    }
}
