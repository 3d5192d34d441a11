//! Redirect helpers that keep Inertia's XHR-driven visits on the right method.

use crate::{headers, HttpResponse, InertiaRequest};

/// Redirect to `location`.
///
/// `303 See Other` after `PUT`, `PATCH` or `DELETE` so the follow-up request
/// is a `GET`; `302 Found` for everything else. Inertia clients follow
/// redirects through XHR/fetch, which would otherwise replay the original
/// method and body.
pub fn redirect<R: InertiaRequest + ?Sized>(request: &R, location: &str) -> HttpResponse {
    let status = if request.is_put_patch_delete() {
        303
    } else {
        302
    };
    tracing::debug!(method = request.method(), status, location, "inertia redirect");
    HttpResponse::new(status).with_header(headers::LOCATION, location)
}

/// Force a full browser navigation to `url` (a "hard visit").
///
/// Answers `409 Conflict` with `X-Inertia-Location`, which the client adapter
/// turns into `window.location = url`. Used for destinations outside the SPA.
#[must_use]
pub fn location(url: &str) -> HttpResponse {
    tracing::debug!(url, "inertia external location");
    HttpResponse::new(409).with_header(headers::X_INERTIA_LOCATION, url)
}
