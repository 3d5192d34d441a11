//! `InertiaResponse` — bridges the core [`HttpResponse`] to `http::Response`.

use http::{HeaderName, HeaderValue, StatusCode};
use inertia::HttpResponse;

/// A protocol response ready to hand to an `http`-based server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InertiaResponse(HttpResponse);

impl InertiaResponse {
    /// The wrapped framework-neutral response.
    #[must_use]
    pub fn as_inner(&self) -> &HttpResponse {
        &self.0
    }

    /// Unwrap into the framework-neutral response.
    #[must_use]
    pub fn into_inner(self) -> HttpResponse {
        self.0
    }

    /// Convert into an `http::Response`. A missing body becomes an empty string.
    ///
    /// # Errors
    ///
    /// Returns `http::Error` if the status code, a header name, or a header
    /// value is invalid.
    pub fn into_http(self) -> Result<http::Response<String>, http::Error> {
        let (status, headers, body) = self.0.into_parts();

        let mut builder = http::Response::builder().status(StatusCode::from_u16(status)?);
        for (name, value) in headers {
            builder = builder.header(
                HeaderName::try_from(name)?,
                HeaderValue::try_from(value)?,
            );
        }
        builder.body(body.unwrap_or_default())
    }
}

impl From<HttpResponse> for InertiaResponse {
    fn from(response: HttpResponse) -> Self {
        Self(response)
    }
}

impl From<InertiaResponse> for HttpResponse {
    fn from(response: InertiaResponse) -> Self {
        response.0
    }
}
