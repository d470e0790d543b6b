//! Cross-origin policy applied process-wide to the router.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Options structure for the process-wide cross-origin policy.
///
/// An empty list means "permit any". When credentials are allowed the
/// wildcard cannot go on the wire (the Fetch spec forbids `*` together with
/// credentials), so permit-any is realized by mirroring the request's own
/// values instead.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allow_origins: Vec<HeaderValue>,
    pub allow_methods: Vec<Method>,
    pub allow_headers: Vec<HeaderName>,
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    /// Permit every origin, method, and header, with credentials allowed.
    fn default() -> Self {
        Self {
            allow_origins: Vec::new(),
            allow_methods: Vec::new(),
            allow_headers: Vec::new(),
            allow_credentials: true,
        }
    }
}

impl CorsConfig {
    /// Build the tower-http layer for this policy.
    ///
    /// Applied once at server bootstrap; every route shares the result.
    #[must_use]
    pub fn into_layer(self) -> CorsLayer {
        let credentials = self.allow_credentials;

        let origins = if self.allow_origins.is_empty() {
            if credentials {
                AllowOrigin::mirror_request()
            } else {
                AllowOrigin::any()
            }
        } else {
            AllowOrigin::list(self.allow_origins)
        };

        let methods = if self.allow_methods.is_empty() {
            if credentials {
                AllowMethods::mirror_request()
            } else {
                AllowMethods::any()
            }
        } else {
            AllowMethods::list(self.allow_methods)
        };

        let headers = if self.allow_headers.is_empty() {
            if credentials {
                AllowHeaders::mirror_request()
            } else {
                AllowHeaders::any()
            }
        } else {
            AllowHeaders::list(self.allow_headers)
        };

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(headers)
            .allow_credentials(credentials)
    }
}
