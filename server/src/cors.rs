//! Cross-origin policy.
//!
//! Browsers refuse a literal `*` together with credentials, so origin, methods
//! and headers are echoed back from the request instead. The effect is the
//! same: any origin, any method, any header, cookies allowed.
//! Tighten before exposing the service beyond local development.

use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

pub fn permissive() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
