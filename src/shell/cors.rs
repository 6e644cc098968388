use axum::{
    extract::{Request, State},
    http::{HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::shared::http::json_error::JsonError;

const ORIGIN_REJECTED: &str = "Origem não permitida pelo CORS.";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid allowed origin {0:?}")]
pub struct InvalidOrigin(pub String);

/// Browser origins allowed to call the API. Requests without an `Origin`
/// header are not browser requests and always pass.
#[derive(Debug, Clone)]
pub struct AllowedOrigins {
    origins: Arc<Vec<HeaderValue>>,
}

impl AllowedOrigins {
    pub fn parse<S: AsRef<str>>(origins: &[S]) -> Result<Self, InvalidOrigin> {
        let origins = origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin.as_ref())
                    .map_err(|_| InvalidOrigin(origin.as_ref().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            origins: Arc::new(origins),
        })
    }

    pub fn allows(&self, origin: Option<&HeaderValue>) -> bool {
        match origin {
            None => true,
            Some(origin) => self.origins.iter().any(|allowed| allowed == origin),
        }
    }

    pub fn cors_layer(&self) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(self.origins.iter().cloned()))
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    }
}

/// Turns away browser requests from unlisted origins before any handler runs.
pub async fn reject_unknown_origins(
    State(allowed): State<AllowedOrigins>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request.headers().get(header::ORIGIN);
    tracing::debug!(origin = ?origin, "origin received");
    if !allowed.allows(origin) {
        tracing::warn!(origin = ?origin, "origin not allowed");
        return JsonError::new(StatusCode::FORBIDDEN, ORIGIN_REJECTED).into_response();
    }
    next.run(request).await
}
