//! Admin bearer-token gate for dashboard routes.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::AppState;
use crate::api_error::ApiError;

/// Rejects requests lacking the configured admin bearer token.
///
/// Runs before any aggregation work. An unconfigured token fails closed:
/// the dashboard stays unreachable rather than silently open.
pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(expected) = state.admin_token.as_deref() else {
        return Err(ApiError::Forbidden("admin token not configured".to_owned()));
    };

    let header = request.headers().get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    let Some(token) = bearer_token(header) else {
        return Err(ApiError::Unauthorized("missing bearer token".to_owned()));
    };
    if token != expected {
        return Err(ApiError::Forbidden("admin access required".to_owned()));
    }

    Ok(next.run(request).await)
}

fn bearer_token(header: Option<&str>) -> Option<&str> {
    header?.strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_extracted() {
        assert_eq!(bearer_token(Some("Bearer secret")), Some("secret"));
    }

    #[test]
    fn test_bearer_token_missing_header() {
        assert_eq!(bearer_token(None), None);
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        assert_eq!(bearer_token(Some("Basic secret")), None);
        assert_eq!(bearer_token(Some("bearer secret")), None);
    }
}
