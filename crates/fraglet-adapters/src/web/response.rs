//! Turning render results into HTTP responses.

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use axum::http::{Response, StatusCode};
use axum::response::IntoResponse;
use tracing::warn;

use fraglet_core::application::services;
use fraglet_core::domain::ContextMap;
use fraglet_core::error::{ErrorCategory, FragletError};
use fraglet_core::request::{RequestScope, ResponseOverrides};

/// Render a single template block and wrap it as `200 text/html`.
///
/// Response overrides queued on the scope never apply here; fragment
/// rendering suppresses them and a fragment is always a plain 200.
pub fn render_block_to_response(
    renderer_name: &str,
    block_name: &str,
    value: &ContextMap,
    scope: &RequestScope,
    package: Option<&str>,
) -> Result<Response<Body>, WebError> {
    let body = services::render_block(renderer_name, block_name, value, Some(scope), package)?;
    Ok(html_response(body, None))
}

/// Render the full template and apply any response overrides the handler
/// queued on the scope before rendering.
pub fn render_to_response(
    renderer_name: &str,
    value: &ContextMap,
    scope: &RequestScope,
    package: Option<&str>,
) -> Result<Response<Body>, WebError> {
    let body = services::render(renderer_name, value, Some(scope), package)?;
    Ok(html_response(body, scope.take_response()))
}

/// A `text/html; charset=utf-8` response, optionally adjusted by overrides.
///
/// Override headers that are not valid HTTP are skipped with a warning
/// rather than failing the whole response.
pub fn html_response(body: String, overrides: Option<ResponseOverrides>) -> Response<Body> {
    let mut response = Response::new(Body::from(body));
    response.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );

    if let Some(overrides) = overrides {
        if let Some(code) = overrides.status {
            match StatusCode::from_u16(code) {
                Ok(status) => *response.status_mut() = status,
                Err(_) => warn!(code, "ignoring invalid override status"),
            }
        }
        for (name, value) in overrides.headers {
            match (
                HeaderName::try_from(name.as_str()),
                HeaderValue::try_from(value.as_str()),
            ) {
                (Ok(name), Ok(value)) => {
                    response.headers_mut().insert(name, value);
                }
                _ => warn!(header = %name, "ignoring invalid override header"),
            }
        }
    }

    response
}

/// Render-pipeline error carried across the axum boundary.
#[derive(Debug)]
pub struct WebError(pub FragletError);

impl From<FragletError> for WebError {
    fn from(err: FragletError) -> Self {
        Self(err)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.0.category() {
            ErrorCategory::Validation => StatusCode::BAD_REQUEST,
            ErrorCategory::NotFound => StatusCode::NOT_FOUND,
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        warn!(error = %self.0, status = %status, "render request failed");
        (status, self.0.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fraglet_core::application::ApplicationError;
    use fraglet_core::domain::DomainError;

    #[test]
    fn html_response_sets_content_type() {
        let response = html_response("<p>hi</p>".into(), None);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
    }

    #[test]
    fn overrides_change_status_and_headers() {
        let overrides = ResponseOverrides {
            status: Some(201),
            headers: vec![("x-frame-options".into(), "DENY".into())],
        };
        let response = html_response(String::new(), Some(overrides));
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers().get("x-frame-options").unwrap(), "DENY");
    }

    #[test]
    fn invalid_overrides_are_skipped() {
        let overrides = ResponseOverrides {
            status: Some(1),
            headers: vec![("bad header".into(), "x".into())],
        };
        let response = html_response(String::new(), Some(overrides));
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get("bad header").is_none());
    }

    #[test]
    fn missing_block_maps_to_404() {
        let err = WebError(
            DomainError::BlockNotFound {
                block: "content".into(),
                template: "page.html.jinja2".into(),
            }
            .into(),
        );
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn configuration_errors_map_to_500() {
        let err = WebError(
            ApplicationError::RendererNotRegistered {
                extension: "tera".into(),
            }
            .into(),
        );
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn body_carries_the_fragment() {
        let response = html_response("<p>fragment</p>".into(), None);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"<p>fragment</p>");
    }
}
