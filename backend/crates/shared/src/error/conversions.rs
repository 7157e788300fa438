//! Error conversions - axum integration (feature-gated)
//!
//! Converts JSON extractor rejections into [`AppError`] and renders
//! [`AppError`] as a problem-document response.

#[cfg(feature = "axum")]
use super::app_error::AppError;
#[cfg(feature = "axum")]
use super::kind::ErrorKind;

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        let kind = ErrorKind::from_status_code(rejection.status().as_u16())
            .unwrap_or(ErrorKind::BadRequest);
        let app_err = AppError::new(kind, rejection.body_text());
        let app_err = match kind {
            ErrorKind::UnsupportedMediaType => {
                app_err.with_action("Send the body with `Content-Type: application/json`")
            }
            _ => app_err,
        };
        app_err.with_source(rejection)
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        use super::problem::ProblemDetails;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(ProblemDetails::from(&self))).into_response()
    }
}

#[cfg(all(test, feature = "axum"))]
mod axum_tests {
    use axum::Json;
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::{Request, StatusCode, header};
    use axum::response::IntoResponse;

    use crate::error::app_error::AppError;
    use crate::error::kind::ErrorKind;

    async fn reject(request: Request<Body>) -> AppError {
        let rejection = Json::<Vec<i32>>::from_request(request, &())
            .await
            .unwrap_err();
        rejection.into()
    }

    #[tokio::test]
    async fn test_missing_content_type_maps_to_415() {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from("[1,2,3]"))
            .unwrap();

        let err = reject(request).await;
        assert_eq!(err.kind(), ErrorKind::UnsupportedMediaType);
        assert!(err.action().is_some());
    }

    #[tokio::test]
    async fn test_wrong_shape_maps_to_422() {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"not":"a list"}"#))
            .unwrap();

        let err = reject(request).await;
        assert_eq!(err.kind(), ErrorKind::UnprocessableEntity);
    }

    #[tokio::test]
    async fn test_syntax_error_maps_to_400() {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("[1,2,"))
            .unwrap();

        let err = reject(request).await;
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn test_into_response_uses_kind_status() {
        let response = AppError::unauthorized("Login failed").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
