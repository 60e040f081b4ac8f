//! 将领域错误与存储错误映射为 HTTP 响应。

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use campus_api_types::ErrorResponse;
use campus_core::domain::DomainError;
use tracing::error;

pub type ApiResult<T> = Result<T, ApiError>;

/// API 错误响应。除内部错误外均返回 400。
#[derive(Debug)]
pub struct ApiError {
    message: String,
    code: &'static str,
    status: StatusCode,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: "VALIDATION_ERROR",
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: "CONFLICT",
            status: StatusCode::BAD_REQUEST,
        }
    }

    /// 引用的记录不存在。按业务规则错误返回，而不是 404。
    pub fn reference_not_found(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: "REFERENCE_NOT_FOUND",
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn internal() -> Self {
        Self {
            message: "internal server error".to_string(),
            code: "INTERNAL_ERROR",
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation(format!("invalid request body: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::validation(format!("invalid path parameter: {}", rejection.body_text()))
    }
}

// 存储错误细节只写日志，不返回给客户端。
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        error!(error = ?err, "storage operation failed");
        Self::internal()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.message,
            code: self.code.to_string(),
        });
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use axum::http::StatusCode;
    use campus_core::domain::DomainError;

    #[test]
    fn domain_errors_become_validation_errors() {
        let err = ApiError::from(DomainError::MissingField("nome"));

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(err.message, "nome is required");
    }

    #[test]
    fn storage_errors_hide_their_cause() {
        let err = ApiError::from(anyhow::anyhow!("connection refused by 10.0.0.5"));

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "internal server error");
    }
}
