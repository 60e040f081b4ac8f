use campus_api_types::ErrorResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status} {code}: {message}", code = .body.code, message = .body.error)]
    Api { status: u16, body: ErrorResponse },
}

impl ClientError {
    /// 服务端返回的错误码；请求未到达服务端时为 `None`。
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } => Some(&body.code),
            Self::Http(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
