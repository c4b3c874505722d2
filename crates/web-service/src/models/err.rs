use api_client::ApiError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use validator::ValidationErrors;

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为相应的http错误码
#[derive(Error, Debug)]
pub enum AppError {
    /// 查询参数验证错误，通常是用户输入不正确导致的，转换为400
    #[error(transparent)]
    ValidationFailed(#[from] ValidationErrors),

    /// 后端接口错误
    #[error(transparent)]
    BackendError(#[from] ApiError),
}

/// Tell axum how to convert `AppError` into a response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ValidationFailed(err) => (StatusCode::BAD_REQUEST, format!("Validate failed: {err}")).into_response(),
            AppError::BackendError(err) => match err {
                ApiError::Validation(err) => (StatusCode::BAD_REQUEST, format!("Validate failed: {err}")).into_response(),
                _ => (StatusCode::BAD_GATEWAY, format!("Backend error: {err}")).into_response(),
            },
        }
    }
}
