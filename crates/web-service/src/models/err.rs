use crate::models::common::ErrorReply;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use database::DatabaseError;
use thiserror::Error;
use tracing::{error, warn};
use validator::ValidationErrors;

/// 必填字段缺失时返回给用户的提示
pub const MSG_REQUIRED_FIELDS: &str = "Title and description are required";

/// 请求体不是合法JSON对象时返回给用户的提示
pub const MSG_INVALID_BODY: &str = "Invalid JSON body";

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为相应的http错误码
#[derive(Error, Debug)]
pub enum AppError {
    /// 数据验证错误，这种错误通常都是用户参数不正确导致的，所以需要转换为400
    #[error("Title and description are required: {0}")]
    ValidationFailed(#[from] ValidationErrors),

    /// 请求体无法解析，同样是用户的问题
    #[error("Invalid JSON body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// 存储层错误
    ///
    /// `message` 是返回给用户的通用提示，`source` 只写日志
    #[error("{message}: {source}")]
    Storage {
        message: &'static str,
        #[source]
        source: DatabaseError,
    },
}

impl AppError {
    /// 创建存储层错误
    pub fn storage(message: &'static str, source: DatabaseError) -> Self {
        Self::Storage { message, source }
    }
}

/// Tell axum how to convert `AppError` into a response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::ValidationFailed(_) => {
                warn!("⚠️ {}", self);
                (StatusCode::BAD_REQUEST, MSG_REQUIRED_FIELDS)
            }
            AppError::InvalidBody(_) => {
                warn!("⚠️ {}", self);
                (StatusCode::BAD_REQUEST, MSG_INVALID_BODY)
            }
            AppError::Storage { message, .. } => {
                // 具体的数据库错误只写日志，不返回给调用方
                error!("❌ {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, *message)
            }
        };

        (status, Json(ErrorReply::new(message))).into_response()
    }
}
