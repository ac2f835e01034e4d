use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 统一的错误返回对象
///
/// 所有错误都只包含一个面向用户的 `error` 字段，不暴露内部细节
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct ErrorReply {
    #[schema(example = "Title and description are required")]
    pub error: String,
}

impl ErrorReply {
    pub fn new<T: Into<String>>(error: T) -> Self {
        Self { error: error.into() }
    }
}

/// 创建成功后的返回对象
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct CreatedReply {
    #[schema(example = 1)]
    /// 新分配的ID
    pub id: i64,

    #[schema(example = "Project added successfully")]
    pub message: String,
}

/// 健康检查结果
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct HealthReply {
    #[schema(example = "healthy")]
    pub status: String,

    #[schema(example = "portfolio-backend")]
    pub service: String,

    /// RFC 3339 格式的当前时间
    pub timestamp: String,
}
