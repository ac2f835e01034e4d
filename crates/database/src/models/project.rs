//! 项目数据库模型
//!
//! 定义项目相关的数据库模型结构体

use chrono::NaiveDateTime;

/// 项目信息结构体，对应 `projects` 表中的一行
///
/// 可选字段在读取时统一为空字符串，不会出现 `NULL`。
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ProjectInfo {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// 逗号分隔的标签，例如 `react,node`，不对单个标签做任何约束
    pub tags: String,
    pub project_url: String,
    /// 由数据库在插入时写入（UTC，精确到秒）
    pub created_at: NaiveDateTime,
}

/// 项目创建参数
///
/// `title` 和 `description` 在进入仓库层之前已经完成校验
#[derive(Debug, Clone, Default)]
pub struct ProjectCreate {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub tags: Option<String>,
    pub project_url: Option<String>,
}
