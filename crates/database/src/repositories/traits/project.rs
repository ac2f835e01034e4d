//! 项目仓库 trait 定义
//!
//! 定义项目数据库操作的抽象接口

use crate::models::project::{ProjectCreate, ProjectInfo};
use crate::DatabaseResult;

/// 项目仓库trait定义
///
/// 定义了项目相关的数据库操作接口，支持：
/// - 项目列表（按创建时间倒序）
/// - 项目创建
///
/// 项目一旦创建就不会被修改或删除，所以这里没有更新/删除接口。
#[async_trait::async_trait]
pub trait ProjectRepositoryTrait: Send + Sync + 'static {
    /// 查询全部项目
    ///
    /// # 返回值
    /// 按 `created_at` 倒序排列的项目列表，时间相同的按 `id` 倒序
    async fn list_projects(&self) -> DatabaseResult<Vec<ProjectInfo>>;

    /// 创建新项目
    ///
    /// # 参数
    /// - `project`: 项目创建信息
    ///
    /// # 返回值
    /// 返回数据库分配的项目ID
    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<i64>;
}
