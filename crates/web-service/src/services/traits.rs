//! 服务层 trait 定义
//!
//! 定义服务层的抽象接口，遵循六边形架构的端口适配器模式

use crate::models::err::AppError;
use crate::models::projects::ProjectCreate;
use database::ProjectInfo;

/// 项目服务 trait 定义
///
/// 定义了项目相关的业务逻辑接口，作为应用层的端口(Port)
///
/// 路由层通过 `Arc<dyn ProjectServiceTrait>` 持有服务，具体实现由 [`ProjectService`] 提供
///
/// [`ProjectService`]: crate::services::ProjectService
#[async_trait::async_trait]
pub trait ProjectServiceTrait: Send + Sync + 'static {
    /// 查询全部项目
    ///
    /// # 返回值
    /// 按创建时间倒序排列的项目列表
    async fn list_projects(&self) -> Result<Vec<ProjectInfo>, AppError>;

    /// 创建新项目
    ///
    /// # 参数
    /// - `project`: 用户提交的项目信息，校验失败时不会访问数据库
    ///
    /// # 返回值
    /// 返回新项目的ID
    async fn create_project(&self, project: ProjectCreate) -> Result<i64, AppError>;
}
