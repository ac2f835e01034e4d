//! 项目服务
//!
//! 提供项目相关的业务逻辑操作：参数校验、调用仓库、错误转换

use crate::models::err::AppError;
use crate::models::projects::ProjectCreate;
use crate::services::traits::ProjectServiceTrait;
use database::{ProjectInfo, ProjectRepositoryTrait};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

/// 列表查询失败时返回给用户的提示
pub const MSG_FETCH_FAILED: &str = "Failed to fetch projects";

/// 创建失败时返回给用户的提示
pub const MSG_ADD_FAILED: &str = "Failed to add project";

#[derive(Debug)]
pub struct ProjectService<PR: ProjectRepositoryTrait> {
    project_repository: Arc<PR>,
}

impl<PR: ProjectRepositoryTrait> ProjectService<PR> {
    pub fn new(project_repository: Arc<PR>) -> Self {
        Self { project_repository }
    }
}

impl<PR: ProjectRepositoryTrait> Clone for ProjectService<PR> {
    fn clone(&self) -> Self {
        Self {
            project_repository: Arc::clone(&self.project_repository),
        }
    }
}

#[async_trait::async_trait]
impl<PR: ProjectRepositoryTrait> ProjectServiceTrait for ProjectService<PR> {
    #[instrument(skip(self))]
    async fn list_projects(&self) -> Result<Vec<ProjectInfo>, AppError> {
        self.project_repository
            .list_projects()
            .await
            .map_err(|e| AppError::storage(MSG_FETCH_FAILED, e))
    }

    #[instrument(skip(self))]
    async fn create_project(&self, project: ProjectCreate) -> Result<i64, AppError> {
        // 先校验，校验失败直接返回，不访问数据库
        project.validate()?;

        self.project_repository
            .create_project(project.into())
            .await
            .map_err(|e| AppError::storage(MSG_ADD_FAILED, e))
    }
}
