//! 项目仓库
//!
//! 负责项目相关的数据库操作

use crate::connection::DatabasePool;
use crate::models::project::{ProjectCreate, ProjectInfo};
use crate::repositories::traits::ProjectRepositoryTrait;
use crate::DatabaseResult;
use tracing::debug;

/// 项目仓库结构体
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: DatabasePool,
}

impl ProjectRepository {
    /// 创建新的项目仓库实例
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ProjectRepositoryTrait for ProjectRepository {
    /// 查询全部项目
    ///
    /// # SQL 查询说明
    ///
    /// 1. 使用 `COALESCE` 把历史数据中的 `NULL` 统一成空字符串，`created_at` 为 `NULL` 时按1970年处理，排在最后
    /// 2. `created_at` 只精确到秒，同一秒内插入的数据用 `id` 倒序保证稳定顺序
    async fn list_projects(&self) -> DatabaseResult<Vec<ProjectInfo>> {
        debug!("🔍 查询项目列表");

        let projects = sqlx::query_as::<_, ProjectInfo>(
            r#"
            SELECT id,
                   title,
                   description,
                   COALESCE(image_url, '') AS image_url,
                   COALESCE(tags, '') AS tags,
                   COALESCE(project_url, '') AS project_url,
                   COALESCE(created_at, '1970-01-01 00:00:00') AS created_at
            FROM projects
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!("✅ 查询完成 - 找到 {} 个项目", projects.len());

        Ok(projects)
    }

    /// 创建新项目
    ///
    /// 单条 `INSERT` 语句，要么完整写入一行，要么什么都不写。
    /// 未提供的可选字段写入空字符串。
    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<i64> {
        debug!("📝 创建项目: {:#?}", project);

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO projects (title, description, image_url, tags, project_url)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(project.title)
        .bind(project.description)
        .bind(project.image_url.unwrap_or_default())
        .bind(project.tags.unwrap_or_default())
        .bind(project.project_url.unwrap_or_default())
        .fetch_one(&self.pool)
        .await?;

        debug!("✅ 项目创建成功: id={}", id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::initialize_database;
    use crate::connection::tests::{temp_db_path, test_config};
    use std::path::PathBuf;

    async fn setup(label: &str) -> (ProjectRepository, DatabasePool, PathBuf) {
        let path = temp_db_path(label);
        let pool = initialize_database(&test_config(&path)).await.unwrap();
        (ProjectRepository::new(pool.clone()), pool, path)
    }

    async fn teardown(pool: DatabasePool, path: PathBuf) {
        pool.close().await;
        let _ = std::fs::remove_file(path);
    }

    fn new_project(title: &str) -> ProjectCreate {
        ProjectCreate {
            title: title.to_string(),
            description: format!("{title} description"),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_list_empty() {
        let (repo, pool, path) = setup("repo-empty").await;

        assert!(repo.list_projects().await.unwrap().is_empty());

        teardown(pool, path).await;
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let (repo, pool, path) = setup("repo-create").await;

        let id = repo
            .create_project(ProjectCreate {
                title: "Shop".to_string(),
                description: "An online store".to_string(),
                image_url: None,
                tags: Some("react,node".to_string()),
                project_url: None,
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let projects = repo.list_projects().await.unwrap();
        assert_eq!(projects.len(), 1);
        let shop = &projects[0];
        assert_eq!(shop.id, 1);
        assert_eq!(shop.title, "Shop");
        assert_eq!(shop.description, "An online store");
        assert_eq!(shop.tags, "react,node");
        assert_eq!(shop.image_url, "");
        assert_eq!(shop.project_url, "");

        teardown(pool, path).await;
    }

    #[tokio::test]
    async fn test_ids_are_fresh_and_order_is_newest_first() {
        let (repo, pool, path) = setup("repo-order").await;

        let mut ids = Vec::new();
        for title in ["first", "second", "third"] {
            ids.push(repo.create_project(new_project(title)).await.unwrap());
        }
        assert!(ids.windows(2).all(|w| w[0] < w[1]));

        let projects = repo.list_projects().await.unwrap();
        let titles: Vec<&str> = projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["third", "second", "first"]);
        assert!(projects
            .windows(2)
            .all(|w| w[0].created_at >= w[1].created_at && w[0].id > w[1].id));

        teardown(pool, path).await;
    }

    #[tokio::test]
    async fn test_created_at_wins_over_id() {
        let (repo, pool, path) = setup("repo-timestamp").await;

        let newer = repo.create_project(new_project("newer")).await.unwrap();
        let older = repo.create_project(new_project("older")).await.unwrap();
        sqlx::query("UPDATE projects SET created_at = '2020-01-01 00:00:00' WHERE id = ?")
            .bind(older)
            .execute(&pool)
            .await
            .unwrap();

        let projects = repo.list_projects().await.unwrap();
        assert_eq!(projects[0].id, newer);
        assert_eq!(projects[1].id, older);

        teardown(pool, path).await;
    }

    #[tokio::test]
    async fn test_null_columns_read_as_empty() {
        let (repo, pool, path) = setup("repo-null").await;

        sqlx::query(
            "INSERT INTO projects (title, description, image_url, tags, project_url) \
             VALUES ('Legacy', 'Inserted with NULLs', NULL, NULL, NULL)",
        )
        .execute(&pool)
        .await
        .unwrap();

        let projects = repo.list_projects().await.unwrap();
        assert_eq!(projects[0].image_url, "");
        assert_eq!(projects[0].tags, "");
        assert_eq!(projects[0].project_url, "");

        teardown(pool, path).await;
    }

    #[tokio::test]
    async fn test_null_created_at_does_not_break_listing() {
        let (repo, pool, path) = setup("repo-null-created").await;

        let current = repo.create_project(new_project("current")).await.unwrap();
        sqlx::query("INSERT INTO projects (title, description, created_at) VALUES ('Legacy', 'No timestamp', NULL)")
            .execute(&pool)
            .await
            .unwrap();

        let projects = repo.list_projects().await.unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].id, current);
        assert_eq!(projects[1].title, "Legacy");
        assert_eq!(projects[1].created_at.to_string(), "1970-01-01 00:00:00");

        teardown(pool, path).await;
    }

    #[tokio::test]
    async fn test_repeated_list_is_stable() {
        let (repo, pool, path) = setup("repo-stable").await;

        repo.create_project(new_project("a")).await.unwrap();
        repo.create_project(new_project("b")).await.unwrap();

        let first = repo.list_projects().await.unwrap();
        let second = repo.list_projects().await.unwrap();
        assert_eq!(first, second);

        teardown(pool, path).await;
    }

    #[tokio::test]
    async fn test_storage_failure_is_reported() {
        let (repo, pool, path) = setup("repo-closed").await;
        pool.close().await;

        assert!(repo.list_projects().await.is_err());
        assert!(repo.create_project(new_project("x")).await.is_err());

        let _ = std::fs::remove_file(path);
    }
}
