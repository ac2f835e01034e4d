use crate::{DatabaseError, DatabaseResult};
use shared_lib::AppConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// 数据库连接池
pub type DatabasePool = Pool<Sqlite>;

/// 创建数据库连接池并初始化表结构（一站式函数）
///
/// 每次启动都可以安全调用：建表语句使用 `IF NOT EXISTS`，已有数据不会受影响。
/// 返回的连接池就是整个进程共享的存储句柄。
pub async fn initialize_database(config: &AppConfig) -> DatabaseResult<DatabasePool> {
    // 数据库文件不存在时自动创建
    let connect_options = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(|e| DatabaseError::connection(format!("解析DATABASE_URL失败: {e}")))?
        .create_if_missing(true);

    // 注意：pool已经是一个智能指针了，所以可以使用.clone()安全跨线程使用
    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect_with(connect_options)
        .await
        .map_err(|e| DatabaseError::connection(format!("打开SQLite数据库失败: {e}")))?;

    info!("🗄️ 数据库连接池创建成功: {}", config.database_url);

    info!("🔄 开始初始化数据库表结构...");

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .map_err(|e| DatabaseError::migration(format!("数据库迁移失败: {e}")))?;

    info!("✅ 数据库表结构初始化完成");

    Ok(pool)
}
