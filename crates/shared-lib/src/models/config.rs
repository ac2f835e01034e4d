use color_eyre::eyre::{eyre, Context};
use color_eyre::{Help, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

/// 默认的SQLite数据库文件
pub const DEFAULT_DATABASE_URL: &str = "sqlite:portfolio.db";

/// 默认监听地址
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// 默认的前端构建产物目录
pub const DEFAULT_STATIC_DIR: &str = "dist";

/// 默认连接池大小
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

/// 程序配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite数据库链接字符串，例如 `sqlite:portfolio.db`
    ///
    /// 可通过环境变量 `DATABASE_URL` 来调整
    pub database_url: String,

    /// 连接池最大连接数
    ///
    /// 可通过环境变量 `DB_MAX_CONNECTIONS` 来调整
    pub db_max_connections: u32,

    /// HTTP服务监听地址
    ///
    /// 可通过环境变量 `BIND_ADDR` 来调整
    pub bind_addr: SocketAddr,

    /// 前端静态文件目录（vite build 的输出）
    ///
    /// 可通过环境变量 `STATIC_DIR` 来调整
    pub static_dir: PathBuf,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时会直接使用环境变量，.env文件不存在也没关系
        dotenvy::dotenv().ok();

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        Ok(Arc::new(config))
    }

    /// 从任意键值来源构造配置，缺失的键使用默认值
    pub fn from_lookup<F>(lookup: F) -> Result<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        if !database_url.starts_with("sqlite:") {
            return Err::<AppConfig, _>(eyre!("Unsupported DATABASE_URL: {database_url}"))
                .suggestion("DATABASE_URL 需要以 sqlite: 开头，例如 sqlite:portfolio.db");
        }

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("Can not parse BIND_ADDR")
            .suggestion("设置 BIND_ADDR 为 ip:port 格式，例如 0.0.0.0:3000")?;

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse::<u32>()
                .context("Can not parse DB_MAX_CONNECTIONS")
                .suggestion("设置 DB_MAX_CONNECTIONS 为正整数")?
                .max(1),
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        Ok(AppConfig {
            database_url,
            db_max_connections,
            bind_addr,
            static_dir,
        })
    }
}
