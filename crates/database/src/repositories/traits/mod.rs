//! 数据库仓库 trait 定义
//!
//! 这里定义了各种数据库仓库的抽象接口
//!
//! ## Repository Trait 设计模式 🎯
//!
//! 所有 Repository trait 都遵循统一的约束：
//!
//! ```rust,ignore
//! pub trait XxxRepositoryTrait: Send + Sync + 'static {
//!     // 异步方法定义...
//! }
//! ```
//!
//! - `Send` / `Sync`：仓库实例放在 `Arc` 里，被多个并发请求共享
//! - `'static`：仓库作为应用状态的一部分，和进程同生命周期
//!
//! 服务层只依赖 trait，不依赖具体实现。测试时可以替换为内存实现或者总是失败的实现：
//!
//! ```rust,ignore
//! let service = ProjectService::new(Arc::new(ProjectRepository::new(pool)));
//! let state = AppState::new(Arc::new(service));
//! ```

pub mod project;

// 重新导出
pub use project::ProjectRepositoryTrait;
