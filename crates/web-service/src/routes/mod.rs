//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出当前App的所有路由。
//!
//! 用户可以在导出路由时传入共享数据 shared_state，这样所有路由函数都可以访问。

use crate::routes::health::__path_health_check;
use crate::routes::health::health_check;
use crate::routes::projects::__path_create_project;
use crate::routes::projects::__path_list_projects;
use crate::routes::projects::{create_project, list_projects};
use crate::AppState;
use axum::Router;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

pub mod health;
pub mod projects;

/// 导出 `/api` 下的所有路由
///
/// ## 参数定义
/// - state: 共享数据，参考 [`AppState`] 定义。
///
/// ## **❗️注意事项：**
///
/// 由于 [`routes!`] 宏限制，在同一个宏里面不能同时定义多个相同类型的http接口。
/// `list_projects` 和 `create_project` 分别是 get/post，所以可以放在一起。
fn routers(state: AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(list_projects, create_project))
        .with_state(state)
}

/// 创建当前App的路由
///
/// 完成以下功能：
/// - 生成OpenAPI文档
/// - 生成App路由（`/api/projects`、`/health`）
/// - 使用Scalar作为最终在线文档格式
/// - 其他路径交给 `static_dir` 下的前端构建产物，找不到文件时返回 `index.html`
///
/// 由于使用了 `utoipa` 库来自动化生成`openapi`文档，因此我们没有使用原生的 [`Router`]，而是使用了
/// [`OpenApiRouter`] 。
pub fn create_app_router(shared_state: AppState, static_dir: &Path) -> Router {
    // 当前项目的OpenAPI声明
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "projects", description = "Portfolio project catalog"),
            (name = "health", description = "Liveness probe")
        ),
    )]
    struct ApiDoc;

    // 最终拿到的变量：
    // - router: Axum的Router，实际的路由对象
    // - api: utoipa的OpenApi，生成的OpenAPI对象
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health_check))
        .nest("/api", routers(shared_state))
        .split_for_parts();

    // 单页应用：未命中的路径都回落到 index.html
    let frontend = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    // 合并文档路由，用户可通过 /docs 访问文档网页地址
    router
        .merge(Scalar::with_url("/docs", api))
        .fallback_service(frontend)
        .layer(TraceLayer::new_for_http())
}
