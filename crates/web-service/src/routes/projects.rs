//! 项目相关接口
//!

use crate::models::common::{CreatedReply, ErrorReply};
use crate::models::err::AppError;
use crate::models::projects::{ProjectCreate, ProjectInfo};
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::debug;

/// 创建成功时返回的提示
pub const MSG_PROJECT_ADDED: &str = "Project added successfully";

/// 查询全部项目
///
/// 返回全部项目，按创建时间倒序排列，不分页。
///
/// ## 返回值
///
/// 直接返回json数组（不做 `data` 包装），前端依赖这个结构。
/// 数据库异常时返回500和统一的 [`ErrorReply`]。
#[utoipa::path(get,
    path = "/projects",
    tag = "projects",
    responses(
        (status = 200, description = "All projects, newest first", body = Vec<ProjectInfo>),
        (status = 500, description = "Storage failure", body = ErrorReply)
    ),
)]
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<ProjectInfo>>, AppError> {
    debug!("🔍 查询项目列表");

    let projects = state.project_service.list_projects().await?;

    Ok(Json(projects.into_iter().map(Into::into).collect()))
}

/// 创建项目
///
/// 根据用户输入参数创建项目信息。
///
/// ## Json化
///
/// 这里没有直接使用 `Json(project): Json<ProjectCreate>`，因为axum默认的反序列化失败
/// 返回的是纯文本，这里需要统一返回json格式的 [`ErrorReply`]，所以先拿到
/// [`JsonRejection`] 再转换为 [`AppError`]。
///
/// 缺少 `content-type: application/json` 的请求体会被忽略，按 `{}` 处理，
/// 所以返回的是必填字段缺失的提示。
#[utoipa::path(post,
    path = "/projects",
    tag = "projects",
    request_body = ProjectCreate,
    responses(
        (status = 200, description = "Create project result", body = CreatedReply),
        (status = 400, description = "Missing title/description or malformed body", body = ErrorReply),
        (status = 500, description = "Storage failure", body = ErrorReply)
    )
)]
pub async fn create_project(
    State(state): State<AppState>,
    payload: Result<Json<ProjectCreate>, JsonRejection>,
) -> Result<Json<CreatedReply>, AppError> {
    let project = match payload {
        Ok(Json(project)) => project,
        // 没有json content-type时不解析请求体，按空对象处理，交给后面的必填校验
        Err(JsonRejection::MissingJsonContentType(_)) => ProjectCreate::default(),
        Err(rejection) => return Err(rejection.into()),
    };
    debug!("Creating project {:#?}", project);

    let id = state.project_service.create_project(project).await?;

    Ok(Json(CreatedReply {
        id,
        message: MSG_PROJECT_ADDED.to_string(),
    }))
}
