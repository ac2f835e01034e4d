use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 新建项目的请求参数
///
/// - `title` / `description` 必填且不能为空字符串
/// - 其余字段可选，缺省时保存为空字符串
#[derive(Deserialize, Debug, Default, ToSchema, Validate)]
pub struct ProjectCreate {
    #[schema(example = "Shop")]
    #[validate(required, length(min = 1))]
    /// 项目标题
    pub title: Option<String>,

    #[schema(example = "An online store")]
    #[validate(required, length(min = 1))]
    /// 项目描述
    pub description: Option<String>,

    #[schema(example = "https://example.com/shop.png")]
    /// 封面图片地址
    pub image_url: Option<String>,

    #[schema(example = "react,node")]
    /// 逗号分隔的标签
    pub tags: Option<String>,

    #[schema(example = "https://github.com/me/shop")]
    /// 项目链接
    pub project_url: Option<String>,
}

/// 校验通过之后才会调用，必填字段此时一定有值
impl From<ProjectCreate> for database::ProjectCreate {
    fn from(project: ProjectCreate) -> Self {
        Self {
            title: project.title.unwrap_or_default(),
            description: project.description.unwrap_or_default(),
            image_url: project.image_url,
            tags: project.tags,
            project_url: project.project_url,
        }
    }
}

#[derive(Deserialize, Debug, ToSchema, Serialize, PartialEq)]
pub struct ProjectInfo {
    #[schema(example = 1)]
    /// 项目ID
    pub id: i64,

    #[schema(example = "Shop")]
    pub title: String,

    #[schema(example = "An online store")]
    pub description: String,

    #[schema(example = "")]
    pub image_url: String,

    #[schema(example = "react,node")]
    /// 逗号分隔的标签
    pub tags: String,

    #[schema(example = "")]
    pub project_url: String,

    /// 创建时间（UTC）
    pub created_at: NaiveDateTime,
}

impl From<database::ProjectInfo> for ProjectInfo {
    fn from(project: database::ProjectInfo) -> Self {
        Self {
            id: project.id,
            title: project.title,
            description: project.description,
            image_url: project.image_url,
            tags: project.tags,
            project_url: project.project_url,
            created_at: project.created_at,
        }
    }
}
