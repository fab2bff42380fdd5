use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;

// 创建学科请求
#[derive(Debug, Deserialize)]
pub struct CreateSubjectRequest {
    pub name: String,
    pub description: Option<String>,
    pub workload_hours: Option<i32>,
}

// 更新学科请求
#[derive(Debug, Deserialize)]
pub struct UpdateSubjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub workload_hours: Option<i32>,
}

// 学科查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct SubjectQueryParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 学科列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct SubjectListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}
