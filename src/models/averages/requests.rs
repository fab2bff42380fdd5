use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;

// 平均分查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct AverageListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub student_id: Option<i64>,
    pub subject_id: Option<i64>,
}

// 平均分列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct AverageListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub student_id: Option<i64>,
    pub subject_id: Option<i64>,
}
