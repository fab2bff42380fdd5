use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;

// 名册查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct RosterQueryParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
}

// 名册列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct RosterListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
}
