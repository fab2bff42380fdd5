use super::entities::Mark;
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 成绩列表响应
#[derive(Debug, Serialize)]
pub struct MarkListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Mark>,
}
