use super::entities::Subject;
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 学科列表响应
#[derive(Debug, Serialize)]
pub struct SubjectListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Subject>,
}
