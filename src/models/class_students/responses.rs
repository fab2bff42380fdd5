use super::entities::RosterStudent;
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 班级名册响应
#[derive(Debug, Serialize)]
pub struct RosterListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<RosterStudent>,
}
