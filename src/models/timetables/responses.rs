use super::entities::TimetableSlot;
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 课程表列表响应
#[derive(Debug, Serialize)]
pub struct TimetableListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<TimetableSlot>,
}
