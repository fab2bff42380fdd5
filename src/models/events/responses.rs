use super::entities::Event;
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 事件列表响应
#[derive(Debug, Serialize)]
pub struct EventListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Event>,
}
