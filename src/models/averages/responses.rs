use super::entities::FinalAverage;
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 平均分列表响应
#[derive(Debug, Serialize)]
pub struct AverageListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<FinalAverage>,
}
