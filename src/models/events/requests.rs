use crate::models::common::pagination::PaginationQuery;
use chrono::{DateTime, Utc};
use serde::Deserialize;

// 创建事件请求
#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at: DateTime<Utc>, // ISO 8601 格式，如 "2025-10-02T09:00:00Z"
    pub ends_at: DateTime<Utc>,
}

// 更新事件请求
#[derive(Debug, Deserialize)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
}

// 事件查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct EventListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    // 过滤起止时间（含边界）
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

// 事件列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct EventListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}
