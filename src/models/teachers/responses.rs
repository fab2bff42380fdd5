use super::entities::Teacher;
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 教师列表响应
#[derive(Debug, Serialize)]
pub struct TeacherListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Teacher>,
}
