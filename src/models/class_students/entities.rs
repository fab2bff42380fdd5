use serde::{Deserialize, Serialize};

// 班级学生关联（名册记录）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassStudent {
    pub id: i64,
    pub class_id: i64,
    pub student_id: i64,
    pub joined_at: chrono::DateTime<chrono::Utc>,
}

// 名册条目：关联信息 + 学生基本信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterStudent {
    pub student_id: i64,
    pub name: String,
    pub email: String,
    pub enrollment_number: String,
    pub joined_at: chrono::DateTime<chrono::Utc>,
}
