use serde::{Deserialize, Serialize};

/// 学科期末平均分（派生状态）
///
/// 每个 (student, subject) 组合至多一行，数值恒等于该组合
/// 全部成绩的算术平均，随成绩写入在同一事务内重算，不可直接编辑。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalAverage {
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub average: f64,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
