use serde::{Deserialize, Serialize};

/// 成绩记录
///
/// student/subject/teacher 三元组在创建后不可变更，
/// 可变的只有评估类型、分数和评估日期。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mark {
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub teacher_id: i64,
    // 评估类型（自由文本标签，如 "Teste 1"、"Exame final"）
    pub assessment_type: String,
    // 分数，0-20 分制
    pub grade: f64,
    // 评估日期
    pub assessment_date: chrono::NaiveDate,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
