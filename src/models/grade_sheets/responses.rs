use crate::models::marks::entities::Mark;
use crate::models::students::entities::Student;
use serde::Serialize;

// 成绩单行：名册上的一名学生及其该学科的全部成绩与平均分
#[derive(Debug, Serialize)]
pub struct GradeSheetRow {
    pub student: Student,
    pub marks: Vec<Mark>,
    // 尚无成绩时为空
    pub final_average: Option<f64>,
}

// 班级学科成绩单
#[derive(Debug, Serialize)]
pub struct GradeSheetResponse {
    pub class_id: i64,
    pub subject_id: i64,
    pub rows: Vec<GradeSheetRow>,
}
