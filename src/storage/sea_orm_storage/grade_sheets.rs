//! 成绩单组装
//!
//! 成绩单是读模型：名册上的每名学生配上其该学科的全部成绩
//! 与期末平均分，不落任何新表。

use super::SeaOrmStorage;
use crate::entity::class_students::{Column as ClassStudentColumn, Entity as ClassStudents};
use crate::entity::final_averages::{Column as FinalAverageColumn, Entity as FinalAverages};
use crate::entity::marks::{Column as MarkColumn, Entity as Marks};
use crate::entity::students::Entity as Students;
use crate::errors::{Result, SchoolSystemError};
use crate::models::grade_sheets::responses::{GradeSheetResponse, GradeSheetRow};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 组装班级学科成绩单
    pub async fn get_grade_sheet_impl(
        &self,
        class_id: i64,
        subject_id: i64,
    ) -> Result<GradeSheetResponse> {
        let roster = ClassStudents::find()
            .filter(ClassStudentColumn::ClassId.eq(class_id))
            .find_also_related(Students)
            .order_by_asc(crate::entity::students::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询名册失败: {e}")))?;

        let mut rows = Vec::with_capacity(roster.len());

        for (_, student) in roster {
            let Some(student) = student else {
                continue;
            };

            let marks = Marks::find()
                .filter(MarkColumn::StudentId.eq(student.id))
                .filter(MarkColumn::SubjectId.eq(subject_id))
                .order_by_asc(MarkColumn::AssessmentDate)
                .all(&self.db)
                .await
                .map_err(|e| {
                    SchoolSystemError::database_operation(format!("查询成绩失败: {e}"))
                })?;

            let average = FinalAverages::find()
                .filter(FinalAverageColumn::StudentId.eq(student.id))
                .filter(FinalAverageColumn::SubjectId.eq(subject_id))
                .one(&self.db)
                .await
                .map_err(|e| {
                    SchoolSystemError::database_operation(format!("查询平均分失败: {e}"))
                })?;

            rows.push(GradeSheetRow {
                student: student.into_student(),
                marks: marks.into_iter().map(|m| m.into_mark()).collect(),
                final_average: average.map(|a| a.average),
            });
        }

        Ok(GradeSheetResponse {
            class_id,
            subject_id,
            rows,
        })
    }
}
