//! 成绩存储操作
//!
//! 成绩的创建/更新/删除与对应 (student, subject) 组合的期末平均分
//! 重算放在同一个数据库事务中，保证并发写入下派生状态不丢更新。

use super::SeaOrmStorage;
use crate::entity::final_averages::{
    ActiveModel as FinalAverageActiveModel, Column as FinalAverageColumn,
    Entity as FinalAverages,
};
use crate::entity::marks::{ActiveModel, Column, Entity as Marks};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginationInfo,
    marks::{
        entities::Mark,
        requests::{MarkListQuery, RecordMarkRequest, UpdateMarkRequest},
        responses::MarkListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

/// 算术平均，不按评估类型加权
fn arithmetic_mean(grades: &[f64]) -> f64 {
    grades.iter().sum::<f64>() / grades.len() as f64
}

impl SeaOrmStorage {
    /// 登记成绩（事务内重算平均分）
    pub async fn create_mark_impl(&self, req: RecordMarkRequest) -> Result<Mark> {
        let now = chrono::Utc::now().timestamp();

        let txn = self.db.begin().await.map_err(|e| {
            SchoolSystemError::database_operation(format!("开启成绩事务失败: {e}"))
        })?;

        let model = ActiveModel {
            student_id: Set(req.student_id),
            subject_id: Set(req.subject_id),
            teacher_id: Set(req.teacher_id),
            assessment_type: Set(req.assessment_type),
            grade: Set(req.grade),
            assessment_date: Set(req.assessment_date),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&txn)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("登记成绩失败: {e}")))?;

        Self::recompute_final_average(&txn, req.student_id, req.subject_id, now).await?;

        txn.commit().await.map_err(|e| {
            SchoolSystemError::database_operation(format!("提交成绩事务失败: {e}"))
        })?;

        Ok(result.into_mark())
    }

    /// 通过 ID 获取成绩
    pub async fn get_mark_by_id_impl(&self, mark_id: i64) -> Result<Option<Mark>> {
        let result = Marks::find_by_id(mark_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(result.map(|m| m.into_mark()))
    }

    /// 分页列出成绩
    pub async fn list_marks_with_pagination_impl(
        &self,
        query: MarkListQuery,
    ) -> Result<MarkListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(20).clamp(1, 100) as u64;

        let mut select = Marks::find();

        // 学生筛选
        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        // 学科筛选
        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }

        // 教师筛选
        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        // 排序
        select = select.order_by_desc(Column::AssessmentDate);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询成绩总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询成绩页数失败: {e}")))?;

        let marks = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询成绩列表失败: {e}")))?;

        Ok(MarkListResponse {
            items: marks.into_iter().map(|m| m.into_mark()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新成绩（事务内重算平均分）
    ///
    /// student/subject/teacher 身份字段不可变更，只更新
    /// 评估类型、分数和评估日期。
    pub async fn update_mark_impl(
        &self,
        mark_id: i64,
        update: UpdateMarkRequest,
    ) -> Result<Option<Mark>> {
        let now = chrono::Utc::now().timestamp();

        let txn = self.db.begin().await.map_err(|e| {
            SchoolSystemError::database_operation(format!("开启成绩事务失败: {e}"))
        })?;

        // 先检查成绩是否存在，并取出身份字段用于重算
        let existing = Marks::find_by_id(mark_id)
            .one(&txn)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询成绩失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let (student_id, subject_id) = (existing.student_id, existing.subject_id);

        let mut model = ActiveModel {
            id: Set(mark_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(assessment_type) = update.assessment_type {
            model.assessment_type = Set(assessment_type);
        }

        if let Some(grade) = update.grade {
            model.grade = Set(grade);
        }

        if let Some(assessment_date) = update.assessment_date {
            model.assessment_date = Set(assessment_date);
        }

        model
            .update(&txn)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新成绩失败: {e}")))?;

        Self::recompute_final_average(&txn, student_id, subject_id, now).await?;

        let updated = Marks::find_by_id(mark_id)
            .one(&txn)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询成绩失败: {e}")))?;

        txn.commit().await.map_err(|e| {
            SchoolSystemError::database_operation(format!("提交成绩事务失败: {e}"))
        })?;

        Ok(updated.map(|m| m.into_mark()))
    }

    /// 删除成绩（事务内重算平均分）
    ///
    /// 删除组合最后一条成绩时，平均分行一并移除。
    pub async fn delete_mark_impl(&self, mark_id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let txn = self.db.begin().await.map_err(|e| {
            SchoolSystemError::database_operation(format!("开启成绩事务失败: {e}"))
        })?;

        let existing = Marks::find_by_id(mark_id)
            .one(&txn)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询成绩失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(false);
        };

        let (student_id, subject_id) = (existing.student_id, existing.subject_id);

        Marks::delete_by_id(mark_id)
            .exec(&txn)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除成绩失败: {e}")))?;

        Self::recompute_final_average(&txn, student_id, subject_id, now).await?;

        txn.commit().await.map_err(|e| {
            SchoolSystemError::database_operation(format!("提交成绩事务失败: {e}"))
        })?;

        Ok(true)
    }

    /// 重算某个 (student, subject) 组合的期末平均分
    ///
    /// 取该组合全部成绩的算术平均并落盘：有成绩则插入或更新，
    /// 没有成绩则删除平均分行。幂等，可在任意连接/事务上执行。
    pub(crate) async fn recompute_final_average<C: ConnectionTrait>(
        conn: &C,
        student_id: i64,
        subject_id: i64,
        now: i64,
    ) -> Result<()> {
        let grades: Vec<f64> = Marks::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::SubjectId.eq(subject_id))
            .all(conn)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询成绩失败: {e}")))?
            .into_iter()
            .map(|m| m.grade)
            .collect();

        let existing = FinalAverages::find()
            .filter(FinalAverageColumn::StudentId.eq(student_id))
            .filter(FinalAverageColumn::SubjectId.eq(subject_id))
            .one(conn)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询平均分失败: {e}")))?;

        if grades.is_empty() {
            if let Some(row) = existing {
                FinalAverages::delete_by_id(row.id)
                    .exec(conn)
                    .await
                    .map_err(|e| {
                        SchoolSystemError::database_operation(format!("删除平均分失败: {e}"))
                    })?;
            }
            return Ok(());
        }

        let average = arithmetic_mean(&grades);

        match existing {
            Some(row) => {
                let mut model: FinalAverageActiveModel = row.into();
                model.average = Set(average);
                model.updated_at = Set(now);
                model.update(conn).await.map_err(|e| {
                    SchoolSystemError::database_operation(format!("更新平均分失败: {e}"))
                })?;
            }
            None => {
                let model = FinalAverageActiveModel {
                    student_id: Set(student_id),
                    subject_id: Set(subject_id),
                    average: Set(average),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model.insert(conn).await.map_err(|e| {
                    SchoolSystemError::database_operation(format!("创建平均分失败: {e}"))
                })?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::arithmetic_mean;

    #[test]
    fn test_mean_of_three_marks() {
        assert_eq!(arithmetic_mean(&[12.0, 14.0, 16.0]), 14.0);
    }

    #[test]
    fn test_mean_after_update() {
        // 第二条成绩从 14 改为 18
        let avg = arithmetic_mean(&[12.0, 18.0, 16.0]);
        assert!((avg - 46.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_mean_single_mark() {
        assert_eq!(arithmetic_mean(&[17.5]), 17.5);
    }

    #[test]
    fn test_mean_is_unweighted() {
        // 不同评估类型的分数权重一致
        assert_eq!(arithmetic_mean(&[10.0, 20.0]), 15.0);
    }
}
