//! 期末平均分查询
//!
//! 平均分是派生状态，只有查询接口；写入全部走成绩模块的
//! 事务重算路径。

use super::SeaOrmStorage;
use crate::entity::final_averages::{Column, Entity as FinalAverages};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginationInfo,
    averages::{
        entities::FinalAverage, requests::AverageListQuery, responses::AverageListResponse,
    },
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 获取某个 (student, subject) 组合的平均分
    pub async fn get_final_average_impl(
        &self,
        student_id: i64,
        subject_id: i64,
    ) -> Result<Option<FinalAverage>> {
        let result = FinalAverages::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::SubjectId.eq(subject_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询平均分失败: {e}")))?;

        Ok(result.map(|m| m.into_final_average()))
    }

    /// 分页列出平均分
    pub async fn list_final_averages_with_pagination_impl(
        &self,
        query: AverageListQuery,
    ) -> Result<AverageListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(20).clamp(1, 100) as u64;

        let mut select = FinalAverages::find();

        // 学生筛选
        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        // 学科筛选
        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }

        // 排序
        select = select.order_by_asc(Column::StudentId).order_by_asc(Column::SubjectId);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            SchoolSystemError::database_operation(format!("查询平均分总数失败: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            SchoolSystemError::database_operation(format!("查询平均分页数失败: {e}"))
        })?;

        let averages = paginator.fetch_page(page - 1).await.map_err(|e| {
            SchoolSystemError::database_operation(format!("查询平均分列表失败: {e}"))
        })?;

        Ok(AverageListResponse {
            items: averages
                .into_iter()
                .map(|m| m.into_final_average())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}
