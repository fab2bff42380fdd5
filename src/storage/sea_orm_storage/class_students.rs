//! 班级名册存储操作

use super::SeaOrmStorage;
use crate::entity::class_students::{ActiveModel, Column, Entity as ClassStudents};
use crate::entity::students::Entity as Students;
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginationInfo,
    class_students::{
        entities::{ClassStudent, RosterStudent},
        requests::RosterListQuery,
        responses::RosterListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 学生加入班级
    ///
    /// 名册的 (class_id, student_id) 组合有唯一索引，重复加入
    /// 会以 UNIQUE 约束错误返回。
    pub async fn add_student_to_class_impl(
        &self,
        class_id: i64,
        student_id: i64,
    ) -> Result<ClassStudent> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(class_id),
            student_id: Set(student_id),
            joined_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("加入班级失败: {e}")))?;

        Ok(result.into_class_student())
    }

    /// 学生移出班级
    pub async fn remove_student_from_class_impl(
        &self,
        class_id: i64,
        student_id: i64,
    ) -> Result<bool> {
        let result = ClassStudents::delete_many()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::StudentId.eq(student_id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("移出班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 获取名册记录
    pub async fn get_class_student_impl(
        &self,
        class_id: i64,
        student_id: i64,
    ) -> Result<Option<ClassStudent>> {
        let result = ClassStudents::find()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询名册失败: {e}")))?;

        Ok(result.map(|m| m.into_class_student()))
    }

    /// 分页列出班级名册
    pub async fn list_class_students_with_pagination_impl(
        &self,
        class_id: i64,
        query: RosterListQuery,
    ) -> Result<RosterListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let select = ClassStudents::find()
            .filter(Column::ClassId.eq(class_id))
            .find_also_related(Students)
            .order_by_asc(crate::entity::students::Column::Name);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询名册总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询名册页数失败: {e}")))?;

        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询名册失败: {e}")))?;

        let items = rows
            .into_iter()
            .filter_map(|(link, student)| {
                student.map(|s| RosterStudent {
                    student_id: s.id,
                    name: s.name,
                    email: s.email,
                    enrollment_number: s.enrollment_number,
                    joined_at: chrono::DateTime::from_timestamp(link.joined_at, 0)
                        .unwrap_or_default(),
                })
            })
            .collect();

        Ok(RosterListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}
