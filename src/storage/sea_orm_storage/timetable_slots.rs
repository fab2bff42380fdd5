//! 课程表存储操作
//!
//! 创建/更新条目前先在同一事务内做冲突检测：同一天时间段重叠、
//! 且共用班级或教师的条目会被拒绝。

use super::SeaOrmStorage;
use crate::entity::timetable_slots::{ActiveModel, Column, Entity as TimetableSlots};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginationInfo,
    timetables::{
        entities::{TimetableSlot, time_ranges_overlap},
        requests::{CreateTimetableSlotRequest, TimetableListQuery, UpdateTimetableSlotRequest},
        responses::TimetableListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建课程表条目（带冲突检测）
    pub async fn create_timetable_slot_impl(
        &self,
        req: CreateTimetableSlotRequest,
    ) -> Result<TimetableSlot> {
        let now = chrono::Utc::now().timestamp();

        let txn = self.db.begin().await.map_err(|e| {
            SchoolSystemError::database_operation(format!("开启课程表事务失败: {e}"))
        })?;

        Self::ensure_no_conflict(
            &txn,
            None,
            req.class_id,
            req.teacher_id,
            req.weekday,
            req.starts_at,
            req.ends_at,
        )
        .await?;

        let model = ActiveModel {
            class_id: Set(req.class_id),
            subject_id: Set(req.subject_id),
            teacher_id: Set(req.teacher_id),
            weekday: Set(req.weekday),
            starts_at: Set(req.starts_at),
            ends_at: Set(req.ends_at),
            room: Set(req.room),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&txn).await.map_err(|e| {
            SchoolSystemError::database_operation(format!("创建课程表条目失败: {e}"))
        })?;

        txn.commit().await.map_err(|e| {
            SchoolSystemError::database_operation(format!("提交课程表事务失败: {e}"))
        })?;

        Ok(result.into_timetable_slot())
    }

    /// 通过 ID 获取课程表条目
    pub async fn get_timetable_slot_by_id_impl(
        &self,
        slot_id: i64,
    ) -> Result<Option<TimetableSlot>> {
        let result = TimetableSlots::find_by_id(slot_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                SchoolSystemError::database_operation(format!("查询课程表条目失败: {e}"))
            })?;

        Ok(result.map(|m| m.into_timetable_slot()))
    }

    /// 分页列出课程表条目
    pub async fn list_timetable_slots_with_pagination_impl(
        &self,
        query: TimetableListQuery,
    ) -> Result<TimetableListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(20).clamp(1, 100) as u64;

        let mut select = TimetableSlots::find();

        // 班级筛选
        if let Some(class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        // 教师筛选
        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        // 星期筛选
        if let Some(weekday) = query.weekday {
            select = select.filter(Column::Weekday.eq(weekday));
        }

        // 排序
        select = select
            .order_by_asc(Column::Weekday)
            .order_by_asc(Column::StartsAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            SchoolSystemError::database_operation(format!("查询课程表总数失败: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            SchoolSystemError::database_operation(format!("查询课程表页数失败: {e}"))
        })?;

        let slots = paginator.fetch_page(page - 1).await.map_err(|e| {
            SchoolSystemError::database_operation(format!("查询课程表列表失败: {e}"))
        })?;

        Ok(TimetableListResponse {
            items: slots.into_iter().map(|m| m.into_timetable_slot()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新课程表条目（带冲突检测）
    pub async fn update_timetable_slot_impl(
        &self,
        slot_id: i64,
        update: UpdateTimetableSlotRequest,
    ) -> Result<Option<TimetableSlot>> {
        let now = chrono::Utc::now().timestamp();

        let txn = self.db.begin().await.map_err(|e| {
            SchoolSystemError::database_operation(format!("开启课程表事务失败: {e}"))
        })?;

        let existing = TimetableSlots::find_by_id(slot_id)
            .one(&txn)
            .await
            .map_err(|e| {
                SchoolSystemError::database_operation(format!("查询课程表条目失败: {e}"))
            })?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        // 合并更新后的值用于冲突检测
        let teacher_id = update.teacher_id.unwrap_or(existing.teacher_id);
        let weekday = update.weekday.unwrap_or(existing.weekday);
        let starts_at = update.starts_at.unwrap_or(existing.starts_at);
        let ends_at = update.ends_at.unwrap_or(existing.ends_at);

        Self::ensure_no_conflict(
            &txn,
            Some(slot_id),
            existing.class_id,
            teacher_id,
            weekday,
            starts_at,
            ends_at,
        )
        .await?;

        let mut model = ActiveModel {
            id: Set(slot_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(subject_id) = update.subject_id {
            model.subject_id = Set(subject_id);
        }

        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(teacher_id);
        }

        if let Some(weekday) = update.weekday {
            model.weekday = Set(weekday);
        }

        if let Some(starts_at) = update.starts_at {
            model.starts_at = Set(starts_at);
        }

        if let Some(ends_at) = update.ends_at {
            model.ends_at = Set(ends_at);
        }

        if let Some(room) = update.room {
            model.room = Set(Some(room));
        }

        model.update(&txn).await.map_err(|e| {
            SchoolSystemError::database_operation(format!("更新课程表条目失败: {e}"))
        })?;

        let updated = TimetableSlots::find_by_id(slot_id)
            .one(&txn)
            .await
            .map_err(|e| {
                SchoolSystemError::database_operation(format!("查询课程表条目失败: {e}"))
            })?;

        txn.commit().await.map_err(|e| {
            SchoolSystemError::database_operation(format!("提交课程表事务失败: {e}"))
        })?;

        Ok(updated.map(|m| m.into_timetable_slot()))
    }

    /// 删除课程表条目
    pub async fn delete_timetable_slot_impl(&self, slot_id: i64) -> Result<bool> {
        let result = TimetableSlots::delete_by_id(slot_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                SchoolSystemError::database_operation(format!("删除课程表条目失败: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    /// 冲突检测：查出同一天共用班级或教师的候选条目，再比对时间段
    async fn ensure_no_conflict<C: ConnectionTrait>(
        conn: &C,
        exclude_id: Option<i64>,
        class_id: i64,
        teacher_id: i64,
        weekday: i32,
        starts_at: chrono::NaiveTime,
        ends_at: chrono::NaiveTime,
    ) -> Result<()> {
        let mut select = TimetableSlots::find()
            .filter(Column::Weekday.eq(weekday))
            .filter(
                Condition::any()
                    .add(Column::ClassId.eq(class_id))
                    .add(Column::TeacherId.eq(teacher_id)),
            );

        if let Some(id) = exclude_id {
            select = select.filter(Column::Id.ne(id));
        }

        let candidates = select.all(conn).await.map_err(|e| {
            SchoolSystemError::database_operation(format!("查询课程表冲突失败: {e}"))
        })?;

        for other in candidates {
            if time_ranges_overlap(starts_at, ends_at, other.starts_at, other.ends_at) {
                return Err(SchoolSystemError::scheduling_conflict(format!(
                    "Slot overlaps with slot {} ({} - {})",
                    other.id, other.starts_at, other.ends_at
                )));
            }
        }

        Ok(())
    }
}
