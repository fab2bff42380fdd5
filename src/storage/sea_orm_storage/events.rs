//! 校历事件存储操作

use super::SeaOrmStorage;
use crate::entity::events::{ActiveModel, Column, Entity as Events};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginationInfo,
    events::{
        entities::Event,
        requests::{CreateEventRequest, EventListQuery, UpdateEventRequest},
        responses::EventListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建事件
    pub async fn create_event_impl(&self, req: CreateEventRequest) -> Result<Event> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            description: Set(req.description),
            location: Set(req.location),
            starts_at: Set(req.starts_at.timestamp()),
            ends_at: Set(req.ends_at.timestamp()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建事件失败: {e}")))?;

        Ok(result.into_event())
    }

    /// 通过 ID 获取事件
    pub async fn get_event_by_id_impl(&self, event_id: i64) -> Result<Option<Event>> {
        let result = Events::find_by_id(event_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询事件失败: {e}")))?;

        Ok(result.map(|m| m.into_event()))
    }

    /// 分页列出事件
    pub async fn list_events_with_pagination_impl(
        &self,
        query: EventListQuery,
    ) -> Result<EventListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Events::find();

        // 时间范围筛选（含边界）
        if let Some(from) = query.from {
            select = select.filter(Column::StartsAt.gte(from.timestamp()));
        }

        if let Some(to) = query.to {
            select = select.filter(Column::EndsAt.lte(to.timestamp()));
        }

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Title.contains(&escaped));
        }

        // 排序
        select = select.order_by_asc(Column::StartsAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询事件总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询事件页数失败: {e}")))?;

        let events = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询事件列表失败: {e}")))?;

        Ok(EventListResponse {
            items: events.into_iter().map(|m| m.into_event()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新事件
    pub async fn update_event_impl(
        &self,
        event_id: i64,
        update: UpdateEventRequest,
    ) -> Result<Option<Event>> {
        // 先检查事件是否存在
        let existing = self.get_event_by_id_impl(event_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(event_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(location) = update.location {
            model.location = Set(Some(location));
        }

        if let Some(starts_at) = update.starts_at {
            model.starts_at = Set(starts_at.timestamp());
        }

        if let Some(ends_at) = update.ends_at {
            model.ends_at = Set(ends_at.timestamp());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新事件失败: {e}")))?;

        self.get_event_by_id_impl(event_id).await
    }

    /// 删除事件
    pub async fn delete_event_impl(&self, event_id: i64) -> Result<bool> {
        let result = Events::delete_by_id(event_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除事件失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
