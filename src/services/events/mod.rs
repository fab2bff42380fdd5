pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::events::requests::{CreateEventRequest, EventListParams, UpdateEventRequest};
use crate::storage::Storage;

pub struct EventService {
    storage: Option<Arc<dyn Storage>>,
}

impl EventService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取事件列表
    pub async fn list_events(
        &self,
        request: &HttpRequest,
        query: EventListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_events(self, request, query).await
    }

    // 创建事件
    pub async fn create_event(
        &self,
        req: &HttpRequest,
        event_data: CreateEventRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_event(self, req, event_data).await
    }

    // 根据事件 ID 获取事件
    pub async fn get_event(&self, req: &HttpRequest, event_id: i64) -> ActixResult<HttpResponse> {
        get::get_event(self, req, event_id).await
    }

    // 更新事件
    pub async fn update_event(
        &self,
        req: &HttpRequest,
        event_id: i64,
        update_data: UpdateEventRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_event(self, req, event_id, update_data).await
    }

    // 删除事件
    pub async fn delete_event(
        &self,
        req: &HttpRequest,
        event_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_event(self, req, event_id).await
    }
}
