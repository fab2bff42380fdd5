pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::SchoolSystemError;
use crate::models::timetables::requests::{
    CreateTimetableSlotRequest, TimetableListParams, UpdateTimetableSlotRequest,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub struct TimetableService {
    storage: Option<Arc<dyn Storage>>,
}

impl TimetableService {
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

    // 获取课程表列表
    pub async fn list_timetable_slots(
        &self,
        request: &HttpRequest,
        query: TimetableListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_timetable_slots(self, request, query).await
    }

    // 创建课程表条目
    pub async fn create_timetable_slot(
        &self,
        req: &HttpRequest,
        slot_data: CreateTimetableSlotRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_timetable_slot(self, req, slot_data).await
    }

    // 根据条目 ID 获取课程表条目
    pub async fn get_timetable_slot(
        &self,
        req: &HttpRequest,
        slot_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_timetable_slot(self, req, slot_id).await
    }

    // 更新课程表条目
    pub async fn update_timetable_slot(
        &self,
        req: &HttpRequest,
        slot_id: i64,
        update_data: UpdateTimetableSlotRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_timetable_slot(self, req, slot_id, update_data).await
    }

    // 删除课程表条目
    pub async fn delete_timetable_slot(
        &self,
        req: &HttpRequest,
        slot_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_timetable_slot(self, req, slot_id).await
    }
}

/// 写入错误映射辅助函数：调度冲突返回 409，其余归为内部错误
pub(crate) fn handle_slot_write_error(e: &SchoolSystemError) -> HttpResponse {
    match e {
        SchoolSystemError::SchedulingConflict(msg) => HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::TimetableConflict, msg.clone()),
        ),
        _ => HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            format!("课程表写入失败: {e}"),
        )),
    }
}
