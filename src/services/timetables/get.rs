use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TimetableService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_timetable_slot(
    service: &TimetableService,
    request: &HttpRequest,
    slot_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_timetable_slot_by_id(slot_id).await {
        Ok(Some(slot)) => Ok(HttpResponse::Ok().json(ApiResponse::success(slot, "查询成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TimetableSlotNotFound,
            "Timetable slot not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询课程表条目失败: {e}"),
            )),
        ),
    }
}
