use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{TimetableService, handle_slot_write_error};
use crate::models::timetables::requests::UpdateTimetableSlotRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_weekday;

pub async fn update_timetable_slot(
    service: &TimetableService,
    request: &HttpRequest,
    slot_id: i64,
    update_data: UpdateTimetableSlotRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 字段校验：只校验提交的字段
    if let Some(weekday) = update_data.weekday
        && let Err(msg) = validate_weekday(weekday)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    if let (Some(starts_at), Some(ends_at)) = (update_data.starts_at, update_data.ends_at)
        && starts_at >= ends_at
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidTimeRange,
            "Slot must start before it ends",
        )));
    }

    // 更新条目（存储层合并新旧值后做冲突检测）
    match storage.update_timetable_slot(slot_id, update_data).await {
        Ok(Some(slot)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            slot,
            "Timetable slot updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TimetableSlotNotFound,
            "Timetable slot not found",
        ))),
        Err(e) => Ok(handle_slot_write_error(&e)),
    }
}
