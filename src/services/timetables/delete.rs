use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::TimetableService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_timetable_slot(
    service: &TimetableService,
    request: &HttpRequest,
    slot_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_timetable_slot(slot_id).await {
        Ok(true) => {
            info!("Timetable slot {} deleted successfully", slot_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Timetable slot deleted successfully",
            )))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TimetableSlotNotFound,
            "Timetable slot not found",
        ))),
        Err(e) => {
            error!("Failed to delete timetable slot {}: {}", slot_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("删除课程表条目失败: {e}"),
                )),
            )
        }
    }
}
