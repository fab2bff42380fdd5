use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{TimetableService, handle_slot_write_error};
use crate::models::timetables::requests::CreateTimetableSlotRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::validate::validate_weekday;

pub async fn create_timetable_slot(
    service: &TimetableService,
    request: &HttpRequest,
    slot_data: CreateTimetableSlotRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 字段校验
    if let Err(msg) = validate_weekday(slot_data.weekday) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    if slot_data.starts_at >= slot_data.ends_at {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidTimeRange,
            "Slot must start before it ends",
        )));
    }

    // 关联实体校验
    if let Err(resp) = check_slot_references(
        &storage,
        slot_data.class_id,
        slot_data.subject_id,
        slot_data.teacher_id,
    )
    .await
    {
        return Ok(resp);
    }

    // 创建条目（存储层在事务内做冲突检测）
    match storage.create_timetable_slot(slot_data).await {
        Ok(slot) => {
            info!("Timetable slot {} created successfully", slot.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                slot,
                "Timetable slot created successfully",
            )))
        }
        Err(e) => Ok(handle_slot_write_error(&e)),
    }
}

/// 校验班级、学科、教师存在的辅助函数
pub(super) async fn check_slot_references(
    storage: &Arc<dyn Storage>,
    class_id: i64,
    subject_id: i64,
    teacher_id: i64,
) -> Result<(), HttpResponse> {
    match storage.get_class_by_id(class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "Class not found",
            )));
        }
        Err(e) => {
            error!("Failed to get class by id: {}", e);
            return Err(internal_reference_error());
        }
    }

    match storage.get_subject_by_id(subject_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubjectNotFound,
                "Subject not found",
            )));
        }
        Err(e) => {
            error!("Failed to get subject by id: {}", e);
            return Err(internal_reference_error());
        }
    }

    match storage.get_teacher_by_id(teacher_id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherNotFound,
            "Teacher not found",
        ))),
        Err(e) => {
            error!("Failed to get teacher by id: {}", e);
            Err(internal_reference_error())
        }
    }
}

fn internal_reference_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        "Internal server error while checking slot references",
    ))
}
